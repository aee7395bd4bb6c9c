//! Onyx Android Platform
//!
//! Native Activity integration and JNI bridge for the testbed shell.

pub mod activity;
pub mod system_ui;

pub use activity::run;
pub use system_ui::ActivityWindow;
