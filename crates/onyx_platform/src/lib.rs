//! Platform abstraction for the Onyx testbed shell
//!
//! The host runtime owns the activity lifecycle; this crate supplies the
//! two entry points the shell contributes: the one-time native module
//! bootstrap and the focus-driven immersive display controller.

pub mod display;
pub mod error;
pub mod module;

pub use display::{ImmersiveMode, SystemUiFlags, WindowChrome};
pub use error::{PlatformError, Result};
pub use module::{load_startup_modules, module_filename, NativeModule, ENGINE_MODULE};
