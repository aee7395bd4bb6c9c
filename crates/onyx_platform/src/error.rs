//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The platform loader rejected a required native module
    #[error("Failed to load native module '{name}': {reason}")]
    ModuleLoad { name: String, reason: String },

    /// Module name is empty or not mappable to a library file name
    #[error("Invalid native module name: {0:?}")]
    InvalidModuleName(String),

    /// System UI visibility update failed
    #[error("System UI update failed: {0}")]
    SystemUi(String),

    /// Operation not supported on this OS
    #[error("Platform not supported: {0}")]
    Unsupported(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
