//! Native module bootstrap
//!
//! The engine core ships as a platform shared library that must be resident
//! before the host makes any native call. Loading happens once per process
//! from the designated startup path; a rejected module is a packaging
//! defect and aborts startup instead of leaving a null-capability state.

use std::sync::OnceLock;

use libloading::Library;
use tracing::{debug, error};

use crate::error::{PlatformError, Result};

/// Symbolic name of the engine core module (`"Testbed"` -> `libTestbed.so`).
pub const ENGINE_MODULE: &str = "Testbed";

/// The engine core module. Resident for the life of the process once loaded.
pub static ENGINE: NativeModule = NativeModule::new(ENGINE_MODULE);

/// Modules that must be resident before the activity becomes usable.
static STARTUP_MODULES: [&NativeModule; 1] = [&ENGINE];

/// A named native module with load-once process lifetime.
///
/// The load state lives in a [`OnceLock`], so at most one platform load
/// attempt happens per module regardless of how many activity instances the
/// host constructs. A loaded module is never unloaded or reloaded.
pub struct NativeModule {
    name: &'static str,
    state: OnceLock<std::result::Result<Library, PlatformError>>,
}

impl NativeModule {
    /// Declare a module by its symbolic name. No load happens here.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            state: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// True once a load attempt has succeeded.
    pub fn is_loaded(&self) -> bool {
        matches!(self.state.get(), Some(Ok(_)))
    }

    /// Load the module if it is not already resident.
    ///
    /// Idempotent. A failed attempt is sticky: later calls report the same
    /// error without a new platform attempt.
    pub fn ensure_loaded(&self) -> Result<()> {
        match self.state.get_or_init(|| open_module(self.name)) {
            Ok(_) => Ok(()),
            Err(e) => Err(e.clone()),
        }
    }
}

impl std::fmt::Debug for NativeModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeModule")
            .field("name", &self.name)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

/// Map a symbolic module name to the platform library file name.
pub fn module_filename(name: &str) -> String {
    format!(
        "{}{}{}",
        std::env::consts::DLL_PREFIX,
        name,
        std::env::consts::DLL_SUFFIX
    )
}

fn open_module(name: &str) -> std::result::Result<Library, PlatformError> {
    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(PlatformError::InvalidModuleName(name.to_string()));
    }

    let filename = module_filename(name);

    // Safety: loading runs the module's initializers. The engine modules are
    // plain shared libraries without unsound load-time side effects.
    match unsafe { Library::new(&filename) } {
        Ok(library) => Ok(library),
        Err(e) => Err(PlatformError::ModuleLoad {
            name: name.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Load every module the engine requires at startup.
///
/// This is the single designated startup path; the host entry point calls
/// it before any lifecycle event is serviced. On failure the diagnostic is
/// logged and the error propagates - the caller treats it as fatal, and the
/// activity must never become usable with a module absent.
pub fn load_startup_modules() -> Result<()> {
    debug!(target: "Initialization", "Loading libraries...");

    for module in STARTUP_MODULES {
        if let Err(e) = module.ensure_loaded() {
            error!(target: "Initialization", "{}", e);
            return Err(e);
        }
    }

    debug!(target: "Initialization", "Finished loading libraries");
    Ok(())
}
