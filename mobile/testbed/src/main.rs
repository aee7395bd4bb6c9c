//! Onyx testbed shell
//!
//! Process entry points for the engine testbed. The engine itself lives in
//! the `Testbed` native module; this shell bootstraps it and keeps the
//! display immersive while the app holds focus.

// =============================================================================
// Android Entry Point
// =============================================================================

#[cfg(target_os = "android")]
use android_activity::AndroidApp;

#[cfg(target_os = "android")]
#[no_mangle]
fn android_main(app: AndroidApp) {
    onyx_platform_android::run(app).expect("Failed to run the testbed shell");
}

// Dummy main for Android (required by Rust but not used)
#[cfg(target_os = "android")]
fn main() {}

// =============================================================================
// Desktop Entry Point
// =============================================================================

// There is no windowing shell off-device; the desktop entry only exercises
// the startup path as a packaging smoke check.
#[cfg(not(target_os = "android"))]
fn main() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    if let Err(e) = onyx_platform::load_startup_modules() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }

    tracing::info!("Engine modules resident");
}
