//! Android activity runner
//!
//! Services the native activity lifecycle: runs the one-time module
//! bootstrap before anything else, then polls lifecycle events until the
//! activity is destroyed, reasserting immersive mode on every focus gain.

#[cfg(target_os = "android")]
use std::time::Duration;

#[cfg(target_os = "android")]
use android_activity::{AndroidApp, MainEvent, PollEvent};

#[cfg(not(target_os = "android"))]
use onyx_platform::PlatformError;
#[cfg(target_os = "android")]
use onyx_platform::ImmersiveMode;
use onyx_platform::Result;

#[cfg(target_os = "android")]
use crate::system_ui::ActivityWindow;

/// Initialize Android logging
#[cfg(target_os = "android")]
fn init_logging() {
    // No fixed tag: the record target becomes the logcat tag, so the
    // bootstrap diagnostics surface under "Initialization".
    android_logger::init_once(
        android_logger::Config::default().with_max_level(log::LevelFilter::Debug),
    );
}

/// Run the testbed activity shell.
///
/// This is the body of `android_main`. The native module bootstrap runs
/// first and a failure aborts startup - no lifecycle event is serviced
/// against an unloaded engine. Everything here executes on the activity's
/// main dispatch thread.
#[cfg(target_os = "android")]
pub fn run(app: AndroidApp) -> Result<()> {
    init_logging();
    tracing::info!("Testbed shell starting");

    onyx_platform::load_startup_modules()?;

    let immersive = ImmersiveMode::new();
    let mut window = ActivityWindow::new(app.clone());
    let mut focused = false;
    let mut running = true;

    tracing::info!("Entering Android event loop");

    while running {
        app.poll_events(Some(Duration::from_millis(16)), |event| {
            if let PollEvent::Main(main_event) = event {
                match main_event {
                    MainEvent::InitWindow { .. } => {
                        if let Some(native_window) = app.native_window() {
                            tracing::info!(
                                "Native window initialized: {}x{}",
                                native_window.width(),
                                native_window.height()
                            );
                        }
                    }

                    MainEvent::TerminateWindow { .. } => {
                        tracing::info!("Native window terminated");
                    }

                    MainEvent::GainedFocus => {
                        tracing::info!("App gained focus");
                        focused = true;
                        if let Err(e) = immersive.window_focus_changed(&mut window, focused) {
                            tracing::error!("Failed to apply immersive mode: {}", e);
                        }
                    }

                    MainEvent::LostFocus => {
                        tracing::info!("App lost focus");
                        focused = false;
                        // No-op for the controller; the OS may show system
                        // bars until the next focus gain re-suppresses them.
                        let _ = immersive.window_focus_changed(&mut window, focused);
                    }

                    MainEvent::Resume { .. } => {
                        tracing::info!("App resumed");
                    }

                    MainEvent::Pause => {
                        tracing::info!("App paused");
                    }

                    MainEvent::LowMemory => {
                        tracing::warn!("Low memory warning");
                    }

                    MainEvent::Destroy => {
                        tracing::info!("App destroyed");
                        running = false;
                    }

                    _ => {}
                }
            }
        });
    }

    tracing::info!("Testbed shell exiting");
    Ok(())
}

/// Stub for non-Android hosts (cross-compilation checks).
#[cfg(not(target_os = "android"))]
pub fn run() -> Result<()> {
    Err(PlatformError::Unsupported(
        "the activity shell only runs on Android".to_string(),
    ))
}
