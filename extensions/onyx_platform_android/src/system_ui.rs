//! System UI control over JNI
//!
//! The shell ships no Java code; the immersive flag set reaches the live
//! decor view through the activity's JNI surface.

use onyx_platform::{PlatformError, Result, SystemUiFlags, WindowChrome};

#[cfg(target_os = "android")]
use android_activity::AndroidApp;
#[cfg(target_os = "android")]
use jni::objects::{JObject, JValue};
#[cfg(target_os = "android")]
use jni::JavaVM;

/// Window decoration handle for the live activity.
pub struct ActivityWindow {
    #[cfg(target_os = "android")]
    app: AndroidApp,
}

#[cfg(target_os = "android")]
impl ActivityWindow {
    pub fn new(app: AndroidApp) -> Self {
        Self { app }
    }
}

#[cfg(target_os = "android")]
impl WindowChrome for ActivityWindow {
    /// Walks `activity.getWindow().getDecorView().setSystemUiVisibility()`.
    /// No other window property is touched.
    fn set_system_ui_visibility(&mut self, flags: SystemUiFlags) -> Result<()> {
        let vm = unsafe { JavaVM::from_raw(self.app.vm_as_ptr().cast()) }.map_err(jni_err)?;
        let mut env = vm.attach_current_thread().map_err(jni_err)?;

        // Safety: the activity object outlives the event loop this is
        // called from.
        let activity = unsafe { JObject::from_raw(self.app.activity_as_ptr().cast()) };

        let window = env
            .call_method(&activity, "getWindow", "()Landroid/view/Window;", &[])
            .and_then(|v| v.l())
            .map_err(jni_err)?;

        let decor_view = env
            .call_method(&window, "getDecorView", "()Landroid/view/View;", &[])
            .and_then(|v| v.l())
            .map_err(jni_err)?;

        env.call_method(
            &decor_view,
            "setSystemUiVisibility",
            "(I)V",
            &[JValue::Int(flags.bits() as i32)],
        )
        .map_err(jni_err)?;

        Ok(())
    }
}

#[cfg(target_os = "android")]
fn jni_err(e: jni::errors::Error) -> PlatformError {
    PlatformError::SystemUi(e.to_string())
}

// Stub implementation for non-Android builds (for cross-compilation checks)
#[cfg(not(target_os = "android"))]
impl ActivityWindow {
    /// Create a placeholder handle (fails on use off-Android)
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(not(target_os = "android"))]
impl WindowChrome for ActivityWindow {
    fn set_system_ui_visibility(&mut self, _flags: SystemUiFlags) -> Result<()> {
        Err(PlatformError::Unsupported(
            "System UI control only available on Android".to_string(),
        ))
    }
}

#[cfg(all(test, not(target_os = "android")))]
mod tests {
    use super::*;

    #[test]
    fn host_stub_reports_unsupported() {
        let mut window = ActivityWindow::new();
        let err = window
            .set_system_ui_visibility(SystemUiFlags::immersive_sticky_set())
            .unwrap_err();
        assert!(matches!(err, PlatformError::Unsupported(_)));
    }
}
