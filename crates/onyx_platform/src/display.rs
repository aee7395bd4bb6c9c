//! Focus-driven display control
//!
//! Keeps the testbed chrome-free whenever it is the focused, interactive
//! surface. The host owns the focus state; this module only reacts to the
//! transition into focus. While unfocused the OS may transiently show the
//! system bars - they are re-suppressed on the next focus gain.

use bitflags::bitflags;

use crate::error::Result;

bitflags! {
    /// System UI visibility flags, matching the Android `View` constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SystemUiFlags: u32 {
        const HIDE_NAVIGATION        = 0x0000_0002;
        const FULLSCREEN             = 0x0000_0004;
        const LAYOUT_STABLE          = 0x0000_0100;
        const LAYOUT_HIDE_NAVIGATION = 0x0000_0200;
        const LAYOUT_FULLSCREEN      = 0x0000_0400;
        const IMMERSIVE_STICKY       = 0x0000_1000;
    }
}

impl SystemUiFlags {
    /// The complete immersive set: sticky immersive behavior, stable layout,
    /// hidden navigation and status bars, full-screen layout. Always applied
    /// as a whole; partial application is not a supported state.
    pub const fn immersive_sticky_set() -> Self {
        Self::IMMERSIVE_STICKY
            .union(Self::LAYOUT_STABLE)
            .union(Self::LAYOUT_HIDE_NAVIGATION)
            .union(Self::LAYOUT_FULLSCREEN)
            .union(Self::HIDE_NAVIGATION)
            .union(Self::FULLSCREEN)
    }
}

/// Mutable view over the live window decoration.
///
/// The Android extension forwards to the activity's decor view over JNI;
/// tests substitute an in-memory window.
pub trait WindowChrome {
    fn set_system_ui_visibility(&mut self, flags: SystemUiFlags) -> Result<()>;
}

/// Applies the immersive flag set on every focus gain.
///
/// Stateless: the flag set is fixed configuration, written imperatively to
/// the window each time focus is (re)gained, never cached against it.
#[derive(Debug, Clone, Copy)]
pub struct ImmersiveMode {
    flags: SystemUiFlags,
}

impl ImmersiveMode {
    pub fn new() -> Self {
        Self {
            flags: SystemUiFlags::immersive_sticky_set(),
        }
    }

    pub fn flags(&self) -> SystemUiFlags {
        self.flags
    }

    /// Focus-change hook, invoked after the host has run its own
    /// bookkeeping for the event. Focus gain writes the full flag set to
    /// the window; focus loss is intentionally a no-op.
    pub fn window_focus_changed<W: WindowChrome>(
        &self,
        window: &mut W,
        has_focus: bool,
    ) -> Result<()> {
        if !has_focus {
            return Ok(());
        }
        window.set_system_ui_visibility(self.flags)
    }
}

impl Default for ImmersiveMode {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeWindow {
        visibility: Option<SystemUiFlags>,
        writes: usize,
    }

    impl WindowChrome for FakeWindow {
        fn set_system_ui_visibility(&mut self, flags: SystemUiFlags) -> Result<()> {
            self.visibility = Some(flags);
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn immersive_set_contains_all_six_flags() {
        let flags = SystemUiFlags::immersive_sticky_set();
        assert!(flags.contains(SystemUiFlags::IMMERSIVE_STICKY));
        assert!(flags.contains(SystemUiFlags::LAYOUT_STABLE));
        assert!(flags.contains(SystemUiFlags::LAYOUT_HIDE_NAVIGATION));
        assert!(flags.contains(SystemUiFlags::LAYOUT_FULLSCREEN));
        assert!(flags.contains(SystemUiFlags::HIDE_NAVIGATION));
        assert!(flags.contains(SystemUiFlags::FULLSCREEN));
        assert_eq!(flags.bits(), 0x1706);
    }

    #[test]
    fn focus_gain_applies_the_full_flag_set() {
        let immersive = ImmersiveMode::new();
        let mut window = FakeWindow::default();

        immersive.window_focus_changed(&mut window, true).unwrap();

        assert_eq!(window.visibility, Some(SystemUiFlags::immersive_sticky_set()));
        assert_eq!(window.writes, 1);
    }

    #[test]
    fn focus_loss_leaves_the_window_untouched() {
        let immersive = ImmersiveMode::new();
        let mut window = FakeWindow::default();

        immersive.window_focus_changed(&mut window, true).unwrap();
        immersive.window_focus_changed(&mut window, false).unwrap();

        // No forced removal on focus loss.
        assert_eq!(window.visibility, Some(SystemUiFlags::immersive_sticky_set()));
        assert_eq!(window.writes, 1);
    }

    #[test]
    fn repeated_focus_gain_is_idempotent() {
        let immersive = ImmersiveMode::new();
        let mut window = FakeWindow::default();

        immersive.window_focus_changed(&mut window, true).unwrap();
        let after_first = window.visibility;
        immersive.window_focus_changed(&mut window, true).unwrap();
        immersive.window_focus_changed(&mut window, true).unwrap();

        assert_eq!(window.visibility, after_first);
        assert_eq!(window.writes, 3);
    }
}
