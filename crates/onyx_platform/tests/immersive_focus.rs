use onyx_platform::{ImmersiveMode, Result, SystemUiFlags, WindowChrome};

/// In-memory stand-in for the live window decoration.
#[derive(Default)]
struct RecordingWindow {
    visibility: Option<SystemUiFlags>,
    history: Vec<SystemUiFlags>,
}

impl WindowChrome for RecordingWindow {
    fn set_system_ui_visibility(&mut self, flags: SystemUiFlags) -> Result<()> {
        self.visibility = Some(flags);
        self.history.push(flags);
        Ok(())
    }
}

#[test]
fn focus_lifecycle_reasserts_an_identical_flag_state() {
    let immersive = ImmersiveMode::new();
    let mut window = RecordingWindow::default();

    // The shell starts unfocused; nothing has been written yet.
    assert_eq!(window.visibility, None);

    // Focus gained: the decoration carries the full immersive bitmask.
    immersive.window_focus_changed(&mut window, true).unwrap();
    assert_eq!(window.visibility, Some(SystemUiFlags::immersive_sticky_set()));

    // Focus lost: no write, flags are left as they are.
    immersive.window_focus_changed(&mut window, false).unwrap();
    assert_eq!(window.history.len(), 1);

    // Focus regained: the same complete set is applied again.
    immersive.window_focus_changed(&mut window, true).unwrap();
    assert_eq!(window.history.len(), 2);
    assert_eq!(window.history[0], window.history[1]);
    assert_eq!(window.visibility, Some(SystemUiFlags::immersive_sticky_set()));
}

#[test]
fn every_focus_gain_writes_the_complete_set_in_one_call() {
    let immersive = ImmersiveMode::new();
    let mut window = RecordingWindow::default();

    for _ in 0..4 {
        immersive.window_focus_changed(&mut window, true).unwrap();
    }

    // Never a partial set: each write is the whole six-flag union.
    assert!(window
        .history
        .iter()
        .all(|flags| *flags == SystemUiFlags::immersive_sticky_set()));
}
