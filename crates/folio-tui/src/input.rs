use crossterm::event::KeyEvent;

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    NextItem,
    PrevItem,
    Activate,
    /// Activate the nth nav bar link
    NavLink(usize),
    Help,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if app.mode == Mode::Help {
        // Any key exits help
        return Action::ExitMode;
    }

    let binding = KeyBinding::from_event(key.code, key.modifiers);

    if keymap.starts_sequence(&binding) {
        return if app.pending_key == Some('g') {
            keymap.sequence_action().unwrap_or(Action::None)
        } else {
            Action::PendingG
        };
    }

    keymap.action_for(&binding).unwrap_or(Action::None)
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crossterm::event::{KeyCode, KeyModifiers};
    use folio_core::{AppConfig, Portfolio};

    use super::*;

    fn app() -> App {
        App::new(AppConfig::default(), Portfolio::builtin(), Instant::now())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_bindings() {
        let app = app();
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(press(KeyCode::Char('q')), &app, &keymap), Action::Quit);
        assert_eq!(handle_key_event(press(KeyCode::Tab), &app, &keymap), Action::NextItem);
        assert_eq!(handle_key_event(press(KeyCode::Char('3')), &app, &keymap), Action::NavLink(2));
        assert_eq!(handle_key_event(press(KeyCode::Char('x')), &app, &keymap), Action::None);
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = app();
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(press(KeyCode::Char('g')), &app, &keymap), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(press(KeyCode::Char('g')), &app, &keymap), Action::JumpToTop);
    }

    #[test]
    fn test_any_key_leaves_help() {
        let mut app = app();
        app.mode = Mode::Help;
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(press(KeyCode::Char('j')), &app, &keymap), Action::ExitMode);
    }
}
