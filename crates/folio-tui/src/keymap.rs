use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};
use folio_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// A key code plus the modifiers held with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Parse Vim key notation.
    ///
    /// Accepts a single character (`j`, `G`, `?`) or a bracketed key with
    /// optional modifier prefixes: `<CR>`, `<C-d>`, `<S-Tab>`, `<A-x>`, `<F5>`.
    /// Uppercase letters imply Shift.
    pub fn parse(notation: &str) -> Option<Self> {
        let notation = notation.trim();

        let Some(inner) = notation
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
        else {
            let mut chars = notation.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            return Some(Self::from_event(KeyCode::Char(c), KeyModifiers::NONE));
        };

        let mut modifiers = KeyModifiers::NONE;
        let mut rest = inner;
        while let Some((prefix, tail)) = rest.split_once('-') {
            if tail.is_empty() {
                // "<C-->" binds the minus key
                break;
            }
            modifiers |= match prefix.to_ascii_uppercase().as_str() {
                "C" => KeyModifiers::CONTROL,
                "S" => KeyModifiers::SHIFT,
                "A" | "M" => KeyModifiers::ALT,
                _ => return None,
            };
            rest = tail;
        }

        // Characters normalize like terminal events so "<S-g>" matches "G"
        Some(match key_code(rest)? {
            KeyCode::Char(c) if modifiers.contains(KeyModifiers::SHIFT) => {
                Self::from_event(KeyCode::Char(c.to_ascii_uppercase()), modifiers)
            }
            KeyCode::Char(c) => Self::from_event(KeyCode::Char(c.to_ascii_lowercase()), modifiers),
            code => Self::new(code, modifiers),
        })
    }

    /// Normalize a key event as the terminal reports it.
    ///
    /// Terminals disagree on whether Shift is reported for "G" or "?", and
    /// Shift+Tab arrives as `BackTab`.
    pub fn from_event(code: KeyCode, modifiers: KeyModifiers) -> Self {
        match code {
            KeyCode::BackTab => Self::new(KeyCode::Tab, modifiers | KeyModifiers::SHIFT),
            KeyCode::Char(c) if c.is_ascii_uppercase() => {
                Self::new(code, modifiers | KeyModifiers::SHIFT)
            }
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => {
                Self::new(code, modifiers.difference(KeyModifiers::SHIFT))
            }
            _ => Self::new(code, modifiers),
        }
    }
}

fn key_code(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }

    let lower = name.to_ascii_lowercase();
    let code = match lower.as_str() {
        "cr" | "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" | "spc" => KeyCode::Char(' '),
        "bs" | "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        _ => {
            let n = lower.strip_prefix('f')?.parse::<u8>().ok()?;
            KeyCode::F(n)
        }
    };
    Some(code)
}

/// Key-to-action table built from `[keymap]`
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
    /// Action for the two-key "gg" sequence, if bound
    sequence: Option<Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut keymap = Self {
            bindings: HashMap::new(),
            sequence: None,
        };

        let configured = [
            (&config.quit, Action::Quit),
            (&config.scroll_down, Action::ScrollDown),
            (&config.scroll_up, Action::ScrollUp),
            (&config.scroll_half_down, Action::ScrollHalfPageDown),
            (&config.scroll_half_up, Action::ScrollHalfPageUp),
            (&config.scroll_page_down, Action::ScrollPageDown),
            (&config.scroll_page_up, Action::ScrollPageUp),
            (&config.jump_to_top, Action::JumpToTop),
            (&config.jump_to_bottom, Action::JumpToBottom),
            (&config.next_item, Action::NextItem),
            (&config.prev_item, Action::PrevItem),
            (&config.activate, Action::Activate),
            (&config.help, Action::Help),
        ];
        for (notation, action) in configured {
            keymap.bind(notation, action);
        }
        for (i, notation) in config.nav_links.iter().enumerate() {
            keymap.bind(notation, Action::NavLink(i));
        }

        keymap.bindings.insert(KeyBinding::ctrl('c'), Action::Quit);
        keymap.bindings.insert(KeyBinding::plain(KeyCode::Esc), Action::ExitMode);
        for (code, action) in [
            (KeyCode::Down, Action::ScrollDown),
            (KeyCode::Up, Action::ScrollUp),
            (KeyCode::PageDown, Action::ScrollPageDown),
            (KeyCode::PageUp, Action::ScrollPageUp),
            (KeyCode::Home, Action::JumpToTop),
            (KeyCode::End, Action::JumpToBottom),
        ] {
            keymap
                .bindings
                .entry(KeyBinding::plain(code))
                .or_insert(action);
        }

        keymap
    }

    fn bind(&mut self, notation: &str, action: Action) {
        if notation == "gg" {
            self.sequence = Some(action);
            return;
        }

        let Some(binding) = KeyBinding::parse(notation) else {
            warn!("Invalid key binding '{}' for {:?}, ignoring it", notation, action);
            return;
        };

        if let Some(existing) = self.bindings.get(&binding) {
            warn!(
                "Key '{}' already bound to {:?}, not binding it to {:?}",
                notation, existing, action
            );
            return;
        }
        self.bindings.insert(binding, action);
    }

    pub fn action_for(&self, binding: &KeyBinding) -> Option<Action> {
        self.bindings.get(binding).copied()
    }

    /// Whether `binding` is the first key of the "gg" sequence
    pub fn starts_sequence(&self, binding: &KeyBinding) -> bool {
        self.sequence.is_some() && *binding == KeyBinding::plain(KeyCode::Char('g'))
    }

    pub fn sequence_action(&self) -> Option<Action> {
        self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(c: char) -> KeyBinding {
        KeyBinding::new(KeyCode::Char(c), KeyModifiers::SHIFT)
    }

    #[test]
    fn test_parse_characters() {
        assert_eq!(KeyBinding::parse("j"), Some(KeyBinding::plain(KeyCode::Char('j'))));
        assert_eq!(KeyBinding::parse("2"), Some(KeyBinding::plain(KeyCode::Char('2'))));
        assert_eq!(KeyBinding::parse("G"), Some(shift('G')));
        assert_eq!(KeyBinding::parse("?"), Some(KeyBinding::plain(KeyCode::Char('?'))));
        assert_eq!(KeyBinding::parse("jk"), None);
        assert_eq!(KeyBinding::parse(""), None);
    }

    #[test]
    fn test_parse_bracketed() {
        assert_eq!(KeyBinding::parse("<C-d>"), Some(KeyBinding::ctrl('d')));
        assert_eq!(KeyBinding::parse("<C-D>"), Some(KeyBinding::ctrl('d')));
        assert_eq!(KeyBinding::parse("<CR>"), Some(KeyBinding::plain(KeyCode::Enter)));
        assert_eq!(KeyBinding::parse("<space>"), Some(KeyBinding::plain(KeyCode::Char(' '))));
        assert_eq!(
            KeyBinding::parse("<S-Tab>"),
            Some(KeyBinding::new(KeyCode::Tab, KeyModifiers::SHIFT))
        );
        assert_eq!(
            KeyBinding::parse("<C-A-x>"),
            Some(KeyBinding::new(
                KeyCode::Char('x'),
                KeyModifiers::CONTROL | KeyModifiers::ALT
            ))
        );
        assert_eq!(KeyBinding::parse("<S-g>"), Some(shift('G')));
        assert_eq!(KeyBinding::parse("<F5>"), Some(KeyBinding::plain(KeyCode::F(5))));
        assert_eq!(KeyBinding::parse("<Bogus>"), None);
        assert_eq!(KeyBinding::parse("<X-j>"), None);
    }

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        let cases = [
            (KeyBinding::plain(KeyCode::Char('q')), Action::Quit),
            (KeyBinding::plain(KeyCode::Char('j')), Action::ScrollDown),
            (KeyBinding::ctrl('d'), Action::ScrollHalfPageDown),
            (KeyBinding::plain(KeyCode::Char('2')), Action::NavLink(1)),
            (KeyBinding::plain(KeyCode::Enter), Action::Activate),
            (KeyBinding::plain(KeyCode::End), Action::JumpToBottom),
        ];
        for (binding, action) in cases {
            assert_eq!(keymap.action_for(&binding), Some(action), "{:?}", binding);
        }
        assert_eq!(keymap.sequence_action(), Some(Action::JumpToTop));
        assert!(keymap.starts_sequence(&KeyBinding::plain(KeyCode::Char('g'))));
    }

    #[test]
    fn test_terminal_events_match_parsed_bindings() {
        let keymap = Keymap::default();
        let lookup = |code, modifiers| keymap.action_for(&KeyBinding::from_event(code, modifiers));

        assert_eq!(lookup(KeyCode::BackTab, KeyModifiers::SHIFT), Some(Action::PrevItem));
        assert_eq!(lookup(KeyCode::Char('G'), KeyModifiers::NONE), Some(Action::JumpToBottom));
        assert_eq!(lookup(KeyCode::Char('?'), KeyModifiers::SHIFT), Some(Action::Help));
        assert_eq!(lookup(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(Action::Quit));
    }

    #[test]
    fn test_conflicts_keep_first_and_invalid_is_dropped() {
        let config = KeymapConfig {
            help: "q".to_string(),
            scroll_down: "<Bogus>".to_string(),
            ..Default::default()
        };
        let keymap = Keymap::from_config(&config);

        assert_eq!(
            keymap.action_for(&KeyBinding::plain(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(keymap.action_for(&KeyBinding::plain(KeyCode::Char('j'))), None);
        assert_eq!(
            keymap.action_for(&KeyBinding::plain(KeyCode::Down)),
            Some(Action::ScrollDown)
        );
    }
}
