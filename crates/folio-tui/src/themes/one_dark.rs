//! One Dark theme (Atom)

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x2c, 0x34),
        bg1: Color::Rgb(0x31, 0x35, 0x3f),
        bg2: Color::Rgb(0x3e, 0x44, 0x51),
        fg0: Color::Rgb(0xab, 0xb2, 0xbf),
        fg1: Color::Rgb(0xd7, 0xda, 0xe0),
        muted: Color::Rgb(0x9d, 0xa5, 0xb4),
        border: Color::Rgb(0x5c, 0x63, 0x70),
        accent: Color::Rgb(0x61, 0xaf, 0xef), // blue
        focus: Color::Rgb(0xe5, 0xc0, 0x7b), // yellow
        badge: Color::Rgb(0x3e, 0x44, 0x51),
        badge_fg: Color::Rgb(0x56, 0xb6, 0xc2), // cyan
        grade: Color::Rgb(0x98, 0xc3, 0x79), // green
        in_progress: Color::Rgb(0xd1, 0x9a, 0x66), // orange
    }
}
