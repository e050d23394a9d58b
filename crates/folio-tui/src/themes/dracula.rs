//! Dracula theme
//! https://draculatheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x2a, 0x36),
        bg1: Color::Rgb(0x34, 0x37, 0x46),
        bg2: Color::Rgb(0x44, 0x47, 0x5a), // current line
        fg0: Color::Rgb(0xf8, 0xf8, 0xf2),
        fg1: Color::Rgb(0xff, 0xff, 0xff),
        muted: Color::Rgb(0xbf, 0xbf, 0xb8),
        border: Color::Rgb(0x62, 0x72, 0xa4), // comment
        accent: Color::Rgb(0xbd, 0x93, 0xf9), // purple
        focus: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
        badge: Color::Rgb(0x44, 0x47, 0x5a),
        badge_fg: Color::Rgb(0x8b, 0xe9, 0xfd), // cyan
        grade: Color::Rgb(0x50, 0xfa, 0x7b), // green
        in_progress: Color::Rgb(0xff, 0xb8, 0x6c), // orange
    }
}
