//! Theme registry and loader
//!
//! Built-in themes plus hex color overrides from config.

mod dracula;
mod gruvbox;
mod nord;
mod one_dark;

use folio_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;
use tracing::warn;

use crate::theme::Theme;

pub use gruvbox::dark as gruvbox_dark;

/// Parse `#RRGGBB` or `#RGB`, with or without the leading `#`
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    let channel = |shift: u32, bits: u32| ((value >> shift) & ((1 << bits) - 1)) as u8;
    match digits.len() {
        6 => Some(Color::Rgb(channel(16, 8), channel(8, 8), channel(0, 8))),
        3 => Some(Color::Rgb(
            channel(8, 4) * 17,
            channel(4, 4) * 17,
            channel(0, 4) * 17,
        )),
        _ => None,
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "gruvbox" | "gruvbox-dark" => gruvbox::dark(),
        "nord" => nord::default(),
        "dracula" => dracula::default(),
        "one-dark" | "onedark" => one_dark::default(),
        other => {
            warn!("Unknown theme '{}', falling back to gruvbox-dark", other);
            gruvbox::dark()
        }
    };

    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color); 10] = [
        (&overrides.bg0, &mut theme.bg0),
        (&overrides.bg1, &mut theme.bg1),
        (&overrides.fg0, &mut theme.fg0),
        (&overrides.fg1, &mut theme.fg1),
        (&overrides.muted, &mut theme.muted),
        (&overrides.accent, &mut theme.accent),
        (&overrides.focus, &mut theme.focus),
        (&overrides.badge, &mut theme.badge),
        (&overrides.grade, &mut theme.grade),
        (&overrides.in_progress, &mut theme.in_progress),
    ];

    for (hex, slot) in slots {
        if let Some(hex) = hex {
            match parse_hex_color(hex) {
                Some(color) => *slot = color,
                None => warn!("Ignoring invalid theme color '{}'", hex),
            }
        }
    }

    theme
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec!["gruvbox-dark", "nord", "dracula", "one-dark"]
}
