use ratatui::style::{Color, Modifier, Style};

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub muted: Color,
    pub border: Color,

    // Semantic colors
    pub accent: Color,
    pub focus: Color,
    pub badge: Color,
    pub badge_fg: Color,
    pub grade: Color,
    pub in_progress: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::gruvbox_dark()
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg0)
    }

    pub fn body(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.fg1).add_modifier(Modifier::BOLD)
    }

    pub fn section_title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn badge_style(&self) -> Style {
        Style::default().fg(self.badge_fg).bg(self.badge)
    }

    pub fn focused(&self) -> Style {
        Style::default()
            .fg(self.bg0)
            .bg(self.focus)
            .add_modifier(Modifier::BOLD)
    }

    /// Blend `color` towards the page background; `amount` 0 = unchanged, 1 = background
    pub fn fade(&self, color: Color, amount: f64) -> Color {
        let amount = amount.clamp(0.0, 1.0);
        match (color, self.bg0) {
            (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
                let mix = |c: u8, base: u8| -> u8 {
                    (c as f64 + (base as f64 - c as f64) * amount).round() as u8
                };
                Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
            }
            _ if amount >= 0.5 => Color::DarkGray,
            _ => color,
        }
    }
}
