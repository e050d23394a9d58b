use folio_core::config::KeymapConfig;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the key binding overview
    pub fn render_help(frame: &mut Frame, keymap: &KeymapConfig, theme: &Theme) {
        let nav_keys = keymap.nav_links.join("/");
        let entries: [(&str, &str); 11] = [
            (keymap.scroll_down.as_str(), "scroll down"),
            (keymap.scroll_up.as_str(), "scroll up"),
            (keymap.scroll_half_down.as_str(), "half page down"),
            (keymap.scroll_half_up.as_str(), "half page up"),
            (keymap.jump_to_top.as_str(), "top of page"),
            (keymap.jump_to_bottom.as_str(), "bottom of page"),
            (keymap.next_item.as_str(), "focus next link or card"),
            (keymap.prev_item.as_str(), "focus previous"),
            (keymap.activate.as_str(), "follow link / toggle card"),
            (nav_keys.as_str(), "About / Skills / Projects / Contact"),
            (keymap.quit.as_str(), "quit"),
        ];

        let area = frame.area();
        let popup_width = 52u16.min(area.width.saturating_sub(4));
        let popup_height = (entries.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Bindings
                Constraint::Length(1), // Hint
            ])
            .split(inner_area);

        let key_style = Style::default().fg(theme.focus).add_modifier(Modifier::BOLD);
        let lines: Vec<Line> = entries
            .iter()
            .map(|(key, what)| {
                Line::from(vec![
                    Span::styled(format!(" {:>9} ", key), key_style),
                    Span::styled(*what, Style::default().fg(theme.fg0)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), chunks[0]);

        let hint = Paragraph::new(Line::from(Span::styled(
            "press any key to close",
            Style::default().fg(theme.muted),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[1]);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(50, 10, area), Rect::new(25, 15, 50, 10));
        // Larger than the area: anchored at the origin
        assert_eq!(centered_rect(120, 50, area), Rect::new(0, 0, 120, 50));
    }
}
