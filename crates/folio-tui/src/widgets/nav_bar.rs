use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::focus::FocusTarget;

/// Fixed bar above the page body: brand on the left, section links on the right
pub struct NavBarWidget;

impl NavBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let brand = Span::styled(
            format!(" {}", app.portfolio.brand),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        );

        let mut links = Vec::new();
        for (i, link) in app.portfolio.nav_links.iter().enumerate() {
            let style = if app.focused() == Some(FocusTarget::NavLink(i)) {
                theme.focused()
            } else {
                Style::default().fg(theme.fg0)
            };
            links.push(Span::styled(format!(" {} ", link.label), style));
            links.push(Span::raw(" "));
        }

        let used = brand.content.width() + links.iter().map(|s| s.width()).sum::<usize>();
        let mut spans = vec![brand];
        spans.push(Span::raw(" ".repeat((inner.width as usize).saturating_sub(used))));
        spans.extend(links);

        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }
}
