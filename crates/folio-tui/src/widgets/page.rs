use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use crate::view::{content_width, fade_line};

/// Scrolling page body with reveal animations applied
pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        frame.render_widget(
            Block::default().style(Style::default().bg(app.theme.bg0)),
            area,
        );

        let width = content_width(area.width).min(area.width);
        let column = Rect::new(
            area.x + (area.width - width) / 2,
            area.y,
            width,
            area.height,
        );

        let top = app.scroll.current_scroll();
        let lines: Vec<Line<'static>> = (0..area.height)
            .map(|r| visible_line(app, top.saturating_add(r), now))
            .collect();
        frame.render_widget(Paragraph::new(lines), column);
    }
}

/// The line drawn at body row `row`. Hidden sections draw blank rows; a
/// revealing section is shifted down and faded in.
fn visible_line(app: &App, row: u16, now: Instant) -> Line<'static> {
    let view = app.view();
    let Some(section_box) = view.layout().section_at(row) else {
        return Line::default();
    };
    let id = section_box.id;
    let Some(reveal) = app
        .motion
        .reveal_frame(id, app.page.reveal.state(id), now)
    else {
        return Line::default();
    };

    let local = row - section_box.top;
    let Some(source) = local.checked_sub(reveal.offset) else {
        return Line::default();
    };
    match view.section(id).and_then(|s| s.lines.get(source as usize)) {
        Some(line) => fade_line(line, &app.theme, reveal.fade),
        None => Line::default(),
    }
}
