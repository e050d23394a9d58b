use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, Mode};
use crate::widgets::{NavBarWidget, PageWidget, PopupWidget, StatusBarWidget};

/// Draw one frame: fixed nav bar, page body, status bar and the help overlay
pub fn draw(frame: &mut Frame, app: &mut App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Nav bar
            Constraint::Min(1),    // Page body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    app.prepare_frame(chunks[1].width, chunks[1].height, now);

    NavBarWidget::render(frame, chunks[0], app);
    PageWidget::render(frame, chunks[1], app, now);
    StatusBarWidget::render(frame, chunks[2], app);

    if app.mode == Mode::Help {
        PopupWidget::render_help(frame, &app.config.keymap, &app.theme);
    }
}
