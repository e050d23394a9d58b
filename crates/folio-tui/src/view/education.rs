use folio_core::content::{CourseEntry, Grade};
use folio_core::page::SectionId;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::text::{card, grid, grid_columns, image_frame, truncate, wrap_words};
use super::{stagger, SectionBuilder, SectionView, ViewContext};
use crate::focus::FocusTarget;
use crate::motion::{CardKind, CARD_STAGGER};

const PHOTO_GAP: usize = 2;
const PHOTO_BREAKPOINTS: [(usize, usize); 1] = [(50, 2)];

pub(super) fn build(ctx: &ViewContext<'_>) -> SectionView {
    let theme = ctx.theme;
    let education = &ctx.portfolio.education;
    let width = ctx.width as usize;
    let mut b = SectionBuilder::new(SectionId::Education);

    b.blank();
    b.title(ctx, SectionId::Education.title());

    b.push(Line::from(Span::styled(education.school.clone(), theme.heading())));
    let degree = format!(
        "{} • Expected Graduation: {}",
        education.degree, education.expected_graduation
    );
    for row in wrap_words(&degree, width) {
        b.push(Line::from(Span::styled(row, theme.body())));
    }
    b.blank();

    let (columns, col_width) = grid_columns(width, &PHOTO_BREAKPOINTS, PHOTO_GAP);
    let frame_style = Style::default().fg(theme.border);
    let caption = Style::default().fg(theme.muted);
    let photos = education
        .photos
        .iter()
        .map(|photo| image_frame(&photo.alt, &photo.path, col_width, frame_style, caption))
        .collect();
    let (lines, _) = grid(photos, columns, col_width, PHOTO_GAP);
    b.extend(lines);

    b.push(Line::from(Span::styled(
        "Relevant Coursework",
        Style::default().fg(theme.fg1).add_modifier(Modifier::BOLD),
    )));
    b.blank();

    for (i, course) in education.courses.iter().enumerate() {
        b.focus(FocusTarget::Course(i), b.row() + 1);
        let lines = course_card(ctx, i, course, width);
        b.extend(stagger(ctx, lines, SectionId::Education, i, CARD_STAGGER));
    }

    b.blank();
    b.finish()
}

fn course_card(ctx: &ViewContext<'_>, index: usize, course: &CourseEntry, width: usize) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let inner = width.saturating_sub(4);
    let focused = ctx.is_focused(FocusTarget::Course(index));
    let expanded = ctx.disclosure.is_course_expanded(&course.title);

    let chevron = if expanded { "▴ " } else { "▾ " };
    let grade_style = match course.grade {
        Grade::InProgress => Style::default()
            .fg(theme.in_progress)
            .add_modifier(Modifier::BOLD),
        Grade::Letter(_) => Style::default().fg(theme.grade).add_modifier(Modifier::BOLD),
    };
    let grade = course.grade.to_string();
    let title_room = inner.saturating_sub(chevron.width() + grade.width() + 1);
    let title = truncate(&course.title, title_room);
    let title_style = if focused {
        Style::default().fg(theme.focus).add_modifier(Modifier::BOLD)
    } else {
        theme.text()
    };
    let spacing = inner.saturating_sub(chevron.width() + title.width() + grade.width());
    let mut rows = vec![vec![
        Span::styled(chevron, Style::default().fg(theme.muted)),
        Span::styled(title, title_style),
        Span::raw(" ".repeat(spacing)),
        Span::styled(grade, grade_style),
    ]];

    if expanded {
        let details = wrap_words(&course.description, inner);
        let progress = ctx
            .motion
            .expand_progress(CardKind::Course, &course.title, ctx.now);
        let visible = (progress * details.len() as f64).ceil() as usize;
        for (i, row) in details.into_iter().enumerate() {
            rows.push(if i < visible {
                vec![Span::styled(row, theme.body())]
            } else {
                Vec::new()
            });
        }
    }

    let border = if focused {
        Style::default().fg(theme.focus).add_modifier(Modifier::BOLD)
    } else if expanded {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.border)
    };
    card(rows, width, border)
}
