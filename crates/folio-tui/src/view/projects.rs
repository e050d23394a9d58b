use folio_core::content::{LinkTarget, ProjectEntry};
use folio_core::page::SectionId;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::text::{card, grid, grid_columns, image_frame, spans_width, truncate, wrap_words};
use super::{link_span, stagger, SectionBuilder, SectionView, ViewContext};
use crate::focus::FocusTarget;
use crate::motion::PROJECT_STAGGER;

const GAP: usize = 2;
const BREAKPOINTS: [(usize, usize); 2] = [(96, 3), (60, 2)];
/// Rows above the link row: border, image frame (4), blank, title
const LINK_ROW_BASE: u16 = 7;

pub(super) fn build(ctx: &ViewContext<'_>) -> SectionView {
    let mut b = SectionBuilder::new(SectionId::Projects);
    b.blank();
    b.title(ctx, SectionId::Projects.title());

    let (columns, col_width) = grid_columns(ctx.width as usize, &BREAKPOINTS, GAP);
    let inner = col_width.saturating_sub(4);

    // Cards in the same grid row share a height so their link rows line up
    let bodies: Vec<Vec<Vec<Span<'static>>>> = ctx
        .portfolio
        .projects
        .iter()
        .map(|project| body_rows(ctx, project, inner))
        .collect();
    let mut cards = Vec::with_capacity(bodies.len());
    let mut link_rows = Vec::with_capacity(bodies.len());
    for (i, mut rows) in bodies.iter().cloned().enumerate() {
        let row_start = i - i % columns;
        let body_height = bodies[row_start..(row_start + columns).min(bodies.len())]
            .iter()
            .map(|r| r.len())
            .max()
            .unwrap_or(0);
        let project = &ctx.portfolio.projects[i];
        rows.resize(body_height, Vec::new());
        rows.push(Vec::new());
        rows.push(link_row(ctx, i, project));
        link_rows.push(LINK_ROW_BASE + body_height as u16 + 1);
        let lines = card(with_header(ctx, project, inner, rows), col_width, border(ctx, i));
        cards.push(stagger(ctx, lines, SectionId::Projects, i, PROJECT_STAGGER));
    }

    let top = b.row();
    let (lines, tops) = grid(cards, columns, col_width, GAP);
    for (i, card_top) in tops.into_iter().enumerate() {
        let row = top + card_top + link_rows[i];
        b.focus(FocusTarget::ProjectDemo(i), row);
        b.focus(FocusTarget::ProjectRepo(i), row);
    }
    b.extend(lines);

    b.finish()
}

fn border(ctx: &ViewContext<'_>, index: usize) -> Style {
    let focused = ctx.is_focused(FocusTarget::ProjectDemo(index))
        || ctx.is_focused(FocusTarget::ProjectRepo(index));
    if focused {
        Style::default().fg(ctx.theme.focus).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ctx.theme.border)
    }
}

/// Image frame and title in front of the variable-height body
fn with_header(
    ctx: &ViewContext<'_>,
    project: &ProjectEntry,
    inner: usize,
    body: Vec<Vec<Span<'static>>>,
) -> Vec<Vec<Span<'static>>> {
    let theme = ctx.theme;
    let frame_style = Style::default().fg(theme.border);
    let caption = Style::default().fg(theme.muted);
    let mut rows: Vec<Vec<Span<'static>>> =
        image_frame(&project.title, &project.image_path, inner, frame_style, caption)
            .into_iter()
            .map(|line| line.spans)
            .collect();
    rows.push(Vec::new());
    rows.push(vec![Span::styled(
        truncate(&project.title, inner),
        theme.heading(),
    )]);
    rows.extend(body);
    rows
}

fn body_rows(ctx: &ViewContext<'_>, project: &ProjectEntry, inner: usize) -> Vec<Vec<Span<'static>>> {
    let theme = ctx.theme;
    let mut rows: Vec<Vec<Span<'static>>> = wrap_words(&project.description, inner)
        .into_iter()
        .map(|row| vec![Span::styled(row, theme.body())])
        .collect();
    rows.push(Vec::new());
    rows.extend(tag_rows(ctx, &project.tech_tags, inner));
    rows
}

/// Tech tags as badges, wrapped onto as many rows as needed
fn tag_rows(ctx: &ViewContext<'_>, tags: &[String], inner: usize) -> Vec<Vec<Span<'static>>> {
    let mut rows = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    for tag in tags {
        let badge = Span::styled(format!(" {} ", tag), ctx.theme.badge_style());
        let needed = badge.content.width() + usize::from(!current.is_empty());
        if !current.is_empty() && spans_width(&current) + needed > inner {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(Span::raw(" "));
        }
        current.push(badge);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

fn link_row(ctx: &ViewContext<'_>, index: usize, project: &ProjectEntry) -> Vec<Span<'static>> {
    let theme = ctx.theme;
    let style = |target: FocusTarget, placeholder: bool| {
        if ctx.is_focused(target) {
            theme.focused()
        } else if placeholder {
            Style::default().fg(theme.muted)
        } else {
            Style::default().fg(theme.accent).add_modifier(Modifier::UNDERLINED)
        }
    };
    let demo = FocusTarget::ProjectDemo(index);
    let repo = FocusTarget::ProjectRepo(index);
    vec![
        link_span(
            &format!("{} ↗", project.demo.label),
            style(demo, project.demo.target == LinkTarget::Placeholder),
        ),
        Span::raw(" "),
        link_span(
            &project.repo.label,
            style(repo, project.repo.target == LinkTarget::Placeholder),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{plain, Fixture};
    use super::*;

    #[test]
    fn test_projects_render() {
        let fixture = Fixture::new();
        let view = build(&fixture.ctx(100));
        let text = plain(&view.lines).join("\n");
        assert!(text.contains("AI Task Management App"));
        assert!(text.contains("/projects/Hearts.png"));
        assert!(text.contains("Framer Motion"));
        assert_eq!(view.focus_rows.len(), 6);
    }

    #[test]
    fn test_link_rows_point_at_links() {
        let fixture = Fixture::new();
        for width in [40, 70, 100] {
            let view = build(&fixture.ctx(width));
            let text = plain(&view.lines);
            for (target, row) in &view.focus_rows {
                let line = &text[*row as usize];
                assert!(
                    line.contains("View Project") && line.contains("GitHub"),
                    "{:?} at width {}: {:?}",
                    target,
                    width,
                    line
                );
            }
        }
    }
}
