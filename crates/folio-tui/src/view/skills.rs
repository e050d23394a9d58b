use folio_core::content::SkillEntry;
use folio_core::page::SectionId;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::text::{card, grid, grid_columns, truncate, wrap_words};
use super::{stagger, SectionBuilder, SectionView, ViewContext};
use crate::focus::FocusTarget;
use crate::motion::{CardKind, CARD_STAGGER};
use crate::theme::Theme;

const GAP: usize = 2;
/// Four cards per row on wide terminals, two on medium ones
const BREAKPOINTS: [(usize, usize); 2] = [(80, 4), (40, 2)];

pub(super) fn build(ctx: &ViewContext<'_>) -> SectionView {
    let mut b = SectionBuilder::new(SectionId::Skills);
    b.blank();
    b.title(ctx, SectionId::Skills.title());

    let (columns, col_width) = grid_columns(ctx.width as usize, &BREAKPOINTS, GAP);
    let cards = ctx
        .portfolio
        .skills
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            let lines = skill_card(ctx, i, skill, col_width);
            stagger(ctx, lines, SectionId::Skills, i, CARD_STAGGER)
        })
        .collect();

    let top = b.row();
    let (lines, tops) = grid(cards, columns, col_width, GAP);
    for (i, card_top) in tops.into_iter().enumerate() {
        // Focus sits on the card's name row
        b.focus(FocusTarget::Skill(i), top + card_top + 1);
    }
    b.extend(lines);

    b.finish()
}

fn skill_card(ctx: &ViewContext<'_>, index: usize, skill: &SkillEntry, width: usize) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let inner = width.saturating_sub(4);
    let focused = ctx.is_focused(FocusTarget::Skill(index));
    let expanded = ctx.disclosure.is_skill_expanded(&skill.name);

    let chevron = if expanded { "▴" } else { "▾" };
    let name = truncate(&skill.name, inner.saturating_sub(2));
    let name_style = if focused {
        Style::default().fg(theme.focus).add_modifier(Modifier::BOLD)
    } else {
        theme.heading()
    };
    let spacing = inner.saturating_sub(name.width() + chevron.width());
    let mut rows = vec![vec![
        Span::styled(name, name_style),
        Span::raw(" ".repeat(spacing)),
        Span::styled(chevron, Style::default().fg(theme.muted)),
    ]];

    if expanded {
        let details = detail_rows(theme, skill, inner);
        let progress = ctx
            .motion
            .expand_progress(CardKind::Skill, &skill.name, ctx.now);
        let visible = (progress * details.len() as f64).ceil() as usize;
        for (i, row) in details.into_iter().enumerate() {
            rows.push(if i < visible { row } else { Vec::new() });
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

fn detail_rows(theme: &Theme, skill: &SkillEntry, inner: usize) -> Vec<Vec<Span<'static>>> {
    let mut rows = vec![Vec::new()];
    rows.extend(
        wrap_words(&skill.description, inner)
            .into_iter()
            .map(|row| vec![Span::styled(row, theme.body())]),
    );
    rows.push(Vec::new());
    rows.push(vec![Span::styled(
        format!(" {} ", skill.level),
        theme.badge_style(),
    )]);
    rows
}
