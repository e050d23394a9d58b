//! Page view: every body section rendered to owned lines at a given width
//!
//! Heights depend only on the width and the disclosure state. Entrance,
//! reveal and expand animations change styles or blank out rows but never
//! add or remove rows, so anchor positions stay put while anything animates.

mod about;
mod education;
mod footer;
mod hero;
mod projects;
mod skills;
pub mod text;

use std::collections::HashMap;
use std::time::{Duration, Instant};

use folio_core::interaction::DisclosureState;
use folio_core::page::{PageLayout, SectionId};
use folio_core::Portfolio;
use ratatui::text::{Line, Span};

use crate::focus::FocusTarget;
use crate::motion::Motion;
use crate::theme::Theme;

/// Widest the content column gets
const MAX_CONTENT_WIDTH: u16 = 100;
/// Narrowest content column the view lays out for
const MIN_CONTENT_WIDTH: u16 = 24;

/// Everything a section needs to render itself
pub struct ViewContext<'a> {
    pub portfolio: &'a Portfolio,
    pub disclosure: &'a DisclosureState,
    pub motion: &'a Motion,
    pub theme: &'a Theme,
    pub focus: Option<FocusTarget>,
    pub now: Instant,
    /// Width of the content column
    pub width: u16,
}

impl ViewContext<'_> {
    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.focus == Some(target)
    }
}

/// Width of the centered content column for a terminal `area_width`
pub fn content_width(area_width: u16) -> u16 {
    area_width
        .saturating_sub(4)
        .clamp(MIN_CONTENT_WIDTH, MAX_CONTENT_WIDTH)
}

/// One rendered section
#[derive(Debug, Clone)]
pub struct SectionView {
    pub id: SectionId,
    pub lines: Vec<Line<'static>>,
    /// Focus targets and their row within the section
    pub focus_rows: Vec<(FocusTarget, u16)>,
}

/// Accumulates lines and focus rows for a section
pub(crate) struct SectionBuilder {
    id: SectionId,
    lines: Vec<Line<'static>>,
    focus_rows: Vec<(FocusTarget, u16)>,
}

impl SectionBuilder {
    pub(crate) fn new(id: SectionId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            focus_rows: Vec::new(),
        }
    }

    /// Row the next pushed line lands on
    pub(crate) fn row(&self) -> u16 {
        self.lines.len() as u16
    }

    pub(crate) fn push(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    pub(crate) fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    pub(crate) fn extend(&mut self, lines: impl IntoIterator<Item = Line<'static>>) {
        self.lines.extend(lines);
    }

    pub(crate) fn focus(&mut self, target: FocusTarget, row: u16) {
        self.focus_rows.push((target, row));
    }

    /// Centered section title followed by a spacer row
    pub(crate) fn title(&mut self, ctx: &ViewContext<'_>, title: &str) {
        self.push(Line::from(Span::styled(title.to_string(), ctx.theme.section_title())).centered());
        self.blank();
    }

    pub(crate) fn finish(self) -> SectionView {
        SectionView {
            id: self.id,
            lines: self.lines,
            focus_rows: self.focus_rows,
        }
    }
}

/// The whole scrolling body
#[derive(Debug, Clone)]
pub struct PageView {
    sections: Vec<SectionView>,
    layout: PageLayout,
    focus_rows: HashMap<FocusTarget, u16>,
}

impl PageView {
    pub fn build(ctx: &ViewContext<'_>) -> Self {
        let sections: Vec<SectionView> = SectionId::BODY
            .iter()
            .filter_map(|id| match id {
                SectionId::Hero => Some(hero::build(ctx)),
                SectionId::About => Some(about::build(ctx)),
                SectionId::Skills => Some(skills::build(ctx)),
                SectionId::Projects => Some(projects::build(ctx)),
                SectionId::Education => Some(education::build(ctx)),
                SectionId::Footer => Some(footer::build(ctx)),
                SectionId::Nav => None,
            })
            .collect();

        let layout = PageLayout::stack(sections.iter().map(|s| (s.id, s.lines.len() as u16)));

        let mut focus_rows = HashMap::new();
        for section in &sections {
            let top = layout.section(section.id).map(|b| b.top).unwrap_or(0);
            for (target, row) in &section.focus_rows {
                focus_rows.insert(*target, top + row);
            }
        }

        Self {
            sections,
            layout,
            focus_rows,
        }
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn section(&self, id: SectionId) -> Option<&SectionView> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Absolute body row of a focus target
    pub fn focus_row(&self, target: FocusTarget) -> Option<u16> {
        self.focus_rows.get(&target).copied()
    }
}

/// Blend every span of a line towards the background
pub fn fade_line(line: &Line<'static>, theme: &Theme, amount: f64) -> Line<'static> {
    let mut faded = line.clone();
    if amount <= 0.0 {
        return faded;
    }
    for span in &mut faded.spans {
        span.style.fg = Some(theme.fade(span.style.fg.unwrap_or(theme.fg0), amount));
        if let Some(bg) = span.style.bg {
            span.style.bg = Some(theme.fade(bg, amount));
        }
    }
    faded
}

/// Fade a staggered item on top of its section's reveal
pub(crate) fn stagger(
    ctx: &ViewContext<'_>,
    lines: Vec<Line<'static>>,
    id: SectionId,
    index: usize,
    step: Duration,
) -> Vec<Line<'static>> {
    let amount = ctx.motion.stagger_fade(id, index, step, ctx.now);
    if amount <= 0.0 {
        return lines;
    }
    lines
        .iter()
        .map(|line| fade_line(line, ctx.theme, amount))
        .collect()
}

/// Button-like rendering of a link label
pub(crate) fn link_span(label: &str, style: ratatui::style::Style) -> Span<'static> {
    Span::styled(format!(" {} ", label), style)
}


#[cfg(test)]
mod tests {
    use super::test_support::{plain, Fixture};
    use super::*;

    #[test]
    fn test_content_width() {
        assert_eq!(content_width(80), 76);
        assert_eq!(content_width(200), 100);
        assert_eq!(content_width(10), 24);
    }

    #[test]
    fn test_layout_follows_section_order() {
        let fixture = Fixture::new();
        let view = PageView::build(&fixture.ctx(76));
        let ids: Vec<_> = view.layout().sections().iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::BODY.to_vec());
        assert_eq!(view.layout().sections()[0].top, 0);
    }

    #[test]
    fn test_every_focus_target_has_a_row() {
        let fixture = Fixture::new();
        let view = PageView::build(&fixture.ctx(76));
        for target in crate::focus::focus_order(&fixture.portfolio) {
            if target.section() == SectionId::Nav {
                assert_eq!(view.focus_row(target), None);
            } else {
                let row = view.focus_row(target).unwrap();
                let section = view.layout().section_at(row).unwrap();
                assert_eq!(section.id, target.section(), "{:?}", target);
            }
        }
    }

    #[test]
    fn test_expanding_a_skill_grows_the_page() {
        let mut fixture = Fixture::new();
        let collapsed = PageView::build(&fixture.ctx(76)).layout().total_height();
        fixture.disclosure = fixture
            .disclosure
            .clone()
            .reduce(folio_core::interaction::DisclosureAction::ToggleSkill("React".into()));
        let view = PageView::build(&fixture.ctx(76));
        assert!(view.layout().total_height() > collapsed);

        let skills = plain(&view.section(SectionId::Skills).unwrap().lines).join("\n");
        assert!(skills.contains("Advanced"));
        assert!(skills.contains("Proficient in building"));
    }

    #[test]
    fn test_height_ignores_animation_clock() {
        let mut fixture = Fixture::new();
        let settled = PageView::build(&fixture.ctx(76)).layout().clone();
        // Right after mount the hero entrance is still running
        fixture.now -= std::time::Duration::from_secs(10);
        let mounting = PageView::build(&fixture.ctx(76));
        assert_eq!(mounting.layout(), &settled);
    }

    #[test]
    fn test_fade_line_keeps_text() {
        let theme = Theme::default();
        let line = Line::from(Span::styled("hello", theme.text()));
        let faded = fade_line(&line, &theme, 1.0);
        assert_eq!(faded.spans[0].content, "hello");
        assert_eq!(faded.spans[0].style.fg, Some(theme.bg0));
        assert_eq!(fade_line(&line, &theme, 0.0), line);
    }
}
