use folio_core::interaction::EntranceElement;
use folio_core::page::SectionId;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::text::wrap_words;
use super::{fade_line, link_span, SectionBuilder, SectionView, ViewContext};
use crate::focus::FocusTarget;

/// Tagline wraps narrower than the content column
const TAGLINE_WIDTH: usize = 60;
/// A character counts as lifted once it is past half of its bounce
const LIFT_THRESHOLD: f64 = 0.5;

pub(super) fn build(ctx: &ViewContext<'_>) -> SectionView {
    let portfolio = ctx.portfolio;
    let theme = ctx.theme;
    let schedule = ctx.motion.entrance();
    let elapsed = ctx.motion.entrance_elapsed(ctx.now);
    let mut b = SectionBuilder::new(SectionId::Hero);

    b.blank();
    b.blank();

    // The bouncing name: lifted characters move to the row above the heading
    let greeting = format!("{} ", portfolio.greeting);
    let name_style = theme.section_title();
    let mut lifted = vec![Span::raw(" ".repeat(greeting.width()))];
    let mut resting = vec![Span::styled(greeting, theme.heading())];
    for (i, ch) in portfolio.owner.chars().enumerate() {
        let glyph = Span::styled(ch.to_string(), name_style);
        let gap = Span::raw(" ".repeat(ch.width().unwrap_or(1)));
        if schedule.name.lift(i, elapsed) > LIFT_THRESHOLD {
            lifted.push(glyph);
            resting.push(gap);
        } else {
            lifted.push(gap);
            resting.push(glyph);
        }
    }
    let heading_fade = 1.0 - schedule.progress(EntranceElement::Heading, elapsed);
    b.push(fade_line(&Line::from(lifted).centered(), theme, heading_fade));
    b.push(fade_line(&Line::from(resting).centered(), theme, heading_fade));
    b.blank();

    let tagline_fade = 1.0 - schedule.progress(EntranceElement::Tagline, elapsed);
    let tagline_width = TAGLINE_WIDTH.min(ctx.width as usize);
    for row in wrap_words(&portfolio.tagline, tagline_width) {
        let line = Line::from(Span::styled(row, theme.body())).centered();
        b.push(fade_line(&line, theme, tagline_fade));
    }
    b.blank();

    let cta_fade = 1.0 - schedule.progress(EntranceElement::CallToAction, elapsed);
    let cta_row = b.row();
    let mut spans = Vec::new();
    for (i, link) in portfolio.hero_links.iter().enumerate() {
        let target = FocusTarget::HeroLink(i);
        let style = if ctx.is_focused(target) {
            theme.focused()
        } else if i == 0 {
            // Primary call to action
            Style::default()
                .fg(theme.bg0)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.accent)
        };
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(link_span(&link.label, style));
        b.focus(target, cta_row);
    }
    b.push(fade_line(&Line::from(spans).centered(), theme, cta_fade));

    b.blank();
    b.blank();
    b.finish()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::super::test_support::{plain, Fixture};
    use super::*;

    #[test]
    fn test_hero_settled() {
        let fixture = Fixture::new();
        let view = build(&fixture.ctx(76));
        let text = plain(&view.lines);
        assert!(text[3].contains("Hi, I'm Dominik Kasza"));
        assert!(text[2].trim().is_empty());
        assert!(text.iter().any(|l| l.contains("Get in Touch") && l.contains("View Projects")));
        assert_eq!(view.focus_rows.len(), 2);
    }

    #[test]
    fn test_name_bounce_lifts_first_letter() {
        let mut fixture = Fixture::new();
        // 450 ms after mount: the first character is at the top of its bounce
        fixture.now = fixture.now - Duration::from_secs(10) + Duration::from_millis(450);
        let view = build(&fixture.ctx(76));
        let text = plain(&view.lines);
        assert!(text[2].contains('D'));
        assert!(!text[3].contains("Dominik"));
        // Row count does not change while animating
        let settled = build(&Fixture::new().ctx(76));
        assert_eq!(view.lines.len(), settled.lines.len());
    }

    #[test]
    fn test_heading_hidden_before_delay() {
        let mut fixture = Fixture::new();
        fixture.now -= Duration::from_secs(10);
        let view = build(&fixture.ctx(76));
        let heading = &view.lines[3];
        assert!(heading
            .spans
            .iter()
            .filter(|s| !s.content.trim().is_empty())
            .all(|s| s.style.fg == Some(fixture.theme.bg0)));
    }
}
