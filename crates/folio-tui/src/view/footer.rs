use folio_core::page::SectionId;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::text::spans_width;
use super::{SectionBuilder, SectionView, ViewContext};
use crate::focus::FocusTarget;

pub(super) fn build(ctx: &ViewContext<'_>) -> SectionView {
    let theme = ctx.theme;
    let footer = &ctx.portfolio.footer;
    let width = ctx.width as usize;
    let mut b = SectionBuilder::new(SectionId::Footer);

    b.push(Line::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(theme.border),
    )));
    b.blank();

    let mut links: Vec<Span<'static>> = Vec::new();
    for (i, link) in footer.links.iter().enumerate() {
        let style = if ctx.is_focused(FocusTarget::FooterLink(i)) {
            theme.focused()
        } else {
            Style::default().fg(theme.muted).add_modifier(Modifier::UNDERLINED)
        };
        if i > 0 {
            links.push(Span::raw("  "));
        }
        links.push(Span::styled(link.label.clone(), style));
    }

    let copyright = Span::styled(footer.copyright.clone(), Style::default().fg(theme.muted));
    let links_width = spans_width(&links);
    // Copyright and links share a row when they fit, otherwise stack
    if copyright.content.width() + links_width + 2 <= width {
        let row = b.row();
        let gap = width - copyright.content.width() - links_width;
        let mut spans = vec![copyright, Span::raw(" ".repeat(gap))];
        spans.extend(links);
        b.push(Line::from(spans));
        for i in 0..footer.links.len() {
            b.focus(FocusTarget::FooterLink(i), row);
        }
    } else {
        b.push(Line::from(copyright));
        let row = b.row();
        b.push(Line::from(links));
        for i in 0..footer.links.len() {
            b.focus(FocusTarget::FooterLink(i), row);
        }
    }

    b.blank();
    b.finish()
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{plain, Fixture};
    use super::*;

    #[test]
    fn test_footer_single_row() {
        let fixture = Fixture::new();
        let view = build(&fixture.ctx(80));
        let text = plain(&view.lines);
        assert!(text[2].starts_with("© 2024 Dominik Kasza. All rights reserved."));
        assert!(text[2].ends_with("GitHub  LinkedIn"));
        assert_eq!(view.focus_rows[1], (FocusTarget::FooterLink(1), 2));
    }

    #[test]
    fn test_footer_stacks_when_narrow() {
        let fixture = Fixture::new();
        let view = build(&fixture.ctx(30));
        let text = plain(&view.lines);
        assert_eq!(text[3], "GitHub  LinkedIn");
        assert_eq!(view.focus_rows[0], (FocusTarget::FooterLink(0), 3));
    }
}
