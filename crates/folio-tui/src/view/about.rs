use folio_core::page::SectionId;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::text::{image_frame, wrap_words};
use super::{SectionBuilder, SectionView, ViewContext};

const PROFILE_FRAME_WIDTH: usize = 32;

pub(super) fn build(ctx: &ViewContext<'_>) -> SectionView {
    let theme = ctx.theme;
    let width = ctx.width as usize;
    let mut b = SectionBuilder::new(SectionId::About);

    b.blank();
    b.title(ctx, SectionId::About.title());

    for paragraph in &ctx.portfolio.about {
        for row in wrap_words(paragraph, width) {
            b.push(Line::from(Span::styled(row, theme.body())));
        }
        b.blank();
    }

    let frame_width = PROFILE_FRAME_WIDTH.min(width);
    let frame_style = Style::default().fg(theme.border);
    let caption = Style::default().fg(theme.muted);
    // Empty placeholder; the page ships no profile image
    for line in image_frame("Profile photo", "", frame_width, frame_style, caption) {
        b.push(line.centered());
    }

    b.blank();
    b.finish()
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{plain, Fixture};
    use super::*;

    #[test]
    fn test_about_wraps_to_width() {
        let fixture = Fixture::new();
        let view = build(&fixture.ctx(40));
        let text = plain(&view.lines);
        assert!(text.iter().any(|l| l.starts_with("I'm a passionate developer")));
        assert!(text.iter().any(|l| l.contains("Profile photo")));
        assert!(!text.iter().any(|l| l.contains(".jpg")));
        for line in &view.lines {
            assert!(line.width() <= 40);
        }
    }

    #[test]
    fn test_narrow_width_is_taller() {
        let fixture = Fixture::new();
        let wide = build(&fixture.ctx(100)).lines.len();
        let narrow = build(&fixture.ctx(30)).lines.len();
        assert!(narrow > wide);
    }
}
