use tracing::debug;

use crate::page::PageLayout;

/// Resolve an in-page anchor to the scroll offset that brings its section to the top.
///
/// Accepts the id with or without a leading '#'. An anchor without a section
/// yields `None` and nothing else happens.
pub fn navigate(anchor: &str, layout: &PageLayout, viewport_height: u16) -> Option<u16> {
    let id = anchor.strip_prefix('#').unwrap_or(anchor);
    let section = layout.resolve(id)?;
    let target = section.top.min(layout.max_scroll(viewport_height));
    debug!("Navigate #{} -> row {}", id, target);
    Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::SectionId;

    fn layout() -> PageLayout {
        PageLayout::stack([
            (SectionId::Hero, 12),
            (SectionId::About, 10),
            (SectionId::Skills, 30),
            (SectionId::Projects, 30),
            (SectionId::Education, 40),
            (SectionId::Footer, 3),
        ])
    }

    #[test]
    fn test_navigate_to_skills() {
        assert_eq!(navigate("skills", &layout(), 20), Some(22));
        assert_eq!(navigate("#skills", &layout(), 20), Some(22));
    }

    #[test]
    fn test_navigate_missing_anchor() {
        assert_eq!(navigate("contact", &layout(), 20), None);
        assert_eq!(navigate("", &layout(), 20), None);
    }

    #[test]
    fn test_navigate_clamps_near_bottom() {
        // total 125, viewport 40 -> max scroll 85; education starts at 82
        assert_eq!(navigate("education", &layout(), 40), Some(82));
        assert_eq!(navigate("education", &layout(), 60), Some(65));
    }

    #[test]
    fn test_navigate_is_idempotent() {
        let layout = layout();
        assert_eq!(navigate("projects", &layout, 20), navigate("projects", &layout, 20));
    }
}
