use super::section::SectionId;

/// A section's vertical extent in page rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBox {
    pub id: SectionId,
    pub top: u16,
    pub height: u16,
}

impl SectionBox {
    /// One past the last row
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }

    /// Whether the box overlaps rows `[top, bottom)`
    pub fn intersects(&self, top: u16, bottom: u16) -> bool {
        self.height > 0 && self.top < bottom && self.bottom() > top
    }
}

/// Vertical layout of the scrolling body, produced by the rendering host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    sections: Vec<SectionBox>,
}

impl PageLayout {
    /// Stack sections top to bottom in the given order
    pub fn stack(heights: impl IntoIterator<Item = (SectionId, u16)>) -> Self {
        let mut top = 0u16;
        let sections = heights
            .into_iter()
            .map(|(id, height)| {
                let section = SectionBox { id, top, height };
                top = top.saturating_add(height);
                section
            })
            .collect();
        Self { sections }
    }

    pub fn sections(&self) -> &[SectionBox] {
        &self.sections
    }

    pub fn total_height(&self) -> u16 {
        self.sections.last().map(|s| s.bottom()).unwrap_or(0)
    }

    pub fn section(&self, id: SectionId) -> Option<&SectionBox> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Find the section an in-page anchor points at
    pub fn resolve(&self, anchor: &str) -> Option<&SectionBox> {
        let id = SectionId::from_anchor(anchor)?;
        self.section(id)
    }

    /// Section containing `row`
    pub fn section_at(&self, row: u16) -> Option<&SectionBox> {
        self.sections
            .iter()
            .find(|s| s.top <= row && row < s.bottom())
    }

    /// Largest scroll offset that still fills the viewport
    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.total_height().saturating_sub(viewport_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PageLayout {
        PageLayout::stack([
            (SectionId::Hero, 10),
            (SectionId::About, 8),
            (SectionId::Skills, 20),
            (SectionId::Footer, 3),
        ])
    }

    #[test]
    fn test_stack_offsets() {
        let layout = sample();
        assert_eq!(layout.section(SectionId::About).unwrap().top, 10);
        assert_eq!(layout.section(SectionId::Skills).unwrap().top, 18);
        assert_eq!(layout.total_height(), 41);
    }

    #[test]
    fn test_resolve_anchor() {
        let layout = sample();
        assert_eq!(layout.resolve("skills").map(|s| s.top), Some(18));
        assert!(layout.resolve("contact").is_none());
        // Known anchor whose section isn't laid out
        assert!(layout.resolve("projects").is_none());
    }

    #[test]
    fn test_section_at() {
        let layout = sample();
        assert_eq!(layout.section_at(0).map(|s| s.id), Some(SectionId::Hero));
        assert_eq!(layout.section_at(17).map(|s| s.id), Some(SectionId::About));
        assert_eq!(layout.section_at(41), None);
    }

    #[test]
    fn test_max_scroll() {
        let layout = sample();
        assert_eq!(layout.max_scroll(20), 21);
        assert_eq!(layout.max_scroll(100), 0);
    }

    #[test]
    fn test_intersects() {
        let b = SectionBox { id: SectionId::About, top: 10, height: 5 };
        assert!(b.intersects(0, 11));
        assert!(!b.intersects(0, 10));
        assert!(b.intersects(14, 30));
        assert!(!b.intersects(15, 30));
    }
}
