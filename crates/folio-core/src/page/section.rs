use std::fmt;

use serde::Serialize;

/// Sections of the page in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Nav,
    Hero,
    About,
    Skills,
    Projects,
    Education,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Nav,
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Footer,
    ];

    /// Sections laid out in the scrolling body (the nav bar is fixed)
    pub const BODY: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Footer,
    ];

    /// Fragment identifier, for sections that can be navigated to
    pub fn anchor(&self) -> Option<&'static str> {
        match self {
            SectionId::About => Some("about"),
            SectionId::Skills => Some("skills"),
            SectionId::Projects => Some("projects"),
            SectionId::Education => Some("education"),
            SectionId::Nav | SectionId::Hero | SectionId::Footer => None,
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == Some(anchor))
    }

    /// Whether the section fades in when scrolled into view
    pub fn reveals_on_scroll(&self) -> bool {
        !matches!(self, SectionId::Nav | SectionId::Footer)
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Nav => "Navigation",
            SectionId::Hero => "Home",
            SectionId::About => "About Me",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Education => "Education",
            SectionId::Footer => "Footer",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
