use tracing::debug;

use super::disclosure::{DisclosureAction, DisclosureState};
use super::navigator::navigate;
use super::reveal::RevealTracker;
use crate::config::RevealConfig;
use crate::page::{PageLayout, SectionId};

/// Events the host feeds into the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMsg {
    ToggleSkill(String),
    ToggleCourse(String),
    /// In-page anchor activation, id with or without '#'
    Navigate(String),
    /// The visible window of page rows changed
    ViewportChanged { top: u16, height: u16 },
}

/// Work the host must carry out after an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Smoothly scroll the body to this row
    ScrollTo(u16),
    /// These sections just entered the viewport for the first time
    Revealed(Vec<SectionId>),
}

/// Session-local page state
#[derive(Debug, Clone)]
pub struct PageState {
    pub disclosure: DisclosureState,
    pub reveal: RevealTracker,
    viewport_height: u16,
}

impl PageState {
    pub fn new(reveal: &RevealConfig) -> Self {
        Self {
            disclosure: DisclosureState::default(),
            reveal: RevealTracker::new(reveal),
            viewport_height: 0,
        }
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn update(&mut self, msg: PageMsg, layout: &PageLayout) -> Option<Effect> {
        match msg {
            PageMsg::ToggleSkill(key) => {
                self.apply(DisclosureAction::ToggleSkill(key));
                None
            }
            PageMsg::ToggleCourse(key) => {
                self.apply(DisclosureAction::ToggleCourse(key));
                None
            }
            PageMsg::Navigate(anchor) => {
                navigate(&anchor, layout, self.viewport_height).map(Effect::ScrollTo)
            }
            PageMsg::ViewportChanged { top, height } => {
                self.viewport_height = height;
                let revealed = self.reveal.observe(layout, top, height);
                if revealed.is_empty() {
                    None
                } else {
                    Some(Effect::Revealed(revealed))
                }
            }
        }
    }

    fn apply(&mut self, action: DisclosureAction) {
        debug!("Disclosure {:?}", action);
        let current = std::mem::take(&mut self.disclosure);
        self.disclosure = current.reduce(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::RevealState;

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
    fn test_initial_load() {
        let state = PageState::new(&RevealConfig::default());
        assert_eq!(state.disclosure, DisclosureState::default());
        for id in SectionId::BODY.into_iter().filter(|s| s.reveals_on_scroll()) {
            assert_eq!(state.reveal.state(id), RevealState::Hidden);
        }
    }

    #[test]
    fn test_toggle_messages() {
        let layout = layout();
        let mut state = PageState::new(&RevealConfig::default());
        assert_eq!(state.update(PageMsg::ToggleSkill("React".into()), &layout), None);
        assert_eq!(state.update(PageMsg::ToggleCourse("Database Systems".into()), &layout), None);
        assert!(state.disclosure.is_skill_expanded("React"));
        assert!(state.disclosure.is_course_expanded("Database Systems"));

        state.update(PageMsg::ToggleSkill("React".into()), &layout);
        assert_eq!(state.disclosure.expanded_skill, None);
        assert!(state.disclosure.is_course_expanded("Database Systems"));
    }

    #[test]
    fn test_navigate_uses_last_viewport() {
        let layout = layout();
        let mut state = PageState::new(&RevealConfig::default());
        state.update(PageMsg::ViewportChanged { top: 0, height: 60 }, &layout);
        assert_eq!(
            state.update(PageMsg::Navigate("#education".into()), &layout),
            Some(Effect::ScrollTo(65))
        );
        assert_eq!(
            state.update(PageMsg::Navigate("skills".into()), &layout),
            Some(Effect::ScrollTo(22))
        );
    }

    #[test]
    fn test_navigate_contact_is_noop() {
        let layout = layout();
        let mut state = PageState::new(&RevealConfig::default());
        state.update(PageMsg::ViewportChanged { top: 0, height: 20 }, &layout);
        let before = state.disclosure.clone();
        assert_eq!(state.update(PageMsg::Navigate("#contact".into()), &layout), None);
        assert_eq!(state.disclosure, before);
    }

    #[test]
    fn test_viewport_reveals_once() {
        let layout = layout();
        let mut state = PageState::new(&RevealConfig::default());
        assert_eq!(
            state.update(PageMsg::ViewportChanged { top: 0, height: 20 }, &layout),
            Some(Effect::Revealed(vec![SectionId::Hero, SectionId::About]))
        );
        assert_eq!(
            state.update(PageMsg::ViewportChanged { top: 0, height: 20 }, &layout),
            None
        );
    }
}
