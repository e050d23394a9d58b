use std::collections::BTreeMap;

use tracing::debug;

use crate::config::RevealConfig;
use crate::page::{PageLayout, SectionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    /// Terminal: a revealed section never goes back to hidden
    Revealed,
}

/// Per-section reveal latches driven by viewport observations
#[derive(Debug, Clone)]
pub struct RevealTracker {
    states: BTreeMap<SectionId, RevealState>,
    margin_rows: u16,
}

impl RevealTracker {
    pub fn new(config: &RevealConfig) -> Self {
        let initial = if config.enabled {
            RevealState::Hidden
        } else {
            RevealState::Revealed
        };
        let states = SectionId::ALL
            .into_iter()
            .filter(|s| s.reveals_on_scroll())
            .map(|s| (s, initial))
            .collect();
        Self {
            states,
            margin_rows: config.margin_rows,
        }
    }

    /// Reveal state of a section; sections that don't animate count as revealed
    pub fn state(&self, id: SectionId) -> RevealState {
        self.states.get(&id).copied().unwrap_or(RevealState::Revealed)
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.state(id) == RevealState::Revealed
    }

    pub fn all_revealed(&self) -> bool {
        self.states.values().all(|s| *s == RevealState::Revealed)
    }

    /// Latch every hidden section intersecting the margin-shrunk viewport.
    ///
    /// Returns the sections revealed by this observation, in document order.
    pub fn observe(&mut self, layout: &PageLayout, top: u16, height: u16) -> Vec<SectionId> {
        if height == 0 {
            return Vec::new();
        }

        // Keep at least one row of viewport when the margin is larger than the screen
        let margin = self.margin_rows.min(height.saturating_sub(1) / 2);
        let view_top = top.saturating_add(margin);
        let view_bottom = top.saturating_add(height).saturating_sub(margin);

        let mut revealed = Vec::new();
        for section in layout.sections() {
            let Some(state) = self.states.get_mut(&section.id) else {
                continue;
            };
            if *state == RevealState::Hidden && section.intersects(view_top, view_bottom) {
                *state = RevealState::Revealed;
                debug!("Revealed section {}", section.id);
                revealed.push(section.id);
            }
        }
        revealed
    }
}
