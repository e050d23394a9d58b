//! Animation clocks for reveal, card expansion and the hero entrance
//!
//! The interaction state in folio-core only says *whether* a section is
//! revealed or a card expanded. This module remembers *when* that happened so
//! the view can interpolate.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use folio_core::config::UiConfig;
use folio_core::interaction::{EntranceSchedule, RevealState};
use folio_core::page::SectionId;
use folio_core::{EasingType, Portfolio};

use crate::scroll::timing::{is_complete_at, progress_at};
use crate::scroll::EasingTypeExt;

/// Delay between consecutive skill or course cards revealing
pub const CARD_STAGGER: Duration = Duration::from_millis(100);
/// Delay between consecutive project cards revealing
pub const PROJECT_STAGGER: Duration = Duration::from_millis(200);

/// How long the last staggered card of any section trails its section
pub fn stagger_tail(portfolio: &Portfolio) -> Duration {
    let last = |count: usize, step: Duration| step * count.saturating_sub(1) as u32;
    last(portfolio.skills.len(), CARD_STAGGER)
        .max(last(portfolio.education.courses.len(), CARD_STAGGER))
        .max(last(portfolio.projects.len(), PROJECT_STAGGER))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    Skill,
    Course,
}

/// How a revealing section is drawn on this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    /// Rows the content is pushed down
    pub offset: u16,
    /// 0 = full color, 1 = background
    pub fade: f64,
}

impl RevealFrame {
    pub const SETTLED: RevealFrame = RevealFrame {
        offset: 0,
        fade: 0.0,
    };
}

#[derive(Debug, Clone)]
pub struct Motion {
    mounted_at: Instant,
    reveals: HashMap<SectionId, Instant>,
    expansions: HashMap<CardKind, (String, Instant)>,
    reveal_duration: Duration,
    reveal_offset: u16,
    expand_duration: Duration,
    stagger_tail: Duration,
    entrance: EntranceSchedule,
}

impl Motion {
    pub fn new(config: &UiConfig, now: Instant) -> Self {
        Self {
            mounted_at: now,
            reveals: HashMap::new(),
            expansions: HashMap::new(),
            reveal_duration: Duration::from_millis(config.reveal.duration_ms),
            reveal_offset: config.reveal.offset_rows,
            expand_duration: Duration::from_millis(config.disclosure.expand_duration_ms),
            stagger_tail: Duration::ZERO,
            entrance: EntranceSchedule::hero(),
        }
    }

    /// Keep animating until staggered items up to `tail` behind their section settle
    pub fn with_stagger_tail(mut self, tail: Duration) -> Self {
        self.stagger_tail = tail;
        self
    }

    pub fn entrance(&self) -> &EntranceSchedule {
        &self.entrance
    }

    /// Time since the page was mounted
    pub fn entrance_elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.mounted_at)
    }

    pub fn record_reveals(&mut self, sections: &[SectionId], now: Instant) {
        for id in sections {
            self.reveals.entry(*id).or_insert(now);
        }
    }

    /// Start the expand transition for `key`, or forget it when the card collapsed
    pub fn set_expanded(&mut self, kind: CardKind, key: Option<&str>, now: Instant) {
        match key {
            Some(key) => {
                let unchanged = self
                    .expansions
                    .get(&kind)
                    .is_some_and(|(current, _)| current == key);
                if !unchanged {
                    self.expansions.insert(kind, (key.to_string(), now));
                }
            }
            None => {
                self.expansions.remove(&kind);
            }
        }
    }

    /// Reveal frame for a section, `None` while it is still hidden
    pub fn reveal_frame(&self, id: SectionId, state: RevealState, now: Instant) -> Option<RevealFrame> {
        if state == RevealState::Hidden {
            return None;
        }
        let Some(start) = self.reveals.get(&id) else {
            return Some(RevealFrame::SETTLED);
        };
        let t = EasingType::Cubic.apply(progress_at(*start, now, self.reveal_duration));
        Some(RevealFrame {
            offset: ((1.0 - t) * self.reveal_offset as f64).round() as u16,
            fade: 1.0 - t,
        })
    }

    /// Extra fade for the `index`th item of a section that reveals items one by one.
    ///
    /// Item `i` starts `i * step` after its section. The result is applied on top
    /// of the section's own fade, so item 0 gets none.
    pub fn stagger_fade(&self, id: SectionId, index: usize, step: Duration, now: Instant) -> f64 {
        let Some(start) = self.reveals.get(&id) else {
            return 0.0;
        };
        let shown = |from: Instant| {
            EasingType::Cubic.apply(progress_at(from, now, self.reveal_duration))
        };
        let section = shown(*start);
        if section <= 0.0 {
            return 0.0;
        }
        let item = shown(*start + step * index as u32);
        (1.0 - item / section).clamp(0.0, 1.0)
    }

    /// Eased expand progress of a card; cards without a running transition are fully open
    pub fn expand_progress(&self, kind: CardKind, key: &str, now: Instant) -> f64 {
        match self.expansions.get(&kind) {
            Some((current, start)) if current == key => {
                EasingType::EaseInOut.apply(progress_at(*start, now, self.expand_duration))
            }
            _ => 1.0,
        }
    }

    /// Whether any clock still needs frames
    pub fn is_animating(&self, now: Instant, name_chars: usize) -> bool {
        let entrance = !self
            .entrance
            .is_complete(name_chars, self.entrance_elapsed(now));
        let reveal = self
            .reveals
            .values()
            .any(|start| !is_complete_at(*start, now, self.reveal_duration + self.stagger_tail));
        let expand = self
            .expansions
            .values()
            .any(|(_, start)| !is_complete_at(*start, now, self.expand_duration));
        entrance || reveal || expand
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_hidden_has_no_frame() {
        let now = Instant::now();
        let motion = Motion::new(&UiConfig::default(), now);
        assert_eq!(motion.reveal_frame(SectionId::Skills, RevealState::Hidden, now), None);
    }

    #[test]
    fn test_reveal_frame_settles() {
        let now = Instant::now();
        let mut motion = Motion::new(&UiConfig::default(), now);
        motion.record_reveals(&[SectionId::Skills], now);

        let first = motion
            .reveal_frame(SectionId::Skills, RevealState::Revealed, now)
            .unwrap();
        assert_eq!(first.offset, 2);
        assert_eq!(first.fade, 1.0);

        let done = motion
            .reveal_frame(SectionId::Skills, RevealState::Revealed, now + ms(600))
            .unwrap();
        assert_eq!(done, RevealFrame::SETTLED);
    }

    #[test]
    fn test_reveal_recorded_once() {
        let now = Instant::now();
        let mut motion = Motion::new(&UiConfig::default(), now);
        motion.record_reveals(&[SectionId::About], now);
        motion.record_reveals(&[SectionId::About], now + ms(5000));
        let frame = motion
            .reveal_frame(SectionId::About, RevealState::Revealed, now + ms(5000))
            .unwrap();
        assert_eq!(frame, RevealFrame::SETTLED);
    }

    #[test]
    fn test_expand_progress() {
        let now = Instant::now();
        let mut motion = Motion::new(&UiConfig::default(), now);
        motion.set_expanded(CardKind::Skill, Some("React"), now);

        assert_eq!(motion.expand_progress(CardKind::Skill, "React", now), 0.0);
        assert!((motion.expand_progress(CardKind::Skill, "React", now + ms(150)) - 0.5).abs() < 1e-9);
        assert_eq!(motion.expand_progress(CardKind::Skill, "React", now + ms(300)), 1.0);
        // Course cards have their own clock
        assert_eq!(motion.expand_progress(CardKind::Course, "React", now), 1.0);

        motion.set_expanded(CardKind::Skill, None, now);
        assert!(!motion.is_animating(now + ms(10_000), 13));
    }

    #[test]
    fn test_stagger_delays_later_items() {
        let now = Instant::now();
        let mut motion = Motion::new(&UiConfig::default(), now);
        motion.record_reveals(&[SectionId::Skills], now);

        let at = now + ms(150);
        assert_eq!(motion.stagger_fade(SectionId::Skills, 0, CARD_STAGGER, at), 0.0);
        let second = motion.stagger_fade(SectionId::Skills, 1, CARD_STAGGER, at);
        assert!(second > 0.0 && second < 1.0);
        assert_eq!(motion.stagger_fade(SectionId::Skills, 3, CARD_STAGGER, at), 1.0);

        // Sections without a reveal clock never stagger
        assert_eq!(motion.stagger_fade(SectionId::Projects, 2, PROJECT_STAGGER, at), 0.0);

        let settled = now + ms(600) + CARD_STAGGER * 11;
        assert_eq!(motion.stagger_fade(SectionId::Skills, 11, CARD_STAGGER, settled), 0.0);
    }

    #[test]
    fn test_stagger_tail_keeps_frames_coming() {
        let portfolio = Portfolio::builtin();
        let tail = stagger_tail(&portfolio);
        // 12 skills at 100ms apart
        assert_eq!(tail, ms(1100));

        let now = Instant::now();
        let mut motion = Motion::new(&UiConfig::default(), now).with_stagger_tail(tail);
        let revealed = now + ms(5000);
        motion.record_reveals(&[SectionId::Skills], revealed);
        assert!(motion.is_animating(revealed + ms(1500), 13));
        assert!(!motion.is_animating(revealed + ms(1800), 13));
    }

    #[test]
    fn test_entrance_keeps_animating() {
        let now = Instant::now();
        let motion = Motion::new(&UiConfig::default(), now);
        assert!(motion.is_animating(now + ms(100), 13));
        assert!(!motion.is_animating(now + ms(3000), 13));
    }
}
