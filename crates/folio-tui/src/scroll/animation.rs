//! L3 Molecular Layer: Scroll animation controller
//!
//! Combines easing and timing to move the page body between scroll offsets.

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete_at, lerp_u16, progress_at};

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

/// Scroll animation controller for the page body.
///
/// Start an animation with `scroll_to`/`scroll_by`, then call `update_at`
/// every frame to advance the interpolated position.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    current_scroll: u16,
    /// Line deltas received since the last frame, applied together
    pending_delta: i32,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current_scroll: 0,
            pending_delta: 0,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the next frame has scroll work to do
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Final position once the running animation completes
    pub fn target_scroll(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_scroll)
    }

    #[inline]
    pub fn current_scroll(&self) -> u16 {
        self.current_scroll
    }

    /// Set scroll position immediately (no animation)
    pub fn set_scroll(&mut self, scroll: u16) {
        self.animation = None;
        self.current_scroll = scroll;
        self.pending_delta = 0;
    }

    /// Animate to `target` using the line-scroll duration
    pub fn scroll_to(&mut self, target: u16, max_scroll: u16, now: Instant) {
        let duration = self.config.line_duration();
        self.animate_to(target, max_scroll, duration, now);
    }

    /// Animate to an anchor target using the navigation duration.
    ///
    /// Calling this again for the same target restarts the animation from the
    /// current position.
    pub fn navigate_to(&mut self, target: u16, max_scroll: u16, now: Instant) {
        let duration = self.config.navigate_duration();
        self.animate_to(target, max_scroll, duration, now);
    }

    fn animate_to(&mut self, target: u16, max_scroll: u16, duration: Duration, now: Instant) {
        let target = target.min(max_scroll);
        self.pending_delta = 0;

        if !self.config.smooth_enabled || duration.is_zero() {
            self.current_scroll = target;
            self.animation = None;
            return;
        }

        if self.current_scroll == target {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current_scroll,
            to: target,
            duration,
            easing: self.config.easing,
        });
    }

    /// Scroll by a delta (positive = down); batched until the next update
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if !self.config.is_smooth() {
            let lines = delta * self.config.scroll_lines.max(1) as i32;
            self.current_scroll =
                (self.current_scroll as i32 + lines).clamp(0, max_scroll as i32) as u16;
            self.animation = None;
            return;
        }

        self.pending_delta += delta;
    }

    pub fn scroll_half_page(&mut self, down: bool, viewport_height: u16, max_scroll: u16) {
        let half_page = (viewport_height / 2).max(1) as i32;
        self.scroll_by(if down { half_page } else { -half_page }, max_scroll);
    }

    pub fn scroll_full_page(&mut self, down: bool, viewport_height: u16, max_scroll: u16) {
        let page = viewport_height.max(1) as i32;
        self.scroll_by(if down { page } else { -page }, max_scroll);
    }

    /// Advance the animation to `now` and return the current scroll position
    pub fn update_at(&mut self, now: Instant, max_scroll: u16) -> u16 {
        if self.pending_delta != 0 {
            let target = self.target_scroll();
            let new_target =
                (target as i32 + self.pending_delta).clamp(0, max_scroll as i32) as u16;
            self.pending_delta = 0;

            if new_target != self.current_scroll {
                self.animation = Some(ActiveAnimation {
                    start: now,
                    from: self.current_scroll,
                    to: new_target,
                    duration: self.config.line_duration(),
                    easing: self.config.easing,
                });
            } else {
                self.animation = None;
            }
        }

        if let Some(ref anim) = self.animation {
            if is_complete_at(anim.start, now, anim.duration) {
                self.current_scroll = anim.to;
                self.animation = None;
            } else {
                let t = progress_at(anim.start, now, anim.duration);
                let eased_t = anim.easing.apply(t);
                self.current_scroll = lerp_u16(anim.from, anim.to, eased_t);
            }
        }

        // Layout can shrink (a card collapsed); keep the position in range
        self.current_scroll = self.current_scroll.min(max_scroll);
        self.current_scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn smooth() -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: 100,
            navigate_duration_ms: 400,
            easing: EasingType::Linear,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let config = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut animator = ScrollAnimator::new(config);

        animator.navigate_to(100, 200, Instant::now());
        assert_eq!(animator.current_scroll(), 100);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_navigate_is_smooth() {
        let start = Instant::now();
        let mut animator = ScrollAnimator::new(smooth());

        animator.navigate_to(80, 200, start);
        assert!(animator.is_animating());
        // No jump on the frame the navigation starts
        assert_eq!(animator.update_at(start, 200), 0);
        assert_eq!(animator.update_at(start + ms(200), 200), 40);
        assert_eq!(animator.update_at(start + ms(400), 200), 80);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_navigate_has_its_own_duration() {
        let start = Instant::now();
        let mut animator = ScrollAnimator::new(ScrollConfig {
            animation_duration_ms: 0,
            navigate_duration_ms: 450,
            ..smooth()
        });

        animator.navigate_to(80, 200, start);
        assert!(animator.is_animating());
        assert_eq!(animator.update_at(start, 200), 0);
        assert_eq!(animator.update_at(start + ms(450), 200), 80);

        // Line scrolling with a zero duration stays instant
        animator.scroll_by(5, 200);
        assert_eq!(animator.current_scroll(), 85);
    }

    #[test]
    fn test_zero_navigate_duration_jumps() {
        let mut animator = ScrollAnimator::new(ScrollConfig {
            navigate_duration_ms: 0,
            ..smooth()
        });
        animator.navigate_to(80, 200, Instant::now());
        assert_eq!(animator.current_scroll(), 80);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_navigate_again_restarts_from_current() {
        let start = Instant::now();
        let mut animator = ScrollAnimator::new(smooth());

        animator.navigate_to(80, 200, start);
        animator.update_at(start + ms(200), 200);
        animator.navigate_to(80, 200, start + ms(200));
        assert_eq!(animator.target_scroll(), 80);
        assert_eq!(animator.update_at(start + ms(400), 200), 60);
    }

    #[test]
    fn test_scroll_by_batching() {
        let start = Instant::now();
        let mut animator = ScrollAnimator::new(smooth());

        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);

        animator.update_at(start, 200);
        assert_eq!(animator.target_scroll(), 30);
        assert_eq!(animator.update_at(start + ms(100), 200), 30);
    }

    #[test]
    fn test_scroll_clamp_max() {
        let mut animator = ScrollAnimator::new(smooth());
        animator.set_scroll(50);
        animator.navigate_to(300, 100, Instant::now());
        assert_eq!(animator.target_scroll(), 100);
    }

    #[test]
    fn test_update_clamps_when_layout_shrinks() {
        let mut animator = ScrollAnimator::new(smooth());
        animator.set_scroll(90);
        assert_eq!(animator.update_at(Instant::now(), 40), 40);
    }

    #[test]
    fn test_instant_scroll_uses_scroll_lines() {
        let config = ScrollConfig {
            smooth_enabled: false,
            scroll_lines: 3,
            ..Default::default()
        };
        let mut animator = ScrollAnimator::new(config);
        animator.scroll_by(1, 100);
        assert_eq!(animator.current_scroll(), 3);
        animator.scroll_by(-5, 100);
        assert_eq!(animator.current_scroll(), 0);
    }
}
