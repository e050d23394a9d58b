use std::f64::consts::PI;
use std::time::Duration;

/// Hero elements that animate in on mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntranceElement {
    Heading,
    Tagline,
    CallToAction,
}

/// One `{element, delay, duration}` entry of the mount animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntranceStep {
    pub element: EntranceElement,
    pub delay: Duration,
    pub duration: Duration,
}

impl EntranceStep {
    /// Linear progress in [0, 1]; 0 until the delay has passed
    pub fn progress(&self, elapsed: Duration) -> f64 {
        let Some(local) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (local.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn end(&self) -> Duration {
        self.delay + self.duration
    }
}

/// Staggered per-character bounce of the owner's name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameBounce {
    /// Extra delay added per character index
    pub stagger: Duration,
    /// Length of one up-and-down cycle
    pub duration: Duration,
    /// How many cycles each character plays
    pub plays: u32,
}

impl Default for NameBounce {
    fn default() -> Self {
        Self {
            stagger: Duration::from_millis(100),
            duration: Duration::from_millis(900),
            plays: 2,
        }
    }
}

impl NameBounce {
    /// Lift of character `index` in [0, 1] (0 = resting, 1 = top of the bounce)
    pub fn lift(&self, index: usize, elapsed: Duration) -> f64 {
        if self.duration.is_zero() || self.plays == 0 {
            return 0.0;
        }
        let Some(local) = elapsed.checked_sub(self.stagger * index as u32) else {
            return 0.0;
        };
        let cycle = self.duration.as_secs_f64();
        let t = local.as_secs_f64();
        if t >= cycle * self.plays as f64 {
            return 0.0;
        }
        let phase = (t % cycle) / cycle;
        (PI * phase).sin().max(0.0)
    }

    /// Time at which the last of `chars` characters settles
    pub fn end(&self, chars: usize) -> Duration {
        if chars == 0 {
            return Duration::ZERO;
        }
        self.stagger * (chars as u32 - 1) + self.duration * self.plays
    }
}

/// Mount-time animation list for the hero section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntranceSchedule {
    pub steps: Vec<EntranceStep>,
    pub name: NameBounce,
}

impl EntranceSchedule {
    pub fn hero() -> Self {
        let step = |element, delay_ms| EntranceStep {
            element,
            delay: Duration::from_millis(delay_ms),
            duration: Duration::from_millis(600),
        };
        Self {
            steps: vec![
                step(EntranceElement::Heading, 200),
                step(EntranceElement::Tagline, 400),
                step(EntranceElement::CallToAction, 600),
            ],
            name: NameBounce::default(),
        }
    }

    /// Progress of `element`; elements without an entry are fully shown
    pub fn progress(&self, element: EntranceElement, elapsed: Duration) -> f64 {
        self.steps
            .iter()
            .find(|s| s.element == element)
            .map(|s| s.progress(elapsed))
            .unwrap_or(1.0)
    }

    /// Whether every step and every character bounce has finished
    pub fn is_complete(&self, name_chars: usize, elapsed: Duration) -> bool {
        let steps_end = self.steps.iter().map(|s| s.end()).max().unwrap_or(Duration::ZERO);
        elapsed >= steps_end.max(self.name.end(name_chars))
    }
}
