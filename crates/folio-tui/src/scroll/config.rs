//! L4 Atomic Layer: Duration accessors for `ScrollConfig`

use std::time::Duration;

pub use folio_core::ScrollConfig;

const FALLBACK_FRAME: Duration = Duration::from_millis(16);

pub trait ScrollConfigExt {
    /// Duration of a line or page scroll
    fn line_duration(&self) -> Duration;

    /// Duration of an anchor navigation
    fn navigate_duration(&self) -> Duration;

    /// Redraw interval while anything animates
    fn frame_interval(&self) -> Duration;

    /// Line scrolling is smooth: enabled with a non-zero line duration
    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    fn line_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    fn navigate_duration(&self) -> Duration {
        Duration::from_millis(self.navigate_duration_ms)
    }

    fn frame_interval(&self) -> Duration {
        match self.animation_fps {
            0 => FALLBACK_FRAME,
            fps => Duration::from_millis((1000 / u64::from(fps)).max(1)),
        }
    }

    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}
