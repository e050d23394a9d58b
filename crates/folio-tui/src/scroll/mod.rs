//! Smooth scrolling for the page body
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions
//! - `timing` - Progress and interpolation over elapsed time
//! - `config` - Duration accessors for `ScrollConfig` (defined in folio-core)
//!
//! ## L3 Molecular Layer
//! - `animation` - Scroll animator combining the atoms
//!
//! ```ignore
//! let mut animator = ScrollAnimator::new(config.ui.scroll.clone());
//! animator.navigate_to(section_top, max_scroll, Instant::now());
//! // every frame
//! let scroll = animator.update_at(Instant::now(), max_scroll);
//! ```

// L4 Atomic Layer
pub mod config;
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
