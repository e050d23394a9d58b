//! Page interaction layer
//!
//! Three independent controllers over disjoint session state:
//! - `disclosure` - which skill card and which course card is expanded
//! - `reveal` - one-way Hidden -> Revealed latch per section
//! - `navigator` - anchor resolution for smooth in-page scrolling
//!
//! `state` ties them together behind a single message-driven update function.
//! `entrance` holds the mount-time animation schedule for the hero section.

mod disclosure;
mod entrance;
mod navigator;
mod reveal;
mod state;

pub use disclosure::{toggle, DisclosureAction, DisclosureState};
pub use entrance::{EntranceElement, EntranceSchedule, EntranceStep, NameBounce};
pub use navigator::navigate;
pub use reveal::{RevealState, RevealTracker};
pub use state::{Effect, PageMsg, PageState};
