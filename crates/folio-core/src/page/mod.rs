mod layout;
mod section;

pub use layout::{PageLayout, SectionBox};
pub use section::SectionId;
