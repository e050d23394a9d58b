pub mod config;
pub mod content;
pub mod error;
pub mod interaction;
pub mod page;

pub use config::{AppConfig, EasingType, RevealConfig, ScrollConfig};
pub use content::Portfolio;
pub use error::{Error, Result};
pub use interaction::{PageMsg, PageState};
