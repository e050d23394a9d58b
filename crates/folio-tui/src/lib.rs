pub mod app;
pub mod event;
pub mod focus;
pub mod input;
pub mod keymap;
pub mod motion;
pub mod scroll;
pub mod theme;
pub mod themes;
pub mod ui;
pub mod view;
pub mod widgets;

pub use app::{App, AppCommand, Mode};
pub use theme::Theme;
