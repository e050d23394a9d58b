mod nav_bar;
mod page;
mod popup;
mod status_bar;

pub use nav_bar::NavBarWidget;
pub use page::PageWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;
