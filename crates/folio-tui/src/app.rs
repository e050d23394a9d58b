use std::time::Instant;

use folio_core::content::LinkTarget;
use folio_core::interaction::{Effect, PageMsg, PageState};
use folio_core::{AppConfig, Portfolio};
use tracing::debug;
use url::Url;

use crate::focus::{focus_order, Activation, FocusTarget};
use crate::input::Action;
use crate::motion::{stagger_tail, CardKind, Motion};
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;
use crate::themes::load_theme;
use crate::view::{content_width, PageView, ViewContext};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Help overlay
    Help,
}

/// Side effects the event loop carries out on behalf of the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Open an external link in the system browser
    OpenUrl(Url),
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: AppConfig,
    /// Page content
    pub portfolio: Portfolio,
    pub theme: Theme,
    /// Disclosure and reveal state
    pub page: PageState,
    /// Scroll position of the page body
    pub scroll: ScrollAnimator,
    /// Animation clocks
    pub motion: Motion,
    /// Current application mode
    pub mode: Mode,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    focus_order: Vec<FocusTarget>,
    focus_index: Option<usize>,
    view: PageView,
    /// Terminal width of the page body
    area_width: u16,
    /// Rows of the page body on screen
    viewport_height: u16,
}

impl App {
    pub fn new(config: AppConfig, portfolio: Portfolio, now: Instant) -> Self {
        let theme = load_theme(&config.ui.theme);
        let page = PageState::new(&config.ui.reveal);
        // Every session starts at the top of the page
        let scroll = ScrollAnimator::new(config.ui.scroll.clone());
        let motion = Motion::new(&config.ui, now).with_stagger_tail(stagger_tail(&portfolio));
        let focus_order = focus_order(&portfolio);
        let view = PageView::build(&ViewContext {
            portfolio: &portfolio,
            disclosure: &page.disclosure,
            motion: &motion,
            theme: &theme,
            focus: None,
            now,
            width: content_width(0),
        });

        Self {
            config,
            portfolio,
            theme,
            page,
            scroll,
            motion,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            pending_key: None,
            focus_order,
            focus_index: None,
            view,
            area_width: 0,
            viewport_height: 0,
        }
    }

    pub fn view(&self) -> &PageView {
        &self.view
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Currently focused item, if any
    pub fn focused(&self) -> Option<FocusTarget> {
        self.focus_index
            .and_then(|i| self.focus_order.get(i))
            .copied()
    }

    pub fn max_scroll(&self) -> u16 {
        self.view.layout().max_scroll(self.viewport_height)
    }

    /// Re-render the page lines with the current state and clock
    pub fn rebuild_view(&mut self, now: Instant) {
        self.view = PageView::build(&ViewContext {
            portfolio: &self.portfolio,
            disclosure: &self.page.disclosure,
            motion: &self.motion,
            theme: &self.theme,
            focus: self.focused(),
            now,
            width: content_width(self.area_width),
        });
    }

    /// Record the size of the page body and observe the new viewport
    pub fn set_viewport(&mut self, area_width: u16, height: u16, now: Instant) {
        if self.area_width != area_width || self.viewport_height != height {
            self.area_width = area_width;
            self.viewport_height = height;
            self.rebuild_view(now);
            self.observe_viewport(now);
        }
    }

    /// Per-frame update: lay out, advance the scroll animation, then observe
    pub fn prepare_frame(&mut self, area_width: u16, height: u16, now: Instant) {
        self.set_viewport(area_width, height, now);
        self.rebuild_view(now);
        let max = self.max_scroll();
        self.scroll.update_at(now, max);
        self.observe_viewport(now);
    }

    fn observe_viewport(&mut self, now: Instant) {
        let msg = PageMsg::ViewportChanged {
            top: self.scroll.current_scroll(),
            height: self.viewport_height,
        };
        self.dispatch(msg, now);
    }

    /// Whether frames must keep coming at the animation rate
    pub fn is_animating(&self, now: Instant) -> bool {
        self.scroll.needs_update()
            || self
                .motion
                .is_animating(now, self.portfolio.owner.chars().count())
    }

    /// Feed a message to the page state and carry out its effect
    pub fn dispatch(&mut self, msg: PageMsg, now: Instant) {
        let toggled = match msg {
            PageMsg::ToggleSkill(_) => Some(CardKind::Skill),
            PageMsg::ToggleCourse(_) => Some(CardKind::Course),
            _ => None,
        };

        match self.page.update(msg, self.view.layout()) {
            Some(Effect::ScrollTo(row)) => {
                let max = self.max_scroll();
                self.scroll.navigate_to(row, max, now);
            }
            Some(Effect::Revealed(sections)) => self.motion.record_reveals(&sections, now),
            None => {}
        }

        if let Some(kind) = toggled {
            let key = match kind {
                CardKind::Skill => self.page.disclosure.expanded_skill.as_deref(),
                CardKind::Course => self.page.disclosure.expanded_course.as_deref(),
            };
            self.motion.set_expanded(kind, key, now);
            self.rebuild_view(now);
        }
    }

    /// Apply an input action. External links come back as a command.
    pub fn handle_action(&mut self, action: Action, now: Instant) -> Option<AppCommand> {
        if action != Action::PendingG {
            self.pending_key = None;
        }

        let max = self.max_scroll();
        let height = self.viewport_height;
        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.scroll.scroll_by(1, max),
            Action::ScrollUp => self.scroll.scroll_by(-1, max),
            Action::ScrollHalfPageDown => self.scroll.scroll_half_page(true, height, max),
            Action::ScrollHalfPageUp => self.scroll.scroll_half_page(false, height, max),
            Action::ScrollPageDown => self.scroll.scroll_full_page(true, height, max),
            Action::ScrollPageUp => self.scroll.scroll_full_page(false, height, max),
            Action::JumpToTop => self.scroll.scroll_to(0, max, now),
            Action::JumpToBottom => self.scroll.scroll_to(max, max, now),
            Action::PendingG => self.pending_key = Some('g'),
            Action::NextItem => self.move_focus(true, now),
            Action::PrevItem => self.move_focus(false, now),
            Action::Activate => {
                if let Some(target) = self.focused() {
                    return self.activate(target, now);
                }
            }
            Action::NavLink(i) => return self.activate(FocusTarget::NavLink(i), now),
            Action::Help => self.mode = Mode::Help,
            Action::ExitMode => {
                self.mode = Mode::Normal;
                self.status_message = None;
            }
            Action::None => {}
        }
        None
    }

    /// Follow a link or toggle a card
    pub fn activate(&mut self, target: FocusTarget, now: Instant) -> Option<AppCommand> {
        let msg = match target.resolve(&self.portfolio)? {
            Activation::Follow(link) => match &link.target {
                LinkTarget::Anchor(anchor) => PageMsg::Navigate(anchor.clone()),
                LinkTarget::External(url) => {
                    let url = url.clone();
                    self.set_status(format!("Opening {}", url));
                    return Some(AppCommand::OpenUrl(url));
                }
                LinkTarget::Placeholder => {
                    debug!("Link '{}' has no target", link.label);
                    return None;
                }
            },
            Activation::ToggleSkill(name) => PageMsg::ToggleSkill(name.to_string()),
            Activation::ToggleCourse(title) => PageMsg::ToggleCourse(title.to_string()),
        };
        self.dispatch(msg, now);
        None
    }

    fn move_focus(&mut self, forward: bool, now: Instant) {
        let len = self.focus_order.len();
        if len == 0 {
            return;
        }
        let next = match (self.focus_index, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.focus_index = Some(next);

        if let Some(target) = self.focused() {
            self.set_status(target.label(&self.portfolio));
            self.rebuild_view(now);
            self.scroll_into_view(target, now);
        }
    }

    /// Scroll the body so a focused item is on screen; nav links are always visible
    fn scroll_into_view(&mut self, target: FocusTarget, now: Instant) {
        let Some(row) = self.view.focus_row(target) else {
            return;
        };
        let top = self.scroll.target_scroll();
        let height = self.viewport_height.max(1);
        let max = self.max_scroll();
        if row < top {
            self.scroll.scroll_to(row.saturating_sub(1), max, now);
        } else if row >= top + height {
            self.scroll.scroll_to((row + 2).saturating_sub(height), max, now);
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
