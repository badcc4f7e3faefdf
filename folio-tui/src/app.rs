//! Application state and event handling.
//!
//! This module implements the Elm Architecture pattern for state management:
//! a single `App` owns the portfolio data and every component, and the only
//! ways in are `UiEvent`s, loader messages and animation ticks.

use std::time::Instant;

use ratatui::layout::Rect;

use crate::carousel::{CarouselState, ScrollDirection};
use crate::config::{CarouselConfig, TimingConfig};
use crate::events::UiEvent;
use crate::modal::ModalController;
use crate::models::ProjectId;
use crate::page::MainContent;
use crate::source::LoadMessage;
use crate::state::{LoadStatus, PortfolioState};
use crate::ui::{self, Mounts};

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,

    /// Loaded project records
    pub portfolio: PortfolioState,

    /// Scrollable page behind the modal
    pub main: MainContent,

    /// Card row state
    pub carousel: CarouselState,

    /// Detail overlay
    pub modal: ModalController,

    /// Screen regions from the last layout pass
    pub mounts: Mounts,

    /// Current screen size
    screen: Rect,

    timing: TimingConfig,
}

impl App {
    /// Create a new application instance
    pub fn new(carousel: CarouselConfig, timing: TimingConfig) -> Self {
        Self {
            should_quit: false,
            portfolio: PortfolioState::new(),
            main: MainContent::new(),
            carousel: CarouselState::new(carousel),
            modal: ModalController::new(timing.close_delay),
            mounts: Mounts::default(),
            screen: Rect::default(),
            timing,
        }
    }

    /// Handle the loader's single report
    pub fn handle_load_message(&mut self, message: LoadMessage, now: Instant) {
        match message {
            LoadMessage::Loaded(projects) => {
                if self.portfolio.install(projects) {
                    let count = self.portfolio.projects().len();
                    self.carousel.set_cards(count, now, self.timing.settle_delay);
                    self.relayout();
                }
            }
            LoadMessage::Failed(_) => {
                // Already reported by the loader; the carousel stays empty
                self.portfolio.mark_failed();
            }
        }
    }

    /// Apply one UI event
    pub fn dispatch(&mut self, event: UiEvent, now: Instant) {
        match event {
            UiEvent::ViewDetails(id) => {
                self.on_view_details(id);
            }
            UiEvent::ScrollRequest(direction) => self.on_scroll_request(direction),
            UiEvent::FocusNext => {
                if !self.main.is_locked() {
                    self.carousel.focus_next();
                }
            }
            UiEvent::FocusPrevious => {
                if !self.main.is_locked() {
                    self.carousel.focus_previous();
                }
            }
            UiEvent::ActivateFocused => {
                let focused = self
                    .carousel
                    .focused()
                    .and_then(|i| self.portfolio.projects().get(i))
                    .map(|p| p.id);
                if let Some(id) = focused {
                    self.on_view_details(id);
                }
            }
            UiEvent::CloseModal | UiEvent::BackdropClick => {
                self.modal.close(now);
            }
            UiEvent::PanelClick => {}
            UiEvent::PanelScroll(delta) => {
                self.modal.scroll_panel(delta);
                self.relayout();
            }
            UiEvent::PageScroll(delta) => {
                if self.main.scroll_by(delta) {
                    self.relayout();
                }
            }
            UiEvent::Resize(width, height) => self.on_resize(width, height),
            UiEvent::Quit => self.should_quit = true,
        }
    }

    /// Open the detail modal for a project. Unknown ids are ignored.
    pub fn on_view_details(&mut self, id: ProjectId) -> bool {
        let opened = self.modal.open(id, &self.portfolio, &mut self.main.lock);
        if opened {
            self.relayout();
        }
        opened
    }

    /// Scroll the carousel by one card, unless that control is disabled
    pub fn on_scroll_request(&mut self, direction: ScrollDirection) {
        if self.main.is_locked() {
            return;
        }
        let buttons = self.carousel.buttons();
        let disabled = match direction {
            ScrollDirection::Left => buttons.left_disabled,
            ScrollDirection::Right => buttons.right_disabled,
        };
        if disabled {
            return;
        }
        tracing::debug!(?direction, amount = self.carousel.scroll_amount(), "carousel scroll");
        self.carousel.request_scroll(direction);
    }

    fn on_resize(&mut self, width: u16, height: u16) {
        self.screen = Rect::new(0, 0, width, height);
        let page = ui::page_layout(width);
        self.carousel.on_resize(page.carousel.width);
        self.main
            .set_geometry(page.height, ui::main_area(self.screen).height);
        self.relayout();
    }

    /// Recompute mount points after any change in geometry
    pub fn relayout(&mut self) {
        self.mounts = ui::layout(self.screen, self);
        if let Some(max) = self.mounts.panel_max_scroll {
            self.modal.clamp_scroll(max);
        }
    }

    /// Update animations (called every frame)
    pub fn tick(&mut self, now: Instant) {
        let scrolled = self.carousel.tick(now);
        let hidden = self.modal.tick(now, &mut self.main.lock);
        if scrolled || hidden {
            self.relayout();
        }
    }

    /// Get the status bar text
    pub fn status_text(&self) -> String {
        let loading = match self.portfolio.status() {
            LoadStatus::Pending => "[Loading...] ",
            LoadStatus::Ready | LoadStatus::Failed => "",
        };

        if self.modal.is_visible() {
            format!("{}Esc/click outside: Close | Up/Down: Scroll | Ctrl+C: Quit", loading)
        } else {
            format!(
                "{}Left/Right: Scroll | Tab: Focus | Enter: View Details | q: Quit",
                loading
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::models::fixtures::{full_project, project};
    use crate::modal::ModalState;

    fn loaded_app() -> (App, Instant) {
        let mut app = App::new(CarouselConfig::default(), TimingConfig::default());
        let start = Instant::now();
        app.dispatch(UiEvent::Resize(100, 30), start);
        app.handle_load_message(
            LoadMessage::Loaded(vec![
                full_project(4, "four"),
                project(3, "three"),
                project(2, "two"),
                project(1, "one"),
            ]),
            start,
        );
        app.tick(start + Duration::from_millis(100));
        (app, start)
    }

    #[test]
    fn test_view_details_opens_exact_record() {
        let (mut app, start) = loaded_app();
        app.dispatch(UiEvent::ViewDetails(3), start);

        assert_eq!(app.modal.state(), ModalState::Open { project_id: 3 });
        assert_eq!(app.modal.panel().unwrap().title, "three");
        assert!(app.main.is_locked());
    }

    #[test]
    fn test_unknown_id_keeps_modal_closed() {
        let (mut app, start) = loaded_app();
        app.dispatch(UiEvent::ViewDetails(99), start);
        assert!(!app.modal.is_visible());
        assert!(!app.main.is_locked());
    }

    #[test]
    fn test_panel_click_never_closes() {
        let (mut app, start) = loaded_app();
        app.dispatch(UiEvent::ViewDetails(4), start);
        app.dispatch(UiEvent::PanelClick, start);
        assert_eq!(app.modal.state(), ModalState::Open { project_id: 4 });
    }

    #[test]
    fn test_backdrop_click_closes_and_releases_lock() {
        let (mut app, start) = loaded_app();
        app.dispatch(UiEvent::ViewDetails(4), start);
        app.dispatch(UiEvent::BackdropClick, start);
        assert!(app.modal.is_closing());
        assert!(app.main.is_locked());

        app.tick(start + Duration::from_millis(300));
        assert!(!app.modal.is_visible());
        assert!(!app.main.is_locked());
    }

    #[test]
    fn test_activate_focused_card() {
        let (mut app, start) = loaded_app();
        app.dispatch(UiEvent::FocusNext, start);
        app.dispatch(UiEvent::ActivateFocused, start);
        assert_eq!(app.modal.state(), ModalState::Open { project_id: 3 });
    }

    #[test]
    fn test_scroll_request_respects_disabled_buttons() {
        let (mut app, start) = loaded_app();
        assert!(app.carousel.buttons().left_disabled);

        app.dispatch(UiEvent::ScrollRequest(ScrollDirection::Left), start);
        assert_eq!(app.carousel.target(), 0.0);

        app.dispatch(UiEvent::ScrollRequest(ScrollDirection::Right), start);
        assert_eq!(app.carousel.target(), 38.0);
    }

    #[test]
    fn test_scroll_ignored_while_modal_open() {
        let (mut app, start) = loaded_app();
        app.dispatch(UiEvent::ViewDetails(1), start);
        app.dispatch(UiEvent::ScrollRequest(ScrollDirection::Right), start);
        app.dispatch(UiEvent::PageScroll(5), start);
        assert_eq!(app.carousel.target(), 0.0);
        assert_eq!(app.main.scroll_y(), 0);
    }

    #[test]
    fn test_failed_load_leaves_carousel_empty() {
        let mut app = App::new(CarouselConfig::default(), TimingConfig::default());
        let now = Instant::now();
        app.dispatch(UiEvent::Resize(100, 30), now);
        app.handle_load_message(LoadMessage::Failed("boom".to_string()), now);

        assert_eq!(app.portfolio.status(), LoadStatus::Failed);
        assert_eq!(app.carousel.card_count(), 0);
        assert!(app.mounts.detail_buttons.is_empty());
    }

    #[test]
    fn test_mounts_track_rendered_cards() {
        let (app, _) = loaded_app();
        let ids: Vec<_> = app.mounts.detail_buttons.iter().map(|(id, _)| *id).collect();
        // 96 columns of carousel fit cards 4, 3 and part of 2
        assert_eq!(ids, vec![4, 3, 2]);
    }

    #[test]
    fn test_status_text_separates_loading_prefix() {
        let app = App::new(CarouselConfig::default(), TimingConfig::default());
        assert!(app.status_text().starts_with("[Loading...] Left/Right: Scroll"));

        let (app, _) = loaded_app();
        assert!(app.status_text().starts_with("Left/Right: Scroll"));
    }

    #[test]
    fn test_quit() {
        let (mut app, start) = loaded_app();
        app.dispatch(UiEvent::Quit, start);
        assert!(app.should_quit);
    }
}
