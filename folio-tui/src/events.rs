//! Terminal input mapped onto toolkit-independent UI events.
//!
//! The application core only sees `UiEvent`s. This module is the single place
//! that knows about crossterm keys and mouse buttons, and it resolves clicks
//! through the `Mounts` produced by the last layout pass.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::carousel::{detail_button_at, ScrollDirection};
use crate::models::ProjectId;
use crate::ui::Mounts;

/// Rows scrolled per wheel notch
const WHEEL_STEP: i32 = 3;
/// Rows scrolled per page key
const PAGE_STEP: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// "View Details" on a card
    ViewDetails(ProjectId),
    /// Left/right scroll control
    ScrollRequest(ScrollDirection),
    FocusNext,
    FocusPrevious,
    /// "View Details" on the focused card
    ActivateFocused,
    /// Close button or keyboard close
    CloseModal,
    /// Click on the dimmed area around the panel
    BackdropClick,
    /// Click inside the panel; never closes it
    PanelClick,
    PanelScroll(i32),
    PageScroll(i32),
    Resize(u16, u16),
    Quit,
}

/// Translate a terminal event given the current mount points
pub fn translate(event: &Event, mounts: &Mounts, modal_visible: bool) -> Option<UiEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(key, modal_visible),
        Event::Mouse(mouse) => translate_mouse(mouse, mounts, modal_visible),
        Event::Resize(width, height) => Some(UiEvent::Resize(*width, *height)),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent, modal_visible: bool) -> Option<UiEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(UiEvent::Quit);
    }

    if modal_visible {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => Some(UiEvent::CloseModal),
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PanelScroll(-1)),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::PanelScroll(1)),
            KeyCode::PageUp => Some(UiEvent::PanelScroll(-PAGE_STEP)),
            KeyCode::PageDown => Some(UiEvent::PanelScroll(PAGE_STEP)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Left | KeyCode::Char('h') => Some(UiEvent::ScrollRequest(ScrollDirection::Left)),
        KeyCode::Right | KeyCode::Char('l') => {
            Some(UiEvent::ScrollRequest(ScrollDirection::Right))
        }
        KeyCode::Tab => Some(UiEvent::FocusNext),
        KeyCode::BackTab => Some(UiEvent::FocusPrevious),
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiEvent::ActivateFocused),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PageScroll(-1)),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::PageScroll(1)),
        KeyCode::PageUp => Some(UiEvent::PageScroll(-PAGE_STEP)),
        KeyCode::PageDown => Some(UiEvent::PageScroll(PAGE_STEP)),
        _ => None,
    }
}

fn translate_mouse(mouse: &MouseEvent, mounts: &Mounts, modal_visible: bool) -> Option<UiEvent> {
    let position = (mouse.column, mouse.row).into();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if modal_visible {
                // Clicks inside the panel stop here
                if mounts.close_button.contains(position) {
                    Some(UiEvent::CloseModal)
                } else if mounts.panel.contains(position) {
                    Some(UiEvent::PanelClick)
                } else {
                    Some(UiEvent::BackdropClick)
                }
            } else if mounts.scroll_left.contains(position) {
                Some(UiEvent::ScrollRequest(ScrollDirection::Left))
            } else if mounts.scroll_right.contains(position) {
                Some(UiEvent::ScrollRequest(ScrollDirection::Right))
            } else {
                detail_button_at(&mounts.detail_buttons, mouse.column, mouse.row)
                    .map(UiEvent::ViewDetails)
            }
        }
        MouseEventKind::ScrollUp if modal_visible => Some(UiEvent::PanelScroll(-WHEEL_STEP)),
        MouseEventKind::ScrollDown if modal_visible => Some(UiEvent::PanelScroll(WHEEL_STEP)),
        MouseEventKind::ScrollUp => Some(UiEvent::PageScroll(-WHEEL_STEP)),
        MouseEventKind::ScrollDown => Some(UiEvent::PageScroll(WHEEL_STEP)),
        MouseEventKind::ScrollLeft if !modal_visible && mounts.carousel.contains(position) => {
            Some(UiEvent::ScrollRequest(ScrollDirection::Left))
        }
        MouseEventKind::ScrollRight if !modal_visible && mounts.carousel.contains(position) => {
            Some(UiEvent::ScrollRequest(ScrollDirection::Right))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn mounts() -> Mounts {
        Mounts {
            scroll_left: Rect::new(80, 6, 5, 1),
            scroll_right: Rect::new(86, 6, 5, 1),
            carousel: Rect::new(2, 8, 90, 16),
            detail_buttons: vec![(3, Rect::new(3, 22, 34, 1)), (2, Rect::new(41, 22, 34, 1))],
            panel: Rect::new(10, 2, 80, 30),
            close_button: Rect::new(85, 3, 3, 1),
            ..Mounts::default()
        }
    }

    #[test]
    fn test_click_view_details() {
        assert_eq!(translate(&click(45, 22), &mounts(), false), Some(UiEvent::ViewDetails(2)));
        assert_eq!(translate(&click(45, 21), &mounts(), false), None);
    }

    #[test]
    fn test_click_scroll_buttons() {
        assert_eq!(
            translate(&click(81, 6), &mounts(), false),
            Some(UiEvent::ScrollRequest(ScrollDirection::Left))
        );
        assert_eq!(
            translate(&click(90, 6), &mounts(), false),
            Some(UiEvent::ScrollRequest(ScrollDirection::Right))
        );
    }

    #[test]
    fn test_clicks_while_modal_visible() {
        let m = mounts();
        assert_eq!(translate(&click(86, 3), &m, true), Some(UiEvent::CloseModal));
        assert_eq!(translate(&click(45, 22), &m, true), Some(UiEvent::PanelClick));
        assert_eq!(translate(&click(1, 1), &m, true), Some(UiEvent::BackdropClick));
        assert_eq!(translate(&click(95, 22), &m, true), Some(UiEvent::BackdropClick));
    }

    #[test]
    fn test_keys_route_by_modal_visibility() {
        let m = mounts();
        assert_eq!(translate(&key(KeyCode::Esc), &m, true), Some(UiEvent::CloseModal));
        assert_eq!(translate(&key(KeyCode::Esc), &m, false), Some(UiEvent::Quit));
        assert_eq!(translate(&key(KeyCode::Down), &m, true), Some(UiEvent::PanelScroll(1)));
        assert_eq!(translate(&key(KeyCode::Down), &m, false), Some(UiEvent::PageScroll(1)));
        assert_eq!(translate(&key(KeyCode::Left), &m, true), None);
        assert_eq!(translate(&key(KeyCode::Enter), &m, false), Some(UiEvent::ActivateFocused));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(&event, &mounts(), true), Some(UiEvent::Quit));
    }

    #[test]
    fn test_resize_passes_through() {
        assert_eq!(
            translate(&Event::Resize(120, 40), &Mounts::default(), false),
            Some(UiEvent::Resize(120, 40))
        );
    }
}
