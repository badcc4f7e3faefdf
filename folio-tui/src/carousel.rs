//! Horizontal project carousel.
//!
//! A row of fixed-width cards clipped by a fractional column offset. Scroll
//! requests move a target offset by one card plus gap; the visible offset eases
//! toward the target on every tick, and each step counts as a scroll event that
//! recomputes which scroll buttons are enabled.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::config::CarouselConfig;
use crate::models::{Project, ProjectId};
use crate::theme::{colors, styles};

/// Fraction of the remaining distance covered per animation step
const SCROLL_EASING: f64 = 0.35;

/// Remaining distance below which the offset snaps to its target
const SNAP_DISTANCE: f64 = 0.5;

/// Share of the viewport a card takes on narrow terminals
const NARROW_CARD_PERCENT: u32 = 85;

/// Label of the per-card details control
pub const VIEW_DETAILS_LABEL: &str = "View Details →";

/// Scroll direction requested by the arrow buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Enabled state of the two scroll buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub left_disabled: bool,
    pub right_disabled: bool,
}

/// Screen placement of one visible card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleCard {
    pub index: usize,
    /// Card position relative to the carousel's left edge, before clipping
    pub x: i64,
    /// On-screen card area after clipping
    pub area: Rect,
    /// On-screen "View Details" row after clipping
    pub button: Rect,
}

/// Carousel scroll and focus state
#[derive(Debug, Clone)]
pub struct CarouselState {
    config: CarouselConfig,
    /// Current scroll offset in columns (fractional while animating)
    offset: f64,
    /// Offset the animation is heading to
    target: f64,
    viewport_width: u16,
    card_count: usize,
    buttons: ButtonState,
    focused: Option<usize>,
    /// Deadline for the one-off button check after the initial render
    settle_at: Option<Instant>,
}

impl CarouselState {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            offset: 0.0,
            target: 0.0,
            viewport_width: 0,
            card_count: 0,
            buttons: ButtonState::default(),
            focused: None,
            settle_at: None,
        }
    }

    /// Replace the rendered cards and schedule the post-render button check
    pub fn set_cards(&mut self, count: usize, now: Instant, settle_delay: Duration) {
        self.card_count = count;
        self.offset = 0.0;
        self.target = 0.0;
        self.focused = if count > 0 { Some(0) } else { None };
        self.settle_at = Some(now + settle_delay);
    }

    /// Viewport changed size
    pub fn on_resize(&mut self, viewport_width: u16) {
        self.viewport_width = viewport_width;
        let max = self.max_offset();
        self.target = self.target.clamp(0.0, max);
        self.offset = self.offset.clamp(0.0, max);
        self.update_buttons();
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn viewport_width(&self) -> u16 {
        self.viewport_width
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn buttons(&self) -> ButtonState {
        self.buttons
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Width of every card for the current viewport
    pub fn card_width(&self) -> u16 {
        let viewport = self.viewport_width as u32;
        if viewport < 2 * self.config.card_width as u32 {
            (viewport * NARROW_CARD_PERCENT / 100).max(1) as u16
        } else {
            self.config.card_width
        }
    }

    /// Measured width of the first card, if any card is rendered
    pub fn first_card_width(&self) -> Option<u16> {
        (self.card_count > 0).then(|| self.card_width())
    }

    /// Distance covered by one scroll button press
    pub fn scroll_amount(&self) -> f64 {
        match self.first_card_width() {
            Some(width) => (width as u32 + self.config.card_gap as u32) as f64,
            None => self.config.fallback_scroll as f64,
        }
    }

    /// Total width of all cards and the gaps between them
    pub fn content_width(&self) -> u32 {
        if self.card_count == 0 {
            return 0;
        }
        let cards = self.card_count as u32;
        cards * self.card_width() as u32 + (cards - 1) * self.config.card_gap as u32
    }

    fn max_offset(&self) -> f64 {
        self.content_width().saturating_sub(self.viewport_width as u32) as f64
    }

    /// Start a smooth scroll by one card in the given direction
    pub fn request_scroll(&mut self, direction: ScrollDirection) {
        let amount = self.scroll_amount();
        let delta = match direction {
            ScrollDirection::Left => -amount,
            ScrollDirection::Right => amount,
        };
        self.target = (self.target + delta).clamp(0.0, self.max_offset());
    }

    /// Advance the scroll animation. Returns true when the offset moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut scrolled = false;
        let remaining = self.target - self.offset;
        if remaining.abs() > f64::EPSILON {
            if remaining.abs() < SNAP_DISTANCE {
                self.offset = self.target;
            } else {
                self.offset += remaining * SCROLL_EASING;
            }
            scrolled = true;
            self.update_buttons();
        }

        if self.settle_at.is_some_and(|at| now >= at) {
            self.settle_at = None;
            self.update_buttons();
        }

        scrolled
    }

    /// Recompute which scroll buttons are enabled from the current offset
    pub fn update_buttons(&mut self) {
        let content = self.content_width() as f64;
        let visible_end = (self.offset + self.viewport_width as f64).ceil();
        self.buttons = ButtonState {
            left_disabled: self.offset <= 0.0,
            right_disabled: visible_end >= content - 1.0,
        };
    }

    /// Move focus to the next card and bring it into view
    pub fn focus_next(&mut self) {
        if self.card_count == 0 {
            self.focused = None;
            return;
        }
        let next = match self.focused {
            Some(i) if i + 1 < self.card_count => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.focus(next);
    }

    /// Move focus to the previous card and bring it into view
    pub fn focus_previous(&mut self) {
        if self.card_count == 0 {
            self.focused = None;
            return;
        }
        let previous = match self.focused {
            Some(i) if i > 0 => i - 1,
            Some(_) => self.card_count - 1,
            None => 0,
        };
        self.focus(previous);
    }

    fn focus(&mut self, index: usize) {
        self.focused = Some(index);
        let start = self.card_start(index) as f64;
        let end = start + self.card_width() as f64;
        let viewport = self.viewport_width as f64;

        if start < self.target {
            self.target = start;
        } else if end > self.target + viewport {
            self.target = end - viewport;
        }
        self.target = self.target.clamp(0.0, self.max_offset());
    }

    fn card_start(&self, index: usize) -> u32 {
        index as u32 * (self.card_width() as u32 + self.config.card_gap as u32)
    }

    /// Cards intersecting `area`, with their clipped screen rectangles
    pub fn visible_cards(&self, area: Rect) -> Vec<VisibleCard> {
        if area.width == 0 || area.height < 3 {
            return Vec::new();
        }
        let card_width = self.card_width() as i64;
        let offset = self.offset.round() as i64;
        let left = area.x as i64;
        let right = area.right() as i64;

        (0..self.card_count)
            .filter_map(|index| {
                let x = self.card_start(index) as i64 - offset;
                let start = (left + x).max(left);
                let end = (left + x + card_width).min(right);
                if start >= end {
                    return None;
                }
                let clipped = Rect::new(start as u16, area.y, (end - start) as u16, area.height);
                // Inner row just above the bottom border, inside the side borders
                let button_start = (left + x + 1).max(left);
                let button_end = (left + x + card_width - 1).min(right);
                let button = if button_start < button_end {
                    Rect::new(
                        button_start as u16,
                        area.bottom() - 2,
                        (button_end - button_start) as u16,
                        1,
                    )
                } else {
                    Rect::default()
                };
                Some(VisibleCard {
                    index,
                    x,
                    area: clipped,
                    button,
                })
            })
            .collect()
    }
}

/// Widget drawing the visible cards
pub struct CarouselWidget<'a> {
    projects: &'a [Project],
    state: &'a CarouselState,
}

impl<'a> CarouselWidget<'a> {
    pub fn new(projects: &'a [Project], state: &'a CarouselState) -> Self {
        Self { projects, state }
    }
}

impl Widget for CarouselWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card_width = self.state.card_width();
        for card in self.state.visible_cards(area) {
            let Some(project) = self.projects.get(card.index) else {
                continue;
            };

            // Draw off-screen at full size, then copy the visible columns
            let mut card_buf = Buffer::empty(Rect::new(0, 0, card_width, area.height));
            let focused = self.state.focused() == Some(card.index);
            CardWidget { project, focused }.render(card_buf.area, &mut card_buf);

            for local_x in 0..card_width {
                let screen_x = area.x as i64 + card.x + local_x as i64;
                if screen_x < area.x as i64 || screen_x >= area.right() as i64 {
                    continue;
                }
                for local_y in 0..area.height {
                    let src = card_buf.cell((local_x, local_y)).cloned();
                    if let (Some(src), Some(dst)) =
                        (src, buf.cell_mut((screen_x as u16, area.y + local_y)))
                    {
                        *dst = src;
                    }
                }
            }
        }
    }
}

/// A single project card
struct CardWidget<'a> {
    project: &'a Project,
    focused: bool,
}

impl Widget for CardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                styles::border_focused()
            } else {
                styles::border()
            })
            .style(styles::card_bg());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let body = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
        let text = vec![
            Line::from(Span::styled(format!("▣ {}", self.project.image), styles::text_hint())),
            Line::from(""),
            Line::from(Span::styled(self.project.title.as_str(), styles::card_title())),
            Line::from(""),
            Line::from(Span::styled(
                self.project.card_description.as_str(),
                styles::text_dim(),
            )),
        ];
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .render(body, buf);

        let button_style = if self.focused {
            styles::button_focused()
        } else {
            styles::button()
        };
        let button_row = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
        buf.set_style(button_row, button_style);
        buf.set_stringn(
            button_row.x + 1,
            button_row.y,
            VIEW_DETAILS_LABEL,
            button_row.width.saturating_sub(1) as usize,
            button_style.add_modifier(Modifier::BOLD),
        );
    }
}

/// Style of a scroll button for its enabled state
pub fn scroll_button_style(disabled: bool) -> Style {
    if disabled {
        Style::default()
            .fg(colors::FG_HINT)
            .add_modifier(Modifier::DIM)
    } else {
        styles::button_focused()
    }
}

/// Project id behind the "View Details" row at a screen position
pub fn detail_button_at(
    cards: &[(ProjectId, Rect)],
    column: u16,
    row: u16,
) -> Option<ProjectId> {
    cards
        .iter()
        .find(|(_, rect)| rect.contains((column, row).into()))
        .map(|(id, _)| *id)
}
