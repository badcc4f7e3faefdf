//! UI rendering module.
//!
//! Draws the scrollable page (header, carousel, footer), the status bar and the
//! detail modal, and computes the `Mounts` used to resolve mouse input.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
    Frame,
};

use crate::app::App;
use crate::carousel::{scroll_button_style, CarouselWidget};
use crate::modal::{DetailPanel, LinkKind};
use crate::models::ProjectId;
use crate::state::LoadStatus;
use crate::theme::{colors, styles};

pub const HEADER_HEIGHT: u16 = 5;
pub const SECTION_HEIGHT: u16 = 2;
pub const CARD_HEIGHT: u16 = 16;
pub const FOOTER_HEIGHT: u16 = 3;
const SIDE_PADDING: u16 = 2;
const SCROLL_BUTTON_WIDTH: u16 = 5;
const PANEL_MAX_WIDTH: u16 = 100;
/// Panel inner width from which the body splits into two columns
const TWO_COLUMN_MIN_WIDTH: u16 = 80;
/// Title, blank, image, blank
const PANEL_HEADER_ROWS: u16 = 4;

/// Screen regions the view needs for input resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mounts {
    pub carousel: Rect,
    pub scroll_left: Rect,
    pub scroll_right: Rect,
    /// "View Details" rows of the visible cards
    pub detail_buttons: Vec<(ProjectId, Rect)>,
    pub panel: Rect,
    pub close_button: Rect,
    /// Largest useful panel scroll, when the modal is visible
    pub panel_max_scroll: Option<u16>,
}

/// Page regions in page coordinates (row 0 is the top of the page)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub height: u16,
    pub header: Rect,
    pub section: Rect,
    pub scroll_left: Rect,
    pub scroll_right: Rect,
    pub carousel: Rect,
    pub footer: Rect,
}

pub fn page_layout(width: u16) -> PageLayout {
    let inner_width = width.saturating_sub(2 * SIDE_PADDING);
    let header = Rect::new(SIDE_PADDING, 0, inner_width, HEADER_HEIGHT);
    let section = Rect::new(SIDE_PADDING, header.bottom(), inner_width, 1);

    let right_x = (SIDE_PADDING + inner_width).saturating_sub(SCROLL_BUTTON_WIDTH);
    let scroll_right = Rect::new(right_x, section.y, SCROLL_BUTTON_WIDTH.min(inner_width), 1);
    let left_x = right_x.saturating_sub(SCROLL_BUTTON_WIDTH + 1);
    let scroll_left = Rect::new(left_x, section.y, SCROLL_BUTTON_WIDTH.min(inner_width), 1);

    let carousel = Rect::new(
        SIDE_PADDING,
        header.bottom() + SECTION_HEIGHT,
        inner_width,
        CARD_HEIGHT,
    );
    let footer = Rect::new(SIDE_PADDING, carousel.bottom(), inner_width, FOOTER_HEIGHT);

    PageLayout {
        height: footer.bottom(),
        header,
        section,
        scroll_left,
        scroll_right,
        carousel,
        footer,
    }
}

/// Screen area showing the page; the last row is the status bar
pub fn main_area(screen: Rect) -> Rect {
    Rect::new(screen.x, screen.y, screen.width, screen.height.saturating_sub(1))
}

fn status_area(screen: Rect) -> Rect {
    Rect::new(screen.x, screen.bottom().saturating_sub(1), screen.width, 1.min(screen.height))
}

/// Map a page rectangle onto the screen, clipped to the main area
fn to_screen(rect: Rect, main: Rect, scroll_y: u16) -> Rect {
    let top = main.y as i32 + rect.y as i32 - scroll_y as i32;
    let bottom = top + rect.height as i32;
    let clipped_top = top.max(main.y as i32);
    let clipped_bottom = bottom.min(main.bottom() as i32);
    let left = main.x + rect.x;
    let right = (left + rect.width).min(main.right());
    if clipped_top >= clipped_bottom || left >= right {
        return Rect::default();
    }
    Rect::new(
        left,
        clipped_top as u16,
        right - left,
        (clipped_bottom - clipped_top) as u16,
    )
}

/// Centered detail panel
pub fn panel_area(screen: Rect) -> Rect {
    let width = screen.width.saturating_sub(4).min(PANEL_MAX_WIDTH);
    let height = (screen.height as u32 * 9 / 10) as u16;
    centered_rect(width, height, screen)
}

fn close_button_area(panel: Rect) -> Rect {
    if panel.width < 6 || panel.height < 3 {
        return Rect::default();
    }
    Rect::new(panel.right() - 5, panel.y + 1, 3, 1)
}

/// Compute the mount points for the current state
pub fn layout(screen: Rect, app: &App) -> Mounts {
    let main = main_area(screen);
    let page = page_layout(screen.width);
    let scroll_y = app.main.scroll_y();
    let projects = app.portfolio.projects();

    let detail_buttons = app
        .carousel
        .visible_cards(page.carousel)
        .into_iter()
        .filter_map(|card| {
            let id = projects.get(card.index)?.id;
            let button = to_screen(card.button, main, scroll_y);
            (!button.is_empty()).then_some((id, button))
        })
        .collect();

    let mut mounts = Mounts {
        carousel: to_screen(page.carousel, main, scroll_y),
        scroll_left: to_screen(page.scroll_left, main, scroll_y),
        scroll_right: to_screen(page.scroll_right, main, scroll_y),
        detail_buttons,
        ..Mounts::default()
    };

    if let (true, Some(panel)) = (app.modal.is_visible(), app.modal.panel()) {
        let panel_rect = panel_area(screen);
        mounts.panel = panel_rect;
        mounts.close_button = close_button_area(panel_rect);
        let (body, columns) = panel_body(panel_rect);
        let rows = column_lines(panel, &columns)
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0);
        mounts.panel_max_scroll = Some((rows as u16).saturating_sub(body.height));
    }

    mounts
}

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(styles::page()), area);

    render_page(frame.buffer_mut(), app, main_area(area));
    render_status(frame, app, status_area(area));

    if app.modal.is_visible() {
        render_modal(frame, app, area);
    }
}

/// Draw the full page off-screen and copy the rows currently scrolled into view
fn render_page(buf: &mut Buffer, app: &App, main: Rect) {
    let page = page_layout(main.width);
    let mut page_buf = Buffer::empty(Rect::new(0, 0, main.width, page.height));
    page_buf.set_style(page_buf.area, styles::page());

    render_header(&mut page_buf, page.header);
    render_section(&mut page_buf, app, &page);
    CarouselWidget::new(app.portfolio.projects(), &app.carousel)
        .render(page.carousel, &mut page_buf);
    if app.portfolio.status() == LoadStatus::Pending {
        render_loading(&mut page_buf, page.carousel);
    }
    render_footer(&mut page_buf, app, page.footer);

    let scroll_y = app.main.scroll_y();
    for y in 0..main.height {
        let src_y = scroll_y + y;
        if src_y >= page.height {
            break;
        }
        for x in 0..main.width {
            let src = page_buf.cell((x, src_y)).cloned();
            if let (Some(src), Some(dst)) = (src, buf.cell_mut((main.x + x, main.y + y))) {
                *dst = src;
            }
        }
    }
}

fn render_header(buf: &mut Buffer, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Portfolio", styles::title())),
        Line::from(Span::styled(
            "Selected projects, newest first",
            styles::text_dim(),
        )),
    ];
    Paragraph::new(text).render(area, buf);
}

fn render_section(buf: &mut Buffer, app: &App, page: &PageLayout) {
    buf.set_string(page.section.x, page.section.y, "Projects", styles::heading());

    let buttons = app.carousel.buttons();
    Paragraph::new(" ◀ ")
        .style(scroll_button_style(buttons.left_disabled))
        .alignment(Alignment::Center)
        .render(page.scroll_left, buf);
    Paragraph::new(" ▶ ")
        .style(scroll_button_style(buttons.right_disabled))
        .alignment(Alignment::Center)
        .render(page.scroll_right, buf);
}

fn render_loading(buf: &mut Buffer, area: Rect) {
    let y = area.y + area.height / 2;
    Paragraph::new("Loading projects...")
        .style(styles::text_dim())
        .alignment(Alignment::Center)
        .render(Rect::new(area.x, y, area.width, 1), buf);
}

fn render_footer(buf: &mut Buffer, app: &App, area: Rect) {
    let count = app.portfolio.projects().len();
    if count == 0 {
        return;
    }
    let focused = app
        .carousel
        .focused()
        .map(|i| format!("{} of {}", i + 1, count))
        .unwrap_or_default();
    Paragraph::new(Line::from(Span::styled(focused, styles::text_hint())))
        .alignment(Alignment::Center)
        .render(Rect::new(area.x, area.y + 1, area.width, 1), buf);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let status = Paragraph::new(app.status_text())
        .style(Style::default().fg(colors::WHITE).bg(colors::DARK_SLATE));
    frame.render_widget(status, area);
}

/// Render the detail modal over a dimmed backdrop
fn render_modal(frame: &mut Frame, app: &App, area: Rect) {
    let Some(panel) = app.modal.panel() else {
        return;
    };

    frame.buffer_mut().set_style(area, styles::modal_bg());

    let panel_rect = panel_area(area);
    frame.render_widget(Clear, panel_rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::border_focused())
        .style(styles::modal_content_bg());
    let inner = block.inner(panel_rect);
    frame.render_widget(block, panel_rect);

    let header = vec![
        Line::from(Span::styled(panel.title.as_str(), styles::title())),
        Line::from(""),
        Line::from(Span::styled(
            format!("▣ Screenshot of {} ({})", panel.title, panel.image),
            styles::text_hint(),
        )),
    ];
    let header_area = Rect::new(inner.x, inner.y, inner.width, PANEL_HEADER_ROWS.min(inner.height));
    frame.render_widget(
        Paragraph::new(header).alignment(Alignment::Center),
        header_area,
    );

    let (_, columns) = panel_body(panel_rect);
    for (lines, column) in column_lines(panel, &columns).into_iter().zip(columns) {
        frame.render_widget(
            Paragraph::new(lines).scroll((app.modal.scroll(), 0)),
            column,
        );
    }

    let close = close_button_area(panel_rect);
    frame.render_widget(
        Paragraph::new("✕")
            .style(styles::button_focused())
            .alignment(Alignment::Center),
        close,
    );

    if app.modal.is_closing() {
        frame.buffer_mut().set_style(area, styles::fading());
    }
}

/// Body area of the panel and its one or two columns
fn panel_body(panel: Rect) -> (Rect, Vec<Rect>) {
    let inner = Block::default().borders(Borders::ALL).inner(panel);
    let inner = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );
    let header_rows = PANEL_HEADER_ROWS.min(inner.height);
    let body = Rect::new(
        inner.x,
        inner.y + header_rows,
        inner.width,
        inner.height - header_rows,
    );

    if body.width >= TWO_COLUMN_MIN_WIDTH {
        let gap = 3;
        let left_width = (body.width - gap) * 2 / 3;
        let right_width = body.width - gap - left_width;
        let left = Rect::new(body.x, body.y, left_width, body.height);
        let right = Rect::new(body.x + left_width + gap, body.y, right_width, body.height);
        (body, vec![left, right])
    } else {
        (body, vec![body])
    }
}

/// Lines for each body column; a single column stacks the sidebar below the overview
fn column_lines(panel: &DetailPanel, columns: &[Rect]) -> Vec<Vec<Line<'static>>> {
    match columns {
        [left, right] => vec![
            overview_lines(panel, left.width as usize),
            sidebar_lines(panel, right.width as usize),
        ],
        [single] => {
            let width = single.width as usize;
            let mut lines = overview_lines(panel, width);
            lines.push(Line::from(""));
            lines.extend(sidebar_lines(panel, width));
            vec![lines]
        }
        _ => Vec::new(),
    }
}

/// Overview and key features
fn overview_lines(panel: &DetailPanel, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("Overview", styles::heading())),
        Line::from(""),
    ];
    lines.extend(
        wrap_text(&panel.overview, width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, styles::text_dim()))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Key Features", styles::heading())));
    lines.push(Line::from(""));
    for feature in &panel.features {
        for (i, row) in wrap_text(feature, width.saturating_sub(2)).into_iter().enumerate() {
            let prefix = if i == 0 { "• " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(prefix, styles::text()),
                Span::styled(row, styles::text_dim()),
            ]));
        }
    }
    lines
}

/// Tech badges, credentials and link buttons
fn sidebar_lines(panel: &DetailPanel, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("Tech Stack", styles::heading())),
        Line::from(""),
    ];
    lines.extend(badge_lines(&panel.tech, width));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Project Links", styles::heading())));
    lines.push(Line::from(""));

    if let Some(credentials) = &panel.credentials {
        let label = styles::text_dim().add_modifier(Modifier::BOLD);
        let block = [
            Line::from(Span::styled("Demo Credentials:", styles::title())),
            Line::from(Span::styled("Email:", label)),
            Line::from(Span::styled(credentials.email.clone(), styles::mono())),
            Line::from(Span::styled("Password:", label)),
            Line::from(Span::styled(credentials.password.clone(), styles::mono())),
        ];
        lines.extend(
            block
                .into_iter()
                .map(|line| line.patch_style(styles::credentials_bg())),
        );
        lines.push(Line::from(""));
    }

    for link in &panel.links {
        let style = match link.kind {
            LinkKind::Repository => styles::link_primary(),
            LinkKind::LiveDemo => styles::link_accent(),
            LinkKind::Specs => styles::link_outline(),
        };
        lines.push(Line::from(Span::styled(centered_label(&link.label, width), style)));
        for row in wrap_text(&link.url, width) {
            lines.push(Line::from(Span::styled(row, styles::text_hint())));
        }
        lines.push(Line::from(""));
    }
    lines
}

/// Lay badges out left to right, wrapping at `width`
fn badge_lines(tech: &[String], width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for name in tech {
        let badge = format!(" {} ", name);
        let len = badge.chars().count();
        if used > 0 && used + 1 + len > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        if used > 0 {
            current.push(Span::raw(" "));
            used += 1;
        }
        current.push(Span::styled(badge, styles::badge()));
        used += len;
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

fn centered_label(label: &str, width: usize) -> String {
    let len = label.chars().count();
    let left = width.saturating_sub(len) / 2;
    let right = width.saturating_sub(len + left);
    format!("{}{}{}", " ".repeat(left), label, " ".repeat(right))
}

/// Greedy word wrap; words longer than `width` are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        if word.is_empty() {
            continue;
        }
        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Helper to create a centered rectangle
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
