//! Portfolio theme module.
//!
//! A light palette built around four named colours: dark slate for primary
//! text and filled buttons, mid slate for secondary text, beige for the demo
//! accent and off-white for the page background. The `mono` family is
//! approximated with a distinct style for credentials.

use ratatui::style::Color;

/// Portfolio colour palette
pub mod colors {
    use super::Color;

    // === Named palette ===
    /// Dark slate - primary text, filled buttons
    pub const DARK_SLATE: Color = Color::Rgb(0x40, 0x5D, 0x72);
    /// Mid slate - secondary text, hover fills
    pub const MID_SLATE: Color = Color::Rgb(0x75, 0x86, 0x94);
    /// Beige - live demo accent
    pub const BEIGE: Color = Color::Rgb(0xF7, 0xE7, 0xDC);
    /// Off-white - page and credentials background
    pub const OFF_WHITE: Color = Color::Rgb(0xFF, 0xF8, 0xF3);

    // === Neutrals ===
    pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
    /// Light gray - card borders, badge fills
    pub const GRAY_LIGHT: Color = Color::Rgb(0xE5, 0xE7, 0xEB);
    /// Very dim text for hints and placeholders
    pub const FG_HINT: Color = Color::Rgb(0xA8, 0xB1, 0xBA);
    /// Backdrop behind the detail panel
    pub const BACKDROP: Color = Color::Rgb(0x26, 0x2F, 0x38);
}

/// Semantic styling helpers
pub mod styles {
    use ratatui::style::{Modifier, Style};

    use super::colors;

    /// Page background
    pub fn page() -> Style {
        Style::default().fg(colors::DARK_SLATE).bg(colors::OFF_WHITE)
    }

    /// Primary text
    pub fn text() -> Style {
        Style::default().fg(colors::DARK_SLATE)
    }

    /// Secondary text
    pub fn text_dim() -> Style {
        Style::default().fg(colors::MID_SLATE)
    }

    pub fn text_hint() -> Style {
        Style::default().fg(colors::FG_HINT)
    }

    /// Monospace stand-in for credentials
    pub fn mono() -> Style {
        Style::default()
            .fg(colors::DARK_SLATE)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn border() -> Style {
        Style::default().fg(colors::GRAY_LIGHT)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors::DARK_SLATE)
    }

    pub fn card_bg() -> Style {
        Style::default().bg(colors::WHITE)
    }

    pub fn card_title() -> Style {
        Style::default()
            .fg(colors::DARK_SLATE)
            .add_modifier(Modifier::BOLD)
    }

    /// Page and panel headings
    pub fn title() -> Style {
        Style::default()
            .fg(colors::DARK_SLATE)
            .add_modifier(Modifier::BOLD)
    }

    /// Section headings inside the detail panel
    pub fn heading() -> Style {
        Style::default()
            .fg(colors::DARK_SLATE)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn button() -> Style {
        Style::default().fg(colors::WHITE).bg(colors::MID_SLATE)
    }

    pub fn button_focused() -> Style {
        Style::default()
            .fg(colors::WHITE)
            .bg(colors::DARK_SLATE)
            .add_modifier(Modifier::BOLD)
    }

    /// Repository link buttons
    pub fn link_primary() -> Style {
        Style::default().fg(colors::WHITE).bg(colors::DARK_SLATE)
    }

    /// Live demo button
    pub fn link_accent() -> Style {
        Style::default()
            .fg(colors::DARK_SLATE)
            .bg(colors::BEIGE)
            .add_modifier(Modifier::BOLD)
    }

    /// Spec sheet button (outlined)
    pub fn link_outline() -> Style {
        Style::default()
            .fg(colors::DARK_SLATE)
            .bg(colors::WHITE)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn badge() -> Style {
        Style::default()
            .fg(colors::DARK_SLATE)
            .bg(colors::GRAY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn credentials_bg() -> Style {
        Style::default().bg(colors::OFF_WHITE)
    }

    /// Dimmed backdrop behind the modal
    pub fn modal_bg() -> Style {
        Style::default().bg(colors::BACKDROP)
    }

    pub fn modal_content_bg() -> Style {
        Style::default().fg(colors::DARK_SLATE).bg(colors::WHITE)
    }

    /// Applied over the modal while it fades out
    pub fn fading() -> Style {
        Style::default().add_modifier(Modifier::DIM)
    }
}
