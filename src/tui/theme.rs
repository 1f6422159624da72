//! Theme and Styling
//!
//! Colors and styles for the storefront. Red-to-pink accents on a dark base.

use ratatui::style::{Color, Modifier, Style};

/// Application theme
pub struct Theme;

impl Theme {
    // === Primary Colors ===

    /// Primary accent (red)
    pub const ACCENT: Color = Color::Rgb(239, 68, 68);

    /// Secondary accent (pink)
    pub const ACCENT_ALT: Color = Color::Rgb(236, 72, 153);

    /// Prices and totals
    pub const PRICE: Color = Color::Rgb(248, 113, 113);

    pub const SUCCESS: Color = Color::Rgb(34, 197, 94);

    pub const WARNING: Color = Color::Rgb(251, 191, 36);

    pub const ERROR: Color = Color::Rgb(239, 68, 68);

    // === Text Colors ===

    pub const TEXT_PRIMARY: Color = Color::Rgb(229, 229, 229);

    pub const TEXT_SECONDARY: Color = Color::Rgb(161, 161, 161);

    pub const TEXT_DIM: Color = Color::Rgb(82, 82, 82);

    // === Border Colors ===

    /// Default border (faint red)
    pub const BORDER: Color = Color::Rgb(80, 30, 30);

    pub const BORDER_FOCUSED: Color = Color::Rgb(236, 72, 153);

    // === Styles ===

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn text_dim() -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::ACCENT_ALT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn price() -> Style {
        Style::default()
            .fg(Self::PRICE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::BORDER_FOCUSED)
    }

    /// Highlighted list row
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::ACCENT_ALT)
            .add_modifier(Modifier::BOLD)
    }

    /// Category chip
    pub fn chip() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn chip_active() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn shortcut_key() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// In-progress indicator
    pub fn active() -> Style {
        Style::default()
            .fg(Self::WARNING)
            .add_modifier(Modifier::BOLD)
    }

    /// Cart count badge
    pub fn badge() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT_ALT)
            .add_modifier(Modifier::BOLD)
    }
}

pub struct Icons;

impl Icons {
    pub const COMPLETE: &'static str = "✓";
    pub const ERROR: &'static str = "✗";
    pub const PENDING: &'static str = "○";
    pub const CURSOR: &'static str = "▌";
    pub const SELECTED: &'static str = "▶";
    pub const STAR: &'static str = "★";
    pub const CART: &'static str = "🛒";
}
