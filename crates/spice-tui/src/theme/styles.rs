//! Shared styles built from the palette

use ratatui::style::{Modifier, Style};

use super::palette;

/// Brand wordmark ("SPICE")
pub fn brand() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn heading() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn body() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn error() -> Style {
    Style::default().fg(palette::ERROR)
}

/// Buttons and other activatable controls
pub fn button(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(palette::DEEPEST_BG)
            .bg(palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette::TEXT_PRIMARY)
    }
}

/// Form field labels; the focused field gets the accent
pub fn field_label(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette::TEXT_SECONDARY)
    }
}

pub fn badge_verified() -> Style {
    Style::default().fg(palette::VERIFIED)
}

pub fn badge_premium() -> Style {
    Style::default().fg(palette::PREMIUM)
}

/// Bottom-bar tab labels
pub fn tab(active: bool) -> Style {
    if active {
        Style::default()
            .fg(palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette::TEXT_SECONDARY)
    }
}
