//! Color palette for the SPICE look: dark nightlife background with a
//! hot red accent.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Card backgrounds
pub const POPUP_BG: Color = Color::DarkGray; // Modal backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::LightRed; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::LightRed; // Brand accent
pub const ACCENT_DIM: Color = Color::Red; // Dimmed accent

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status / badges ---
pub const VERIFIED: Color = Color::Cyan; // Verified checkmark
pub const PREMIUM: Color = Color::Yellow; // Premium star / gold
pub const SUCCESS: Color = Color::Green; // Trust indicators
pub const ERROR: Color = Color::Red; // Validation errors

// --- Chat bubbles ---
pub const BUBBLE_OURS: Color = Color::LightRed; // Our messages
pub const BUBBLE_THEIRS: Color = Color::White; // Their messages

// --- Photo placeholder ---
pub const PHOTO_FILL: Color = Color::DarkGray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_constants_are_valid() {
        let _: Color = ACCENT;
        let _: Color = DEEPEST_BG;
        let _: Color = VERIFIED;
    }
}
