//! Placeholder panels for tabs without real content yet.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Centered title + explanation, used by the Matches and Profile tabs
pub struct PlaceholderScreen {
    title: &'static str,
    body: &'static str,
}

impl PlaceholderScreen {
    pub fn matches() -> Self {
        Self {
            title: "Your Matches",
            body: "Matches will appear here when you connect with someone special.",
        }
    }

    pub fn profile() -> Self {
        Self {
            title: "Your Profile",
            body: "Profile management coming soon.",
        }
    }
}

impl Widget for PlaceholderScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::styled(self.title, styles::heading()).alignment(Alignment::Center),
            Line::raw(""),
            Line::styled(self.body, styles::muted()).alignment(Alignment::Center),
        ];

        let top = area.y + area.height.saturating_sub(3) / 2;
        let content_area = Rect {
            x: area.x,
            y: top,
            width: area.width,
            height: 3.min(area.height),
        };
        Paragraph::new(lines).render(content_area, buf);
    }
}
