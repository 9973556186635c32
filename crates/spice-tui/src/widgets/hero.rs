//! Landing screen: brand, headline, call-to-action buttons.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use spice_app::HeroButton;

use crate::theme::{palette, styles};

/// Full-screen landing view
pub struct HeroScreen {
    focus: HeroButton,
}

impl HeroScreen {
    pub fn new(focus: HeroButton) -> Self {
        Self { focus }
    }

    fn content(&self) -> Vec<Line<'static>> {
        let buttons = Line::from(vec![
            Span::styled(
                "  Sign In  ",
                styles::button(self.focus == HeroButton::SignIn),
            ),
            Span::raw("   "),
            Span::styled(
                "  Sign Up  ",
                styles::button(self.focus == HeroButton::SignUp),
            ),
        ]);

        vec![
            Line::styled("S P I C E", styles::brand()),
            Line::styled("━━━━━━━━━", styles::brand()),
            Line::raw(""),
            Line::styled("Start your dating journey today", styles::heading()),
            Line::raw(""),
            Line::styled(
                "Join thousands of adventurous singles and couples exploring",
                styles::body(),
            ),
            Line::styled(
                "connections in a safe, premium environment.",
                styles::body(),
            ),
            Line::raw(""),
            buttons,
            Line::raw(""),
            Line::styled("🔞 Adults Only Platform", styles::heading()),
            Line::styled(
                "Premium lifestyle community for 18+ verified members only.",
                styles::muted(),
            ),
            Line::styled(
                "Your privacy and discretion are our top priorities.",
                styles::muted(),
            ),
            Line::raw(""),
            Line::from(vec![
                Span::styled("● ", ratatui::style::Style::default().fg(palette::SUCCESS)),
                Span::styled("Verified Members   ", styles::muted()),
                Span::styled("● ", ratatui::style::Style::default().fg(palette::VERIFIED)),
                Span::styled("Secure Platform   ", styles::muted()),
                Span::styled("● ", ratatui::style::Style::default().fg(palette::PREMIUM)),
                Span::styled("Premium Experience", styles::muted()),
            ]),
        ]
    }
}

impl Widget for HeroScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.content();

        // Vertically center the block
        let height = lines.len() as u16;
        let top = area.y + area.height.saturating_sub(height) / 2;
        let content_area = Rect {
            x: area.x,
            y: top,
            width: area.width,
            height: height.min(area.height),
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(content_area, buf);
    }
}
