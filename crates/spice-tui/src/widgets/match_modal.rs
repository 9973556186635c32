//! Match celebration modal.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

use spice_core::Profile;

use crate::theme::{palette, styles};
use crate::widgets::modal_overlay::{centered_rect, dim_background};

const MODAL_WIDTH: u16 = 46;
const MODAL_HEIGHT: u16 = 13;

/// "It's a Match!" overlay, shown over a dimmed main view
pub struct MatchModal<'a> {
    profile: &'a Profile,
    current_user_name: &'a str,
}

impl<'a> MatchModal<'a> {
    pub fn new(profile: &'a Profile, current_user_name: &'a str) -> Self {
        Self {
            profile,
            current_user_name,
        }
    }

    fn content(&self) -> Vec<Line<'static>> {
        let photo = self
            .profile
            .primary_photo()
            .unwrap_or("no photo")
            .to_string();
        vec![
            Line::raw(""),
            Line::styled("It's a Match!", styles::brand()).alignment(Alignment::Center),
            Line::raw(""),
            Line::styled(
                format!(
                    "{} and {} liked each other",
                    self.current_user_name, self.profile.name
                ),
                styles::body(),
            )
            .alignment(Alignment::Center),
            Line::from(vec![
                Span::styled(format!("[{}]", self.current_user_name), styles::muted()),
                Span::styled("  ♥  ", Style::default().fg(palette::ACCENT)),
                Span::styled(format!("[{photo}]"), styles::muted()),
            ])
            .alignment(Alignment::Center),
            Line::raw(""),
            Line::from(Span::styled("  Start Chat (Enter)  ", styles::button(true)))
                .alignment(Alignment::Center),
            Line::raw(""),
            Line::from(Span::styled("Keep Swiping (Esc)", styles::muted()))
                .alignment(Alignment::Center),
        ]
    }
}

impl Widget for MatchModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        Clear.render(modal, buf);

        let block = Block::bordered()
            .border_style(Style::default().fg(palette::BORDER_ACTIVE));
        let inner = block.inner(modal);
        block.render(modal, buf);

        Paragraph::new(self.content()).render(inner, buf);
    }
}
