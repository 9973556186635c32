//! Discovery deck: the top profile card, or the caught-up state.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use spice_core::Profile;

use crate::theme::{palette, styles};
use crate::widgets::modal_overlay::centered_rect;

const CARD_WIDTH: u16 = 46;

/// The discover tab content
pub struct DiscoverScreen<'a> {
    top: Option<&'a Profile>,
    remaining: usize,
    total: usize,
}

impl<'a> DiscoverScreen<'a> {
    pub fn new(top: Option<&'a Profile>, remaining: usize, total: usize) -> Self {
        Self {
            top,
            remaining,
            total,
        }
    }

    fn card_lines(profile: &Profile) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        // Photo placeholder; real clients resolve these at build time
        let fill = "▒".repeat(30);
        for _ in 0..3 {
            lines.push(
                Line::styled(fill.clone(), ratatui::style::Style::default().fg(palette::PHOTO_FILL))
                    .alignment(Alignment::Center),
            );
        }
        if let Some(photo) = profile.primary_photo() {
            lines.push(Line::styled(format!("[{photo}]"), styles::muted()).alignment(Alignment::Center));
        }
        lines.push(Line::raw(""));

        // Headline and badges
        let mut badges: Vec<Span<'static>> = vec![Span::styled(profile.headline(), styles::heading())];
        if profile.verified {
            badges.push(Span::raw("  "));
            badges.push(Span::styled("✓ Verified", styles::badge_verified()));
        }
        if profile.premium {
            badges.push(Span::raw("  "));
            badges.push(Span::styled("★ Premium", styles::badge_premium()));
        }
        badges.push(Span::raw("  "));
        badges.push(Span::styled(profile.kind.label(), styles::muted()));
        lines.push(Line::from(badges));

        lines.push(Line::styled(profile.location.clone(), styles::muted()));
        lines.push(Line::raw(""));
        lines.push(Line::styled(profile.bio.clone(), styles::body()));
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            profile.interests.join(" · "),
            ratatui::style::Style::default().fg(palette::ACCENT_DIM),
        ));
        lines.push(Line::raw(""));
        lines.push(
            Line::styled("← Pass      → Like", styles::heading()).alignment(Alignment::Center),
        );

        lines
    }

    fn empty_lines() -> Vec<Line<'static>> {
        vec![
            Line::styled("You're all caught up", styles::heading())
                .alignment(Alignment::Center),
            Line::raw(""),
            Line::styled(
                "No more profiles to show right now.",
                styles::body(),
            )
            .alignment(Alignment::Center),
            Line::styled("Check back later for new members.", styles::muted())
                .alignment(Alignment::Center),
        ]
    }
}

impl Widget for DiscoverScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = centered_rect(CARD_WIDTH, area.height.saturating_sub(2), area);

        let title = match self.top {
            Some(_) => format!(
                " Discover ({} of {}) ",
                self.total - self.remaining + 1,
                self.total
            ),
            None => " Discover ".to_string(),
        };

        let block = Block::bordered()
            .title(title)
            .border_style(ratatui::style::Style::default().fg(palette::BORDER_ACTIVE));
        let inner = block.inner(card);
        block.render(card, buf);

        let lines = match self.top {
            Some(profile) => Self::card_lines(profile),
            None => Self::empty_lines(),
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
