//! Premium upsell modal with plan selection.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

use spice_app::PremiumPlan;

use crate::theme::{palette, styles};
use crate::widgets::modal_overlay::{centered_rect, dim_background};

const MODAL_WIDTH: u16 = 46;
const MODAL_HEIGHT: u16 = 16;

/// Plan picker shown when the Premium tab is activated
pub struct PremiumModal {
    cursor: usize,
}

impl PremiumModal {
    pub fn new(cursor: usize) -> Self {
        Self { cursor }
    }

    fn content(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::styled("★ SPICE Premium", styles::badge_premium()).alignment(Alignment::Center),
            Line::raw(""),
            Line::styled("Unlimited likes · See who liked you", styles::body())
                .alignment(Alignment::Center),
            Line::styled("Advanced filters · Incognito mode", styles::body())
                .alignment(Alignment::Center),
            Line::raw(""),
        ];

        for (i, plan) in PremiumPlan::ALL.iter().enumerate() {
            let selected = i == self.cursor;
            let marker = if selected { "▸ " } else { "  " };
            let style = if selected {
                styles::button(true)
            } else {
                styles::body()
            };
            lines.push(Line::from(Span::styled(
                format!("{marker}{:<12} {:>10}", plan.label(), plan.price_label()),
                style,
            )));
        }

        lines.push(Line::raw(""));
        lines.push(
            Line::styled("↑/↓ select · Enter subscribe · Esc close", styles::muted())
                .alignment(Alignment::Center),
        );
        lines
    }
}

impl Widget for PremiumModal {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        Clear.render(modal, buf);

        let block = Block::bordered()
            .border_style(Style::default().fg(palette::PREMIUM));
        let inner = block.inner(modal);
        block.render(modal, buf);

        Paragraph::new(self.content()).render(inner, buf);
    }
}
