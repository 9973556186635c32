//! Chat overlay: header, attributed message list, draft input.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use spice_core::{ChatMessage, Profile};

use crate::theme::{palette, styles};

/// Full-screen conversation view with a matched profile
pub struct ChatView<'a> {
    partner: &'a Profile,
    messages: &'a [ChatMessage],
    draft: &'a str,
    current_user_id: &'a str,
}

impl<'a> ChatView<'a> {
    pub fn new(
        partner: &'a Profile,
        messages: &'a [ChatMessage],
        draft: &'a str,
        current_user_id: &'a str,
    ) -> Self {
        Self {
            partner,
            messages,
            draft,
            current_user_id,
        }
    }

    fn header_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled("← ", styles::muted()),
            Span::styled(self.partner.name.clone(), styles::heading()),
        ];
        if self.partner.verified {
            spans.push(Span::styled(" ✓", styles::badge_verified()));
        }
        if let Some(photo) = self.partner.primary_photo() {
            spans.push(Span::styled(format!("  [{photo}]"), styles::muted()));
        }
        Line::from(spans)
    }

    /// Two lines per message: sender/time meta, then the text. Ours sit
    /// on the right, theirs on the left.
    fn message_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for msg in self.messages {
            let ours = msg.is_from(self.current_user_id);
            let alignment = if ours {
                Alignment::Right
            } else {
                Alignment::Left
            };
            let bubble = Style::default().fg(if ours {
                palette::BUBBLE_OURS
            } else {
                palette::BUBBLE_THEIRS
            });

            lines.push(
                Line::styled(
                    format!("{} · {}", msg.sender_name, msg.time_label()),
                    styles::muted(),
                )
                .alignment(alignment),
            );
            lines.push(Line::styled(msg.text.clone(), bubble).alignment(alignment));
            lines.push(Line::raw(""));
        }
        lines
    }
}

impl Widget for ChatView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header_area, messages_area, input_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .areas(area);

        Paragraph::new(vec![self.header_line(), Line::raw("")]).render(header_area, buf);

        Paragraph::new(self.message_lines())
            .wrap(Wrap { trim: true })
            .render(messages_area, buf);

        let input_block = Block::bordered()
            .title(" Message ")
            .title_bottom(" Enter send · Esc back ")
            .border_style(Style::default().fg(palette::BORDER_DIM));
        let input_inner = input_block.inner(input_area);
        input_block.render(input_area, buf);
        Paragraph::new(Line::from(vec![
            Span::styled(self.draft.to_string(), styles::body()),
            Span::styled("_", styles::muted()),
        ]))
        .render(input_inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spice_core::{seed_conversation, seed_profiles, CURRENT_USER_ID};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_chat(draft: &str) -> String {
        let profiles = seed_profiles();
        let messages = seed_conversation();
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let view = ChatView::new(&profiles[0], &messages, draft, CURRENT_USER_ID);
                f.render_widget(view, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_chat_shows_partner_and_history() {
        let content = render_chat("");
        assert!(content.contains("Alexandra"));
        assert!(content.contains("Thanks for the match"));
        assert!(content.contains("wine tasting photo"));
    }

    #[test]
    fn test_chat_shows_draft() {
        let content = render_chat("see you at 8");
        assert!(content.contains("see you at 8"));
    }

    #[test]
    fn test_own_messages_are_right_aligned() {
        let profiles = seed_profiles();
        let messages = seed_conversation();
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let view = ChatView::new(&profiles[0], &messages, "", CURRENT_USER_ID);
                f.render_widget(view, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();

        // Our reply ends near the right edge; their message starts at
        // the left edge.
        let row_text = |y: u16| -> String {
            (0..100).map(|x| buffer[(x, y)].symbol()).collect()
        };
        let mut left_start = false;
        let mut right_end = false;
        for y in 0..30 {
            let row = row_text(y);
            if row.trim_end().starts_with("Hey! Thanks") {
                left_start = true;
            }
            if row.trim_end().ends_with("looks incredible!") && !row.starts_with("Hi Alexandra") {
                right_end = true;
            }
        }
        assert!(left_start, "their message should start at the left edge");
        assert!(right_end, "our message should end at the right edge");
    }
}
