//! Bottom navigation bar with badge counts.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use spice_app::Tab;

use crate::theme::{palette, styles};

/// Five-tab bar pinned to the bottom of the main view
pub struct BottomNav {
    active: Tab,
    match_count: usize,
    message_count: usize,
}

impl BottomNav {
    pub fn new(active: Tab, match_count: usize, message_count: usize) -> Self {
        Self {
            active,
            match_count,
            message_count,
        }
    }

    fn tab_label(&self, tab: Tab, index: usize) -> Vec<Span<'static>> {
        let badge = match tab {
            Tab::Matches if self.match_count > 0 => format!(" ({})", self.match_count),
            Tab::Messages if self.message_count > 0 => format!(" ({})", self.message_count),
            _ => String::new(),
        };
        let style = if tab == Tab::Premium {
            // Premium is always gold, active or not
            styles::badge_premium()
        } else {
            styles::tab(tab == self.active)
        };
        vec![
            Span::styled(format!("[{}] ", index + 1), styles::muted()),
            Span::styled(format!("{}{}", tab.label(), badge), style),
            Span::raw("   "),
        ]
    }
}

impl Widget for BottomNav {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().border_style(Style::default().fg(palette::BORDER_DIM));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = Vec::new();
        for (i, tab) in Tab::ALL.iter().enumerate() {
            spans.extend(self.tab_label(*tab, i));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_nav(nav: BottomNav) -> String {
        let backend = TestBackend::new(100, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| f.render_widget(nav, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_all_tabs_are_listed() {
        let content = render_nav(BottomNav::new(Tab::Discover, 0, 0));
        for tab in Tab::ALL {
            assert!(content.contains(tab.label()), "missing {}", tab.label());
        }
    }

    #[test]
    fn test_badge_counts_render() {
        let content = render_nav(BottomNav::new(Tab::Discover, 3, 1));
        assert!(content.contains("Matches (3)"));
        assert!(content.contains("Messages (1)"));
    }

    #[test]
    fn test_zero_counts_hide_badges() {
        let content = render_nav(BottomNav::new(Tab::Discover, 0, 0));
        assert!(!content.contains("(0)"));
    }
}
