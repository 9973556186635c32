//! Sign-in screen: email/password card with remember-me and links.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

use spice_app::forms::{LoginField, LoginForm};

use crate::theme::{palette, styles};
use crate::widgets::modal_overlay::centered_rect;

const CARD_WIDTH: u16 = 48;
const CARD_HEIGHT: u16 = 22;

/// The sign-in form card
pub struct LoginScreen<'a> {
    form: &'a LoginForm,
    /// True while the simulated login delay is running
    pending: bool,
}

impl<'a> LoginScreen<'a> {
    pub fn new(form: &'a LoginForm, pending: bool) -> Self {
        Self { form, pending }
    }

    fn text_field(&self, label: &'static str, value: String, field: LoginField) -> [Line<'static>; 2] {
        let focused = self.form.focus == field;
        let marker = if focused { "▸ " } else { "  " };
        let cursor = if focused { "_" } else { "" };
        [
            Line::from(Span::styled(
                format!("{marker}{label}"),
                styles::field_label(focused),
            )),
            Line::from(Span::styled(
                format!("  {value}{cursor}"),
                styles::body(),
            )),
        ]
    }

    fn content(&self) -> Vec<Line<'static>> {
        let form = self.form;
        let mut lines = vec![
            Line::styled("SPICE", styles::brand()).alignment(Alignment::Center),
            Line::styled("Welcome Back", styles::heading()).alignment(Alignment::Center),
            Line::styled("Sign in to continue your journey", styles::muted())
                .alignment(Alignment::Center),
            Line::raw(""),
        ];

        lines.extend(self.text_field(
            "Email Address",
            form.email.clone(),
            LoginField::Email,
        ));
        lines.push(Line::raw(""));
        lines.extend(self.text_field(
            "Password (Ctrl+P to show/hide)",
            form.password_display(),
            LoginField::Password,
        ));
        lines.push(Line::raw(""));

        let checkbox = if form.remember_me { "[x]" } else { "[ ]" };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{checkbox} Remember me"),
                styles::field_label(form.focus == LoginField::Remember),
            ),
            Span::raw("   "),
            Span::styled(
                "Forgot Password?",
                styles::field_label(form.focus == LoginField::Forgot),
            ),
        ]));
        lines.push(Line::raw(""));

        let submit_label = if self.pending {
            "  Signing In...  "
        } else {
            "     Sign In     "
        };
        lines.push(
            Line::from(Span::styled(
                submit_label,
                styles::button(form.focus == LoginField::Submit),
            ))
            .alignment(Alignment::Center),
        );

        match &form.error {
            Some(e) => lines.push(Line::styled(e.to_string(), styles::error())),
            None => lines.push(Line::raw("")),
        }

        lines.push(
            Line::styled("─────────────── Or ───────────────", styles::muted())
                .alignment(Alignment::Center),
        );
        lines.push(
            Line::from(vec![
                Span::styled("New to SPICE? ", styles::muted()),
                Span::styled(
                    "Create Account",
                    styles::field_label(form.focus == LoginField::CreateAccount),
                ),
            ])
            .alignment(Alignment::Center),
        );
        lines.push(Line::raw(""));
        lines.push(
            Line::styled("🔞 Adults Only Platform", styles::muted())
                .alignment(Alignment::Center),
        );

        lines
    }
}

impl Widget for LoginScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);
        Clear.render(card, buf);

        let block = Block::bordered().border_style(
            ratatui::style::Style::default().fg(palette::BORDER_DIM),
        );
        let inner = block.inner(card);
        block.render(card, buf);

        Paragraph::new(self.content()).render(inner, buf);
    }
}
