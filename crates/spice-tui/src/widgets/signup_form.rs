//! Registration screen: name/age/email/password card.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

use spice_app::forms::{SignupField, SignupForm};

use crate::theme::{palette, styles};
use crate::widgets::modal_overlay::centered_rect;

const CARD_WIDTH: u16 = 48;
const CARD_HEIGHT: u16 = 22;

/// The registration form card
pub struct SignupScreen<'a> {
    form: &'a SignupForm,
}

impl<'a> SignupScreen<'a> {
    pub fn new(form: &'a SignupForm) -> Self {
        Self { form }
    }

    fn text_field(
        &self,
        label: &'static str,
        value: String,
        field: SignupField,
    ) -> [Line<'static>; 2] {
        let focused = self.form.focus == field;
        let marker = if focused { "▸ " } else { "  " };
        let cursor = if focused { "_" } else { "" };
        [
            Line::from(Span::styled(
                format!("{marker}{label}"),
                styles::field_label(focused),
            )),
            Line::from(Span::styled(format!("  {value}{cursor}"), styles::body())),
        ]
    }

    fn content(&self) -> Vec<Line<'static>> {
        let form = self.form;
        let mut lines = vec![
            Line::styled("SPICE", styles::brand()).alignment(Alignment::Center),
            Line::styled("Create Your Account", styles::heading()).alignment(Alignment::Center),
            Line::styled("18+ verified members only", styles::muted())
                .alignment(Alignment::Center),
            Line::raw(""),
        ];

        lines.extend(self.text_field("Name", form.name.clone(), SignupField::Name));
        lines.extend(self.text_field("Age", form.age.clone(), SignupField::Age));
        lines.extend(self.text_field("Email Address", form.email.clone(), SignupField::Email));
        lines.extend(self.text_field(
            "Password",
            form.password_display(),
            SignupField::Password,
        ));
        lines.push(Line::raw(""));

        lines.push(
            Line::from(Span::styled(
                "     Sign Up     ",
                styles::button(form.focus == SignupField::Submit),
            ))
            .alignment(Alignment::Center),
        );

        match &form.error {
            Some(e) => lines.push(Line::styled(e.to_string(), styles::error())),
            None => lines.push(Line::raw("")),
        }

        lines.push(
            Line::from(vec![
                Span::styled("Already a member? ", styles::muted()),
                Span::styled(
                    "Sign In",
                    styles::field_label(form.focus == SignupField::SignIn),
                ),
            ])
            .alignment(Alignment::Center),
        );

        lines
    }
}

impl Widget for SignupScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);
        Clear.render(card, buf);

        let block = Block::bordered()
            .border_style(ratatui::style::Style::default().fg(palette::BORDER_DIM));
        let inner = block.inner(card);
        block.render(card, buf);

        Paragraph::new(self.content()).render(inner, buf);
    }
}
