//! Sign-in form state

use spice_core::AuthError;

/// Focusable controls on the sign-in screen, in traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
    Remember,
    Forgot,
    Submit,
    CreateAccount,
}

impl LoginField {
    const ORDER: [LoginField; 6] = [
        LoginField::Email,
        LoginField::Password,
        LoginField::Remember,
        LoginField::Forgot,
        LoginField::Submit,
        LoginField::CreateAccount,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// Whether typed characters should land in this field
    pub fn is_text(self) -> bool {
        matches!(self, LoginField::Email | LoginField::Password)
    }
}

/// Sign-in form: field buffers, visibility toggle, remember-me, focus.
///
/// Passwords stay in memory only and are never logged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub remember_me: bool,
    pub focus: LoginField,
    /// Last rejected submission, cleared on the next edit
    pub error: Option<AuthError>,
}

impl LoginForm {
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused text field
    pub fn insert_char(&mut self, c: char) {
        self.error = None;
        match self.focus {
            LoginField::Email => self.email.push(c),
            LoginField::Password => self.password.push(c),
            _ => {}
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        self.error = None;
        match self.focus {
            LoginField::Email => {
                self.email.pop();
            }
            LoginField::Password => {
                self.password.pop();
            }
            _ => {}
        }
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn toggle_remember(&mut self) {
        self.remember_me = !self.remember_me;
    }

    /// Password as rendered in the field
    pub fn password_display(&self) -> String {
        if self.show_password {
            self.password.clone()
        } else {
            "•".repeat(self.password.chars().count())
        }
    }

    /// Both fields must be non-empty. No credential check happens
    /// anywhere; the mock backend accepts every well-formed submission.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.trim().is_empty() {
            return Err(AuthError::EmptyEmail);
        }
        if self.password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_forward_and_back() {
        let mut form = LoginForm::default();
        assert_eq!(form.focus, LoginField::Email);
        for _ in 0..LoginField::ORDER.len() {
            form.focus_next();
        }
        assert_eq!(form.focus, LoginField::Email);
        form.focus_prev();
        assert_eq!(form.focus, LoginField::CreateAccount);
    }

    #[test]
    fn test_typing_targets_focused_field() {
        let mut form = LoginForm::default();
        form.insert_char('a');
        form.focus = LoginField::Password;
        form.insert_char('x');
        assert_eq!(form.email, "a");
        assert_eq!(form.password, "x");
    }

    #[test]
    fn test_typing_into_non_text_field_is_ignored() {
        let mut form = LoginForm {
            focus: LoginField::Submit,
            ..Default::default()
        };
        form.insert_char('a');
        assert!(form.email.is_empty());
        assert!(form.password.is_empty());
    }

    #[test]
    fn test_backspace() {
        let mut form = LoginForm::default();
        form.insert_char('a');
        form.insert_char('b');
        form.backspace();
        assert_eq!(form.email, "a");
        // Backspace on empty field is a no-op
        form.backspace();
        form.backspace();
        assert_eq!(form.email, "");
    }

    #[test]
    fn test_password_masking() {
        let mut form = LoginForm {
            focus: LoginField::Password,
            ..Default::default()
        };
        for c in "secret".chars() {
            form.insert_char(c);
        }
        assert_eq!(form.password_display(), "••••••");
        form.toggle_show_password();
        assert_eq!(form.password_display(), "secret");
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let mut form = LoginForm::default();
        assert_eq!(form.validate(), Err(AuthError::EmptyEmail));
        form.email = "a@b.com".to_string();
        assert_eq!(form.validate(), Err(AuthError::EmptyPassword));
        form.password = "x".to_string();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_edit_clears_error() {
        let mut form = LoginForm {
            error: Some(AuthError::EmptyEmail),
            ..Default::default()
        };
        form.insert_char('a');
        assert!(form.error.is_none());
    }
}
