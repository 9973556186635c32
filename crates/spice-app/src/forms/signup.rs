//! Registration form state

use spice_core::AuthError;

/// Minimum age for the platform
const MIN_AGE: u8 = 18;

/// Focusable controls on the registration screen, in traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupField {
    #[default]
    Name,
    Age,
    Email,
    Password,
    Submit,
    SignIn,
}

impl SignupField {
    const ORDER: [SignupField; 6] = [
        SignupField::Name,
        SignupField::Age,
        SignupField::Email,
        SignupField::Password,
        SignupField::Submit,
        SignupField::SignIn,
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
        matches!(
            self,
            SignupField::Name | SignupField::Age | SignupField::Email | SignupField::Password
        )
    }
}

/// A validated registration submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupData {
    pub name: String,
    pub age: u8,
    pub email: String,
    pub password: String,
}

/// Registration form. Age is kept as the raw typed string; parsing
/// happens at validation time so the error can echo the input back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignupForm {
    pub name: String,
    pub age: String,
    pub email: String,
    pub password: String,
    pub focus: SignupField,
    /// Last rejected submission, cleared on the next edit
    pub error: Option<AuthError>,
}

impl SignupForm {
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
            SignupField::Name => self.name.push(c),
            SignupField::Age => self.age.push(c),
            SignupField::Email => self.email.push(c),
            SignupField::Password => self.password.push(c),
            _ => {}
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        self.error = None;
        match self.focus {
            SignupField::Name => {
                self.name.pop();
            }
            SignupField::Age => {
                self.age.pop();
            }
            SignupField::Email => {
                self.email.pop();
            }
            SignupField::Password => {
                self.password.pop();
            }
            _ => {}
        }
    }

    /// Password as rendered in the field (always masked here; the
    /// registration screen has no visibility toggle)
    pub fn password_display(&self) -> String {
        "•".repeat(self.password.chars().count())
    }

    /// All fields non-empty, age a number of at least 18.
    /// No account is created anywhere; success only navigates.
    pub fn validate(&self) -> Result<SignupData, AuthError> {
        if self.name.trim().is_empty() {
            return Err(AuthError::EmptyName);
        }
        let age: u8 = self
            .age
            .trim()
            .parse()
            .map_err(|_| AuthError::InvalidAge {
                value: self.age.clone(),
            })?;
        if age < MIN_AGE {
            return Err(AuthError::InvalidAge {
                value: self.age.clone(),
            });
        }
        if self.email.trim().is_empty() {
            return Err(AuthError::EmptyEmail);
        }
        if self.password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }
        Ok(SignupData {
            name: self.name.trim().to_string(),
            age,
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}
