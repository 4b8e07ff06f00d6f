use serde::{Deserialize, Serialize};
use std::fmt;

/// A stored account. The username doubles as the storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Form inputs a validation error can point back at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    PasswordCheck,
    Terms,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::PasswordCheck => "passwordCheck",
            Field::Terms => "terms",
        };
        f.write_str(name)
    }
}

/// Raw registration form values, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_check: String,
    pub terms_accepted: bool,
}

impl RegistrationForm {
    pub fn normalized(&self) -> NormalizedRegistration {
        NormalizedRegistration {
            username: normalize_identifier(&self.username),
            email: normalize_identifier(&self.email),
            password: self.password.clone(),
            password_check: self.password_check.clone(),
            terms_accepted: self.terms_accepted,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Registration values after trimming and lowercasing the identifiers.
/// Passwords pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRegistration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_check: String,
    pub terms_accepted: bool,
}

impl NormalizedRegistration {
    pub fn into_record(self) -> UserRecord {
        UserRecord {
            username: self.username,
            email: self.email,
            password: self.password,
        }
    }
}

/// Raw login form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub persist: bool,
}

impl LoginForm {
    pub fn normalized_username(&self) -> String {
        normalize_identifier(&self.username)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn normalize_identifier(raw: &str) -> String {
    raw.trim_matches(is_form_whitespace).to_lowercase()
}

/// Whitespace as browser forms see it: Unicode `White_Space` without U+0085,
/// plus U+FEFF.
pub fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// What the store returned for a login username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountLookup {
    Found(UserRecord),
    Absent,
    Malformed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackStyle {
    Error,
    Success,
}

/// The single output area shared by both forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub style: FeedbackStyle,
    pub lines: Vec<String>,
    /// First invalid field in rule order; `None` on success.
    pub focus: Option<Field>,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            style: FeedbackStyle::Success,
            lines: vec![message.into()],
            focus: None,
        }
    }

    pub fn errors(lines: Vec<String>, focus: Option<Field>) -> Self {
        Self {
            style: FeedbackStyle::Error,
            lines,
            focus,
        }
    }

    pub fn is_success(&self) -> bool {
        self.style == FeedbackStyle::Success
    }

    /// Messages joined by line breaks.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_normalization_leaves_passwords_alone() {
        let form = RegistrationForm {
            username: "  User1 ".to_string(),
            email: " User1@Mail.COM".to_string(),
            password: " Str0ng!Pass#99 ".to_string(),
            password_check: " Str0ng!Pass#99 ".to_string(),
            terms_accepted: true,
        };

        let normalized = form.normalized();
        assert_eq!(normalized.username, "user1");
        assert_eq!(normalized.email, "user1@mail.com");
        assert_eq!(normalized.password, " Str0ng!Pass#99 ");
        assert_eq!(normalized.password_check, " Str0ng!Pass#99 ");
    }

    #[test]
    fn test_trim_uses_form_whitespace() {
        let form = LoginForm {
            username: "\u{FEFF}\u{A0}User1\t".to_string(),
            password: String::new(),
            persist: false,
        };
        assert_eq!(form.normalized_username(), "user1");

        let form = LoginForm {
            username: "\u{85}user1".to_string(),
            password: String::new(),
            persist: false,
        };
        assert_eq!(form.normalized_username(), "\u{85}user1");
    }

    #[test]
    fn test_clear_resets_every_field() {
        let mut form = LoginForm {
            username: "user1".to_string(),
            password: "secret".to_string(),
            persist: true,
        };
        form.clear();
        assert_eq!(form, LoginForm::default());
    }

    #[test]
    fn test_record_json_shape() {
        let record = UserRecord {
            username: "user1".to_string(),
            email: "user1@mail.com".to_string(),
            password: "Str0ng!Pass#99".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"username":"user1","email":"user1@mail.com","password":"Str0ng!Pass#99"}"#
        );
    }

    #[test]
    fn test_feedback_text_joins_lines() {
        let feedback = Feedback::errors(
            vec!["first".to_string(), "second".to_string()],
            Some(Field::Email),
        );
        assert_eq!(feedback.text(), "first\nsecond");
        assert!(!feedback.is_success());
    }
}
