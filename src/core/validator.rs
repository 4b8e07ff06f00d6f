use crate::core::rules;
use crate::domain::model::{AccountLookup, Field, NormalizedRegistration};

/// One failed rule: the message shown to the user and the field it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub message: &'static str,
}

impl ValidationError {
    fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Ordered list of failures from one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    fn push(&mut self, field: Field, message: &'static str) {
        self.errors.push(ValidationError::new(field, message));
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.to_string()).collect()
    }

    /// Field of the first failed rule, in evaluation order.
    pub fn focus(&self) -> Option<Field> {
        self.errors.first().map(|e| e.field)
    }
}

/// Runs all six registration rules without short-circuiting.
///
/// `username_taken` is the store's answer for the normalized username.
pub fn validate_registration(
    input: &NormalizedRegistration,
    username_taken: bool,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    if !rules::username_format_ok(&input.username) {
        report.push(Field::Username, rules::USERNAME_FORMAT_MESSAGE);
    }

    if username_taken {
        report.push(Field::Username, rules::USERNAME_TAKEN_MESSAGE);
    }

    if !rules::email_ok(&input.email) {
        report.push(Field::Email, rules::EMAIL_MESSAGE);
    }

    if !rules::password_strength_ok(&input.password, &input.username) {
        report.push(Field::Password, rules::PASSWORD_MESSAGE);
    }

    if !rules::passwords_match(&input.password, &input.password_check) {
        report.push(Field::PasswordCheck, rules::PASSWORD_MISMATCH_MESSAGE);
    }

    if !input.terms_accepted {
        report.push(Field::Terms, rules::TERMS_MESSAGE);
    }

    report
}

/// Blank and unknown usernames are mutually exclusive; the password is only
/// compared when a record was actually found.
pub fn validate_login(username: &str, password: &str, account: &AccountLookup) -> ValidationReport {
    let mut report = ValidationReport::default();

    if username.is_empty() {
        report.push(Field::Username, rules::USERNAME_BLANK_MESSAGE);
        return report;
    }

    match account {
        AccountLookup::Absent => report.push(Field::Username, rules::USERNAME_MISSING_MESSAGE),
        AccountLookup::Malformed => report.push(Field::Username, rules::ACCOUNT_INVALID_MESSAGE),
        AccountLookup::Found(record) => {
            if record.password != password {
                report.push(Field::Password, rules::INCORRECT_PASSWORD_MESSAGE);
            }
        }
    }

    report
}
