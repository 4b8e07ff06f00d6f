use crate::core::validator::{validate_login, validate_registration, ValidationReport};
use crate::domain::model::{AccountLookup, Feedback, LoginForm, RegistrationForm};
use crate::domain::ports::Store;
use crate::utils::error::{AppError, Result};

pub const REGISTRATION_SUCCESS: &str = "Registration successful!";
pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const PERSIST_SUFFIX: &str = " You will be kept logged in.";

/// Drives both forms: normalize, validate, then persist or report.
///
/// Holds no state of its own between submissions; every call re-reads the
/// store.
pub struct FlowController<S: Store> {
    store: S,
}

impl<S: Store> FlowController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Clears `form` only when the registration is accepted.
    pub fn submit_registration(&mut self, form: &mut RegistrationForm) -> Result<Feedback> {
        let input = form.normalized();
        tracing::debug!(username = %input.username, "Registration submitted");

        let username_taken = self.store.has(&input.username)?;
        let report = validate_registration(&input, username_taken);

        if !report.is_valid() {
            return Ok(rejected("registration", report));
        }

        let key = input.username.clone();
        let record = input.into_record();
        self.store.put(&key, &record)?;
        form.clear();

        tracing::info!(username = %key, "Registration accepted");
        Ok(Feedback::success(REGISTRATION_SUCCESS))
    }

    /// Clears `form` only when the login is accepted.
    pub fn submit_login(&mut self, form: &mut LoginForm) -> Result<Feedback> {
        let username = form.normalized_username();
        tracing::debug!(username = %username, "Login submitted");

        let account = self.lookup_account(&username)?;
        let report = validate_login(&username, &form.password, &account);

        if !report.is_valid() {
            return Ok(rejected("login", report));
        }

        let mut message = LOGIN_SUCCESS.to_string();
        if form.persist {
            message.push_str(PERSIST_SUFFIX);
        }
        form.clear();

        tracing::info!(username = %username, "Login accepted");
        Ok(Feedback::success(message))
    }

    fn lookup_account(&self, username: &str) -> Result<AccountLookup> {
        if username.is_empty() {
            return Ok(AccountLookup::Absent);
        }

        match self.store.get(username) {
            Ok(Some(record)) => Ok(AccountLookup::Found(record)),
            Ok(None) => Ok(AccountLookup::Absent),
            Err(AppError::MalformedRecord { key }) => {
                tracing::warn!(key = %key, "Stored account record is malformed");
                Ok(AccountLookup::Malformed)
            }
            Err(e) => Err(e),
        }
    }
}

fn rejected(flow: &str, report: ValidationReport) -> Feedback {
    let fields: Vec<String> = report.errors().iter().map(|e| e.field.to_string()).collect();
    tracing::warn!(flow, failed = ?fields, "Submission rejected");
    Feedback::errors(report.messages(), report.focus())
}
