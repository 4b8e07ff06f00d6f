use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Stored record for '{key}' could not be decoded")]
    MalformedRecord { key: String },
}

impl AppError {
    /// Short message suitable for printing to a terminal user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::IoError(_) => "Could not access the credential store".to_string(),
            AppError::SerializationError(_) => "Credential store contents are unreadable".to_string(),
            AppError::ConfigError { .. } | AppError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            AppError::MalformedRecord { .. } => "Account data is invalid.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_message() {
        let err = AppError::MalformedRecord {
            key: "alice".to_string(),
        };
        assert_eq!(err.to_string(), "Stored record for 'alice' could not be decoded");
        assert_eq!(err.user_friendly_message(), "Account data is invalid.");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::IoError(_)));
    }
}
