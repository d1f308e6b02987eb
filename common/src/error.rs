use thiserror::Error;

use crate::utils::PhoneType;

/// Why an inbound contact payload was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0}")]
    MalformedPayload(String),

    #[error("Missing Contact Name")]
    MissingName,

    #[error("Missing Contact Email")]
    MissingEmail,

    #[error("Invalid Contact Email")]
    InvalidEmail,

    #[error("Missing Contact Phone Number(s)")]
    MissingPhoneNumbers,

    #[error("Contact Phone Number Type invalid: {0}")]
    InvalidPhoneType(String),

    #[error("Invalid Phone Number specified for \"{phone_type}\": {number}")]
    InvalidPhoneNumber { phone_type: PhoneType, number: String },
}

impl From<serde_json::Error> for ValidationError {
    fn from(e: serde_json::Error) -> Self {
        ValidationError::MalformedPayload(e.to_string())
    }
}

/// Failure while reading or writing contacts. Callers treat every variant
/// alike; the variants only shape the message.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Mismatch record count returned from database! expected {expected}, got {actual}")]
    RecordCountMismatch { expected: u64, actual: u64 },

    #[error("Rollback failed ({source}) after: {cause}")]
    Rollback {
        source: sqlx::Error,
        cause: Box<PersistenceError>,
    },
}

pub type PersistenceResult<T> = std::result::Result<T, PersistenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages() {
        assert_eq!(ValidationError::MissingName.to_string(), "Missing Contact Name");
        assert_eq!(ValidationError::MissingEmail.to_string(), "Missing Contact Email");
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Invalid Contact Email");
        assert_eq!(
            ValidationError::MissingPhoneNumbers.to_string(),
            "Missing Contact Phone Number(s)"
        );
        assert_eq!(
            ValidationError::InvalidPhoneType("pager".to_string()).to_string(),
            "Contact Phone Number Type invalid: pager"
        );
        assert_eq!(
            ValidationError::InvalidPhoneNumber {
                phone_type: PhoneType::Home,
                number: "555-1234".to_string(),
            }
            .to_string(),
            "Invalid Phone Number specified for \"home\": 555-1234"
        );
    }

    #[test]
    fn record_count_mismatch_message() {
        let err = PersistenceError::RecordCountMismatch {
            expected: 1,
            actual: 0,
        };
        assert_eq!(
            err.to_string(),
            "Mismatch record count returned from database! expected 1, got 0"
        );
    }

    #[test]
    fn rollback_message_keeps_cause() {
        let err = PersistenceError::Rollback {
            source: sqlx::Error::PoolClosed,
            cause: Box::new(PersistenceError::RecordCountMismatch {
                expected: 1,
                actual: 2,
            }),
        };
        let message = err.to_string();
        assert!(message.starts_with("Rollback failed ("));
        assert!(message.ends_with("expected 1, got 2"));
    }
}
