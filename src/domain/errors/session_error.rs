//! Client workflow error types.

use thiserror::Error;

use super::{BridgeError, StorageError};

/// Errors surfaced by the dashboard workflows.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum SessionError {
    #[error("backend rejected `{event}`: {message}")]
    Rejected { event: String, message: String },

    #[error("missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    #[error("search query must have at least {min} characters")]
    QueryTooShort { min: usize },

    #[error("unexpected response to `{event}`: {message}")]
    UnexpectedResponse { event: String, message: String },

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SessionError {
    /// Creates rejection error.
    #[must_use]
    pub fn rejected(event: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            event: event.into(),
            message: message.into(),
        }
    }

    /// Creates unexpected response error.
    #[must_use]
    pub fn unexpected(event: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            event: event.into(),
            message: message.into(),
        }
    }

    /// Returns whether the caller should fall back to cached local data.
    #[must_use]
    pub const fn should_fall_back(&self) -> bool {
        match self {
            Self::Bridge(e) => e.is_transport_error(),
            Self::Rejected { .. } | Self::UnexpectedResponse { .. } => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_display() {
        let err = SessionError::MissingFields {
            fields: vec!["name", "photo"],
        };
        assert_eq!(err.to_string(), "missing required fields: name, photo");
    }

    #[test]
    fn test_fall_back() {
        assert!(SessionError::from(BridgeError::transport("exit", "refused")).should_fall_back());
        assert!(!SessionError::from(BridgeError::invalid_event_name("empty")).should_fall_back());
        assert!(SessionError::rejected("exit", "nope").should_fall_back());
    }
}
