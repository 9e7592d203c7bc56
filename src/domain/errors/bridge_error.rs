//! Backend bridge error types.

use thiserror::Error;

/// Result alias for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Bridge error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum BridgeError {
    #[error("transport error on `{event}`: {message}")]
    Transport { event: String, message: String },

    #[error("host answered `{event}` with status {status}")]
    HostStatus { event: String, status: u16 },

    #[error("invalid response to `{event}`: {message}")]
    Decode { event: String, message: String },

    #[error("unrecognized event `{event}`")]
    UnrecognizedEvent { event: String },

    #[error("invalid event name: {reason}")]
    InvalidEventName { reason: String },

    #[error("failed to serialize payload: {message}")]
    Serialization { message: String },

    #[error("failed to initialize transport: {message}")]
    Setup { message: String },
}

impl BridgeError {
    /// Creates transport error.
    #[must_use]
    pub fn transport(event: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            event: event.into(),
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(event: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            event: event.into(),
            message: message.into(),
        }
    }

    /// Creates unrecognized event error.
    #[must_use]
    pub fn unrecognized(event: impl Into<String>) -> Self {
        Self::UnrecognizedEvent {
            event: event.into(),
        }
    }

    /// Creates invalid event name error.
    #[must_use]
    pub fn invalid_event_name(reason: impl Into<String>) -> Self {
        Self::InvalidEventName {
            reason: reason.into(),
        }
    }

    /// Creates serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Creates setup error.
    #[must_use]
    pub fn setup(message: impl Into<String>) -> Self {
        Self::Setup {
            message: message.into(),
        }
    }

    /// Returns whether the error came from the host exchange itself.
    ///
    /// Callers typically log these and continue with locally cached data.
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::HostStatus { .. } | Self::Decode { .. }
        )
    }

    /// Returns whether the request was refused before reaching any transport.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidEventName { .. } | Self::Serialization { .. }
        )
    }
}
