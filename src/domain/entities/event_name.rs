//! Backend event name value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::BridgeError;

/// Prefix of the slot the host invokes to deliver an inbound event.
pub const CALLBACK_SLOT_PREFIX: &str = "__oac_callback_";

/// Name of a backend event, guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventName(String);

impl EventName {
    /// Creates an event name.
    ///
    /// # Errors
    /// Returns `BridgeError::InvalidEventName` if the name is empty or blank.
    pub fn new(value: impl Into<String>) -> Result<Self, BridgeError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(BridgeError::invalid_event_name("event name must not be empty"));
        }

        if value.contains('/') {
            return Err(BridgeError::invalid_event_name(format!(
                "event name `{value}` must not contain '/'"
            )));
        }

        Ok(Self(value))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the slot name the host calls for this event.
    #[must_use]
    pub fn callback_name(&self) -> String {
        format!("{CALLBACK_SLOT_PREFIX}{}", self.0)
    }

    /// Recovers the event name from a host slot name.
    #[must_use]
    pub fn from_callback_name(callback_name: &str) -> Option<Self> {
        callback_name
            .strip_prefix(CALLBACK_SLOT_PREFIX)
            .and_then(|name| Self::new(name).ok())
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EventName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EventName {
    type Error = BridgeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EventName {
    type Error = BridgeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EventName> for String {
    fn from(value: EventName) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("" ; "empty")]
    #[test_case("   " ; "blank")]
    #[test_case("passports/approve" ; "path_separator")]
    fn test_rejects_invalid_names(name: &str) {
        assert!(matches!(
            EventName::new(name),
            Err(BridgeError::InvalidEventName { .. })
        ));
    }

    #[test]
    fn test_callback_name() {
        let name = EventName::new("notification").unwrap();
        assert_eq!(name.callback_name(), "__oac_callback_notification");
    }

    #[test]
    fn test_from_callback_name() {
        let name = EventName::from_callback_name("__oac_callback_systemUpdate").unwrap();
        assert_eq!(name.as_str(), "systemUpdate");

        assert!(EventName::from_callback_name("systemUpdate").is_none());
        assert!(EventName::from_callback_name("__oac_callback_").is_none());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: EventName = serde_json::from_str("\"getLeis\"").unwrap();
        assert_eq!(ok.as_str(), "getLeis");

        assert!(serde_json::from_str::<EventName>("\"\"").is_err());
    }
}
