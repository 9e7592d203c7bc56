//! Helpers turning raw backend replies into typed results.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::entities::tagged_failure;
use crate::domain::errors::SessionError;

/// Fails with `SessionError::Rejected` if the reply is a tagged failure.
pub(crate) fn ensure_accepted(event: &str, reply: &Value) -> Result<(), SessionError> {
    match tagged_failure(reply) {
        Some(message) => Err(SessionError::rejected(event, message)),
        None => Ok(()),
    }
}

/// Checks for a tagged failure, then decodes the reply.
pub(crate) fn decode_reply<T: DeserializeOwned>(event: &str, reply: Value) -> Result<T, SessionError> {
    ensure_accepted(event, &reply)?;
    serde_json::from_value(reply).map_err(|e| SessionError::unexpected(event, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_reply() {
        let ids: Vec<u32> = decode_reply("getIds", json!([1, 2])).unwrap();
        assert_eq!(ids, vec![1, 2]);

        let rejected = decode_reply::<Vec<u32>>("getIds", json!({"success": false, "error": "x"}));
        assert!(matches!(rejected, Err(SessionError::Rejected { .. })));

        let malformed = decode_reply::<Vec<u32>>("getIds", json!({"success": true}));
        assert!(matches!(
            malformed,
            Err(SessionError::UnexpectedResponse { .. })
        ));
    }
}
