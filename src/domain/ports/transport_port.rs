//! Backend transport port definition.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::{BridgeMode, EventName, Payload};
use crate::domain::errors::BridgeResult;

/// Port for delivering one request to the backend and returning its reply.
///
/// Implementations are chosen once when the bridge is built and never
/// switched afterwards.
#[async_trait]
pub trait TransportPort: Send + Sync {
    /// Mode this transport serves.
    fn mode(&self) -> BridgeMode;

    /// Sends an event with its payload and returns the decoded response.
    async fn send(&self, event: &EventName, payload: Payload) -> BridgeResult<Value>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::domain::errors::BridgeError;
    use parking_lot::Mutex;
    use serde_json::json;
    use std::collections::HashMap;

    /// Transport that records every call and replies from a fixed table.
    pub struct RecordingTransport {
        mode: BridgeMode,
        replies: Mutex<HashMap<String, Value>>,
        calls: Mutex<Vec<(String, Payload)>>,
    }

    impl RecordingTransport {
        /// Creates a recorder for the given mode.
        pub fn new(mode: BridgeMode) -> Self {
            Self {
                mode,
                replies: Mutex::new(HashMap::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Sets the reply for an event.
        pub fn with_reply(self, event: &str, reply: Value) -> Self {
            self.replies.lock().insert(event.to_string(), reply);
            self
        }

        /// Returns recorded calls in order.
        pub fn calls(&self) -> Vec<(String, Payload)> {
            self.calls.lock().clone()
        }

        /// Returns recorded event names in order.
        pub fn events(&self) -> Vec<String> {
            self.calls.lock().iter().map(|(e, _)| e.clone()).collect()
        }
    }

    #[async_trait]
    impl TransportPort for RecordingTransport {
        fn mode(&self) -> BridgeMode {
            self.mode
        }

        async fn send(&self, event: &EventName, payload: Payload) -> BridgeResult<Value> {
            self.calls
                .lock()
                .push((event.as_str().to_string(), payload));

            Ok(self
                .replies
                .lock()
                .get(event.as_str())
                .cloned()
                .unwrap_or_else(|| json!({"success": true})))
        }
    }

    /// Transport whose every call fails as if the host were unreachable.
    pub struct FailingTransport {
        mode: BridgeMode,
    }

    impl FailingTransport {
        /// Creates a failing transport for the given mode.
        pub const fn new(mode: BridgeMode) -> Self {
            Self { mode }
        }
    }

    #[async_trait]
    impl TransportPort for FailingTransport {
        fn mode(&self) -> BridgeMode {
            self.mode
        }

        async fn send(&self, event: &EventName, _payload: Payload) -> BridgeResult<Value> {
            Err(BridgeError::transport(event.as_str(), "connection refused"))
        }
    }
}
