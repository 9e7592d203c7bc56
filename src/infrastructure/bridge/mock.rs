//! Simulated backend for running without the host.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::canned::{canned_response, unrecognized_event_reply};
use crate::domain::entities::{BridgeMode, EventName, Payload};
use crate::domain::errors::{BridgeError, BridgeResult};
use crate::domain::ports::TransportPort;

/// Simulated round-trip time.
pub const DEFAULT_MOCK_LATENCY: Duration = Duration::from_millis(300);

/// What the simulated backend does with events it has no reply for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnknownEventPolicy {
    /// Resolve with `{success: false, error: ...}`.
    #[default]
    Resolve,
    /// Fail with `BridgeError::UnrecognizedEvent`.
    Reject,
}

/// Replies from a static table after a fixed delay.
pub struct MockTransport {
    latency: Duration,
    unknown_events: UnknownEventPolicy,
}

impl MockTransport {
    /// Creates a mock with the default latency and policy.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_options(DEFAULT_MOCK_LATENCY, UnknownEventPolicy::Resolve)
    }

    /// Creates a mock with explicit latency and unknown-event policy.
    #[must_use]
    pub const fn with_options(latency: Duration, unknown_events: UnknownEventPolicy) -> Self {
        Self {
            latency,
            unknown_events,
        }
    }

    /// Returns the simulated latency.
    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransportPort for MockTransport {
    fn mode(&self) -> BridgeMode {
        BridgeMode::Standalone
    }

    async fn send(&self, event: &EventName, payload: Payload) -> BridgeResult<Value> {
        debug!(event = %event, ?payload, "Simulating backend call");

        tokio::time::sleep(self.latency).await;

        if let Some(reply) = canned_response(event.as_str(), &payload) {
            return Ok(reply);
        }

        debug!(event = %event, policy = ?self.unknown_events, "No canned reply for event");

        match self.unknown_events {
            UnknownEventPolicy::Resolve => Ok(unrecognized_event_reply()),
            UnknownEventPolicy::Reject => Err(BridgeError::unrecognized(event.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::tagged_failure;
    use serde_json::json;
    use tokio::time::Instant;

    fn event(name: &str) -> EventName {
        EventName::new(name).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolves_after_latency() {
        let transport = MockTransport::new();
        let started = Instant::now();

        let mut payload = Payload::new();
        payload.insert("nome".to_string(), json!("Ana"));
        let reply = transport
            .send(&event("createPassport"), payload)
            .await
            .unwrap();

        let elapsed = started.elapsed();
        assert!(elapsed >= DEFAULT_MOCK_LATENCY);
        assert!(elapsed < DEFAULT_MOCK_LATENCY + Duration::from_millis(10));
        assert_eq!(reply["success"], json!(true));
        let id: u32 = reply["id"].as_str().unwrap().parse().unwrap();
        assert!(id < 1000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_event_resolves_to_tagged_failure() {
        let transport = MockTransport::new();

        let reply = transport
            .send(&event("unknownEvent123"), Payload::new())
            .await
            .unwrap();

        assert_eq!(
            tagged_failure(&reply).as_deref(),
            Some("Evento não reconhecido")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_event_reject_policy() {
        let transport = MockTransport::with_options(Duration::ZERO, UnknownEventPolicy::Reject);

        let result = transport.send(&event("unknownEvent123"), Payload::new()).await;

        assert!(matches!(
            result,
            Err(BridgeError::UnrecognizedEvent { ref event }) if event == "unknownEvent123"
        ));
    }

    #[test]
    fn test_mode() {
        assert_eq!(MockTransport::default().mode(), BridgeMode::Standalone);
        assert_eq!(MockTransport::default().latency(), DEFAULT_MOCK_LATENCY);
    }
}
