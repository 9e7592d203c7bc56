//! Uniform request/response and subscription interface to the backend.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::{Value, json};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::domain::entities::{BridgeMode, EventName, Payload};
use crate::domain::errors::BridgeResult;
use crate::domain::ports::TransportPort;
use crate::domain::services::{CallbackRegistry, SlotToken};

const REGISTER_CALLBACK_EVENT: &str = "registerCallback";
const UNREGISTER_CALLBACK_EVENT: &str = "unregisterCallback";

/// Single entry point for backend calls and host-delivered events.
///
/// The transport is fixed at construction. The handler registry belongs to
/// this instance; host invocations reach it through [`BackendBridge::deliver`].
#[derive(Clone)]
pub struct BackendBridge {
    transport: Arc<dyn TransportPort>,
    registry: CallbackRegistry,
}

impl BackendBridge {
    /// Creates a bridge over the given transport with an empty registry.
    #[must_use]
    pub fn new(transport: Arc<dyn TransportPort>) -> Self {
        Self::with_registry(transport, CallbackRegistry::new())
    }

    /// Creates a bridge sharing an existing registry.
    #[must_use]
    pub const fn with_registry(transport: Arc<dyn TransportPort>, registry: CallbackRegistry) -> Self {
        Self {
            transport,
            registry,
        }
    }

    /// Returns the transport mode.
    #[must_use]
    pub fn mode(&self) -> BridgeMode {
        self.transport.mode()
    }

    /// Returns the handler registry.
    #[must_use]
    pub const fn registry(&self) -> &CallbackRegistry {
        &self.registry
    }

    /// Sends an event by name.
    ///
    /// # Errors
    /// Returns `InvalidEventName` for an empty name, otherwise whatever the
    /// transport reports.
    pub async fn send(&self, event: &str, payload: Payload) -> BridgeResult<Value> {
        let event = EventName::new(event)?;
        self.send_event(&event, payload).await
    }

    /// Sends an already validated event.
    ///
    /// # Errors
    /// Returns the transport's error unchanged.
    pub async fn send_event(&self, event: &EventName, payload: Payload) -> BridgeResult<Value> {
        debug!(event = %event, mode = %self.mode(), "Sending backend event");

        self.transport.send(event, payload).await.inspect_err(|e| {
            warn!(event = %event, error = %e, "Backend call failed");
        })
    }

    /// Subscribes to an event pushed by the host.
    ///
    /// In hosted mode this installs the `__oac_callback_<event>` slot and
    /// tells the host about it. A later subscription to the same event
    /// replaces this one. In standalone mode nothing is installed and the
    /// returned subscription never yields.
    ///
    /// # Errors
    /// Returns `InvalidEventName` for an empty name.
    pub async fn subscribe(&self, event: &str) -> BridgeResult<Subscription> {
        let event = EventName::new(event)?;

        if !self.mode().is_hosted() {
            debug!(event = %event, "Standalone mode, subscription is inert");
            let (_, receiver) = mpsc::unbounded_channel();
            return Ok(Subscription {
                event,
                receiver,
                handle: UnsubscribeHandle { registration: None },
            });
        }

        let (token, receiver) = self.registry.install(&event);

        let payload = callback_payload(&event, token.callback_name());
        match self
            .transport
            .send(&EventName::new(REGISTER_CALLBACK_EVENT)?, payload)
            .await
        {
            Ok(_) => info!(event = %event, callback = %token.callback_name(), "Callback registered"),
            Err(e) => warn!(
                event = %event,
                error = %e,
                "Host did not acknowledge callback registration"
            ),
        }

        let registration = HostedRegistration {
            event: event.clone(),
            token,
            transport: Arc::clone(&self.transport),
            registry: self.registry.clone(),
            released: AtomicBool::new(false),
        };

        Ok(Subscription {
            event,
            receiver,
            handle: UnsubscribeHandle {
                registration: Some(Arc::new(registration)),
            },
        })
    }

    /// Invokes a callback slot on behalf of the host.
    ///
    /// Returns whether a live handler received the payload.
    pub fn deliver(&self, callback_name: &str, payload: Value) -> bool {
        self.registry.deliver(callback_name, payload)
    }
}

fn callback_payload(event: &EventName, callback_name: &str) -> Payload {
    let mut payload = Payload::new();
    payload.insert("eventName".to_string(), json!(event.as_str()));
    payload.insert("callbackName".to_string(), json!(callback_name));
    payload
}

/// Receiving end of an event subscription.
pub struct Subscription {
    event: EventName,
    receiver: mpsc::UnboundedReceiver<Value>,
    handle: UnsubscribeHandle,
}

impl Subscription {
    /// Returns the subscribed event.
    #[must_use]
    pub const fn event(&self) -> &EventName {
        &self.event
    }

    /// Waits for the next payload.
    ///
    /// Returns `None` once the subscription is released or superseded, and
    /// immediately in standalone mode.
    pub async fn recv(&mut self) -> Option<Value> {
        self.receiver.recv().await
    }

    /// Returns a handle that can release this subscription from elsewhere.
    #[must_use]
    pub fn unsubscribe_handle(&self) -> UnsubscribeHandle {
        self.handle.clone()
    }

    /// Releases the subscription. Safe to call more than once.
    pub async fn unsubscribe(&self) {
        self.handle.unsubscribe().await;
    }
}

struct HostedRegistration {
    event: EventName,
    token: SlotToken,
    transport: Arc<dyn TransportPort>,
    registry: CallbackRegistry,
    released: AtomicBool,
}

/// Idempotent release of one subscription.
#[derive(Clone)]
pub struct UnsubscribeHandle {
    registration: Option<Arc<HostedRegistration>>,
}

impl UnsubscribeHandle {
    /// Removes the handler and tells the host.
    ///
    /// Only the first call has an effect. A handle whose slot was replaced by
    /// a newer subscription touches neither the registry nor the host, since
    /// the host keys callbacks by slot name. Host notification failures are
    /// logged, not returned.
    pub async fn unsubscribe(&self) {
        let Some(registration) = &self.registration else {
            return;
        };

        if registration.released.swap(true, Ordering::SeqCst) {
            debug!(event = %registration.event, "Subscription already released");
            return;
        }

        if !registration.registry.remove(&registration.token) {
            debug!(
                event = %registration.event,
                "Slot replaced by a newer subscription, leaving host registration alone"
            );
            return;
        }

        let payload = callback_payload(&registration.event, registration.token.callback_name());
        let result = match EventName::new(UNREGISTER_CALLBACK_EVENT) {
            Ok(event) => registration.transport.send(&event, payload).await.map(drop),
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => info!(event = %registration.event, "Callback unregistered"),
            Err(e) => warn!(
                event = %registration.event,
                error = %e,
                "Host did not acknowledge callback removal"
            ),
        }
    }

    /// Returns whether the subscription is still held.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registration
            .as_ref()
            .is_some_and(|r| !r.released.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::BridgeError;
    use crate::domain::ports::mocks::{FailingTransport, RecordingTransport};
    use crate::infrastructure::bridge::{DEFAULT_MOCK_LATENCY, MockTransport};
    use tokio::time::Instant;

    fn hosted() -> (Arc<RecordingTransport>, BackendBridge) {
        let transport = Arc::new(RecordingTransport::new(BridgeMode::Hosted));
        let bridge = BackendBridge::new(transport.clone());
        (transport, bridge)
    }

    #[tokio::test]
    async fn test_send_rejects_empty_event_name() {
        let (transport, bridge) = hosted();

        let result = bridge.send("", Payload::new()).await;

        assert!(matches!(result, Err(BridgeError::InvalidEventName { .. })));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_send_propagates_transport_error() {
        let bridge = BackendBridge::new(Arc::new(FailingTransport::new(BridgeMode::Hosted)));

        let err = bridge.send("getPlayerInfo", Payload::new()).await.unwrap_err();

        assert!(err.is_transport_error());
    }

    #[tokio::test(start_paused = true)]
    async fn test_standalone_send_resolves_within_latency() {
        let bridge = BackendBridge::new(Arc::new(MockTransport::new()));

        for event in ["getPlayerInfo", "getLeis", "passportApprove", "unknownEvent123"] {
            let started = Instant::now();
            let reply = bridge.send(event, Payload::new()).await;

            assert!(reply.is_ok(), "{event} should resolve");
            assert!(started.elapsed() <= DEFAULT_MOCK_LATENCY + std::time::Duration::from_millis(10));
        }
    }

    #[tokio::test]
    async fn test_hosted_subscribe_registers_with_host() {
        let (transport, bridge) = hosted();

        let mut subscription = bridge.subscribe("notification").await.unwrap();

        assert!(bridge.registry().is_registered(subscription.event()));
        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "registerCallback");
        assert_eq!(calls[0].1.get("eventName"), Some(&json!("notification")));
        assert_eq!(
            calls[0].1.get("callbackName"),
            Some(&json!("__oac_callback_notification"))
        );

        assert!(bridge.deliver("__oac_callback_notification", json!({"text": "hi"})));
        assert_eq!(subscription.recv().await, Some(json!({"text": "hi"})));
    }

    #[tokio::test]
    async fn test_unsubscribe_is_idempotent() {
        let (transport, bridge) = hosted();
        let mut subscription = bridge.subscribe("systemUpdate").await.unwrap();
        let handle = subscription.unsubscribe_handle();

        assert!(handle.is_active());
        subscription.unsubscribe().await;
        handle.unsubscribe().await;
        subscription.unsubscribe().await;

        assert!(!handle.is_active());
        assert!(bridge.registry().is_empty());
        assert_eq!(
            transport.events(),
            vec!["registerCallback", "unregisterCallback"]
        );
        assert_eq!(subscription.recv().await, None);
        assert!(!bridge.deliver("__oac_callback_systemUpdate", json!({})));
    }

    #[tokio::test]
    async fn test_last_subscription_wins() {
        let (_transport, bridge) = hosted();

        let mut first = bridge.subscribe("notification").await.unwrap();
        let mut second = bridge.subscribe("notification").await.unwrap();

        assert!(bridge.deliver("__oac_callback_notification", json!(1)));
        assert_eq!(first.recv().await, None);
        assert_eq!(second.recv().await, Some(json!(1)));

        first.unsubscribe().await;
        assert!(bridge.deliver("__oac_callback_notification", json!(2)));
        assert_eq!(second.recv().await, Some(json!(2)));
    }

    #[tokio::test]
    async fn test_superseded_unsubscribe_keeps_host_registration() {
        let (transport, bridge) = hosted();

        let first = bridge.subscribe("notification").await.unwrap();
        let second = bridge.subscribe("notification").await.unwrap();

        first.unsubscribe().await;

        assert_eq!(
            transport.events(),
            vec!["registerCallback", "registerCallback"]
        );
        assert!(bridge.registry().is_registered(second.event()));

        second.unsubscribe().await;
        assert_eq!(
            transport.events(),
            vec!["registerCallback", "registerCallback", "unregisterCallback"]
        );
        assert!(bridge.registry().is_empty());
    }

    #[tokio::test]
    async fn test_registration_failure_keeps_handler() {
        let bridge = BackendBridge::new(Arc::new(FailingTransport::new(BridgeMode::Hosted)));

        let subscription = bridge.subscribe("notification").await.unwrap();
        assert!(bridge.registry().is_registered(subscription.event()));

        subscription.unsubscribe().await;
        assert!(bridge.registry().is_empty());
    }

    #[tokio::test]
    async fn test_standalone_subscription_is_inert() {
        let transport = Arc::new(RecordingTransport::new(BridgeMode::Standalone));
        let bridge = BackendBridge::new(transport.clone());

        let mut subscription = bridge.subscribe("notification").await.unwrap();

        assert!(bridge.registry().is_empty());
        assert!(!subscription.unsubscribe_handle().is_active());
        assert_eq!(subscription.recv().await, None);

        subscription.unsubscribe().await;
        subscription.unsubscribe().await;
        assert!(transport.calls().is_empty());
    }
}
