//! Passport issuance and review.

use tracing::{debug, info};

use super::reply::{decode_reply, ensure_accepted};
use crate::application::dto::{
    CreatePassportRequest, CreatePassportResponse, PassportDecisionRequest, PassportRecord,
};
use crate::application::services::BackendBridge;
use crate::domain::entities::{Passport, PassportApplication, Payload, payload_from};
use crate::domain::errors::SessionError;

const CREATE_EVENT: &str = "createPassport";
const LIST_EVENT: &str = "getPassaportes";
const APPROVE_EVENT: &str = "approvePassport";
const REJECT_EVENT: &str = "rejectPassport";

/// Reviewer decision on a passport request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassportDecision {
    /// Approve the request.
    Approve,
    /// Reject the request.
    Reject,
}

impl PassportDecision {
    const fn event(self) -> &'static str {
        match self {
            Self::Approve => APPROVE_EVENT,
            Self::Reject => REJECT_EVENT,
        }
    }
}

/// Passport workflow over the backend bridge.
#[derive(Clone)]
pub struct PassportUseCase {
    bridge: BackendBridge,
}

impl PassportUseCase {
    /// Creates new passport use case.
    #[must_use]
    pub const fn new(bridge: BackendBridge) -> Self {
        Self { bridge }
    }

    /// Submits a passport request and returns the identifier minted for it.
    ///
    /// # Errors
    /// Returns `MissingFields` before any backend call if the application is
    /// incomplete, otherwise the backend failure.
    pub async fn create(&self, application: &PassportApplication) -> Result<String, SessionError> {
        let missing = application.missing_fields();
        if !missing.is_empty() {
            return Err(SessionError::MissingFields { fields: missing });
        }

        let payload = payload_from(&CreatePassportRequest {
            name: application.name.trim(),
            identity: application.identity.trim(),
            birthdate: application.birthdate.trim(),
            photo: application.photo.as_deref().unwrap_or_default(),
        })?;

        let reply = self.bridge.send(CREATE_EVENT, payload).await?;
        let created: CreatePassportResponse = decode_reply(CREATE_EVENT, reply)?;

        info!(id = %created.id, "Passport request submitted");
        Ok(created.id)
    }

    /// Lists passport requests still awaiting review.
    ///
    /// # Errors
    /// Returns error if the backend call fails or the listing is malformed.
    pub async fn pending(&self) -> Result<Vec<Passport>, SessionError> {
        let reply = self.bridge.send(LIST_EVENT, Payload::new()).await?;
        let records: Vec<PassportRecord> = decode_reply(LIST_EVENT, reply)?;

        let total = records.len();
        let pending: Vec<Passport> = records
            .into_iter()
            .map(Passport::from)
            .filter(|p| p.status.is_pending())
            .collect();

        debug!(total, pending = pending.len(), "Passports loaded");
        Ok(pending)
    }

    /// Records a reviewer decision.
    ///
    /// # Errors
    /// Returns error if the backend call fails or refuses the decision.
    pub async fn decide(&self, id: &str, decision: PassportDecision) -> Result<(), SessionError> {
        let event = decision.event();
        let payload = payload_from(&PassportDecisionRequest { id })?;

        let reply = self.bridge.send(event, payload).await?;
        ensure_accepted(event, &reply)?;

        info!(id, ?decision, "Passport decision recorded");
        Ok(())
    }

    /// Approves a passport request.
    ///
    /// # Errors
    /// See [`PassportUseCase::decide`].
    pub async fn approve(&self, id: &str) -> Result<(), SessionError> {
        self.decide(id, PassportDecision::Approve).await
    }

    /// Rejects a passport request.
    ///
    /// # Errors
    /// See [`PassportUseCase::decide`].
    pub async fn reject(&self, id: &str) -> Result<(), SessionError> {
        self.decide(id, PassportDecision::Reject).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BridgeMode;
    use crate::domain::ports::mocks::{FailingTransport, RecordingTransport};
    use crate::infrastructure::bridge::MockTransport;
    use serde_json::json;
    use std::sync::Arc;

    fn standalone() -> PassportUseCase {
        PassportUseCase::new(BackendBridge::new(Arc::new(MockTransport::new())))
    }

    fn application() -> PassportApplication {
        PassportApplication {
            name: "Ana".to_string(),
            identity: "111.222.333-44".to_string(),
            birthdate: "1992-03-01".to_string(),
            photo: Some("data:image/png;base64,AAAA".to_string()),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_returns_numeric_id() {
        let id = standalone().create(&application()).await.unwrap();

        let id: u32 = id.parse().unwrap();
        assert!(id < 1000);
    }

    #[tokio::test]
    async fn test_create_requires_all_fields() {
        let transport = Arc::new(RecordingTransport::new(BridgeMode::Hosted));
        let use_case = PassportUseCase::new(BackendBridge::new(transport.clone()));

        let incomplete = PassportApplication {
            photo: None,
            ..application()
        };
        let result = use_case.create(&incomplete).await;

        assert!(matches!(
            result,
            Err(SessionError::MissingFields { ref fields }) if fields == &vec!["photo"]
        ));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_sends_wire_names() {
        let transport = Arc::new(
            RecordingTransport::new(BridgeMode::Hosted)
                .with_reply("createPassport", json!({"success": true, "id": 17})),
        );
        let use_case = PassportUseCase::new(BackendBridge::new(transport.clone()));

        let id = use_case.create(&application()).await.unwrap();

        assert_eq!(id, "17");
        let (_, payload) = &transport.calls()[0];
        assert_eq!(payload.get("nome"), Some(&json!("Ana")));
        assert_eq!(payload.get("dataNascimento"), Some(&json!("1992-03-01")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_filters_reviewed() {
        let pending = standalone().pending().await.unwrap();

        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "101");
        assert_eq!(pending[0].name, "João Silva");
    }

    #[tokio::test(start_paused = true)]
    async fn test_decisions_acknowledged() {
        let use_case = standalone();

        use_case.approve("101").await.unwrap();
        use_case.reject("not-a-real-id").await.unwrap();
    }

    #[tokio::test]
    async fn test_decision_events() {
        let transport = Arc::new(RecordingTransport::new(BridgeMode::Hosted));
        let use_case = PassportUseCase::new(BackendBridge::new(transport.clone()));

        use_case.approve("101").await.unwrap();
        use_case.reject("102").await.unwrap();

        assert_eq!(transport.events(), vec!["approvePassport", "rejectPassport"]);
        assert_eq!(transport.calls()[1].1.get("id"), Some(&json!("102")));
    }

    #[tokio::test]
    async fn test_pending_propagates_transport_error() {
        let use_case =
            PassportUseCase::new(BackendBridge::new(Arc::new(FailingTransport::new(BridgeMode::Hosted))));

        let result = use_case.pending().await;

        assert!(matches!(result, Err(SessionError::Bridge(ref e)) if e.is_transport_error()));
    }
}
