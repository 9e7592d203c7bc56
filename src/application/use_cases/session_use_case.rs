//! Session bootstrap, first registration and exit.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::reply::ensure_accepted;
use crate::application::dto::{RegisterOabRequest, Registration, SessionStart};
use crate::application::services::BackendBridge;
use crate::domain::entities::{OabNumber, Payload, payload_from};
use crate::domain::errors::SessionError;
use crate::domain::ports::{CachedIdentity, ProfileStorePort};

const REGISTER_OAB_EVENT: &str = "registerOab";
const EXIT_EVENT: &str = "exit";

/// Handles the start and end of a dashboard session.
#[derive(Clone)]
pub struct SessionUseCase {
    bridge: BackendBridge,
    store: Arc<dyn ProfileStorePort>,
}

impl SessionUseCase {
    /// Creates new session use case.
    #[must_use]
    pub const fn new(bridge: BackendBridge, store: Arc<dyn ProfileStorePort>) -> Self {
        Self { bridge, store }
    }

    /// Reads the client cache and decides whether registration is needed.
    ///
    /// # Errors
    /// Returns error if the cache cannot be read.
    pub async fn start(&self) -> Result<SessionStart, SessionError> {
        let identity = self.store.load().await?;

        if let Some(oab_number) = identity.oab_number {
            debug!(oab = %oab_number, "Returning user");
            return Ok(SessionStart::Returning {
                oab_number,
                user_name: identity.user_name,
            });
        }

        let oab_number = OabNumber::generate();
        info!(oab = %oab_number, "First use, generated registration number");
        Ok(SessionStart::FirstUse { oab_number })
    }

    /// Registers the user with the backend and caches the identity.
    ///
    /// The identity is cached even when the backend call fails, so the
    /// dashboard stays usable offline.
    ///
    /// # Errors
    /// Returns error if the name is blank or the cache cannot be written.
    pub async fn register(
        &self,
        name: &str,
        oab_number: &OabNumber,
    ) -> Result<Registration, SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::MissingFields {
                fields: vec!["name"],
            });
        }

        let payload = payload_from(&RegisterOabRequest {
            name,
            oab: oab_number.as_str(),
        })?;

        let acknowledged = match self.bridge.send(REGISTER_OAB_EVENT, payload).await {
            Ok(reply) => match ensure_accepted(REGISTER_OAB_EVENT, &reply) {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, "Backend refused registration, continuing locally");
                    false
                }
            },
            Err(e) => {
                error!(error = %e, "Failed to register with backend, continuing locally");
                false
            }
        };

        self.store
            .save(&CachedIdentity {
                oab_number: Some(oab_number.clone()),
                user_name: Some(name.to_string()),
            })
            .await?;

        info!(oab = %oab_number, acknowledged, "Registration stored");

        Ok(Registration {
            oab_number: oab_number.clone(),
            user_name: name.to_string(),
            acknowledged,
        })
    }

    /// Tells the backend the session ends. Failures are only logged.
    pub async fn exit(&self) {
        match self.bridge.send(EXIT_EVENT, Payload::new()).await {
            Ok(_) => info!("Session closed"),
            Err(e) => error!(error = %e, "Failed to notify backend of exit"),
        }
    }
}
