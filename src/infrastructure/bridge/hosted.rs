//! HTTP transport to the host's companion backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header};
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::entities::{BridgeMode, EventName, Payload};
use crate::domain::errors::{BridgeError, BridgeResult};
use crate::domain::ports::TransportPort;

const CONTENT_TYPE_JSON: &str = "application/json; charset=UTF-8";

/// Posts each event to `https://<resource-name>/<event>` as JSON.
pub struct HostedTransport {
    client: Client,
    base_url: String,
}

impl HostedTransport {
    /// Creates a transport for the host resource.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(resource_name: &str, timeout: Option<Duration>) -> BridgeResult<Self> {
        Self::with_base_url(format!("https://{resource_name}"), timeout)
    }

    /// Creates a transport with a custom base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>, timeout: Option<Duration>) -> BridgeResult<Self> {
        let mut builder = Client::builder().no_proxy();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| BridgeError::setup(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the URL an event is posted to.
    #[must_use]
    pub fn endpoint(&self, event: &EventName) -> String {
        format!("{}/{}", self.base_url, event)
    }
}

#[async_trait]
impl TransportPort for HostedTransport {
    fn mode(&self) -> BridgeMode {
        BridgeMode::Hosted
    }

    async fn send(&self, event: &EventName, payload: Payload) -> BridgeResult<Value> {
        let url = self.endpoint(event);
        let body = serde_json::to_vec(&payload)
            .map_err(|e| BridgeError::serialization(e.to_string()))?;

        debug!(event = %event, url = %url, "Sending event to host");

        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                warn!(event = %event, error = %e, "Failed to reach host");
                if e.is_timeout() {
                    BridgeError::transport(event.as_str(), "request timed out")
                } else if e.is_connect() {
                    BridgeError::transport(event.as_str(), "failed to connect to host")
                } else {
                    BridgeError::transport(event.as_str(), e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(event = %event, status = %status, "Host returned error status");
            return Err(BridgeError::HostStatus {
                event: event.as_str().to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            warn!(event = %event, error = %e, "Failed to read host response");
            BridgeError::transport(event.as_str(), e.to_string())
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(event = %event, error = %e, "Failed to parse host response");
            BridgeError::decode(event.as_str(), e.to_string())
        })
    }
}
