//! Legal code listing and search.

use tracing::debug;

use super::reply::decode_reply;
use crate::application::services::BackendBridge;
use crate::domain::entities::{Law, Payload};
use crate::domain::errors::SessionError;

const LIST_EVENT: &str = "getLeis";

/// Reads the legal code from the backend.
#[derive(Clone)]
pub struct LawUseCase {
    bridge: BackendBridge,
}

impl LawUseCase {
    /// Creates new law use case.
    #[must_use]
    pub const fn new(bridge: BackendBridge) -> Self {
        Self { bridge }
    }

    /// Lists every law.
    ///
    /// # Errors
    /// Returns error if the backend call fails or the listing is malformed.
    pub async fn list(&self) -> Result<Vec<Law>, SessionError> {
        let reply = self.bridge.send(LIST_EVENT, Payload::new()).await?;
        let laws: Vec<Law> = decode_reply(LIST_EVENT, reply)?;

        debug!(count = laws.len(), "Laws loaded");
        Ok(laws)
    }

    /// Lists laws whose title or content contains `query`, ignoring case.
    ///
    /// # Errors
    /// Returns `QueryTooShort` for queries under three characters, otherwise
    /// as [`LawUseCase::list`].
    pub async fn search(&self, query: &str) -> Result<Vec<Law>, SessionError> {
        let query = query.trim();
        if query.chars().count() < Law::MIN_QUERY_LEN {
            return Err(SessionError::QueryTooShort {
                min: Law::MIN_QUERY_LEN,
            });
        }

        let matches: Vec<Law> = self
            .list()
            .await?
            .into_iter()
            .filter(|law| law.matches(query))
            .collect();

        debug!(query, matches = matches.len(), "Law search finished");
        Ok(matches)
    }
}
