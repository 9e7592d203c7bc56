//! Client cache port definition.

use async_trait::async_trait;

use crate::domain::entities::OabNumber;
use crate::domain::errors::StorageError;

/// Identity values cached on the client between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CachedIdentity {
    /// Locally generated registration number.
    pub oab_number: Option<OabNumber>,
    /// Display name chosen at first registration.
    pub user_name: Option<String>,
}

/// Port for the client-side key/value cache.
#[async_trait]
pub trait ProfileStorePort: Send + Sync {
    /// Reads the cached identity.
    async fn load(&self) -> Result<CachedIdentity, StorageError>;

    /// Persists the identity.
    async fn save(&self, identity: &CachedIdentity) -> Result<(), StorageError>;
}
