use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::entities::OabNumber;
use crate::domain::errors::StorageError;
use crate::domain::ports::{CachedIdentity, ProfileStorePort};
use crate::infrastructure::config::storage::{read_if_exists, write_toml};
use crate::infrastructure::config::{ConfigError, StateConfig, StorageManager};

/// Client cache backed by `state.toml` in the config directory.
#[derive(Clone)]
pub struct StateStore {
    manager: Option<StorageManager>,
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore {
    /// Creates a new state store instance.
    ///
    /// If project directories cannot be determined, persistence will be disabled
    /// and a warning will be logged.
    #[must_use]
    pub fn new() -> Self {
        match StorageManager::new() {
            Ok(manager) => Self {
                manager: Some(manager),
            },
            Err(e) => {
                warn!(error = %e, "Failed to determine project directories. Client cache disabled.");
                Self { manager: None }
            }
        }
    }

    /// Creates a state store over an explicit storage manager.
    #[must_use]
    pub const fn with_manager(manager: StorageManager) -> Self {
        Self {
            manager: Some(manager),
        }
    }

    fn read_state(manager: &StorageManager) -> Result<StateConfig, ConfigError> {
        let path = manager.state_path();
        let Some(content) = read_if_exists(&path)? else {
            return Ok(StateConfig::default());
        };

        Ok(toml::from_str(&content).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Client cache unreadable, starting empty");
            StateConfig::default()
        }))
    }

    fn identity_from(state: StateConfig) -> CachedIdentity {
        let oab_number = state.oab_number.as_deref().and_then(|raw| {
            let parsed = OabNumber::parse(raw);
            if parsed.is_none() {
                warn!(value = %raw, "Ignoring malformed cached OAB number");
            }
            parsed
        });

        CachedIdentity {
            oab_number,
            user_name: state.user_name.filter(|name| !name.trim().is_empty()),
        }
    }
}

#[async_trait]
impl ProfileStorePort for StateStore {
    async fn load(&self) -> Result<CachedIdentity, StorageError> {
        let Some(manager) = self.manager.clone() else {
            return Ok(CachedIdentity::default());
        };

        let state = tokio::task::spawn_blocking(move || Self::read_state(&manager))
            .await
            .map_err(|e| StorageError::ReadFailed(e.to_string()))?
            .map_err(|e| StorageError::ReadFailed(e.to_string()))?;

        Ok(Self::identity_from(state))
    }

    async fn save(&self, identity: &CachedIdentity) -> Result<(), StorageError> {
        let Some(manager) = self.manager.clone() else {
            debug!("Client cache disabled, skipping save");
            return Ok(());
        };

        let state = StateConfig {
            oab_number: identity.oab_number.as_ref().map(ToString::to_string),
            user_name: identity.user_name.clone(),
        };

        tokio::task::spawn_blocking(move || write_toml(&manager.state_path(), &state))
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?
            .map_err(|e| StorageError::WriteFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_empty_cache() {
        let dir = tempdir().unwrap();
        let store = StateStore::with_manager(StorageManager::with_dir(dir.path().to_path_buf()));

        assert_eq!(store.load().await.unwrap(), CachedIdentity::default());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let store = StateStore::with_manager(StorageManager::with_dir(dir.path().to_path_buf()));

        let identity = CachedIdentity {
            oab_number: OabNumber::parse("321-654987"),
            user_name: Some("Ana".to_string()),
        };
        store.save(&identity).await.unwrap();

        assert_eq!(store.load().await.unwrap(), identity);
    }

    #[tokio::test]
    async fn test_malformed_number_is_ignored() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        write_toml(
            &manager.state_path(),
            &StateConfig {
                oab_number: Some("garbage".to_string()),
                user_name: Some("Ana".to_string()),
            },
        )
        .unwrap();

        let store = StateStore::with_manager(manager);
        let identity = store.load().await.unwrap();

        assert!(identity.oab_number.is_none());
        assert_eq!(identity.user_name.as_deref(), Some("Ana"));
    }

    #[tokio::test]
    async fn test_unreadable_cache_starts_empty() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        std::fs::write(manager.state_path(), "oab_number = [").unwrap();

        let store = StateStore::with_manager(manager.clone());
        assert_eq!(store.load().await.unwrap(), CachedIdentity::default());

        let identity = CachedIdentity {
            oab_number: OabNumber::parse("123-456789"),
            user_name: Some("Ana".to_string()),
        };
        store.save(&identity).await.unwrap();

        let written = std::fs::read_to_string(manager.state_path()).unwrap();
        assert!(written.contains("oab_number = \"123-456789\""));
        assert_eq!(store.load().await.unwrap(), identity);
    }

    #[tokio::test]
    async fn test_save_creates_config_dir() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("nested").join("oac-forum"));
        let store = StateStore::with_manager(manager.clone());

        store
            .save(&CachedIdentity {
                oab_number: None,
                user_name: Some("Bruno".to_string()),
            })
            .await
            .unwrap();

        assert!(manager.state_path().exists());
    }
}
