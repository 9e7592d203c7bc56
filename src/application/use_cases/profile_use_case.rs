//! Profile loading and update.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::reply::{decode_reply, ensure_accepted};
use crate::application::dto::{
    LoadedProfile, PlayerInfoRequest, ProfileSource, UpdateProfileRequest,
};
use crate::application::services::BackendBridge;
use crate::domain::entities::{OabNumber, Payload, RemoteProfile, UserProfile, payload_from};
use crate::domain::errors::SessionError;
use crate::domain::ports::{CachedIdentity, ProfileStorePort};

const PLAYER_INFO_EVENT: &str = "getPlayerInfo";
const UPDATE_PROFILE_EVENT: &str = "updateProfile";

/// Contact details sent with a profile update.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Resolves the header profile from backend and cache.
#[derive(Clone)]
pub struct ProfileUseCase {
    bridge: BackendBridge,
    store: Arc<dyn ProfileStorePort>,
}

impl ProfileUseCase {
    /// Creates new profile use case.
    #[must_use]
    pub const fn new(bridge: BackendBridge, store: Arc<dyn ProfileStorePort>) -> Self {
        Self { bridge, store }
    }

    async fn cached_identity(&self) -> CachedIdentity {
        self.store.load().await.unwrap_or_else(|e| {
            warn!(error = %e, "Client cache unreadable, continuing without it");
            CachedIdentity::default()
        })
    }

    /// Loads the profile, falling back to cached values if the backend fails.
    ///
    /// `registered` is used when the cache holds no number yet, e.g. right
    /// after a first registration that could not be persisted.
    ///
    /// # Errors
    /// Returns error only if the request payload cannot be built.
    pub async fn load(&self, registered: Option<&OabNumber>) -> Result<LoadedProfile, SessionError> {
        let identity = self.cached_identity().await;
        let oab = identity.oab_number.as_ref().or(registered);
        let cached = UserProfile::from_cache(identity.user_name.as_deref(), oab);

        let payload = match oab {
            Some(oab) => payload_from(&PlayerInfoRequest { oab: oab.as_str() })?,
            None => Payload::new(),
        };

        let remote = match self.bridge.send(PLAYER_INFO_EVENT, payload).await {
            Ok(reply) => decode_reply::<RemoteProfile>(PLAYER_INFO_EVENT, reply),
            Err(e) => Err(e.into()),
        };

        match remote {
            Ok(remote) => {
                let profile = cached.merged_with(remote);
                info!(name = %profile.name, oab = %profile.oab, "Profile loaded");
                Ok(LoadedProfile {
                    profile,
                    source: ProfileSource::Backend,
                })
            }
            Err(e) if e.should_fall_back() => {
                warn!(error = %e, "Falling back to cached profile");
                Ok(LoadedProfile {
                    profile: cached,
                    source: ProfileSource::CacheFallback,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Sends updated contact details for the cached registration number.
    ///
    /// # Errors
    /// Returns error if the backend call fails or is rejected.
    pub async fn update(&self, update: &ProfileUpdate) -> Result<(), SessionError> {
        let identity = self.cached_identity().await;
        let oab = identity
            .oab_number
            .as_ref()
            .map_or(OabNumber::PLACEHOLDER, OabNumber::as_str);

        let payload = payload_from(&UpdateProfileRequest {
            name: &update.name,
            email: &update.email,
            phone: &update.phone,
            oab,
        })?;

        debug!(oab = %oab, "Updating profile");
        let reply = self.bridge.send(UPDATE_PROFILE_EVENT, payload).await?;
        ensure_accepted(UPDATE_PROFILE_EVENT, &reply)?;

        info!("Profile updated");
        Ok(())
    }
}
