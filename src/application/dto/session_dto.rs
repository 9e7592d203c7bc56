//! Session DTOs.

use crate::domain::entities::{OabNumber, UserProfile};

/// Outcome of starting a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStart {
    /// A number was already cached; the user is known.
    Returning {
        /// Cached registration number.
        oab_number: OabNumber,
        /// Cached display name, if any.
        user_name: Option<String>,
    },
    /// Nothing cached; the user must register with this fresh number.
    FirstUse {
        /// Newly generated registration number.
        oab_number: OabNumber,
    },
}

impl SessionStart {
    /// Returns the registration number for this session.
    #[must_use]
    pub const fn oab_number(&self) -> &OabNumber {
        match self {
            Self::Returning { oab_number, .. } | Self::FirstUse { oab_number } => oab_number,
        }
    }

    /// Returns whether registration is still required.
    #[must_use]
    pub const fn is_first_use(&self) -> bool {
        matches!(self, Self::FirstUse { .. })
    }
}

/// Where a loaded profile came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSource {
    /// Backend reply merged over the cache.
    Backend,
    /// Backend unavailable; cache and defaults only.
    CacheFallback,
}

/// Profile plus its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedProfile {
    /// Resolved profile.
    pub profile: UserProfile,
    /// Provenance of the profile.
    pub source: ProfileSource,
}

/// Outcome of first registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Registered number.
    pub oab_number: OabNumber,
    /// Registered display name.
    pub user_name: String,
    /// Whether the backend acknowledged the registration.
    pub acknowledged: bool,
}
