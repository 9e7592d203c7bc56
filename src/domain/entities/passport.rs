//! Passport request entity.

use serde::{Deserialize, Serialize};

/// Review state of a passport request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassportStatus {
    /// Awaiting review.
    #[serde(rename = "pendente")]
    Pending,
    /// Approved by a reviewer.
    #[serde(rename = "aprovado")]
    Approved,
    /// Rejected by a reviewer.
    #[serde(rename = "rejeitado")]
    Rejected,
    /// Any status this client does not know about.
    #[serde(untagged)]
    Other(String),
}

impl PassportStatus {
    /// Returns whether the request still awaits review.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Passport request as listed by the backend.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passport {
    pub id: String,
    pub name: String,
    pub identity: String,
    pub birthdate: String,
    pub issuer: Option<String>,
    pub photo: Option<String>,
    pub status: PassportStatus,
    pub created_at: Option<String>,
}

/// Fields required to request a new passport.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassportApplication {
    pub name: String,
    pub identity: String,
    pub birthdate: String,
    pub photo: Option<String>,
}

impl PassportApplication {
    /// Returns the names of the fields that are missing or blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.identity.trim().is_empty() {
            missing.push("identity");
        }
        if self.birthdate.trim().is_empty() {
            missing.push("birthdate");
        }
        if self.photo.as_deref().is_none_or(|p| p.trim().is_empty()) {
            missing.push("photo");
        }

        missing
    }
}
