//! User profile shown in the dashboard header.

use serde::{Deserialize, Serialize};

use super::OabNumber;

/// Default avatar used when the backend does not provide one.
pub const DEFAULT_AVATAR: &str =
    "https://host-trig.vercel.app/files/1000_F_808373133_lrCrFLLTXF0A2WQK7QKMCNAzKCjX7kvb.png";

const DEFAULT_NAME: &str = "Trig";
const DEFAULT_ROLE: &str = "Advogado";
const DEFAULT_LEVEL: &str = "SÊNIOR";

/// Resolved profile of the current user.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub oab: String,
    pub role: String,
    pub level: String,
    pub avatar: String,
}

impl UserProfile {
    /// Builds a profile from locally cached values only.
    #[must_use]
    pub fn from_cache(name: Option<&str>, oab: Option<&OabNumber>) -> Self {
        Self {
            name: name.unwrap_or(DEFAULT_NAME).to_string(),
            oab: oab.map_or(OabNumber::PLACEHOLDER, OabNumber::as_str).to_string(),
            role: DEFAULT_ROLE.to_string(),
            level: DEFAULT_LEVEL.to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
        }
    }

    /// Overlays non-empty backend fields on top of this profile.
    #[must_use]
    pub fn merged_with(self, remote: RemoteProfile) -> Self {
        Self {
            name: pick(remote.name, self.name),
            oab: pick(remote.oab, self.oab),
            role: pick(remote.role, self.role),
            level: pick(remote.level, self.level),
            avatar: pick(remote.avatar, self.avatar),
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::from_cache(None, None)
    }
}

/// Profile fields as reported by the backend; any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct RemoteProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub oab: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

fn pick(remote: Option<String>, fallback: String) -> String {
    remote.filter(|v| !v.is_empty()).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cache_defaults() {
        let profile = UserProfile::default();
        assert_eq!(profile.name, "Trig");
        assert_eq!(profile.oab, "123-456789");
        assert_eq!(profile.role, "Advogado");
        assert_eq!(profile.level, "SÊNIOR");
        assert_eq!(profile.avatar, DEFAULT_AVATAR);
    }

    #[test]
    fn test_merge_prefers_remote_non_empty() {
        let oab = OabNumber::parse("321-654987").unwrap();
        let cached = UserProfile::from_cache(Some("Ana"), Some(&oab));

        let remote = RemoteProfile {
            name: Some(String::new()),
            role: Some("Juiz".to_string()),
            avatar: Some("/assets/".to_string()),
            ..RemoteProfile::default()
        };

        let merged = cached.merged_with(remote);
        assert_eq!(merged.name, "Ana");
        assert_eq!(merged.oab, "321-654987");
        assert_eq!(merged.role, "Juiz");
        assert_eq!(merged.level, "SÊNIOR");
        assert_eq!(merged.avatar, "/assets/");
    }
}
