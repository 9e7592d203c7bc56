use serde::{Deserialize, Serialize};

/// Client cache persisted between sessions.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Locally generated registration number.
    #[serde(default)]
    pub oab_number: Option<String>,

    /// Display name chosen at first registration.
    #[serde(default)]
    pub user_name: Option<String>,
}
