//! Execution mode of the backend bridge.

use serde::{Deserialize, Serialize};

/// Whether the client runs inside the host runtime or on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BridgeMode {
    /// Inside the game-modification host, talking to the companion backend.
    Hosted,
    /// Without a host; backend calls are simulated.
    #[default]
    Standalone,
}

impl BridgeMode {
    /// Maps the host detection flag to a mode.
    #[must_use]
    pub const fn from_hosted(hosted: bool) -> Self {
        if hosted { Self::Hosted } else { Self::Standalone }
    }

    /// Returns whether this is hosted mode.
    #[must_use]
    pub const fn is_hosted(self) -> bool {
        matches!(self, Self::Hosted)
    }
}

impl std::fmt::Display for BridgeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hosted => write!(f, "hosted"),
            Self::Standalone => write!(f, "standalone"),
        }
    }
}
