//! Host runtime detection.

use std::sync::OnceLock;

/// Variable the host runtime exports into the client process.
pub const HOST_MARKER_VAR: &str = "OAC_INVOKE_NATIVE";
/// Variable carrying the host-supplied resource name.
pub const RESOURCE_NAME_VAR: &str = "OAC_PARENT_RESOURCE";
/// Resource name used when the host does not supply one.
pub const DEFAULT_RESOURCE_NAME: &str = "oac-forum";

static HOSTED: OnceLock<bool> = OnceLock::new();

/// Returns whether the host capability marker is present.
///
/// Evaluated once per process; later calls return the first answer even if the
/// environment changes.
#[must_use]
pub fn detect_environment() -> bool {
    *HOSTED.get_or_init(|| HostEnvironment::from_process().hosted)
}

/// Snapshot of what the host runtime provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnvironment {
    /// Whether the host capability marker is present.
    pub hosted: bool,
    /// Host resource name, or the default outside the host.
    pub resource_name: String,
}

impl HostEnvironment {
    /// Reads the process environment, reusing the memoised host flag.
    #[must_use]
    pub fn detect() -> Self {
        let hosted = detect_environment();
        Self::resolve(hosted, std::env::var(RESOURCE_NAME_VAR).ok())
    }

    fn from_process() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the snapshot from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let hosted = lookup(HOST_MARKER_VAR).is_some();
        Self::resolve(hosted, lookup(RESOURCE_NAME_VAR))
    }

    fn resolve(hosted: bool, resource_name: Option<String>) -> Self {
        let resource_name = resource_name
            .filter(|name| hosted && !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RESOURCE_NAME.to_string());

        Self {
            hosted,
            resource_name,
        }
    }

    /// Standalone snapshot with the default resource name.
    #[must_use]
    pub fn standalone() -> Self {
        Self::resolve(false, None)
    }
}
