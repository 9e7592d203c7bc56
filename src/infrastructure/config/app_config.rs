//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::args::CliArgs;
use crate::infrastructure::bridge::UnknownEventPolicy;

pub(super) const APP_NAME: &str = "oac-forum";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "oac";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// How the bridge picks its transport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    /// Hosted when the host marker is present, standalone otherwise.
    #[default]
    Auto,
    /// Always talk to the host.
    Hosted,
    /// Always simulate the backend.
    Standalone,
}

/// Backend bridge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Transport selection.
    #[serde(default)]
    pub mode: ModeSetting,

    /// Host resource name; overrides the one supplied by the host.
    #[serde(default)]
    pub resource_name: Option<String>,

    /// Full base URL for hosted calls; overrides the resource name.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Simulated latency in standalone mode, in milliseconds.
    #[serde(default = "default_mock_latency_ms")]
    pub mock_latency_ms: u64,

    /// Optional timeout for hosted calls, in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Standalone handling of events without a canned reply.
    #[serde(default)]
    pub unknown_events: UnknownEventPolicy,
}

impl BridgeConfig {
    /// Returns the simulated latency.
    #[must_use]
    pub const fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }

    /// Returns the hosted request timeout, if any.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            mode: ModeSetting::default(),
            resource_name: None,
            base_url: None,
            mock_latency_ms: default_mock_latency_ms(),
            request_timeout_secs: None,
            unknown_events: UnknownEventPolicy::default(),
        }
    }
}

const fn default_mock_latency_ms() -> u64 {
    300
}

/// Application configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Backend bridge configuration.
    #[serde(default)]
    pub bridge: BridgeConfig,
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(mode) = args.mode {
            self.bridge.mode = mode;
        }
        if let Some(resource_name) = &args.resource_name {
            self.bridge.resource_name = Some(resource_name.clone());
        }
        if let Some(base_url) = &args.base_url {
            self.bridge.base_url = Some(base_url.clone());
        }
        if let Some(latency) = args.mock_latency_ms {
            self.bridge.mock_latency_ms = latency;
        }
        if let Some(timeout) = args.request_timeout_secs {
            self.bridge.request_timeout_secs = Some(timeout);
        }
        if let Some(policy) = args.unknown_events {
            self.bridge.unknown_events = policy;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("oac-forum.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}
