//! Infrastructure layer with external service adapters.

/// Backend transports and host integration.
pub mod bridge;
/// Application configuration.
pub mod config;
/// Client cache persistence.
pub mod state_store;

pub use bridge::{
    HostEnvironment, HostedTransport, MockTransport, UnknownEventPolicy, build_transport,
    detect_environment, pump_host_messages,
};
pub use config::{AppConfig, BridgeConfig, CliArgs, LogLevel, ModeSetting, StorageManager};
pub use state_store::StateStore;
