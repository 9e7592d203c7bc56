//! Backend transports and host integration.

mod canned;
pub mod environment;
mod hosted;
pub mod inbound;
mod mock;

use std::sync::Arc;

use tracing::info;

pub use canned::{UNRECOGNIZED_EVENT_MESSAGE, canned_response};
pub use environment::{HostEnvironment, detect_environment};
pub use hosted::HostedTransport;
pub use inbound::{HostMessage, PumpStats, pump_host_messages};
pub use mock::{DEFAULT_MOCK_LATENCY, MockTransport, UnknownEventPolicy};

use crate::domain::entities::BridgeMode;
use crate::domain::errors::BridgeResult;
use crate::domain::ports::TransportPort;
use crate::infrastructure::config::{BridgeConfig, ModeSetting};

/// Resolves the configured mode against the detected host environment.
#[must_use]
pub const fn resolve_mode(setting: ModeSetting, env: &HostEnvironment) -> BridgeMode {
    match setting {
        ModeSetting::Auto => BridgeMode::from_hosted(env.hosted),
        ModeSetting::Hosted => BridgeMode::Hosted,
        ModeSetting::Standalone => BridgeMode::Standalone,
    }
}

/// Builds the transport for this process.
///
/// # Errors
/// Returns error if the hosted HTTP client cannot be created.
pub fn build_transport(
    config: &BridgeConfig,
    env: &HostEnvironment,
) -> BridgeResult<Arc<dyn TransportPort>> {
    let mode = resolve_mode(config.mode, env);

    let transport: Arc<dyn TransportPort> = match mode {
        BridgeMode::Hosted => {
            let timeout = config.request_timeout();
            let hosted = if let Some(base_url) = &config.base_url {
                HostedTransport::with_base_url(base_url.clone(), timeout)?
            } else {
                let resource_name = config
                    .resource_name
                    .as_deref()
                    .unwrap_or(&env.resource_name);
                HostedTransport::new(resource_name, timeout)?
            };
            Arc::new(hosted)
        }
        BridgeMode::Standalone => Arc::new(MockTransport::with_options(
            config.mock_latency(),
            config.unknown_events,
        )),
    };

    info!(mode = %mode, "Backend transport selected");

    Ok(transport)
}
