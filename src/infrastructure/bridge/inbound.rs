//! Line-delimited reader for host-invoked callbacks.

use serde::Deserialize;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use crate::domain::services::CallbackRegistry;

/// One host invocation of a callback slot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HostMessage {
    /// Slot name, `__oac_callback_<event>`.
    pub callback: String,
    /// Arbitrary event payload.
    #[serde(default)]
    pub payload: Value,
}

/// Counters reported when the pump stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpStats {
    /// Messages handed to a live handler.
    pub delivered: usize,
    /// Well-formed messages with no handler behind their slot.
    pub dropped: usize,
    /// Lines that were not valid host messages.
    pub malformed: usize,
}

/// Delivers host messages read from `reader` until end of input.
///
/// Blank lines are ignored; lines that are not valid host messages, including
/// ones that are not UTF-8, are logged and skipped.
///
/// # Errors
/// Returns error if reading from the underlying stream fails.
pub async fn pump_host_messages<R>(
    mut reader: R,
    registry: &CallbackRegistry,
) -> std::io::Result<PumpStats>
where
    R: AsyncBufRead + Unpin,
{
    let mut stats = PumpStats::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).await? == 0 {
            break;
        }

        let raw = line.trim_ascii();
        if raw.is_empty() {
            continue;
        }

        let message: HostMessage = match serde_json::from_slice(raw) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "Skipping malformed host message");
                stats.malformed += 1;
                continue;
            }
        };

        if registry.deliver(&message.callback, message.payload) {
            stats.delivered += 1;
        } else {
            debug!(callback = %message.callback, "Host message had no live handler");
            stats.dropped += 1;
        }
    }

    info!(
        delivered = stats.delivered,
        dropped = stats.dropped,
        malformed = stats.malformed,
        "Host message stream ended"
    );

    Ok(stats)
}
