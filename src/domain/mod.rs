//! Domain layer with core bridge entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;
/// Domain services.
pub mod services;

pub use entities::{BridgeMode, EventName, Payload};
pub use errors::{BridgeError, BridgeResult, SessionError, StorageError};
pub use ports::{ProfileStorePort, TransportPort};
pub use services::CallbackRegistry;
