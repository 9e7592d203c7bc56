//! Domain error types.

mod bridge_error;
mod session_error;
mod storage_error;

pub use bridge_error::{BridgeError, BridgeResult};
pub use session_error::SessionError;
pub use storage_error::StorageError;
