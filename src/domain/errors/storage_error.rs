//! Client cache error types.

use thiserror::Error;

/// Client cache error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum StorageError {
    #[error("failed to read client cache: {0}")]
    ReadFailed(String),

    #[error("failed to write client cache: {0}")]
    WriteFailed(String),

    #[error("client cache not available: {0}")]
    NotAvailable(String),
}
