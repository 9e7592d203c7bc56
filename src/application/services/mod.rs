//! Application services.

mod backend_bridge;

pub use backend_bridge::{BackendBridge, Subscription, UnsubscribeHandle};
