mod profile_store_port;
mod transport_port;

pub use profile_store_port::{CachedIdentity, ProfileStorePort};
pub use transport_port::TransportPort;
