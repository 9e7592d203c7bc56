//! Domain entity definitions.

mod bridge_mode;
mod event_name;
mod law;
mod oab_number;
mod passport;
mod payload;
mod profile;

pub use bridge_mode::BridgeMode;
pub use event_name::{CALLBACK_SLOT_PREFIX, EventName};
pub use law::Law;
pub use oab_number::OabNumber;
pub use passport::{Passport, PassportApplication, PassportStatus};
pub use payload::{Payload, payload_from, tagged_failure};
pub use profile::{DEFAULT_AVATAR, RemoteProfile, UserProfile};
