//! Application use cases.

mod law_use_case;
mod passport_use_case;
mod profile_use_case;
mod reply;
mod session_use_case;

pub use law_use_case::LawUseCase;
pub use passport_use_case::{PassportDecision, PassportUseCase};
pub use profile_use_case::{ProfileUpdate, ProfileUseCase};
pub use session_use_case::SessionUseCase;
