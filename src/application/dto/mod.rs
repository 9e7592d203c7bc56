//! Data transfer objects for the application layer.

mod backend_dto;
mod session_dto;

pub use backend_dto::{
    CreatePassportRequest, CreatePassportResponse, PassportDecisionRequest, PassportRecord,
    PlayerInfoRequest, RegisterOabRequest, UpdateProfileRequest,
};
pub use session_dto::{LoadedProfile, ProfileSource, Registration, SessionStart};
