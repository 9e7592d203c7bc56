//! Application layer with the backend bridge, use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{LoadedProfile, ProfileSource, Registration, SessionStart};
pub use services::{BackendBridge, Subscription, UnsubscribeHandle};
pub use use_cases::{
    LawUseCase, PassportDecision, PassportUseCase, ProfileUpdate, ProfileUseCase, SessionUseCase,
};
