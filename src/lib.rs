//! OAC Forum - backend bridge for the OAC Forum role-play dashboard.
//!
//! This crate provides the request/response bridge between the dashboard and
//! the game-modification host, a simulated backend for running without the
//! host, inbound event subscriptions, and the client workflows built on them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the bridge, use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing transports, configuration and storage.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "oac-forum";
