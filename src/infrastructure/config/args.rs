use super::app_config::{LogLevel, ModeSetting};
use crate::infrastructure::bridge::UnknownEventPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "oac-forum",
    version,
    about = "Backend bridge for the OAC Forum dashboard",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Transport selection (auto, hosted, standalone).
    #[arg(long, value_enum, global = true, env = "OAC_BRIDGE_MODE")]
    pub mode: Option<ModeSetting>,

    /// Host resource name.
    #[arg(long, global = true)]
    pub resource_name: Option<String>,

    /// Base URL for hosted calls.
    #[arg(long, value_name = "URL", global = true, env = "OAC_BASE_URL")]
    pub base_url: Option<String>,

    /// Simulated latency in standalone mode, in milliseconds.
    #[arg(long, global = true)]
    pub mock_latency_ms: Option<u64>,

    /// Timeout for hosted calls, in seconds.
    #[arg(long, global = true)]
    pub request_timeout_secs: Option<u64>,

    /// Standalone handling of unknown events.
    #[arg(long, value_enum, global = true)]
    pub unknown_events: Option<UnknownEventPolicy>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a raw event and print the reply.
    Send {
        /// Event name.
        event: String,
        /// JSON object payload.
        #[arg(short, long, default_value = "{}")]
        payload: String,
    },
    /// Subscribe to events and deliver host messages read from stdin.
    Listen {
        /// Event names to subscribe to.
        #[arg(required = true)]
        events: Vec<String>,
    },
    /// Start a session, registering on first use.
    Session {
        /// Display name used for first registration.
        #[arg(long)]
        name: Option<String>,
    },
    /// Update the profile on the backend.
    ///
    /// The simulated backend has no reply for `updateProfile`, so in
    /// standalone mode this reports the backend's "Evento não reconhecido"
    /// rejection.
    UpdateProfile {
        /// Display name.
        #[arg(long)]
        name: String,
        /// Contact e-mail.
        #[arg(long)]
        email: String,
        /// Contact phone number.
        #[arg(long)]
        phone: String,
    },
    /// List laws, optionally filtered by a search query.
    Laws {
        /// Search query (at least three characters).
        query: Option<String>,
    },
    /// Passport workflow.
    #[command(subcommand)]
    Passports(PassportCommand),
    /// Notify the backend that the session ends.
    Exit,
}

#[derive(Debug, Subcommand)]
pub enum PassportCommand {
    /// List passports awaiting review.
    Pending,
    /// Request a new passport.
    Create {
        /// Full name of the holder.
        #[arg(long)]
        name: String,
        /// Identity document number.
        #[arg(long)]
        identity: String,
        /// Date of birth.
        #[arg(long)]
        birthdate: String,
        /// Photo reference (URL or data URI).
        #[arg(long)]
        photo: String,
    },
    /// Approve a pending passport.
    Approve {
        /// Passport identifier.
        id: String,
    },
    /// Reject a pending passport.
    Reject {
        /// Passport identifier.
        id: String,
    },
}
