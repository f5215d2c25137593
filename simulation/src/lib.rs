//! Team Deathmatch Game Mode
//!
//! Match logic core driven by host engine callbacks: the phase state machine,
//! fair spawn selection, progress commentary and per-player statistics.
//! The host calls one hook per event or tick through [`MatchSession`].

pub mod components;
pub mod config;
pub mod error;
pub mod host;
pub mod phase;
pub mod progress;
pub mod spawns;
pub mod stats;
pub mod summary;
pub mod systems;
pub mod timer;
pub mod world;

#[cfg(test)]
pub(crate) mod testing;

pub use components::*;
pub use config::MatchConfig;
pub use error::{ConfigError, ModeError};
pub use host::Host;
pub use phase::{EndReason, MatchResult, Phase};
pub use summary::MatchSummary;
pub use world::{MatchSession, TickResult};
