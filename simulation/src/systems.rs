//! Gameplay rules applied by the session's event hooks

pub mod combat;
pub mod deploy;

pub use combat::{kill_counts, sniper_bonus};
pub use deploy::{input_restricted, strip_restricted_gadgets};
