//! Team Deathmatch Arena
//!
//! A headless host for the match core: an ECS world standing in for the game
//! engine, bots that move and shoot, and a runner that ticks matches in real time.

pub mod bots;
pub mod game;
pub mod runner;
pub mod world;

pub use game::{ArenaMatch, ArenaSetup};
pub use runner::MatchRunner;
pub use world::ArenaWorld;
