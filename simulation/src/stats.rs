//! Per-player combat statistics
//!
//! Records live only for the lifetime of one match. Mutations on a player
//! that never joined (or already left) are rejected, not silently created.

use std::collections::HashMap;

use crate::components::{PlayerId, PlayerStats};
use crate::error::ModeError;

#[derive(Debug, Default)]
pub struct StatsStore {
    players: HashMap<PlayerId, PlayerStats>,
}

impl StatsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a zeroed record, overwriting any stale entry for a reused id.
    pub fn on_join(&mut self, player: PlayerId) -> &PlayerStats {
        self.players.insert(player, PlayerStats::default());
        &self.players[&player]
    }

    pub fn on_leave(&mut self, player: PlayerId) -> Option<PlayerStats> {
        self.players.remove(&player)
    }

    pub fn on_kill(&mut self, player: PlayerId, headshot: bool) -> Result<&PlayerStats, ModeError> {
        let stats = self.record_mut(player)?;
        stats.kills += 1;
        if headshot {
            stats.headshots += 1;
        }
        Ok(stats)
    }

    pub fn on_assist(&mut self, player: PlayerId) -> Result<&PlayerStats, ModeError> {
        let stats = self.record_mut(player)?;
        stats.assists += 1;
        Ok(stats)
    }

    pub fn on_death(&mut self, player: PlayerId) -> Result<&PlayerStats, ModeError> {
        let stats = self.record_mut(player)?;
        stats.deaths += 1;
        Ok(stats)
    }

    pub fn get(&self, player: PlayerId) -> Option<&PlayerStats> {
        self.players.get(&player)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &PlayerStats)> {
        self.players.iter().map(|(&id, stats)| (id, stats))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    fn record_mut(&mut self, player: PlayerId) -> Result<&mut PlayerStats, ModeError> {
        self.players
            .get_mut(&player)
            .ok_or(ModeError::UnknownPlayer(player))
    }
}
