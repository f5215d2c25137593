//! Match summary export
//!
//! A serialisable end-of-match (or mid-match) report. Nothing is read back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::components::{PlayerId, TeamId};
use crate::phase::{MatchResult, Phase};
use crate::world::MatchSession;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub phase: Phase,
    pub tick: u64,
    pub target_score: u32,
    pub teams: Vec<TeamSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    /// Sorted by kills, most first
    pub players: Vec<PlayerSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSummary {
    pub team: TeamId,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub player: PlayerId,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub headshots: u32,
    pub kd_scaled: u32,
    pub headshot_percent: u32,
}

impl MatchSession {
    pub fn summary(&self) -> MatchSummary {
        let mut players: Vec<PlayerSummary> = self
            .stats()
            .iter()
            .map(|(player, stats)| PlayerSummary {
                player,
                kills: stats.kills,
                deaths: stats.deaths,
                assists: stats.assists,
                headshots: stats.headshots,
                kd_scaled: stats.kd_scaled(),
                headshot_percent: stats.headshot_percent(),
            })
            .collect();
        players.sort_by(|a, b| b.kills.cmp(&a.kills).then(a.player.cmp(&b.player)));

        MatchSummary {
            phase: self.phase(),
            tick: self.tick(),
            target_score: self.config().score,
            teams: self
                .scores()
                .pairs()
                .into_iter()
                .map(|(team, score)| TeamSummary { team, score })
                .collect(),
            result: self.result().copied(),
            started_at: self.started_at,
            ended_at: self.ended_at,
            players,
        }
    }
}

impl MatchSummary {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
