//! Match configuration, loaded once before the match starts

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::components::TeamId;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Kills a team needs to win
    pub score: u32,
    /// Match length in seconds, not counting freeze time
    pub time_limit: u32,
    /// Seconds of input-locked warmup before play starts
    pub freeze_time: u32,
    pub progress_stage_early: u32,
    pub progress_stage_mid: u32,
    pub progress_stage_late: u32,
    pub team1_id: u8,
    pub team2_id: u8,
    /// Id of the first spawn marker; markers are numbered contiguously from here.
    /// Zero disables marker discovery.
    pub start_spawn_point_id: u32,
    pub sniper_additional_damage: f32,
    /// Upper bound (metres) of the sniper close-range bonus
    pub sniper_max_distance_to_hit_kill: u32,
    pub sniper_weapons: Vec<String>,
    pub restricted_gadgets: Vec<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            score: 200,
            time_limit: 40 * 60,
            freeze_time: 0,
            progress_stage_early: 50,
            progress_stage_mid: 100,
            progress_stage_late: 175,
            team1_id: 1,
            team2_id: 2,
            start_spawn_point_id: 9001,
            sniper_additional_damage: 100.0,
            sniper_max_distance_to_hit_kill: 40,
            sniper_weapons: [
                "Sniper_M2010_ESR",
                "Sniper_PSR",
                "Sniper_SV_98",
                "Sniper_Mini_Scout",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            restricted_gadgets: [
                "Misc_Assault_Ladder",
                "Misc_Incendiary_Round_Shotgun",
                "Launcher_Thermobaric_Grenade",
                "Launcher_Long_Range",
                "Launcher_High_Explosive",
                "Deployable_Cover",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl MatchConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = 0 < self.progress_stage_early
            && self.progress_stage_early < self.progress_stage_mid
            && self.progress_stage_mid < self.progress_stage_late
            && self.progress_stage_late < self.score;
        if !ordered {
            return Err(ConfigError::StageOrder {
                early: self.progress_stage_early,
                mid: self.progress_stage_mid,
                late: self.progress_stage_late,
                score: self.score,
            });
        }
        if self.team1_id == self.team2_id {
            return Err(ConfigError::SameTeams(self.team1_id));
        }
        if self.time_limit == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        if self.time_limit.checked_add(self.freeze_time).is_none() {
            return Err(ConfigError::TimeLimitOverflow {
                time_limit: self.time_limit,
                freeze_time: self.freeze_time,
            });
        }
        Ok(())
    }

    pub fn teams(&self) -> [TeamId; 2] {
        [TeamId(self.team1_id), TeamId(self.team2_id)]
    }

    /// The other team of a two-team match.
    pub fn opponent_of(&self, team: TeamId) -> TeamId {
        if team == TeamId(self.team1_id) {
            TeamId(self.team2_id)
        } else {
            TeamId(self.team1_id)
        }
    }

    /// Time limit handed to the host: play time plus freeze time.
    pub fn host_time_limit(&self) -> u32 {
        self.time_limit.saturating_add(self.freeze_time)
    }
}
