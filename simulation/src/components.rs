//! Core match types shared by every subsystem
//!
//! Identities, per-player counters, cues and the host-facing snapshot types.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Host simulation rate the synthetic clock assumes.
pub const TICK_RATE: u64 = 30;

// ============================================================================
// Identity
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "team#{}", self.0)
    }
}

// ============================================================================
// Player State
// ============================================================================

/// Scoreboard counters for one connected player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub headshots: u32,
}

impl PlayerStats {
    /// Kill/death ratio scaled by 1000 and truncated. Zero deaths divide by one.
    pub fn kd_scaled(&self) -> u32 {
        let deaths = self.deaths.max(1) as u64;
        ((self.kills as u64 * 1000) / deaths) as u32
    }

    /// Share of kills that were headshots, floored to a whole percent.
    pub fn headshot_percent(&self) -> u32 {
        if self.kills == 0 {
            return 0;
        }
        ((self.headshots as u64 * 100) / self.kills as u64) as u32
    }

    pub fn scoreboard_row(&self) -> ScoreboardRow {
        ScoreboardRow {
            kills: self.kills,
            deaths: self.deaths,
            assists: self.assists,
            kd_scaled: self.kd_scaled(),
            headshot_percent: self.headshot_percent(),
        }
    }
}

/// One scoreboard row as handed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreboardRow {
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub kd_scaled: u32,
    pub headshot_percent: u32,
}

/// What the host's spatial query reports for a connected player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub team: TeamId,
    pub alive: bool,
    pub position: Vec3,
}

// ============================================================================
// Events
// ============================================================================

/// How a player died, as reported on kill events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathKind {
    Default,
    Headshot,
    Melee,
    Explosion,
    Deserting,
    Drowning,
    Redeploy,
}

impl DeathKind {
    /// Death kinds that never award a kill.
    pub fn is_non_scoring(self) -> bool {
        matches!(self, DeathKind::Deserting | DeathKind::Drowning | DeathKind::Redeploy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageKind {
    Default,
    Explosion,
    Fall,
}

// ============================================================================
// Audio
// ============================================================================

/// Voice-over cues the mode plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    RoundStartGeneric,
    Time120Left,
    Time60Left,
    Time30Left,
    ProgressEarlyWinning,
    ProgressEarlyLosing,
    ProgressMidWinning,
    ProgressMidLosing,
    ProgressLateWinning,
    ProgressLateLosing,
    PlayerCountEnemyLow,
    PlayerCountFriendlyLow,
}

/// One-shot sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sfx {
    LowTimeWarning,
}

/// A cue to play, optionally scoped to one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuePlay {
    pub cue: Cue,
    pub team: Option<TeamId>,
}

impl CuePlay {
    pub fn to_team(cue: Cue, team: TeamId) -> Self {
        Self { cue, team: Some(team) }
    }
}

// ============================================================================
// Timer Display
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerColor {
    Normal,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerFormat {
    /// `m:ss`, `padded` when seconds need a leading zero
    MinutesSeconds { padded: bool },
    /// `s:mmm` in the final minute
    SecondsMillis,
}

/// Countdown readout handed to the host every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerReadout {
    pub remaining: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub millis: u32,
    pub color: TimerColor,
    pub format: TimerFormat,
}

impl TimerReadout {
    pub fn text(&self) -> String {
        match self.format {
            TimerFormat::MinutesSeconds { .. } => format!("{}:{:02}", self.minutes, self.seconds),
            TimerFormat::SecondsMillis => format!("{}:{:03}", self.seconds, self.millis.min(999)),
        }
    }
}
