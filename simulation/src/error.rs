//! Error types for the game mode core

use thiserror::Error;

use crate::components::PlayerId;
use crate::phase::Phase;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("progress stages must satisfy 0 < early ({early}) < mid ({mid}) < late ({late}) < score ({score})")]
    StageOrder { early: u32, mid: u32, late: u32, score: u32 },

    #[error("team ids must differ, both are {0}")]
    SameTeams(u8),

    #[error("time limit must be positive")]
    ZeroTimeLimit,

    #[error("time limit {time_limit}s plus freeze time {freeze_time}s does not fit in u32 seconds")]
    TimeLimitOverflow { time_limit: u32, freeze_time: u32 },
}

#[derive(Debug, Error)]
pub enum ModeError {
    #[error("no stats record for {0}")]
    UnknownPlayer(PlayerId),

    #[error("illegal phase transition {from:?} -> {to:?}")]
    InvalidTransition { from: Phase, to: Phase },

    #[error("match already started (phase {0:?})")]
    AlreadyStarted(Phase),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
