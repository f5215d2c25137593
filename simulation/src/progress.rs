//! Progress commentary
//!
//! Plays one-shot stage cues when the leading team reaches a configured score
//! and a generic cue pair whenever the lead changes hands.

use tracing::debug;

use crate::components::{Cue, CuePlay, TeamId};
use crate::config::MatchConfig;

#[derive(Debug, Clone)]
pub struct ProgressStage {
    pub threshold: u32,
    pub winning: Cue,
    pub losing: Cue,
    pub fired: bool,
}

impl ProgressStage {
    fn new(threshold: u32, winning: Cue, losing: Cue) -> Self {
        Self { threshold, winning, losing, fired: false }
    }
}

#[derive(Debug, Clone)]
pub struct ProgressStager {
    stages: [ProgressStage; 3],
    leader: Option<TeamId>,
}

impl ProgressStager {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            stages: [
                ProgressStage::new(
                    config.progress_stage_early,
                    Cue::ProgressEarlyWinning,
                    Cue::ProgressEarlyLosing,
                ),
                ProgressStage::new(
                    config.progress_stage_mid,
                    Cue::ProgressLateWinning,
                    Cue::ProgressLateLosing,
                ),
                ProgressStage::new(
                    config.progress_stage_late,
                    Cue::PlayerCountEnemyLow,
                    Cue::PlayerCountFriendlyLow,
                ),
            ],
            leader: None,
        }
    }

    pub fn leader(&self) -> Option<TeamId> {
        self.leader
    }

    pub fn stages(&self) -> &[ProgressStage] {
        &self.stages
    }

    /// Evaluate both team scores after a scoring event and return the cues to play.
    pub fn on_score(&mut self, a: (TeamId, u32), b: (TeamId, u32)) -> Vec<CuePlay> {
        let mut cues = Vec::new();
        if a.1 == b.1 {
            return cues;
        }

        let (winning, losing) = if a.1 > b.1 { (a, b) } else { (b, a) };
        let (winning_team, winning_score) = winning;
        let losing_team = losing.0;

        let stage = self.stages.iter_mut().find(|s| s.threshold == winning_score);
        let at_stage = stage.is_some();

        if let Some(stage) = stage {
            if !stage.fired {
                debug!("Progress stage {} reached by {}", stage.threshold, winning_team);
                cues.push(CuePlay::to_team(stage.winning, winning_team));
                cues.push(CuePlay::to_team(stage.losing, losing_team));
                stage.fired = true;
            }
        }

        if self.leader != Some(winning_team) {
            self.leader = Some(winning_team);
            // A stage cue already covers this moment
            if !at_stage {
                debug!("Lead taken by {} at {}", winning_team, winning_score);
                cues.push(CuePlay::to_team(Cue::ProgressMidWinning, winning_team));
                cues.push(CuePlay::to_team(Cue::ProgressMidLosing, losing_team));
            }
        }

        cues
    }
}
