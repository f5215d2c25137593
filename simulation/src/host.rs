//! Host engine interface
//!
//! Everything the mode needs from the engine that embeds it: spatial queries,
//! match controls, presentation refresh and audio. Implementations are
//! expected not to fail for valid player ids.

use glam::Vec3;

use crate::components::{Cue, PlayerId, PlayerSnapshot, ScoreboardRow, Sfx, TeamId, TimerReadout};

pub trait Host {
    // --- Spatial queries ---

    /// All connected players with team, alive state and position.
    fn players(&self) -> Vec<PlayerSnapshot>;

    fn player(&self, id: PlayerId) -> Option<PlayerSnapshot> {
        self.players().into_iter().find(|p| p.id == id)
    }

    /// Position of a placed spatial object. Unknown ids report a zeroed position.
    fn spatial_object_position(&self, object_id: u32) -> Vec3;

    fn move_spatial_object(&mut self, object_id: u32, position: Vec3);

    fn teleport(&mut self, player: PlayerId, position: Vec3);

    // --- Match controls ---

    fn set_target_score(&mut self, score: u32);

    fn set_time_limit(&mut self, seconds: u32);

    /// Whole seconds left on the match clock.
    fn time_remaining(&self) -> u32;

    fn set_team_score(&mut self, team: TeamId, score: u32);

    fn enable_all_deploy(&mut self, enabled: bool);

    fn set_input_restricted(&mut self, player: PlayerId, restricted: bool);

    fn set_redeploy_time(&mut self, player: PlayerId, seconds: u32);

    // --- Equipment ---

    fn has_equipment(&self, player: PlayerId, equipment: &str) -> bool;

    fn remove_equipment(&mut self, player: PlayerId, equipment: &str);

    fn is_primary_slot_active(&self, player: PlayerId) -> bool;

    fn deal_damage(&mut self, victim: PlayerId, amount: f32, attacker: PlayerId);

    // --- Presentation ---

    fn create_score_display(&mut self, target_score: u32);

    fn update_score_display(&mut self, team1_score: u32, team2_score: u32);

    fn remove_score_display(&mut self);

    fn update_timer_display(&mut self, readout: &TimerReadout);

    fn create_warmup_countdown(&mut self, freeze_seconds: u32);

    /// `millis` is `None` while more than five seconds remain.
    fn update_warmup_countdown(&mut self, seconds: u32, millis: Option<u32>);

    fn remove_warmup_countdown(&mut self);

    fn setup_scoreboard(&mut self);

    fn update_scoreboard_row(&mut self, player: PlayerId, row: &ScoreboardRow);

    // --- Audio ---

    fn play_cue(&mut self, cue: Cue, team: Option<TeamId>);

    fn play_sfx(&mut self, sfx: Sfx);
}
