//! In-memory host that records every call, for unit tests

use std::collections::{HashMap, HashSet};

use glam::Vec3;

use crate::components::{
    Cue, CuePlay, PlayerId, PlayerSnapshot, ScoreboardRow, Sfx, TeamId, TimerReadout,
};
use crate::host::Host;

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub players: Vec<PlayerSnapshot>,
    pub markers: HashMap<u32, Vec3>,
    pub remaining: u32,

    pub target_score: Option<u32>,
    pub time_limit: Option<u32>,
    pub team_scores: HashMap<TeamId, u32>,
    pub deploy_enabled: Option<bool>,
    pub deploy_toggles: u32,
    pub input_restricted: HashMap<PlayerId, bool>,
    pub redeploy_times: HashMap<PlayerId, u32>,

    pub equipment: HashMap<PlayerId, Vec<String>>,
    pub primary_active: HashSet<PlayerId>,
    pub damage: Vec<(PlayerId, f32, PlayerId)>,
    pub teleports: Vec<(PlayerId, Vec3)>,

    pub score_display: Option<(u32, u32)>,
    pub score_display_visible: bool,
    pub score_display_removals: u32,
    pub timer: Option<TimerReadout>,
    pub warmup_countdown: Option<(u32, Option<u32>)>,
    pub warmup_visible: bool,
    pub scoreboard_ready: bool,
    pub rows: HashMap<PlayerId, ScoreboardRow>,

    pub cues: Vec<CuePlay>,
    pub sfx: Vec<Sfx>,
}

impl RecordingHost {
    pub fn give(&mut self, player: PlayerId, equipment: &str) {
        self.equipment.entry(player).or_default().push(equipment.to_string());
    }

    pub fn add_player(&mut self, id: u32, team: u8, position: Vec3) {
        self.players.push(PlayerSnapshot {
            id: PlayerId(id),
            team: TeamId(team),
            alive: true,
            position,
        });
    }

    pub fn played(&self, cue: Cue) -> usize {
        self.cues.iter().filter(|c| c.cue == cue).count()
    }
}

impl Host for RecordingHost {
    fn players(&self) -> Vec<PlayerSnapshot> {
        self.players.clone()
    }

    fn spatial_object_position(&self, object_id: u32) -> Vec3 {
        self.markers.get(&object_id).copied().unwrap_or(Vec3::ZERO)
    }

    fn move_spatial_object(&mut self, object_id: u32, position: Vec3) {
        self.markers.insert(object_id, position);
    }

    fn teleport(&mut self, player: PlayerId, position: Vec3) {
        self.teleports.push((player, position));
    }

    fn set_target_score(&mut self, score: u32) {
        self.target_score = Some(score);
    }

    fn set_time_limit(&mut self, seconds: u32) {
        self.time_limit = Some(seconds);
    }

    fn time_remaining(&self) -> u32 {
        self.remaining
    }

    fn set_team_score(&mut self, team: TeamId, score: u32) {
        self.team_scores.insert(team, score);
    }

    fn enable_all_deploy(&mut self, enabled: bool) {
        self.deploy_enabled = Some(enabled);
        self.deploy_toggles += 1;
    }

    fn set_input_restricted(&mut self, player: PlayerId, restricted: bool) {
        self.input_restricted.insert(player, restricted);
    }

    fn set_redeploy_time(&mut self, player: PlayerId, seconds: u32) {
        self.redeploy_times.insert(player, seconds);
    }

    fn has_equipment(&self, player: PlayerId, equipment: &str) -> bool {
        self.equipment
            .get(&player)
            .is_some_and(|items| items.iter().any(|e| e == equipment))
    }

    fn remove_equipment(&mut self, player: PlayerId, equipment: &str) {
        if let Some(items) = self.equipment.get_mut(&player) {
            items.retain(|e| e != equipment);
        }
    }

    fn is_primary_slot_active(&self, player: PlayerId) -> bool {
        self.primary_active.contains(&player)
    }

    fn deal_damage(&mut self, victim: PlayerId, amount: f32, attacker: PlayerId) {
        self.damage.push((victim, amount, attacker));
    }

    fn create_score_display(&mut self, _target_score: u32) {
        self.score_display_visible = true;
    }

    fn update_score_display(&mut self, team1_score: u32, team2_score: u32) {
        self.score_display = Some((team1_score, team2_score));
    }

    fn remove_score_display(&mut self) {
        self.score_display_visible = false;
        self.score_display_removals += 1;
    }

    fn update_timer_display(&mut self, readout: &TimerReadout) {
        self.timer = Some(*readout);
    }

    fn create_warmup_countdown(&mut self, freeze_seconds: u32) {
        self.warmup_visible = true;
        self.warmup_countdown = Some((freeze_seconds, None));
    }

    fn update_warmup_countdown(&mut self, seconds: u32, millis: Option<u32>) {
        self.warmup_countdown = Some((seconds, millis));
    }

    fn remove_warmup_countdown(&mut self) {
        self.warmup_visible = false;
    }

    fn setup_scoreboard(&mut self) {
        self.scoreboard_ready = true;
    }

    fn update_scoreboard_row(&mut self, player: PlayerId, row: &ScoreboardRow) {
        self.rows.insert(player, *row);
    }

    fn play_cue(&mut self, cue: Cue, team: Option<TeamId>) {
        self.cues.push(CuePlay { cue, team });
    }

    fn play_sfx(&mut self, sfx: Sfx) {
        self.sfx.push(sfx);
    }
}
