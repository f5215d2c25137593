//! Arena World - headless engine stand-in backed by an ECS
//!
//! Soldiers are hecs entities. The match clock, spatial markers and the
//! presentation state the mode drives are plain fields.

use std::collections::{HashMap, HashSet};

use glam::Vec3;
use hecs::{Entity, World};
use tdm::{Cue, CuePlay, Host, PlayerId, PlayerSnapshot, ScoreboardRow, Sfx, TeamId, TimerReadout, TICK_RATE};
use tracing::{debug, trace};

pub const MAX_HEALTH: f32 = 100.0;

/// Engine respawn timer before the mode overrides it
pub const DEFAULT_REDEPLOY_SECONDS: u32 = 10;

// ============================================================================
// Components
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Soldier {
    pub id: PlayerId,
    pub team: TeamId,
}

#[derive(Debug, Clone, Copy)]
pub struct Position(pub Vec3);

#[derive(Debug, Clone, Copy)]
pub struct Health {
    pub hp: f32,
    pub last_attacker: Option<PlayerId>,
    /// Distinct attacker before `last_attacker`
    pub previous_attacker: Option<PlayerId>,
}

impl Health {
    /// Who gets the assist when `killer` lands the final hit.
    pub fn assist_for(&self, killer: PlayerId) -> Option<PlayerId> {
        if self.last_attacker == Some(killer) {
            self.previous_attacker
        } else {
            self.last_attacker
        }
        .filter(|&p| p != killer)
    }
}

impl Default for Health {
    fn default() -> Self {
        Self { hp: MAX_HEALTH, last_attacker: None, previous_attacker: None }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Loadout {
    pub items: Vec<String>,
    pub primary_active: bool,
}

/// Marker: soldier is deployed and alive
#[derive(Debug, Clone, Copy, Default)]
pub struct Alive;

#[derive(Debug, Clone, Copy)]
pub struct Dead {
    pub respawn_at: u64,
}

// ============================================================================
// Presentation
// ============================================================================

/// What a client would currently see on screen.
#[derive(Debug, Clone, Default)]
pub struct Presentation {
    pub target_score: Option<u32>,
    pub score_display: Option<(u32, u32)>,
    pub timer: Option<TimerReadout>,
    pub warmup_countdown: Option<(u32, Option<u32>)>,
    pub scoreboard_ready: bool,
    pub scoreboard: HashMap<PlayerId, ScoreboardRow>,
    pub cues: Vec<CuePlay>,
    pub sfx_played: u32,
}

// ============================================================================
// World
// ============================================================================

pub struct ArenaWorld {
    pub world: World,
    pub clock_tick: u64,
    time_limit: Option<(u32, u64)>,
    markers: HashMap<u32, Vec3>,
    entities: HashMap<PlayerId, Entity>,
    team_scores: HashMap<TeamId, u32>,
    pub deploy_enabled: bool,
    pub input_locked: HashSet<PlayerId>,
    pub redeploy_seconds: HashMap<PlayerId, u32>,
    pub presentation: Presentation,
}

impl ArenaWorld {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            clock_tick: 0,
            time_limit: None,
            markers: HashMap::new(),
            entities: HashMap::new(),
            team_scores: HashMap::new(),
            deploy_enabled: true,
            input_locked: HashSet::new(),
            redeploy_seconds: HashMap::new(),
            presentation: Presentation::default(),
        }
    }

    pub fn place_marker(&mut self, object_id: u32, position: Vec3) {
        self.markers.insert(object_id, position);
    }

    pub fn marker(&self, object_id: u32) -> Option<Vec3> {
        self.markers.get(&object_id).copied()
    }

    pub fn spawn_soldier(&mut self, id: PlayerId, team: TeamId, position: Vec3, loadout: Loadout) -> Entity {
        let entity = self.world.spawn((
            Soldier { id, team },
            Position(position),
            Health::default(),
            loadout,
            Alive,
        ));
        self.entities.insert(id, entity);
        entity
    }

    pub fn remove_soldier(&mut self, id: PlayerId) {
        if let Some(entity) = self.entities.remove(&id) {
            let _ = self.world.despawn(entity);
        }
        self.input_locked.remove(&id);
        self.redeploy_seconds.remove(&id);
        self.presentation.scoreboard.remove(&id);
    }

    pub fn entity(&self, id: PlayerId) -> Option<Entity> {
        self.entities.get(&id).copied()
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        let mut ids: Vec<PlayerId> = self.entities.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn is_alive(&self, id: PlayerId) -> bool {
        self.entity(id)
            .is_some_and(|e| self.world.get::<&Alive>(e).is_ok())
    }

    pub fn health(&self, id: PlayerId) -> Option<Health> {
        let entity = self.entity(id)?;
        self.world.get::<&Health>(entity).ok().map(|h| *h)
    }

    pub fn team_score(&self, team: TeamId) -> u32 {
        self.team_scores.get(&team).copied().unwrap_or(0)
    }

    /// Advance the engine clock by one tick.
    pub fn advance_clock(&mut self) {
        self.clock_tick += 1;
    }

    /// Apply damage; returns true when this hit took the victim from alive to zero health.
    pub fn apply_damage(&mut self, victim: PlayerId, amount: f32, attacker: PlayerId) -> bool {
        let Some(entity) = self.entity(victim) else {
            return false;
        };
        if self.world.get::<&Alive>(entity).is_err() {
            return false;
        }
        let Ok(mut health) = self.world.get::<&mut Health>(entity) else {
            return false;
        };
        let was_up = health.hp > 0.0;
        health.hp -= amount;
        if health.last_attacker != Some(attacker) {
            health.previous_attacker = health.last_attacker;
            health.last_attacker = Some(attacker);
        }
        trace!("{} took {:.0} from {}", victim, amount, attacker);
        was_up && health.hp <= 0.0
    }

    /// Move a soldier from alive to dead. The respawn waits for the redeploy
    /// time the mode set (default otherwise) plus `deploy_screen_ticks`.
    pub fn mark_dead(&mut self, id: PlayerId, deploy_screen_ticks: u64) {
        let Some(entity) = self.entity(id) else {
            return;
        };
        let _ = self.world.remove_one::<Alive>(entity);
        let redeploy = self
            .redeploy_seconds
            .get(&id)
            .copied()
            .unwrap_or(DEFAULT_REDEPLOY_SECONDS) as u64;
        let respawn_at = self.clock_tick + redeploy * TICK_RATE + deploy_screen_ticks;
        let _ = self.world.insert_one(entity, Dead { respawn_at });
    }

    /// Soldiers whose respawn time has come, if deploy is allowed.
    pub fn due_respawns(&self) -> Vec<PlayerId> {
        if !self.deploy_enabled {
            return Vec::new();
        }
        let mut due: Vec<PlayerId> = self
            .world
            .query::<(&Soldier, &Dead)>()
            .iter()
            .filter(|(_, (_, dead))| dead.respawn_at <= self.clock_tick)
            .map(|(_, (soldier, _))| soldier.id)
            .collect();
        due.sort();
        due
    }

    /// Bring a dead soldier back at `position` with full health.
    pub fn revive(&mut self, id: PlayerId, position: Vec3) {
        let Some(entity) = self.entity(id) else {
            return;
        };
        let _ = self.world.remove_one::<Dead>(entity);
        let _ = self.world.insert(entity, (Alive, Health::default(), Position(position)));
        debug!("{} redeployed", id);
    }
}

impl Default for ArenaWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for ArenaWorld {
    fn players(&self) -> Vec<PlayerSnapshot> {
        self.world
            .query::<(&Soldier, &Position, Option<&Alive>)>()
            .iter()
            .map(|(_, (soldier, position, alive))| PlayerSnapshot {
                id: soldier.id,
                team: soldier.team,
                alive: alive.is_some(),
                position: position.0,
            })
            .collect()
    }

    fn player(&self, id: PlayerId) -> Option<PlayerSnapshot> {
        let entity = self.entity(id)?;
        let soldier = *self.world.get::<&Soldier>(entity).ok()?;
        let position = self.world.get::<&Position>(entity).ok()?.0;
        Some(PlayerSnapshot {
            id,
            team: soldier.team,
            alive: self.world.get::<&Alive>(entity).is_ok(),
            position,
        })
    }

    fn spatial_object_position(&self, object_id: u32) -> Vec3 {
        self.marker(object_id).unwrap_or(Vec3::ZERO)
    }

    fn move_spatial_object(&mut self, object_id: u32, position: Vec3) {
        self.markers.insert(object_id, position);
    }

    fn teleport(&mut self, player: PlayerId, position: Vec3) {
        if let Some(entity) = self.entity(player) {
            if let Ok(mut pos) = self.world.get::<&mut Position>(entity) {
                pos.0 = position;
            }
        }
    }

    fn set_target_score(&mut self, score: u32) {
        self.presentation.target_score = Some(score);
    }

    fn set_time_limit(&mut self, seconds: u32) {
        self.time_limit = Some((seconds, self.clock_tick));
    }

    fn time_remaining(&self) -> u32 {
        match self.time_limit {
            Some((limit, set_at)) => {
                let elapsed = (self.clock_tick.saturating_sub(set_at) / TICK_RATE) as u32;
                limit.saturating_sub(elapsed)
            }
            None => 0,
        }
    }

    fn set_team_score(&mut self, team: TeamId, score: u32) {
        self.team_scores.insert(team, score);
    }

    fn enable_all_deploy(&mut self, enabled: bool) {
        self.deploy_enabled = enabled;
    }

    fn set_input_restricted(&mut self, player: PlayerId, restricted: bool) {
        if restricted {
            self.input_locked.insert(player);
        } else {
            self.input_locked.remove(&player);
        }
    }

    fn set_redeploy_time(&mut self, player: PlayerId, seconds: u32) {
        self.redeploy_seconds.insert(player, seconds);
    }

    fn has_equipment(&self, player: PlayerId, equipment: &str) -> bool {
        self.entity(player)
            .and_then(|e| self.world.get::<&Loadout>(e).ok())
            .is_some_and(|loadout| loadout.items.iter().any(|item| item == equipment))
    }

    fn remove_equipment(&mut self, player: PlayerId, equipment: &str) {
        if let Some(entity) = self.entity(player) {
            if let Ok(mut loadout) = self.world.get::<&mut Loadout>(entity) {
                loadout.items.retain(|item| item != equipment);
            }
        }
    }

    fn is_primary_slot_active(&self, player: PlayerId) -> bool {
        self.entity(player)
            .and_then(|e| self.world.get::<&Loadout>(e).ok())
            .is_some_and(|loadout| loadout.primary_active)
    }

    fn deal_damage(&mut self, victim: PlayerId, amount: f32, attacker: PlayerId) {
        self.apply_damage(victim, amount, attacker);
    }

    fn create_score_display(&mut self, _target_score: u32) {
        self.presentation.score_display = Some((0, 0));
    }

    fn update_score_display(&mut self, team1_score: u32, team2_score: u32) {
        if self.presentation.score_display.is_some() {
            self.presentation.score_display = Some((team1_score, team2_score));
        }
    }

    fn remove_score_display(&mut self) {
        self.presentation.score_display = None;
        self.presentation.timer = None;
    }

    fn update_timer_display(&mut self, readout: &TimerReadout) {
        self.presentation.timer = Some(*readout);
    }

    fn create_warmup_countdown(&mut self, freeze_seconds: u32) {
        self.presentation.warmup_countdown = Some((freeze_seconds, None));
    }

    fn update_warmup_countdown(&mut self, seconds: u32, millis: Option<u32>) {
        if self.presentation.warmup_countdown.is_some() {
            self.presentation.warmup_countdown = Some((seconds, millis));
        }
    }

    fn remove_warmup_countdown(&mut self) {
        self.presentation.warmup_countdown = None;
    }

    fn setup_scoreboard(&mut self) {
        self.presentation.scoreboard_ready = true;
    }

    fn update_scoreboard_row(&mut self, player: PlayerId, row: &ScoreboardRow) {
        self.presentation.scoreboard.insert(player, *row);
    }

    fn play_cue(&mut self, cue: Cue, team: Option<TeamId>) {
        trace!("Cue {:?} to {:?}", cue, team);
        self.presentation.cues.push(CuePlay { cue, team });
    }

    fn play_sfx(&mut self, _sfx: Sfx) {
        self.presentation.sfx_played += 1;
    }
}
