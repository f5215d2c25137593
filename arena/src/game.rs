//! Arena Match - one bot match driving the mode hooks the way an engine would
//!
//! Per tick: clock, global hook, per-player hooks, then (during play) bot
//! movement, shots and their damage/kill/assist/death hooks, then respawns.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tdm::{
    DamageKind, DeathKind, Host, MatchConfig, MatchSession, MatchSummary, ModeError, Phase,
    PlayerId, TeamId, TickResult, TICK_RATE,
};
use tracing::{debug, info};

use crate::bots::{engagement_system, movement_system, random_loadout, Shot};
use crate::world::ArenaWorld;

/// Time a killed soldier spends on the deploy screen before the redeploy timer
const DEPLOY_SCREEN_TICKS: u64 = 3 * TICK_RATE;

/// Scatter around a team base when soldiers (re)deploy
const BASE_SCATTER: f32 = 4.0;

#[derive(Debug, Clone, Copy)]
pub struct ArenaSetup {
    pub bots_per_team: u32,
    /// Spawn markers placed on a ring around the centre
    pub spawn_points: u32,
    pub arena_radius: f32,
}

impl Default for ArenaSetup {
    fn default() -> Self {
        Self {
            bots_per_team: 8,
            spawn_points: 12,
            arena_radius: 60.0,
        }
    }
}

pub struct ArenaMatch {
    session: MatchSession,
    world: ArenaWorld,
    setup: ArenaSetup,
    teams: [TeamId; 2],
    rng: StdRng,
    started: bool,
}

impl ArenaMatch {
    pub fn new(config: MatchConfig, setup: ArenaSetup, seed: u64) -> Result<Self, ModeError> {
        let teams = config.teams();
        let first_marker = config.start_spawn_point_id;
        let session = MatchSession::with_seed(config, seed)?;

        let mut world = ArenaWorld::new();
        if first_marker != 0 {
            let ring = setup.arena_radius * 0.7;
            for i in 0..setup.spawn_points {
                let angle = i as f32 / setup.spawn_points as f32 * std::f32::consts::TAU;
                // Raised a little off the floor: y == 0 && z == 0 reads as "no marker"
                let at = Vec3::new(ring * angle.cos(), 0.5, ring * angle.sin());
                world.place_marker(first_marker + i, at);
            }
        }

        Ok(Self {
            session,
            world,
            setup,
            teams,
            rng: StdRng::seed_from_u64(seed.wrapping_add(1)),
            started: false,
        })
    }

    pub fn session(&self) -> &MatchSession {
        &self.session
    }

    pub fn world(&self) -> &ArenaWorld {
        &self.world
    }

    pub fn is_closed(&self) -> bool {
        self.session.is_closed()
    }

    fn base(&self, team: TeamId) -> Vec3 {
        let x = self.setup.arena_radius * 0.8;
        if team == self.teams[0] {
            Vec3::new(-x, 0.0, 0.0)
        } else {
            Vec3::new(x, 0.0, 0.0)
        }
    }

    fn scattered_base(&mut self, team: TeamId) -> Vec3 {
        let base = self.base(team);
        base + Vec3::new(
            self.rng.gen_range(-BASE_SCATTER..BASE_SCATTER),
            0.0,
            self.rng.gen_range(-BASE_SCATTER..BASE_SCATTER),
        )
    }

    /// Put the bots in the world, join them and fire the start hook.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        let snipers = self.session.config().sniper_weapons.clone();
        let gadgets = self.session.config().restricted_gadgets.clone();
        for n in 0..self.setup.bots_per_team * 2 {
            let id = PlayerId(n + 1);
            let team = self.teams[(n % 2) as usize];
            let at = self.scattered_base(team);
            let loadout = random_loadout(&mut self.rng, &snipers, &gadgets);
            self.world.spawn_soldier(id, team, at, loadout);
            self.session.on_player_join(&mut self.world, id);
        }

        self.session.on_game_mode_started(&mut self.world);
        for id in self.world.player_ids() {
            self.session.on_player_deployed(&mut self.world, id);
        }
        info!(
            "Arena match with {} bots per team on {} spawn markers",
            self.setup.bots_per_team,
            self.session.spawns().len()
        );
    }

    /// A bot drops out: the engine forgets the soldier, then the leave hook runs.
    pub fn disconnect(&mut self, id: PlayerId) {
        if self.world.entity(id).is_none() {
            return;
        }
        self.world.remove_soldier(id);
        self.session.on_player_leave(id);
        info!("{} disconnected", id);
    }

    /// Advance one engine tick.
    pub fn tick(&mut self) -> TickResult {
        self.world.advance_clock();
        let result = self.session.ongoing_global(&mut self.world);
        for id in self.world.player_ids() {
            self.session.ongoing_player(&mut self.world, id);
        }

        if self.session.phase() == Phase::Active {
            movement_system(
                &mut self.world.world,
                &self.world.input_locked,
                self.setup.arena_radius,
                &mut self.rng,
            );
            let shots = engagement_system(&self.world.world, &self.world.input_locked, &mut self.rng);
            for shot in shots {
                self.resolve_shot(shot);
            }
        }

        for id in self.world.due_respawns() {
            let Some(team) = self.world.player(id).map(|p| p.team) else {
                continue;
            };
            let at = self.scattered_base(team);
            self.world.revive(id, at);
            self.session.on_player_deployed(&mut self.world, id);
        }

        result
    }

    fn resolve_shot(&mut self, shot: Shot) {
        // Either side may have died earlier this tick
        if !self.world.is_alive(shot.attacker) || !self.world.is_alive(shot.victim) {
            return;
        }

        self.world.apply_damage(shot.victim, shot.damage, shot.attacker);
        self.session
            .on_player_damaged(&mut self.world, shot.victim, shot.attacker, DamageKind::Default);

        let Some(health) = self.world.health(shot.victim) else {
            return;
        };
        if health.hp > 0.0 {
            return;
        }

        let kind = if shot.headshot { DeathKind::Headshot } else { DeathKind::Default };
        debug!("{} killed {} ({:?})", shot.attacker, shot.victim, kind);
        self.world.mark_dead(shot.victim, DEPLOY_SCREEN_TICKS);
        self.session
            .on_player_earned_kill(&mut self.world, shot.attacker, shot.victim, kind);
        if let Some(assist) = health.assist_for(shot.attacker) {
            self.session.on_player_earned_kill_assist(&mut self.world, assist);
        }
        self.session.on_player_undeploy(&mut self.world, shot.victim);
    }

    /// Tick until the match closes or `max_ticks` have run.
    pub fn run_to_close(&mut self, max_ticks: u64) -> MatchSummary {
        self.start();
        let mut ticks = 0;
        while !self.is_closed() && ticks < max_ticks {
            self.tick();
            ticks += 1;
        }
        self.session.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdm::EndReason;

    fn quick_config() -> MatchConfig {
        MatchConfig {
            score: 5,
            time_limit: 120,
            freeze_time: 1,
            progress_stage_early: 2,
            progress_stage_mid: 3,
            progress_stage_late: 4,
            ..Default::default()
        }
    }

    fn small_arena() -> ArenaSetup {
        ArenaSetup {
            bots_per_team: 3,
            spawn_points: 6,
            arena_radius: 15.0,
        }
    }

    #[test]
    fn test_start_registers_markers_and_locks_warmup() {
        let mut game = ArenaMatch::new(quick_config(), small_arena(), 3).unwrap();
        game.start();
        assert_eq!(game.session().spawns().len(), 6);
        assert_eq!(game.world().player_ids().len(), 6);
        assert_eq!(game.session().phase(), Phase::Warmup);

        game.tick();
        assert_eq!(game.world().input_locked.len(), 6);
        assert!(game.world().presentation.warmup_countdown.is_some());

        for _ in 0..TICK_RATE {
            game.tick();
        }
        assert_eq!(game.session().phase(), Phase::Active);
        assert!(game.world().input_locked.is_empty());
        assert!(game.world().presentation.warmup_countdown.is_none());
    }

    #[test]
    fn test_bot_match_plays_to_close() {
        let mut game = ArenaMatch::new(quick_config(), small_arena(), 42).unwrap();
        let summary = game.run_to_close(20_000);

        assert!(game.is_closed());
        assert_eq!(summary.phase, Phase::Ended);
        let result = summary.result.unwrap();
        let scores: Vec<u32> = summary.teams.iter().map(|t| t.score).collect();

        // Every counted kill shows up in exactly one player's row
        let kills: u32 = summary.players.iter().map(|p| p.kills).sum();
        assert_eq!(kills, scores.iter().sum::<u32>());
        let deaths: u32 = summary.players.iter().map(|p| p.deaths).sum();
        assert!(deaths >= kills);

        match result.reason {
            EndReason::ScoreLimit => assert!(scores.contains(&5)),
            EndReason::TimeExpired => assert!(scores.iter().all(|&s| s < 5)),
        }
        assert!(game.session().team_score(result.winner) >= game.session().team_score(result.loser));

        assert!(!game.world().deploy_enabled);
        assert!(game.world().presentation.score_display.is_none());
        assert_eq!(game.world().team_score(result.winner), game.session().team_score(result.winner));
    }

    #[test]
    fn test_same_seed_same_match() {
        let a = ArenaMatch::new(quick_config(), small_arena(), 7).unwrap().run_to_close(20_000);
        let b = ArenaMatch::new(quick_config(), small_arena(), 7).unwrap().run_to_close(20_000);
        assert_eq!(a.tick, b.tick);
        assert_eq!(a.result, b.result);
        let kills = |s: &MatchSummary| s.players.iter().map(|p| (p.player, p.kills)).collect::<Vec<_>>();
        assert_eq!(kills(&a), kills(&b));
    }

    #[test]
    fn test_disconnected_bot_leaves_match_and_stats() {
        let mut game = ArenaMatch::new(quick_config(), small_arena(), 9).unwrap();
        game.start();
        for _ in 0..(2 * TICK_RATE) {
            game.tick();
        }
        assert_eq!(game.session().phase(), Phase::Active);

        game.disconnect(PlayerId(1));
        assert!(game.world().player(PlayerId(1)).is_none());
        assert!(game.session().stats().get(PlayerId(1)).is_none());
        // Disconnecting twice is harmless
        game.disconnect(PlayerId(1));

        let summary = game.run_to_close(20_000);
        assert!(game.is_closed());
        assert_eq!(summary.players.len(), 5);
        assert!(summary.players.iter().all(|p| p.player != PlayerId(1)));
    }

    #[test]
    fn test_no_markers_when_discovery_disabled() {
        let config = MatchConfig { start_spawn_point_id: 0, ..quick_config() };
        let mut game = ArenaMatch::new(config, small_arena(), 1).unwrap();
        game.start();
        assert!(game.session().spawns().is_empty());
        assert_eq!(game.world().spatial_object_position(9001), Vec3::ZERO);
    }
}
