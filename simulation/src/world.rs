//! Match Session - owns all per-match state and implements the host hooks
//!
//! One `MatchSession` per match. The host calls the hooks serially; each hook
//! runs to completion and never suspends.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::components::{Cue, DamageKind, DeathKind, PlayerId, Sfx, TeamId};
use crate::config::MatchConfig;
use crate::error::ModeError;
use crate::host::Host;
use crate::phase::{EndReason, MatchResult, Phase, PhaseController, PhaseEvent};
use crate::progress::ProgressStager;
use crate::spawns::{select_spawn, SpawnRegistry};
use crate::stats::StatsStore;
use crate::systems;
use crate::timer::{self, TimeCues};

/// Kill totals for the two teams. Written only by the kill pipeline.
#[derive(Debug, Clone)]
pub struct TeamScores {
    teams: [TeamId; 2],
    scores: [u32; 2],
}

impl TeamScores {
    pub fn new(teams: [TeamId; 2]) -> Self {
        Self { teams, scores: [0, 0] }
    }

    fn index(&self, team: TeamId) -> Option<usize> {
        self.teams.iter().position(|&t| t == team)
    }

    pub fn get(&self, team: TeamId) -> u32 {
        self.index(team).map(|i| self.scores[i]).unwrap_or(0)
    }

    /// Add one kill and return the new total. Unknown teams never score.
    fn add_kill(&mut self, team: TeamId) -> Option<u32> {
        let i = self.index(team)?;
        self.scores[i] += 1;
        Some(self.scores[i])
    }

    pub fn pairs(&self) -> [(TeamId, u32); 2] {
        [(self.teams[0], self.scores[0]), (self.teams[1], self.scores[1])]
    }
}

/// What happened during one global tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    pub tick: u64,
    pub phase: Phase,
    pub remaining: u32,
    pub activated: bool,
    pub ended: bool,
    pub closed: bool,
}

pub struct MatchSession {
    config: MatchConfig,
    tick: u64,
    phase: PhaseController,
    time_cues: TimeCues,
    stager: ProgressStager,
    scores: TeamScores,
    stats: StatsStore,
    spawns: SpawnRegistry,
    rng: StdRng,
    pub(crate) started_at: Option<DateTime<Utc>>,
    pub(crate) ended_at: Option<DateTime<Utc>>,
}

impl MatchSession {
    pub fn new(config: MatchConfig) -> Result<Self, ModeError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Session with a fixed RNG seed, for reproducible tests and benchmarks.
    pub fn with_seed(config: MatchConfig, seed: u64) -> Result<Self, ModeError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: MatchConfig, rng: StdRng) -> Result<Self, ModeError> {
        config.validate()?;
        Ok(Self {
            stager: ProgressStager::new(&config),
            scores: TeamScores::new(config.teams()),
            config,
            tick: 0,
            phase: PhaseController::new(),
            time_cues: TimeCues::default(),
            stats: StatsStore::new(),
            spawns: SpawnRegistry::default(),
            rng,
            started_at: None,
            ended_at: None,
        })
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn phase(&self) -> Phase {
        self.phase.phase()
    }

    pub fn is_closed(&self) -> bool {
        self.phase.is_closed()
    }

    pub fn result(&self) -> Option<&MatchResult> {
        self.phase.result()
    }

    pub fn team_score(&self, team: TeamId) -> u32 {
        self.scores.get(team)
    }

    pub fn scores(&self) -> &TeamScores {
        &self.scores
    }

    pub fn stats(&self) -> &StatsStore {
        &self.stats
    }

    pub fn spawns(&self) -> &SpawnRegistry {
        &self.spawns
    }

    pub fn leader(&self) -> Option<TeamId> {
        self.stager.leader()
    }

    // ------------------------------------------------------------------------
    // Lifecycle hooks
    // ------------------------------------------------------------------------

    /// Match start: capture spawns, build the displays, hand limits to the host
    /// and enter warmup. Play begins once freeze time has elapsed.
    pub fn on_game_mode_started(&mut self, host: &mut dyn Host) {
        if self.phase.phase() != Phase::PreStart {
            warn!("Start hook called again in phase {:?}, ignoring", self.phase.phase());
            return;
        }

        self.spawns = SpawnRegistry::discover(host, self.config.start_spawn_point_id);
        info!("Registered {} spawn points", self.spawns.len());

        host.create_score_display(self.config.score);
        host.update_score_display(0, 0);
        host.create_warmup_countdown(self.config.freeze_time);

        host.set_target_score(self.config.score);
        host.set_time_limit(self.config.host_time_limit());

        host.setup_scoreboard();
        for player in host.players() {
            if let Some(stats) = self.stats.get(player.id) {
                host.update_scoreboard_row(player.id, &stats.scoreboard_row());
            }
        }

        if let Err(e) = self.phase.begin_warmup(self.tick, self.config.freeze_time) {
            warn!("Could not enter warmup: {}", e);
            return;
        }
        self.started_at = Some(Utc::now());
        info!(
            "Match started: first to {}, {}s + {}s freeze",
            self.config.score, self.config.time_limit, self.config.freeze_time
        );
    }

    /// Global per-tick hook: deadlines, timer readout, time cues and the
    /// time-expiry end.
    pub fn ongoing_global(&mut self, host: &mut dyn Host) -> TickResult {
        self.tick += 1;

        let event = self.phase.poll(self.tick);
        if event == Some(PhaseEvent::Activated) {
            host.play_cue(Cue::RoundStartGeneric, None);
            host.remove_warmup_countdown();
        }

        let remaining = host.time_remaining();
        let mut ended = false;

        match self.phase.phase() {
            Phase::Warmup | Phase::Active => {
                let millis = timer::synthetic_millis(self.tick, &mut self.rng);

                if let Some(ticks_left) = self.phase.warmup_ticks_left(self.tick) {
                    let (seconds, millis) = timer::warmup_countdown(ticks_left, millis);
                    host.update_warmup_countdown(seconds, millis);
                }

                if let Some(cue) = self.time_cues.check(remaining) {
                    host.play_cue(cue, None);
                }

                // The expiry tick only ends the match; the end removes the timer display
                if remaining == 0 && self.phase.is_active() {
                    self.end_on_time(host);
                    ended = true;
                } else {
                    host.update_timer_display(&timer::readout(remaining, millis));
                    if timer::low_time_pulse(remaining, self.tick) {
                        host.play_sfx(Sfx::LowTimeWarning);
                    }
                }
            }
            Phase::PreStart | Phase::Ended => {}
        }

        TickResult {
            tick: self.tick,
            phase: self.phase.phase(),
            remaining,
            activated: event == Some(PhaseEvent::Activated),
            ended,
            closed: event == Some(PhaseEvent::Closed),
        }
    }

    /// Per-player tick hook: living players are input-locked outside active play.
    pub fn ongoing_player(&mut self, host: &mut dyn Host, player: PlayerId) {
        let Some(snapshot) = host.player(player) else {
            return;
        };
        if snapshot.alive {
            host.set_input_restricted(player, systems::input_restricted(self.phase.phase()));
        }
    }

    // ------------------------------------------------------------------------
    // Player hooks
    // ------------------------------------------------------------------------

    pub fn on_player_join(&mut self, host: &mut dyn Host, player: PlayerId) {
        host.set_redeploy_time(player, 0);
        let row = self.stats.on_join(player).scoreboard_row();
        host.update_scoreboard_row(player, &row);
        debug!("{} joined", player);
    }

    pub fn on_player_leave(&mut self, player: PlayerId) {
        if self.stats.on_leave(player).is_none() {
            debug!("{} left without a stats record", player);
        }
    }

    /// Send a freshly deployed player to a fair spawn and strip restricted gadgets.
    pub fn on_player_deployed(&mut self, host: &mut dyn Host, player: PlayerId) {
        if !self.phase.is_active() {
            return;
        }

        let players = host.players();
        let Some(team) = players.iter().find(|p| p.id == player).map(|p| p.team) else {
            warn!("Deploy for unknown {}", player);
            return;
        };

        if let Some(point) = select_spawn(&self.spawns, team, &players, &mut self.rng) {
            host.teleport(player, point);
        }

        let removed = systems::strip_restricted_gadgets(host, player, &self.config.restricted_gadgets);
        if removed > 0 {
            debug!("Removed {} restricted gadgets from {}", removed, player);
        }
    }

    pub fn on_player_damaged(
        &mut self,
        host: &mut dyn Host,
        victim: PlayerId,
        attacker: PlayerId,
        kind: DamageKind,
    ) {
        if let Some(bonus) = systems::sniper_bonus(host, &self.config, victim, attacker, kind) {
            host.deal_damage(victim, bonus, attacker);
        }
    }

    pub fn on_player_earned_kill(
        &mut self,
        host: &mut dyn Host,
        killer: PlayerId,
        victim: PlayerId,
        kind: DeathKind,
    ) {
        if let Err(e) = self.apply_kill(host, killer, victim, kind) {
            warn!("Kill by {} on {} dropped: {}", killer, victim, e);
        }
    }

    pub fn on_player_earned_kill_assist(&mut self, host: &mut dyn Host, player: PlayerId) {
        match self.stats.on_assist(player) {
            Ok(stats) => host.update_scoreboard_row(player, &stats.scoreboard_row()),
            Err(e) => warn!("Assist dropped: {}", e),
        }
    }

    pub fn on_player_undeploy(&mut self, host: &mut dyn Host, player: PlayerId) {
        match self.stats.on_death(player) {
            Ok(stats) => host.update_scoreboard_row(player, &stats.scoreboard_row()),
            Err(e) => warn!("Death dropped: {}", e),
        }
    }

    // ------------------------------------------------------------------------
    // Pipelines
    // ------------------------------------------------------------------------

    /// Apply a kill, then evaluate the win condition, then progress commentary.
    fn apply_kill(
        &mut self,
        host: &mut dyn Host,
        killer: PlayerId,
        victim: PlayerId,
        kind: DeathKind,
    ) -> Result<(), ModeError> {
        if !systems::kill_counts(killer, victim, kind) {
            debug!("Ignoring {:?} kill by {} on {}", kind, killer, victim);
            return Ok(());
        }
        if !self.phase.is_active() {
            debug!("Ignoring kill by {} in phase {:?}", killer, self.phase.phase());
            return Ok(());
        }

        let team = host.player(killer).ok_or(ModeError::UnknownPlayer(killer))?.team;
        let other = self.config.opponent_of(team);

        let row = self.stats.on_kill(killer, kind == DeathKind::Headshot)?.scoreboard_row();
        host.update_scoreboard_row(killer, &row);

        let Some(score) = self.scores.add_kill(team) else {
            warn!("{} is on {} which is not playing", killer, team);
            return Ok(());
        };
        host.set_team_score(team, score);
        let [(_, first), (_, second)] = self.scores.pairs();
        host.update_score_display(first, second);

        if score >= self.config.score {
            self.end_match(host, team, other, EndReason::ScoreLimit, false);
        } else {
            let [a, b] = self.scores.pairs();
            for play in self.stager.on_score(a, b) {
                host.play_cue(play.cue, play.team);
            }
        }
        Ok(())
    }

    fn end_on_time(&mut self, host: &mut dyn Host) {
        let [(a, a_score), (b, b_score)] = self.scores.pairs();
        let (winner, loser) = if b_score > a_score { (b, a) } else { (a, b) };
        self.end_match(host, winner, loser, EndReason::TimeExpired, a_score == b_score);
    }

    /// Enter the terminal phase. Repeated triggers are ignored.
    fn end_match(
        &mut self,
        host: &mut dyn Host,
        winner: TeamId,
        loser: TeamId,
        reason: EndReason,
        draw: bool,
    ) {
        let result = MatchResult { winner, loser, reason, draw, ended_at_tick: self.tick };
        if let Err(e) = self.phase.end(result) {
            warn!("Ignoring repeated match end ({:?}): {}", reason, e);
            return;
        }

        host.remove_score_display();
        host.enable_all_deploy(false);
        self.ended_at = Some(Utc::now());

        info!(
            "Match ended ({:?}): {} {} - {} {}{}",
            reason,
            winner,
            self.scores.get(winner),
            self.scores.get(loser),
            loser,
            if draw { " (draw)" } else { "" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{CuePlay, TICK_RATE};
    use crate::phase::END_GRACE_SECONDS;
    use crate::testing::RecordingHost;
    use glam::Vec3;

    const T1: TeamId = TeamId(1);
    const T2: TeamId = TeamId(2);

    fn small_config() -> MatchConfig {
        MatchConfig {
            score: 6,
            time_limit: 600,
            freeze_time: 2,
            progress_stage_early: 2,
            progress_stage_mid: 3,
            progress_stage_late: 5,
            ..Default::default()
        }
    }

    /// Two players per team, spawn markers at 9001.., match started.
    fn setup(config: MatchConfig) -> (MatchSession, RecordingHost) {
        let mut host = RecordingHost { remaining: 600, ..Default::default() };
        host.markers.insert(9001, Vec3::new(0.0, 1.0, 0.0));
        host.markers.insert(9002, Vec3::new(100.0, 1.0, 0.0));
        host.add_player(1, 1, Vec3::new(0.0, 0.0, 0.0));
        host.add_player(2, 1, Vec3::new(1.0, 0.0, 0.0));
        host.add_player(3, 2, Vec3::new(90.0, 0.0, 0.0));
        host.add_player(4, 2, Vec3::new(95.0, 0.0, 0.0));

        let mut session = MatchSession::with_seed(config, 11).unwrap();
        for id in 1..=4 {
            session.on_player_join(&mut host, PlayerId(id));
        }
        session.on_game_mode_started(&mut host);
        (session, host)
    }

    fn activate(session: &mut MatchSession, host: &mut RecordingHost) {
        while session.phase() != Phase::Active {
            session.ongoing_global(host);
        }
    }

    fn kill(session: &mut MatchSession, host: &mut RecordingHost, killer: u32, victim: u32) {
        session.on_player_earned_kill(host, PlayerId(killer), PlayerId(victim), DeathKind::Default);
    }

    #[test]
    fn test_start_hook_sets_up_host() {
        let (session, host) = setup(small_config());
        assert_eq!(session.phase(), Phase::Warmup);
        assert_eq!(session.spawns().len(), 2);
        assert_eq!(host.target_score, Some(6));
        assert_eq!(host.time_limit, Some(602));
        assert!(host.scoreboard_ready);
        assert!(host.score_display_visible);
        assert!(host.warmup_visible);
        assert_eq!(host.rows.len(), 4);
        assert_eq!(host.redeploy_times[&PlayerId(1)], 0);
    }

    #[test]
    fn test_second_start_is_ignored() {
        let (mut session, mut host) = setup(small_config());
        host.markers.insert(9003, Vec3::new(5.0, 5.0, 5.0));
        session.on_game_mode_started(&mut host);
        assert_eq!(session.spawns().len(), 2);
        assert_eq!(session.phase(), Phase::Warmup);
    }

    #[test]
    fn test_warmup_then_active_after_freeze_time() {
        let (mut session, mut host) = setup(small_config());

        for _ in 0..(2 * TICK_RATE - 1) {
            let r = session.ongoing_global(&mut host);
            assert_eq!(r.phase, Phase::Warmup);
        }
        assert!(host.warmup_countdown.is_some());

        let r = session.ongoing_global(&mut host);
        assert!(r.activated);
        assert_eq!(r.phase, Phase::Active);
        assert_eq!(host.played(Cue::RoundStartGeneric), 1);
        assert!(!host.warmup_visible);
    }

    #[test]
    fn test_input_locked_outside_active() {
        let (mut session, mut host) = setup(small_config());
        session.ongoing_player(&mut host, PlayerId(1));
        assert_eq!(host.input_restricted[&PlayerId(1)], true);

        activate(&mut session, &mut host);
        session.ongoing_player(&mut host, PlayerId(1));
        assert_eq!(host.input_restricted[&PlayerId(1)], false);

        // Dead players are left alone
        host.players[1].alive = false;
        session.ongoing_player(&mut host, PlayerId(2));
        assert!(!host.input_restricted.contains_key(&PlayerId(2)));
    }

    #[test]
    fn test_kills_before_active_are_ignored() {
        let (mut session, mut host) = setup(small_config());
        kill(&mut session, &mut host, 1, 3);
        assert_eq!(session.team_score(T1), 0);
        assert_eq!(session.stats().get(PlayerId(1)).unwrap().kills, 0);
    }

    #[test]
    fn test_kill_pipeline_updates_stats_score_and_cues() {
        let (mut session, mut host) = setup(small_config());
        activate(&mut session, &mut host);

        session.on_player_earned_kill(&mut host, PlayerId(1), PlayerId(3), DeathKind::Headshot);
        session.on_player_earned_kill_assist(&mut host, PlayerId(2));
        session.on_player_undeploy(&mut host, PlayerId(3));

        assert_eq!(session.team_score(T1), 1);
        assert_eq!(host.team_scores[&T1], 1);
        assert_eq!(host.score_display, Some((1, 0)));

        let row = host.rows[&PlayerId(1)];
        assert_eq!((row.kills, row.headshot_percent, row.kd_scaled), (1, 100, 1000));
        assert_eq!(host.rows[&PlayerId(2)].assists, 1);
        assert_eq!(host.rows[&PlayerId(3)].deaths, 1);

        // First lead announced
        assert!(host.cues.contains(&CuePlay::to_team(Cue::ProgressMidWinning, T1)));
        assert_eq!(session.leader(), Some(T1));

        // Stage at 2 fires its own cue pair instead
        kill(&mut session, &mut host, 2, 4);
        assert!(host.cues.contains(&CuePlay::to_team(Cue::ProgressEarlyWinning, T1)));
        assert!(host.cues.contains(&CuePlay::to_team(Cue::ProgressEarlyLosing, T2)));
    }

    #[test]
    fn test_self_kills_and_non_scoring_deaths_ignored() {
        let (mut session, mut host) = setup(small_config());
        activate(&mut session, &mut host);

        kill(&mut session, &mut host, 1, 1);
        session.on_player_earned_kill(&mut host, PlayerId(1), PlayerId(3), DeathKind::Drowning);
        assert_eq!(session.team_score(T1), 0);
        assert_eq!(session.stats().get(PlayerId(1)).unwrap().kills, 0);
    }

    #[test]
    fn test_kill_by_unregistered_player_is_a_no_op() {
        let (mut session, mut host) = setup(small_config());
        activate(&mut session, &mut host);

        session.on_player_leave(PlayerId(1));
        kill(&mut session, &mut host, 1, 3);
        assert_eq!(session.team_score(T1), 0);
        assert!(session.stats().get(PlayerId(1)).is_none());

        // Rejoin restores scoring
        session.on_player_join(&mut host, PlayerId(1));
        kill(&mut session, &mut host, 1, 3);
        assert_eq!(session.team_score(T1), 1);
    }

    #[test]
    fn test_score_limit_ends_match_once() {
        let (mut session, mut host) = setup(small_config());
        activate(&mut session, &mut host);

        for _ in 0..6 {
            kill(&mut session, &mut host, 3, 1);
        }
        assert_eq!(session.phase(), Phase::Ended);
        let result = *session.result().unwrap();
        assert_eq!((result.winner, result.loser), (T2, T1));
        assert_eq!(result.reason, EndReason::ScoreLimit);
        assert_eq!(host.deploy_enabled, Some(false));
        assert!(!host.score_display_visible);

        // Further kills do not score and time expiry does not end again
        kill(&mut session, &mut host, 3, 1);
        assert_eq!(session.team_score(T2), 6);
        host.remaining = 0;
        for _ in 0..40 {
            session.ongoing_global(&mut host);
        }
        assert_eq!(host.score_display_removals, 1);
        assert_eq!(host.deploy_toggles, 1);
        assert_eq!(session.result().unwrap().reason, EndReason::ScoreLimit);
    }

    #[test]
    fn test_time_expiry_ends_with_leader_as_winner() {
        let (mut session, mut host) = setup(small_config());
        activate(&mut session, &mut host);
        kill(&mut session, &mut host, 3, 1);

        host.remaining = 0;
        let r = session.ongoing_global(&mut host);
        assert!(r.ended);
        let result = session.result().unwrap();
        assert_eq!(result.winner, T2);
        assert_eq!(result.reason, EndReason::TimeExpired);
        assert!(!result.draw);

        // Exactly once, regardless of the tick phase
        for _ in 0..60 {
            assert!(!session.ongoing_global(&mut host).ended);
        }
        assert_eq!(host.deploy_toggles, 1);
    }

    #[test]
    fn test_time_expiry_with_level_scores_is_a_draw() {
        let (mut session, mut host) = setup(small_config());
        activate(&mut session, &mut host);
        host.remaining = 0;
        session.ongoing_global(&mut host);
        let result = session.result().unwrap();
        assert!(result.draw);
        assert_eq!((result.winner, result.loser), (T1, T2));
    }

    #[test]
    fn test_closes_after_grace_period() {
        let (mut session, mut host) = setup(small_config());
        activate(&mut session, &mut host);
        host.remaining = 0;
        session.ongoing_global(&mut host);
        assert!(!session.is_closed());

        let mut closed_events = 0;
        for _ in 0..(END_GRACE_SECONDS * TICK_RATE) {
            if session.ongoing_global(&mut host).closed {
                closed_events += 1;
            }
        }
        assert!(session.is_closed());
        assert_eq!(closed_events, 1);
    }

    #[test]
    fn test_time_cues_and_pulse() {
        let (mut session, mut host) = setup(small_config());
        activate(&mut session, &mut host);

        host.remaining = 119;
        session.ongoing_global(&mut host);
        host.remaining = 59;
        session.ongoing_global(&mut host);
        host.remaining = 29;
        session.ongoing_global(&mut host);
        assert_eq!(host.played(Cue::Time120Left), 1);
        assert_eq!(host.played(Cue::Time60Left), 1);
        assert_eq!(host.played(Cue::Time30Left), 1);

        host.remaining = 15;
        for _ in 0..(3 * TICK_RATE) {
            session.ongoing_global(&mut host);
        }
        assert_eq!(host.sfx.len(), 3);
        assert_eq!(host.played(Cue::Time30Left), 1);
        assert_eq!(host.timer.unwrap().format, crate::components::TimerFormat::SecondsMillis);
    }

    #[test]
    fn test_deploy_teleports_away_from_enemies_and_strips_gadgets() {
        let (mut session, mut host) = setup(small_config());

        // No teleport before play starts
        session.on_player_deployed(&mut host, PlayerId(1));
        assert!(host.teleports.is_empty());

        activate(&mut session, &mut host);
        host.give(PlayerId(1), "Deployable_Cover");
        for _ in 0..20 {
            session.on_player_deployed(&mut host, PlayerId(1));
        }
        // Enemies stand near x=90..95, so only the marker at the origin qualifies
        assert!(host.teleports.iter().all(|&(_, p)| p == Vec3::new(0.0, 1.0, 0.0)));
        assert!(!host.has_equipment(PlayerId(1), "Deployable_Cover"));
    }

    #[test]
    fn test_deploy_without_spawns_keeps_default_spawn() {
        let mut host = RecordingHost { remaining: 600, ..Default::default() };
        host.add_player(1, 1, Vec3::ZERO);
        let mut session = MatchSession::with_seed(small_config(), 1).unwrap();
        session.on_player_join(&mut host, PlayerId(1));
        session.on_game_mode_started(&mut host);
        activate(&mut session, &mut host);

        session.on_player_deployed(&mut host, PlayerId(1));
        assert!(host.teleports.is_empty());
    }

    #[test]
    fn test_sniper_bonus_applied_through_hook() {
        let (mut session, mut host) = setup(small_config());
        host.give(PlayerId(3), "Sniper_SV_98");
        host.primary_active.insert(PlayerId(3));
        session.on_player_damaged(&mut host, PlayerId(4), PlayerId(3), DamageKind::Default);
        assert_eq!(host.damage, vec![(PlayerId(4), 100.0, PlayerId(3))]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MatchConfig { progress_stage_mid: 1, ..small_config() };
        assert!(matches!(MatchSession::new(config), Err(ModeError::Config(_))));

        let config = MatchConfig { time_limit: u32::MAX, freeze_time: 5, ..small_config() };
        assert!(matches!(MatchSession::with_seed(config, 1), Err(ModeError::Config(_))));
    }
}
