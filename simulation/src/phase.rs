//! Match phase state machine
//!
//! `PreStart -> Warmup -> Active -> Ended`, never backwards. Freeze time and
//! the post-match grace period are deadlines in ticks, checked by `poll` on
//! every global tick instead of suspending the caller.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::components::{TeamId, TICK_RATE};
use crate::error::ModeError;

/// How long the terminal state is held before the match counts as closed.
pub const END_GRACE_SECONDS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    PreStart,
    Warmup,
    Active,
    Ended,
}

impl Phase {
    fn successor(self) -> Option<Phase> {
        match self {
            Phase::PreStart => Some(Phase::Warmup),
            Phase::Warmup => Some(Phase::Active),
            Phase::Active => Some(Phase::Ended),
            Phase::Ended => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    ScoreLimit,
    TimeExpired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: TeamId,
    pub loser: TeamId,
    pub reason: EndReason,
    /// Time ran out with level scores; `winner`/`loser` follow team order.
    pub draw: bool,
    pub ended_at_tick: u64,
}

/// Deadline-driven transitions reported by [`PhaseController::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    Activated,
    Closed,
}

#[derive(Debug, Clone)]
pub struct PhaseController {
    phase: Phase,
    warmup_until: Option<u64>,
    close_at: Option<u64>,
    closed: bool,
    result: Option<MatchResult>,
}

impl Default for PhaseController {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseController {
    pub fn new() -> Self {
        Self {
            phase: Phase::PreStart,
            warmup_until: None,
            close_at: None,
            closed: false,
            result: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn has_ended(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Grace period after the end has fully elapsed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Ticks left before warmup ends, while in warmup.
    pub fn warmup_ticks_left(&self, now: u64) -> Option<u64> {
        match (self.phase, self.warmup_until) {
            (Phase::Warmup, Some(until)) => Some(until.saturating_sub(now)),
            _ => None,
        }
    }

    fn transition(&mut self, to: Phase) -> Result<(), ModeError> {
        if self.phase.successor() != Some(to) {
            return Err(ModeError::InvalidTransition { from: self.phase, to });
        }
        info!("Match phase {:?} -> {:?}", self.phase, to);
        self.phase = to;
        Ok(())
    }

    /// Enter warmup; play begins `freeze_seconds` later.
    pub fn begin_warmup(&mut self, now: u64, freeze_seconds: u32) -> Result<(), ModeError> {
        if self.phase != Phase::PreStart {
            return Err(ModeError::AlreadyStarted(self.phase));
        }
        self.transition(Phase::Warmup)?;
        self.warmup_until = Some(now + freeze_seconds as u64 * TICK_RATE);
        Ok(())
    }

    /// Enter the terminal phase. Only legal from `Active`; a second end is rejected.
    pub fn end(&mut self, result: MatchResult) -> Result<(), ModeError> {
        self.transition(Phase::Ended)?;
        self.close_at = Some(result.ended_at_tick + END_GRACE_SECONDS * TICK_RATE);
        self.result = Some(result);
        Ok(())
    }

    /// Apply any deadline that has passed at tick `now`.
    pub fn poll(&mut self, now: u64) -> Option<PhaseEvent> {
        match self.phase {
            Phase::Warmup if self.warmup_until.is_some_and(|until| now >= until) => {
                self.transition(Phase::Active).ok()?;
                self.warmup_until = None;
                Some(PhaseEvent::Activated)
            }
            Phase::Ended if !self.closed && self.close_at.is_some_and(|at| now >= at) => {
                self.closed = true;
                info!("Match closed after grace period");
                Some(PhaseEvent::Closed)
            }
            _ => None,
        }
    }
}
