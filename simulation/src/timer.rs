//! Match timer readout and time-remaining cues
//!
//! The host only reports whole seconds. Milliseconds shown in the final
//! minute are synthesised from the tick counter and are display-only.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::{Cue, TimerColor, TimerFormat, TimerReadout, TICK_RATE};

const CRITICAL_BELOW: u32 = 60;
const WARNING_BELOW: u32 = 120;
const PULSE_AT_OR_BELOW: u32 = 20;
const WARMUP_MILLIS_AT_OR_BELOW: u32 = 5;

/// Milliseconds shown next to seconds: counts down across one synthetic second.
pub fn synthetic_millis<R: Rng + ?Sized>(tick: u64, rng: &mut R) -> u32 {
    let phase = (tick % TICK_RATE) as u32;
    1000 - phase * 30 + rng.gen_range(0..10)
}

pub fn readout(remaining: u32, millis: u32) -> TimerReadout {
    let minutes = remaining / 60;
    let seconds = remaining % 60;

    let (color, format) = if remaining < CRITICAL_BELOW {
        (TimerColor::Critical, TimerFormat::SecondsMillis)
    } else {
        let color = if remaining < WARNING_BELOW { TimerColor::Warning } else { TimerColor::Normal };
        (color, TimerFormat::MinutesSeconds { padded: seconds < 10 })
    };

    TimerReadout { remaining, minutes, seconds, millis, color, format }
}

/// Warning beep once per synthetic second in the last twenty seconds.
pub fn low_time_pulse(remaining: u32, tick: u64) -> bool {
    remaining < CRITICAL_BELOW && remaining <= PULSE_AT_OR_BELOW && tick % TICK_RATE == 0
}

/// Warmup countdown text parts: whole seconds, plus milliseconds near the end.
pub fn warmup_countdown(ticks_left: u64, millis: u32) -> (u32, Option<u32>) {
    let seconds = (ticks_left / TICK_RATE) as u32;
    if seconds > WARMUP_MILLIS_AT_OR_BELOW {
        (seconds, None)
    } else {
        (seconds, Some(millis))
    }
}

/// One-shot "time remaining" announcements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeCues {
    pub played_120: bool,
    pub played_60: bool,
    pub played_30: bool,
}

impl TimeCues {
    /// At most one announcement per tick, most distant threshold first.
    pub fn check(&mut self, remaining: u32) -> Option<Cue> {
        if remaining < 120 && !self.played_120 {
            self.played_120 = true;
            Some(Cue::Time120Left)
        } else if remaining < 60 && !self.played_60 {
            self.played_60 = true;
            Some(Cue::Time60Left)
        } else if remaining < 30 && !self.played_30 {
            self.played_30 = true;
            Some(Cue::Time30Left)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_synthetic_millis_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for tick in 0..90 {
            let ms = synthetic_millis(tick, &mut rng);
            let base = 1000 - (tick % 30) as u32 * 30;
            assert!(ms >= base && ms < base + 10);
        }
    }

    #[test]
    fn test_readout_formats() {
        let r = readout(605, 0);
        assert_eq!((r.minutes, r.seconds), (10, 5));
        assert_eq!(r.color, TimerColor::Normal);
        assert_eq!(r.format, TimerFormat::MinutesSeconds { padded: true });

        let r = readout(90, 0);
        assert_eq!(r.color, TimerColor::Warning);
        assert_eq!(r.format, TimerFormat::MinutesSeconds { padded: false });

        let r = readout(42, 730);
        assert_eq!(r.color, TimerColor::Critical);
        assert_eq!(r.format, TimerFormat::SecondsMillis);
        assert_eq!(r.text(), "42:730");
    }

    #[test]
    fn test_pulse_only_in_last_twenty_seconds_on_second_boundary() {
        assert!(low_time_pulse(20, 60));
        assert!(low_time_pulse(0, 30));
        assert!(!low_time_pulse(21, 60));
        assert!(!low_time_pulse(10, 61));
    }

    #[test]
    fn test_time_cues_fire_once_each_in_order() {
        let mut cues = TimeCues::default();
        assert_eq!(cues.check(200), None);
        // Joining late still announces every threshold, one per tick
        assert_eq!(cues.check(25), Some(Cue::Time120Left));
        assert_eq!(cues.check(25), Some(Cue::Time60Left));
        assert_eq!(cues.check(25), Some(Cue::Time30Left));
        assert_eq!(cues.check(10), None);
    }

    #[test]
    fn test_warmup_countdown() {
        assert_eq!(warmup_countdown(10 * TICK_RATE, 500), (10, None));
        assert_eq!(warmup_countdown(5 * TICK_RATE, 500), (5, Some(500)));
        assert_eq!(warmup_countdown(0, 999), (0, Some(999)));
    }
}
