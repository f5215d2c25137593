//! Deploy Rules
//!
//! Loadout restrictions on deploy and phase-gated input locking.

use crate::components::PlayerId;
use crate::host::Host;
use crate::phase::Phase;

/// Remove every restricted gadget the player carries. Returns how many were removed.
pub fn strip_restricted_gadgets(host: &mut dyn Host, player: PlayerId, gadgets: &[String]) -> u32 {
    let mut removed = 0;
    for gadget in gadgets {
        if host.has_equipment(player, gadget) {
            host.remove_equipment(player, gadget);
            removed += 1;
        }
    }
    removed
}

/// Living players are input-locked outside active play.
pub fn input_restricted(phase: Phase) -> bool {
    phase != Phase::Active
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::testing::RecordingHost;

    #[test]
    fn test_strips_only_restricted_gadgets() {
        let config = MatchConfig::default();
        let mut host = RecordingHost::default();
        let p = PlayerId(4);
        host.give(p, "Deployable_Cover");
        host.give(p, "Launcher_Long_Range");
        host.give(p, "Medkit");

        assert_eq!(strip_restricted_gadgets(&mut host, p, &config.restricted_gadgets), 2);
        assert_eq!(host.equipment[&p], vec!["Medkit".to_string()]);
    }

    #[test]
    fn test_input_gate() {
        assert!(input_restricted(Phase::PreStart));
        assert!(input_restricted(Phase::Warmup));
        assert!(!input_restricted(Phase::Active));
        assert!(input_restricted(Phase::Ended));
    }
}
