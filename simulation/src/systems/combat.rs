//! Combat Rules
//!
//! Which kills count, and the close-range bonus damage for snipers.

use crate::components::{DamageKind, DeathKind, PlayerId};
use crate::config::MatchConfig;
use crate::host::Host;

/// Whether a kill event awards anything.
/// Suicides and deaths from leaving, drowning or redeploying never do.
pub fn kill_counts(killer: PlayerId, victim: PlayerId, kind: DeathKind) -> bool {
    killer != victim && !kind.is_non_scoring()
}

/// Extra damage owed to `victim` for a sniper hit inside the bonus range.
pub fn sniper_bonus(
    host: &dyn Host,
    config: &MatchConfig,
    victim: PlayerId,
    attacker: PlayerId,
    kind: DamageKind,
) -> Option<f32> {
    if kind != DamageKind::Default || !host.is_primary_slot_active(attacker) {
        return None;
    }

    let has_sniper = config
        .sniper_weapons
        .iter()
        .any(|weapon| host.has_equipment(attacker, weapon));
    if !has_sniper {
        return None;
    }

    let victim_at = host.player(victim)?.position;
    let attacker_at = host.player(attacker)?.position;
    let distance = victim_at.distance(attacker_at).trunc() as u32;

    (distance <= config.sniper_max_distance_to_hit_kill).then_some(config.sniper_additional_damage)
}
