//! Bot Systems
//!
//! Crude soldier behaviour so matches play themselves: drift around the map
//! and trade shots with the nearest visible enemy.

use std::collections::HashSet;

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_distr::StandardNormal;
use tdm::{PlayerId, TeamId};

use crate::world::{Alive, Loadout, Position, Soldier};

/// Metres moved per tick, standard deviation
const STEP_SIGMA: f32 = 0.4;

/// Chance per tick that a soldier lands a hit on an enemy standing next to it
const POINT_BLANK_HIT_CHANCE: f64 = 0.04;

/// Hit chance halves every this many metres
const HIT_FALLOFF_METRES: f32 = 30.0;

const BODY_DAMAGE: f32 = 25.0;
const HEADSHOT_DAMAGE: f32 = 60.0;
const HEADSHOT_CHANCE: f64 = 0.15;

/// A landed hit, resolved by the match loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub attacker: PlayerId,
    pub victim: PlayerId,
    pub damage: f32,
    pub headshot: bool,
}

/// Random walk for every alive, unlocked soldier, kept inside `radius`.
pub fn movement_system<R: Rng + ?Sized>(
    world: &mut World,
    locked: &HashSet<PlayerId>,
    radius: f32,
    rng: &mut R,
) {
    for (_, (soldier, position)) in world.query_mut::<(&Soldier, &mut Position)>().with::<&Alive>() {
        if locked.contains(&soldier.id) {
            continue;
        }
        let dx: f32 = rng.sample(StandardNormal);
        let dz: f32 = rng.sample(StandardNormal);
        let delta = Vec3::new(dx, 0.0, dz) * STEP_SIGMA;
        let next = position.0 + delta;
        let flat = Vec3::new(next.x, 0.0, next.z);
        position.0 = if flat.length() > radius {
            let clamped = flat.normalize() * radius;
            Vec3::new(clamped.x, next.y, clamped.z)
        } else {
            next
        };
    }
}

fn hit_chance(distance: f32) -> f64 {
    POINT_BLANK_HIT_CHANCE * 0.5f64.powf((distance / HIT_FALLOFF_METRES) as f64)
}

/// Every alive, unlocked soldier takes a shot at its nearest living enemy.
pub fn engagement_system<R: Rng + ?Sized>(
    world: &World,
    locked: &HashSet<PlayerId>,
    rng: &mut R,
) -> Vec<Shot> {
    let alive: Vec<(PlayerId, TeamId, Vec3)> = world
        .query::<(&Soldier, &Position)>()
        .with::<&Alive>()
        .iter()
        .map(|(_, (soldier, position))| (soldier.id, soldier.team, position.0))
        .collect();

    let mut shots = Vec::new();
    for &(attacker, team, at) in &alive {
        if locked.contains(&attacker) {
            continue;
        }

        let target = alive
            .iter()
            .filter(|(_, other_team, _)| *other_team != team)
            .map(|&(id, _, pos)| (id, at.distance(pos)))
            .min_by(|a, b| a.1.total_cmp(&b.1));

        let Some((victim, distance)) = target else {
            continue;
        };

        if rng.gen::<f64>() < hit_chance(distance) {
            let headshot = rng.gen::<f64>() < HEADSHOT_CHANCE;
            shots.push(Shot {
                attacker,
                victim,
                damage: if headshot { HEADSHOT_DAMAGE } else { BODY_DAMAGE },
                headshot,
            });
        }
    }
    shots
}

/// Random starting kit: some soldiers carry a sniper, some a restricted gadget.
pub fn random_loadout<R: Rng + ?Sized>(rng: &mut R, snipers: &[String], gadgets: &[String]) -> Loadout {
    let mut items = vec!["Rifle".to_string()];
    if !snipers.is_empty() && rng.gen_bool(0.25) {
        items.push(snipers[rng.gen_range(0..snipers.len())].clone());
    }
    if !gadgets.is_empty() && rng.gen_bool(0.3) {
        items.push(gadgets[rng.gen_range(0..gadgets.len())].clone());
    }
    Loadout { items, primary_active: true }
}
