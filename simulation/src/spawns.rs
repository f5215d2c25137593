//! Spawn points and fair respawn selection
//!
//! The registry is captured once from numbered map markers at match start.
//! Selection biases respawns away from living enemies while keeping enough
//! randomness that spawns cannot be predicted.

use glam::Vec3;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::components::{PlayerSnapshot, TeamId};
use crate::host::Host;

/// Stop scanning markers past this many, in case the host never reports the sentinel.
const MAX_SPAWN_MARKERS: u32 = 1024;

/// Where captured markers are parked so they are neither visible nor solid.
const MARKER_PARKING: Vec3 = Vec3::new(-100.0, -100.0, -100.0);

/// Distance reported for a spawn point when no enemy is alive.
const NO_ENEMY_DISTANCE: f32 = 999_999_999.0;

/// Points within this fraction of the best minimum-enemy-distance qualify.
const QUALIFYING_RATIO: f32 = 0.8;

#[derive(Debug, Clone, Default)]
pub struct SpawnRegistry {
    points: Vec<Vec3>,
}

impl SpawnRegistry {
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    /// Walk spatial objects `start_id, start_id + 1, ...` until the host reports
    /// a zeroed marker. Each captured marker is moved out of the play area.
    pub fn discover(host: &mut dyn Host, start_id: u32) -> Self {
        let mut points = Vec::new();
        if start_id == 0 {
            return Self { points };
        }

        for offset in 0..MAX_SPAWN_MARKERS {
            let Some(id) = start_id.checked_add(offset) else {
                break;
            };
            let position = host.spatial_object_position(id);
            // Unknown ids come back as an object at the origin plane
            if position.y == 0.0 && position.z == 0.0 {
                return Self { points };
            }
            points.push(position);
            host.move_spatial_object(id, MARKER_PARKING);
        }

        warn!(
            "Spawn marker scan hit the cap of {} markers starting at {}",
            MAX_SPAWN_MARKERS, start_id
        );
        Self { points }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Distance from `point` to the closest living player not on `team`.
fn nearest_enemy_distance(point: Vec3, team: TeamId, players: &[PlayerSnapshot]) -> f32 {
    players
        .iter()
        .filter(|p| p.alive && p.team != team)
        .map(|p| point.distance(p.position))
        .fold(NO_ENEMY_DISTANCE, f32::min)
}

/// Pick a respawn point for a player of `team`.
///
/// Every point is scored by its distance to the nearest living enemy; one of
/// the points scoring at least 80% of the best score is returned at random.
/// Returns `None` only when the registry is empty.
pub fn select_spawn<R: Rng + ?Sized>(
    registry: &SpawnRegistry,
    team: TeamId,
    players: &[PlayerSnapshot],
    rng: &mut R,
) -> Option<Vec3> {
    let first = *registry.points.first()?;

    let scored: Vec<(Vec3, f32)> = registry
        .points
        .iter()
        .map(|&point| (point, nearest_enemy_distance(point, team, players)))
        .collect();

    let furthest = scored.iter().map(|&(_, d)| d).fold(0.0, f32::max);
    let threshold = furthest * QUALIFYING_RATIO;

    let qualifying: Vec<Vec3> = scored
        .iter()
        .filter(|&&(_, d)| d >= threshold)
        .map(|&(point, _)| point)
        .collect();

    match qualifying.choose(rng) {
        Some(&point) => {
            debug!(
                "Spawn for {}: {} of {} points qualify (best {:.1})",
                team,
                qualifying.len(),
                scored.len(),
                furthest
            );
            Some(point)
        }
        None => Some(first),
    }
}
