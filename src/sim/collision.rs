//! Collision detection and combat resolution
//!
//! Everything here is circle geometry. Removals are decided over a stable
//! view of the tick first and applied with `retain` afterwards, so nothing
//! is removed from a collection while it is being scanned.

use glam::DVec2;

use super::state::{Enemy, Projectile, Walker};
use crate::Bounds;

/// Strict point-in-circle test (a point on the rim is outside)
#[inline]
pub fn point_in_circle(center: DVec2, radius: f64, point: DVec2) -> bool {
    center.distance(point) < radius
}

/// Strict circle-circle overlap (touching circles do not overlap)
#[inline]
pub fn circles_overlap(a: DVec2, ra: f64, b: DVec2, rb: f64) -> bool {
    a.distance(b) < ra + rb
}

/// A single projectile striking an enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub enemy_id: u32,
    pub projectile_id: u32,
    /// Enemy health after the hit
    pub health: i32,
    pub killed: bool,
}

/// Outcome of one resolution pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitReport {
    /// Hits in resolution order (enemy order)
    pub hits: Vec<Hit>,
}

impl HitReport {
    pub fn kills(&self) -> u64 {
        self.hits.iter().filter(|h| h.killed).count() as u64
    }

    pub fn killed_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.hits.iter().filter(|h| h.killed).map(|h| h.enemy_id)
    }
}

/// Drop projectiles whose center left the bounds grown by their radius.
/// Returns how many were removed.
pub fn prune_projectiles(projectiles: &mut Vec<Projectile>, bounds: &Bounds) -> usize {
    let before = projectiles.len();
    projectiles.retain(|p| p.in_bounds(bounds));
    before - projectiles.len()
}

/// Resolve projectile hits against enemies.
///
/// Enemies are the outer loop. Each enemy takes the first live projectile
/// (in firing order) whose center lies inside it, and at most one per tick.
/// A consumed projectile is gone for every later enemy. Hit projectiles and
/// dead enemies are removed when the pass completes.
pub fn resolve_projectile_hits(
    enemies: &mut Vec<Enemy>,
    projectiles: &mut Vec<Projectile>,
    damage: i32,
) -> HitReport {
    let mut consumed = vec![false; projectiles.len()];
    let mut report = HitReport::default();

    for enemy in enemies.iter_mut() {
        let found = projectiles
            .iter()
            .enumerate()
            .find(|(i, p)| !consumed[*i] && point_in_circle(enemy.pos, enemy.radius, p.pos));

        if let Some((i, projectile)) = found {
            consumed[i] = true;
            let killed = enemy.apply_damage(damage);
            report.hits.push(Hit {
                enemy_id: enemy.id,
                projectile_id: projectile.id,
                health: enemy.health,
                killed,
            });
        }
    }

    if !report.hits.is_empty() {
        let mut index = 0;
        projectiles.retain(|_| {
            let keep = !consumed[index];
            index += 1;
            keep
        });
        enemies.retain(|e| !e.is_dead());
    }

    report
}

/// First enemy (in spawn order) overlapping the walker
pub fn find_player_collision<'a>(walker: &Walker, enemies: &'a [Enemy]) -> Option<&'a Enemy> {
    enemies
        .iter()
        .find(|e| circles_overlap(walker.pos, walker.radius, e.pos, e.radius))
}
