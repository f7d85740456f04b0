//! Timer-gated enemy spawning at the playfield edges

use glam::DVec2;
use rand::Rng;

use super::state::{Enemy, EntityIds};
use crate::Bounds;
use crate::config::GameConfig;

/// Playfield edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnEdge {
    Top,
    Right,
    Bottom,
    Left,
}

impl SpawnEdge {
    pub const ALL: [SpawnEdge; 4] = [
        SpawnEdge::Top,
        SpawnEdge::Right,
        SpawnEdge::Bottom,
        SpawnEdge::Left,
    ];

    /// Spawn point `offset` units outside this edge. `along` in `[0, 1)` picks
    /// the coordinate along the edge.
    pub fn position(self, along: f64, bounds: &Bounds, offset: f64) -> DVec2 {
        match self {
            SpawnEdge::Top => DVec2::new(along * bounds.width, -offset),
            SpawnEdge::Right => DVec2::new(bounds.width + offset, along * bounds.height),
            SpawnEdge::Bottom => DVec2::new(along * bounds.width, bounds.height + offset),
            SpawnEdge::Left => DVec2::new(-offset, along * bounds.height),
        }
    }
}

/// Spawns at most one enemy per interval
#[derive(Debug, Clone)]
pub struct Spawner {
    pub interval_ns: i64,
    pub last_spawn_ns: i64,
    pub edge_offset: f64,
    pub enemy_health: i32,
    pub enemy_radius: f64,
}

impl Spawner {
    /// Backdate the timer one full interval so the first check fires
    pub fn new(config: &GameConfig, now: i64) -> Self {
        Self {
            interval_ns: config.spawn_interval_ns,
            last_spawn_ns: now.saturating_sub(config.spawn_interval_ns),
            edge_offset: config.spawn_edge_offset,
            enemy_health: config.enemy_health,
            enemy_radius: config.enemy_radius,
        }
    }

    /// Restart the timer; the next spawn needs a full interval
    pub fn reset(&mut self, now: i64) {
        self.last_spawn_ns = now;
    }

    /// Inclusive: exactly one interval elapsed counts as due
    pub fn is_due(&self, now: i64) -> bool {
        now.saturating_sub(self.last_spawn_ns) >= self.interval_ns
    }

    /// Spawn one enemy if the interval has elapsed. The timer is set to `now`,
    /// so a long stall yields a single enemy rather than a backlog.
    pub fn try_spawn<R: Rng>(
        &mut self,
        now: i64,
        rng: &mut R,
        bounds: &Bounds,
        ids: &mut EntityIds,
    ) -> Option<Enemy> {
        if !self.is_due(now) {
            return None;
        }
        self.last_spawn_ns = now;

        let edge = SpawnEdge::ALL[rng.random_range(0..SpawnEdge::ALL.len())];
        let along: f64 = rng.random();
        let pos = edge.position(along, bounds, self.edge_offset);

        Some(Enemy::new(ids.next(), pos, self.enemy_health, self.enemy_radius))
    }
}
