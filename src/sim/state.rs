//! Game state and core simulation types
//!
//! Entities are plain data owned by [`GameState`]. None of them refer to
//! another; relationships (hits, overlaps) are computed fresh each tick.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawner::Spawner;
use super::vector::{VectorExt, direction};
use crate::Bounds;
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Walker was caught; waiting for restart
    GameOver,
}

/// Monotonic entity id allocator
#[derive(Debug, Clone)]
pub struct EntityIds {
    next: u32,
}

impl Default for EntityIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl EntityIds {
    pub fn next(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// The player-controlled walker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Walker {
    pub id: u32,
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
}

impl Walker {
    pub fn new(id: u32, pos: DVec2, radius: f64) -> Self {
        Self {
            id,
            pos,
            vel: DVec2::ZERO,
            radius,
        }
    }

    /// Seek steering: accelerate toward the desired velocity, bounded by
    /// `max_force` per tick, then cap the speed.
    pub fn steer_toward(&mut self, target: DVec2, max_speed: f64, max_force: f64) {
        let desired = direction(self.pos, target) * max_speed;
        let steer = (desired - self.vel).limited(max_force);
        self.vel += steer;
        self.vel.limit(max_speed);
    }

    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Clamp to the playfield edges
    pub fn check_boundaries(&mut self, bounds: &Bounds) {
        self.pos = bounds.clamp(self.pos);
    }

    /// Standing still means the walker has no heading to fire along
    pub fn is_stationary(&self) -> bool {
        self.vel == DVec2::ZERO
    }
}

/// A hostile that homes on the walker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: DVec2,
    pub vel: DVec2,
    pub health: i32,
    pub max_health: i32,
    pub radius: f64,
}

impl Enemy {
    pub fn new(id: u32, pos: DVec2, health: i32, radius: f64) -> Self {
        Self {
            id,
            pos,
            vel: DVec2::ZERO,
            health,
            max_health: health,
            radius,
        }
    }

    /// Aim straight at `target`. No lead, no smoothing.
    pub fn update_velocity_toward(&mut self, target: DVec2, speed: f64) {
        self.vel = direction(self.pos, target) * speed;
    }

    pub fn move_step(&mut self) {
        self.pos += self.vel;
    }

    /// Subtract health. Returns true once the enemy is dead.
    pub fn apply_damage(&mut self, amount: i32) -> bool {
        self.health -= amount;
        self.is_dead()
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Remaining health in `[0, 1]` (drives the fill fade)
    pub fn health_fraction(&self) -> f64 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (self.health.max(0) as f64 / self.max_health as f64).min(1.0)
    }
}

/// A bullet fired by the walker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: DVec2,
    /// Per-tick displacement (unit heading * bullet speed)
    pub dir: DVec2,
    pub radius: f64,
}

impl Projectile {
    pub fn new(id: u32, pos: DVec2, dir: DVec2, radius: f64) -> Self {
        Self {
            id,
            pos,
            dir,
            radius,
        }
    }

    pub fn integrate(&mut self) {
        self.pos += self.dir;
    }

    /// True while the center stays inside the bounds grown by the radius
    pub fn in_bounds(&self, bounds: &Bounds) -> bool {
        bounds.contains_with_margin(self.pos, self.radius)
    }
}

/// Something that happened during a tick, for presentation-side effects
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    Shot { projectile_id: u32 },
    EnemySpawned { enemy_id: u32, pos: DVec2 },
    EnemyHit { enemy_id: u32, health: i32 },
    EnemyKilled { enemy_id: u32 },
    GameOver { score: u64, enemy_id: u32 },
    Restarted,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub walker: Walker,
    /// Live enemies, in spawn order
    pub enemies: Vec<Enemy>,
    /// Live projectiles, in firing order
    pub projectiles: Vec<Projectile>,
    pub score: u64,
    /// Best score across restarts of this session
    pub best_score: u64,
    /// Latest pointer position the walker seeks
    pub pointer: DVec2,
    pub spawner: Spawner,
    pub rng: Pcg32,
    /// Simulation tick counter (Running ticks only)
    pub time_ticks: u64,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
    pub(crate) ids: EntityIds,
}

impl GameState {
    /// Start a session at time `now` (nanoseconds). The first tick spawns.
    pub fn new(config: GameConfig, now: i64) -> Self {
        let mut ids = EntityIds::default();
        let walker = Walker::new(ids.next(), config.bounds().center(), config.walker_radius);

        Self {
            config,
            phase: GamePhase::Running,
            walker,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            best_score: 0,
            pointer: DVec2::ZERO,
            spawner: Spawner::new(&config, now),
            rng: Pcg32::seed_from_u64(config.seed),
            time_ticks: 0,
            events: Vec::new(),
            ids,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        self.ids.next()
    }

    pub fn bounds(&self) -> Bounds {
        self.config.bounds()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Fire along the walker's heading. Returns the projectile id, or `None`
    /// when the walker is standing still.
    pub fn shoot(&mut self) -> Option<u32> {
        if self.walker.is_stationary() {
            return None;
        }

        let dir = direction(DVec2::ZERO, self.walker.vel) * self.config.bullet_speed;
        let id = self.next_entity_id();
        self.projectiles
            .push(Projectile::new(id, self.walker.pos, dir, self.config.bullet_radius));
        self.events.push(GameEvent::Shot { projectile_id: id });
        log::trace!("Shot {} from {:?} heading {:?}", id, self.walker.pos, dir);
        Some(id)
    }

    /// Enter the terminal phase
    pub fn trigger_game_over(&mut self, enemy_id: u32) {
        self.phase = GamePhase::GameOver;
        self.best_score = self.best_score.max(self.score);
        self.events.push(GameEvent::GameOver {
            score: self.score,
            enemy_id,
        });
        log::info!(
            "Game over after {} ticks, score {} (best {})",
            self.time_ticks,
            self.score,
            self.best_score
        );
    }

    /// Fresh round: new walker, empty field, score 0, spawn timer restarted at `now`
    pub fn restart(&mut self, now: i64) {
        self.enemies.clear();
        self.projectiles.clear();
        let id = self.next_entity_id();
        self.walker = Walker::new(id, self.bounds().center(), self.config.walker_radius);
        self.score = 0;
        self.spawner.reset(now);
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Restarted);
        log::info!("Restarted (best score {})", self.best_score);
    }
}
