//! Edge Walker - a tick-driven arena shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `config`: Runtime tuning loaded from JSON
//! - `input`: Coalesces asynchronous input into per-tick commands

pub mod config;
pub mod input;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use input::InputState;

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f64 = 800.0;
    pub const PLAYFIELD_HEIGHT: f64 = 600.0;

    /// Walker (player) defaults
    pub const WALKER_RADIUS: f64 = 15.0;
    pub const WALKER_MAX_SPEED: f64 = 4.0;
    /// Maximum steering change per tick
    pub const WALKER_MAX_FORCE: f64 = 0.1;

    /// Bullet defaults
    pub const BULLET_RADIUS: f64 = 5.0;
    pub const BULLET_SPEED: f64 = 8.0;

    /// Enemy defaults
    pub const ENEMY_RADIUS: f64 = 15.0;
    pub const ENEMY_SPEED: f64 = 1.0;
    pub const ENEMY_HEALTH: i32 = 3;

    /// Spawn interval (nanoseconds)
    pub const SPAWN_INTERVAL_NS: i64 = 3_000_000_000;
    /// How far outside the playfield enemies appear
    pub const SPAWN_EDGE_OFFSET: f64 = 20.0;

    /// Default RNG seed for the spawner
    pub const DEFAULT_SEED: u64 = 0x5EED_0F_ED6E;
}

/// Playfield bounds in simulation coordinates, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: consts::PLAYFIELD_WIDTH,
            height: consts::PLAYFIELD_HEIGHT,
        }
    }
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center of the playfield
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a point into `[0, width] x [0, height]`
    #[inline]
    pub fn clamp(&self, pos: DVec2) -> DVec2 {
        DVec2::new(pos.x.clamp(0.0, self.width), pos.y.clamp(0.0, self.height))
    }

    /// True if the point lies within the bounds grown by `margin` on every side.
    /// The boundary itself counts as inside.
    #[inline]
    pub fn contains_with_margin(&self, pos: DVec2, margin: f64) -> bool {
        pos.x >= -margin
            && pos.x <= self.width + margin
            && pos.y >= -margin
            && pos.y <= self.height + margin
    }
}
