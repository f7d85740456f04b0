//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per external tick, timestamps supplied by the caller
//! - Seeded RNG only
//! - Stable iteration order (insertion order, ids ascending)
//! - No rendering or platform dependencies

pub mod collision;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{
    Hit, HitReport, circles_overlap, find_player_collision, point_in_circle, prune_projectiles,
    resolve_projectile_hits,
};
pub use snapshot::{
    GAME_OVER_PROMPT, GAME_OVER_TITLE, GameOverOverlay, RenderSnapshot, Sprite, SpriteKind,
    enemy_color,
};
pub use spawner::{SpawnEdge, Spawner};
pub use state::{Enemy, EntityIds, GameEvent, GamePhase, GameState, Projectile, Walker};
pub use tick::{TickInput, tick};
pub use vector::{Vector2D, VectorExt};
