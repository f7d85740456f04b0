//! Read-only per-tick view for renderers
//!
//! A renderer keeps its own drawables keyed by [`Sprite::id`] and updates
//! them from each snapshot; it never touches [`GameState`] directly.

use glam::DVec2;
use serde::Serialize;

use super::state::{GameEvent, GamePhase, GameState};

pub const GAME_OVER_TITLE: &str = "GAME OVER";
pub const GAME_OVER_PROMPT: &str = "Press ENTER to restart";

/// Base enemy fill (crimson), as hue degrees / saturation / brightness
const ENEMY_HSB: (f32, f32, f32) = (348.0, 0.909_091, 0.862_745);
/// Bullet fill (gold)
const PROJECTILE_RGBA: [f32; 4] = [1.0, 0.843_137, 0.0, 1.0];
/// Walker fill (steel blue)
const WALKER_RGBA: [f32; 4] = [0.274_51, 0.509_804, 0.705_882, 1.0];

/// What a sprite represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpriteKind {
    Walker,
    Enemy,
    Projectile,
}

/// One drawable circle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sprite {
    pub id: u32,
    pub kind: SpriteKind,
    pub pos: DVec2,
    pub radius: f64,
    /// 1.0 for entities without health
    pub health_fraction: f64,
    /// Linear RGBA fill
    pub color: [f32; 4],
}

/// Text shown while the game is over
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameOverOverlay {
    pub title: &'static str,
    pub prompt: &'static str,
    pub final_score: u64,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    /// Walker first, then enemies, then projectiles
    pub sprites: Vec<Sprite>,
    pub score: u64,
    pub best_score: u64,
    pub phase: GamePhase,
    pub overlay: Option<GameOverOverlay>,
    /// Events produced by the tick that built this snapshot
    pub events: Vec<GameEvent>,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let mut sprites =
            Vec::with_capacity(1 + state.enemies.len() + state.projectiles.len());

        let walker = &state.walker;
        sprites.push(Sprite {
            id: walker.id,
            kind: SpriteKind::Walker,
            pos: walker.pos,
            radius: walker.radius,
            health_fraction: 1.0,
            color: WALKER_RGBA,
        });

        sprites.extend(state.enemies.iter().map(|e| {
            let frac = e.health_fraction();
            Sprite {
                id: e.id,
                kind: SpriteKind::Enemy,
                pos: e.pos,
                radius: e.radius,
                health_fraction: frac,
                color: enemy_color(frac),
            }
        }));

        sprites.extend(state.projectiles.iter().map(|p| Sprite {
            id: p.id,
            kind: SpriteKind::Projectile,
            pos: p.pos,
            radius: p.radius,
            health_fraction: 1.0,
            color: PROJECTILE_RGBA,
        }));

        let overlay = (state.phase == GamePhase::GameOver).then(|| GameOverOverlay {
            title: GAME_OVER_TITLE,
            prompt: GAME_OVER_PROMPT,
            final_score: state.score,
        });

        Self {
            sprites,
            score: state.score,
            best_score: state.best_score,
            phase: state.phase,
            overlay,
            events: state.events.clone(),
        }
    }

    /// HUD score text
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn sprites_of(&self, kind: SpriteKind) -> impl Iterator<Item = &Sprite> + '_ {
        self.sprites.iter().filter(move |s| s.kind == kind)
    }

    /// JSON form for bridging to a non-Rust renderer
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Crimson with saturation scaled by remaining health
pub fn enemy_color(health_fraction: f64) -> [f32; 4] {
    let (h, s, b) = ENEMY_HSB;
    let frac = health_fraction.clamp(0.0, 1.0) as f32;
    let (r, g, bl) = hsb_to_rgb(h, s * frac, b);
    [r, g, bl, 1.0]
}

/// Hue in degrees, saturation and brightness in [0, 1]
fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> (f32, f32, f32) {
    let c = brightness * saturation;
    let h = (hue.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = brightness - c;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    (r + m, g + m, b + m)
}
