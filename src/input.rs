//! Input boundary
//!
//! Platform callbacks record events here as they arrive; the game loop takes
//! one coalesced [`TickInput`] per tick. Pointer moves coalesce to the latest
//! position. Shoot and restart are latched edges: however many times they
//! fire between ticks, the next tick sees each once and then they clear.

use glam::DVec2;

use crate::sim::TickInput;

#[derive(Debug, Clone, Default)]
pub struct InputState {
    pointer: Option<DVec2>,
    shoot: bool,
    restart: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer moved (playfield coordinates)
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = Some(DVec2::new(x, y));
    }

    /// Fire button / click
    pub fn shoot_pressed(&mut self) {
        self.shoot = true;
    }

    /// Restart key (ENTER)
    pub fn restart_pressed(&mut self) {
        self.restart = true;
    }

    /// Hand the pending input to the next tick and clear one-shot edges
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            pointer: self.pointer.take(),
            shoot: std::mem::take(&mut self.shoot),
            restart: std::mem::take(&mut self.restart),
        }
    }
}
