//! 2D vector helpers on top of `glam::DVec2`
//!
//! `DVec2` already supplies the pure operations (`+`, `-`, `* n`, `length`).
//! The extension trait adds the in-place forms the steering code relies on,
//! with the zero-length guarantees spelled out.

use glam::DVec2;

/// Simulation vector type (x right, y down)
pub type Vector2D = DVec2;

/// In-place vector operations used by the entity models
pub trait VectorExt {
    /// Euclidean length
    fn magnitude(&self) -> f64;

    /// Scale to unit length in place. A zero vector stays zero.
    fn normalize_mut(&mut self) -> &mut Self;

    /// Clamp magnitude to `max` in place (normalize, then scale to `max`).
    /// Vectors already within the limit are left untouched.
    fn limit(&mut self, max: f64) -> &mut Self;

    /// Copying form of [`VectorExt::limit`]
    fn limited(self, max: f64) -> Self;
}

impl VectorExt for DVec2 {
    #[inline]
    fn magnitude(&self) -> f64 {
        self.length()
    }

    #[inline]
    fn normalize_mut(&mut self) -> &mut Self {
        let len = self.length();
        if len != 0.0 {
            *self /= len;
        }
        self
    }

    #[inline]
    fn limit(&mut self, max: f64) -> &mut Self {
        if self.length() > max {
            self.normalize_mut();
            *self *= max;
        }
        self
    }

    #[inline]
    fn limited(mut self, max: f64) -> Self {
        self.limit(max);
        self
    }
}

/// Unit vector from `from` toward `to`, zero if the points coincide
#[inline]
pub fn direction(from: DVec2, to: DVec2) -> DVec2 {
    let mut d = to - from;
    d.normalize_mut();
    d
}
