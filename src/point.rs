//! 2D points over a coordinate domain.

use serde::{Deserialize, Serialize};

use crate::num::Ordinate;

/// A coordinate pair. Equality is exact field-wise comparison in both
/// domains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    #[must_use]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Ordinate> Point<T> {
    /// Rotate counter-clockwise about `center` by `angle_rad`.
    pub fn rotate(&mut self, center: Point<f64>, angle_rad: f64) {
        let (sin_a, cos_a) = angle_rad.sin_cos();
        self.rotate_with(center, sin_a, cos_a);
    }

    /// Rotation with precomputed `sin`/`cos`, for rotating every point of a
    /// larger shape by the same angle.
    ///
    /// The transform runs in `f64`; integral coordinates round to nearest on
    /// the way back (halves away from zero).
    pub fn rotate_with(&mut self, center: Point<f64>, sin_a: f64, cos_a: f64) {
        let dx = self.x.to_f64() - center.x;
        let dy = self.y.to_f64() - center.y;
        self.x = T::from_f64(dx * cos_a - dy * sin_a + center.x);
        self.y = T::from_f64(dx * sin_a + dy * cos_a + center.y);
    }
}
