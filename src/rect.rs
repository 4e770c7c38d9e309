//! Axis-aligned rectangles with a canonical-empty sentinel.

use serde::{Deserialize, Serialize};

use crate::num::Ordinate;
use crate::point::Point;

/// An axis-aligned bounding box.
///
/// A rectangle is either the canonical-empty sentinel (see [`Rect::empty`])
/// or satisfies `left <= right && top <= bottom`. Operations that would
/// leave inverted or degenerate bounds collapse the value to the sentinel
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect<T> {
    pub left: T,
    pub top: T,
    pub right: T,
    pub bottom: T,
}

impl<T: Ordinate> Default for Rect<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Ordinate> Rect<T> {
    #[must_use]
    pub fn new(left: T, top: T, right: T, bottom: T) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The canonical-empty rectangle: the inverted extrema a bounds fold
    /// starts from. Distinct from any zero-area rectangle.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            left: T::MAX_SENTINEL,
            top: T::MAX_SENTINEL,
            right: T::MIN_SENTINEL,
            bottom: T::MIN_SENTINEL,
        }
    }

    pub fn width(&self) -> T {
        self.right - self.left
    }

    pub fn height(&self) -> T {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Expand all four sides symmetrically.
    pub fn inflate(&mut self, dx: T, dy: T) {
        self.left = self.left - dx;
        self.top = self.top - dy;
        self.right = self.right + dx;
        self.bottom = self.bottom + dy;
    }

    /// Shrink to the overlap with `other`. An empty operand or a degenerate
    /// overlap collapses to canonical-empty.
    pub fn intersect(&mut self, other: &Rect<T>) {
        if self.is_empty() || other.is_empty() {
            *self = Self::empty();
            return;
        }
        self.left = max(self.left, other.left);
        self.top = max(self.top, other.top);
        self.right = min(self.right, other.right);
        self.bottom = min(self.bottom, other.bottom);
        if self.is_empty() {
            *self = Self::empty();
        }
    }

    /// Grow to enclose `other`. An empty operand acts as the identity.
    pub fn union(&mut self, other: &Rect<T>) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = *other;
            return;
        }
        self.left = min(self.left, other.left);
        self.top = min(self.top, other.top);
        self.right = max(self.right, other.right);
        self.bottom = max(self.bottom, other.bottom);
    }

    /// Rotate the rectangle about its own center and refit to the smallest
    /// enclosing axis-aligned box.
    ///
    /// The minimum corner floors and the maximum corner ceils, so an integral
    /// box always fully contains the rotated shape.
    pub fn rotate(&mut self, angle_rad: f64) {
        let center = Point::new(
            (self.left.to_f64() + self.right.to_f64()) / 2.0,
            (self.top.to_f64() + self.bottom.to_f64()) / 2.0,
        );

        let mut corners = [
            Point::new(self.left.to_f64(), self.top.to_f64()),
            Point::new(self.right.to_f64(), self.top.to_f64()),
            Point::new(self.right.to_f64(), self.bottom.to_f64()),
            Point::new(self.left.to_f64(), self.bottom.to_f64()),
        ];
        let (sin_a, cos_a) = angle_rad.sin_cos();
        for corner in &mut corners {
            corner.rotate_with(center, sin_a, cos_a);
        }

        let mut min_x = corners[0].x;
        let mut min_y = corners[0].y;
        let mut max_x = corners[0].x;
        let mut max_y = corners[0].y;
        for corner in &corners[1..] {
            min_x = min_x.min(corner.x);
            min_y = min_y.min(corner.y);
            max_x = max_x.max(corner.x);
            max_y = max_y.max(corner.y);
        }

        self.left = T::from_f64_floor(min_x);
        self.top = T::from_f64_floor(min_y);
        self.right = T::from_f64_ceil(max_x);
        self.bottom = T::from_f64_ceil(max_y);
    }
}

fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn integral_inflate_and_union() {
        let mut rect = Rect::new(0i64, 0, 50, 100);
        assert_eq!(rect.width(), 50);
        assert_eq!(rect.height(), 100);
        assert!(!rect.is_empty());

        rect.inflate(10, 10);
        assert_eq!(rect, Rect::new(-10, -10, 60, 110));

        rect.union(&Rect::new(100, 100, 200, 200));
        assert_eq!(rect, Rect::new(-10, -10, 200, 200));
    }

    #[test]
    fn real_inflate_and_union() {
        let mut rect = Rect::new(0.0f64, 0.0, 50.0, 100.0);
        assert_abs_diff_eq!(rect.width(), 50.0);
        assert_abs_diff_eq!(rect.height(), 100.0);

        rect.inflate(10.0, 10.0);
        assert_eq!(rect, Rect::new(-10.0, -10.0, 60.0, 110.0));

        rect.union(&Rect::new(100.0, 100.0, 200.0, 200.0));
        assert_eq!(rect, Rect::new(-10.0, -10.0, 200.0, 200.0));
    }

    #[test]
    fn union_with_empty_is_identity() {
        let mut rect = Rect::new(1i64, 2, 3, 4);
        rect.union(&Rect::empty());
        assert_eq!(rect, Rect::new(1, 2, 3, 4));

        let mut empty = Rect::<i64>::empty();
        empty.union(&Rect::new(1, 2, 3, 4));
        assert_eq!(empty, Rect::new(1, 2, 3, 4));
    }

    #[test]
    fn intersect_overlapping() {
        let mut rect = Rect::new(0i64, 0, 100, 100);
        rect.intersect(&Rect::new(50, 50, 150, 150));
        assert_eq!(rect, Rect::new(50, 50, 100, 100));
    }

    #[test]
    fn intersect_disjoint_is_empty() {
        let mut rect = Rect::new(0i64, 0, 10, 10);
        rect.intersect(&Rect::new(20, 20, 30, 30));
        assert_eq!(rect, Rect::empty());
        assert!(rect.is_empty());
    }

    #[test]
    fn intersect_with_empty_is_empty() {
        let mut rect = Rect::new(0.0f64, 0.0, 10.0, 10.0);
        rect.intersect(&Rect::empty());
        assert_eq!(rect, Rect::empty());
    }

    #[test]
    fn rotate_integral_eighth_turn_contains_shape() {
        // A 100x100 box rotated 45 degrees spans 100*sqrt(2) across, and the
        // integral refit floors/ceils outward.
        let mut rect = Rect::new(0i64, 0, 100, 100);
        rect.rotate(FRAC_PI_4);
        assert_eq!(rect, Rect::new(-21, -21, 121, 121));
    }

    #[test]
    fn rotate_real_eighth_turn_uses_exact_extrema() {
        let mut rect = Rect::new(0.0f64, 0.0, 100.0, 100.0);
        rect.rotate(FRAC_PI_4);
        let half_diagonal = 50.0 * 2.0f64.sqrt();
        assert_abs_diff_eq!(rect.left, 50.0 - half_diagonal, epsilon = 1e-9);
        assert_abs_diff_eq!(rect.top, 50.0 - half_diagonal, epsilon = 1e-9);
        assert_abs_diff_eq!(rect.right, 50.0 + half_diagonal, epsilon = 1e-9);
        assert_abs_diff_eq!(rect.bottom, 50.0 + half_diagonal, epsilon = 1e-9);
    }
}
