//! Ordered point sequences: open polylines or implicitly closed polygons.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::num::Ordinate;
use crate::point::Point;
use crate::rect::Rect;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignError {
    /// Clearing then copying from self would destroy the source before it is
    /// read, so assigning a container from itself is rejected outright.
    #[error("cannot assign a container from itself")]
    SelfAssign,
}

/// An ordered, mutable sequence of [`Point`]s.
///
/// No closing point is stored; algorithms that need a closed polygon
/// ([`Path::area`], [`crate::predicates::point_in_polygon`]) pair the last
/// vertex back to the first themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path<T> {
    pub points: Vec<Point<T>>,
}

impl<T: Ordinate> Path<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: Point<T>) {
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
        self.points.iter()
    }

    /// Concatenate `extra`'s points onto the end.
    pub fn append(&mut self, extra: &Path<T>) {
        if !extra.is_empty() {
            self.points.extend_from_slice(&extra.points);
        }
    }

    /// Deep-copy `other`, converting between domains and applying `scale` to
    /// every coordinate. A scale of `0` means no scaling. Coordinates round
    /// to nearest when the destination domain is integral.
    #[must_use]
    pub fn scaled_from<U: Ordinate>(other: &Path<U>, scale: f64) -> Self {
        let scale = if scale == 0.0 { 1.0 } else { scale };
        Self {
            points: other
                .points
                .iter()
                .map(|p| Point::new(T::from_scaled(p.x, scale), T::from_scaled(p.y, scale)))
                .collect(),
        }
    }

    /// Replace this path's points with a scaled copy of `other`
    /// (see [`Path::scaled_from`]).
    ///
    /// Fails when `other` is the same object as `self`. Safe Rust's borrow
    /// rules already preclude that aliasing, so the guard only fires for
    /// callers going through raw pointers; it keeps the contract explicit
    /// rather than incidental.
    pub fn try_assign_from<U: Ordinate>(
        &mut self,
        other: &Path<U>,
        scale: f64,
    ) -> Result<(), AssignError> {
        if same_object(self, other) {
            return Err(AssignError::SelfAssign);
        }
        *self = Self::scaled_from(other, scale);
        Ok(())
    }

    /// Signed area by the shoelace formula, treating the path as implicitly
    /// closed. Counter-clockwise order (y-up) yields a positive area. Paths
    /// with fewer than 3 points have zero area.
    ///
    /// Computed in `f64` in both domains so large integral coordinates
    /// cannot overflow.
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        let mut j = n - 1;
        for i in 0..n {
            let pj = self.points[j];
            let pi = self.points[i];
            sum += (pj.x.to_f64() + pi.x.to_f64()) * (pj.y.to_f64() - pi.y.to_f64());
            j = i;
        }
        -sum * 0.5
    }

    /// Winding direction: `true` for non-negative [`Path::area`].
    pub fn orientation(&self) -> bool {
        self.area() >= 0.0
    }

    /// Smallest enclosing rectangle, or canonical-empty when the path has no
    /// points or all points collapse onto a vertical line.
    pub fn bounds(&self) -> Rect<T> {
        let mut bounds = Rect::empty();
        for p in &self.points {
            if p.x < bounds.left {
                bounds.left = p.x;
            }
            if p.x > bounds.right {
                bounds.right = p.x;
            }
            if p.y < bounds.top {
                bounds.top = p.y;
            }
            if p.y > bounds.bottom {
                bounds.bottom = p.y;
            }
        }
        if bounds.left >= bounds.right {
            Rect::empty()
        } else {
            bounds
        }
    }

    /// Translate every point by `(dx, dy)`.
    pub fn offset(&mut self, dx: T, dy: T) {
        if dx == T::ZERO && dy == T::ZERO {
            return;
        }
        for p in &mut self.points {
            p.x = p.x + dx;
            p.y = p.y + dy;
        }
    }

    /// Reverse point order in place.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Rotate every point counter-clockwise about `center`, computing
    /// `sin`/`cos` once.
    pub fn rotate(&mut self, center: Point<f64>, angle_rad: f64) {
        let (sin_a, cos_a) = angle_rad.sin_cos();
        for p in &mut self.points {
            p.rotate_with(center, sin_a, cos_a);
        }
    }

    /// Scale per axis, with `0` coerced to `1` on either axis, then strip
    /// consecutive duplicate points (scaling is the one mutator that commonly
    /// collapses neighbours into duplicates).
    pub fn scale(&mut self, sx: T, sy: T) {
        let sx = if sx == T::ZERO { T::ONE } else { sx };
        let sy = if sy == T::ZERO { T::ONE } else { sy };
        if sx == T::ONE && sy == T::ONE {
            return;
        }
        for p in &mut self.points {
            p.x = p.x * sx;
            p.y = p.y * sy;
        }
        self.strip_duplicates();
    }

    /// Remove consecutive duplicate points, keeping the first of each run.
    /// Non-adjacent duplicates are left alone.
    pub fn strip_duplicates(&mut self) {
        self.points.dedup();
    }
}

impl<T> Index<usize> for Path<T> {
    type Output = Point<T>;

    fn index(&self, index: usize) -> &Point<T> {
        &self.points[index]
    }
}

impl<T> IndexMut<usize> for Path<T> {
    fn index_mut(&mut self, index: usize) -> &mut Point<T> {
        &mut self.points[index]
    }
}

impl<T> From<Vec<Point<T>>> for Path<T> {
    fn from(points: Vec<Point<T>>) -> Self {
        Self { points }
    }
}

impl<T> FromIterator<Point<T>> for Path<T> {
    fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Path<T> {
    type Item = &'a Point<T>;
    type IntoIter = std::slice::Iter<'a, Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Storage-address identity across container types.
pub(crate) fn same_object<A, B>(a: &A, b: &B) -> bool {
    std::ptr::eq((a as *const A).cast::<()>(), (b as *const B).cast::<()>())
}
