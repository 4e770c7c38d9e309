//! Collections of paths, and groupings of independent result sets.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::num::Ordinate;
use crate::path::{same_object, AssignError, Path};
use crate::point::Point;
use crate::rect::Rect;

/// An ordered collection of [`Path`]s. Order is significant; this is not a
/// set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paths<T> {
    pub paths: Vec<Path<T>>,
}

impl<T: Ordinate> Paths<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { paths: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn push(&mut self, path: Path<T>) {
        self.paths.push(path);
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path<T>> {
        self.paths.iter()
    }

    /// Concatenate `extra`'s paths onto the end.
    pub fn append(&mut self, extra: &Paths<T>) {
        if !extra.is_empty() {
            self.paths.extend_from_slice(&extra.paths);
        }
    }

    /// Elementwise [`Path::scaled_from`], preserving path count and order.
    #[must_use]
    pub fn scaled_from<U: Ordinate>(other: &Paths<U>, scale: f64) -> Self {
        Self {
            paths: other
                .paths
                .iter()
                .map(|p| Path::scaled_from(p, scale))
                .collect(),
        }
    }

    /// Replace this collection with a scaled copy of `other`, elementwise.
    /// Rejects self-assignment like [`Path::try_assign_from`].
    pub fn try_assign_from<U: Ordinate>(
        &mut self,
        other: &Paths<U>,
        scale: f64,
    ) -> Result<(), AssignError> {
        if same_object(self, other) {
            return Err(AssignError::SelfAssign);
        }
        *self = Self::scaled_from(other, scale);
        Ok(())
    }

    /// Smallest rectangle enclosing every point of every contained path; one
    /// fold over all points, canonical-empty when no points exist anywhere.
    pub fn bounds(&self) -> Rect<T> {
        let mut bounds = Rect::empty();
        for path in &self.paths {
            for p in &path.points {
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
        }
        if bounds.left >= bounds.right {
            Rect::empty()
        } else {
            bounds
        }
    }

    /// Translate every point of every path.
    pub fn offset(&mut self, dx: T, dy: T) {
        if dx == T::ZERO && dy == T::ZERO {
            return;
        }
        for path in &mut self.paths {
            path.offset(dx, dy);
        }
    }

    /// Elementwise [`Path::scale`] (including its duplicate stripping).
    pub fn scale(&mut self, sx: T, sy: T) {
        for path in &mut self.paths {
            path.scale(sx, sy);
        }
    }

    /// Rotate every point of every path about `center`, computing `sin`/`cos`
    /// once for the whole collection.
    pub fn rotate(&mut self, center: Point<f64>, angle_rad: f64) {
        let (sin_a, cos_a) = angle_rad.sin_cos();
        for path in &mut self.paths {
            for p in &mut path.points {
                p.rotate_with(center, sin_a, cos_a);
            }
        }
    }

    /// Reverse the point order within each contained path. The order of the
    /// paths themselves is deliberately left unchanged.
    pub fn reverse(&mut self) {
        for path in &mut self.paths {
            path.reverse();
        }
    }
}

impl<T> Index<usize> for Paths<T> {
    type Output = Path<T>;

    fn index(&self, index: usize) -> &Path<T> {
        &self.paths[index]
    }
}

impl<T> IndexMut<usize> for Paths<T> {
    fn index_mut(&mut self, index: usize) -> &mut Path<T> {
        &mut self.paths[index]
    }
}

impl<T> From<Vec<Path<T>>> for Paths<T> {
    fn from(paths: Vec<Path<T>>) -> Self {
        Self { paths }
    }
}

impl<T> FromIterator<Path<T>> for Paths<T> {
    fn from_iter<I: IntoIterator<Item = Path<T>>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Paths<T> {
    type Item = &'a Path<T>;
    type IntoIter = std::slice::Iter<'a, Path<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// An ordered collection of [`Paths`], grouping independent result sets.
/// Only the folded bounds are exposed at this level; transforms apply to the
/// constituent collections before grouping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathsArray<T> {
    pub groups: Vec<Paths<T>>,
}

impl<T: Ordinate> PathsArray<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn push(&mut self, paths: Paths<T>) {
        self.groups.push(paths);
    }

    /// Smallest rectangle enclosing every point in every path of every
    /// group.
    pub fn bounds(&self) -> Rect<T> {
        let mut bounds = Rect::empty();
        for paths in &self.groups {
            for path in &paths.paths {
                for p in &path.points {
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
            }
        }
        if bounds.left >= bounds.right {
            Rect::empty()
        } else {
            bounds
        }
    }
}

impl<T> Index<usize> for PathsArray<T> {
    type Output = Paths<T>;

    fn index(&self, index: usize) -> &Paths<T> {
        &self.groups[index]
    }
}
