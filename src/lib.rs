//! 2D geometry primitives for polygon boolean clipping.
//!
//! Typed points, axis-aligned rectangles, paths (ordered point sequences) and
//! collections of paths, generic over two coordinate domains: exact 64-bit
//! integers and `f64` (see [`Ordinate`]). The containers carry the affine
//! transforms (offset, scale, rotate), bounding-box folds, signed area and
//! winding queries, and point-in-polygon classification a clipping engine
//! needs; the boolean algorithm itself lives elsewhere and only consumes
//! these contracts.
//!
//! The two domains convert into each other through a real scale factor, where
//! a factor of `0` means "no scaling" rather than annihilation:
//!
//! ```
//! use polybool_geometry::{PathD, PathI, PointD, PointI};
//!
//! let real: PathD = [(0.5, 0.5), (100.5, 0.5), (100.5, 100.5), (0.5, 100.5)]
//!     .into_iter()
//!     .map(|(x, y)| PointD::new(x, y))
//!     .collect();
//! let integral = PathI::scaled_from(&real, 2.0);
//! assert_eq!(integral[3], PointI::new(1, 201));
//! ```

pub mod num;
pub mod path;
pub mod paths;
pub mod point;
pub mod predicates;
pub mod rect;

pub use num::Ordinate;
pub use path::{AssignError, Path};
pub use paths::{Paths, PathsArray};
pub use point::Point;
pub use predicates::{cross_product, point_in_polygon, PointPlacement};
pub use rect::Rect;

/// Exact-integer (integral) domain.
pub type PointI = Point<i64>;
pub type RectI = Rect<i64>;
pub type PathI = Path<i64>;
pub type PathsI = Paths<i64>;
pub type PathsArrayI = PathsArray<i64>;

/// Floating (real) domain.
pub type PointD = Point<f64>;
pub type RectD = Rect<f64>;
pub type PathD = Path<f64>;
pub type PathsD = Paths<f64>;
pub type PathsArrayD = PathsArray<f64>;
