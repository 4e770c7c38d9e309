//! Free geometric queries used by clipping algorithms.

use crate::num::Ordinate;
use crate::path::Path;
use crate::point::Point;

/// Where a query point lies relative to a closed polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointPlacement {
    Inside,
    Outside,
    OnEdge,
}

/// Classify `pt` against the closed polygon implied by `path` using a
/// crossing-number scan. The last vertex is explicitly paired back to the
/// first, so the polygon is treated as closed whether or not the caller
/// repeated the first point.
///
/// A query point that coincides with a vertex, lies on a horizontal edge
/// between its endpoints, or sits exactly on a crossing edge classifies as
/// [`PointPlacement::OnEdge`]. Cross terms run in `f64` so products of large
/// integral coordinates cannot overflow. Paths with fewer than 3 vertices
/// classify as [`PointPlacement::Outside`].
pub fn point_in_polygon<T: Ordinate>(pt: Point<T>, path: &Path<T>) -> PointPlacement {
    let n = path.len();
    if n < 3 {
        return PointPlacement::Outside;
    }

    let mut winding = 0;
    let mut prev = path[0];
    for i in 1..=n {
        let next = if i < n { path[i] } else { path[0] };

        if next.y == pt.y
            && (next.x == pt.x || (prev.y == pt.y && ((next.x > pt.x) == (prev.x < pt.x))))
        {
            return PointPlacement::OnEdge;
        }

        if (prev.y < pt.y) != (next.y < pt.y) {
            if prev.x >= pt.x {
                if next.x > pt.x {
                    winding = 1 - winding;
                } else {
                    match edge_side(pt, prev, next) {
                        None => return PointPlacement::OnEdge,
                        Some(left_of) => {
                            if left_of == (next.y > prev.y) {
                                winding = 1 - winding;
                            }
                        }
                    }
                }
            } else if next.x > pt.x {
                match edge_side(pt, prev, next) {
                    None => return PointPlacement::OnEdge,
                    Some(left_of) => {
                        if left_of == (next.y > prev.y) {
                            winding = 1 - winding;
                        }
                    }
                }
            }
        }
        prev = next;
    }

    if winding == 1 {
        PointPlacement::Inside
    } else {
        PointPlacement::Outside
    }
}

/// Which side of the directed edge `a -> b` the query point falls on:
/// `Some(true)` for a positive cross term, `None` when the point is exactly
/// on the edge's carrier line.
fn edge_side<T: Ordinate>(pt: Point<T>, a: Point<T>, b: Point<T>) -> Option<bool> {
    let d = (a.x.to_f64() - pt.x.to_f64()) * (b.y.to_f64() - pt.y.to_f64())
        - (b.x.to_f64() - pt.x.to_f64()) * (a.y.to_f64() - pt.y.to_f64());
    if d == 0.0 {
        None
    } else {
        Some(d > 0.0)
    }
}

/// Signed cross product of `p1 -> p2` with `p2 -> p3`, in `f64` to avoid
/// integral overflow. The sign gives the turn direction at `p2`:
/// positive for a counter-clockwise (left) turn, negative for clockwise.
pub fn cross_product<T: Ordinate>(p1: Point<T>, p2: Point<T>, p3: Point<T>) -> f64 {
    let x1 = p2.x.to_f64() - p1.x.to_f64();
    let y1 = p2.y.to_f64() - p1.y.to_f64();
    let x2 = p3.x.to_f64() - p2.x.to_f64();
    let y2 = p3.y.to_f64() - p2.y.to_f64();
    x1 * y2 - y1 * x2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Path<i64> {
        [(0, 0), (100, 0), (100, 100), (0, 100)]
            .into_iter()
            .map(|(x, y)| Point::new(x, y))
            .collect()
    }

    #[test]
    fn classifies_inside_outside_and_vertex() {
        let path = square();
        assert_eq!(
            point_in_polygon(Point::new(50, 50), &path),
            PointPlacement::Inside
        );
        assert_eq!(
            point_in_polygon(Point::new(150, 150), &path),
            PointPlacement::Outside
        );
        assert_eq!(
            point_in_polygon(Point::new(100, 0), &path),
            PointPlacement::OnEdge
        );
    }

    #[test]
    fn point_on_horizontal_edge() {
        let path = square();
        assert_eq!(
            point_in_polygon(Point::new(50, 0), &path),
            PointPlacement::OnEdge
        );
    }

    #[test]
    fn point_on_slanted_edge() {
        let triangle: Path<i64> = [(0, 0), (100, 100), (200, 0)]
            .into_iter()
            .map(|(x, y)| Point::new(x, y))
            .collect();
        assert_eq!(
            point_in_polygon(Point::new(50, 50), &triangle),
            PointPlacement::OnEdge
        );
        assert_eq!(
            point_in_polygon(Point::new(100, 40), &triangle),
            PointPlacement::Inside
        );
    }

    #[test]
    fn closing_edge_is_part_of_the_polygon() {
        // The edge from the last vertex back to the first. Without explicit
        // closure, a point left of the polygon would see an odd crossing
        // count and classify as inside.
        let path = square();
        assert_eq!(
            point_in_polygon(Point::new(-5, 50), &path),
            PointPlacement::Outside
        );
        assert_eq!(
            point_in_polygon(Point::new(0, 50), &path),
            PointPlacement::OnEdge
        );
        assert_eq!(
            point_in_polygon(Point::new(1, 50), &path),
            PointPlacement::Inside
        );
    }

    #[test]
    fn degenerate_paths_are_outside() {
        let mut path = Path::<i64>::new();
        assert_eq!(
            point_in_polygon(Point::new(0, 0), &path),
            PointPlacement::Outside
        );
        path.push(Point::new(0, 0));
        path.push(Point::new(10, 0));
        assert_eq!(
            point_in_polygon(Point::new(5, 0), &path),
            PointPlacement::Outside
        );
    }

    #[test]
    fn real_domain_classification() {
        let path: Path<f64> = [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)]
            .into_iter()
            .map(|(x, y)| Point::new(x, y))
            .collect();
        assert_eq!(
            point_in_polygon(Point::new(50.0, 50.0), &path),
            PointPlacement::Inside
        );
        assert_eq!(
            point_in_polygon(Point::new(-0.5, 50.0), &path),
            PointPlacement::Outside
        );
    }

    #[test]
    fn cross_product_signs() {
        let a = Point::new(0i64, 0);
        let b = Point::new(10, 0);
        let left = Point::new(10, 10);
        let right = Point::new(10, -10);
        let straight = Point::new(20, 0);

        assert!(cross_product(a, b, left) > 0.0);
        assert!(cross_product(a, b, right) < 0.0);
        assert_eq!(cross_product(a, b, straight), 0.0);
    }

    #[test]
    fn cross_product_survives_large_coordinates() {
        let big = 3_000_000_000i64;
        let a = Point::new(-big, -big);
        let b = Point::new(0, 0);
        let c = Point::new(big, -big);
        // i64 arithmetic would overflow on these products.
        assert!(cross_product(a, b, c) < 0.0);
    }
}
