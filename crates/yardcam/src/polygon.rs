//! Integer points and validated, implicitly closed polygons.
//!
//! Purpose
//! - Give every placer the same frozen vertex list. A `Polygon` is built once per
//!   run (read from a point file or generated) and never mutated afterwards.
//!
//! Invariants
//! - At least 3 points.
//! - Consecutive points differ, including the wrap-around pair (last, first).
//! - The edge set is `(p[i], p[i+1 mod n])`; no edge labels are stored.

use nalgebra::Point2;

use crate::error::CoverError;
use crate::pointfile::format_points;

/// Integer vertex coordinates. Equality and hashing are by value.
pub type Point = Point2<i64>;

/// Immutable, implicitly closed vertex sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Validate and wrap a vertex list.
    pub fn new(points: Vec<Point>) -> Result<Self, CoverError> {
        if points.len() < 3 {
            return Err(CoverError::degenerate(format!(
                "need at least 3 points, got {}",
                points.len()
            )));
        }
        let n = points.len();
        for i in 0..n {
            let j = (i + 1) % n;
            if points[i] == points[j] {
                return Err(CoverError::degenerate(format!(
                    "vertices {i} and {j} coincide at ({}, {})",
                    points[i].x, points[i].y
                )));
            }
        }
        Ok(Self { points })
    }

    /// Shorthand for building from `(x, y)` pairs.
    pub fn from_coords(coords: &[(i64, i64)]) -> Result<Self, CoverError> {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed polygon; provided for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn point(&self, i: usize) -> Point {
        self.points[i]
    }

    /// Closed edge sequence, ending with `(last, first)`.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Index of the first vertex equal to `p`.
    pub fn index_of(&self, p: &Point) -> Option<usize> {
        self.points.iter().position(|q| q == p)
    }

    /// True if every edge is purely horizontal or purely vertical.
    pub fn is_orthogonal(&self) -> bool {
        self.edges().all(|(a, b)| a.x == b.x || a.y == b.y)
    }

    /// Serialized copy in the point-file format (`"x, y"` per line).
    pub fn to_point_file(&self) -> String {
        format_points(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_and_repeated_vertex_lists() {
        let two = Polygon::from_coords(&[(0, 0), (4, 0)]);
        assert!(matches!(two, Err(CoverError::DegeneratePolygon { .. })));
        let wrap = Polygon::from_coords(&[(0, 0), (4, 0), (4, 4), (0, 0)]);
        assert!(matches!(wrap, Err(CoverError::DegeneratePolygon { .. })));
        let inner = Polygon::from_coords(&[(0, 0), (4, 0), (4, 0), (0, 4)]);
        assert!(matches!(inner, Err(CoverError::DegeneratePolygon { .. })));
    }

    #[test]
    fn edges_close_the_loop() {
        let sq = Polygon::from_coords(&[(0, 0), (4, 0), (4, 4), (0, 4)]).unwrap();
        let edges: Vec<_> = sq.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (Point::new(0, 4), Point::new(0, 0)));
        assert!(sq.is_orthogonal());
        assert_eq!(sq.index_of(&Point::new(4, 4)), Some(2));
        assert_eq!(sq.index_of(&Point::new(1, 1)), None);
    }

    #[test]
    fn diagonal_edge_is_not_orthogonal() {
        let tri = Polygon::from_coords(&[(0, 0), (4, 0), (0, 4)]).unwrap();
        assert!(!tri.is_orthogonal());
    }
}
