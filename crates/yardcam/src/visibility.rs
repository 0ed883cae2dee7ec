//! Axis-aligned, boundary-respecting visibility between polygon vertices.
//!
//! Model
//! - Two points see each other iff they are equal, or the segment between them is
//!   purely horizontal or purely vertical and no edge of matching orientation on the
//!   same line overlaps the open interior of the sight line.
//! - Edges that touch either endpoint never occlude. Touching spans (shared
//!   endpoints only) never occlude.
//!
//! The relation is symmetric and reflexive. `VisibilityMap` precomputes it for all
//! vertex pairs so callers can share one read-only copy per run.

use crate::polygon::{Point, Polygon};

/// True if `b` is visible from `a` inside `polygon`.
pub fn is_visible(polygon: &Polygon, a: Point, b: Point) -> bool {
    if a == b {
        return true;
    }
    if a.x != b.x && a.y != b.y {
        return false;
    }
    !polygon.edges().any(|(p1, p2)| {
        if p1 == a || p1 == b || p2 == a || p2 == b {
            return false;
        }
        if a.x == b.x {
            p1.x == a.x && p2.x == a.x && spans_overlap((p1.y, p2.y), (a.y, b.y))
        } else {
            p1.y == a.y && p2.y == a.y && spans_overlap((p1.x, p2.x), (a.x, b.x))
        }
    })
}

/// Open-interior overlap of two 1D spans.
#[inline]
fn spans_overlap(edge: (i64, i64), sight: (i64, i64)) -> bool {
    edge.0.min(edge.1) < sight.0.max(sight.1) && edge.0.max(edge.1) > sight.0.min(sight.1)
}

/// Full visibility relation over vertex indices.
///
/// `visible(i)` is sorted ascending and always contains `i`.
#[derive(Clone, Debug)]
pub struct VisibilityMap {
    rows: Vec<Vec<usize>>,
}

impl VisibilityMap {
    /// Evaluate `is_visible` for every unordered pair once and mirror the result.
    pub fn build(polygon: &Polygon) -> Self {
        let n = polygon.len();
        let mut rows: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
        for i in 0..n {
            for j in (i + 1)..n {
                if is_visible(polygon, polygon.point(i), polygon.point(j)) {
                    rows[i].push(j);
                    rows[j].push(i);
                }
            }
        }
        for row in &mut rows {
            row.sort_unstable();
        }
        Self { rows }
    }

    #[inline]
    pub fn visible(&self, i: usize) -> &[usize] {
        &self.rows[i]
    }

    /// Size of the full visible set of `i` (self included).
    #[inline]
    pub fn degree(&self, i: usize) -> usize {
        self.rows[i].len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Indices of vertices not visible from any of `cameras`.
pub fn uncovered_vertices(polygon: &Polygon, cameras: &[Point]) -> Vec<usize> {
    polygon
        .points()
        .iter()
        .enumerate()
        .filter(|(_, &p)| !cameras.iter().any(|&c| is_visible(polygon, c, p)))
        .map(|(i, _)| i)
        .collect()
}
