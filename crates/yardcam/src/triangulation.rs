//! Delaunay triangulation of an integer point set.
//!
//! Model
//! - Unconstrained: polygon edges and concavity are ignored; only the vertex set
//!   matters. Duplicate points are collapsed to their first occurrence.
//! - Sweep: points are inserted in lexicographic order. Each new point lies
//!   strictly outside the current hull and is joined to every hull edge it sees,
//!   so the union of triangles is always exactly the convex hull.
//! - Lawson flips then restore the empty-circumcircle property edge by edge. An
//!   edge is flipped only when the opposite corner lies strictly inside, so
//!   cocircular inputs terminate with one of the valid triangulations.
//! - Predicates are exact (`i128`) on coordinates relative to the bounding-box
//!   minimum.
//!
//! Output order is deterministic for a fixed input.

use std::collections::HashMap;

use crate::error::CoverError;
use crate::polygon::Point;

/// Largest accepted coordinate span. Keeps every predicate inside `i128`.
pub const MAX_COORD_SPAN: i64 = 1 << 24;

/// Triangle given by its three corner points (counter-clockwise).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    #[inline]
    pub fn contains_vertex(&self, p: &Point) -> bool {
        self.a == *p || self.b == *p || self.c == *p
    }
}

pub type TriangleMesh = Vec<Triangle>;

/// Point shifted to the bounding-box minimum; both coordinates lie in
/// `0..=MAX_COORD_SPAN`.
type Local = (i128, i128);

#[inline]
fn orient(a: Local, b: Local, c: Local) -> i128 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}

/// `> 0` iff `p` lies strictly inside the circumcircle of CCW triangle `abc`.
#[inline]
fn in_circle(p: Local, a: Local, b: Local, c: Local) -> i128 {
    let d = |q: Local| (q.0 - p.0, q.1 - p.1);
    let (ax, ay) = d(a);
    let (bx, by) = d(b);
    let (cx, cy) = d(c);
    let aa = ax * ax + ay * ay;
    let bb = bx * bx + by * by;
    let cc = cx * cx + cy * cy;
    ax * (by * cc - cy * bb) - ay * (bx * cc - cx * bb) + aa * (bx * cy - cx * by)
}

/// Delaunay triangulation of `points`.
///
/// Errors with `Triangulation` when fewer than 3 distinct points remain, when all
/// points are collinear, or when the coordinate span exceeds `MAX_COORD_SPAN`.
pub fn delaunay(points: &[Point]) -> Result<TriangleMesh, CoverError> {
    let mut pts: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        if !pts.contains(p) {
            pts.push(*p);
        }
    }
    if pts.len() < 3 {
        return Err(CoverError::triangulation(format!(
            "need at least 3 distinct points, got {}",
            pts.len()
        )));
    }

    let min_x = pts.iter().map(|p| i128::from(p.x)).min().unwrap_or(0);
    let max_x = pts.iter().map(|p| i128::from(p.x)).max().unwrap_or(0);
    let min_y = pts.iter().map(|p| i128::from(p.y)).min().unwrap_or(0);
    let max_y = pts.iter().map(|p| i128::from(p.y)).max().unwrap_or(0);
    let span = (max_x - min_x).max(max_y - min_y);
    if span > i128::from(MAX_COORD_SPAN) {
        return Err(CoverError::triangulation(format!(
            "coordinate span {span} exceeds {MAX_COORD_SPAN}"
        )));
    }
    let local: Vec<Local> = pts
        .iter()
        .map(|p| (i128::from(p.x) - min_x, i128::from(p.y) - min_y))
        .collect();

    let mut order: Vec<usize> = (0..pts.len()).collect();
    order.sort_by_key(|&i| local[i]);

    let mut tris = sweep(&local, &order)?;
    flip_to_delaunay(&local, &mut tris);

    Ok(tris
        .into_iter()
        .map(|[a, b, c]| Triangle {
            a: pts[a],
            b: pts[b],
            c: pts[c],
        })
        .collect())
}

/// Triangulate the convex hull of `local`, visiting points in sorted `order`.
fn sweep(local: &[Local], order: &[usize]) -> Result<Vec<[usize; 3]>, CoverError> {
    let (p0, p1) = (local[order[0]], local[order[1]]);
    let Some(k) = (2..order.len()).find(|&j| orient(p0, p1, local[order[j]]) != 0) else {
        return Err(CoverError::triangulation("all points are collinear"));
    };

    // Seed: fan from the first off-line point over the collinear prefix.
    let apex = order[k];
    let left = orient(p0, p1, local[apex]) > 0;
    let mut tris = Vec::with_capacity(2 * order.len());
    for w in order[..k].windows(2) {
        let (a, b) = (w[0], w[1]);
        tris.push(if left { [a, b, apex] } else { [b, a, apex] });
    }
    // Hull in counter-clockwise order.
    let mut hull: Vec<usize> = if left {
        order[..=k].to_vec()
    } else {
        let mut h = vec![order[0], apex];
        h.extend(order[1..k].iter().rev());
        h
    };

    for &p in &order[k + 1..] {
        let m = hull.len();
        let sees = |i: usize| orient(local[hull[i]], local[hull[(i + 1) % m]], local[p]) < 0;
        // `p` is strictly outside the hull, so the edges it sees form one
        // non-empty run that does not wrap all the way around.
        let Some(first) = (0..m).find(|&i| sees(i) && !sees((i + m - 1) % m)) else {
            return Err(CoverError::triangulation("sweep point sees no hull edge"));
        };
        let mut last = first;
        loop {
            let (a, b) = (hull[last], hull[(last + 1) % m]);
            tris.push([b, a, p]);
            if !sees((last + 1) % m) {
                break;
            }
            last = (last + 1) % m;
        }
        // Keep hull[last + 1] .. hull[first] (cyclically), then close with `p`.
        let mut next = Vec::with_capacity(m + 1);
        let mut i = (last + 1) % m;
        loop {
            next.push(hull[i]);
            if i == first {
                break;
            }
            i = (i + 1) % m;
        }
        next.push(p);
        hull = next;
    }
    Ok(tris)
}

/// Flip edges until every interior edge is locally Delaunay.
fn flip_to_delaunay(local: &[Local], tris: &mut [[usize; 3]]) {
    // Directed edge -> triangle holding it in counter-clockwise order.
    let mut owner: HashMap<(usize, usize), usize> = HashMap::with_capacity(3 * tris.len());
    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(3 * tris.len());
    for (ti, &[a, b, c]) in tris.iter().enumerate() {
        for e in [(a, b), (b, c), (c, a)] {
            owner.insert(e, ti);
            stack.push(e);
        }
    }

    while let Some((a, b)) = stack.pop() {
        let (Some(&t1), Some(&t2)) = (owner.get(&(a, b)), owner.get(&(b, a))) else {
            continue;
        };
        let c = third(tris[t1], a, b);
        let d = third(tris[t2], b, a);
        if in_circle(local[d], local[a], local[b], local[c]) <= 0 {
            continue;
        }
        // Quad a, d, b, c is strictly convex; swap diagonal ab for dc.
        tris[t1] = [a, d, c];
        tris[t2] = [d, b, c];
        owner.remove(&(a, b));
        owner.remove(&(b, a));
        for (e, t) in [
            ((a, d), t1),
            ((d, c), t1),
            ((c, a), t1),
            ((d, b), t2),
            ((b, c), t2),
            ((c, d), t2),
        ] {
            owner.insert(e, t);
        }
        stack.extend([(a, d), (d, b), (b, c), (c, a)]);
    }
}

/// Corner of `t` that is neither `a` nor `b`, where `(a, b)` is one of its edges.
#[inline]
fn third(t: [usize; 3], a: usize, b: usize) -> usize {
    t.into_iter().find(|&v| v != a && v != b).unwrap_or(t[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_with_rng, OrthoCfg};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pts(coords: &[(i64, i64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn wide(p: Point) -> Local {
        (i128::from(p.x), i128::from(p.y))
    }

    fn area2(t: &Triangle) -> i128 {
        orient(wide(t.a), wide(t.b), wide(t.c))
    }

    /// Twice the convex-hull area (monotone chain).
    fn hull_area2(points: &[Point]) -> i128 {
        let mut p: Vec<Local> = points.iter().map(|&q| wide(q)).collect();
        p.sort();
        p.dedup();
        let mut lower: Vec<Local> = Vec::new();
        for &q in &p {
            while lower.len() >= 2 && orient(lower[lower.len() - 2], lower[lower.len() - 1], q) <= 0 {
                lower.pop();
            }
            lower.push(q);
        }
        let mut upper: Vec<Local> = Vec::new();
        for &q in p.iter().rev() {
            while upper.len() >= 2 && orient(upper[upper.len() - 2], upper[upper.len() - 1], q) <= 0 {
                upper.pop();
            }
            upper.push(q);
        }
        lower.pop();
        upper.pop();
        let ring: Vec<Local> = lower.into_iter().chain(upper).collect();
        (0..ring.len())
            .map(|i| {
                let (a, b) = (ring[i], ring[(i + 1) % ring.len()]);
                a.0 * b.1 - a.1 * b.0
            })
            .sum()
    }

    fn assert_delaunay(input: &[Point], mesh: &TriangleMesh) {
        assert!(mesh.iter().all(|t| area2(t) > 0), "degenerate or clockwise triangle");
        let total: i128 = mesh.iter().map(area2).sum();
        assert_eq!(total, hull_area2(input), "mesh does not fill the hull");
        for t in mesh {
            for &q in input {
                if t.contains_vertex(&q) {
                    continue;
                }
                assert!(
                    in_circle(wide(q), wide(t.a), wide(t.b), wide(t.c)) <= 0,
                    "{q:?} inside {t:?}"
                );
            }
        }
    }

    #[test]
    fn square_splits_into_two_triangles() {
        let input = pts(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
        let mesh = delaunay(&input).unwrap();
        assert_eq!(mesh.len(), 2);
        assert_delaunay(&input, &mesh);
    }

    #[test]
    fn square_with_center_gives_four_triangles() {
        let mesh = delaunay(&pts(&[(0, 0), (4, 0), (4, 4), (0, 4), (2, 2)])).unwrap();
        assert_eq!(mesh.len(), 4);
        assert!(mesh.iter().all(|t| t.contains_vertex(&Point::new(2, 2))));
    }

    #[test]
    fn empty_circumcircles() {
        let input = pts(&[(0, 0), (7, 1), (9, 5), (3, 8), (-2, 4), (4, 3), (6, 6)]);
        assert_delaunay(&input, &delaunay(&input).unwrap());
    }

    #[test]
    fn flat_comb_fills_its_hull() {
        // Long thin comb: many cocircular and collinear points on the hull.
        let mut coords = vec![(0, 0), (0, 2)];
        for k in 1..=9 {
            coords.extend([(4 * k, 2), (4 * k, 1), (4 * k + 1, 1), (4 * k + 1, 2)]);
        }
        coords.extend([(40, 2), (40, 0)]);
        let input = pts(&coords);
        assert_delaunay(&input, &delaunay(&input).unwrap());
    }

    #[test]
    fn collinear_prefix_seeds_a_fan() {
        // Several collinear points sort before the first off-line point, which
        // may fall on either side of the line.
        for apex in [(4, 9), (4, -5)] {
            let input = pts(&[(0, 0), (1, 1), (2, 2), (3, 3), apex, (6, 3)]);
            assert_delaunay(&input, &delaunay(&input).unwrap());
        }
    }

    #[test]
    fn duplicates_are_collapsed() {
        let mesh = delaunay(&pts(&[(0, 0), (4, 0), (0, 0), (0, 4)])).unwrap();
        assert_eq!(mesh.len(), 1);
    }

    #[test]
    fn too_few_or_collinear_points_fail() {
        assert!(matches!(
            delaunay(&pts(&[(0, 0), (1, 1)])),
            Err(CoverError::Triangulation { .. })
        ));
        assert!(matches!(
            delaunay(&pts(&[(0, 0), (1, 1), (2, 2), (5, 5)])),
            Err(CoverError::Triangulation { .. })
        ));
    }

    #[test]
    fn oversized_span_is_rejected() {
        let big = MAX_COORD_SPAN + 1;
        assert!(matches!(
            delaunay(&pts(&[(0, 0), (big, 0), (0, 1)])),
            Err(CoverError::Triangulation { .. })
        ));
        // Full i64 range must not overflow.
        assert!(matches!(
            delaunay(&pts(&[(i64::MIN, 0), (i64::MAX, 0), (i64::MAX, 5)])),
            Err(CoverError::Triangulation { .. })
        ));
    }

    #[test]
    fn small_span_near_the_i64_limit() {
        let top = i64::MAX;
        let input = pts(&[(top - 6, top - 6), (top, top - 6), (top, top), (top - 6, top)]);
        let mesh = delaunay(&input).unwrap();
        assert_eq!(mesh.len(), 2);
        let low = i64::MIN;
        let input = pts(&[(low, low), (low + 6, low), (low + 3, low + 6)]);
        assert_eq!(delaunay(&input).unwrap().len(), 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn generated_polygons_fill_their_hull(half in 2usize..20, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let Ok(generated) = generate_with_rng(half * 2, &OrthoCfg::default(), &mut rng) else {
                return Ok(());
            };
            let poly = generated.polygon;
            let mesh = delaunay(poly.points()).unwrap();
            assert_delaunay(poly.points(), &mesh);
        }

        #[test]
        fn grid_subsets_fill_their_hull(
            cells in proptest::collection::vec((0i64..10, 0i64..10), 3..40)
        ) {
            let input: Vec<Point> = cells.iter().map(|&(x, y)| Point::new(x, y)).collect();
            if let Ok(mesh) = delaunay(&input) {
                assert_delaunay(&input, &mesh);
            }
        }
    }
}
