//! Triangle-incidence cover over an unconstrained Delaunay triangulation.
//!
//! Each round picks the vertex that appears in the most remaining triangles and
//! discards every triangle it touches. Coverage here means "every triangle has a
//! camera corner", not line of sight.
//!
//! Ties go to the corner met first when walking the remaining triangles in mesh
//! order (corners `a`, `b`, `c` of each).

use super::{Coverage, Method, Placement, Placer};
use crate::error::CoverError;
use crate::polygon::{Point, Polygon};
use crate::triangulation::{delaunay, Triangle, TriangleMesh};

#[derive(Clone, Copy, Debug, Default)]
pub struct DelaunayPlacer;

impl DelaunayPlacer {
    /// Run against an existing mesh over `polygon`'s vertices.
    pub fn place_on_mesh(&self, polygon: &Polygon, mesh: &TriangleMesh) -> Placement {
        let mut remaining: TriangleMesh = mesh.clone();
        let mut cameras = Vec::new();
        let mut camera_indices = Vec::new();
        let mut trace = Vec::new();

        while !remaining.is_empty() {
            let Some((p, hits)) = most_common_corner(&remaining) else {
                break;
            };
            let Some(i) = polygon.index_of(&p) else {
                // Corner outside the polygon's vertex set; cannot happen for a mesh
                // built from `polygon`, but never loop forever on a foreign mesh.
                break;
            };
            remaining.retain(|t| !t.contains_vertex(&p));
            tracing::debug!(camera = i, hits, left = remaining.len(), "delaunay pick");
            cameras.push(p);
            camera_indices.push(i);
            trace.push(remaining.len());
        }

        let coverage = if remaining.is_empty() {
            Coverage::Complete
        } else {
            Coverage::Partial {
                uncovered: Vec::new(),
            }
        };
        let placement = Placement {
            method: Method::Delaunay,
            cameras,
            camera_indices,
            coverage,
            trace,
        };
        placement.log();
        placement
    }
}

/// Corner with the highest triangle count; first seen in mesh order wins ties.
fn most_common_corner(mesh: &[Triangle]) -> Option<(Point, usize)> {
    let mut counts: Vec<(Point, usize)> = Vec::new();
    for t in mesh {
        for p in [t.a, t.b, t.c] {
            match counts.iter_mut().find(|(q, _)| *q == p) {
                Some((_, n)) => *n += 1,
                None => counts.push((p, 1)),
            }
        }
    }
    counts
        .into_iter()
        .fold(None, |best: Option<(Point, usize)>, (p, n)| match best {
            Some((_, m)) if m >= n => best,
            _ => Some((p, n)),
        })
}

impl Placer for DelaunayPlacer {
    fn method(&self) -> Method {
        Method::Delaunay
    }

    fn place(&self, polygon: &Polygon) -> Result<Placement, CoverError> {
        let mesh = delaunay(polygon.points())?;
        tracing::debug!(triangles = mesh.len(), "delaunay mesh");
        Ok(self.place_on_mesh(polygon, &mesh))
    }
}
