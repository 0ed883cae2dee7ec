//! Geometric heuristic: repeatedly pick the uncovered vertex that sees the most
//! uncovered vertices, recomputing visibility against the current state each round.

use std::collections::BTreeSet;

use super::{Coverage, Method, Placement, Placer};
use crate::error::CoverError;
use crate::polygon::Polygon;
use crate::visibility::is_visible;

/// Candidates are restricted to still-uncovered vertices; no precomputation.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeometricPlacer;

impl Placer for GeometricPlacer {
    fn method(&self) -> Method {
        Method::Geometric
    }

    fn place(&self, polygon: &Polygon) -> Result<Placement, CoverError> {
        let pts = polygon.points();
        let mut uncovered: BTreeSet<usize> = (0..pts.len()).collect();
        let mut cameras = Vec::new();
        let mut camera_indices = Vec::new();
        let mut trace = Vec::new();

        while !uncovered.is_empty() {
            let mut best: Option<(usize, Vec<usize>)> = None;
            // Ascending iteration + strict `>` = lowest index wins ties.
            for &i in &uncovered {
                let seen: Vec<usize> = uncovered
                    .iter()
                    .copied()
                    .filter(|&j| is_visible(polygon, pts[i], pts[j]))
                    .collect();
                let better = match &best {
                    Some((_, b)) => seen.len() > b.len(),
                    None => !seen.is_empty(),
                };
                if better {
                    best = Some((i, seen));
                }
            }
            let Some((i, seen)) = best else {
                break;
            };
            for j in &seen {
                uncovered.remove(j);
            }
            tracing::debug!(camera = i, gained = seen.len(), left = uncovered.len(), "geometric pick");
            cameras.push(pts[i]);
            camera_indices.push(i);
            trace.push(uncovered.len());
        }

        let coverage = if uncovered.is_empty() {
            Coverage::Complete
        } else {
            Coverage::Partial {
                uncovered: uncovered.into_iter().collect(),
            }
        };
        let placement = Placement {
            method: Method::Geometric,
            cameras,
            camera_indices,
            coverage,
            trace,
        };
        placement.log();
        Ok(placement)
    }
}
