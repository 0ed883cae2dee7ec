//! Weighted greedy: one precomputed visibility map, hybrid score
//! `|visible ∩ uncovered| + w · |visible|`.
//!
//! The second term only separates candidates with equal immediate gain in favor
//! of globally well-connected vertices. `w` defaults to `DEFAULT_GLOBAL_WEIGHT`
//! and has no derivation behind it; keep it configurable.

use super::{Coverage, Method, Placement, Placer};
use crate::error::CoverError;
use crate::polygon::Polygon;
use crate::visibility::VisibilityMap;

/// Weight of the static global-visibility term.
pub const DEFAULT_GLOBAL_WEIGHT: f64 = 0.01;

#[derive(Clone, Copy, Debug)]
pub struct GreedyCfg {
    pub global_weight: f64,
}

impl Default for GreedyCfg {
    fn default() -> Self {
        Self {
            global_weight: DEFAULT_GLOBAL_WEIGHT,
        }
    }
}

impl GreedyCfg {
    pub fn validate(&self) -> Result<(), CoverError> {
        if !self.global_weight.is_finite() || self.global_weight < 0.0 {
            return Err(CoverError::invalid(
                "global_weight must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPlacer {
    pub cfg: GreedyCfg,
}

impl GreedyPlacer {
    pub fn new(cfg: GreedyCfg) -> Self {
        Self { cfg }
    }

    /// Run against a visibility map built elsewhere (shared across callers).
    pub fn place_with_map(
        &self,
        polygon: &Polygon,
        map: &VisibilityMap,
    ) -> Result<Placement, CoverError> {
        self.cfg.validate()?;
        let n = polygon.len();
        if map.len() != n {
            return Err(CoverError::invalid(format!(
                "visibility map has {} rows for {n} vertices",
                map.len()
            )));
        }
        let w = self.cfg.global_weight;
        let mut uncovered = vec![true; n];
        let mut left = n;
        let mut used = vec![false; n];
        let mut cameras = Vec::new();
        let mut camera_indices = Vec::new();
        let mut trace = Vec::new();

        while left > 0 {
            let mut best: Option<(usize, f64)> = None;
            for idx in (0..n).filter(|&i| !used[i]) {
                let gain = map.visible(idx).iter().filter(|&&j| uncovered[j]).count();
                let score = gain as f64 + w * map.degree(idx) as f64;
                if best.map_or(true, |(_, s)| score > s) {
                    best = Some((idx, score));
                }
            }
            let Some((idx, score)) = best else {
                break;
            };
            for &j in map.visible(idx) {
                if uncovered[j] {
                    uncovered[j] = false;
                    left -= 1;
                }
            }
            used[idx] = true;
            tracing::debug!(camera = idx, score, left, "greedy pick");
            cameras.push(polygon.point(idx));
            camera_indices.push(idx);
            trace.push(left);
        }

        let coverage = if left == 0 {
            Coverage::Complete
        } else {
            Coverage::Partial {
                uncovered: (0..n).filter(|&i| uncovered[i]).collect(),
            }
        };
        let placement = Placement {
            method: Method::Greedy,
            cameras,
            camera_indices,
            coverage,
            trace,
        };
        tracing::debug!(
            quarter_bound = n / 4,
            fifth_bound = n / 5,
            "orthogonal art-gallery reference bounds"
        );
        placement.log();
        Ok(placement)
    }
}

impl Placer for GreedyPlacer {
    fn method(&self) -> Method {
        Method::Greedy
    }

    fn place(&self, polygon: &Polygon) -> Result<Placement, CoverError> {
        let map = VisibilityMap::build(polygon);
        self.place_with_map(polygon, &map)
    }
}
