//! Camera placement heuristics behind one `Placer` capability.
//!
//! Purpose
//! - Three independent approximations of the vertex-guard cover problem:
//!   `Geometric` (recomputed line-of-sight gain), `Greedy` (precomputed visibility
//!   map plus a small global tie-break term) and `Delaunay` (triangle incidence).
//! - The first two share the `visibility` notion of coverage; `Delaunay` covers
//!   triangles instead. The two notions differ and the camera
//!   counts are not expected to agree.
//!
//! Determinism
//! - `Geometric` and `Greedy` pick the lowest vertex index among equal scores.
//! - `Delaunay` picks the point whose first occurrence in the polygon has the
//!   lowest index among equal triangle counts.
//!
//! Code cross-refs: `visibility::{is_visible, VisibilityMap}`, `triangulation::delaunay`.

mod delaunay;
mod geometric;
mod greedy;

pub use delaunay::DelaunayPlacer;
pub use geometric::GeometricPlacer;
pub use greedy::{GreedyCfg, GreedyPlacer, DEFAULT_GLOBAL_WEIGHT};

use std::fmt;

use crate::error::{CoverError, PartialCoverageWarning};
use crate::polygon::{Point, Polygon};

/// Placement method identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Geometric,
    Greedy,
    Delaunay,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Greedy, Method::Delaunay, Method::Geometric];

    pub fn name(self) -> &'static str {
        match self {
            Method::Geometric => "Geometric",
            Method::Greedy => "Greedy",
            Method::Delaunay => "Delaunay",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether the selected cameras cover everything the method tracks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Coverage {
    Complete,
    /// The run stopped with these vertex indices still uncovered.
    Partial { uncovered: Vec<usize> },
}

/// Observability record handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub method_name: &'static str,
    pub camera_count: usize,
}

/// Result of one placer run.
#[derive(Clone, Debug)]
pub struct Placement {
    pub method: Method,
    pub cameras: Vec<Point>,
    /// Polygon index of each camera (first occurrence of the point).
    pub camera_indices: Vec<usize>,
    pub coverage: Coverage,
    /// Size of the remaining work set after each selection: uncovered vertices
    /// for the visibility placers, remaining triangles for `Delaunay`.
    pub trace: Vec<usize>,
}

impl Placement {
    pub fn summary(&self) -> Summary {
        Summary {
            method_name: self.method.name(),
            camera_count: self.cameras.len(),
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self.coverage, Coverage::Complete)
    }

    /// `Some` when the run ended with a partial cover.
    pub fn warning(&self) -> Option<PartialCoverageWarning> {
        match &self.coverage {
            Coverage::Complete => None,
            Coverage::Partial { uncovered } => Some(PartialCoverageWarning {
                method: self.method,
                uncovered: uncovered.clone(),
            }),
        }
    }

    /// Log the summary (and the partial-cover warning, if any).
    pub(crate) fn log(&self) {
        tracing::info!(method = %self.method, cameras = self.cameras.len(), "cameras placed");
        if let Some(w) = self.warning() {
            tracing::warn!(method = %self.method, uncovered = w.uncovered.len(), "{w}");
        }
    }
}

/// A camera placement strategy over a frozen polygon.
pub trait Placer {
    fn method(&self) -> Method;

    fn place(&self, polygon: &Polygon) -> Result<Placement, CoverError>;

    /// Validate a raw vertex list, then place.
    fn place_points(&self, points: &[Point]) -> Result<Placement, CoverError> {
        let polygon = Polygon::new(points.to_vec())?;
        self.place(&polygon)
    }
}

/// Boxed placer for `method` with default configuration.
pub fn placer_for(method: Method) -> Box<dyn Placer + Send + Sync> {
    match method {
        Method::Geometric => Box::new(GeometricPlacer),
        Method::Greedy => Box::new(GreedyPlacer::default()),
        Method::Delaunay => Box::new(DelaunayPlacer),
    }
}
