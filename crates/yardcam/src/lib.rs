//! Camera placement on orthogonal polygons ("prison yard" problem).
//!
//! Given the ordered vertices of a simple polygon, pick a small set of vertices
//! ("cameras") so that every vertex is seen by at least one camera, where sight
//! lines are horizontal or vertical and may not run along an intervening edge.
//! Three heuristics are provided and compared; none is exact.
//!
//! Layout
//! - `polygon`, `pointfile`: data model and the `"x, y"` point-file codec.
//! - `visibility`: the line-of-sight oracle and the precomputed relation.
//! - `placement`: the `Placer` capability and the three heuristics.
//! - `triangulation`: Delaunay mesh used by the triangle-incidence heuristic.
//! - `generator`: random orthogonal polygons with a bounded retry loop.
//! - `compare`: run every method on one polygon, failures isolated per method.

pub mod api;
pub mod compare;
pub mod error;
pub mod generator;
pub mod placement;
pub mod pointfile;
pub mod polygon;
pub mod triangulation;
pub mod visibility;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{CoverError, PartialCoverageWarning};
pub use placement::{Method, Placement, Placer, Summary};
pub use polygon::{Point, Polygon};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::compare::{compare, CompareCfg, Comparison, MethodOutcome};
    pub use crate::error::{CoverError, PartialCoverageWarning};
    pub use crate::generator::{generate_with_rng, OrthoCfg, OrthoGenerator};
    pub use crate::placement::{
        Coverage, DelaunayPlacer, GeometricPlacer, GreedyCfg, GreedyPlacer, Method, Placement,
        Placer, Summary,
    };
    pub use crate::pointfile::{format_points, parse_points};
    pub use crate::polygon::{Point, Polygon};
    pub use crate::visibility::{is_visible, uncovered_vertices, VisibilityMap};
}
