//! Flat surface for the command-line and benchmark crates.
//!
//! Groups the entry points a front end needs: read a polygon, generate one,
//! run the placers, check coverage.

// Data model and codec
pub use crate::pointfile::{format_points, parse_points};
pub use crate::polygon::{Point, Polygon};
// Visibility
pub use crate::visibility::{is_visible, uncovered_vertices, VisibilityMap};
// Placement
pub use crate::placement::{
    placer_for, Coverage, DelaunayPlacer, GeometricPlacer, GreedyCfg, GreedyPlacer, Method,
    Placement, Placer, Summary, DEFAULT_GLOBAL_WEIGHT,
};
pub use crate::triangulation::{delaunay, Triangle, TriangleMesh};
// Generation
pub use crate::generator::{
    even_vertex_count, generate_with_rng, Generated, OrthoCfg, OrthoGenerator, StepRange,
};
// Comparison
pub use crate::compare::{compare, CompareCfg, Comparison, MethodOutcome};
pub use crate::error::{CoverError, PartialCoverageWarning};
