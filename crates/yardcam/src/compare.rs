//! Run every placer on one polygon and collect the results side by side.
//!
//! Each placer runs on its own; a failure (e.g. a collinear vertex set that
//! cannot be triangulated) is recorded next to the other results and never stops
//! them.

use crate::error::CoverError;
use crate::placement::{
    DelaunayPlacer, GeometricPlacer, GreedyCfg, GreedyPlacer, Method, Placement, Placer,
};
use crate::polygon::Polygon;
use crate::visibility::VisibilityMap;

#[derive(Clone, Debug)]
pub struct CompareCfg {
    /// Methods to run, in report order.
    pub methods: Vec<Method>,
    pub greedy: GreedyCfg,
}

impl Default for CompareCfg {
    fn default() -> Self {
        Self {
            methods: Method::ALL.to_vec(),
            greedy: GreedyCfg::default(),
        }
    }
}

/// Outcome of one method within a comparison.
#[derive(Clone, Debug)]
pub struct MethodOutcome {
    pub method: Method,
    pub result: Result<Placement, CoverError>,
}

#[derive(Clone, Debug)]
pub struct Comparison {
    pub vertex_count: usize,
    /// `⌊n/4⌋`, the orthogonal art-gallery bound.
    pub quarter_bound: usize,
    /// `⌊n/5⌋`, printed alongside for reference.
    pub fifth_bound: usize,
    pub outcomes: Vec<MethodOutcome>,
}

impl Comparison {
    pub fn get(&self, method: Method) -> Option<&MethodOutcome> {
        self.outcomes.iter().find(|o| o.method == method)
    }

    /// True if at least one method produced a placement.
    pub fn any_succeeded(&self) -> bool {
        self.outcomes.iter().any(|o| o.result.is_ok())
    }
}

/// Run the configured methods on `polygon`.
pub fn compare(polygon: &Polygon, cfg: &CompareCfg) -> Comparison {
    let n = polygon.len();
    // Built lazily and shared by every visibility-based method that needs it.
    let mut map: Option<VisibilityMap> = None;
    let mut outcomes = Vec::with_capacity(cfg.methods.len());
    for &method in &cfg.methods {
        let result = match method {
            Method::Geometric => GeometricPlacer.place(polygon),
            Method::Greedy => {
                let map = map.get_or_insert_with(|| VisibilityMap::build(polygon));
                GreedyPlacer::new(cfg.greedy).place_with_map(polygon, map)
            }
            Method::Delaunay => DelaunayPlacer.place(polygon),
        };
        if let Err(e) = &result {
            tracing::warn!(%method, error = %e, "placer failed");
        }
        outcomes.push(MethodOutcome { method, result });
    }
    Comparison {
        vertex_count: n,
        quarter_bound: n / 4,
        fifth_bound: n / 5,
        outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_all_methods_in_presentation_order() {
        let sq = Polygon::from_coords(&[(0, 0), (4, 0), (4, 4), (0, 4)]).unwrap();
        let cmp = compare(&sq, &CompareCfg::default());
        let order: Vec<Method> = cmp.outcomes.iter().map(|o| o.method).collect();
        assert_eq!(order, vec![Method::Greedy, Method::Delaunay, Method::Geometric]);
        assert_eq!(cmp.vertex_count, 4);
        assert_eq!(cmp.quarter_bound, 1);
        assert_eq!(cmp.fifth_bound, 0);
        assert!(cmp.outcomes.iter().all(|o| o.result.is_ok()));
    }

    #[test]
    fn triangulation_failure_does_not_stop_the_others() {
        // Valid polygon (consecutive points differ) whose vertices are collinear.
        let flat = Polygon::from_coords(&[(0, 0), (2, 0), (5, 0), (3, 0)]).unwrap();
        let cmp = compare(&flat, &CompareCfg::default());
        assert!(matches!(
            cmp.get(Method::Delaunay).unwrap().result,
            Err(CoverError::Triangulation { .. })
        ));
        let greedy = cmp.get(Method::Greedy).unwrap().result.as_ref().unwrap();
        let geometric = cmp.get(Method::Geometric).unwrap().result.as_ref().unwrap();
        assert!(greedy.is_complete());
        assert!(geometric.is_complete());
        assert!(cmp.any_succeeded());
    }

    #[test]
    fn invalid_weight_fails_only_greedy() {
        let sq = Polygon::from_coords(&[(0, 0), (4, 0), (4, 4), (0, 4)]).unwrap();
        let cfg = CompareCfg {
            methods: vec![Method::Greedy, Method::Geometric],
            greedy: GreedyCfg {
                global_weight: f64::NAN,
            },
        };
        let cmp = compare(&sq, &cfg);
        assert_eq!(cmp.outcomes.len(), 2);
        assert!(matches!(
            cmp.outcomes[0].result,
            Err(CoverError::InvalidParams { .. })
        ));
        assert!(cmp.outcomes[1].result.is_ok());
    }

    #[test]
    fn extreme_coordinates_fail_only_delaunay() {
        let wide =
            Polygon::from_coords(&[(i64::MIN, 0), (i64::MAX, 0), (i64::MAX, 5)]).unwrap();
        let cmp = compare(&wide, &CompareCfg::default());
        assert!(matches!(
            cmp.get(Method::Delaunay).unwrap().result,
            Err(CoverError::Triangulation { .. })
        ));
        assert!(cmp.get(Method::Greedy).unwrap().result.is_ok());
        assert!(cmp.get(Method::Geometric).unwrap().result.is_ok());
    }
}
