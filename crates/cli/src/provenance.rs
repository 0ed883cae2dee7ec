//! `<stem>.provenance.json` records written next to every output file.
//!
//! A record says which build produced the artifact, which polygon it was run on
//! (and how that polygon was generated, if it was), and what each method placed.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use yardcam::api::{Comparison, Polygon};

/// How a generated polygon came about; enough to replay it.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct GeneratorRun {
    pub requested: usize,
    pub seed: u64,
    pub attempts: u32,
    pub max_attempts: u32,
}

#[derive(Debug, Serialize)]
pub struct CameraCount {
    pub method: &'static str,
    /// `None` when the method failed.
    pub cameras: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct Sidecar {
    pub code_rev: String,
    pub yardcam_version: &'static str,
    pub command: &'static str,
    pub artifact: String,
    pub vertex_count: usize,
    pub orthogonal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<GeneratorRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_weight: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub placements: Vec<CameraCount>,
}

impl Sidecar {
    pub fn new(command: &'static str, polygon: &Polygon) -> Self {
        Self {
            code_rev: current_git_rev(),
            yardcam_version: yardcam::VERSION,
            command,
            artifact: String::new(),
            vertex_count: polygon.len(),
            orthogonal: polygon.is_orthogonal(),
            generator: None,
            global_weight: None,
            placements: Vec::new(),
        }
    }

    pub fn with_generator(mut self, run: Option<GeneratorRun>) -> Self {
        self.generator = run;
        self
    }

    /// Camera count per method, in the comparison's run order.
    pub fn with_comparison(mut self, cmp: &Comparison, global_weight: f64) -> Self {
        self.global_weight = Some(global_weight);
        self.placements = cmp
            .outcomes
            .iter()
            .map(|o| CameraCount {
                method: o.method.name(),
                cameras: o.result.as_ref().ok().map(|p| p.cameras.len()),
            })
            .collect();
        self
    }

    /// Write the record for `artifact`; returns the sidecar path.
    pub fn write(mut self, artifact: &Path) -> Result<PathBuf> {
        self.artifact = artifact.to_string_lossy().into_owned();
        let path = provenance_path(artifact);
        fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

fn provenance_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Commit hash from `GIT_COMMIT` at build time, else at run time, else `"unknown"`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;
    use yardcam::api::{compare, CompareCfg, Method};

    fn square() -> Polygon {
        Polygon::from_coords(&[(0, 0), (4, 0), (4, 4), (0, 4)]).unwrap()
    }

    #[test]
    fn sidecar_name_replaces_extension() {
        assert_eq!(
            provenance_path(Path::new("/tmp/out/random_points.txt")),
            Path::new("/tmp/out/random_points.provenance.json")
        );
    }

    #[test]
    fn generate_record_carries_the_seed() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("random_points.txt");
        let run = GeneratorRun {
            requested: 5,
            seed: 42,
            attempts: 3,
            max_attempts: 100,
        };
        let path = Sidecar::new("generate", &square())
            .with_generator(Some(run))
            .write(&artifact)
            .unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "generate");
        assert_eq!(parsed["vertex_count"], 4);
        assert_eq!(parsed["orthogonal"], true);
        assert_eq!(parsed["generator"]["seed"], 42);
        assert_eq!(parsed["generator"]["attempts"], 3);
        assert_eq!(parsed["artifact"], artifact.to_string_lossy().as_ref());
        assert!(parsed.get("placements").is_none());
        assert_eq!(parsed["yardcam_version"], yardcam::VERSION);
    }

    #[test]
    fn analyze_record_lists_camera_counts() {
        let dir = tempdir().unwrap();
        let flat = Polygon::from_coords(&[(0, 0), (2, 0), (5, 0), (3, 0)]).unwrap();
        let cfg = CompareCfg {
            methods: vec![Method::Geometric, Method::Delaunay],
            ..CompareCfg::default()
        };
        let cmp = compare(&flat, &cfg);
        let path = Sidecar::new("analyze", &flat)
            .with_comparison(&cmp, 0.5)
            .write(&dir.path().join("report.json"))
            .unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["global_weight"], 0.5);
        assert_eq!(parsed["placements"][0]["method"], "Geometric");
        assert!(parsed["placements"][0]["cameras"].is_u64());
        assert_eq!(parsed["placements"][1]["method"], "Delaunay");
        assert!(parsed["placements"][1]["cameras"].is_null());
        assert!(parsed.get("generator").is_none());
    }
}
