//! Serializable comparison report plus JSON and CSV writers.

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path;
use yardcam::api::{uncovered_vertices, Comparison, Coverage, Polygon};

#[derive(Debug, Serialize)]
pub struct MethodRow {
    pub method: String,
    pub ok: bool,
    pub camera_count: Option<usize>,
    pub cameras: Vec<[i64; 2]>,
    /// `false` when the placer stopped early (partial cover).
    pub complete: Option<bool>,
    /// Vertices no camera can see under the line-of-sight rule.
    pub out_of_sight: Option<usize>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub vertex_count: usize,
    pub quarter_bound: usize,
    pub fifth_bound: usize,
    pub methods: Vec<MethodRow>,
}

impl Report {
    pub fn build(polygon: &Polygon, cmp: &Comparison) -> Self {
        let methods = cmp
            .outcomes
            .iter()
            .map(|o| match &o.result {
                Ok(p) => MethodRow {
                    method: o.method.name().to_string(),
                    ok: true,
                    camera_count: Some(p.cameras.len()),
                    cameras: p.cameras.iter().map(|c| [c.x, c.y]).collect(),
                    complete: Some(matches!(p.coverage, Coverage::Complete)),
                    out_of_sight: Some(uncovered_vertices(polygon, &p.cameras).len()),
                    error: None,
                },
                Err(e) => MethodRow {
                    method: o.method.name().to_string(),
                    ok: false,
                    camera_count: None,
                    cameras: Vec::new(),
                    complete: None,
                    out_of_sight: None,
                    error: Some(e.to_string()),
                },
            })
            .collect();
        Self {
            vertex_count: cmp.vertex_count,
            quarter_bound: cmp.quarter_bound,
            fifth_bound: cmp.fifth_bound,
            methods,
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        ensure_parent(path)?;
        fs::write(path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))
    }

    /// One CSV row per method: method, ok, cameras, complete, out_of_sight, error.
    pub fn write_table(&self, path: &Path) -> Result<()> {
        ensure_parent(path)?;
        let mut df = self.to_frame()?;
        let mut file =
            fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn to_frame(&self) -> Result<DataFrame> {
        let method: Vec<&str> = self.methods.iter().map(|r| r.method.as_str()).collect();
        let ok: Vec<bool> = self.methods.iter().map(|r| r.ok).collect();
        let cameras: Vec<Option<u32>> = self
            .methods
            .iter()
            .map(|r| r.camera_count.map(|c| c as u32))
            .collect();
        let complete: Vec<Option<bool>> = self.methods.iter().map(|r| r.complete).collect();
        let out_of_sight: Vec<Option<u32>> = self
            .methods
            .iter()
            .map(|r| r.out_of_sight.map(|c| c as u32))
            .collect();
        let error: Vec<&str> = self
            .methods
            .iter()
            .map(|r| r.error.as_deref().unwrap_or(""))
            .collect();
        let df = df!(
            "method" => method,
            "ok" => ok,
            "cameras" => cameras,
            "complete" => complete,
            "out_of_sight" => out_of_sight,
            "error" => error
        )?;
        Ok(df)
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use yardcam::api::{compare, CompareCfg};

    fn flat_and_square() -> (Polygon, Polygon) {
        (
            Polygon::from_coords(&[(0, 0), (2, 0), (5, 0), (3, 0)]).unwrap(),
            Polygon::from_coords(&[(0, 0), (4, 0), (4, 4), (0, 4)]).unwrap(),
        )
    }

    #[test]
    fn failed_method_is_reported_not_dropped() {
        let (flat, _) = flat_and_square();
        let report = Report::build(&flat, &compare(&flat, &CompareCfg::default()));
        assert_eq!(report.methods.len(), 3);
        let delaunay = &report.methods[1];
        assert_eq!(delaunay.method, "Delaunay");
        assert!(!delaunay.ok);
        assert!(delaunay.error.as_deref().unwrap().contains("collinear"));
        assert!(report.methods[0].ok && report.methods[2].ok);
    }

    #[test]
    fn json_and_csv_outputs() {
        let (_, square) = flat_and_square();
        let report = Report::build(&square, &compare(&square, &CompareCfg::default()));
        let dir = tempdir().unwrap();

        let json_path = dir.path().join("out/report.json");
        report.write_json(&json_path).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_slice(&fs::read(&json_path).unwrap()).unwrap();
        assert_eq!(parsed["vertex_count"], 4);
        assert_eq!(parsed["methods"][2]["method"], "Geometric");
        assert_eq!(parsed["methods"][2]["camera_count"], 2);
        assert_eq!(parsed["methods"][2]["out_of_sight"], 0);

        let csv_path = dir.path().join("out/report.csv");
        report.write_table(&csv_path).unwrap();
        let text = fs::read_to_string(&csv_path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "method,ok,cameras,complete,out_of_sight,error"
        );
        assert_eq!(lines.count(), 3);
    }
}
