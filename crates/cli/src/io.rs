//! Point files on disk.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use yardcam::api::{parse_points, Polygon};

/// Read and validate a polygon from a point file.
pub fn read_polygon(path: &Path) -> Result<Polygon> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let points = parse_points(&text).with_context(|| format!("parsing {}", path.display()))?;
    Polygon::new(points).with_context(|| format!("validating {}", path.display()))
}

/// Write a polygon in the point-file format, creating parent directories.
pub fn write_polygon(path: &Path, polygon: &Polygon) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, polygon.to_point_file())
        .with_context(|| format!("writing {}", path.display()))
}
