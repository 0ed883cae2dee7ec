//! Point-file codec: one `"<int>, <int>"` line per vertex, in traversal order.
//!
//! Pure string functions; reading and writing files is the caller's job.

use crate::error::CoverError;
use crate::polygon::Point;

/// Parse a point file. Every line must be exactly `"<int>, <int>"`: one comma,
/// one space, no padding. A blank line is malformed too. Line numbers in errors
/// are 1-based.
pub fn parse_points(text: &str) -> Result<Vec<Point>, CoverError> {
    let mut out = Vec::new();
    for (k, line) in text.lines().enumerate() {
        let Some((xs, ys)) = line.split_once(", ") else {
            return Err(CoverError::parse(k + 1, format!("expected \"x, y\", got {line:?}")));
        };
        let x = parse_coord(xs, k + 1)?;
        let y = parse_coord(ys, k + 1)?;
        out.push(Point::new(x, y));
    }
    Ok(out)
}

fn parse_coord(token: &str, line: usize) -> Result<i64, CoverError> {
    token
        .parse::<i64>()
        .map_err(|e| CoverError::parse(line, format!("bad integer {token:?}: {e}")))
}

/// Format points as `"x, y\n"` lines.
pub fn format_points(points: &[Point]) -> String {
    let mut s = String::with_capacity(points.len() * 8);
    for p in points {
        s.push_str(&format!("{}, {}\n", p.x, p.y));
    }
    s
}
