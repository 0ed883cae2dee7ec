//! Random orthogonal "staircase" polygons for stress-testing the placers.
//!
//! Model
//! - Round the target vertex count `n` down to even. Walk a cursor from `(0, 0)`,
//!   alternating vertical and horizontal steps. Vertical steps go up until the
//!   cursor reaches height `n / 2`, then down. Horizontal steps always go right.
//! - After `n - 1` steps the walk closes with a final vertex at `(x, 0)`.
//! - If the cursor ever reaches `y <= 0` mid-walk the draw is degenerate and a
//!   fresh walk is started. Attempts are capped by `OrthoCfg::max_attempts`.
//!
//! Determinism
//! - Randomness enters only through the `Rng` passed to `generate_with_rng`.
//!   `OrthoGenerator` owns a seeded `StdRng` for reproducible streams.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::CoverError;
use crate::polygon::{Point, Polygon};

/// Inclusive step-size range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepRange {
    pub min: i64,
    pub max: i64,
}

impl StepRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.gen_range(self.min..=self.max)
    }

    fn validate(&self, name: &str) -> Result<(), CoverError> {
        if self.min < 1 || self.max < self.min {
            return Err(CoverError::invalid(format!(
                "{name} must satisfy 1 <= min <= max, got {}..={}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Generator configuration.
#[derive(Clone, Copy, Debug)]
pub struct OrthoCfg {
    /// Fresh walks tried before giving up.
    pub max_attempts: u32,
    pub vertical_step: StepRange,
    pub horizontal_step: StepRange,
}

impl Default for OrthoCfg {
    fn default() -> Self {
        Self {
            max_attempts: 100_000,
            vertical_step: StepRange::new(1, 4),
            horizontal_step: StepRange::new(1, 5),
        }
    }
}

impl OrthoCfg {
    pub fn validate(&self) -> Result<(), CoverError> {
        if self.max_attempts == 0 {
            return Err(CoverError::invalid("max_attempts must be > 0"));
        }
        self.vertical_step.validate("vertical_step")?;
        self.horizontal_step.validate("horizontal_step")
    }
}

/// A generated polygon plus how many walks it took.
#[derive(Clone, Debug)]
pub struct Generated {
    pub polygon: Polygon,
    pub attempts: u32,
}

/// Target count rounded down to even; rejects counts that cannot close a polygon.
pub fn even_vertex_count(target: usize) -> Result<usize, CoverError> {
    let n = target - target % 2;
    if n < 4 {
        return Err(CoverError::degenerate(format!(
            "orthogonal polygon needs at least 4 vertices, target {target} rounds to {n}"
        )));
    }
    Ok(n)
}

/// Generate with the caller's random source.
pub fn generate_with_rng<R: Rng + ?Sized>(
    target: usize,
    cfg: &OrthoCfg,
    rng: &mut R,
) -> Result<Generated, CoverError> {
    cfg.validate()?;
    let n = even_vertex_count(target)?;
    for attempt in 1..=cfg.max_attempts {
        if let Some(points) = walk(n, cfg, rng) {
            tracing::debug!(vertices = n, attempts = attempt, "orthogonal polygon accepted");
            return Ok(Generated {
                polygon: Polygon::new(points)?,
                attempts: attempt,
            });
        }
    }
    Err(CoverError::degenerate(format!(
        "no valid {n}-vertex walk within {} attempts",
        cfg.max_attempts
    )))
}

/// One walk; `None` if the cursor touched `y <= 0` before closing.
fn walk<R: Rng + ?Sized>(n: usize, cfg: &OrthoCfg, rng: &mut R) -> Option<Vec<Point>> {
    let n_i = n as i64;
    let mut points = Vec::with_capacity(n);
    let (mut x, mut y) = (0i64, 0i64);
    let mut turned = false;
    let mut vertical = true;
    for _ in 0..n - 1 {
        points.push(Point::new(x, y));
        if 2 * y >= n_i {
            turned = true;
        }
        if vertical {
            let d = cfg.vertical_step.sample(rng);
            y = if turned { y - d } else { y + d };
        } else {
            x += cfg.horizontal_step.sample(rng);
        }
        vertical = !vertical;
        if y <= 0 {
            return None;
        }
    }
    points.push(Point::new(x, 0));
    Some(points)
}

/// Seeded generator for reproducible polygon streams.
pub struct OrthoGenerator {
    cfg: OrthoCfg,
    rng: StdRng,
}

impl OrthoGenerator {
    pub fn new(cfg: OrthoCfg, seed: u64) -> Result<Self, CoverError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn generate(&mut self, target: usize) -> Result<Generated, CoverError> {
        generate_with_rng(target, &self.cfg, &mut self.rng)
    }
}
