//! Error types shared by the codec, the generator and the placers.

use thiserror::Error;

use crate::placement::Method;

/// Errors raised by polygon construction, point-file parsing, generation and triangulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverError {
    /// A point-file line did not hold exactly two comma-separated integers.
    #[error("point file line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Fewer than 3 points, repeated consecutive points, or a generator that ran out of attempts.
    #[error("degenerate polygon: {reason}")]
    DegeneratePolygon { reason: String },

    /// The Delaunay step could not triangulate the vertex set.
    #[error("triangulation failed: {reason}")]
    Triangulation { reason: String },

    /// Configuration values outside their valid range.
    #[error("invalid parameters: {reason}")]
    InvalidParams { reason: String },
}

impl CoverError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegeneratePolygon {
            reason: reason.into(),
        }
    }

    pub(crate) fn triangulation(reason: impl Into<String>) -> Self {
        Self::Triangulation {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

/// A placer stopped before every vertex was covered.
///
/// The camera set is still returned; this value only flags that it is not a full cover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{method}: partial coverage, {} vertices left uncovered", .uncovered.len())]
pub struct PartialCoverageWarning {
    pub method: Method,
    pub uncovered: Vec<usize>,
}
