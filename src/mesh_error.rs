//! QualityError: unified error type for the fallible trimesh-quality APIs
//!
//! Quality evaluators never fail; degenerate geometry maps to sentinel values.
//! Errors are reserved for building meshes and metric fields that violate the
//! arena invariants, for invalid configuration and for report sink failures.

use thiserror::Error;

/// Unified error type for trimesh-quality operations.
#[derive(Debug, Error)]
pub enum QualityError {
    /// A triangle references a vertex index past the end of the point arena.
    #[error("vertex {vertex} out of range (mesh has {len} points)")]
    VertexOutOfRange { vertex: u32, len: usize },
    /// A triangle references the same vertex more than once.
    #[error("triangle references vertex {0} more than once")]
    DuplicateVertex(u32),
    /// A triangle handle past the end of the triangle arena.
    #[error("triangle {triangle} out of range (mesh has {len} triangles)")]
    TriangleOutOfRange { triangle: u32, len: usize },
    /// A supplied normal is not unit length.
    #[error("normal of vertex {vertex} is not unit length (|n| = {norm})")]
    NonUnitNormal { vertex: u32, norm: f64 },
    /// An edge point has no ridge-normal record to fall back on.
    #[error("edge point {0} has no ridge-normal record")]
    MissingRidgeRecord(u32),
    /// The metric field does not carry one tensor per mesh point.
    #[error("metric field size mismatch: expected {expected} tensors, found {found}")]
    MetricSizeMismatch { expected: usize, found: usize },
    /// A configuration value is outside its admissible range.
    #[error("invalid quality configuration: {0}")]
    InvalidConfig(String),
    /// Writing the formatted report failed.
    #[error("failed to write quality report: {0}")]
    Io(#[from] std::io::Error),
}
