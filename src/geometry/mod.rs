//! Geometry and quality evaluation for surface triangles.
//!
//! Leaves first: [`primitives`] (vector helpers, normals, sizes),
//! [`classify`] (needle/obtuse detection), [`metric_length`] (metric edge
//! lengths and areas), [`quality`] (unsigned evaluators) and [`signed`]
//! (orientation-aware evaluators).

pub mod classify;
pub mod metric_length;
pub mod primitives;
pub mod quality;
pub mod signed;

/// Threshold below which a squared magnitude, area or length sum is treated
/// as zero.
pub const EPSD: f64 = 1e-30;

/// Tighter zero threshold used for determinants and the isotropic area test.
pub const EPSD2: f64 = 1e-200;
