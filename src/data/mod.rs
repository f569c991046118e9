//! Field data attached to mesh points.

pub mod metric;
