#![cfg_attr(docsrs, feature(doc_cfg))]
//! # trimesh-quality
//!
//! trimesh-quality evaluates the shape quality of triangles on a surface mesh and
//! reports aggregate statistics. It is meant to sit underneath a remeshing or
//! adaptation driver: the driver owns the mesh and the metric field, this crate
//! only reads them and returns scalars, classifications and histograms.
//!
//! ## Features
//! - Geometry primitives: face normals, centroid "incircle" radius, diameter
//! - Needle/obtuse shape classification with the implicated edge
//! - Isotropic quality `|ab × ac| / Σ|e|²` and three anisotropic variants
//!   driven by a per-vertex symmetric metric tensor
//! - Orientation-aware (signed) evaluators that flag folded elements against
//!   the surface normal field, including ridge points carrying two normals
//! - A scan-and-histogram reporter writing to any [`std::io::Write`] sink
//!
//! ## Quality scale
//!
//! Raw evaluator values are multiplied by [`ALPHAD`](report::ALPHAD) in the
//! reporter so an equilateral triangle scores `1.0` and a degenerate one `0.0`.
//! Signed evaluators return `-1.0` for an inverted element.
//!
//! ## Usage
//! ```rust
//! use trimesh_quality::prelude::*;
//!
//! let mut mesh = SurfaceMesh::new();
//! let n = [0.0, 0.0, 1.0];
//! let a = mesh.try_add_point([0.0, 0.0, 0.0], PointTag::empty(), n)?;
//! let b = mesh.try_add_point([1.0, 0.0, 0.0], PointTag::empty(), n)?;
//! let c = mesh.try_add_point([0.5, 3f64.sqrt() / 2.0, 0.0], PointTag::empty(), n)?;
//! let t = mesh.try_add_triangle([a, b, c])?;
//!
//! let q = ALPHAD * quality_iso(&mesh, t);
//! assert!((q - 1.0).abs() < 1e-12);
//! assert_eq!(classify_triangle(&mesh, t), TriangleShape::Ok);
//!
//! let mut out = Vec::new();
//! let stats = input_quality(&mesh, None, &QualityConfig::default(), &mut out, None)?;
//! assert_eq!(stats.count, 1);
//! # Ok::<(), trimesh_quality::mesh_error::QualityError>(())
//! ```

pub mod data;
pub mod debug_invariants;
pub mod geometry;
pub mod mesh_error;
pub mod report;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::data::metric::{MetricField, SymTensor3};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::classify::{TriangleShape, classify, classify_triangle};
    pub use crate::geometry::metric_length::{MetricLength, StraightEdgeMetric};
    pub use crate::geometry::primitives::{diameter_sq, face_normal, incircle};
    pub use crate::geometry::quality::{
        quality_aniso, quality_aniso_explicit, quality_aniso_surface, quality_iso,
        quality_iso_points,
    };
    pub use crate::geometry::signed::{
        NormalKind, SignedQuality, quality_signed_aniso, quality_signed_iso,
    };
    pub use crate::mesh_error::QualityError;
    pub use crate::report::{
        ALPHAD, BADKAL, DebugContext, Histogram, QualityConfig, QualityStats, ReportMode,
        input_quality, output_quality, scan_quality, write_report,
    };
    pub use crate::topology::mesh::{Point, RidgeNormals, SurfaceMesh, Triangle};
    pub use crate::topology::point::{TriangleId, VertexId};
    pub use crate::topology::tags::{EdgeTag, PointTag};
}
