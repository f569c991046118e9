//! Shape quality of surface triangles.
//!
//! All evaluators return `|ab × ac| / Σ|e|²` (twice the area over the sum of
//! squared edge lengths), optionally measured in a metric. The raw value of an
//! equilateral triangle is `sqrt(3) / 6`; multiply by
//! [`ALPHAD`](crate::report::ALPHAD) to normalise it to 1. Degenerate
//! configurations return 0 rather than an error.
//!
//! # Anisotropic variants
//! - [`quality_aniso`]: mean vertex metric for the determinant, Euclidean
//!   area, edge lengths from a [`MetricLength`] oracle.
//! - [`quality_aniso_explicit`]: mean vertex metric for everything; edge
//!   lengths are the quadratic forms `eᵗ M̄ e`.
//! - [`quality_aniso_surface`]: both the surface measure and the edge lengths
//!   come from the oracle.
//!
//! Under a uniform metric and [`StraightEdgeMetric`](super::metric_length::StraightEdgeMetric)
//! all three agree.

use super::metric_length::MetricLength;
use super::primitives::{area_vector, norm_sq, sub};
use super::{EPSD, EPSD2};
use crate::data::metric::{MetricField, SymTensor3};
use crate::topology::mesh::SurfaceMesh;
use crate::topology::point::TriangleId;

/// Isotropic quality of the triangle `a b c`.
pub fn quality_iso_points(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> f64 {
    let cal = norm_sq(area_vector(a, b, c));
    if cal < EPSD2 {
        return 0.0;
    }
    let rap = norm_sq(sub(b, a)) + norm_sq(sub(c, a)) + norm_sq(sub(c, b));
    if rap < EPSD2 {
        return 0.0;
    }
    cal.sqrt() / rap
}

/// Isotropic quality of triangle `t`.
pub fn quality_iso(mesh: &SurfaceMesh, t: TriangleId) -> f64 {
    let [a, b, c] = mesh.triangle_coords(t);
    quality_iso_points(a, b, c)
}

fn mean_metric(mesh: &SurfaceMesh, metric: &MetricField, t: TriangleId) -> SymTensor3 {
    let [ia, ib, ic] = mesh.triangle(t).v;
    SymTensor3::mean3(metric.get(ia), metric.get(ib), metric.get(ic))
}

/// Anisotropic quality with oracle-supplied edge lengths.
pub fn quality_aniso<L: MetricLength + ?Sized>(
    mesh: &SurfaceMesh,
    metric: &MetricField,
    t: TriangleId,
    oracle: &L,
) -> f64 {
    let det = mean_metric(mesh, metric, t).determinant();
    if det < EPSD2 {
        return 0.0;
    }
    let [a, b, c] = mesh.triangle_coords(t);
    let cal = norm_sq(area_vector(a, b, c));
    if cal < EPSD2 {
        return 0.0;
    }
    let rap = oracle.squared_edge_sum(mesh, metric, t);
    if rap < EPSD {
        return 0.0;
    }
    det.sqrt() * cal.sqrt() / rap
}

/// Anisotropic quality using the mean vertex metric as a constant metric over
/// the element.
pub fn quality_aniso_explicit(mesh: &SurfaceMesh, metric: &MetricField, t: TriangleId) -> f64 {
    let m = mean_metric(mesh, metric, t);
    let det = m.determinant();
    if det < EPSD2 {
        return 0.0;
    }
    let [a, b, c] = mesh.triangle_coords(t);
    let cal = norm_sq(area_vector(a, b, c)).sqrt();
    if cal <= EPSD {
        return 0.0;
    }
    let rap =
        m.quadratic_form(sub(b, a)) + m.quadratic_form(sub(c, a)) + m.quadratic_form(sub(c, b));
    if rap > EPSD {
        det.sqrt() * cal / rap
    } else {
        0.0
    }
}

/// Anisotropic quality with oracle-supplied surface and edge lengths.
pub fn quality_aniso_surface<L: MetricLength + ?Sized>(
    mesh: &SurfaceMesh,
    metric: &MetricField,
    t: TriangleId,
    oracle: &L,
) -> f64 {
    let surface = oracle.surface(mesh, metric, t);
    let rap = oracle.squared_edge_sum(mesh, metric, t);
    if rap < EPSD {
        return 0.0;
    }
    surface / rap
}
