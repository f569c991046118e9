//! Orientation-aware quality.
//!
//! A triangle whose face normal points against the surface normal field is
//! folded over its neighbours. The signed evaluators detect this before
//! scoring shape and report it as [`SignedQuality::Inverted`].
//!
//! # Reference normal
//! The surface normal used for the test is taken from the first vertex, in
//! order `v0, v1, v2`, that is not on a feature line ([`NormalKind::Smooth`]).
//! When all three are feature points, `v0` decides:
//! - [`NormalKind::Ridge`]: of its two ridge normals, the one more nearly
//!   parallel (or anti-parallel) to the face normal;
//! - [`NormalKind::Reference`]: its first ridge normal.

use super::EPSD;
use super::metric_length::MetricLength;
use super::primitives::{area_vector, dot, norm_sq, sub};
use crate::data::metric::MetricField;
use crate::topology::mesh::SurfaceMesh;
use crate::topology::point::{TriangleId, VertexId};
use crate::topology::tags::PointTag;

/// Sentinel value of an inverted element.
pub const INVERTED: f64 = -1.0;

/// Outcome of a signed quality evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SignedQuality {
    /// Correctly oriented; shape quality (0 for degenerate elements).
    Valid(f64),
    /// Face normal opposes the surface normal field.
    Inverted,
    /// Correctly oriented, but the metric surface measure is exactly zero.
    DegenerateSurface,
}

impl SignedQuality {
    /// Numeric value; both failure outcomes map to [`INVERTED`].
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            SignedQuality::Valid(q) => q,
            SignedQuality::Inverted | SignedQuality::DegenerateSurface => INVERTED,
        }
    }

    #[inline]
    pub fn is_inverted(self) -> bool {
        matches!(self, SignedQuality::Inverted)
    }
}

/// How a point supplies a surface normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NormalKind {
    /// Off any feature line: a single normal.
    Smooth([f64; 3]),
    /// On a ridge: one normal per adjacent patch.
    Ridge { n1: [f64; 3], n2: [f64; 3] },
    /// On a reference edge: the first ridge normal is authoritative.
    ///
    /// Only consulted when no vertex of the triangle is smooth. The cosine is
    /// then taken against `n1`, so a face opposing `n1` counts as inverted.
    /// Evaluators that skip the test in this case never report such a
    /// triangle as inverted.
    Reference { n1: [f64; 3] },
}

impl NormalKind {
    /// Signed cosine between this normal and the unit face normal `face`.
    pub fn orientation_cosine(self, face: [f64; 3]) -> f64 {
        match self {
            NormalKind::Smooth(n) | NormalKind::Reference { n1: n } => dot(n, face),
            NormalKind::Ridge { n1, n2 } => {
                let ps1 = dot(n1, face);
                let ps2 = dot(n2, face);
                if (1.0 - ps1.abs()).abs() > (1.0 - ps2.abs()).abs() {
                    ps2
                } else {
                    ps1
                }
            }
        }
    }
}

/// Normal kind of point `v`, or `None` for a feature point without a ridge
/// record.
pub fn normal_kind(mesh: &SurfaceMesh, v: VertexId) -> Option<NormalKind> {
    let p = mesh.point(v);
    if !p.tag.is_edge() {
        return Some(NormalKind::Smooth(p.normal));
    }
    let rec = mesh.ridge_normals(v)?;
    if p.tag.contains(PointTag::REF) {
        Some(NormalKind::Reference { n1: rec.n1 })
    } else {
        Some(NormalKind::Ridge {
            n1: rec.n1,
            n2: rec.n2,
        })
    }
}

/// Signed cosine between the unit face normal `face` of `t` and the
/// surface reference normal.
///
/// A feature-only triangle whose first vertex has no ridge record yields 0,
/// which counts as correctly oriented.
pub fn reference_cosine(mesh: &SurfaceMesh, t: TriangleId, face: [f64; 3]) -> f64 {
    let tri = mesh.triangle(t);
    let smooth = tri.v.iter().find_map(|&v| match normal_kind(mesh, v) {
        Some(kind @ NormalKind::Smooth(_)) => Some(kind),
        _ => None,
    });
    match smooth.or_else(|| normal_kind(mesh, tri.v[0])) {
        Some(kind) => kind.orientation_cosine(face),
        None => 0.0,
    }
}

fn scale(v: [f64; 3], s: f64) -> [f64; 3] {
    [v[0] * s, v[1] * s, v[2] * s]
}

/// Signed isotropic quality of triangle `t`.
pub fn quality_signed_iso(mesh: &SurfaceMesh, t: TriangleId) -> SignedQuality {
    let [a, b, c] = mesh.triangle_coords(t);
    let pv = area_vector(a, b, c);
    let cal = norm_sq(pv);
    let sqcal = cal.sqrt();
    if sqcal < EPSD {
        return SignedQuality::Valid(0.0);
    }
    if reference_cosine(mesh, t, scale(pv, 1.0 / sqcal)) < 0.0 {
        return SignedQuality::Inverted;
    }
    if cal <= EPSD {
        return SignedQuality::Valid(0.0);
    }
    let rap = norm_sq(sub(b, a)) + norm_sq(sub(c, a)) + norm_sq(sub(c, b));
    if rap > EPSD {
        SignedQuality::Valid(sqcal / rap)
    } else {
        SignedQuality::Valid(0.0)
    }
}

/// Signed anisotropic quality of triangle `t`, with surface and lengths
/// measured by `oracle`.
///
/// Unlike the isotropic variant, a zero metric surface after a successful
/// orientation test is reported as [`SignedQuality::DegenerateSurface`]
/// rather than as quality 0.
pub fn quality_signed_aniso<L: MetricLength + ?Sized>(
    mesh: &SurfaceMesh,
    metric: &MetricField,
    t: TriangleId,
    oracle: &L,
) -> SignedQuality {
    let [a, b, c] = mesh.triangle_coords(t);
    let pv = area_vector(a, b, c);
    let dd = norm_sq(pv);
    if dd < EPSD {
        return SignedQuality::Valid(0.0);
    }
    if reference_cosine(mesh, t, scale(pv, 1.0 / dd.sqrt())) < 0.0 {
        return SignedQuality::Inverted;
    }
    let surface = oracle.surface(mesh, metric, t);
    if surface == 0.0 {
        return SignedQuality::DegenerateSurface;
    }
    let rap = oracle.squared_edge_sum(mesh, metric, t);
    if rap < EPSD {
        return SignedQuality::Valid(0.0);
    }
    SignedQuality::Valid(surface / rap)
}
