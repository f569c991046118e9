//! Needle / obtuse classification of triangles.
//!
//! The classifier does not score quality; it tells the adaptation driver
//! *why* a triangle is bad and which edge to operate on: a needle is fixed by
//! collapsing its short edge, an obtuse triangle by splitting or flipping the
//! edge facing the wide angle.
//!
//! Edges are numbered by their opposite vertex: edge 0 is `p1 p2`, edge 1 is
//! `p0 p2`, edge 2 is `p0 p1`.

use super::primitives::{dot, norm_sq, sub};
use crate::topology::mesh::SurfaceMesh;
use crate::topology::point::TriangleId;

/// `cos(145°)`: an interior angle whose cosine is strictly below this is
/// considered obtuse.
pub const COS145: f64 = -0.81915204428899;

/// Ratio of squared shortest to squared longest edge under which a triangle
/// is a needle.
pub const NEEDLE_RATIO: f64 = 0.01;

/// Shape class of a triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriangleShape {
    /// Neither needle nor obtuse.
    Ok,
    /// One edge is much shorter than the longest; `edge` is the short one.
    Needle { edge: u8 },
    /// One angle exceeds 145°; `edge` faces that angle.
    Obtuse { edge: u8 },
}

impl TriangleShape {
    /// Numeric code: 0 ok, 1 needle, 2 obtuse.
    pub fn code(self) -> u8 {
        match self {
            TriangleShape::Ok => 0,
            TriangleShape::Needle { .. } => 1,
            TriangleShape::Obtuse { .. } => 2,
        }
    }

    /// Edge implicated by the classification, if any.
    pub fn edge(self) -> Option<usize> {
        match self {
            TriangleShape::Ok => None,
            TriangleShape::Needle { edge } | TriangleShape::Obtuse { edge } => Some(edge as usize),
        }
    }
}

#[inline]
fn is_obtuse(cos: f64) -> bool {
    cos < COS145
}

/// Classify the triangle `p0 p1 p2`.
///
/// The needle test runs first and wins regardless of angles. Ties for the
/// shortest edge go to edge 2, then edge 1; edge 0 is chosen only when it is
/// strictly the shortest. Angles are tested at `p0`, `p2`, `p1` in that order
/// and the first obtuse one is reported.
pub fn classify(p0: [f64; 3], p1: [f64; 3], p2: [f64; 3]) -> TriangleShape {
    let u = sub(p1, p0);
    let v = sub(p2, p0);
    let w = sub(p2, p1);
    let h1 = norm_sq(u);
    let h2 = norm_sq(v);
    let h3 = norm_sq(w);

    let (mut hmi, mut hma, mut short) = if h1 > h2 {
        (h2, h1, 1u8)
    } else {
        (h1, h2, 2u8)
    };
    if h3 < hmi {
        hmi = h3;
        short = 0;
    } else if h3 > hma {
        hma = h3;
    }

    if hmi < NEEDLE_RATIO * hma {
        return TriangleShape::Needle { edge: short };
    }

    if is_obtuse(dot(u, v) / (h1 * h2).sqrt()) {
        return TriangleShape::Obtuse { edge: 0 };
    }
    if is_obtuse(dot(v, w) / (h2 * h3).sqrt()) {
        return TriangleShape::Obtuse { edge: 2 };
    }
    if is_obtuse(-dot(u, w) / (h1 * h3).sqrt()) {
        return TriangleShape::Obtuse { edge: 1 };
    }
    TriangleShape::Ok
}

/// Classify triangle `t` of `mesh`.
pub fn classify_triangle(mesh: &SurfaceMesh, t: TriangleId) -> TriangleShape {
    let [p0, p1, p2] = mesh.triangle_coords(t);
    classify(p0, p1, p2)
}
