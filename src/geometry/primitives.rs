//! Pure functions of point coordinates.

use super::EPSD;

#[inline]
pub fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
pub fn norm_sq(a: [f64; 3]) -> f64 {
    dot(a, a)
}

#[inline]
pub fn norm(a: [f64; 3]) -> f64 {
    norm_sq(a).sqrt()
}

/// Unnormalized face normal `(p2 - p1) × (p3 - p1)`; its length is twice the
/// triangle area.
#[inline]
pub fn area_vector(p1: [f64; 3], p2: [f64; 3], p3: [f64; 3]) -> [f64; 3] {
    cross(sub(p2, p1), sub(p3, p1))
}

/// Unit normal of the triangle `p1 p2 p3`, or `None` when the points are
/// (numerically) collinear.
pub fn face_normal(p1: [f64; 3], p2: [f64; 3], p3: [f64; 3]) -> Option<[f64; 3]> {
    let n = area_vector(p1, p2, p3);
    let det = norm_sq(n);
    if det > EPSD {
        let dd = 1.0 / det.sqrt();
        Some([n[0] * dd, n[1] * dd, n[2] * dd])
    } else {
        None
    }
}

/// Centroid of the triangle and the largest centroid-to-vertex distance.
///
/// Despite the name, the radius is that of a disk centred at the centroid
/// that *contains* the triangle, not the inscribed circle. Callers use it as
/// a cheap element size.
pub fn incircle(p0: [f64; 3], p1: [f64; 3], p2: [f64; 3]) -> ([f64; 3], f64) {
    let dd = 1.0 / 3.0;
    let o = [
        dd * (p0[0] + p1[0] + p2[0]),
        dd * (p0[1] + p1[1] + p2[1]),
        dd * (p0[2] + p1[2] + p2[2]),
    ];
    let r = norm(sub(p0, o)).max(norm(sub(p1, o))).max(norm(sub(p2, o)));
    (o, r)
}

/// Largest squared distance between two vertices of the triangle.
pub fn diameter_sq(p0: [f64; 3], p1: [f64; 3], p2: [f64; 3]) -> f64 {
    norm_sq(sub(p1, p0))
        .max(norm_sq(sub(p2, p0)))
        .max(norm_sq(sub(p2, p1)))
}
