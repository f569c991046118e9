//! Riemannian metric fields for anisotropic quality evaluation.
//!
//! A metric is a symmetric 3×3 tensor per mesh point. Only the six
//! independent entries are stored, in the order
//! `(m11, m12, m13, m22, m23, m33)`. The flat layout matches the usual
//! solution-file convention, so externally produced `[f64]` buffers can be
//! reinterpreted without copying through [`MetricField::try_from_flat`].
//!
//! The field is read-only during evaluation; it is produced and updated by
//! the adaptation driver.

use crate::mesh_error::QualityError;
use crate::topology::mesh::SurfaceMesh;
use crate::topology::point::VertexId;
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Symmetric 3×3 tensor stored by its upper triangle.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct SymTensor3 {
    pub m11: f64,
    pub m12: f64,
    pub m13: f64,
    pub m22: f64,
    pub m23: f64,
    pub m33: f64,
}

impl SymTensor3 {
    pub const IDENTITY: SymTensor3 = SymTensor3 {
        m11: 1.0,
        m12: 0.0,
        m13: 0.0,
        m22: 1.0,
        m23: 0.0,
        m33: 1.0,
    };

    pub const ZERO: SymTensor3 = SymTensor3 {
        m11: 0.0,
        m12: 0.0,
        m13: 0.0,
        m22: 0.0,
        m23: 0.0,
        m33: 0.0,
    };

    /// Builds a tensor from `[m11, m12, m13, m22, m23, m33]`.
    #[inline]
    pub const fn from_array(m: [f64; 6]) -> Self {
        SymTensor3 {
            m11: m[0],
            m12: m[1],
            m13: m[2],
            m22: m[3],
            m23: m[4],
            m33: m[5],
        }
    }

    /// Returns `[m11, m12, m13, m22, m23, m33]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 6] {
        [self.m11, self.m12, self.m13, self.m22, self.m23, self.m33]
    }

    /// Isotropic metric prescribing edge length `h` in every direction.
    #[inline]
    pub fn scaled_identity(h: f64) -> Self {
        let s = 1.0 / (h * h);
        SymTensor3 {
            m11: s,
            m22: s,
            m33: s,
            ..SymTensor3::ZERO
        }
    }

    /// Diagonal metric `diag(d11, d22, d33)`.
    #[inline]
    pub const fn diagonal(d11: f64, d22: f64, d33: f64) -> Self {
        SymTensor3 {
            m11: d11,
            m12: 0.0,
            m13: 0.0,
            m22: d22,
            m23: 0.0,
            m33: d33,
        }
    }

    /// Arithmetic mean of three tensors, each entry `(a + b + c) / 3`.
    #[inline]
    pub fn mean3(a: &SymTensor3, b: &SymTensor3, c: &SymTensor3) -> Self {
        let (a, b, c) = (a.to_array(), b.to_array(), c.to_array());
        let dd = 1.0 / 3.0;
        let mut m = [0.0; 6];
        for i in 0..6 {
            m[i] = dd * (a[i] + b[i] + c[i]);
        }
        SymTensor3::from_array(m)
    }

    /// Midpoint average of two tensors.
    #[inline]
    pub fn mean2(a: &SymTensor3, b: &SymTensor3) -> Self {
        let (a, b) = (a.to_array(), b.to_array());
        let mut m = [0.0; 6];
        for i in 0..6 {
            m[i] = 0.5 * (a[i] + b[i]);
        }
        SymTensor3::from_array(m)
    }

    /// Determinant of the full symmetric matrix.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.m11 * (self.m22 * self.m33 - self.m23 * self.m23)
            - self.m12 * (self.m12 * self.m33 - self.m13 * self.m23)
            + self.m13 * (self.m12 * self.m23 - self.m13 * self.m22)
    }

    /// `vᵗ M v`, the squared length of `v` under this metric.
    #[inline]
    pub fn quadratic_form(&self, v: [f64; 3]) -> f64 {
        let [x, y, z] = v;
        self.m11 * x * x
            + self.m22 * y * y
            + self.m33 * z * z
            + 2.0 * (self.m12 * x * y + self.m13 * x * z + self.m23 * y * z)
    }
}

/// One metric tensor per mesh point, indexed by [`VertexId`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricField {
    tensors: Vec<SymTensor3>,
}

impl MetricField {
    /// Wraps per-point tensors, checking that there is exactly one per point.
    pub fn try_new(mesh: &SurfaceMesh, tensors: Vec<SymTensor3>) -> Result<Self, QualityError> {
        if tensors.len() != mesh.num_points() {
            return Err(QualityError::MetricSizeMismatch {
                expected: mesh.num_points(),
                found: tensors.len(),
            });
        }
        Ok(Self { tensors })
    }

    /// Reinterprets a flat buffer of six entries per point.
    pub fn try_from_flat(mesh: &SurfaceMesh, flat: &[f64]) -> Result<Self, QualityError> {
        let mismatch = || QualityError::MetricSizeMismatch {
            expected: mesh.num_points(),
            found: flat.len() / 6,
        };
        let tensors: &[SymTensor3] = bytemuck::try_cast_slice(flat).map_err(|_| mismatch())?;
        Self::try_new(mesh, tensors.to_vec())
    }

    /// The same tensor at every point of `mesh`.
    pub fn uniform(mesh: &SurfaceMesh, tensor: SymTensor3) -> Self {
        Self {
            tensors: vec![tensor; mesh.num_points()],
        }
    }

    /// Tensor at `v`. Panics if `v` is out of range.
    #[inline]
    pub fn get(&self, v: VertexId) -> &SymTensor3 {
        &self.tensors[v.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tensors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tensors.is_empty()
    }

    /// Flat view `[m11, m12, m13, m22, m23, m33, ...]`.
    pub fn as_flat(&self) -> &[f64] {
        bytemuck::cast_slice(&self.tensors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::tags::PointTag;
    use static_assertions::assert_eq_size;

    assert_eq_size!(SymTensor3, [f64; 6]);

    fn three_point_mesh() -> SurfaceMesh {
        let mut mesh = SurfaceMesh::new();
        for x in [0.0, 1.0, 2.0] {
            mesh.try_add_point([x, 0.0, 0.0], PointTag::empty(), [0.0, 0.0, 1.0])
                .unwrap();
        }
        mesh
    }

    #[test]
    fn determinant_of_known_tensors() {
        assert_eq!(SymTensor3::IDENTITY.determinant(), 1.0);
        assert_eq!(SymTensor3::ZERO.determinant(), 0.0);
        assert_eq!(SymTensor3::diagonal(2.0, 3.0, 4.0).determinant(), 24.0);
        // [[2,1,0],[1,2,1],[0,1,2]] has determinant 4.
        let m = SymTensor3::from_array([2.0, 1.0, 0.0, 2.0, 1.0, 2.0]);
        assert!((m.determinant() - 4.0).abs() < 1e-14);
    }

    #[test]
    fn quadratic_form_uses_off_diagonal_entries_once_each() {
        let m = SymTensor3::from_array([1.0, 0.5, 0.25, 2.0, 0.125, 3.0]);
        let v = [1.0, 2.0, 3.0];
        // Full product with the symmetric matrix written out.
        let full = [[1.0, 0.5, 0.25], [0.5, 2.0, 0.125], [0.25, 0.125, 3.0]];
        let mut expected = 0.0;
        for i in 0..3 {
            for j in 0..3 {
                expected += v[i] * full[i][j] * v[j];
            }
        }
        assert!((m.quadratic_form(v) - expected).abs() < 1e-12);
    }

    #[test]
    fn scaled_identity_measures_h_as_unit() {
        let m = SymTensor3::scaled_identity(0.25);
        assert!((m.quadratic_form([0.25, 0.0, 0.0]) - 1.0).abs() < 1e-14);
    }

    #[test]
    fn mean_of_tensors() {
        let a = SymTensor3::diagonal(3.0, 0.0, 0.0);
        let b = SymTensor3::diagonal(0.0, 3.0, 0.0);
        let c = SymTensor3::diagonal(0.0, 0.0, 3.0);
        let m = SymTensor3::mean3(&a, &b, &c);
        assert!((m.m11 - 1.0).abs() < 1e-15);
        assert!((m.m22 - 1.0).abs() < 1e-15);
        assert!((m.m33 - 1.0).abs() < 1e-15);
        let half = SymTensor3::diagonal(1.5, 1.5, 0.0);
        assert_eq!(SymTensor3::mean2(&a, &b), half);
    }

    #[test]
    fn field_size_is_checked() {
        let mesh = three_point_mesh();
        let short = vec![SymTensor3::IDENTITY; 2];
        let err = MetricField::try_new(&mesh, short).unwrap_err();
        assert!(matches!(
            err,
            QualityError::MetricSizeMismatch {
                expected: 3,
                found: 2
            }
        ));
        let err = MetricField::try_from_flat(&mesh, &[1.0; 17]).unwrap_err();
        assert!(matches!(err, QualityError::MetricSizeMismatch { .. }));
    }

    #[test]
    fn flat_buffers_round_trip() {
        let mesh = three_point_mesh();
        let flat: Vec<f64> = (0..18).map(f64::from).collect();
        let field = MetricField::try_from_flat(&mesh, &flat).unwrap();
        assert_eq!(field.len(), 3);
        assert_eq!(field.get(VertexId::new(1)).m11, 6.0);
        assert_eq!(field.get(VertexId::new(2)).m33, 17.0);
        assert_eq!(field.as_flat(), flat.as_slice());
    }
}
