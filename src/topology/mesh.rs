//! Arena storage for triangular surface meshes.
//!
//! `SurfaceMesh` owns points, ridge-normal records and triangles in
//! contiguous vectors addressed by [`VertexId`] / [`TriangleId`]. Quality
//! evaluation only ever borrows the mesh immutably.
//!
//! # Point normals
//! A point off any feature line carries one unit normal. A point on a ridge
//! carries two, one per adjacent smooth patch, stored out of line in a
//! [`RidgeNormals`] record referenced by [`Point::ridge`].
//!
//! # Triangle orientation
//! Vertices are stored in winding order; the face normal is
//! `(v1 - v0) × (v2 - v0)`. Edge `i` is the edge opposite vertex `i`.

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::QualityError;
use crate::topology::point::{TriangleId, VertexId};
use crate::topology::tags::{EdgeTag, PointTag};
use serde::{Deserialize, Serialize};

const UNIT_TOL: f64 = 1e-6;

/// A mesh vertex.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Cartesian coordinates.
    pub coords: [f64; 3],
    /// Feature classification.
    pub tag: PointTag,
    /// Smooth-surface unit normal. Only meaningful for non-edge points.
    pub normal: [f64; 3],
    /// Slot of the ridge-normal record for edge points.
    pub ridge: Option<usize>,
}

/// The two unit normals of a point lying on a ridge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RidgeNormals {
    pub n1: [f64; 3],
    pub n2: [f64; 3],
}

/// A surface triangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// Vertices in winding order.
    pub v: [VertexId; 3],
    /// Edge tags; entry `i` describes the edge opposite `v[i]`.
    pub edge_tags: [EdgeTag; 3],
    /// Disabled triangles are skipped by every scan.
    pub enabled: bool,
}

impl Triangle {
    /// The two endpoints of edge `i` (the edge opposite vertex `i`), in the
    /// order used for metric length evaluation.
    #[inline]
    pub fn edge(&self, i: usize) -> (VertexId, VertexId) {
        match i {
            0 => (self.v[1], self.v[2]),
            1 => (self.v[0], self.v[2]),
            _ => (self.v[0], self.v[1]),
        }
    }
}

/// Triangular surface mesh with index-addressed storage.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SurfaceMesh {
    points: Vec<Point>,
    ridges: Vec<RidgeNormals>,
    triangles: Vec<Triangle>,
}

impl SurfaceMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mesh with room for `points` points and `triangles`
    /// triangles.
    pub fn with_capacity(points: usize, triangles: usize) -> Self {
        Self {
            points: Vec::with_capacity(points),
            ridges: Vec::new(),
            triangles: Vec::with_capacity(triangles),
        }
    }

    /// Adds a point with a single surface normal.
    ///
    /// The normal must be unit length unless the tag marks an edge point, in
    /// which case it is never consulted and may be zero.
    pub fn try_add_point(
        &mut self,
        coords: [f64; 3],
        tag: PointTag,
        normal: [f64; 3],
    ) -> Result<VertexId, QualityError> {
        let id = self.next_vertex_id();
        if !tag.is_edge() {
            check_unit(id, normal)?;
        }
        self.points.push(Point {
            coords,
            tag,
            normal,
            ridge: None,
        });
        Ok(id)
    }

    /// Adds a feature point carrying the two normals of its adjacent patches.
    ///
    /// `GEO` is added to `tag` if neither `GEO` nor `REF` is present, so the
    /// record is reachable from the signed evaluators.
    pub fn try_add_ridge_point(
        &mut self,
        coords: [f64; 3],
        tag: PointTag,
        n1: [f64; 3],
        n2: [f64; 3],
    ) -> Result<VertexId, QualityError> {
        let id = self.next_vertex_id();
        check_unit(id, n1)?;
        check_unit(id, n2)?;
        let tag = if tag.is_edge() {
            tag
        } else {
            tag | PointTag::GEO
        };
        self.ridges.push(RidgeNormals { n1, n2 });
        self.points.push(Point {
            coords,
            tag,
            normal: n1,
            ridge: Some(self.ridges.len() - 1),
        });
        Ok(id)
    }

    /// Adds an enabled triangle with untagged edges.
    pub fn try_add_triangle(&mut self, v: [VertexId; 3]) -> Result<TriangleId, QualityError> {
        self.try_add_triangle_with_tags(v, [EdgeTag::empty(); 3])
    }

    /// Adds an enabled triangle with explicit edge tags.
    pub fn try_add_triangle_with_tags(
        &mut self,
        v: [VertexId; 3],
        edge_tags: [EdgeTag; 3],
    ) -> Result<TriangleId, QualityError> {
        self.check_triangle_vertices(&v)?;
        let id = TriangleId::new(self.triangles.len() as u32);
        self.triangles.push(Triangle {
            v,
            edge_tags,
            enabled: true,
        });
        Ok(id)
    }

    /// Enables or disables a triangle.
    pub fn set_enabled(&mut self, t: TriangleId, enabled: bool) -> Result<(), QualityError> {
        let len = self.triangles.len();
        match self.triangles.get_mut(t.index()) {
            Some(tri) => {
                tri.enabled = enabled;
                Ok(())
            }
            None => Err(QualityError::TriangleOutOfRange {
                triangle: t.get(),
                len,
            }),
        }
    }

    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Point lookup. Panics if `v` is out of range.
    #[inline]
    pub fn point(&self, v: VertexId) -> &Point {
        &self.points[v.index()]
    }

    /// Coordinates of `v`. Panics if `v` is out of range.
    #[inline]
    pub fn coords(&self, v: VertexId) -> [f64; 3] {
        self.points[v.index()].coords
    }

    /// Triangle lookup. Panics if `t` is out of range.
    #[inline]
    pub fn triangle(&self, t: TriangleId) -> &Triangle {
        &self.triangles[t.index()]
    }

    /// Coordinates of the three vertices of `t`, in winding order.
    #[inline]
    pub fn triangle_coords(&self, t: TriangleId) -> [[f64; 3]; 3] {
        let tri = self.triangle(t);
        [
            self.coords(tri.v[0]),
            self.coords(tri.v[1]),
            self.coords(tri.v[2]),
        ]
    }

    /// Ridge normals of `v`, if the point carries a ridge record.
    #[inline]
    pub fn ridge_normals(&self, v: VertexId) -> Option<&RidgeNormals> {
        self.point(v).ridge.and_then(|slot| self.ridges.get(slot))
    }

    /// All points in index order.
    pub fn points(&self) -> impl Iterator<Item = (VertexId, &Point)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (VertexId::new(i as u32), p))
    }

    /// All triangles (enabled or not) in ascending index order.
    pub fn triangles(&self) -> impl Iterator<Item = (TriangleId, &Triangle)> + '_ {
        self.triangles
            .iter()
            .enumerate()
            .map(|(i, t)| (TriangleId::new(i as u32), t))
    }

    fn next_vertex_id(&self) -> VertexId {
        VertexId::new(self.points.len() as u32)
    }

    fn check_triangle_vertices(&self, v: &[VertexId; 3]) -> Result<(), QualityError> {
        for id in v {
            if id.index() >= self.points.len() {
                return Err(QualityError::VertexOutOfRange {
                    vertex: id.get(),
                    len: self.points.len(),
                });
            }
        }
        if v[0] == v[1] || v[0] == v[2] {
            return Err(QualityError::DuplicateVertex(v[0].get()));
        }
        if v[1] == v[2] {
            return Err(QualityError::DuplicateVertex(v[1].get()));
        }
        Ok(())
    }
}

fn check_unit(vertex: VertexId, n: [f64; 3]) -> Result<(), QualityError> {
    let norm = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
    if !norm.is_finite() || (norm - 1.0).abs() > UNIT_TOL {
        return Err(QualityError::NonUnitNormal {
            vertex: vertex.get(),
            norm,
        });
    }
    Ok(())
}

impl DebugInvariants for SurfaceMesh {
    fn validate_invariants(&self) -> Result<(), QualityError> {
        for (id, p) in self.points() {
            match p.ridge {
                Some(slot) => {
                    let rec = self
                        .ridges
                        .get(slot)
                        .ok_or(QualityError::MissingRidgeRecord(id.get()))?;
                    check_unit(id, rec.n1)?;
                    check_unit(id, rec.n2)?;
                }
                None if !p.tag.is_edge() => check_unit(id, p.normal)?,
                None => {}
            }
        }
        for (_, tri) in self.triangles() {
            self.check_triangle_vertices(&tri.v)?;
        }
        Ok(())
    }
}
