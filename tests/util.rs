#![allow(dead_code)]
use trimesh_quality::prelude::*;

pub const UP: [f64; 3] = [0.0, 0.0, 1.0];

pub fn equilateral() -> [[f64; 3]; 3] {
    let h = 3f64.sqrt() / 2.0;
    [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, h, 0.0]]
}

/// Add three smooth points with normal +z and a triangle through them.
pub fn add_triangle(mesh: &mut SurfaceMesh, corners: [[f64; 3]; 3]) -> TriangleId {
    let mut v = [VertexId::new(0); 3];
    for (slot, p) in v.iter_mut().zip(corners) {
        *slot = mesh.try_add_point(p, PointTag::empty(), UP).unwrap();
    }
    mesh.try_add_triangle(v).unwrap()
}

/// Equilateral (index 0), collinear needle (index 1), disabled equilateral
/// (index 2).
pub fn two_valid_one_disabled() -> SurfaceMesh {
    let mut mesh = SurfaceMesh::new();
    add_triangle(&mut mesh, equilateral());
    let needle = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.001, 0.0, 0.0]];
    add_triangle(&mut mesh, needle);
    let t = add_triangle(&mut mesh, equilateral());
    mesh.set_enabled(t, false).unwrap();
    mesh
}

/// Regular `n × n` grid of the unit square split into `2 n²` triangles,
/// counter-clockwise seen from +z.
pub fn grid(n: u32) -> SurfaceMesh {
    let mut mesh = SurfaceMesh::with_capacity(((n + 1) * (n + 1)) as usize, (2 * n * n) as usize);
    let h = 1.0 / n as f64;
    for j in 0..=n {
        for i in 0..=n {
            mesh.try_add_point([i as f64 * h, j as f64 * h, 0.0], PointTag::empty(), UP)
                .unwrap();
        }
    }
    let id = |i: u32, j: u32| VertexId::new(j * (n + 1) + i);
    for j in 0..n {
        for i in 0..n {
            mesh.try_add_triangle([id(i, j), id(i + 1, j), id(i + 1, j + 1)])
                .unwrap();
            mesh.try_add_triangle([id(i, j), id(i + 1, j + 1), id(i, j + 1)])
                .unwrap();
        }
    }
    mesh
}

pub fn report_text(out: Vec<u8>) -> String {
    String::from_utf8(out).expect("report is utf-8")
}
