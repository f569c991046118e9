use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use trimesh_quality::prelude::*;

/// Unit-square grid with interior vertices jittered by up to 30% of a cell.
fn jittered_grid(n: u32, seed: u64) -> SurfaceMesh {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut mesh = SurfaceMesh::with_capacity(((n + 1) * (n + 1)) as usize, (2 * n * n) as usize);
    let h = 1.0 / n as f64;
    for j in 0..=n {
        for i in 0..=n {
            let interior = i > 0 && i < n && j > 0 && j < n;
            let (dx, dy) = if interior {
                (rng.gen_range(-0.3..0.3) * h, rng.gen_range(-0.3..0.3) * h)
            } else {
                (0.0, 0.0)
            };
            mesh.try_add_point(
                [i as f64 * h + dx, j as f64 * h + dy, 0.0],
                PointTag::empty(),
                [0.0, 0.0, 1.0],
            )
            .expect("unit normal");
        }
    }
    let id = |i: u32, j: u32| VertexId::new(j * (n + 1) + i);
    for j in 0..n {
        for i in 0..n {
            mesh.try_add_triangle([id(i, j), id(i + 1, j), id(i + 1, j + 1)])
                .expect("valid triangle");
            mesh.try_add_triangle([id(i, j), id(i + 1, j + 1), id(i, j + 1)])
                .expect("valid triangle");
        }
    }
    mesh
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("quality_scan");
    let config = QualityConfig::default();

    for &n in &[32u32, 128u32] {
        let mesh = jittered_grid(n, 7);
        let metric = MetricField::uniform(&mesh, SymTensor3::diagonal(4.0, 1.0, 1.0));

        group.bench_with_input(BenchmarkId::new("isotropic", n), &n, |b, _| {
            b.iter(|| black_box(scan_quality(&mesh, None, ReportMode::Input, &config, None)));
        });
        group.bench_with_input(BenchmarkId::new("anisotropic_explicit", n), &n, |b, _| {
            b.iter(|| {
                black_box(scan_quality(
                    &mesh,
                    Some(&metric),
                    ReportMode::Input,
                    &config,
                    None,
                ))
            });
        });
        group.bench_with_input(BenchmarkId::new("anisotropic_oracle", n), &n, |b, _| {
            b.iter(|| {
                black_box(scan_quality(
                    &mesh,
                    Some(&metric),
                    ReportMode::Output(&StraightEdgeMetric),
                    &config,
                    None,
                ))
            });
        });
        group.bench_with_input(BenchmarkId::new("signed_isotropic", n), &n, |b, _| {
            b.iter(|| {
                let inverted = mesh
                    .triangles()
                    .filter(|(id, _)| quality_signed_iso(&mesh, *id).is_inverted())
                    .count();
                black_box(inverted)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
