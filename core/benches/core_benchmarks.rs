use criterion::{black_box, criterion_group, criterion_main, Criterion};

use faceted_core::mesh::{generate_cube, generate_pentahedron, TriangleMesh, POSITION_UV_STRIDE};

// ---------------------------------------------------------------------------
// Primitive generation
// ---------------------------------------------------------------------------

fn bench_generate_cube(c: &mut Criterion) {
    c.bench_function("generate_cube", |b| {
        b.iter(|| generate_cube(black_box(2.0)));
    });
}

fn bench_generate_pentahedron(c: &mut Criterion) {
    c.bench_function("generate_pentahedron", |b| {
        b.iter(|| generate_pentahedron(black_box(2.0)));
    });
}

// ---------------------------------------------------------------------------
// Flat normal derivation
// ---------------------------------------------------------------------------

/// Tile the cube stream `copies` times into one large triangle list.
fn tiled_cube_mesh(copies: usize) -> TriangleMesh {
    let cube = generate_cube(2.0).unwrap();
    let mut vertices = Vec::with_capacity(cube.vertices().len() * copies);
    for _ in 0..copies {
        vertices.extend_from_slice(cube.vertices());
    }
    TriangleMesh::from_interleaved(vertices, POSITION_UV_STRIDE).unwrap()
}

fn bench_flat_normals_cube(c: &mut Criterion) {
    let mesh = generate_cube(2.0).unwrap();
    c.bench_function("flat_normals_12_triangles", |b| {
        b.iter(|| black_box(&mesh).flat_normals());
    });
}

fn bench_flat_normals_large(c: &mut Criterion) {
    let mesh = tiled_cube_mesh(1024);
    c.bench_function("flat_normals_12288_triangles", |b| {
        b.iter(|| black_box(&mesh).flat_normals());
    });
}

criterion_group!(
    benches,
    bench_generate_cube,
    bench_generate_pentahedron,
    bench_flat_normals_cube,
    bench_flat_normals_large
);
criterion_main!(benches);
