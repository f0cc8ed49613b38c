use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use faceted_core::math::{mat4_from_translation, Vec3};
use faceted_core::mesh::generate_cube;
use faceted_graphics::{DummyBackend, RenderContext, Shader};

fn bench_create_drawable(c: &mut Criterion) {
    let backend = Arc::new(DummyBackend::new());
    let context = RenderContext::new(backend);
    let mesh = generate_cube(2.0).unwrap();

    c.bench_function("create_drawable_cube", |b| {
        b.iter(|| context.create_drawable(black_box(&mesh)));
    });
}

fn bench_draw_instanced(c: &mut Criterion) {
    let backend = Arc::new(DummyBackend::new());
    let context = RenderContext::new(backend.clone());
    let cube = context
        .create_drawable(&generate_cube(2.0).unwrap())
        .unwrap();
    let shader = Shader::new(backend.clone(), backend.create_program());

    c.bench_function("draw_instanced_100", |b| {
        b.iter(|| {
            cube.draw_instanced(&shader, black_box(100), |i| {
                mat4_from_translation(Vec3::new(i as f32, 0.0, 0.0))
            })
        });
    });
}

criterion_group!(benches, bench_create_drawable, bench_draw_instanced);
criterion_main!(benches);
