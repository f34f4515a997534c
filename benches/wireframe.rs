use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use textdrop::background::{Scene, WireframeGeometry};

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("icosahedron");
    for detail in [0u32, 1, 2, 3] {
        group.bench_with_input(BenchmarkId::from_parameter(detail), &detail, |b, &detail| {
            b.iter(|| WireframeGeometry::icosahedron(black_box(1.5), detail));
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut scene = Scene::backdrop(16.0 / 9.0);
    c.bench_function("scene_render", |b| {
        b.iter(|| {
            scene.mesh.step();
            black_box(scene.render())
        });
    });
}

criterion_group!(benches, bench_geometry, bench_render);
criterion_main!(benches);
