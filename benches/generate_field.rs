use std::hint::black_box;
use std::num::NonZeroUsize;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use escape_field::{
    CanvasSize, Complex, FractalKind, GenerationConfig, Point, WorkerPool, available_threads,
    generate_field_with_pool,
};

fn mandelbrot_config() -> GenerationConfig {
    GenerationConfig::new(
        FractalKind::Mandelbrot,
        None,
        CanvasSize::new(400, 300),
        256,
        0.8,
        Point { x: -0.75, y: 0.0 },
    )
    .unwrap()
}

fn julia_config() -> GenerationConfig {
    GenerationConfig::new(
        FractalKind::Julia,
        Some(Complex::new(-0.7, 0.27015)),
        CanvasSize::new(400, 300),
        256,
        1.0,
        Point::default(),
    )
    .unwrap()
}

fn bench_pool_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_field");
    let mut sizes = vec![1, available_threads().get()];
    sizes.dedup();

    for (name, config) in [("mandelbrot", mandelbrot_config()), ("julia", julia_config())] {
        for &threads in &sizes {
            let pool = WorkerPool::new(NonZeroUsize::new(threads).unwrap()).unwrap();

            group.bench_with_input(BenchmarkId::new(name, threads), &config, |b, config| {
                b.iter(|| generate_field_with_pool(black_box(config), &pool).unwrap())
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_pool_sizes);
criterion_main!(benches);
