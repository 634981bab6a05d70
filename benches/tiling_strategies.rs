use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mandelbrot_tiles::{MandelbrotEngine, TilingStrategyKinds};

const MAX_ITERATIONS: u32 = 100;

fn bench_tiling_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_grid");
    group.sample_size(10);

    for base_size in [256, 1024] {
        for &tiling in TilingStrategyKinds::ALL {
            let mut engine = MandelbrotEngine::with_tiling(base_size, MAX_ITERATIONS, tiling)
                .expect("benchmark configuration is valid");

            group.bench_with_input(
                BenchmarkId::new(tiling.display_name(), base_size),
                &base_size,
                |b, _| b.iter(|| engine.compute_grid().as_slice().len()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_tiling_strategies);
criterion_main!(benches);
