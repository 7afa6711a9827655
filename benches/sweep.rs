use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use relax2d::convergence::mean_absolute_difference;
use relax2d::domain::Grid;
use relax2d::solver::{SolverConfiguration, SolverLoop};
use relax2d::stencil::StencilUpdater;

fn random_grid(step: f64) -> Grid {
    let mut rng = rand::thread_rng();
    let mut grid = Grid::create(step, step, 2.0, 1.0);
    for v in grid.buffer_mut() {
        *v = rng.gen_range(-1.0..1.0);
    }
    grid
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    for &step in &[0.025, 0.01, 0.005] {
        let current = random_grid(step);
        let mut next = current.clone();
        let updater = StencilUpdater::new(1024);
        group.throughput(Throughput::Elements(current.buffer().len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(current.buffer().len()),
            &current,
            |b, current| {
                b.iter(|| {
                    updater.sweep(current, &mut next).unwrap();
                    black_box(mean_absolute_difference(current, &next));
                })
            },
        );
    }
    group.finish();
}

fn bench_time_bound(c: &mut Criterion) {
    let config = SolverConfiguration {
        target_time: Some(0.01),
        ..Default::default()
    };
    let solver = SolverLoop::new(config).unwrap();
    c.bench_function("default_grid_100_iterations", |b| {
        b.iter(|| black_box(solver.solve().unwrap()))
    });
}

criterion_group!(benches, bench_sweep, bench_time_bound);
criterion_main!(benches);
