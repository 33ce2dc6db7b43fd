use env_logger::Env;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use grid_astar::prelude::*;
use log::info;
use nanorand::{Rng, WyRand};

/// Builds a `width x height` 0/1 matrix where roughly `percent` % of the Cells are blocked.
/// The corners are always left open so they can be used as endpoints.
fn random_rows(width: usize, height: usize, percent: u32) -> Vec<Vec<u8>> {
    let mut rng = WyRand::new_seed(4);
    let mut rows: Vec<Vec<u8>> = (0..height)
        .map(|_| {
            (0..width)
                .map(|_| u8::from(rng.generate_range(0..100u32) < percent))
                .collect()
        })
        .collect();
    for (x, y) in [(0, 0), (width - 1, 0), (0, height - 1), (width - 1, height - 1)] {
        rows[y][x] = 0;
    }
    rows
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info") // Change this to debug to log every search (needs feature `log`).
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_open_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("Open Grid");

    init();

    for size in [32, 128, 512] {
        let grid = Grid::open(size, size);
        let goal = (size as isize - 1, size as isize - 1);

        let id = format!("Diagonal, Map Size: ({}, {})", size, size);
        group.bench_function(&id, |b| {
            b.iter(|| find_path(&grid, black_box((0, 0)), black_box(goal)))
        });

        let id = format!("Straight, Map Size: ({}, {})", size, size);
        group.bench_function(&id, |b| {
            b.iter(|| find_path(&grid, black_box((0, 0)), black_box((goal.0, 0))))
        });
    }
}

fn bench_random_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random Grid");
    group.sample_size(20);

    for (size, percent) in [(128, 20), (128, 35), (512, 25)] {
        let grid = Grid::from_rows(&random_rows(size, size, percent)).unwrap();
        info!("generated {}x{} grid, {}% blocked", size, size, percent);
        let goal = (size as isize - 1, size as isize - 1);

        let id = format!(
            "Corner to Corner, Map Size: ({}, {}), Blocked: {}%",
            size, size, percent
        );
        group.bench_function(&id, |b| {
            b.iter(|| find_path(&grid, black_box((0, 0)), black_box(goal)))
        });
    }
}

#[cfg(feature = "parallel")]
fn bench_batch(c: &mut Criterion) {
    use grid_astar::find_paths;

    let mut group = c.benchmark_group("Batch");
    group.sample_size(10);

    let size = 256;
    let grid = Grid::from_rows(&random_rows(size, size, 25)).unwrap();
    let last = size as isize - 1;
    let corners = [(0, 0), (last, 0), (0, last), (last, last)];
    let queries: Vec<(Cell, Cell)> = corners
        .iter()
        .flat_map(|&start| corners.iter().map(move |&end| (start, end)))
        .collect();

    let id = format!("All Corners, Parallel, Map Size: ({}, {})", size, size);
    group.bench_function(&id, |b| {
        b.iter(|| find_paths(&grid, &queries, SearchConfig::default()))
    });

    let id = format!("All Corners, Single Threaded, Map Size: ({}, {})", size, size);
    group.bench_function(&id, |b| {
        b.iter(|| {
            queries
                .iter()
                .map(|&(start, end)| find_path(&grid, start, end))
                .collect::<Vec<_>>()
        })
    });
}

#[cfg(feature = "parallel")]
criterion_group!(benches, bench_open_grid, bench_random_grid, bench_batch);
#[cfg(not(feature = "parallel"))]
criterion_group!(benches, bench_open_grid, bench_random_grid);
criterion_main!(benches);
