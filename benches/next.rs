use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_life::core::{Cell, SeedRng};
use rust_life::grid::Grid;
use rust_life::patterns::R_PENTOMINO;

fn bench_r_pentomino(c: &mut Criterion) {
    let mut seeded = Grid::new(64);
    seeded.place(&R_PENTOMINO, Cell::new(31, 31)).unwrap();

    c.bench_function("r_pentomino_100_generations", |b| {
        b.iter(|| {
            let mut grid = seeded.clone();
            for _ in 0..100 {
                black_box(grid.next());
            }
            grid
        })
    });
}

fn bench_random_soup(c: &mut Criterion) {
    let mut seeded = Grid::new(128);
    seeded.randomize(&mut SeedRng::new(42), 0.35).unwrap();

    c.bench_function("random_soup_single_generation", |b| {
        b.iter(|| {
            let mut grid = seeded.clone();
            black_box(grid.next())
        })
    });
}

criterion_group!(benches, bench_r_pentomino, bench_random_soup);
criterion_main!(benches);
