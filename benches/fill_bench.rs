use criterion::{black_box, criterion_group, criterion_main, Criterion};

use domondrian::fill::{draw_random, draw_random_ratio};
use domondrian::rendering::html::render_table;
use domondrian::{draw_mondrian, ColorSpec, Grid, MondrianConfig, SeededRandom};

fn palette() -> ColorSpec {
    ColorSpec::new()
        .with("white", 10)
        .with("red", 2)
        .with("blue", 2)
        .with("yellow", 2)
        .with("black", 1)
}

fn bench_random_fill(c: &mut Criterion) {
    let spec = ColorSpec::new().with("red", 400).with("blue", 400).with("black", 200);
    c.bench_function("draw_random_40x25", |b| {
        let mut rng = SeededRandom::new(1);
        b.iter(|| {
            let mut grid = Grid::new("bench", 40, 25).unwrap();
            draw_random(&mut grid, black_box(&spec), &mut rng).unwrap();
            grid
        })
    });
}

fn bench_ratio_fill(c: &mut Criterion) {
    let spec = palette();
    c.bench_function("draw_random_ratio_30x30", |b| {
        let mut rng = SeededRandom::new(2);
        b.iter(|| {
            let mut grid = Grid::new("bench", 30, 30).unwrap();
            draw_random_ratio(&mut grid, black_box(&spec), &mut rng).unwrap();
            grid
        })
    });
}

fn bench_mondrian_render(c: &mut Criterion) {
    let spec = palette();
    let cfg = MondrianConfig::default();
    c.bench_function("mondrian_render_20x20", |b| {
        let mut rng = SeededRandom::new(3);
        b.iter(|| {
            let grid = draw_mondrian("bench", 20, 20, &spec, &cfg, &mut rng).unwrap();
            render_table(&grid)
        })
    });
}

criterion_group!(benches, bench_random_fill, bench_ratio_fill, bench_mondrian_render);
criterion_main!(benches);
