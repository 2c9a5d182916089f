use criterion::{Criterion, criterion_group, criterion_main};
use flowers_core::*;
use std::hint::black_box;

fn opening_move(c: &mut Criterion) {
    let config = GameConfig::default();

    c.bench_function("place and open 19x14/40", |b| {
        let mut game = Game::new(config, RandomPlacer::from_seed(0));
        b.iter(|| {
            game.reset();
            black_box(game.primary(black_box((10, 7))).unwrap())
        })
    });

    let sparse = GameConfig::new((255, 255), 1).unwrap();
    c.bench_function("flood fill 255x255", |b| {
        b.iter(|| {
            let mut game = Game::new(sparse, PresetPlacer::new([(255, 255)]));
            black_box(game.primary(black_box((1, 1))).unwrap())
        })
    });
}

fn render_frame(c: &mut Criterion) {
    let config = GameConfig::default();
    let mut game = Game::new(config, RandomPlacer::from_seed(1));
    game.primary((10, 7)).unwrap();
    let selection = Selection {
        cell: Some((10, 7)),
        ..Default::default()
    };

    c.bench_function("frame 19x14", |b| {
        b.iter(|| frame(game.grid(), black_box(&selection)).count())
    });
}

criterion_group!(benches, opening_move, render_frame);
criterion_main!(benches);
