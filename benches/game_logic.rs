use bucket_tetris::core::{Bucket, FrameSnapshot, Game, ShapeKind};
use bucket_tetris::types::{InputState, Point, Size, WALL_COLOR};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_update(c: &mut Criterion) {
    let mut game = Game::new(Size::default(), 12345);
    let input = InputState {
        soft_drop: true,
        ..InputState::none()
    };

    c.bench_function("game_update_16ms", |b| {
        b.iter(|| {
            game.update(black_box(0.016), &input);
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut bucket = Bucket::new(Size::default());
            // Fill bottom 4 rows
            for y in 0..4 {
                for x in 0..10 {
                    bucket.set(Point::new(x, y), Some(WALL_COLOR));
                }
            }
            let lines = bucket.full_lines();
            for &line in lines.iter() {
                bucket.drop_line(line);
            }
        })
    });
}

fn bench_collision_check(c: &mut Criterion) {
    let mut bucket = Bucket::new(Size::default());
    for x in 0..10 {
        bucket.set(Point::new(x, 0), Some(WALL_COLOR));
    }
    let shape = ShapeKind::T.template().placed_at(Point::new(4, 1));

    c.bench_function("collision_check", |b| {
        b.iter(|| black_box(&bucket).collides(black_box(&shape)))
    });
}

fn bench_rotation(c: &mut Criterion) {
    let shape = ShapeKind::I.template().placed_at(Point::new(4, 10));

    c.bench_function("rotate_left", |b| b.iter(|| black_box(shape).rotated_left()));
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = Game::new(Size::default(), 12345);
    game.update(0.016, &InputState::none());
    let mut frame = FrameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(black_box(&mut frame));
        })
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_line_clear,
    bench_collision_check,
    bench_rotation,
    bench_snapshot
);
criterion_main!(benches);
