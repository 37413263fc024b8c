use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{Board, GameSession};
use blockfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.start();

    c.bench_function("tick", |b| {
        b.iter(|| {
            black_box(&mut session).tick();
        })
    });
}

fn bench_clear_four_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows())
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    c.bench_function("spawn_kind", |b| {
        b.iter(|| {
            let mut session = GameSession::new(12345);
            session.reset();
            session.spawn_kind(black_box(PieceKind::T))
        })
    });
}

fn bench_shift(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.start();

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            session.move_left();
            session.move_right();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.start();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(&mut session).rotate();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_clear_four_rows,
    bench_spawn,
    bench_shift,
    bench_rotate
);
criterion_main!(benches);
