use criterion::{black_box, criterion_group, criterion_main, Criterion};
use falling_blocks::core::{can_place, definition, Board, GameSession, GameSnapshot, RowSet};
use falling_blocks::core::lines::collapse_rows;
use falling_blocks::term::{FrameBuffer, GameView, Viewport};
use falling_blocks::types::{GameAction, Phase, Rgb, ShapeKind, COLUMNS, FRAME_MS};

const GRAY: Rgb = Rgb::new(120, 120, 120);

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            if session.tick(black_box(FRAME_MS)) {
                session.drain_events().for_each(drop);
            }
            if session.phase() == Phase::GameOver {
                session.apply_action(GameAction::Restart);
            }
        })
    });
}

fn bench_collapse(c: &mut Criterion) {
    c.bench_function("collapse_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            let mut rows = RowSet::new();
            for row in 11..15 {
                board.fill_row(row, GRAY);
                rows.push(row);
            }
            collapse_rows(&mut board, black_box(&rows));
            board
        })
    });
}

fn bench_can_place(c: &mut Criterion) {
    let mut board = Board::new();
    for col in 0..COLUMNS - 1 {
        board.place(14, col, GRAY);
    }
    let def = definition(ShapeKind::T);

    c.bench_function("can_place", |b| {
        b.iter(|| {
            can_place(
                &board,
                black_box(def.center_row),
                black_box(def.center_column),
                &def.offsets,
            )
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("move_and_rotate", |b| {
        b.iter(|| {
            session.apply_action(GameAction::MoveRight);
            session.apply_action(GameAction::Rotate);
            session.apply_action(GameAction::MoveLeft);
            session.drain_events().for_each(drop);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let session = GameSession::new(12345);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_frame", |b| {
        b.iter(|| {
            session.snapshot_into(&mut snap);
            GameView.render_into(&snap, Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_collapse,
    bench_can_place,
    bench_try_move,
    bench_render
);
criterion_main!(benches);
