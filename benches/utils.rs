use chess_session::{
    core::engine::legal_moves, legal_destinations, utils::perft, Board, Color, GameSession,
    Position,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn scan_all_destinations(board: &Board) -> usize {
    board
        .pieces()
        .map(|(pos, _)| legal_destinations(pos, board).len())
        .sum()
}

fn scan_all_squares(board: &Board) -> usize {
    Position::all()
        .map(|pos| legal_destinations(pos, board).len())
        .sum()
}

fn commit_undo_cycle(mut game: GameSession) -> GameSession {
    for (from, to) in legal_moves(game.board(), game.active_color()) {
        if game.commit_move(from, to).is_ok() {
            game.undo().expect("committed move must undo");
        }
    }
    game
}

fn rules_benchmark(c: &mut Criterion) {
    c.bench_function("destinations of pieces", |b| {
        b.iter(|| scan_all_destinations(black_box(&Board::default())))
    });
    c.bench_function("destinations of squares", |b| {
        b.iter(|| scan_all_squares(black_box(&Board::default())))
    });
    c.bench_function("legal moves white", |b| {
        b.iter(|| legal_moves(black_box(&Board::default()), Color::White))
    });
    c.bench_function("commit/undo every opening move", |b| {
        b.iter(|| commit_undo_cycle(black_box(GameSession::new())))
    });
}

fn perft_benchmark(c: &mut Criterion) {
    let game = GameSession::new();
    c.bench_function("perft 2 - undo", |b| {
        b.iter(|| perft(black_box(&game), 2, true))
    });
    c.bench_function("perft 2 - copy", |b| {
        b.iter(|| perft(black_box(&game), 2, false))
    });
}

criterion_group!(benches, rules_benchmark, perft_benchmark);
criterion_main!(benches);
