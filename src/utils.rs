use std::{fmt::Display, ops::AddAssign};

use log::info;

use crate::core::engine::legal_moves;
use crate::core::game::GameSession;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PERFResult {
    pub all: usize,
    pub captures: usize,
    pub own_captures: usize,
}

impl PERFResult {
    pub fn combine(self, other: PERFResult) -> Self {
        PERFResult {
            all: self.all + other.all,
            captures: self.captures + other.captures,
            own_captures: self.own_captures + other.own_captures,
        }
    }
}

impl AddAssign for PERFResult {
    fn add_assign(&mut self, rhs: Self) {
        self.all += rhs.all;
        self.captures += rhs.captures;
        self.own_captures += rhs.own_captures;
    }
}

impl Display for PERFResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - cp: {:<6} own: {:<6}",
            self.all, self.captures, self.own_captures
        )
    }
}

fn count_perf_result(game: &GameSession) -> PERFResult {
    let mut result = PERFResult::default();
    let board = game.board();
    for (_, to) in legal_moves(board, game.active_color()) {
        result.all += 1;
        if let Some(target) = board.occupant(to) {
            result.captures += 1;
            if target.color == game.active_color() {
                result.own_captures += 1;
            }
        }
    }
    result
}

fn perf_test_step_undo(game: &mut GameSession, depth: usize) -> PERFResult {
    if depth == 0 {
        PERFResult {
            all: 1,
            ..Default::default()
        }
    } else if depth == 1 {
        count_perf_result(game)
    } else {
        let mut result = PERFResult::default();
        for (from, to) in legal_moves(game.board(), game.active_color()) {
            if game.commit_move(from, to).is_err() {
                continue;
            }
            result += perf_test_step_undo(game, depth - 1);
            let undone = game.undo();
            debug_assert!(undone.is_ok(), "undo after commit of {from} to {to} failed");
        }
        result
    }
}

fn perf_test_step_copy(game: GameSession, depth: usize) -> PERFResult {
    if depth == 0 {
        PERFResult {
            all: 1,
            ..Default::default()
        }
    } else if depth == 1 {
        count_perf_result(&game)
    } else {
        legal_moves(game.board(), game.active_color())
            .into_iter()
            .filter_map(|(from, to)| {
                let mut game = game.clone();
                game.commit_move(from, to).ok()?;
                Some(perf_test_step_copy(game, depth - 1))
            })
            .fold(PERFResult::default(), PERFResult::combine)
    }
}

/// Counts move-tree leaves of `game` down to `depth`.
pub fn perft(game: &GameSession, depth: usize, undo: bool) -> PERFResult {
    if undo {
        let mut game = game.clone();
        perf_test_step_undo(&mut game, depth)
    } else {
        perf_test_step_copy(game.clone(), depth)
    }
}

/// Perft from `game`, optionally listing each root move's subtree. True when
/// the leaf count equals `expected`.
pub fn perf_test(game: &GameSession, depth: usize, expected: usize, detailed: bool, undo: bool) -> bool {
    info!(" - depth: {depth} detailed: {detailed} undo: {undo}");
    if detailed && depth > 0 {
        let mut total = PERFResult::default();
        for (from, to) in legal_moves(game.board(), game.active_color()) {
            let mut temp_game = game.clone();
            let Ok(root) = temp_game.commit_move(from, to) else {
                continue;
            };
            let result = perft(&temp_game, depth - 1, undo);
            println!(" {from}{to} ({root}) : {result}");
            total += result;
        }
        println!("+ total: {total}");
        total.all == expected
    } else {
        let result = perft(game, depth, undo);
        info!(" details: {result}");
        result.all == expected
    }
}
