use thiserror::Error;

use crate::core::engine::{Color, Move, PieceType, Position};

#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub kind: PieceType,
    pub color: Color,
    pub last_move: bool,
    pub can_move: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Figure(Figure),
}

/// Why an operation was refused. State is left untouched whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("position ({row}, {col}) is outside of the board")]
    OutOfBoundsPosition { row: i32, col: i32 },
    #[error("no piece at {0}")]
    NoPieceAtSource(Position),
    #[error("it is {expected}'s turn, piece belongs to {found}")]
    WrongPlayerTurn { expected: Color, found: Color },
    #[error("{from} -> {to} is not a legal move")]
    IllegalDestination { from: Position, to: Position },
    #[error("no moves to undo")]
    EmptyHistory,
    #[error("malformed AI move: {0:?}")]
    MalformedAiMove(String),
}

/// What a presentation layer needs from a match.
pub trait MatchInterface {
    fn current_board(&self) -> Vec<Vec<Cell>>;
    fn cell(&self, row: usize, col: usize) -> Option<Cell>;
    fn possible_moves(&self, row: usize, col: usize) -> Option<Vec<Position>>;
    fn execute_move(&mut self, from: Position, to: Position) -> Result<Move, MoveError>;
    fn undo_move(&mut self) -> Result<Move, MoveError>;
    // info
    fn current_player(&self) -> Color;
    fn history(&self) -> &[Move];
}
