use std::fmt::{Debug, Display};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::definitions::MoveError;

pub const BOARD_SIZE: u8 = 8;

/** Square on the board, row 0 is black's back rank, row 7 is white's. */
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Unchecked wire shape of [`Position`], validated through [`Position::new`].
#[derive(Deserialize)]
struct RawPosition {
    row: u8,
    col: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = MoveError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.col)
    }
}

impl Position {
    pub fn new(row: u8, col: u8) -> Result<Position, MoveError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Position { row, col })
        } else {
            Err(MoveError::OutOfBoundsPosition {
                row: row as i32,
                col: col as i32,
            })
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Shifted square, `None` when it leaves the board.
    pub fn offset(&self, rows: i8, cols: i8) -> Option<Position> {
        let row = (self.row as i8).checked_add(rows)?;
        let col = (self.col as i8).checked_add(cols)?;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        ITER_INDEX.iter().copied()
    }
}

impl Debug for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

static ITER_INDEX: [Position; 64] = {
    let mut arr = [Position { row: 0, col: 0 }; 64];
    let mut idx = 0;
    while idx < 64 {
        arr[idx] = Position {
            row: (idx / 8) as u8,
            col: (idx % 8) as u8,
        };
        idx += 1;
    }
    arr
};

#[derive(PartialEq, Eq, Hash, Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Row step a pawn of this color advances by.
    fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    fn back_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(if self == &Self::White {
            "white"
        } else {
            "black"
        })
    }
}

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            PieceType::King => "king",
            PieceType::Queen => "queen",
            PieceType::Bishop => "bishop",
            PieceType::Knight => "knight",
            PieceType::Rook => "rook",
            PieceType::Pawn => "pawn",
        })
    }
}

/** Pieces carry no identity, two pieces of same kind and color are equal. */
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceType,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceType, color: Color) -> Piece {
        Piece { kind, color }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

/** Committed move, `piece` is the mover as it was before the move. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/** Plain 8x8 grid, copied by value so snapshots never alias. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    pub fn standard() -> Board {
        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            let back = color.back_rank() as usize;
            let pawns = color.pawn_start_row() as usize;
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.squares[back][col] = Some(Piece::new(*kind, color));
                board.squares[pawns][col] = Some(Piece::new(PieceType::Pawn, color));
            }
        }
        board
    }

    pub fn occupant(&self, position: Position) -> Option<Piece> {
        self.squares[position.row as usize][position.col as usize]
    }

    pub fn is_empty(&self, position: Position) -> bool {
        self.occupant(position).is_none()
    }

    pub fn set(&mut self, position: Position, piece: Option<Piece>) {
        self.squares[position.row as usize][position.col as usize] = piece;
    }

    /// Builder flavour of [`Board::set`].
    pub fn with(mut self, position: Position, piece: Piece) -> Board {
        self.set(position, Some(piece));
        self
    }

    /** Relocate whatever stands on `from`, returns the previous occupant of `to`. */
    pub(crate) fn relocate(&mut self, from: Position, to: Position) -> Option<Piece> {
        let moving = self.occupant(from);
        let target = self.occupant(to);
        self.set(from, None);
        self.set(to, moving);
        trace!("Relocated {:?} from {:?} to {:?}", moving, from, to);
        target
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<Piece>)> + '_ {
        Position::all().map(|pos| (pos, self.occupant(pos)))
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.iter()
            .filter_map(|(pos, cell)| cell.map(|piece| (pos, piece)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

/** Single move legality.
 * Pawns advance one (two from the start row) into empty squares and capture
 * diagonally forward. Knights jump regardless of the destination occupant.
 * Every other piece may go to any other square. */
pub fn is_legal_move(from: Position, to: Position, board: &Board, mover: Color) -> bool {
    if from == to {
        return false;
    }
    let piece = match board.occupant(from) {
        Some(piece) if piece.color == mover => piece,
        _ => return false,
    };
    let row_diff = to.row as i8 - from.row as i8;
    let col_diff = (to.col as i8 - from.col as i8).abs();

    match piece.kind {
        PieceType::Pawn => {
            let direction = piece.color.pawn_direction();
            if col_diff == 0 && row_diff == direction && board.is_empty(to) {
                return true;
            }
            if col_diff == 0
                && from.row == piece.color.pawn_start_row()
                && row_diff == 2 * direction
            {
                return from
                    .offset(direction, 0)
                    .map(|between| board.is_empty(between))
                    .unwrap_or(false)
                    && board.is_empty(to);
            }
            if col_diff == 1 && row_diff == direction {
                return board
                    .occupant(to)
                    .map(|target| target.color != piece.color)
                    .unwrap_or(false);
            }
            false
        }
        PieceType::Knight => {
            let row_diff = row_diff.abs();
            (row_diff == 2 && col_diff == 1) || (row_diff == 1 && col_diff == 2)
        }
        // King, queen, bishop and rook are unconstrained in this rule set.
        _ => true,
    }
}

pub fn legal_destinations(position: Position, board: &Board) -> Vec<Position> {
    let Some(piece) = board.occupant(position) else {
        return Vec::new();
    };
    Position::all()
        .filter(|&to| is_legal_move(position, to, board, piece.color))
        .collect()
}

/// Every legal `(from, to)` pair of `color`, in row-major order of `from`.
pub fn legal_moves(board: &Board, color: Color) -> Vec<(Position, Position)> {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .flat_map(|(from, _)| {
            legal_destinations(from, board)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}
