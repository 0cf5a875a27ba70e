use std::fmt::Display;
use std::str::FromStr;

use crate::core::definitions::MoveError;
use crate::core::engine::{Board, Color, Move, Piece, PieceType, Position};

/** Algebraic names indexed by `row * 8 + col`, rank 8 is row 0. */
#[rustfmt::skip]
const POS_TO_STRING: [&str; 64] = [
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
];

pub fn pos_to_str(pos: Position) -> &'static str {
    POS_TO_STRING[pos.row() as usize * 8 + pos.col() as usize]
}

/// Square from a file byte `a..=h` and a rank byte `1..=8`.
pub fn square_from_bytes(file: u8, rank: u8) -> Option<Position> {
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Position::new(b'8' - rank, file - b'a').ok()
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(pos_to_str(*self))
    }
}

impl FromStr for Position {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [file, rank] => square_from_bytes(*file, *rank)
                .ok_or_else(|| MoveError::MalformedAiMove(s.to_string())),
            _ => Err(MoveError::MalformedAiMove(s.to_string())),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} from {} to {}", self.piece, self.from, self.to)?;
        if let Some(captured) = self.captured {
            write!(f, " (captured {})", captured)?;
        }
        Ok(())
    }
}

/// Letter used in board dumps; knights take `N` so they don't clash with kings.
pub fn piece_letter(kind: PieceType) -> char {
    match kind {
        PieceType::King => 'K',
        PieceType::Queen => 'Q',
        PieceType::Bishop => 'B',
        PieceType::Knight => 'N',
        PieceType::Rook => 'R',
        PieceType::Pawn => 'P',
    }
}

fn piece_from_letter(letter: char) -> Option<PieceType> {
    Some(match letter {
        'K' => PieceType::King,
        'Q' => PieceType::Queen,
        'B' => PieceType::Bishop,
        'N' => PieceType::Knight,
        'R' => PieceType::Rook,
        'P' => PieceType::Pawn,
        _ => return None,
    })
}

fn color_letter(color: Color) -> char {
    match color {
        Color::White => 'w',
        Color::Black => 'b',
    }
}

/** One line per row starting from row 0, `.` for empty, `wP`/`bN`/... otherwise. */
pub fn board_text(board: &Board) -> String {
    (0..8u8)
        .map(|row| {
            board
                .iter()
                .filter(|(pos, _)| pos.row() == row)
                .map(|(_, cell)| match cell {
                    None => ".".to_string(),
                    Some(piece) => format!("{}{}", color_letter(piece.color), piece_letter(piece.kind)),
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Inverse of [`board_text`], `None` on any unknown token or wrong shape.
pub fn board_from_text(text: &str) -> Option<Board> {
    let rows: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    if rows.len() != 8 {
        return None;
    }
    let mut board = Board::empty();
    for (row, line) in rows.into_iter().enumerate() {
        let cells: Vec<&str> = line.split_whitespace().collect();
        if cells.len() != 8 {
            return None;
        }
        for (col, token) in cells.into_iter().enumerate() {
            let pos = Position::new(row as u8, col as u8).ok()?;
            if token == "." {
                continue;
            }
            let mut chars = token.chars();
            let color = match chars.next()? {
                'w' => Color::White,
                'b' => Color::Black,
                _ => return None,
            };
            let kind = piece_from_letter(chars.next()?)?;
            if chars.next().is_some() {
                return None;
            }
            board.set(pos, Some(Piece::new(kind, color)));
        }
    }
    Some(board)
}

/// `1. white pawn e2 to e4` style listing, one move per line.
pub fn history_text(history: &[Move]) -> String {
    history
        .iter()
        .enumerate()
        .map(|(idx, m)| format!("{}. {} {} to {}", idx + 1, m.piece, m.from, m.to))
        .collect::<Vec<_>>()
        .join("\n")
}
