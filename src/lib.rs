pub mod core;
pub mod utils;

// module re-exports
pub use crate::core::algorithms::{parse_ai_move, AiOpponent, MoveProposer};
#[cfg(feature = "random-opponent")]
pub use crate::core::algorithms::RandomProposer;
pub use crate::core::definitions::{Cell, Figure, MatchInterface, MoveError};
pub use crate::core::engine::{is_legal_move, legal_destinations, Board, Color, Move, Piece, PieceType, Position};
pub use crate::core::game::{GameSession, Selection};
