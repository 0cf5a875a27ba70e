use log::{debug, trace};

use crate::core::definitions::{Cell, Figure, MatchInterface, MoveError};
use crate::core::engine::{is_legal_move, legal_destinations, Board, Color, Move, Piece, Position};

pub fn ui_board(board: &Board, last_move: Option<&Move>) -> Vec<Vec<Cell>> {
    let mut rows: Vec<Vec<Cell>> = (0..8).map(|_| Vec::with_capacity(8)).collect();
    for (pos, piece) in board.iter() {
        rows[pos.row() as usize].push(figure_cell(piece, pos, last_move));
    }
    rows
}

fn figure_cell(piece: Option<Piece>, position: Position, last_move: Option<&Move>) -> Cell {
    match piece {
        None => Cell::Empty,
        Some(piece) => Cell::Figure(Figure {
            kind: piece.kind,
            color: piece.color,
            last_move: last_move.map(|m| m.to == position).unwrap_or(false),
            can_move: true,
        }),
    }
}

/** Live match: board, side to move, move log and captured pieces. */
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    board: Board,
    active: Color,
    history: Vec<Move>,
    captured: Vec<Piece>,
}

impl GameSession {
    pub fn new() -> GameSession {
        GameSession::with_board(Board::standard(), Color::White)
    }

    pub fn with_board(board: Board, active: Color) -> GameSession {
        GameSession {
            board,
            active,
            history: Vec::new(),
            captured: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_color(&self) -> Color {
        self.active
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    fn own_piece(&self, position: Position) -> Result<Piece, MoveError> {
        let piece = self
            .board
            .occupant(position)
            .ok_or(MoveError::NoPieceAtSource(position))?;
        if piece.color != self.active {
            return Err(MoveError::WrongPlayerTurn {
                expected: self.active,
                found: piece.color,
            });
        }
        Ok(piece)
    }

    /// Destinations of the active player's piece at `position`.
    pub fn select(&self, position: Position) -> Result<Vec<Position>, MoveError> {
        self.own_piece(position)?;
        Ok(legal_destinations(position, &self.board))
    }

    pub fn commit_move(&mut self, from: Position, to: Position) -> Result<Move, MoveError> {
        let piece = self.own_piece(from).map_err(|err| {
            debug!("Rejected move {:?} -> {:?}: {}", from, to, err);
            err
        })?;
        if !is_legal_move(from, to, &self.board, self.active) {
            debug!("Rejected illegal {} move {:?} -> {:?}", piece, from, to);
            return Err(MoveError::IllegalDestination { from, to });
        }

        let captured = self.board.relocate(from, to);
        if let Some(target) = captured {
            self.captured.push(target);
        }
        let done = Move {
            from,
            to,
            piece,
            captured,
        };
        self.history.push(done);
        self.active = self.active.opposite();
        trace!("Committed {:?}, {} to move", done, self.active);
        Ok(done)
    }

    /** Reverts the latest move. `EmptyHistory` is benign and changes nothing. */
    pub fn undo(&mut self) -> Result<Move, MoveError> {
        let last = self.history.pop().ok_or(MoveError::EmptyHistory)?;
        self.board.set(last.from, Some(last.piece));
        self.board.set(last.to, last.captured);
        if last.captured.is_some() {
            self.captured.pop();
        }
        self.active = self.active.opposite();
        trace!("Undid {:?}, {} to move", last, self.active);
        Ok(last)
    }

    pub fn reset(&mut self) {
        *self = GameSession::new();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}

impl MatchInterface for GameSession {
    fn current_board(&self) -> Vec<Vec<Cell>> {
        ui_board(&self.board, self.last_move())
    }

    fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        let pos = Position::new(u8::try_from(row).ok()?, u8::try_from(col).ok()?).ok()?;
        Some(figure_cell(self.board.occupant(pos), pos, self.last_move()))
    }

    fn possible_moves(&self, row: usize, col: usize) -> Option<Vec<Position>> {
        let pos = Position::new(u8::try_from(row).ok()?, u8::try_from(col).ok()?).ok()?;
        let moves = self.select(pos).ok()?;
        if moves.is_empty() {
            None
        } else {
            Some(moves)
        }
    }

    fn execute_move(&mut self, from: Position, to: Position) -> Result<Move, MoveError> {
        self.commit_move(from, to)
    }

    fn undo_move(&mut self) -> Result<Move, MoveError> {
        self.undo()
    }

    fn current_player(&self) -> Color {
        self.active
    }

    fn history(&self) -> &[Move] {
        &self.history
    }
}

/// Derived input mode of a board UI: nothing picked, or a piece picked
/// together with where it may go.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    AwaitingSelection,
    AwaitingDestination {
        from: Position,
        destinations: Vec<Position>,
    },
}

impl Selection {
    /// Picking a square that isn't the active player's piece clears the selection.
    pub fn pick(session: &GameSession, position: Position) -> Selection {
        match session.select(position) {
            Ok(destinations) => Selection::AwaitingDestination {
                from: position,
                destinations,
            },
            Err(err) => {
                debug!("Selection of {:?} refused: {}", position, err);
                Selection::AwaitingSelection
            }
        }
    }

    pub fn destinations(&self) -> &[Position] {
        match self {
            Selection::AwaitingSelection => &[],
            Selection::AwaitingDestination { destinations, .. } => destinations,
        }
    }

    /// Commits when `to` was offered. The selection is cleared either way.
    pub fn drop_on(&mut self, session: &mut GameSession, to: Position) -> Option<Move> {
        match std::mem::take(self) {
            Selection::AwaitingDestination { from, destinations } if destinations.contains(&to) => {
                session.commit_move(from, to).ok()
            }
            _ => None,
        }
    }
}
