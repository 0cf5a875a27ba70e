use log::{debug, warn};

use crate::core::definitions::MoveError;
use crate::core::engine::{Color, Move, Position};
use crate::core::game::GameSession;
use crate::core::utils::{board_text, history_text, square_from_bytes};

/// Source of opponent moves, e.g. a text-generation service.
/// Replies are expected as `e7e5`: source square then destination square.
pub trait MoveProposer {
    fn propose_move(&mut self, board_text: &str, history_text: &str) -> anyhow::Result<String>;
}

/// Checks `[a-h][1-8][a-h][1-8]` after trimming and converts it to squares.
pub fn parse_ai_move(reply: &str) -> Result<(Position, Position), MoveError> {
    let malformed = || MoveError::MalformedAiMove(reply.to_string());
    match reply.trim().as_bytes() {
        [from_file, from_rank, to_file, to_rank] => {
            let from = square_from_bytes(*from_file, *from_rank).ok_or_else(malformed)?;
            let to = square_from_bytes(*to_file, *to_rank).ok_or_else(malformed)?;
            Ok((from, to))
        }
        _ => Err(malformed()),
    }
}

/** Plays one color of a session through a [`MoveProposer`].
 * The first failure of any kind switches it off until a new opponent is made. */
pub struct AiOpponent<P: MoveProposer> {
    proposer: P,
    color: Color,
    enabled: bool,
}

impl<P: MoveProposer> AiOpponent<P> {
    pub fn new(proposer: P, color: Color) -> Self {
        AiOpponent {
            proposer,
            color,
            enabled: true,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn proposer(&self) -> &P {
        &self.proposer
    }

    /// `Ok(None)` when disabled or when it isn't this opponent's turn.
    pub fn play(&mut self, session: &mut GameSession) -> anyhow::Result<Option<Move>> {
        if !self.enabled || session.active_color() != self.color {
            return Ok(None);
        }
        let result = self.request(session);
        if let Err(err) = &result {
            warn!("Error making AI move, disabling AI: {:#}", err);
            self.enabled = false;
        }
        result.map(Some)
    }

    fn request(&mut self, session: &mut GameSession) -> anyhow::Result<Move> {
        let reply = self.proposer.propose_move(
            &board_text(session.board()),
            &history_text(session.history()),
        )?;
        debug!("AI replied {:?}", reply);
        let (from, to) = parse_ai_move(&reply)?;
        Ok(session.commit_move(from, to)?)
    }
}

#[cfg(feature = "random-opponent")]
pub use random::RandomProposer;

#[cfg(feature = "random-opponent")]
mod random {
    use anyhow::{anyhow, Context};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    use super::MoveProposer;
    use crate::core::engine::{legal_moves, Color};
    use crate::core::utils::board_from_text;

    /// Picks a uniformly random legal move for its color out of the board dump.
    pub struct RandomProposer {
        color: Color,
        rng: StdRng,
    }

    impl RandomProposer {
        pub fn new(color: Color) -> Self {
            RandomProposer {
                color,
                rng: StdRng::from_entropy(),
            }
        }

        pub fn seeded(color: Color, seed: u64) -> Self {
            RandomProposer {
                color,
                rng: StdRng::seed_from_u64(seed),
            }
        }
    }

    impl MoveProposer for RandomProposer {
        fn propose_move(&mut self, board_text: &str, _history_text: &str) -> anyhow::Result<String> {
            let board = board_from_text(board_text).context("unreadable board state")?;
            let (from, to) = legal_moves(&board, self.color)
                .choose(&mut self.rng)
                .copied()
                .ok_or_else(|| anyhow!("{} has no legal move", self.color))?;
            Ok(format!("{}{}", from, to))
        }
    }
}
