//! Outcomes of playing a move.
//!
//! Illegal moves are not errors: the session ignores them and says why,
//! leaving the caller free to log or disregard the reason.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The displayed board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The square is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The index is not a board cell.
    #[display("Position {} is off the board", _0)]
    OutOfBounds(usize),
}

/// Result of [`GameSession::play_move`](crate::GameSession::play_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed and a new history entry appended.
    Played {
        /// Step of the new entry.
        step: usize,
        /// Cell that was played.
        index: usize,
        /// Player who moved.
        player: Player,
    },
    /// The session was left untouched.
    Ignored(Rejection),
}

impl MoveOutcome {
    /// Returns true if the move changed the session.
    pub fn is_played(&self) -> bool {
        matches!(self, MoveOutcome::Played { .. })
    }

    /// Returns the rejection reason for an ignored move.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Played { .. } => None,
            MoveOutcome::Ignored(reason) => Some(*reason),
        }
    }
}
