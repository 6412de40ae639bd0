//! Game status as shown to the player.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Status of the displayed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("Next player: {}", next)]
    InProgress {
        /// Player to move next.
        next: Player,
    },
    /// Game ended in a win.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// Board is full with no winner.
    #[display("The game is draw")]
    Draw,
}
