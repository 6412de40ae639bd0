//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in evaluation order.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// Owner of the line.
    pub player: Player,
    /// The three cell indices forming the line.
    pub line: [usize; 3],
}

/// Evaluates a board for a completed line.
///
/// Every line is checked; when more than one is complete the last one in
/// [`LINES`] order is reported. Legal play stops at the first win, so this
/// only matters for hand-built boards.
#[instrument]
pub fn evaluate(board: &Board) -> Option<Win> {
    let mut found = None;

    for line in LINES {
        let [a, b, c] = line.map(|i| board.get(i).unwrap_or(Square::Empty));
        if let Square::Occupied(player) = a
            && a == b
            && a == c
        {
            found = Some(Win { player, line });
        }
    }

    found
}
