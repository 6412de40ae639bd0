//! Single cell progression invariant: each entry adds exactly one mark.

use super::Invariant;
use crate::position::to_position;
use crate::types::{Player, Square};
use crate::GameSession;

/// Invariant: every entry after the first fills exactly one empty square
/// of its predecessor, with the mark of the player whose turn it was, and
/// records that square's coordinates.
///
/// X fills odd steps and O fills even steps.
pub struct SingleCellProgressionInvariant;

impl Invariant<GameSession> for SingleCellProgressionInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .history()
            .windows(2)
            .enumerate()
            .all(|(k, pair)| {
                let (previous, entry) = (&pair[0], &pair[1]);
                let expected = if k % 2 == 0 { Player::X } else { Player::O };

                entry.changed_cell(previous.board()).is_some_and(|index| {
                    entry.board().get(index) == Some(Square::Occupied(expected))
                        && *entry.coordinates() == to_position(index)
                })
            })
    }

    fn description() -> &'static str {
        "Each history entry adds one mark for the player on turn"
    }
}
