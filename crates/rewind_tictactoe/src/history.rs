//! History entries and the move list built from them.

use crate::position::{to_position, CellCoordinates};
use crate::types::{Board, Player, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A board snapshot plus the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Snapshot after the move.
    board: Board,
    /// Coordinates of the move; [`CellCoordinates::NONE`] for the start entry.
    coordinates: CellCoordinates,
}

impl HistoryEntry {
    /// The entry every game starts from.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            coordinates: CellCoordinates::NONE,
        }
    }

    /// Entry produced by `player` marking `index` on top of `previous`.
    ///
    /// Returns `None` when `index` is off the board.
    pub(crate) fn after(previous: &Board, index: usize, player: Player) -> Option<Self> {
        Some(Self {
            board: previous.with_mark(index, player)?,
            coordinates: to_position(index),
        })
    }

    /// Index of the cell this entry's move changed relative to `previous`.
    ///
    /// Returns `None` unless exactly one cell went from empty to occupied.
    pub fn changed_cell(&self, previous: &Board) -> Option<usize> {
        let mut changed = previous
            .squares()
            .iter()
            .zip(self.board.squares())
            .enumerate()
            .filter(|(_, (before, after))| before != after);

        match (changed.next(), changed.next()) {
            (Some((index, (Square::Empty, Square::Occupied(_)))), None) => Some(index),
            _ => None,
        }
    }
}

/// One line of the move list as presented to the player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveListEntry {
    /// History step this entry jumps to.
    step: usize,
    /// Coordinates of the move.
    coordinates: CellCoordinates,
    /// Description of the entry.
    label: String,
    /// Text for the jump control.
    jump_label: String,
    /// Entry is the last one stored.
    is_latest: bool,
    /// Entry is the displayed step.
    is_current: bool,
}

impl MoveListEntry {
    pub(crate) fn new(step: usize, entry: &HistoryEntry, len: usize, current: usize) -> Self {
        let coordinates = *entry.coordinates();
        let (label, jump_label) = if step == 0 {
            (
                format!("{}. Game start", step),
                "Return to game start".to_string(),
            )
        } else {
            (
                format!(
                    "{}. Turn position: row: {} col: {}",
                    step, coordinates.row, coordinates.col
                ),
                format!("Return to move #{}", step),
            )
        };

        Self {
            step,
            coordinates,
            label,
            jump_label,
            is_latest: step + 1 == len,
            is_current: step == current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_entry_has_no_move() {
        let start = HistoryEntry::start();
        assert!(start.coordinates().is_none());
        assert_eq!(start.board().occupied(), 0);
    }

    #[test]
    fn test_after_records_coordinates() {
        let entry = HistoryEntry::after(&Board::new(), 5, Player::X).expect("on board");
        assert_eq!(*entry.coordinates(), CellCoordinates { row: 2, col: 3 });
        assert_eq!(entry.changed_cell(&Board::new()), Some(5));
    }

    #[test]
    fn test_after_off_board() {
        assert_eq!(HistoryEntry::after(&Board::new(), 9, Player::O), None);
    }

    #[test]
    fn test_changed_cell_rejects_two_changes() {
        let two = Board::new()
            .with_mark(0, Player::X)
            .and_then(|b| b.with_mark(1, Player::O))
            .expect("on board");
        let entry = HistoryEntry {
            board: two,
            coordinates: to_position(1),
        };
        assert_eq!(entry.changed_cell(&Board::new()), None);
    }

    #[test]
    fn test_labels() {
        let start = MoveListEntry::new(0, &HistoryEntry::start(), 2, 1);
        assert_eq!(start.label(), "0. Game start");
        assert_eq!(start.jump_label(), "Return to game start");
        assert!(!*start.is_latest());
        assert!(!*start.is_current());

        let entry = HistoryEntry::after(&Board::new(), 7, Player::X).expect("on board");
        let first = MoveListEntry::new(1, &entry, 2, 1);
        assert_eq!(first.label(), "1. Turn position: row: 3 col: 2");
        assert_eq!(first.jump_label(), "Return to move #1");
        assert!(*first.is_latest());
        assert!(*first.is_current());
    }
}
