//! Cursor and selection movement for keyboard navigation.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Moves the board cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Moves the move-list selection up or down as it appears on screen.
///
/// `selected` is a history step; `reversed` lists the newest step first,
/// so "up" then means a later step.
pub fn move_selection(selected: usize, len: usize, reversed: bool, key: KeyCode) -> usize {
    let last = len.saturating_sub(1);
    let toward_end = match key {
        KeyCode::Down => !reversed,
        KeyCode::Up => reversed,
        KeyCode::Home => return if reversed { last } else { 0 },
        KeyCode::End => return if reversed { 0 } else { last },
        _ => return selected.min(last),
    };

    if toward_end {
        (selected + 1).min(last)
    } else {
        selected.saturating_sub(1)
    }
}

/// Maps the digit keys 1-9 to board positions.
pub fn digit_position(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index),
        _ => None,
    }
}
