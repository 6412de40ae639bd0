//! Board positions and their 1-based display coordinates.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Row and column of a cell in 1-based display coordinates.
///
/// `(0, 0)` is the sentinel for "no cell", used by the initial history
/// entry and for indices that are off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellCoordinates {
    /// Row, 1-3 (0 for none).
    pub row: u8,
    /// Column, 1-3 (0 for none).
    pub col: u8,
}

impl CellCoordinates {
    /// Sentinel coordinates.
    pub const NONE: Self = Self { row: 0, col: 0 };

    /// Returns true for the sentinel.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

/// Maps a linear cell index to its display coordinates.
///
/// Indices outside 0..=8 map to [`CellCoordinates::NONE`].
#[instrument]
pub fn to_position(index: usize) -> CellCoordinates {
    if index >= 9 {
        return CellCoordinates::NONE;
    }
    // index < 9, both fit in a u8
    CellCoordinates {
        row: (index / 3 + 1) as u8,
        col: (index % 3 + 1) as u8,
    }
}

/// A named position on the tic-tac-toe board (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
