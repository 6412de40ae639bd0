//! Tic-tac-toe with a time-travel move history.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw evaluation over a [`Board`] snapshot
//! - **Position**: index to 1-based (row, col) mapping
//! - **Session**: [`GameSession`] owns the history, the step pointer and
//!   the move-list order, and hands a [`SessionView`] to the front-end
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameSession, GameStatus, Player};
//!
//! let mut session = GameSession::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     session.play_move(cell);
//! }
//! assert_eq!(session.status(), GameStatus::Won(Player::X));
//! assert_eq!(session.win_line(), Some([0, 1, 2]));
//!
//! session.jump_to(2).unwrap();
//! assert_eq!(session.status().to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]

mod action;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod status;
mod types;

pub use action::{MoveOutcome, Rejection};
pub use error::SessionError;
pub use history::{HistoryEntry, MoveListEntry};
pub use position::{to_position, CellCoordinates, Position};
pub use rules::{evaluate, Win};
pub use session::{GameSession, SessionView};
pub use status::GameStatus;
pub use types::{Board, Player, Square, CELL_COUNT};
