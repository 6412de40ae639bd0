//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Rules are kept apart from the
//! session so derived state can be recomputed on every read.

pub mod win;

pub use win::{evaluate, Win, LINES};
