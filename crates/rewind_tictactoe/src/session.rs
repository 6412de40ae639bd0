//! The game session: history of snapshots plus a step pointer.
//!
//! Jumping only moves the pointer. Playing after a jump truncates the
//! abandoned branch before appending the new entry.

use crate::action::{MoveOutcome, Rejection};
use crate::error::SessionError;
use crate::history::{HistoryEntry, MoveListEntry};
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::rules::{evaluate, Win};
use crate::status::GameStatus;
use crate::types::{Board, Player, CELL_COUNT};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Mutable state of one game, including every stored snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) step: usize,
    pub(crate) x_is_next: bool,
    pub(crate) list_reversed: bool,
}

impl GameSession {
    /// Creates a session at the empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            step: 0,
            x_is_next: true,
            list_reversed: false,
        }
    }

    /// Plays the current player's mark at `index` (0-8).
    ///
    /// Moves into an occupied square, onto a board that already has a
    /// winner, or off the board are ignored: the session is unchanged and
    /// the outcome carries the reason.
    #[instrument(skip(self), fields(step = self.step, x_is_next = self.x_is_next))]
    pub fn play_move(&mut self, index: usize) -> MoveOutcome {
        let current = *self.current().board();

        if evaluate(&current).is_some() {
            return self.ignore(Rejection::GameOver);
        }

        if current.get(index).is_some_and(|square| !square.is_empty()) {
            return self.ignore(Rejection::SquareOccupied(index));
        }

        let player = self.next_player();
        let Some(entry) = HistoryEntry::after(&current, index, player) else {
            return self.ignore(Rejection::OutOfBounds(index));
        };

        let discarded = self.history.len() - (self.step + 1);
        self.history.truncate(self.step + 1);
        self.history.push(entry);
        self.step = self.history.len() - 1;
        self.x_is_next = !self.x_is_next;

        debug!(
            step = self.step,
            index,
            player = %player,
            discarded,
            "Move played"
        );
        self.debug_check();

        MoveOutcome::Played {
            step: self.step,
            index,
            player,
        }
    }

    /// Displays the snapshot at `step` without altering history.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::StepOutOfRange`] if `step` is past the last
    /// stored entry; the session is left unchanged.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), SessionError> {
        if step >= self.history.len() {
            return Err(SessionError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        self.step = step;
        self.x_is_next = step % 2 == 0;
        debug!(step, "Jumped to step");
        self.debug_check();
        Ok(())
    }

    /// Flips the display order of the move list.
    #[instrument(skip(self))]
    pub fn toggle_list_order(&mut self) {
        self.list_reversed = !self.list_reversed;
        debug!(list_reversed = self.list_reversed, "Move list order toggled");
    }

    /// All stored entries, including any past the current step.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the displayed entry.
    pub fn step(&self) -> usize {
        self.step
    }

    /// True when X moves next.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// True when the move list should be rendered newest first.
    pub fn list_reversed(&self) -> bool {
        self.list_reversed
    }

    /// The displayed entry.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.step]
    }

    /// Player to move next.
    pub fn next_player(&self) -> Player {
        Player::from_x_is_next(self.x_is_next)
    }

    /// Completed line on the displayed board, if any.
    pub fn winner(&self) -> Option<Win> {
        evaluate(self.current().board())
    }

    /// Cells of the completed line on the displayed board, if any.
    pub fn win_line(&self) -> Option<[usize; 3]> {
        self.winner().map(|win| win.line)
    }

    /// Status of the displayed board.
    ///
    /// A draw is reported once the history holds all nine moves, whichever
    /// step is displayed.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn status(&self) -> GameStatus {
        if let Some(win) = self.winner() {
            GameStatus::Won(win.player)
        } else if self.history.len() > CELL_COUNT {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.next_player(),
            }
        }
    }

    /// The move list in chronological order.
    pub fn moves(&self) -> Vec<MoveListEntry> {
        let len = self.history.len();
        self.history
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveListEntry::new(step, entry, len, self.step))
            .collect()
    }

    /// Everything a front-end needs to draw the session.
    #[instrument(skip(self))]
    pub fn view(&self) -> SessionView {
        SessionView {
            board: *self.current().board(),
            win_line: self.win_line(),
            moves: self.moves(),
            status: self.status(),
            step: self.step,
            list_reversed: self.list_reversed,
        }
    }

    fn ignore(&self, reason: Rejection) -> MoveOutcome {
        debug!(%reason, "Move ignored");
        MoveOutcome::Ignored(reason)
    }

    fn debug_check(&self) {
        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "session invariants violated: {:?}",
            SessionInvariants::check_all(self)
        );
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only snapshot of a session for presentation.
///
/// `moves` is always chronological; `list_reversed` tells the front-end
/// to render it in the opposite order.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionView {
    /// Displayed board.
    board: Board,
    /// Cells to highlight.
    win_line: Option<[usize; 3]>,
    /// Move list, oldest first.
    moves: Vec<MoveListEntry>,
    /// Status of the displayed board.
    status: GameStatus,
    /// Displayed step.
    step: usize,
    /// Render the move list newest first.
    list_reversed: bool,
}

impl SessionView {
    /// Move list in the order it should be rendered.
    pub fn ordered_moves(&self) -> Vec<&MoveListEntry> {
        if self.list_reversed {
            self.moves.iter().rev().collect()
        } else {
            self.moves.iter().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    fn play_all(session: &mut GameSession, moves: &[usize]) {
        for &i in moves {
            assert!(session.play_move(i).is_played(), "move {} rejected", i);
        }
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.step(), 0);
        assert!(session.x_is_next());
        assert!(!session.list_reversed());
        assert_eq!(session.status(), GameStatus::InProgress { next: Player::X });
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = GameSession::new();
        let mut flags = vec![session.x_is_next()];
        for i in 0..3 {
            session.play_move(i);
            flags.push(session.x_is_next());
        }
        assert_eq!(flags, vec![true, false, true, false]);
        assert_eq!(session.current().board().get(1), Some(Square::Occupied(Player::O)));
    }

    #[test]
    fn test_occupied_square_ignored() {
        let mut session = GameSession::new();
        session.play_move(4);
        let before = session.clone();

        let outcome = session.play_move(4);
        assert_eq!(outcome, MoveOutcome::Ignored(Rejection::SquareOccupied(4)));
        assert_eq!(session, before);
    }

    #[test]
    fn test_off_board_ignored() {
        let mut session = GameSession::new();
        let before = session.clone();
        assert_eq!(
            session.play_move(9).rejection(),
            Some(Rejection::OutOfBounds(9))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_play_after_win_ignored() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 3, 1, 4, 2]);
        let before = session.clone();

        assert_eq!(session.play_move(8), MoveOutcome::Ignored(Rejection::GameOver));
        assert_eq!(session, before);
    }

    #[test]
    fn test_draw_counts_stored_moves() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(session.status(), GameStatus::Draw);

        session.jump_to(4).expect("in range");
        assert!(session.current().board().is_empty(8));
        assert_eq!(session.status(), GameStatus::Draw);
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 1, 2]);

        session.jump_to(1).expect("in range");
        assert_eq!(session.step(), 1);
        assert!(!session.x_is_next());
        assert_eq!(session.history().len(), 4);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0]);
        let before = session.clone();

        assert_eq!(
            session.jump_to(2),
            Err(SessionError::StepOutOfRange { step: 2, len: 2 })
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_move_after_jump_discards_branch() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 1, 2, 3]);
        session.jump_to(1).expect("in range");

        let outcome = session.play_move(8);
        assert_eq!(
            outcome,
            MoveOutcome::Played { step: 2, index: 8, player: Player::O }
        );
        assert_eq!(session.history().len(), 3);
        assert!(session.current().board().is_empty(2));
    }

    #[test]
    fn test_toggle_only_touches_flag() {
        let mut session = GameSession::new();
        play_all(&mut session, &[4]);
        let before = session.clone();

        session.toggle_list_order();
        assert!(session.list_reversed());
        assert_eq!(session.history(), before.history());
        assert_eq!(session.step(), before.step());

        session.toggle_list_order();
        assert_eq!(session, before);
    }

    #[test]
    fn test_view_ordering() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 4]);
        session.toggle_list_order();

        let view = session.view();
        let steps: Vec<usize> = view.ordered_moves().iter().map(|m| *m.step()).collect();
        assert_eq!(steps, vec![2, 1, 0]);
        let stored: Vec<usize> = view.moves().iter().map(|m| *m.step()).collect();
        assert_eq!(stored, vec![0, 1, 2]);
    }
}
