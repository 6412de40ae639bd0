//! Empty start invariant: history begins at the empty board.

use super::Invariant;
use crate::GameSession;

/// Invariant: `history[0]` is the empty board with no move.
pub struct EmptyStartInvariant;

impl Invariant<GameSession> for EmptyStartInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history().first().is_some_and(|start| {
            start.board().occupied() == 0 && start.coordinates().is_none()
        })
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;

    #[test]
    fn test_new_session_holds() {
        assert!(EmptyStartInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_missing_start_violates() {
        let mut session = GameSession::new();
        session.history.clear();
        assert!(!EmptyStartInvariant::holds(&session));
    }

    #[test]
    fn test_marked_start_violates() {
        let mut session = GameSession::new();
        session.play_move(0);
        let played = session.history[1];
        session.history = vec![played, HistoryEntry::start()];
        assert!(!EmptyStartInvariant::holds(&session));
    }
}
