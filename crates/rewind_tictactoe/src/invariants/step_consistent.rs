//! Step consistency invariant: the pointer is in range and fixes the turn.

use super::Invariant;
use crate::GameSession;

/// Invariant: `step < history.len()` and X is next exactly when `step`
/// is even.
pub struct StepConsistentInvariant;

impl Invariant<GameSession> for StepConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        session.step() < session.history().len()
            && session.x_is_next() == (session.step() % 2 == 0)
    }

    fn description() -> &'static str {
        "Step is within history and matches the turn"
    }
}
