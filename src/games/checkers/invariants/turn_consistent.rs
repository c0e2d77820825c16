//! Turn consistency invariant: the session's bookkeeping matches the board.

use super::super::{GameSession, GameStatus};
use super::Invariant;

/// Invariant: while the game runs, the side to move has pieces, and a
/// pending multi-jump belongs to the side to move.
pub struct TurnConsistentInvariant;

impl Invariant<GameSession> for TurnConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        if session.status() != GameStatus::InProgress {
            return session.pending_jump().is_none();
        }

        if session.board().count(session.turn()) == 0 {
            return false;
        }

        match session.pending_jump() {
            None => true,
            Some(coord) => matches!(
                session.board().piece_at(coord),
                Ok(Some(piece)) if piece.owner == session.turn()
            ),
        }
    }

    fn description() -> &'static str {
        "Side to move has pieces and owns any pending jump"
    }
}
