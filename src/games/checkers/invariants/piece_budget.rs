//! Piece budget invariant: pieces are never created after the opening.

use super::super::{GameSession, Player};
use super::Invariant;

/// Invariant: no player has more pieces than the opening gave them.
///
/// Moves relocate or remove pieces but never add any, so counts are
/// bounded by the opening layout and, together, by the board capacity.
pub struct PieceBudgetInvariant;

impl Invariant<GameSession> for PieceBudgetInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        let budget = session.opening_pieces();
        let a = board.count(Player::A);
        let b = board.count(Player::B);

        a <= budget && b <= budget && a + b <= board.capacity()
    }

    fn description() -> &'static str {
        "Piece counts never exceed the opening layout"
    }
}
