//! Dark squares invariant: pieces only ever stand on playable squares.

use super::super::{BoardState, GameSession, Player};
use super::Invariant;

/// Invariant: every piece sits on a dark square.
///
/// Diagonal moves preserve square colour, so a piece on a light square
/// means the board was written outside the rules.
pub struct DarkSquaresInvariant;

impl Invariant<GameSession> for DarkSquaresInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        [Player::A, Player::B].into_iter().all(|player| {
            board
                .pieces(player)
                .iter()
                .all(|(coord, _)| BoardState::is_dark(*coord))
        })
    }

    fn description() -> &'static str {
        "Pieces stand only on dark squares"
    }
}
