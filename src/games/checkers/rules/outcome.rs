//! Terminal-state detection for checkers.

use super::super::board::BoardState;
use super::super::types::{GameStatus, Player};
use super::movement::MoveRules;
use tracing::{debug, instrument};

/// Evaluates the position with `to_move` about to play.
///
/// The side to move loses when it has no pieces or no legal move. With a
/// non-zero `quiet_limit`, that many plies without a capture is a draw.
#[instrument(skip(board, rules))]
pub fn evaluate(
    board: &BoardState,
    rules: &MoveRules,
    to_move: Player,
    quiet_plies: u32,
    quiet_limit: u32,
) -> GameStatus {
    if board.count(to_move) == 0 {
        debug!("Side to move has no pieces left");
        return to_move.opponent().victory();
    }

    if rules.legal_moves(board, to_move).is_empty() {
        debug!("Side to move is blocked");
        return to_move.opponent().victory();
    }

    if quiet_limit > 0 && quiet_plies >= quiet_limit {
        debug!(quiet_plies, "Quiet move limit reached");
        return GameStatus::Draw;
    }

    GameStatus::InProgress
}
