//! Contract-based validation for checkers.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{IllegalMove, MoveError, MoveRequest};
use super::invariants::{CheckersInvariants, InvariantSet, summarize};
use super::session::GameSession;
use super::types::{GameStatus, Player};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not ended.
pub struct GameInProgress;

impl GameInProgress {
    /// Fails with `GameOver` once a result is in.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), MoveError> {
        if session.status() != GameStatus::InProgress {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with `NotYourTurn` for the waiting player.
    #[instrument(skip(session))]
    pub fn check(player: Player, session: &GameSession) -> Result<(), MoveError> {
        if player != session.turn() {
            Err(MoveError::NotYourTurn(player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: a pending multi-jump is continued by the same piece.
pub struct ContinuesJump;

impl ContinuesJump {
    /// Only a jump from the pending square is accepted mid-chain.
    #[instrument(skip(session))]
    pub fn check(request: &MoveRequest, session: &GameSession) -> Result<(), MoveError> {
        match session.pending_jump() {
            Some(at) if request.mv.from != at || !request.mv.is_capture() => {
                Err(IllegalMove::MustContinueJump(at).into())
            }
            _ => Ok(()),
        }
    }
}

/// Composite precondition: the game runs, it is the player's turn, any
/// pending jump is continued, and the rules accept the move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(request: &MoveRequest, session: &GameSession) -> Result<(), MoveError> {
        GameInProgress::check(session)?;
        PlayersTurn::check(request.player, session)?;
        ContinuesJump::check(request, session)?;
        session
            .rules()
            .validate(session.board(), request.player, &request.mv)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move submissions.
///
/// Preconditions:
/// - Game in progress
/// - Player's turn
/// - Pending jump continued
/// - Rules accept the move
///
/// Postconditions:
/// - Pieces stay on dark squares
/// - No pieces are created
/// - Turn bookkeeping matches the board
pub struct MoveContract;

impl Contract<GameSession, MoveRequest> for MoveContract {
    fn pre(session: &GameSession, action: &MoveRequest) -> Result<(), MoveError> {
        LegalMove::check(action, session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), MoveError> {
        let removed = before
            .board()
            .count(before.turn().opponent())
            .saturating_sub(after.board().count(before.turn().opponent()));
        if removed > 1 {
            warn!(removed, "More than one piece captured by a single move");
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {} pieces removed by one move",
                removed
            )));
        }

        CheckersInvariants::check_all(after).map_err(|violations| {
            let descriptions = summarize(&violations);
            warn!(%descriptions, "Invariant check failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
