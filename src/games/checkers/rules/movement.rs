//! Move validation and application.

use super::capture::{self, Landing};
use super::super::action::{Distance, IllegalMove, Move, MoveError, Relocation};
use super::super::board::BoardState;
use super::super::coordinate::Coordinate;
use super::super::direction::Direction;
use super::super::types::{Piece, Player, Rank};
use crate::config::CheckersConfig;
use tracing::{debug, instrument};

/// Result of applying a legal move to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    /// The relocated piece.
    pub moved: Relocation,
    /// Square of the removed opponent piece, for captures.
    pub captured: Option<Coordinate>,
    /// Whether the piece was crowned on landing.
    pub promoted: bool,
}

/// Validates and applies moves for one rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRules {
    mandatory_capture: bool,
    promote_kings: bool,
}

impl Default for MoveRules {
    fn default() -> Self {
        Self {
            mandatory_capture: true,
            promote_kings: true,
        }
    }
}

impl MoveRules {
    /// Rules matching a configuration.
    pub fn from_config(config: &CheckersConfig) -> Self {
        Self {
            mandatory_capture: *config.mandatory_capture(),
            promote_kings: *config.promote_kings(),
        }
    }

    /// Whether steps are refused while a capture is available.
    pub fn mandatory_capture(&self) -> bool {
        self.mandatory_capture
    }

    /// Checks a move for `player` without touching the board.
    ///
    /// Checks run in order: source, direction for the piece's rank,
    /// mandatory capture, then the destination.
    #[instrument(skip(self, board, mv), fields(mv = %mv))]
    pub fn validate(
        &self,
        board: &BoardState,
        player: Player,
        mv: &Move,
    ) -> Result<Landing, IllegalMove> {
        let piece = match board.piece_at(mv.from) {
            Ok(Some(piece)) if piece.owner == player => piece,
            _ => {
                debug!("Source square does not hold the mover's piece");
                return Err(IllegalMove::InvalidSource);
            }
        };

        if !may_travel(piece, mv.direction) {
            return Err(IllegalMove::WrongDirection);
        }

        if mv.distance == Distance::Step
            && self.mandatory_capture
            && capture::has_capture(board, player)
        {
            debug!("Step refused while a capture is available");
            return Err(IllegalMove::CaptureMandatory);
        }

        capture::landing(board, piece, mv)
    }

    /// Validates and applies a move.
    ///
    /// Captures remove the jumped piece and relocate the mover on a scratch
    /// copy; the board is only replaced once both steps succeed.
    #[instrument(skip(self, board, mv), fields(mv = %mv))]
    pub fn apply(
        &self,
        board: &mut BoardState,
        player: Player,
        mv: &Move,
    ) -> Result<AppliedMove, MoveError> {
        let landing = self.validate(board, player, mv)?;

        let mut next = board.clone();
        if let Some(mid) = landing.jumped {
            next.remove(mid)?;
        }
        let piece = next.move_piece(mv.from, landing.to)?;

        let promoted = self.promote_kings
            && piece.rank == Rank::Man
            && landing.to.y == far_row(player, board.size())
            && next.promote(landing.to)?;

        *board = next;
        debug!(to = %landing.to, captured = ?landing.jumped, promoted, "Move applied");

        Ok(AppliedMove {
            moved: Relocation {
                from: mv.from,
                to: landing.to,
            },
            captured: landing.jumped,
            promoted,
        })
    }

    /// Every legal move for `player`.
    ///
    /// Under mandatory capture, only jumps are returned when any exist.
    #[instrument(skip(self, board))]
    pub fn legal_moves(&self, board: &BoardState, player: Player) -> Vec<Move> {
        let pieces = board.pieces(player);

        let jumps: Vec<Move> = pieces
            .iter()
            .flat_map(|(from, _)| capture::captures_from(board, *from))
            .collect();
        if self.mandatory_capture && !jumps.is_empty() {
            return jumps;
        }

        let steps = pieces.iter().flat_map(move |(from, piece)| {
            Direction::ALL
                .into_iter()
                .filter(move |d| may_travel(*piece, *d))
                .map(move |d| Move::step(*from, d))
                .filter(move |mv| board.is_vacant(mv.destination()))
        });

        jumps.iter().copied().chain(steps).collect()
    }
}

/// Returns true if `piece` may travel in `direction` at all.
pub(crate) fn may_travel(piece: Piece, direction: Direction) -> bool {
    piece.rank == Rank::King || direction.is_forward_for(piece.owner)
}

/// Row on which `player`'s men are crowned.
pub fn far_row(player: Player, size: i32) -> i32 {
    match player {
        Player::A => size - 1,
        Player::B => 0,
    }
}
