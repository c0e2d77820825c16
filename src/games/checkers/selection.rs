//! Two-click tile selection.
//!
//! Front-ends report tile clicks; the first click picks a piece of the
//! side to move and the second names its destination. The geometry of
//! the two clicks decides direction and distance.

use super::action::{Distance, IllegalMove, Move, MoveError, MoveOutcome, MoveRequest};
use super::coordinate::Coordinate;
use super::direction::{Direction, DirectionError};
use super::session::GameSession;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// A piece is now selected.
    Selected(Coordinate),
    /// The selection was cleared.
    Deselected,
    /// A move was submitted and accepted.
    Moved(MoveOutcome),
}

/// Selection state kept by a front-end between clicks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileSelection {
    selected: Option<Coordinate>,
}

impl TileSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected square.
    pub fn selected(&self) -> Option<Coordinate> {
        self.selected
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Handles a click on `coord` on behalf of the side to move.
    ///
    /// Any submission clears the selection, except that a capture chain
    /// keeps the jumping piece selected. While the chain is pending,
    /// clicking that piece again leaves it selected.
    #[instrument(skip(self, session), fields(selected = ?self.selected))]
    pub fn click(
        &mut self,
        session: &mut GameSession,
        coord: Coordinate,
    ) -> Result<ClickOutcome, MoveError> {
        if session.status().is_over() {
            return Err(MoveError::GameOver);
        }

        let player = session.turn();
        let owns = matches!(
            session.board().piece_at(coord)?,
            Some(piece) if piece.owner == player
        );

        let Some(from) = self.selected else {
            if !owns {
                return Err(IllegalMove::InvalidSource.into());
            }
            if let Some(at) = session.pending_jump() {
                if at != coord {
                    return Err(IllegalMove::MustContinueJump(at).into());
                }
            }
            debug!(%coord, "Piece selected");
            self.selected = Some(coord);
            return Ok(ClickOutcome::Selected(coord));
        };

        if coord == from {
            // A piece mid-chain cannot be put down.
            if session.pending_jump() == Some(from) {
                return Ok(ClickOutcome::Selected(from));
            }
            self.selected = None;
            return Ok(ClickOutcome::Deselected);
        }

        if owns && session.pending_jump().is_none() {
            debug!(%coord, "Selection moved");
            self.selected = Some(coord);
            return Ok(ClickOutcome::Selected(coord));
        }

        self.selected = None;
        let mv = move_between(from, coord)?;
        let result = session.submit(MoveRequest::new(player, mv));
        if let Some(at) = session.pending_jump() {
            self.selected = Some(at);
        }
        result.map(ClickOutcome::Moved)
    }
}

/// Derives the move that takes a piece from `from` to `to`.
///
/// # Errors
///
/// `InvalidDirection` when the squares are not on a shared diagonal,
/// `IllegalMove(InvalidDistance)` when they are more than two apart.
#[instrument]
pub fn move_between(from: Coordinate, to: Coordinate) -> Result<Move, MoveError> {
    let delta = to.saturating_sub(from);
    let distance = match (delta.x.checked_abs(), delta.y.checked_abs()) {
        (Some(dx), Some(dy)) if dx > 0 && dx == dy => dx,
        _ => return Err(DirectionError::InvalidDirectionVector(delta).into()),
    };

    let direction = Direction::from_vector(Coordinate::new(
        delta.x / distance,
        delta.y / distance,
    ))?;
    let distance = Distance::try_from(distance)?;
    Ok(Move::new(from, direction, distance))
}
