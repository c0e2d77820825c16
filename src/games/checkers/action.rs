//! First-class action types for checkers.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::board::BoardError;
use super::coordinate::Coordinate;
use super::direction::{Direction, DirectionError};
use super::types::{GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How far a move travels along its diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Distance {
    /// One square onto an empty neighbour.
    Step,
    /// Two squares over an opponent piece, capturing it.
    Jump,
}

impl Distance {
    /// Number of squares travelled.
    pub fn get(self) -> i32 {
        match self {
            Distance::Step => 1,
            Distance::Jump => 2,
        }
    }
}

impl TryFrom<i32> for Distance {
    type Error = IllegalMove;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Distance::Step),
            2 => Ok(Distance::Jump),
            other => Err(IllegalMove::InvalidDistance(other)),
        }
    }
}

/// A proposed move: a piece, a direction and a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Square of the moving piece.
    pub from: Coordinate,
    /// Diagonal of travel.
    pub direction: Direction,
    /// Simple step or capture jump.
    pub distance: Distance,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(from: Coordinate, direction: Direction, distance: Distance) -> Self {
        Self {
            from,
            direction,
            distance,
        }
    }

    /// A one-square move.
    pub fn step(from: Coordinate, direction: Direction) -> Self {
        Self::new(from, direction, Distance::Step)
    }

    /// A capture jump.
    pub fn jump(from: Coordinate, direction: Direction) -> Self {
        Self::new(from, direction, Distance::Jump)
    }

    /// Landing square.
    pub fn destination(&self) -> Coordinate {
        self.from + self.direction.vector() * self.distance.get()
    }

    /// Square jumped over, for captures.
    pub fn jumped(&self) -> Option<Coordinate> {
        match self.distance {
            Distance::Step => None,
            Distance::Jump => Some(self.from + self.direction.vector()),
        }
    }

    /// Returns true for capture jumps.
    pub fn is_capture(&self) -> bool {
        self.distance == Distance::Jump
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self.distance {
            Distance::Step => "->",
            Distance::Jump => "x",
        };
        write!(
            f,
            "{} {} {} ({})",
            self.from,
            verb,
            self.destination(),
            self.direction
        )
    }
}

/// A move together with the player submitting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct MoveRequest {
    /// The player making the move.
    pub player: Player,
    /// The proposed move.
    pub mv: Move,
}

impl std::fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.player, self.mv)
    }
}

/// Source and destination of a relocated piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relocation {
    /// Square the piece left.
    pub from: Coordinate,
    /// Square the piece landed on.
    pub to: Coordinate,
}

/// Description of an accepted move, for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Player who moved.
    player: Player,
    /// The relocated piece.
    moved: Relocation,
    /// Square of the captured piece, if any.
    captured: Option<Coordinate>,
    /// Whether the moved piece was crowned.
    promoted: bool,
    /// Player to move next.
    next_turn: Player,
    /// Status after the move.
    status: GameStatus,
}

impl MoveOutcome {
    pub(crate) fn new(
        player: Player,
        moved: Relocation,
        captured: Option<Coordinate>,
        promoted: bool,
        next_turn: Player,
        status: GameStatus,
    ) -> Self {
        Self {
            player,
            moved,
            captured,
            promoted,
            next_turn,
            status,
        }
    }
}

/// Why a move was rejected by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IllegalMove {
    /// Source is off the board or not the mover's piece.
    #[display("No piece of yours at the source square")]
    InvalidSource,

    /// Destination of a step is off the board or occupied.
    #[display("Destination is blocked")]
    Blocked,

    /// Jump without an opponent to capture or without a landing square.
    #[display("No capture available in that direction")]
    NoCaptureAvailable,

    /// A man tried to move backwards.
    #[display("Men can only move forward")]
    WrongDirection,

    /// A step was attempted while a capture is available.
    #[display("A capture is available and must be taken")]
    CaptureMandatory,

    /// Distance other than 1 or 2.
    #[display("Distance {} is not a step (1) or a jump (2)", _0)]
    InvalidDistance(i32),

    /// A multi-jump is in progress and must be continued by the same piece.
    #[display("The piece at {} must continue jumping", _0)]
    MustContinueJump(Coordinate),
}

impl std::error::Error for IllegalMove {}

/// Error that can occur when submitting a move to a session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The rules rejected the move.
    #[display("Illegal move: {}", _0)]
    IllegalMove(IllegalMove),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Player),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// A selection could not be turned into a direction.
    #[display("Invalid direction: {}", _0)]
    InvalidDirection(DirectionError),

    /// A board query failed.
    #[display("Board error: {}", _0)]
    Board(BoardError),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::IllegalMove(e) => Some(e),
            MoveError::InvalidDirection(e) => Some(e),
            MoveError::Board(e) => Some(e),
            MoveError::NotYourTurn(_)
            | MoveError::GameOver
            | MoveError::InvariantViolation(_) => None,
        }
    }
}

impl From<IllegalMove> for MoveError {
    fn from(err: IllegalMove) -> Self {
        MoveError::IllegalMove(err)
    }
}

impl From<DirectionError> for MoveError {
    fn from(err: DirectionError) -> Self {
        MoveError::InvalidDirection(err)
    }
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::Board(err)
    }
}
