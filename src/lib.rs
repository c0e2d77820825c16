//! Strictly Checkers library - a type-safe checkers rules engine
//!
//! The engine owns the board and the rules; front-ends own rendering and
//! input, and call in synchronously with coordinates.
//!
//! # Architecture
//!
//! - **Board**: cell occupancy with a single mutation entry point
//! - **Rules**: move validation, transactional capture, terminal detection
//! - **Session**: turn sequencing with contract checks on every move
//! - **Selection**: two-click tile selection for pointer-driven front-ends
//!
//! # Example
//!
//! ```
//! use strictly_checkers::{CellOccupant, Coordinate, Direction, GameSession, Player};
//!
//! let mut session = GameSession::default();
//! let outcome = session
//!     .submit_move(Player::A, Coordinate::new(0, 2), Direction::SouthEast, 1)
//!     .expect("opening step is legal");
//!
//! assert_eq!(outcome.moved().to, Coordinate::new(1, 3));
//! assert_eq!(session.occupant_at(Coordinate::new(0, 2)), Ok(CellOccupant::Empty));
//! assert_eq!(session.turn(), Player::B);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{CheckersConfig, ConfigError};

// Crate-level exports - Rules engine
pub use games::checkers::{
    AppliedMove, BoardError, BoardState, CellOccupant, ClickOutcome, Coordinate, Direction,
    DirectionError, Distance, GameSession, GameStatus, IllegalMove, Move, MoveError,
    MoveOutcome, MoveRequest, MoveRules, Piece, Player, PositionError, Rank, Relocation, Square,
    TileSelection, move_between,
};

// Crate-level exports - Contracts and invariants
pub use games::checkers::invariants::{
    CheckersInvariants, DarkSquaresInvariant, Invariant, InvariantSet, InvariantViolation,
    PieceBudgetInvariant, TurnConsistentInvariant, summarize,
};
pub use games::checkers::rules::{captures_from, evaluate, has_capture};
pub use games::checkers::{Contract, MoveContract};
