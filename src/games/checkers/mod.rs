//! Checkers rules engine.

mod action;
mod board;
mod contracts;
mod coordinate;
mod direction;
pub mod invariants;
pub mod rules;
mod selection;
mod session;
mod types;

pub use action::{Distance, IllegalMove, Move, MoveError, MoveOutcome, MoveRequest, Relocation};
pub use board::{BoardError, BoardState, Square};
pub use contracts::{Contract, ContinuesJump, GameInProgress, LegalMove, MoveContract, PlayersTurn};
pub use coordinate::Coordinate;
pub use direction::{Direction, DirectionError};
pub use rules::{AppliedMove, MoveRules};
pub use selection::{ClickOutcome, TileSelection, move_between};
pub use session::{GameSession, PositionError};
pub use types::{CellOccupant, GameStatus, Piece, Player, Rank};

pub use crate::config::CheckersConfig;
