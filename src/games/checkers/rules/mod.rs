//! Game rules for checkers.
//!
//! This module contains the move rules and the pure functions that
//! evaluate a position. Rules are separated from board storage so the
//! session and the contract checks can share them.

pub mod capture;
pub mod movement;
pub mod outcome;

pub use capture::{captures_from, has_capture};
pub use movement::{AppliedMove, MoveRules};
pub use outcome::evaluate;
