//! The four diagonal move directions.

use super::coordinate::Coordinate;
use super::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A diagonal direction of travel.
///
/// North is toward decreasing y, so player A's men advance SE/SW and
/// player B's men advance NE/NW.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    /// `(1, -1)`
    #[strum(to_string = "NE", serialize = "north_east")]
    NorthEast,
    /// `(1, 1)`
    #[strum(to_string = "SE", serialize = "south_east")]
    SouthEast,
    /// `(-1, 1)`
    #[strum(to_string = "SW", serialize = "south_west")]
    SouthWest,
    /// `(-1, -1)`
    #[strum(to_string = "NW", serialize = "north_west")]
    NorthWest,
}

const LOOKUP: [(Direction, Coordinate); 4] = [
    (Direction::NorthEast, Coordinate::new(1, -1)),
    (Direction::SouthEast, Coordinate::new(1, 1)),
    (Direction::SouthWest, Coordinate::new(-1, 1)),
    (Direction::NorthWest, Coordinate::new(-1, -1)),
];

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Unit vector for this direction.
    pub fn vector(self) -> Coordinate {
        match self {
            Direction::NorthEast => LOOKUP[0].1,
            Direction::SouthEast => LOOKUP[1].1,
            Direction::SouthWest => LOOKUP[2].1,
            Direction::NorthWest => LOOKUP[3].1,
        }
    }

    /// Looks up the direction for an exact unit diagonal vector.
    ///
    /// # Errors
    ///
    /// Returns `DirectionError::InvalidDirectionVector` for anything other
    /// than the four unit diagonals.
    #[instrument]
    pub fn from_vector(vector: Coordinate) -> Result<Self, DirectionError> {
        LOOKUP
            .iter()
            .find(|(_, v)| *v == vector)
            .map(|(d, _)| *d)
            .ok_or(DirectionError::InvalidDirectionVector(vector))
    }

    /// Returns true if a man owned by `player` may travel this way.
    pub fn is_forward_for(self, player: Player) -> bool {
        self.vector().y == player.forward_y()
    }

    /// The two directions a man owned by `player` may travel.
    pub fn forward_for(player: Player) -> [Direction; 2] {
        match player {
            Player::A => [Direction::SouthEast, Direction::SouthWest],
            Player::B => [Direction::NorthEast, Direction::NorthWest],
        }
    }
}

/// Error converting a vector to a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DirectionError {
    /// The vector is not one of the four unit diagonals.
    #[display("Vector {} is not a diagonal direction", _0)]
    InvalidDirectionVector(Coordinate),
}

impl std::error::Error for DirectionError {}
