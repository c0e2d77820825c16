//! Integer board coordinates.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A position (or offset) on the board.
///
/// Coordinates carry no validity of their own; whether a coordinate is on
/// the board depends on the board size (see `BoardState::is_in_bounds`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column, growing to the east.
    pub x: i32,
    /// Row, growing to the south.
    pub y: i32,
}

impl Coordinate {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    /// Creates a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `self - rhs` with each component clamped to the `i32` range.
    pub fn saturating_sub(self, rhs: Coordinate) -> Self {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }

    /// Sum of the absolute components.
    pub fn manhattan_length(self) -> i32 {
        self.x.abs() + self.y.abs()
    }

    /// Squared Euclidean length.
    pub fn square_magnitude(self) -> i32 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        f64::from(self.square_magnitude()).sqrt()
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Self::Output {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Self::Output {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coordinate {
    type Output = Coordinate;

    fn neg(self) -> Self::Output {
        Coordinate::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Coordinate {
    type Output = Coordinate;

    fn mul(self, rhs: i32) -> Coordinate {
        Coordinate::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Coordinate> for i32 {
    type Output = Coordinate;

    fn mul(self, rhs: Coordinate) -> Coordinate {
        rhs * self
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
