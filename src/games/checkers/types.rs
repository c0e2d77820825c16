//! Core domain types for checkers.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Player {
    /// Player A (moves first, advances toward increasing y).
    A,
    /// Player B (advances toward decreasing y).
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// The cell occupant this player's pieces show up as.
    pub fn occupant(self) -> CellOccupant {
        match self {
            Player::A => CellOccupant::PlayerA,
            Player::B => CellOccupant::PlayerB,
        }
    }

    /// Sign of the y step for this player's men.
    pub fn forward_y(self) -> i32 {
        match self {
            Player::A => 1,
            Player::B => -1,
        }
    }

    /// Status reported when this player wins.
    pub fn victory(self) -> GameStatus {
        match self {
            Player::A => GameStatus::PlayerAWins,
            Player::B => GameStatus::PlayerBWins,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "Player A"),
            Player::B => write!(f, "Player B"),
        }
    }
}

/// What a cell holds, as seen by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellOccupant {
    /// Nothing on the cell.
    #[default]
    Empty,
    /// A piece of player A.
    PlayerA,
    /// A piece of player B.
    PlayerB,
}

impl CellOccupant {
    /// The owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            CellOccupant::Empty => None,
            CellOccupant::PlayerA => Some(Player::A),
            CellOccupant::PlayerB => Some(Player::B),
        }
    }

    /// Returns true for `Empty`.
    pub fn is_empty(self) -> bool {
        self == CellOccupant::Empty
    }
}

/// Promotion level of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rank {
    /// Moves forward only.
    #[default]
    Man,
    /// Moves in all four diagonals.
    King,
}

/// A token on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Piece {
    /// Owner of the piece.
    pub owner: Player,
    /// Promotion level.
    pub rank: Rank,
}

impl Piece {
    /// An unpromoted piece.
    pub fn man(owner: Player) -> Self {
        Self::new(owner, Rank::Man)
    }

    /// A promoted piece.
    pub fn king(owner: Player) -> Self {
        Self::new(owner, Rank::King)
    }

    /// Returns true if the piece has been promoted.
    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    /// Single-letter symbol: lowercase for men, uppercase for kings.
    pub fn symbol(&self) -> char {
        let c = match self.owner {
            Player::A => 'a',
            Player::B => 'b',
        };
        match self.rank {
            Rank::Man => c,
            Rank::King => c.to_ascii_uppercase(),
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Player A won.
    PlayerAWins,
    /// Player B won.
    PlayerBWins,
    /// Game ended without a winner.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::PlayerAWins => Some(Player::A),
            GameStatus::PlayerBWins => Some(Player::B),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::PlayerAWins => write!(f, "Player A wins"),
            GameStatus::PlayerBWins => write!(f, "Player B wins"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
