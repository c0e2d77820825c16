//! Board storage for checkers.

use super::coordinate::Coordinate;
use super::types::{CellOccupant, Piece, Player, Rank};
use crate::config::CheckersConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a piece.
    Occupied(Piece),
}

impl Square {
    /// The piece on this square, if any.
    pub fn piece(self) -> Option<Piece> {
        match self {
            Square::Empty => None,
            Square::Occupied(piece) => Some(piece),
        }
    }

    /// The occupant as seen by renderers.
    pub fn occupant(self) -> CellOccupant {
        self.piece()
            .map_or(CellOccupant::Empty, |piece| piece.owner.occupant())
    }
}

/// Square board of side `N`, row-major.
///
/// Cells only change through `place`, `move_piece`, `remove` and `promote`,
/// all of which funnel into one private setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    size: i32,
    squares: Vec<Square>,
}

impl BoardState {
    /// Creates an empty board of side `size`.
    #[instrument]
    pub fn new(size: i32) -> Self {
        let cells = usize::try_from(size).map_or(0, |n| n * n);
        Self {
            size,
            squares: vec![Square::Empty; cells],
        }
    }

    /// Creates a board with the opening layout.
    ///
    /// Player A fills the dark squares of the first `home_rows` rows,
    /// player B the dark squares of the last `home_rows` rows.
    #[instrument(skip(config), fields(board_size = config.board_size(), home_rows = config.home_rows()))]
    pub fn opening(config: &CheckersConfig) -> Self {
        let size = *config.board_size();
        let home_rows = *config.home_rows();
        let mut board = Self::new(size);

        for (player, rows) in [
            (Player::A, 0..home_rows),
            (Player::B, size - home_rows..size),
        ] {
            for y in rows {
                for x in 0..size {
                    let coord = Coordinate::new(x, y);
                    if Self::is_dark(coord) {
                        board.write(coord, Square::Occupied(Piece::man(player)));
                    }
                }
            }
        }

        debug!(
            a = board.count(Player::A),
            b = board.count(Player::B),
            "Opening layout placed"
        );
        board
    }

    /// Side length of the board.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of cells on the board.
    pub fn capacity(&self) -> usize {
        self.squares.len()
    }

    /// Returns true iff `0 <= x < N` and `0 <= y < N`.
    pub fn is_in_bounds(&self, coord: Coordinate) -> bool {
        (0..self.size).contains(&coord.x) && (0..self.size).contains(&coord.y)
    }

    /// Returns true for playable squares, where `(x + y)` is even.
    pub fn is_dark(coord: Coordinate) -> bool {
        coord.x.rem_euclid(2) == coord.y.rem_euclid(2)
    }

    fn index(&self, coord: Coordinate) -> Result<usize, BoardError> {
        if !self.is_in_bounds(coord) {
            return Err(BoardError::OutOfBounds(coord));
        }
        // Both components are in [0, size) here.
        let (x, y, size) = (coord.x as usize, coord.y as usize, self.size as usize);
        Ok(y * size + x)
    }

    // Single mutation entry point. Callers have already bounds-checked.
    fn write(&mut self, coord: Coordinate, square: Square) {
        if let Ok(idx) = self.index(coord) {
            self.squares[idx] = square;
        }
    }

    fn square(&self, coord: Coordinate) -> Result<Square, BoardError> {
        let idx = self.index(coord)?;
        Ok(self.squares[idx])
    }

    /// The occupant at `coord`.
    pub fn occupant_at(&self, coord: Coordinate) -> Result<CellOccupant, BoardError> {
        Ok(self.square(coord)?.occupant())
    }

    /// The piece at `coord`, if any.
    pub fn piece_at(&self, coord: Coordinate) -> Result<Option<Piece>, BoardError> {
        Ok(self.square(coord)?.piece())
    }

    /// Returns true if `coord` is on the board and empty.
    pub fn is_vacant(&self, coord: Coordinate) -> bool {
        matches!(self.square(coord), Ok(Square::Empty))
    }

    /// Places a piece on an empty cell (setup only).
    #[instrument(skip(self))]
    pub fn place(&mut self, coord: Coordinate, piece: Piece) -> Result<(), BoardError> {
        if self.square(coord)? != Square::Empty {
            return Err(BoardError::CellOccupied(coord));
        }
        self.write(coord, Square::Occupied(piece));
        Ok(())
    }

    /// Moves the piece at `from` to the empty cell `to`.
    ///
    /// Either both cells change or neither does.
    #[instrument(skip(self))]
    pub fn move_piece(&mut self, from: Coordinate, to: Coordinate) -> Result<Piece, BoardError> {
        let source = self.square(from)?;
        let destination = self.square(to)?;

        let piece = source.piece().ok_or(BoardError::SourceEmpty(from))?;
        if destination != Square::Empty {
            return Err(BoardError::DestinationOccupied(to));
        }

        self.write(from, Square::Empty);
        self.write(to, Square::Occupied(piece));
        Ok(piece)
    }

    /// Clears a cell, returning what was on it.
    #[instrument(skip(self))]
    pub fn remove(&mut self, coord: Coordinate) -> Result<Option<Piece>, BoardError> {
        let previous = self.square(coord)?.piece();
        self.write(coord, Square::Empty);
        Ok(previous)
    }

    /// Crowns the piece at `coord`. Returns false if it was already a king.
    #[instrument(skip(self))]
    pub fn promote(&mut self, coord: Coordinate) -> Result<bool, BoardError> {
        let piece = self
            .square(coord)?
            .piece()
            .ok_or(BoardError::SourceEmpty(coord))?;
        if piece.rank == Rank::King {
            return Ok(false);
        }
        self.write(coord, Square::Occupied(Piece::king(piece.owner)));
        Ok(true)
    }

    /// Iterates over every coordinate on the board, row by row.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| Coordinate::new(x, y)))
    }

    /// All pieces owned by `player`, row by row.
    pub fn pieces(&self, player: Player) -> Vec<(Coordinate, Piece)> {
        self.coordinates()
            .filter_map(|c| {
                self.piece_at(c)
                    .ok()
                    .flatten()
                    .filter(|piece| piece.owner == player)
                    .map(|piece| (c, piece))
            })
            .collect()
    }

    /// Number of pieces owned by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| matches!(s, Square::Occupied(p) if p.owner == player))
            .count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Men are `a`/`b`, kings `A`/`B`, empty dark squares `.`.
    pub fn display(&self) -> String {
        let mut result = String::from("  ");
        for x in 0..self.size {
            result.push_str(&format!(" {}", x % 10));
        }
        result.push('\n');

        for y in 0..self.size {
            result.push_str(&format!("{:>2}", y));
            for x in 0..self.size {
                let coord = Coordinate::new(x, y);
                let symbol = match self.piece_at(coord).ok().flatten() {
                    Some(piece) => piece.symbol(),
                    None if Self::is_dark(coord) => '.',
                    None => ' ',
                };
                result.push(' ');
                result.push(symbol);
            }
            result.push('\n');
        }
        result
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Error raised by board storage operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The coordinate is off the board.
    #[display("Coordinate {} is out of bounds", _0)]
    OutOfBounds(Coordinate),

    /// Setup tried to place a piece on an occupied cell.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coordinate),

    /// There is no piece to move.
    #[display("No piece at {}", _0)]
    SourceEmpty(Coordinate),

    /// The destination already holds a piece.
    #[display("Destination {} is occupied", _0)]
    DestinationOccupied(Coordinate),
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = BoardState::new(8);
        assert_eq!(board.capacity(), 64);
        assert_eq!(board.count(Player::A), 0);
        assert!(board.coordinates().all(|c| board.is_vacant(c)));
    }

    #[test]
    fn test_upper_bound_is_exclusive() {
        let board = BoardState::new(8);
        assert!(board.is_in_bounds(Coordinate::new(7, 7)));
        assert!(!board.is_in_bounds(Coordinate::new(8, 0)));
        assert!(!board.is_in_bounds(Coordinate::new(0, 8)));
        assert!(!board.is_in_bounds(Coordinate::new(-1, 3)));
    }

    #[test]
    fn test_failed_move_changes_nothing() {
        let mut board = BoardState::new(8);
        board.place(Coordinate::new(1, 1), Piece::man(Player::A)).unwrap();
        board.place(Coordinate::new(2, 2), Piece::man(Player::B)).unwrap();
        let before = board.clone();

        assert_eq!(
            board.move_piece(Coordinate::new(1, 1), Coordinate::new(2, 2)),
            Err(BoardError::DestinationOccupied(Coordinate::new(2, 2)))
        );
        assert_eq!(
            board.move_piece(Coordinate::new(1, 1), Coordinate::new(8, 8)),
            Err(BoardError::OutOfBounds(Coordinate::new(8, 8)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_promote_crowns_once() {
        let mut board = BoardState::new(8);
        let c = Coordinate::new(3, 7);
        board.place(c, Piece::man(Player::A)).unwrap();
        assert_eq!(board.promote(c), Ok(true));
        assert_eq!(board.promote(c), Ok(false));
        assert_eq!(board.piece_at(c), Ok(Some(Piece::king(Player::A))));
        assert_eq!(
            board.promote(Coordinate::new(0, 0)),
            Err(BoardError::SourceEmpty(Coordinate::new(0, 0)))
        );
    }

    #[test]
    fn test_display_marks_pieces() {
        let mut board = BoardState::new(4);
        board.place(Coordinate::new(0, 0), Piece::man(Player::A)).unwrap();
        board.place(Coordinate::new(3, 3), Piece::king(Player::B)).unwrap();
        let text = board.display();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1], " 0 a   .  ");
        assert_eq!(rows[4], " 3   .   B");
    }

    #[test]
    fn test_extreme_coordinates() {
        let board = BoardState::new(8);
        let far = Coordinate::new(i32::MAX, i32::MAX);
        assert!(BoardState::is_dark(far));
        assert!(!BoardState::is_dark(Coordinate::new(i32::MIN, i32::MAX)));
        assert_eq!(board.occupant_at(far), Err(BoardError::OutOfBounds(far)));
    }
}
