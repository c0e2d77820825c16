//! Destination checks and capture detection.

use super::super::action::{Distance, IllegalMove, Move};
use super::super::board::BoardState;
use super::super::coordinate::Coordinate;
use super::super::direction::Direction;
use super::super::types::{Piece, Player};
use super::movement::may_travel;
use tracing::instrument;

/// Where a validated move lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    /// Destination square.
    pub to: Coordinate,
    /// Opponent square jumped over, for captures.
    pub jumped: Option<Coordinate>,
}

/// Checks the destination of `mv` for `piece`.
///
/// A step needs an empty, on-board destination. A jump additionally needs
/// an opponent piece on the square in between.
pub(crate) fn landing(
    board: &BoardState,
    piece: Piece,
    mv: &Move,
) -> Result<Landing, IllegalMove> {
    let to = mv.destination();
    match mv.distance {
        Distance::Step => {
            if board.is_vacant(to) {
                Ok(Landing { to, jumped: None })
            } else {
                Err(IllegalMove::Blocked)
            }
        }
        Distance::Jump => {
            let mid = mv.from + mv.direction.vector();
            let over_opponent = matches!(
                board.piece_at(mid),
                Ok(Some(other)) if other.owner == piece.owner.opponent()
            );
            if over_opponent && board.is_vacant(to) {
                Ok(Landing {
                    to,
                    jumped: Some(mid),
                })
            } else {
                Err(IllegalMove::NoCaptureAvailable)
            }
        }
    }
}

/// Every capture jump available to the piece at `from`.
#[instrument(skip(board))]
pub fn captures_from(board: &BoardState, from: Coordinate) -> Vec<Move> {
    let Ok(Some(piece)) = board.piece_at(from) else {
        return Vec::new();
    };

    Direction::ALL
        .into_iter()
        .filter(|d| may_travel(piece, *d))
        .map(|d| Move::jump(from, d))
        .filter(|mv| landing(board, piece, mv).is_ok())
        .collect()
}

/// Returns true if any of `player`'s pieces can capture.
#[instrument(skip(board))]
pub fn has_capture(board: &BoardState, player: Player) -> bool {
    board
        .pieces(player)
        .into_iter()
        .any(|(from, _)| !captures_from(board, from).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_needs_opponent_in_between() {
        let mut board = BoardState::new(8);
        board.place(Coordinate::new(2, 2), Piece::man(Player::A)).unwrap();
        board.place(Coordinate::new(3, 3), Piece::man(Player::A)).unwrap();
        assert!(captures_from(&board, Coordinate::new(2, 2)).is_empty());
        assert!(!has_capture(&board, Player::A));
    }

    #[test]
    fn test_capture_needs_landing_square() {
        let mut board = BoardState::new(8);
        board.place(Coordinate::new(2, 2), Piece::man(Player::A)).unwrap();
        board.place(Coordinate::new(3, 3), Piece::man(Player::B)).unwrap();
        board.place(Coordinate::new(4, 4), Piece::man(Player::B)).unwrap();
        assert!(captures_from(&board, Coordinate::new(2, 2)).is_empty());
    }

    #[test]
    fn test_capture_off_the_edge_is_refused() {
        let mut board = BoardState::new(8);
        board.place(Coordinate::new(6, 6), Piece::man(Player::A)).unwrap();
        board.place(Coordinate::new(7, 7), Piece::man(Player::B)).unwrap();
        let mv = Move::jump(Coordinate::new(6, 6), Direction::SouthEast);
        assert_eq!(
            landing(&board, Piece::man(Player::A), &mv),
            Err(IllegalMove::NoCaptureAvailable)
        );
    }

    #[test]
    fn test_men_capture_forward_only() {
        let mut board = BoardState::new(8);
        board.place(Coordinate::new(4, 4), Piece::man(Player::A)).unwrap();
        board.place(Coordinate::new(3, 3), Piece::man(Player::B)).unwrap();
        assert!(captures_from(&board, Coordinate::new(4, 4)).is_empty());
        assert!(!has_capture(&board, Player::B));
    }

    #[test]
    fn test_king_captures_backwards() {
        let mut board = BoardState::new(8);
        board.place(Coordinate::new(4, 4), Piece::king(Player::A)).unwrap();
        board.place(Coordinate::new(3, 3), Piece::man(Player::B)).unwrap();
        assert_eq!(
            captures_from(&board, Coordinate::new(4, 4)),
            vec![Move::jump(Coordinate::new(4, 4), Direction::NorthWest)]
        );
    }
}
