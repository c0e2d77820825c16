//! Tests for checkers turn sequencing and game termination.

use strictly_checkers::{
    BoardState, CellOccupant, CheckersConfig, Coordinate, Direction, GameSession, GameStatus,
    IllegalMove, Move, MoveError, MoveRequest, Piece, Player, PositionError,
};

fn position(pieces: &[((i32, i32), Piece)], turn: Player) -> GameSession {
    let mut board = BoardState::new(8);
    for ((x, y), piece) in pieces {
        board.place(Coordinate::new(*x, *y), *piece).unwrap();
    }
    GameSession::from_position(CheckersConfig::default(), board, turn).unwrap()
}

#[test]
fn test_start_state() {
    let session = GameSession::default();
    assert_eq!(session.turn(), Player::A);
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.pending_jump(), None);
}

#[test]
fn test_opening_step() {
    let mut session = GameSession::default();
    let outcome = session
        .submit_move(Player::A, Coordinate::new(0, 2), Direction::SouthEast, 1)
        .unwrap();

    assert_eq!(outcome.moved().from, Coordinate::new(0, 2));
    assert_eq!(outcome.moved().to, Coordinate::new(1, 3));
    assert_eq!(*outcome.captured(), None);
    assert_eq!(*outcome.next_turn(), Player::B);
    assert_eq!(session.occupant_at(Coordinate::new(0, 2)), Ok(CellOccupant::Empty));
    assert_eq!(session.occupant_at(Coordinate::new(1, 3)), Ok(CellOccupant::PlayerA));
}

#[test]
fn test_turn_flips_only_on_success() {
    let mut session = GameSession::default();

    let err = session
        .submit_move(Player::A, Coordinate::new(1, 1), Direction::SouthEast, 1)
        .unwrap_err();
    assert_eq!(err, MoveError::IllegalMove(IllegalMove::Blocked));
    assert_eq!(session.turn(), Player::A);

    session
        .submit_move(Player::A, Coordinate::new(2, 2), Direction::SouthWest, 1)
        .unwrap();
    assert_eq!(session.turn(), Player::B);
}

#[test]
fn test_not_your_turn() {
    let mut session = GameSession::default();
    let before = session.board().clone();
    assert_eq!(
        session.submit_move(Player::B, Coordinate::new(1, 5), Direction::NorthEast, 1),
        Err(MoveError::NotYourTurn(Player::B))
    );
    assert_eq!(session.board(), &before);
    assert_eq!(session.turn(), Player::A);
}

#[test]
fn test_invalid_distance() {
    let mut session = GameSession::default();
    assert_eq!(
        session.submit_move(Player::A, Coordinate::new(0, 2), Direction::SouthEast, 3),
        Err(MoveError::IllegalMove(IllegalMove::InvalidDistance(3)))
    );
    assert_eq!(session.turn(), Player::A);
}

#[test]
fn test_capture_scenario() {
    let mut session = position(
        &[
            ((2, 2), Piece::man(Player::A)),
            ((3, 3), Piece::man(Player::B)),
            ((7, 7), Piece::man(Player::B)),
        ],
        Player::A,
    );

    let outcome = session
        .submit_move(Player::A, Coordinate::new(2, 2), Direction::SouthEast, 2)
        .unwrap();
    assert_eq!(*outcome.captured(), Some(Coordinate::new(3, 3)));
    assert_eq!(outcome.moved().to, Coordinate::new(4, 4));
    assert_eq!(session.occupant_at(Coordinate::new(3, 3)), Ok(CellOccupant::Empty));
    assert_eq!(session.occupant_at(Coordinate::new(4, 4)), Ok(CellOccupant::PlayerA));
    assert_eq!(session.board().count(Player::B), 1);
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn test_simple_move_refused_while_capture_available() {
    let mut session = position(
        &[
            ((0, 0), Piece::man(Player::A)),
            ((2, 2), Piece::man(Player::A)),
            ((3, 3), Piece::man(Player::B)),
        ],
        Player::A,
    );
    assert_eq!(
        session.submit_move(Player::A, Coordinate::new(0, 0), Direction::SouthEast, 1),
        Err(MoveError::IllegalMove(IllegalMove::CaptureMandatory))
    );
    assert_eq!(session.turn(), Player::A);
}

#[test]
fn test_capturing_last_piece_wins() {
    let mut session = position(
        &[
            ((2, 2), Piece::man(Player::A)),
            ((3, 3), Piece::man(Player::B)),
        ],
        Player::A,
    );
    let outcome = session
        .submit_move(Player::A, Coordinate::new(2, 2), Direction::SouthEast, 2)
        .unwrap();
    assert_eq!(*outcome.status(), GameStatus::PlayerAWins);
    assert_eq!(session.status(), GameStatus::PlayerAWins);
    assert_eq!(
        session.submit_move(Player::B, Coordinate::new(4, 4), Direction::NorthWest, 1),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_blocking_opponent_wins() {
    // B's only man at (1,7) is hemmed in once A fills (2,6).
    let mut session = position(
        &[
            ((0, 6), Piece::man(Player::A)),
            ((1, 5), Piece::man(Player::A)),
            ((3, 5), Piece::man(Player::A)),
            ((1, 7), Piece::man(Player::B)),
        ],
        Player::A,
    );
    assert_eq!(session.status(), GameStatus::InProgress);

    let outcome = session
        .submit_move(Player::A, Coordinate::new(1, 5), Direction::SouthEast, 1)
        .unwrap();
    assert_eq!(outcome.moved().to, Coordinate::new(2, 6));
    assert_eq!(*outcome.captured(), None);
    assert_eq!(session.board().count(Player::B), 1);
    assert_eq!(session.status(), GameStatus::PlayerAWins);
    assert!(session.legal_moves().is_empty());
}

#[test]
fn test_promotion_reported() {
    let mut session = position(
        &[
            ((2, 6), Piece::man(Player::A)),
            ((6, 2), Piece::man(Player::B)),
        ],
        Player::A,
    );
    let outcome = session
        .submit_move(Player::A, Coordinate::new(2, 6), Direction::SouthEast, 1)
        .unwrap();
    assert!(*outcome.promoted());
    assert_eq!(
        session.board().piece_at(Coordinate::new(3, 7)),
        Ok(Some(Piece::king(Player::A)))
    );
}

#[test]
fn test_chain_captures_keep_turn() {
    let config = CheckersConfig::default().with_chain_captures(true);
    let mut board = BoardState::new(8);
    for (c, piece) in [
        (Coordinate::new(0, 0), Piece::man(Player::A)),
        (Coordinate::new(1, 1), Piece::man(Player::B)),
        (Coordinate::new(3, 3), Piece::man(Player::B)),
        (Coordinate::new(7, 7), Piece::man(Player::B)),
    ] {
        board.place(c, piece).unwrap();
    }
    let mut session = GameSession::from_position(config, board, Player::A).unwrap();

    let first = session
        .submit_move(Player::A, Coordinate::new(0, 0), Direction::SouthEast, 2)
        .unwrap();
    assert_eq!(*first.next_turn(), Player::A);
    assert_eq!(session.pending_jump(), Some(Coordinate::new(2, 2)));

    // Another piece may not interrupt the chain.
    assert_eq!(
        session.submit(MoveRequest::new(
            Player::A,
            Move::step(Coordinate::new(2, 2), Direction::SouthWest)
        )),
        Err(MoveError::IllegalMove(IllegalMove::MustContinueJump(
            Coordinate::new(2, 2)
        )))
    );

    let second = session
        .submit_move(Player::A, Coordinate::new(2, 2), Direction::SouthEast, 2)
        .unwrap();
    assert_eq!(*second.captured(), Some(Coordinate::new(3, 3)));
    assert_eq!(*second.next_turn(), Player::B);
    assert_eq!(session.pending_jump(), None);
    assert_eq!(session.board().count(Player::B), 1);
}

#[test]
fn test_without_chaining_turn_passes_after_capture() {
    let mut session = position(
        &[
            ((0, 0), Piece::man(Player::A)),
            ((1, 1), Piece::man(Player::B)),
            ((3, 3), Piece::man(Player::B)),
            ((7, 7), Piece::man(Player::B)),
        ],
        Player::A,
    );
    let outcome = session
        .submit_move(Player::A, Coordinate::new(0, 0), Direction::SouthEast, 2)
        .unwrap();
    assert_eq!(*outcome.next_turn(), Player::B);
    assert_eq!(session.pending_jump(), None);
}

#[test]
fn test_restart() {
    let mut session = GameSession::default();
    session
        .submit_move(Player::A, Coordinate::new(0, 2), Direction::SouthEast, 1)
        .unwrap();
    session.start();
    assert_eq!(session.turn(), Player::A);
    assert_eq!(session.board(), GameSession::default().board());
}

#[test]
fn test_position_with_piece_on_light_square_is_refused() {
    let mut board = BoardState::new(8);
    board.place(Coordinate::new(0, 1), Piece::man(Player::A)).unwrap();
    board.place(Coordinate::new(6, 6), Piece::man(Player::B)).unwrap();

    let result = GameSession::from_position(CheckersConfig::default(), board, Player::A);
    assert!(matches!(
        result,
        Err(PositionError::InvariantViolation(ref msg)) if msg.contains("dark squares")
    ));
}

#[test]
fn test_position_budget_covers_surplus_pieces() {
    let config = CheckersConfig::default().with_board_size(4).with_home_rows(1);
    let mut board = BoardState::new(4);
    // The opening gives each side two men on a 4x4 board; A has three here.
    for (x, y) in [(0, 0), (2, 0), (1, 1)] {
        board.place(Coordinate::new(x, y), Piece::man(Player::A)).unwrap();
    }
    board.place(Coordinate::new(1, 3), Piece::man(Player::B)).unwrap();

    // Surplus pieces raise the budget rather than fail it.
    let session = GameSession::from_position(config, board, Player::A).unwrap();
    assert_eq!(session.opening_pieces(), 3);
}

#[test]
fn test_position_size_must_match_config() {
    let mut board = BoardState::new(10);
    board.place(Coordinate::new(0, 0), Piece::man(Player::A)).unwrap();
    board.place(Coordinate::new(9, 9), Piece::man(Player::B)).unwrap();

    assert!(matches!(
        GameSession::from_position(CheckersConfig::default(), board, Player::A),
        Err(PositionError::SizeMismatch {
            board: 10,
            config: 8
        })
    ));
}

#[test]
fn test_position_with_invalid_config_is_refused() {
    let config = CheckersConfig::default().with_board_size(7);
    let board = BoardState::new(7);
    assert!(matches!(
        GameSession::from_position(config, board, Player::A),
        Err(PositionError::Config(_))
    ));
}

#[test]
fn test_accepted_position_plays_its_listed_moves() {
    let session = position(
        &[
            ((1, 1), Piece::man(Player::A)),
            ((6, 6), Piece::man(Player::B)),
        ],
        Player::A,
    );
    for mv in session.legal_moves() {
        let mut copy = session.clone();
        assert!(
            copy.submit(MoveRequest::new(Player::A, mv)).is_ok(),
            "listed move {mv} was refused"
        );
    }
}
