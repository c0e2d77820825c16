//! Turn sequencing for a single checkers game.

use super::action::{Distance, Move, MoveError, MoveOutcome, MoveRequest};
use super::board::{BoardError, BoardState};
use super::contracts::{Contract, GameInProgress, MoveContract, PlayersTurn};
use super::coordinate::Coordinate;
use super::direction::Direction;
use super::invariants::{CheckersInvariants, InvariantSet, summarize};
use super::rules::{self, MoveRules};
use super::types::{CellOccupant, GameStatus, Player};
use crate::config::{CheckersConfig, ConfigError};
use tracing::{debug, info, instrument, warn};

/// A game in progress (or finished) between players A and B.
///
/// The session exclusively owns its board; callers only ever see it
/// through `board()`.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: CheckersConfig,
    rules: MoveRules,
    pub(crate) board: BoardState,
    turn: Player,
    status: GameStatus,
    pending_jump: Option<Coordinate>,
    quiet_plies: u32,
    opening_pieces: usize,
}

impl GameSession {
    /// Creates a session with the opening layout for `config`.
    #[instrument(skip(config))]
    pub fn new(config: CheckersConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut session = Self::with_board(config, BoardState::new(0), Player::A);
        session.start();
        Ok(session)
    }

    /// Creates a session from an arbitrary position.
    ///
    /// The status is evaluated immediately, so a position where `turn` has
    /// no pieces or no moves starts out finished.
    ///
    /// # Errors
    ///
    /// `Config` for an invalid rule set, `SizeMismatch` when the board is
    /// not `board_size` wide, `InvariantViolation` for positions no legal
    /// game can reach (pieces on light squares, more pieces than the
    /// opening gives a side).
    #[instrument(skip(config, board), fields(board_size = board.size()))]
    pub fn from_position(
        config: CheckersConfig,
        board: BoardState,
        turn: Player,
    ) -> Result<Self, PositionError> {
        config.validate()?;
        if board.size() != *config.board_size() {
            warn!(expected = config.board_size(), "Board size does not match config");
            return Err(PositionError::SizeMismatch {
                board: board.size(),
                config: *config.board_size(),
            });
        }

        let mut session = Self::with_board(config, board, turn);
        session.opening_pieces = session
            .opening_pieces
            .max(session.board.count(Player::A))
            .max(session.board.count(Player::B));
        session.status = session.evaluate();

        CheckersInvariants::check_all(&session).map_err(|violations| {
            let descriptions = summarize(&violations);
            warn!(%descriptions, "Position rejected");
            PositionError::InvariantViolation(descriptions)
        })?;

        debug!(status = %session.status, "Session created from position");
        Ok(session)
    }

    fn with_board(config: CheckersConfig, board: BoardState, turn: Player) -> Self {
        let size = if board.size() > 0 {
            board.size()
        } else {
            *config.board_size()
        };
        let opening_pieces = usize::try_from(config.home_rows() * size / 2).unwrap_or(0);
        Self {
            rules: MoveRules::from_config(&config),
            config,
            board,
            turn,
            status: GameStatus::InProgress,
            pending_jump: None,
            quiet_plies: 0,
            opening_pieces,
        }
    }

    /// Resets to the opening layout with player A to move.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        self.board = BoardState::opening(&self.config);
        self.turn = Player::A;
        self.status = GameStatus::InProgress;
        self.pending_jump = None;
        self.quiet_plies = 0;
        info!(board_size = self.board.size(), "Game started");
    }

    /// Returns the board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the configuration the session was built with.
    pub fn config(&self) -> &CheckersConfig {
        &self.config
    }

    /// Returns the move rules in force.
    pub fn rules(&self) -> &MoveRules {
        &self.rules
    }

    /// Square of a piece that must keep jumping, mid multi-jump.
    pub fn pending_jump(&self) -> Option<Coordinate> {
        self.pending_jump
    }

    /// Plies played since the last capture.
    pub fn quiet_plies(&self) -> u32 {
        self.quiet_plies
    }

    /// Pieces each player received at the opening.
    pub fn opening_pieces(&self) -> usize {
        self.opening_pieces
    }

    /// Read-only occupancy query for renderers.
    pub fn occupant_at(&self, coord: Coordinate) -> Result<CellOccupant, BoardError> {
        self.board.occupant_at(coord)
    }

    /// Every move the side to move may submit right now.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status.is_over() {
            return Vec::new();
        }
        match self.pending_jump {
            Some(at) => rules::captures_from(&self.board, at),
            None => self.rules.legal_moves(&self.board, self.turn),
        }
    }

    /// Submits a move given as source, direction and integer distance.
    ///
    /// # Errors
    ///
    /// `GameOver` once the game has ended, `NotYourTurn` when `player` is
    /// not to move, otherwise whatever the rules reject.
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn submit_move(
        &mut self,
        player: Player,
        from: Coordinate,
        direction: Direction,
        distance: i32,
    ) -> Result<MoveOutcome, MoveError> {
        GameInProgress::check(self)?;
        PlayersTurn::check(player, self)?;
        let distance = Distance::try_from(distance)?;
        self.submit(MoveRequest::new(player, Move::new(from, direction, distance)))
    }

    /// Submits a move request.
    ///
    /// On failure the session is left exactly as it was.
    #[instrument(skip(self, request), fields(request = %request))]
    pub fn submit(&mut self, request: MoveRequest) -> Result<MoveOutcome, MoveError> {
        MoveContract::pre(self, &request)?;

        let before = self.clone();
        let applied = self
            .rules
            .apply(&mut self.board, request.player, &request.mv)?;

        if applied.captured.is_some() {
            self.quiet_plies = 0;
        } else {
            self.quiet_plies += 1;
        }

        let continues = *self.config.chain_captures()
            && applied.captured.is_some()
            && !applied.promoted
            && !rules::captures_from(&self.board, applied.moved.to).is_empty();

        if continues {
            debug!(at = %applied.moved.to, "Capture chain continues");
            self.pending_jump = Some(applied.moved.to);
        } else {
            self.pending_jump = None;
            self.turn = request.player.opponent();
            self.status = self.evaluate();
        }

        if cfg!(debug_assertions) {
            if let Err(err) = MoveContract::post(&before, self) {
                *self = before;
                return Err(err);
            }
        }

        info!(
            from = %applied.moved.from,
            to = %applied.moved.to,
            captured = ?applied.captured,
            status = %self.status,
            "Move accepted"
        );
        if self.status.is_over() {
            info!(status = %self.status, "Game over");
        }

        Ok(MoveOutcome::new(
            request.player,
            applied.moved,
            applied.captured,
            applied.promoted,
            self.turn,
            self.status,
        ))
    }

    fn evaluate(&self) -> GameStatus {
        rules::evaluate(
            &self.board,
            &self.rules,
            self.turn,
            self.quiet_plies,
            *self.config.quiet_move_limit(),
        )
    }
}

impl Default for GameSession {
    fn default() -> Self {
        let mut session = Self::with_board(CheckersConfig::default(), BoardState::new(0), Player::A);
        session.start();
        session
    }
}

/// Reasons a position cannot seed a session.
#[derive(Debug, Clone, derive_more::Display)]
pub enum PositionError {
    /// The rule set itself is invalid.
    #[display("{}", _0)]
    Config(ConfigError),
    /// Board and configuration disagree on the side length.
    #[display("Board is {board}x{board} but config expects {config}")]
    SizeMismatch {
        /// Side length of the supplied board.
        board: i32,
        /// `board_size` from the configuration.
        config: i32,
    },
    /// The position breaks a board invariant.
    #[display("Invalid position: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for PositionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PositionError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for PositionError {
    fn from(err: ConfigError) -> Self {
        PositionError::Config(err)
    }
}
