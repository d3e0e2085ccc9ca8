//! Two-player match container around the per-board simulation core.

use core::fmt;

use rand::Rng;

use crate::board::{Board, BoardShape};
use crate::common::{BoardError, ConfigError, Signal};
use crate::config::PieceConfig;
use crate::piece::{Coord, PieceId};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opponent of this player.
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Over { winner: Player },
}

/// A full two-board Submarines match.
pub struct SubmarinesGame {
    boards: [Board; 2],
    to_move: Player,
    status: GameStatus,
}

impl SubmarinesGame {
    /// Validate the shape and roster, then build both players' boards.
    ///
    /// Piece identifiers are unique across the two boards.
    pub fn new(
        (rows, cols, planes): (usize, usize, usize),
        config: &PieceConfig,
    ) -> Result<Self, ConfigError> {
        let shape = BoardShape::new(rows, cols, planes)?;
        config.validate()?;
        let mut next_id: PieceId = 1;
        let boards = [
            Board::new(shape, config.build_pieces(&mut next_id)),
            Board::new(shape, config.build_pieces(&mut next_id)),
        ];
        Ok(Self {
            boards,
            to_move: Player::One,
            status: GameStatus::InProgress,
        })
    }

    /// Randomly place both players' pieces. One-shot setup; a failure on
    /// either board fails the whole call.
    pub fn place_pieces<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for board in &mut self.boards {
            board.place_pieces(rng)?;
        }
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Player whose shot comes next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The named player's own board.
    pub fn board(&self, player: Player) -> &Board {
        &self.boards[player.index()]
    }

    /// Resolve the current player's shot against the opponent's board.
    ///
    /// A resolved shot consumes the turn whatever its outcome; an
    /// out-of-bounds coordinate consumes nothing. [`Signal::End`] finishes
    /// the match with the shooter as winner.
    pub fn fire(&mut self, coord: Coord) -> Result<Signal, BoardError> {
        let shooter = self.to_move;
        let defender = shooter.opponent();
        let signal = self.boards[defender.index()].check_if_hit(coord)?;
        if signal == Signal::End {
            self.status = GameStatus::Over { winner: shooter };
        }
        self.to_move = defender;
        Ok(signal)
    }
}
