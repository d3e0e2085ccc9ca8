//! Common types for Submarines: hit-check outcomes and typed errors.

use core::fmt;

use crate::config::{MAX_PIECE_COUNT, MIN_BOARD_DIM, PLANES};
use crate::piece::PieceKind;

/// Outcome of a hit check against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Signal {
    /// A multi-cell piece was damaged but still has cells afloat.
    Hit,
    /// Empty cell, or a cell whose piece is already gone.
    Miss,
    /// A piece was fully destroyed by this hit.
    Kill,
    /// The targeted board's game is over.
    End,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Signal::Hit => "hit",
            Signal::Miss => "miss",
            Signal::Kill => "kill",
            Signal::End => "end",
        };
        write!(f, "{}", word)
    }
}

/// Errors raised while validating a game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Board shape does not have exactly three planes.
    WrongPlaneCount { planes: usize },
    /// Rows or columns too small to fit the piece catalog.
    BoardTooSmall { rows: usize, cols: usize },
    /// The configuration is missing the General.
    MissingGeneral,
    /// More or fewer than one General requested.
    BadGeneralCount { count: u32 },
    /// Per-kind piece count exceeds the allowed maximum.
    PieceCountTooLarge { kind: PieceKind, count: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::WrongPlaneCount { planes } => {
                write!(f, "board must have exactly {} planes, got {}", PLANES, planes)
            }
            ConfigError::BoardTooSmall { rows, cols } => write!(
                f,
                "board of {}x{} is too small; rows and columns must each be at least {}",
                rows, cols, MIN_BOARD_DIM
            ),
            ConfigError::MissingGeneral => {
                write!(f, "piece configuration must include the General")
            }
            ConfigError::BadGeneralCount { count } => {
                write!(f, "exactly one General is required, got {}", count)
            }
            ConfigError::PieceCountTooLarge { kind, count } => write!(
                f,
                "{} count {} exceeds the maximum of {}",
                kind, count, MAX_PIECE_COUNT
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors returned by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A piece found no free spot within its attempt budget; the whole
    /// setup is failed, nothing is rolled back.
    PlacementExhausted { kind: PieceKind, attempts: usize },
    /// Hit-check coordinate lies outside the board.
    OutOfBounds {
        coord: (usize, usize, usize),
        shape: (usize, usize, usize),
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::PlacementExhausted { kind, attempts } => write!(
                f,
                "board is too small for all pieces: no spot for a {} after {} attempts",
                kind, attempts
            ),
            BoardError::OutOfBounds { coord, shape } => write!(
                f,
                "coordinate {:?} is located outside the board; board shape is {:?}",
                coord, shape
            ),
        }
    }
}

impl std::error::Error for BoardError {}
