//! Game configuration: board-shape limits and the per-board piece roster.

use std::collections::BTreeMap;

use crate::common::ConfigError;
use crate::piece::{Piece, PieceId, PieceKind};

/// Number of planes every board has.
pub const PLANES: usize = 3;
/// Minimum rows and columns, sized so the largest footprint can fit at all.
pub const MIN_BOARD_DIM: usize = 4;
/// Per-kind cap on the number of pieces.
pub const MAX_PIECE_COUNT: u32 = 50;
/// Attempt budget when searching for a free spot for one piece.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 50;

/// How many pieces of each kind a board starts with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceConfig {
    counts: BTreeMap<PieceKind, u32>,
}

impl PieceConfig {
    /// Empty configuration; invalid until a General is added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count for `kind`, replacing any previous value.
    pub fn with(mut self, kind: PieceKind, count: u32) -> Self {
        self.counts.insert(kind, count);
        self
    }

    /// Standard roster: one piece of every kind.
    pub fn standard() -> Self {
        Self::new()
            .with(PieceKind::General, 1)
            .with(PieceKind::Jet, 1)
            .with(PieceKind::Destroyer, 1)
            .with(PieceKind::Submarine, 1)
    }

    /// Requested count for `kind`; unlisted kinds count zero.
    pub fn count(&self, kind: PieceKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Total pieces a single board starts with.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Check the roster rules: every count within the cap, and exactly one
    /// General present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (&kind, &count) in &self.counts {
            if count > MAX_PIECE_COUNT {
                return Err(ConfigError::PieceCountTooLarge { kind, count });
            }
        }
        match self.counts.get(&PieceKind::General) {
            None => Err(ConfigError::MissingGeneral),
            Some(&1) => Ok(()),
            Some(&count) => Err(ConfigError::BadGeneralCount { count }),
        }
    }

    /// Build one board's pieces, drawing identifiers from `next_id`.
    ///
    /// Kinds are emitted in catalog order; the identifier counter keeps
    /// running across calls so two boards never share an identifier.
    pub(crate) fn build_pieces(&self, next_id: &mut PieceId) -> Vec<Piece> {
        let mut pieces = Vec::with_capacity(self.total() as usize);
        for (&kind, &count) in &self.counts {
            for _ in 0..count {
                pieces.push(Piece::new(kind, *next_id));
                *next_id += 1;
            }
        }
        pieces
    }
}
