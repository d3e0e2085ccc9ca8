//! Board state: the three-plane occupancy grid and the live-piece registry.
//!
//! Grid cells store piece identifiers, never pieces. The registry owns the
//! pieces and resolves identifiers back to them, so destruction is a registry
//! removal and a stale identifier on the grid can never resurrect a piece.

use crate::common::{BoardError, ConfigError, Signal};
use crate::config::{MIN_BOARD_DIM, PLANES};
use crate::piece::{Coord, Piece, PieceId, PieceKind};

/// Validated board dimensions. The plane count is always [`PLANES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardShape {
    rows: usize,
    cols: usize,
}

impl BoardShape {
    /// Validate a (rows, cols, planes) triple.
    pub fn new(rows: usize, cols: usize, planes: usize) -> Result<Self, ConfigError> {
        if planes != PLANES {
            return Err(ConfigError::WrongPlaneCount { planes });
        }
        if rows < MIN_BOARD_DIM || cols < MIN_BOARD_DIM {
            return Err(ConfigError::BoardTooSmall { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn planes(&self) -> usize {
        PLANES
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, (row, col, plane): Coord) -> bool {
        row < self.rows && col < self.cols && plane < PLANES
    }

    /// The shape as the (rows, cols, planes) triple it was built from.
    pub fn as_triple(&self) -> (usize, usize, usize) {
        (self.rows, self.cols, PLANES)
    }

    fn cell_index(&self, (row, col, plane): Coord) -> usize {
        (row * self.cols + col) * PLANES + plane
    }
}

/// One player's board: occupancy grid plus the registry of live pieces.
pub struct Board {
    shape: BoardShape,
    grid: Vec<Option<PieceId>>,
    pieces: Vec<Piece>,
}

impl Board {
    /// Create a board holding `pieces`, none of them placed yet.
    pub fn new(shape: BoardShape, pieces: Vec<Piece>) -> Self {
        let cells = shape.rows() * shape.cols() * PLANES;
        Self {
            shape,
            grid: vec![None; cells],
            pieces,
        }
    }

    pub fn shape(&self) -> BoardShape {
        self.shape
    }

    /// Live pieces, in ascending-identifier order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Look up a live piece by identifier.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id() == id)
    }

    /// Identifier occupying `coord`, if any. Out-of-bounds reads are `None`.
    pub fn cell(&self, coord: Coord) -> Option<PieceId> {
        if !self.shape.contains(coord) {
            return None;
        }
        self.grid[self.shape.cell_index(coord)]
    }

    pub(crate) fn cell_mut(&mut self, coord: Coord) -> &mut Option<PieceId> {
        let idx = self.shape.cell_index(coord);
        &mut self.grid[idx]
    }

    pub(crate) fn piece_at_mut(&mut self, idx: usize) -> &mut Piece {
        &mut self.pieces[idx]
    }

    /// Resolve a shot at `coord`, mutating piece and registry state.
    ///
    /// An empty cell is a miss. An occupied cell defers to the piece's own
    /// hit behavior; a kill removes the piece from the registry, and if that
    /// leaves exactly one survivor (the General, by the setup rules) the
    /// outcome is upgraded to [`Signal::End`]. This destruction path is the
    /// game's only termination check.
    pub fn check_if_hit(&mut self, coord: Coord) -> Result<Signal, BoardError> {
        if !self.shape.contains(coord) {
            return Err(BoardError::OutOfBounds {
                coord,
                shape: self.shape.as_triple(),
            });
        }
        let Some(id) = self.grid[self.shape.cell_index(coord)] else {
            return Ok(Signal::Miss);
        };
        // A stale identifier (piece already destroyed) resolves as a miss.
        let Some(idx) = self.pieces.iter().position(|p| p.id() == id) else {
            return Ok(Signal::Miss);
        };
        let mut signal = self.pieces[idx].hit(coord);
        if signal == Signal::Kill {
            self.destroy(idx);
            if self.pieces.len() == 1 {
                signal = Signal::End;
            }
        }
        Ok(signal)
    }

    /// Remove the piece at registry index `idx` and clear its grid cells.
    fn destroy(&mut self, idx: usize) {
        let id = self.pieces[idx].id();
        self.pieces.remove(idx);
        for cell in self.grid.iter_mut() {
            if *cell == Some(id) {
                *cell = None;
            }
        }
    }

    /// Read-only occupancy view for rendering.
    pub fn snapshot(&self) -> BoardSnapshot {
        let cells = self
            .grid
            .iter()
            .map(|cell| cell.and_then(|id| self.piece(id).map(|p| (id, p.kind()))))
            .collect();
        BoardSnapshot {
            shape: self.shape,
            cells,
        }
    }
}

/// Frozen occupancy view of a board, cell by cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    shape: BoardShape,
    cells: Vec<Option<(PieceId, PieceKind)>>,
}

impl BoardSnapshot {
    pub fn shape(&self) -> BoardShape {
        self.shape
    }

    /// Occupant of `coord`, if any.
    pub fn at(&self, coord: Coord) -> Option<(PieceId, PieceKind)> {
        if !self.shape.contains(coord) {
            return None;
        }
        self.cells[self.shape.cell_index(coord)]
    }

    /// Number of occupied cells across all planes.
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        board.snapshot()
    }
}
