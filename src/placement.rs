//! Randomized piece placement with a bounded retry budget.

use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::MAX_PLACEMENT_ATTEMPTS;
use crate::piece::{Coord, Footprint};

impl Board {
    /// Place every registered piece at a random spot on its plane.
    ///
    /// Pieces are processed in registry (ascending identifier) order, so
    /// earlier placements constrain later attempts. Each piece gets
    /// [`MAX_PLACEMENT_ATTEMPTS`] uniformly random origins over the full
    /// row/column range; an attempt succeeds only when the footprint's
    /// bounding rectangle is fully in bounds and every cell of it is empty.
    /// Exhausting the budget fails the whole setup; nothing is rolled back.
    pub fn place_pieces<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for idx in 0..self.pieces().len() {
            let origin = self.random_origin(rng, idx)?;
            self.stamp(idx, origin);
        }
        Ok(())
    }

    fn random_origin<R: Rng>(
        &self,
        rng: &mut R,
        idx: usize,
    ) -> Result<(usize, usize), BoardError> {
        let kind = self.pieces()[idx].kind();
        let footprint = kind.footprint();
        let plane = kind.plane().index();
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let row = rng.random_range(0..self.shape().rows());
            let col = rng.random_range(0..self.shape().cols());
            if self.rectangle_free(footprint, plane, row, col) {
                return Ok((row, col));
            }
        }
        Err(BoardError::PlacementExhausted {
            kind,
            attempts: MAX_PLACEMENT_ATTEMPTS,
        })
    }

    /// The footprint's full bounding rectangle must be in bounds and empty,
    /// whether or not every rectangle cell carries a mask bit.
    fn rectangle_free(&self, footprint: Footprint, plane: usize, row: usize, col: usize) -> bool {
        if row + footprint.height() > self.shape().rows()
            || col + footprint.width() > self.shape().cols()
        {
            return false;
        }
        for dr in 0..footprint.height() {
            for dc in 0..footprint.width() {
                if self.cell((row + dr, col + dc, plane)).is_some() {
                    return false;
                }
            }
        }
        true
    }

    /// Write the piece's mask cells onto the grid and record them on it.
    fn stamp(&mut self, idx: usize, (row, col): (usize, usize)) {
        let piece = &self.pieces()[idx];
        let (id, kind) = (piece.id(), piece.kind());
        let plane = kind.plane().index();
        let cells: Vec<Coord> = kind
            .footprint()
            .cells()
            .map(|(dr, dc)| (row + dr, col + dc, plane))
            .collect();
        for &coord in &cells {
            *self.cell_mut(coord) = Some(id);
        }
        self.piece_at_mut(idx).set_cells(cells);
    }
}
