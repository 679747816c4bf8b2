use std::u32;

use crate::cells::Cartesian2DCoordinate;
use crate::errors::{ErrorKind, Result};
use crate::units::{CellsCount, ColumnsCount, RowsCount};

/// Smallest row or column count that still leaves room for the start cell inside a wall ring.
pub const MIN_DIMENSION: usize = 3;

/// Validated rectangular grid dimensions.
///
/// Guarantees both counts are at least `MIN_DIMENSION`, that every in-bounds coordinate fits a
/// `u32` and that the cell count fits a `usize`.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct MazeDimensions {
    rows: RowsCount,
    columns: ColumnsCount,
}

impl MazeDimensions {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<MazeDimensions> {
        let (RowsCount(r), ColumnsCount(c)) = (rows, columns);

        if r < MIN_DIMENSION || c < MIN_DIMENSION {
            return Err(ErrorKind::InvalidDimensions(r, c).into());
        }
        if r > u32::MAX as usize || c > u32::MAX as usize || r.checked_mul(c).is_none() {
            return Err(ErrorKind::GridTooLarge(r, c).into());
        }

        Ok(MazeDimensions { rows, columns })
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline(always)]
    pub fn size(&self) -> CellsCount {
        CellsCount(self.rows.0 * self.columns.0)
    }

    /// Is the coordinate inside the grid.
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.columns.0 && (coord.y as usize) < self.rows.0
    }

    /// Is the coordinate inside the outer wall ring, i.e. between 1 and `count - 2`
    /// on both axes.
    ///
    /// Frontier discovery and visited neighbour lookup both go through this check, so a room on
    /// the last row or column of an even sized grid is never considered. That column and row
    /// stay walled on purpose: testing only the room a frontier is discovered from would let
    /// `cols - 1` in, and the far corner room could then end up with no visited neighbour.
    #[inline]
    pub fn is_interior(&self, coord: Cartesian2DCoordinate) -> bool {
        let (x, y) = (coord.x as usize, coord.y as usize);
        x >= 1 && y >= 1 && x + 2 <= self.columns.0 && y + 2 <= self.rows.0
    }

    /// Convert a grid coordinate to a row major index in the range 0..size.
    /// Returns None if the coordinate is out of bounds.
    #[inline]
    pub fn coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.columns.0 + coord.x as usize)
        } else {
            None
        }
    }

    /// Number of room positions on the lattice reachable from the start cell `(1, 1)`.
    pub fn rooms_count(&self) -> usize {
        let lattice_len = |count: usize| (count - 2 + 1) / 2; // positions 1, 3, .. <= count - 2
        lattice_len(self.columns.0) * lattice_len(self.rows.0)
    }
}
