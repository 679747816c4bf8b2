use bit_set::BitSet;
use std::fmt;

use crate::cells::Cartesian2DCoordinate;
use crate::grid_dimensions::MazeDimensions;
use crate::units::{ColumnsCount, RowsCount};

/// The mutable traversability grid a maze is carved out of.
///
/// Every cell starts as a wall. A bit in the set means the cell at that row major index is open.
pub struct WallGrid {
    open: BitSet,
    dimensions: MazeDimensions,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct OutOfGrid(pub Cartesian2DCoordinate);

impl fmt::Debug for WallGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "WallGrid :: open cells: {:?}, rows: {:?}, columns: {:?}",
               self.open_count(), self.rows(), self.columns())
    }
}

impl WallGrid {
    pub fn new(dimensions: MazeDimensions) -> WallGrid {
        WallGrid {
            open: BitSet::with_capacity(dimensions.size().0),
            dimensions,
        }
    }

    #[inline]
    pub fn dimensions(&self) -> &MazeDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.dimensions.rows()
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.dimensions.columns()
    }

    /// Make a cell passable. Opening an already open cell is a no-op.
    pub fn open(&mut self, coord: Cartesian2DCoordinate) -> Result<(), OutOfGrid> {
        let index = self.dimensions.coordinate_to_index(coord).ok_or(OutOfGrid(coord))?;
        self.open.insert(index);
        Ok(())
    }

    /// A coordinate outside the grid is never a wall, there is nothing there.
    #[inline]
    pub fn is_wall(&self, coord: Cartesian2DCoordinate) -> bool {
        self.dimensions
            .coordinate_to_index(coord)
            .map_or(false, |index| !self.open.contains(index))
    }

    #[inline]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Wall flags for every cell in row major order, `true` for a wall.
    pub fn wall_flags(&self) -> Vec<bool> {
        (0..self.dimensions.size().0).map(|index| !self.open.contains(index)).collect()
    }
}
