use serde_derive::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cells::{Cartesian2DCoordinate, COMPASS_PRIMARY_DIRECTIONS};
use crate::grid::WallGrid;

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;

/// A finished maze: one wall flag per cell plus the dimensions needed to reshape them.
///
/// `data` is row major, the same order the cells were laid out in during generation, so
/// `data[y * cols + x]` is the cell at `(x, y)`. `true` marks a wall, `false` an open cell.
#[derive(Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct MazeDescriptor {
    pub data: Vec<bool>,
    pub cols: usize,
    pub rows: usize,
}

impl From<WallGrid> for MazeDescriptor {
    fn from(grid: WallGrid) -> MazeDescriptor {
        MazeDescriptor {
            data: grid.wall_flags(),
            cols: grid.columns().0,
            rows: grid.rows().0,
        }
    }
}

impl MazeDescriptor {
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Row major index of an in-bounds coordinate.
    #[inline]
    pub fn index_of(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        let (x, y) = (coord.x as usize, coord.y as usize);
        if x < self.cols && y < self.rows {
            Some(y * self.cols + x)
        } else {
            None
        }
    }

    #[inline]
    pub fn coordinate_of(&self, index: usize) -> Option<Cartesian2DCoordinate> {
        let in_grid = self.cols.checked_mul(self.rows).map_or(false, |cells| index < cells);
        if in_grid && index < self.data.len() {
            Some(Cartesian2DCoordinate::new((index % self.cols) as u32,
                                            (index / self.cols) as u32))
        } else {
            None
        }
    }

    /// Out of bounds coordinates are treated as walls, as are cells missing from a short `data`.
    #[inline]
    pub fn is_wall(&self, coord: Cartesian2DCoordinate) -> bool {
        self.index_of(coord)
            .and_then(|i| self.data.get(i).cloned())
            .unwrap_or(true)
    }

    #[inline]
    pub fn is_open(&self, coord: Cartesian2DCoordinate) -> bool {
        !self.is_wall(coord)
    }

    pub fn open_cells_count(&self) -> usize {
        self.iter_open().count()
    }

    /// Every open cell in row major order.
    pub fn iter_open<'a>(&'a self) -> impl Iterator<Item = Cartesian2DCoordinate> + 'a {
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &wall)| !wall)
            .filter_map(move |(i, _)| self.coordinate_of(i))
    }

    /// Open cells directly north, west, east or south of a cell.
    pub fn open_neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        COMPASS_PRIMARY_DIRECTIONS.iter()
            .filter_map(|&dir| coord.offset(dir, 1))
            .filter(|&adjacent| self.is_open(adjacent))
            .collect()
    }

    /// Number of pairs of orthogonally adjacent open cells, each pair counted once.
    pub fn open_adjacencies_count(&self) -> usize {
        self.iter_open()
            .map(|c| {
                let east = Cartesian2DCoordinate::new(c.x.saturating_add(1), c.y);
                let south = Cartesian2DCoordinate::new(c.x, c.y.saturating_add(1));
                (c != east && self.is_open(east)) as usize + (c != south && self.is_open(south)) as usize
            })
            .sum()
    }
}
