#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);

/// Total number of cells in a grid, walls and open cells alike.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct CellsCount(pub usize);
