//! **lattice_mazes** grows perfect mazes on a rectangular grid with the randomized frontier
//! (Prim's) algorithm and hands them out as a flat array of wall flags ready for rendering.

pub mod cells;
pub mod coordinate_sets;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod maze;
pub mod pathing;
pub mod renderers;
pub mod units;
