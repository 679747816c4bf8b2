use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_derive::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cells::{Cartesian2DCoordinate, COMPASS_PRIMARY_DIRECTIONS};
use crate::coordinate_sets::{FrontierSet, VisitedSet};
use crate::errors::Result;
use crate::grid::WallGrid;
use crate::grid_dimensions::MazeDimensions;
use crate::maze::MazeDescriptor;
use crate::units::{ColumnsCount, RowsCount};

/// Every maze grows from this cell.
pub const START_CELL: Cartesian2DCoordinate = Cartesian2DCoordinate { x: 1, y: 1 };

/// Counters describing one run of `frontier_growth`.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Times a frontier cell was connected to the tree.
    pub iterations: usize,
    /// Rooms in the finished spanning tree, start cell included.
    pub visited: usize,
    /// Cells opened between two rooms.
    pub connectors_opened: usize,
    /// Largest the frontier set got.
    pub frontier_high_water: usize,
}

/// Validate the dimensions then grow a maze with `frontier_growth`.
pub fn generate<R: Rng>(rows: RowsCount, columns: ColumnsCount, rng: &mut R) -> Result<MazeDescriptor> {
    let dimensions = MazeDimensions::new(rows, columns)?;
    Ok(frontier_growth(dimensions, rng))
}

/// As `generate`, seeding a ChaCha8 generator so the same seed always gives the same maze.
pub fn generate_seeded(rows: RowsCount, columns: ColumnsCount, seed: u64) -> Result<MazeDescriptor> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate(rows, columns, &mut rng)
}

/// Apply the randomized frontier growth (Prim's) algorithm to a fully walled grid.
///
/// Rooms sit two cells apart on the lattice starting at `START_CELL`. The tree starts as the
/// start room alone; its frontier is every walled room one lattice step away. Each iteration
/// picks a random frontier room, joins it to a random room of the tree next to it by opening
/// the cell in between, then adds the new room's own walled neighbours to the frontier.
/// When the frontier runs dry every reachable room is in the tree exactly once, so the result
/// is a perfect maze.
pub fn frontier_growth<R: Rng>(dimensions: MazeDimensions, rng: &mut R) -> MazeDescriptor {
    frontier_growth_with_stats(dimensions, rng).0
}

/// As `frontier_growth`, also returning the run's counters.
///
/// Every iteration joins one room and opens one connector, so on return
/// `iterations == visited - 1 == connectors_opened`.
pub fn frontier_growth_with_stats<R: Rng>(dimensions: MazeDimensions,
                                          rng: &mut R)
                                          -> (MazeDescriptor, GenerationStats) {
    let mut growth = FrontierGrowth::new(dimensions);
    growth.seed(START_CELL);

    while let Some(frontier_cell) = growth.frontier.random(rng) {
        growth.connect_to_tree(frontier_cell, rng);
    }

    debug!("Grew a {} x {} maze: {} rooms, {} iterations, frontier high water {}",
           dimensions.columns().0,
           dimensions.rows().0,
           growth.stats.visited,
           growth.stats.iterations,
           growth.stats.frontier_high_water);

    let FrontierGrowth { grid, stats, .. } = growth;
    (MazeDescriptor::from(grid), stats)
}

// State owned by one generation run.
struct FrontierGrowth {
    grid: WallGrid,
    visited: VisitedSet,
    frontier: FrontierSet,
    stats: GenerationStats,
}

impl FrontierGrowth {
    fn new(dimensions: MazeDimensions) -> FrontierGrowth {
        let rooms = dimensions.rooms_count();
        FrontierGrowth {
            grid: WallGrid::new(dimensions),
            visited: VisitedSet::with_capacity(rooms),
            frontier: FrontierSet::with_capacity(rooms),
            stats: GenerationStats::default(),
        }
    }

    fn seed(&mut self, start: Cartesian2DCoordinate) {
        self.visit(start);
        self.add_frontiers_of(start);
    }

    fn connect_to_tree<R: Rng>(&mut self, frontier_cell: Cartesian2DCoordinate, rng: &mut R) {
        let neighbours = self.visited_neighbours(frontier_cell);
        let tree_cell = *neighbours.choose(rng)
            .expect("A frontier cell always borders at least one visited cell");

        self.open(tree_cell.midpoint(frontier_cell));
        self.stats.connectors_opened += 1;

        let _ = self.frontier.remove(frontier_cell);
        self.visit(frontier_cell);
        self.add_frontiers_of(frontier_cell);
        self.stats.iterations += 1;

        trace!("Joined {:?} to {:?}, frontier size {}", frontier_cell, tree_cell, self.frontier.len());
    }

    fn visit(&mut self, coord: Cartesian2DCoordinate) {
        let _ = self.visited.insert(coord);
        self.open(coord);
        self.stats.visited = self.visited.len();
    }

    fn open(&mut self, coord: Cartesian2DCoordinate) {
        self.grid.open(coord).expect("Maze growth only opens cells inside the outer wall ring");
    }

    /// Walled rooms one lattice step away from `coord`.
    fn add_frontiers_of(&mut self, coord: Cartesian2DCoordinate) {
        for room in self.lattice_neighbours(coord) {
            if self.grid.is_wall(room) {
                let _ = self.frontier.insert(room);
            }
        }
        if self.frontier.len() > self.stats.frontier_high_water {
            self.stats.frontier_high_water = self.frontier.len();
        }
    }

    /// Rooms one lattice step away from `coord` that are already in the tree.
    fn visited_neighbours(&self, coord: Cartesian2DCoordinate) -> SmallVec<[Cartesian2DCoordinate; 4]> {
        self.lattice_neighbours(coord)
            .into_iter()
            .filter(|&room| self.visited.contains(room))
            .collect()
    }

    fn lattice_neighbours(&self, coord: Cartesian2DCoordinate) -> SmallVec<[Cartesian2DCoordinate; 4]> {
        let dimensions = self.grid.dimensions();
        COMPASS_PRIMARY_DIRECTIONS.iter()
            .filter_map(|&dir| coord.lattice_neighbour(dir))
            .filter(|&room| dimensions.is_interior(room))
            .collect()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::errors::ErrorKind;
    use crate::pathing;
    use quickcheck::{quickcheck, TestResult};

    fn dims(rows: usize, cols: usize) -> MazeDimensions {
        MazeDimensions::new(RowsCount(rows), ColumnsCount(cols)).expect("valid dimensions")
    }

    fn seeded_with_stats(rows: usize, cols: usize, seed: u64) -> (MazeDescriptor, GenerationStats) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        frontier_growth_with_stats(dims(rows, cols), &mut rng)
    }

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    #[test]
    fn smallest_maze_is_the_start_cell() {
        let (maze, stats) = seeded_with_stats(3, 3, 1);
        assert_eq!(maze.data.len(), 9);
        assert_eq!((maze.cols, maze.rows), (3, 3));
        assert_eq!(maze.open_cells_count(), 1);
        assert!(maze.is_open(START_CELL));
        assert_eq!(stats, GenerationStats {
            iterations: 0,
            visited: 1,
            connectors_opened: 0,
            frontier_high_water: 0,
        });
    }

    #[test]
    fn seeding_the_smallest_maze_leaves_no_frontier() {
        let mut growth = FrontierGrowth::new(dims(3, 3));
        growth.seed(START_CELL);
        assert!(growth.frontier.is_empty());
        assert_eq!(growth.visited.len(), 1);
    }

    #[test]
    fn five_by_five() {
        for seed in 0..20 {
            let (maze, stats) = seeded_with_stats(5, 5, seed);
            assert_eq!(maze.data.len(), 25);
            assert!(maze.is_open(gc(1, 1)));
            assert!(maze.is_wall(gc(0, 0)));

            // all four rooms, joined by three connectors
            for &room in &[gc(1, 1), gc(3, 1), gc(1, 3), gc(3, 3)] {
                assert!(maze.is_open(room));
            }
            assert!(maze.is_wall(gc(2, 2)));
            assert_eq!(stats.iterations, 3);
            assert_eq!(stats.connectors_opened, 3);
            assert_eq!(maze.open_cells_count(), 4 + stats.connectors_opened);

            // removing any one connector disconnects the tree
            let connectors = [gc(2, 1), gc(1, 2), gc(3, 2), gc(2, 3)];
            let opened: Vec<_> = connectors.iter().cloned().filter(|&c| maze.is_open(c)).collect();
            assert_eq!(opened.len(), 3);
            for connector in opened {
                let mut cut = maze.clone();
                let i = cut.index_of(connector).unwrap();
                cut.data[i] = true;
                assert!(!pathing::is_connected(&cut), "seed {} connector {:?}", seed, connector);
            }
        }
    }

    #[test]
    fn starting_frontier() {
        let mut growth = FrontierGrowth::new(dims(7, 7));
        growth.seed(START_CELL);
        let mut frontier: Vec<_> = growth.frontier.iter().cloned().collect();
        frontier.sort();
        assert_eq!(frontier, vec![gc(1, 3), gc(3, 1)]);
    }

    #[test]
    fn frontier_rediscovery_is_deduplicated() {
        let mut growth = FrontierGrowth::new(dims(5, 5));
        growth.seed(START_CELL);
        growth.visit(gc(3, 1));
        growth.add_frontiers_of(gc(3, 1));
        let _ = growth.frontier.remove(gc(3, 1));
        growth.add_frontiers_of(gc(1, 1));
        // (3, 3) is found from (3, 1); (1, 3) from (1, 1) twice
        assert_eq!(growth.frontier.len(), 2);
        assert!(growth.frontier.contains(gc(1, 3)));
        assert!(growth.frontier.contains(gc(3, 3)));
    }

    #[test]
    fn visited_neighbours_ignore_unvisited_and_out_of_bounds() {
        let mut growth = FrontierGrowth::new(dims(5, 5));
        growth.seed(START_CELL);
        assert_eq!(&*growth.visited_neighbours(gc(3, 1)), &[gc(1, 1)]);
        assert!(growth.visited_neighbours(gc(3, 3)).is_empty());
        growth.visit(gc(1, 3));
        let mut neighbours = growth.visited_neighbours(gc(3, 3)).into_vec();
        neighbours.sort();
        assert_eq!(neighbours, vec![gc(1, 3)]);
    }

    #[test]
    fn even_dimensions_keep_the_far_edges_walled() {
        let (maze, stats) = seeded_with_stats(8, 10, 3);
        for x in 0..10 {
            assert!(maze.is_wall(gc(x, 7)));
            assert!(maze.is_wall(gc(x, 0)));
        }
        for y in 0..8 {
            assert!(maze.is_wall(gc(9, y)));
            assert!(maze.is_wall(gc(0, y)));
        }
        assert_eq!(stats.visited, dims(8, 10).rooms_count());
        assert!(pathing::is_perfect(&maze));
    }

    #[test]
    fn same_seed_same_maze() {
        let a = generate_seeded(RowsCount(31), ColumnsCount(45), 99).unwrap();
        let b = generate_seeded(RowsCount(31), ColumnsCount(45), 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_seeded(RowsCount(31), ColumnsCount(31), 1).unwrap();
        let b = generate_seeded(RowsCount(31), ColumnsCount(31), 2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn degenerate_dimensions_are_rejected() {
        let result = generate_seeded(RowsCount(2), ColumnsCount(9), 0);
        match result {
            Err(e) => match *e.kind() {
                ErrorKind::InvalidDimensions(2, 9) => {}
                ref other => panic!("unexpected error kind {:?}", other),
            },
            Ok(_) => panic!("2 rows should be rejected"),
        }
    }

    #[test]
    fn quickcheck_spanning_tree() {
        fn p(rows: u8, cols: u8, seed: u64) -> TestResult {
            let (rows, cols) = (rows as usize % 40, cols as usize % 40);
            if rows < 3 || cols < 3 {
                return TestResult::discard();
            }
            let (maze, stats) = seeded_with_stats(rows, cols, seed);
            let rooms = dims(rows, cols).rooms_count();

            TestResult::from_bool(maze.data.len() == rows * cols &&
                                  stats.visited == rooms &&
                                  stats.iterations == rooms - 1 &&
                                  stats.connectors_opened == rooms - 1 &&
                                  maze.open_cells_count() == 2 * rooms - 1 &&
                                  pathing::is_perfect(&maze))
        }
        quickcheck(p as fn(u8, u8, u64) -> TestResult)
    }

    #[test]
    fn quickcheck_open_cells_stay_inside_the_wall_ring() {
        fn p(rows: u8, cols: u8, seed: u64) -> TestResult {
            let (rows, cols) = (rows as usize % 30, cols as usize % 30);
            if rows < 3 || cols < 3 {
                return TestResult::discard();
            }
            let (maze, _) = seeded_with_stats(rows, cols, seed);
            let d = dims(rows, cols);
            let inside = maze.iter_open().all(|c| d.is_interior(c) && (c.x % 2 == 1 || c.y % 2 == 1));
            TestResult::from_bool(inside)
        }
        quickcheck(p as fn(u8, u8, u64) -> TestResult)
    }
}
