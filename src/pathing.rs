// Breadth first distances over the open cells of a finished maze.
//
// Every step between orthogonally adjacent open cells costs one, so a plain flood fill gives the
// shortest distance to each cell; the first time a cell is reached is final.

use fnv::FnvHashMap;
use itertools::Itertools;
use std::collections::hash_map::Entry;

use crate::cells::Cartesian2DCoordinate;
use crate::generators::START_CELL;
use crate::maze::MazeDescriptor;

#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: Cartesian2DCoordinate,
    distances: FnvHashMap<Cartesian2DCoordinate, usize>,
    max_distance: usize,
}

impl Distances {
    /// Flood fill from `start_coordinate`. None if the start is not an open cell.
    pub fn new(maze: &MazeDescriptor, start_coordinate: Cartesian2DCoordinate) -> Option<Distances> {

        if !maze.is_open(start_coordinate) {
            return None;
        }

        let mut distances = FnvHashMap::default();
        distances.insert(start_coordinate, 0);
        let mut max = 0;

        // The distances map doubles as the visited set, so the frontier can stay a plain vec.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell_coord in &frontier {
                let distance_to_cell = distances[cell_coord];

                for &neighbour in maze.open_neighbours(*cell_coord).iter() {
                    if let Entry::Vacant(slot) = distances.entry(neighbour) {
                        slot.insert(distance_to_cell + 1);
                        max = distance_to_cell + 1;
                        new_frontier.push(neighbour);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline]
    pub fn start(&self) -> Cartesian2DCoordinate {
        self.start_coordinate
    }

    /// None for cells the start cannot reach.
    #[inline]
    pub fn distance_from_start_to(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        self.distances.get(&coord).cloned()
    }

    #[inline]
    pub fn max(&self) -> usize {
        self.max_distance
    }

    /// Number of cells reachable from the start, the start included.
    #[inline]
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// All cells at the maximum distance, sorted so the result does not depend on hashing.
    pub fn furthest_points(&self) -> Vec<Cartesian2DCoordinate> {
        self.distances
            .iter()
            .filter(|&(_, &d)| d == self.max_distance)
            .map(|(&coord, _)| coord)
            .sorted()
            .collect()
    }
}

/// Walk back downhill from `end_point` to the start of `distances`.
/// Returns the path from start to end inclusive, None if the end is unreachable.
pub fn shortest_path(maze: &MazeDescriptor,
                     distances: &Distances,
                     end_point: Cartesian2DCoordinate)
                     -> Option<Vec<Cartesian2DCoordinate>> {

    let mut current = end_point;
    let mut current_distance = distances.distance_from_start_to(end_point)?;
    let mut path = Vec::with_capacity(current_distance + 1);
    path.push(current);

    while current_distance > 0 {
        let closer = maze.open_neighbours(current)
            .iter()
            .cloned()
            .find(|&n| distances.distance_from_start_to(n) == Some(current_distance - 1))?;
        path.push(closer);
        current = closer;
        current_distance -= 1;
    }

    path.reverse();
    Some(path)
}

/// The longest path through the maze, found by two furthest point searches.
///
/// Exact only for a perfect maze, which is what `frontier_growth` makes; on a maze with loops it
/// is merely a long path. None if the start cell is not open.
pub fn longest_path(maze: &MazeDescriptor) -> Option<Vec<Cartesian2DCoordinate>> {
    let first_distances = Distances::new(maze, START_CELL)?;

    // The start of the longest path is the point furthest away from an arbitrary point
    let long_path_start = first_distances.furthest_points()[0];

    let distances_from_start = Distances::new(maze, long_path_start)?;
    let end_point = distances_from_start.furthest_points()[0];

    shortest_path(maze, &distances_from_start, end_point)
}

/// Every open cell reachable from the start cell.
pub fn is_connected(maze: &MazeDescriptor) -> bool {
    Distances::new(maze, START_CELL)
        .map_or(false, |d| d.reachable_count() == maze.open_cells_count())
}

/// Open cells form a tree: connected, and exactly one adjacency fewer than open cells.
pub fn is_perfect(maze: &MazeDescriptor) -> bool {
    is_connected(maze) && maze.open_adjacencies_count() + 1 == maze.open_cells_count()
}
