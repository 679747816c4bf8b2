//! Sets of grid coordinates used while growing a maze.
//!
//! Both sets hash with FNV: much faster than the default SipHash on small integer keys, and
//! deterministic, so iteration order never depends on a per-process random hash seed.

use fnv::{FnvBuildHasher, FnvHashMap, FnvHashSet};
use rand::Rng;

use crate::cells::Cartesian2DCoordinate;

/// Cells already incorporated into the maze's spanning tree. Only ever grows.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    cells: FnvHashSet<Cartesian2DCoordinate>,
}

impl VisitedSet {
    pub fn with_capacity(capacity: usize) -> VisitedSet {
        VisitedSet { cells: FnvHashSet::with_capacity_and_hasher(capacity, FnvBuildHasher::default()) }
    }

    /// Returns true if the cell was not already visited.
    #[inline]
    pub fn insert(&mut self, coord: Cartesian2DCoordinate) -> bool {
        self.cells.insert(coord)
    }

    #[inline]
    pub fn contains(&self, coord: Cartesian2DCoordinate) -> bool {
        self.cells.contains(&coord)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Wall cells bordering the visited tree that are waiting to be connected to it.
///
/// Coordinates are stored densely in a vector so a uniformly random member can be picked by
/// index; the map from coordinate to slot keeps `insert` idempotent and makes `contains` and
/// `remove` constant time. Removal swaps the last member into the freed slot.
#[derive(Debug, Clone)]
pub struct FrontierSet {
    members: Vec<Cartesian2DCoordinate>,
    slots: FnvHashMap<Cartesian2DCoordinate, usize>,
}

impl FrontierSet {
    pub fn with_capacity(capacity: usize) -> FrontierSet {
        FrontierSet {
            members: Vec::with_capacity(capacity),
            slots: FnvHashMap::with_capacity_and_hasher(capacity, FnvBuildHasher::default()),
        }
    }

    /// Add a frontier cell. Rediscovering a cell already in the set changes nothing.
    /// Returns true if the cell was newly added.
    pub fn insert(&mut self, coord: Cartesian2DCoordinate) -> bool {
        if self.slots.contains_key(&coord) {
            return false;
        }
        self.slots.insert(coord, self.members.len());
        self.members.push(coord);
        true
    }

    /// Returns true if the cell was a member.
    pub fn remove(&mut self, coord: Cartesian2DCoordinate) -> bool {
        match self.slots.remove(&coord) {
            Some(slot) => {
                let _ = self.members.swap_remove(slot);
                if let Some(moved) = self.members.get(slot) {
                    self.slots.insert(*moved, slot);
                }
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn contains(&self, coord: Cartesian2DCoordinate) -> bool {
        self.slots.contains_key(&coord)
    }

    /// Pick a member uniformly at random, None if the set is empty.
    /// The set is not modified.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Cartesian2DCoordinate> {
        if self.members.is_empty() {
            None
        } else {
            Some(self.members[rng.gen_range(0..self.members.len())])
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cartesian2DCoordinate> {
        self.members.iter()
    }
}
