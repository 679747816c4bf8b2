use serde_derive::{Deserialize, Serialize};

/// Distance between two neighbouring rooms on the maze lattice.
/// The single cell in between is the connector that gets opened to join them.
pub const LATTICE_STEP: u32 = 2;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

pub const COMPASS_PRIMARY_DIRECTIONS: [CompassPrimary; 4] = [CompassPrimary::North,
                                                             CompassPrimary::West,
                                                             CompassPrimary::East,
                                                             CompassPrimary::South];

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    /// Creates a new coordinate `distance` cells away in the given direction.
    ///
    /// Returns None when the result would be negative or not representable as a `u32`.
    /// The result is not bounds checked against any grid.
    pub fn offset(&self, dir: CompassPrimary, distance: u32) -> Option<Cartesian2DCoordinate> {
        let (x, y) = (self.x, self.y);
        match dir {
            CompassPrimary::North => y.checked_sub(distance).map(|y| Cartesian2DCoordinate { x, y }),
            CompassPrimary::South => y.checked_add(distance).map(|y| Cartesian2DCoordinate { x, y }),
            CompassPrimary::East => x.checked_add(distance).map(|x| Cartesian2DCoordinate { x, y }),
            CompassPrimary::West => x.checked_sub(distance).map(|x| Cartesian2DCoordinate { x, y }),
        }
    }

    /// The room one lattice step away, see `LATTICE_STEP`.
    #[inline]
    pub fn lattice_neighbour(&self, dir: CompassPrimary) -> Option<Cartesian2DCoordinate> {
        self.offset(dir, LATTICE_STEP)
    }

    /// The cell exactly between two rooms that are one lattice step apart.
    ///
    /// Both rooms share the same parity so the average is always a whole number.
    #[inline]
    pub fn midpoint(&self, other: Cartesian2DCoordinate) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(avg(self.x, other.x), avg(self.y, other.y))
    }
}

#[inline]
fn avg(a: u32, b: u32) -> u32 {
    // Cannot overflow, unlike (a + b) / 2
    a.min(b) + (a.max(b) - a.min(b)) / 2
}
