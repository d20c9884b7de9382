//! Coordinate types for grid cells and cardinal directions.

use serde::{Deserialize, Serialize};

/// Cell coordinate on a terrain grid.
///
/// Signed so that neighbour and ray arithmetic can step off the grid and be
/// rejected by a bounds check instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// Column, growing eastward from 0
    pub x: i32,
    /// Row, growing southward from 0
    pub y: i32,
}

impl GridCoord {
    /// Creates a new grid coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this coordinate shifted by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the coordinate `steps` cells away in direction `dir`.
    #[must_use]
    pub const fn step(self, dir: Cardinal, steps: i32) -> Self {
        let (dx, dy) = dir.delta();
        self.offset(dx * steps, dy * steps)
    }

    /// Manhattan (taxicab) distance to another coordinate.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Converts to a row-major index for a grid of the given width.
    ///
    /// Callers must bounds-check first.
    #[must_use]
    pub const fn to_index(self, width: i32) -> usize {
        (self.y as usize) * (width as usize) + (self.x as usize)
    }

    /// Creates from a row-major index.
    #[must_use]
    pub const fn from_index(index: usize, width: i32) -> Self {
        let w = width as usize;
        Self {
            x: (index % w) as i32,
            y: (index / w) as i32,
        }
    }
}

/// One of the four axis-aligned directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinal {
    /// Towards row 0
    North,
    /// Towards the last row
    South,
    /// Towards the last column
    East,
    /// Towards column 0
    West,
}

impl Cardinal {
    /// All four directions, in the order random picks index them.
    pub const ALL: [Self; 4] = [Self::East, Self::South, Self::West, Self::North];

    /// Unit step `(dx, dy)` for this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Unit step perpendicular to this direction.
    #[must_use]
    pub const fn perpendicular(self) -> (i32, i32) {
        let (dx, dy) = self.delta();
        (dy, dx)
    }
}
