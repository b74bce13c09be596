use super::Vector;
use serde::{Deserialize, Serialize};

/// One of the six unit steps from a hex cell to its neighbor.
///
/// Columns alternate by half a row, so a step to an adjacent column moves
/// diagonally on screen. Names describe where the neighbor is drawn relative
/// to the cell.
///
/// The discriminants are the cyclic indices used by the region algorithms:
/// `d` and `d + 3 (mod 6)` are opposites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// `(0, 1)`
    NorthEast = 0,
    /// `(1, 1)`
    SouthEast = 1,
    /// `(1, 0)`
    South = 2,
    /// `(0, -1)`
    SouthWest = 3,
    /// `(-1, -1)`
    NorthWest = 4,
    /// `(-1, 0)`
    North = 5,
}

impl Direction {
    const ALL: [Direction; 6] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::NorthWest,
        Direction::North,
    ];

    /// Iterate through all `Direction`s in index order, clockwise from `NorthEast`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        Self::ALL.into_iter()
    }

    /// The direction at `index`, taken modulo 6.
    ///
    /// Any integer is accepted; negative indices wrap around as well.
    pub fn from_index(index: i32) -> Direction {
        Self::ALL[index.rem_euclid(6) as usize]
    }

    /// Position of this direction in the cyclic order.
    #[inline]
    pub fn index(self) -> i32 {
        self as i32
    }

    /// The opposite direction.
    pub fn reverse(self) -> Direction {
        Self::from_index(self.index() + 3)
    }

    /// Rotate clockwise by `steps` sixths of a turn.
    pub fn turn(self, steps: i32) -> Direction {
        Self::from_index(self.index() + steps)
    }

    /// The unit offset `(row, col)` this direction adds to a cell.
    pub fn vector(self) -> Vector {
        match self {
            Direction::NorthEast => Vector::new(0, 1),
            Direction::SouthEast => Vector::new(1, 1),
            Direction::South => Vector::new(1, 0),
            Direction::SouthWest => Vector::new(0, -1),
            Direction::NorthWest => Vector::new(-1, -1),
            Direction::North => Vector::new(-1, 0),
        }
    }
}

impl From<Direction> for Vector {
    fn from(direction: Direction) -> Vector {
        direction.vector()
    }
}

impl TryFrom<Vector> for Direction {
    type Error = TryFromVectorError;

    fn try_from(vector: Vector) -> Result<Self, Self::Error> {
        Direction::iter()
            .find(|direction| direction.vector() == vector)
            .ok_or(TryFromVectorError(vector))
    }
}

/// The vector is not one of the six hex unit steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0} is not a hex direction")]
pub struct TryFromVectorError(pub Vector);
