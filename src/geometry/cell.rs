use super::{Direction, Vector};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};

/// Offset hex coordinates.
///
/// Each column is drawn half a row higher than the one before it, so in a
/// bounded [`Map`][crate::geometry::Map] column `c` begins at row `ceil(c / 2)`.
///
/// Cells are plain values; whether a cell exists is a question for the map.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display("{row},{col}")]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// Number of steps between two cells.
    ///
    /// Computed as `min(|dr|, |dc|) + |dr - dc|`. This agrees with the number
    /// of unit steps whenever the row and column offsets share a sign; when
    /// they point in opposite directions it is larger.
    ///
    /// Offsets are taken in `i64`, so any two cells have a distance.
    pub fn distance(self, other: Cell) -> u64 {
        let (dr, dc) = self.offset_to(other);
        let distance = dr.unsigned_abs().min(dc.unsigned_abs()) + (dr - dc).unsigned_abs();
        tracing::debug!(start = %self, destination = %other, dr, dc, distance, "hex distance");
        distance
    }

    /// The dominating direction from this cell toward `destination`.
    ///
    /// Uses the thread-local generator to break ties; see [`Cell::direction_to_with`].
    pub fn direction_to(self, destination: Cell) -> Vector {
        self.direction_to_with(destination, &mut rand::thread_rng())
    }

    /// The dominating direction from this cell toward `destination`, breaking ties with `rng`.
    ///
    /// The offset is divided by its largest absolute component and each
    /// component snapped to `-1`, `0` or `1`. A component of exactly `0.5`
    /// becomes `0` or `1` at random, `-0.5` becomes `0` or `-1` at random.
    ///
    /// A normalized offset of exactly `(1, -1)` or `(-1, 1)` lies between two
    /// hex directions and resolves at random to one of them: `(1, 0)` or
    /// `(0, -1)` for the first, `(-1, 0)` or `(0, 1)` for the second.
    ///
    /// Returns [`Vector::ZERO`] when `destination == self`.
    ///
    /// Note: an older variant of this routine had neither the two diagonal
    /// cases nor the `-0.5` case, and normalized by the signed maximum. Its
    /// results differ for some inputs; this one is canonical.
    pub fn direction_to_with<R>(self, destination: Cell, rng: &mut R) -> Vector
    where
        R: Rng + ?Sized,
    {
        let (row, col) = self.offset_to(destination);
        let scale = row.abs().max(col.abs());
        if scale == 0 {
            return Vector::ZERO;
        }

        if row == scale && col == -scale {
            tracing::debug!(origin = %self, %destination, "direction tie between South and SouthWest");
            return pick(rng, Direction::South, Direction::SouthWest);
        }
        if row == -scale && col == scale {
            tracing::debug!(origin = %self, %destination, "direction tie between North and NorthEast");
            return pick(rng, Direction::North, Direction::NorthEast);
        }

        Vector::new(snap(row, scale, rng), snap(col, scale, rng))
    }

    /// `(row, col)` displacement to `other`, wide enough that it cannot overflow.
    fn offset_to(self, other: Cell) -> (i64, i64) {
        (
            i64::from(other.row) - i64::from(self.row),
            i64::from(other.col) - i64::from(self.col),
        )
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, a: Direction, b: Direction) -> Vector {
    if rng.gen() {
        a.vector()
    } else {
        b.vector()
    }
}

/// Round `component / scale` to the nearest integer.
///
/// Exact halves are resolved at random toward zero or away from it.
/// `|component| <= scale` and `scale > 0`, so the result is in `-1..=1`.
fn snap<R: Rng + ?Sized>(component: i64, scale: i64, rng: &mut R) -> i32 {
    let twice = 2 * component;
    if twice == scale {
        rng.gen::<bool>() as i32
    } else if twice == -scale {
        -(rng.gen::<bool>() as i32)
    } else if twice > scale {
        1
    } else if twice < -scale {
        -1
    } else {
        0
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Cell::new(row, col)
    }
}

impl From<Cell> for (i32, i32) {
    fn from(Cell { row, col }: Cell) -> Self {
        (row, col)
    }
}

impl AddAssign<Vector> for Cell {
    fn add_assign(&mut self, rhs: Vector) {
        self.row += rhs.row;
        self.col += rhs.col;
    }
}

impl Add<Vector> for Cell {
    type Output = Cell;

    fn add(mut self, rhs: Vector) -> Cell {
        self += rhs;
        self
    }
}

impl AddAssign<Direction> for Cell {
    fn add_assign(&mut self, rhs: Direction) {
        *self += rhs.vector();
    }
}

impl Add<Direction> for Cell {
    type Output = Cell;

    fn add(mut self, rhs: Direction) -> Cell {
        self += rhs;
        self
    }
}

/// Plain `i32` arithmetic: cells more than `i32::MAX` apart on either axis
/// overflow. [`Cell::distance`] and [`Cell::direction_to`] do not go through
/// this and accept any pair of cells.
impl Sub for Cell {
    type Output = Vector;

    fn sub(self, rhs: Cell) -> Vector {
        Vector::new(self.row - rhs.row, self.col - rhs.col)
    }
}
