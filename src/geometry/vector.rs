use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg};

/// A displacement between two [`Cell`][crate::geometry::Cell]s, in rows and columns.
///
/// Unit vectors with both components in `{-1, 0, 1}` are what
/// [`Cell::direction_to`][crate::geometry::Cell::direction_to] produces.
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
)]
#[display("({row}, {col})")]
pub struct Vector {
    pub row: i32,
    pub col: i32,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0, 0);

    #[inline]
    pub const fn new(row: i32, col: i32) -> Vector {
        Vector { row, col }
    }
}

impl From<(i32, i32)> for Vector {
    fn from((row, col): (i32, i32)) -> Self {
        Vector::new(row, col)
    }
}

impl From<Vector> for (i32, i32) {
    fn from(Vector { row, col }: Vector) -> Self {
        (row, col)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Mul<i32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i32) -> Vector {
        Vector::new(self.row * rhs, self.col * rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.row, -self.col)
    }
}
