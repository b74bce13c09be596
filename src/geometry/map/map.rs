use crate::geometry::{Cell, Direction};
use num::Integer;
use std::{fmt, ops::Range};

/// A Map bounds a hex grid of `rows` by `cols` cells.
///
/// Columns run from `0` to `cols - 1`. Because alternate columns are shifted
/// by half a row, column `c` holds rows `ceil(c / 2)` through
/// `ceil(c / 2) + rows - 1`; the map is a parallelogram in `(row, col)` space
/// which renders as a rectangle.
///
/// A map is fixed at construction. It owns no cell contents: pair it with a
/// [`Grid`][crate::Grid] to place things on it.
///
/// Every region query filters its output through [`Map::valid_cell`]; cells
/// which fall off the map are dropped silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Map {
    rows: i32,
    cols: i32,
}

impl Map {
    /// Create a new `Map` with the given dimensions.
    ///
    /// Both dimensions must be positive.
    pub fn new(rows: i32, cols: i32) -> Result<Map, MapError> {
        if rows <= 0 || cols <= 0 {
            return Err(MapError::InvalidDimensions { rows, cols });
        }
        Ok(Map { rows, cols })
    }

    /// Number of rows in each column.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// `(rows, cols)`
    #[inline]
    pub fn size(&self) -> (i32, i32) {
        (self.rows, self.cols)
    }

    /// `true` when a cell lies within the bounds of this map.
    #[inline]
    pub fn valid_cell(&self, cell: Cell) -> bool {
        is_valid(self.rows, self.cols, cell)
    }

    /// Make a function which returns `true` when the parameter is within the bounds of this map,
    /// without depending on the lifetime of `self`.
    pub fn make_valid_cell(&self) -> impl Fn(Cell) -> bool {
        let rows = self.rows;
        let cols = self.cols;
        move |cell| is_valid(rows, cols, cell)
    }

    /// The rows and columns which can hold a valid cell, as half-open ranges.
    ///
    /// The last column starts `floor(cols / 2)` rows down, so rows span
    /// `0..rows + cols / 2`. Not every cell in the box is valid.
    pub(crate) fn bounds(&self) -> (Range<i64>, Range<i64>) {
        let rows = i64::from(self.rows) + i64::from(self.cols / 2);
        (0..rows, 0..i64::from(self.cols))
    }

    /// Iterate over every cell of this map exactly once.
    ///
    /// Cells are produced in row-major order: by row, then by column.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let valid_cell = self.make_valid_cell();
        (0..self.rows + self.cols / 2)
            .flat_map(|row| (0..=2 * row).map(move |col| Cell::new(row, col)))
            .filter(move |&cell| valid_cell(cell))
    }

    /// Return an iterator of all legal cells adjacent to the given cell.
    ///
    /// This iterator will return up to 6 elements, in [`Direction`] order.
    /// Callers should not rely on that order.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> {
        let valid_cell = self.make_valid_cell();
        Direction::iter()
            .map(move |direction| cell + direction)
            .filter(move |&neighbor| valid_cell(neighbor))
    }
}

fn is_valid(rows: i32, cols: i32, Cell { row, col }: Cell) -> bool {
    if col < 0 || col >= cols {
        return false;
    }
    let low = i64::from(Integer::div_ceil(&col, &2));
    let row = i64::from(row);
    row >= low && row < low + i64::from(rows)
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Map ({}, {})", self.rows, self.cols)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("map dimensions must be positive; got {rows} rows by {cols} cols")]
    InvalidDimensions { rows: i32, cols: i32 },
}
