//! Area queries over a [`Map`]: filled disks, rays and wedges.
//!
//! Direction arguments are cyclic indices into [`Direction`] and are taken
//! modulo 6. Every result is filtered through [`Map::valid_cell`].
//!
//! Rays and wedges are computed in `i64` and clipped to the rows and columns
//! the map can occupy before any cell is produced, so arbitrarily long lengths
//! and far-off origins cost no more than the part which lands on the map.

use super::Map;
use crate::geometry::{Cell, Direction, Vector};
use std::{
    collections::{BinaryHeap, HashSet},
    ops::{Range, RangeInclusive},
};

impl Map {
    /// All cells within `radius` steps of `center`, including `center`.
    ///
    /// Defined recursively: radius 1 is the center and its neighbors, and each
    /// larger radius is the center plus the union of the radius-1-smaller
    /// spreads around each neighbor. A radius of 0 yields just the center.
    ///
    /// The recursion is unrolled into a work queue ordered by remaining
    /// radius, largest first. The first time a cell comes off the queue it has
    /// the most radius it will ever be offered, and since a smaller spread is
    /// contained in a larger one around the same cell, later visits add
    /// nothing. Each cell is expanded at most once.
    pub fn spread(&self, center: Cell, radius: u32) -> HashSet<Cell> {
        let mut result = HashSet::new();
        let mut expanded = HashSet::new();
        let mut queue = BinaryHeap::new();
        queue.push((radius, center));

        while let Some((remaining, cell)) = queue.pop() {
            if !expanded.insert(cell) {
                continue;
            }
            result.insert(cell);
            match remaining {
                0 => {}
                1 => result.extend(self.neighbors(cell)),
                _ => queue.extend(
                    self.neighbors(cell)
                        .filter(|neighbor| !expanded.contains(neighbor))
                        .map(|neighbor| (remaining - 1, neighbor)),
                ),
            }
        }

        tracing::trace!(%center, radius, expanded = expanded.len(), cells = result.len(), "spread");
        result.retain(|&cell| self.valid_cell(cell));
        result
    }

    /// The cells along a straight ray from `origin`, nearest first.
    ///
    /// Produces `origin` followed by `length` steps in direction `direction % 6`,
    /// omitting any that fall off the map.
    pub fn line(&self, origin: Cell, direction: i32, length: u32) -> Vec<Cell> {
        let offset = Direction::from_index(direction).vector();
        let (rows, cols) = self.bounds();
        let from = widen(origin);

        span(from, offset, i64::from(length), &rows, &cols)
            .filter_map(|i| cell_at(from, offset, i))
            .filter(|&cell| self.valid_cell(cell))
            .collect()
    }

    /// A triangular wedge of cells fanning out from `origin`.
    ///
    /// The wedge is bounded by two rays 120° apart: `direction` and
    /// `direction + 2`. Row `i` of the wedge (for `i` in `1..=length`) starts
    /// `i` steps along the first ray and contains `i + 1` cells stepping
    /// parallel to the second.
    ///
    /// ```notrust
    ///        _____
    ///  _____/-1,0 \_____
    /// /-1,-1\_____/ 0,1 \
    /// \_____/ 0,0 \_____/
    /// /0,-1 \_____/ 1,1 \
    /// \_____/ 1,0 \_____/
    ///       \_____/
    /// ```
    ///
    /// Starting at `0,0` with direction 0, the first row is `0,1` and `1,1`.
    ///
    /// `origin` comes first; the rest follow in emission order.
    pub fn slice(&self, origin: Cell, direction: i32, length: u32) -> Vec<Cell> {
        let edge = Direction::from_index(direction);
        let step = edge.turn(2);
        tracing::debug!(%origin, ?edge, ?step, length, "slice");

        let edge = edge.vector();
        let step = step.vector();
        let (rows, cols) = self.bounds();
        let from = widen(origin);

        // Every cell of wedge row `i` is exactly `i` steps from `origin`, so
        // only rows between the nearest and farthest reach of the map matter.
        let nearest = gap(from.0, &rows).max(gap(from.1, &cols)).max(1);
        let farthest = corners(&rows, &cols)
            .map(|corner| steps(from, corner))
            .max()
            .unwrap_or(0)
            .min(i64::from(length));

        let wedge = (nearest..=farthest).flat_map(move |i| {
            let start = (from.0 + i64::from(edge.row) * i, from.1 + i64::from(edge.col) * i);
            span(start, step, i, &rows, &cols).filter_map(move |j| cell_at(start, step, j))
        });

        std::iter::once(origin)
            .chain(wedge)
            .filter(|&cell| self.valid_cell(cell))
            .collect()
    }

    /// A wedge twice as wide as a [`slice`][Map::slice].
    ///
    /// The union of the slices in `direction` and `direction + 1`. Starting at
    /// `0,0` with direction 0, the first row is `0,1`, `1,1` and `1,0`.
    pub fn cone(&self, origin: Cell, direction: i32, length: u32) -> HashSet<Cell> {
        self.slice(origin, direction, length)
            .into_iter()
            .chain(self.slice(origin, direction + 1, length))
            .collect()
    }
}

fn widen(Cell { row, col }: Cell) -> (i64, i64) {
    (i64::from(row), i64::from(col))
}

/// The cell `i` unit steps of `offset` away from `from`, if it fits in a [`Cell`].
fn cell_at(from: (i64, i64), offset: Vector, i: i64) -> Option<Cell> {
    let row = i32::try_from(from.0 + i64::from(offset.row) * i).ok()?;
    let col = i32::try_from(from.1 + i64::from(offset.col) * i).ok()?;
    Some(Cell::new(row, col))
}

/// The values of `i` in `0..=limit` for which `from + offset * i` lies within
/// `rows` by `cols`, in increasing order.
///
/// `offset` must be a unit step. An empty window is `1..=0`.
fn span(
    from: (i64, i64),
    offset: Vector,
    limit: i64,
    rows: &Range<i64>,
    cols: &Range<i64>,
) -> RangeInclusive<i64> {
    let (row_low, row_high) = window(from.0, offset.row, rows);
    let (col_low, col_high) = window(from.1, offset.col, cols);
    let low = row_low.max(col_low).max(0);
    let high = row_high.min(col_high).min(limit);
    if low > high {
        1..=0
    } else {
        low..=high
    }
}

/// Bounds on `i` keeping `start + delta * i` inside `range`, for `delta` in `-1..=1`.
fn window(start: i64, delta: i32, range: &Range<i64>) -> (i64, i64) {
    let last = range.end - 1;
    match delta.signum() {
        1 => (range.start - start, last - start),
        -1 => (start - last, start - range.start),
        _ if range.contains(&start) => (i64::MIN, i64::MAX),
        _ => (1, 0),
    }
}

/// How far `value` lies outside `range`; zero when it is inside.
fn gap(value: i64, range: &Range<i64>) -> i64 {
    if value < range.start {
        range.start - value
    } else if value >= range.end {
        value - (range.end - 1)
    } else {
        0
    }
}

fn corners(rows: &Range<i64>, cols: &Range<i64>) -> impl Iterator<Item = (i64, i64)> {
    let (top, bottom) = (rows.start, rows.end - 1);
    let (left, right) = (cols.start, cols.end - 1);
    [(top, left), (top, right), (bottom, left), (bottom, right)].into_iter()
}

/// Length of the shortest path of unit steps between two positions.
fn steps(a: (i64, i64), b: (i64, i64)) -> i64 {
    let (dr, dc) = (b.0 - a.0, b.1 - a.1);
    dr.abs().max(dc.abs()).max((dr - dc).abs())
}
