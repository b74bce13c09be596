//! Sparse association of hex cells with their occupants.

use crate::geometry::Cell;
use indexmap::IndexMap;
use std::ops::Index;

/// A sparse map from [`Cell`] to occupant, with a default for empty cells.
///
/// Reading an empty cell produces the grid's default value rather than
/// failing, so a `Grid<Option<Unit>>` or a `Grid<Visibility>` with an
/// `Obscured` default both read naturally.
///
/// The grid knows nothing about map bounds; callers are responsible for only
/// placing occupants on valid cells.
///
/// Entries are kept in insertion order. Overwriting a cell keeps its original
/// position, and removing a cell preserves the order of the rest. Reverse
/// lookup ([`Grid::find`]) scans in that order, so it always reports the
/// earliest placed match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    entries: IndexMap<Cell, T>,
    default: T,
}

impl<T> Grid<T> {
    /// Create an empty grid whose empty cells read as `default`.
    pub fn new(default: T) -> Grid<T> {
        Grid {
            entries: IndexMap::new(),
            default,
        }
    }

    /// The value reported for cells with no occupant.
    #[inline]
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// The occupant of `cell`, or the default if there is none.
    pub fn get(&self, cell: Cell) -> &T {
        self.entries.get(&cell).unwrap_or(&self.default)
    }

    /// The occupant of `cell`, if one was placed there.
    pub fn get_entry(&self, cell: Cell) -> Option<&T> {
        self.entries.get(&cell)
    }

    pub fn get_mut(&mut self, cell: Cell) -> Option<&mut T> {
        self.entries.get_mut(&cell)
    }

    /// Place `occupant` at `cell`, returning whatever was there before.
    pub fn set(&mut self, cell: Cell, occupant: T) -> Option<T> {
        self.entries.insert(cell, occupant)
    }

    /// Clear `cell`, returning its occupant.
    pub fn remove(&mut self, cell: Cell) -> Option<T> {
        self.entries.shift_remove(&cell)
    }

    /// `true` when something has been placed at `cell`.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.entries.contains_key(&cell)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over occupied cells and their occupants, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &T)> {
        self.entries.iter().map(|(&cell, occupant)| (cell, occupant))
    }

    /// Iterate over occupied cells, in insertion order.
    pub fn cells(&self) -> impl '_ + Iterator<Item = Cell> {
        self.entries.keys().copied()
    }
}

impl<T: PartialEq> Grid<T> {
    /// Reverse lookup: the first cell whose occupant equals `item`.
    ///
    /// This is a linear scan over every entry.
    pub fn find(&self, item: &T) -> Option<Cell> {
        self.entries
            .iter()
            .find(|(_, occupant)| *occupant == item)
            .map(|(&cell, _)| cell)
    }

    /// The occupants of the requested cells.
    ///
    /// Cells which are empty, or whose occupant equals the default, are left
    /// out. The result follows the order of `cells`; repeated cells appear once.
    pub fn items_for(&self, cells: impl IntoIterator<Item = Cell>) -> IndexMap<Cell, &T> {
        cells
            .into_iter()
            .filter_map(|cell| {
                self.entries
                    .get(&cell)
                    .filter(|&occupant| *occupant != self.default)
                    .map(|occupant| (cell, occupant))
            })
            .collect()
    }
}

impl<T: Default> Default for Grid<T> {
    fn default() -> Self {
        Grid::new(T::default())
    }
}

impl<T> Index<Cell> for Grid<T> {
    type Output = T;

    /// Never panics: empty cells produce the default.
    fn index(&self, cell: Cell) -> &T {
        self.get(cell)
    }
}

impl<T> Extend<(Cell, T)> for Grid<T> {
    fn extend<I: IntoIterator<Item = (Cell, T)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<T: Default> FromIterator<(Cell, T)> for Grid<T> {
    fn from_iter<I: IntoIterator<Item = (Cell, T)>>(iter: I) -> Self {
        let mut grid = Grid::default();
        grid.extend(iter);
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: i32, col: i32) -> Cell {
        Cell::new(row, col)
    }

    #[test]
    fn is_generic() {
        struct Foo;
        Grid::new(Foo);
    }

    #[test]
    fn test_assignment() {
        let mut grid = Grid::default();
        let key = cell(0, 0);
        assert_eq!(grid.set(key, Some("U")), None);
        assert!(grid.contains(key));
        assert_eq!(grid[key], Some("U"));
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_overwrite() {
        let mut grid = Grid::new(0);
        grid.set(cell(1, 1), 3);
        assert_eq!(grid.set(cell(1, 1), 4), Some(3));
        assert_eq!(*grid.get(cell(1, 1)), 4);
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_default_for_missing() {
        let grid: Grid<&str> = Grid::new("obscured");
        assert_eq!(grid[cell(2, 2)], "obscured");
        assert_eq!(grid.get_entry(cell(2, 2)), None);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut grid = Grid::new(None);
        grid.set(cell(3, 2), Some('x'));
        assert_eq!(grid.remove(cell(3, 2)), Some(Some('x')));
        assert_eq!(grid[cell(3, 2)], None);
        assert_eq!(grid.remove(cell(3, 2)), None);
        assert!(!grid.contains(cell(3, 2)));
    }

    #[test]
    fn test_find() {
        let mut grid = Grid::default();
        grid.set(cell(0, 0), Some("U"));
        assert_eq!(grid.find(&Some("U")), Some(cell(0, 0)));
        assert_eq!(grid.find(&Some("V")), None);
    }

    #[test]
    fn test_find_prefers_earliest_placement() {
        let mut grid = Grid::new(0);
        grid.set(cell(4, 4), 7);
        grid.set(cell(1, 0), 7);
        grid.set(cell(0, 0), 7);
        assert_eq!(grid.find(&7), Some(cell(4, 4)));

        grid.remove(cell(4, 4));
        assert_eq!(grid.find(&7), Some(cell(1, 0)));

        // overwriting keeps the original slot
        grid.set(cell(1, 0), 8);
        grid.set(cell(1, 0), 7);
        assert_eq!(grid.find(&7), Some(cell(1, 0)));
    }

    #[test]
    fn test_items_for() {
        let mut grid = Grid::new(0);
        grid.set(cell(1, 1), 1);
        grid.set(cell(2, 1), 0);
        grid.set(cell(3, 1), 3);
        grid.set(cell(9, 9), 9);

        let items = grid.items_for(vec![cell(3, 1), cell(1, 1), cell(2, 1), cell(5, 5), cell(3, 1)]);
        let items: Vec<_> = items.into_iter().collect();
        assert_eq!(items, vec![(cell(3, 1), &3), (cell(1, 1), &1)]);
    }

    #[test]
    fn test_iteration_order() {
        let grid: Grid<u8> = vec![(cell(2, 2), 1), (cell(0, 0), 2), (cell(1, 1), 3)]
            .into_iter()
            .collect();
        let order: Vec<_> = grid.cells().collect();
        assert_eq!(order, vec![cell(2, 2), cell(0, 0), cell(1, 1)]);
        assert_eq!(grid.iter().map(|(_, &value)| value).sum::<u8>(), 6);
    }
}
