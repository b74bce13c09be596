//! Things that stand on the map.
//!
//! An occupant never records its own position. The [`Grid`] owns the
//! cell-to-occupant association, and an occupant finds itself by reverse
//! lookup whenever it needs to know where it is.

use crate::{data_structures::Grid, geometry::Cell};

/// Anything which can be placed in a [`Grid`] and located again.
///
/// Implemented for every type which can be compared for equality.
pub trait Occupant: PartialEq + Sized {
    /// Where this occupant currently stands in `grid`, if anywhere.
    fn position(&self, grid: &Grid<Self>) -> Option<Cell> {
        grid.find(self)
    }
}

impl<T: PartialEq> Occupant for T {}

/// An occupant which knows how to draw itself.
///
/// The surface type belongs to whatever renderer is in use; the geometry in
/// this crate never calls `paint`.
pub trait Paint<Surface> {
    fn paint(&self, surface: Surface) -> Surface;
}
