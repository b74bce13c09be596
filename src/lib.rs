//! Geometry for offset-coordinate hex maps.
//!
//! - [`geometry`]: cells, directions, distance, and the bounded [`Map`] with
//!   its region queries (`neighbors`, `spread`, `line`, `slice`, `cone`).
//! - [`data_structures::Grid`]: a sparse cell-to-occupant store with reverse lookup.
//! - [`occupant`]: how occupants locate themselves and paint themselves.
//! - [`config`]: persisted map dimensions.

pub mod config;
pub mod data_structures;
pub mod geometry;
pub mod occupant;

pub use data_structures::Grid;
pub use geometry::{Cell, Direction, Map, MapError, Vector};
pub use occupant::{Occupant, Paint};
