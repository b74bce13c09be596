//! Offset hex-grid geometry.
//!
//! Cells are addressed by `(row, col)`; alternate columns are shifted by half
//! a row. [`Map`] bounds the addressable space and runs region queries over it.

pub mod cell;
pub mod direction;
pub mod map;
pub mod vector;

pub use cell::Cell;
pub use direction::{Direction, TryFromVectorError};
pub use map::{Map, MapError};
pub use vector::Vector;
