// This interior module is private; we reexport its contents.
#[allow(clippy::module_inception)]
mod map;
mod region;

pub use map::{Map, MapError};
