//! Coordinate value types: geographic points and geocentric cartesian triples.
mod cartesian;
mod point;

pub use cartesian::Cartesian;
pub use point::Point;
