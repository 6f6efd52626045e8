//! Map projections: transformations from the surface of the ellipsoid to the plane.
use crate::prelude::*;
use std::collections::BTreeMap;

pub mod albers;

/// The capability shared by all map projections. Only the forward
/// direction is required.
pub trait MapProjection {
    /// The ellipsoid the projection is defined on
    fn ellipsoid(&self) -> Ellipsoid;

    /// The defining parameters of the projection, by name
    fn params(&self) -> BTreeMap<String, f64>;

    /// Transform a geographic point to easting and northing, in meters
    fn project(&self, point: &Point) -> [f64; 2];

    /// Transform a slice of points (default: loop)
    fn project_all(&self, points: &[Point]) -> Vec<[f64; 2]> {
        points.iter().map(|p| self.project(p)).collect()
    }
}
