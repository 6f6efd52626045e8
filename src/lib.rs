//! *Great ellipse distances and geocentric coordinate conversions
//! on the ellipsoid of revolution*.
//!
//! Two kernels
//! ===========
//!
//! - [`GreatEllipse`]: the direct and inverse problems for the curve cut out
//!   of the ellipsoid by a plane through its centre and two given points,
//!   solved on the auxiliary sphere with an 8th order series in the
//!   third flattening (cf. [Karney 2013](crate::Bibliography::Kar13)).
//! - [`Geocentric`]: geographic to geocentric cartesian conversion, and
//!   back again by two fixed Halley steps
//!   (cf. [Fukushima 2006](crate::Bibliography::Fuk06)).
//!
//! Both are bound to an [`Ellipsoid`] at construction, and each call is a
//! pure function of its arguments.
//!
//! ```rust
//! use geodetic::prelude::*;
//! # fn main() -> Result<(), Error> {
//! let ge = GreatEllipse::new(Ellipsoid::wgs1984());
//! let (s12, az1, az2) = ge.inverse(&Point::geo(0., 0.)?, &Point::geo(0., 90.)?);
//! assert!((s12 - 10_018_754.171_394_622).abs() < 1e-6);
//! assert!((az1 - 90.).abs() < 1e-12 && (az2 - 90.).abs() < 1e-12);
//! # Ok(())
//! # }
//! ```

mod bibliography;
mod coordinate;
mod ellipsoid;
mod geocentric;
mod great_ellipse;
pub mod math;
mod projection;

pub use bibliography::Bibliography;
pub use coordinate::Cartesian;
pub use coordinate::Point;
pub use ellipsoid::Distance;
pub use ellipsoid::Ellipsoid;
pub use geocentric::Geocentric;
pub use great_ellipse::GreatEllipse;
pub use projection::albers::Albers;
pub use projection::MapProjection;

use thiserror::Error;

/// Preamble for crate-internal modules, and for user code
pub mod prelude {
    pub use crate::Albers;
    pub use crate::Cartesian;
    pub use crate::Distance;
    pub use crate::Ellipsoid;
    pub use crate::Error;
    pub use crate::Geocentric;
    pub use crate::GreatEllipse;
    pub use crate::MapProjection;
    pub use crate::Point;
}

/// The two kinds of failure: input outside the range where the numerics are
/// valid, and method variants which are named but not (yet) provided.
/// `NotFound` covers lookups by name.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("{0}: domain error: {1}")]
    Domain(&'static str, String),

    #[error("{0}: not implemented: {1}")]
    Unimplemented(&'static str, &'static str),

    #[error("{1}: {0} not found")]
    NotFound(String, String),
}
