use super::Ellipsoid;
use crate::math::sincos_deg;
use crate::{Error, GreatEllipse, Point};
use std::f64::consts::PI;
use std::str::FromStr;

/// The methods available for computing distances on the ellipsoid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Distance {
    /// Andoyer's approximation, first order in the flattening
    Andoyer,
    /// Length of the [great ellipse](crate::GreatEllipse) arc
    #[default]
    GreatEllipse,
    /// Length of the geodesic. Not implemented
    Geodesic,
}

impl FromStr for Distance {
    type Err = Error;

    fn from_str(name: &str) -> Result<Distance, Error> {
        match name.trim().to_ascii_lowercase().as_str() {
            "andoyer" => Ok(Distance::Andoyer),
            "ellipse" | "great_ellipse" | "greatellipse" => Ok(Distance::GreatEllipse),
            "geodesic" => Ok(Distance::Geodesic),
            _ => Err(Error::NotFound(
                String::from(name),
                String::from("Distance::from_str()"),
            )),
        }
    }
}

// ----- Distances -------------------------------------------------------------
impl Ellipsoid {
    /// The distance between `from` and `to`, computed by `method`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// // Compute the distance between Copenhagen and Paris
    /// use geodetic::prelude::*;
    /// # fn main() -> Result<(), Error> {
    /// let ellps = Ellipsoid::wgs1984();
    /// let cph = Point::geo(55., 12.)?;
    /// let par = Point::geo(49., 2.)?;
    /// let d = ellps.distance(Distance::GreatEllipse, &cph, &par)?;
    /// assert!((d - 956_066.237).abs() < 1e-3);
    /// assert!(ellps.distance(Distance::Geodesic, &cph, &par).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn distance(&self, method: Distance, from: &Point, to: &Point) -> Result<f64, Error> {
        match method {
            Distance::Andoyer => Ok(self.andoyer_distance(from, to)),
            Distance::GreatEllipse => Ok(GreatEllipse::new(*self).inverse(from, to).0),
            Distance::Geodesic => Err(Error::Unimplemented("Ellipsoid::distance", "Geodesic")),
        }
    }

    /// Approximate geodesic distance between `from` and `to`, following
    /// [Andoyer (1932)](crate::Bibliography::And32). The error is of the order
    /// of the flattening squared, i.e. some tens of meters for the Earth.
    #[must_use]
    #[allow(non_snake_case)] // make it possible to mimic math notation from original paper
    pub fn andoyer_distance(&self, from: &Point, to: &Point) -> f64 {
        let (phi1, lam1) = from.geo_pair();
        let (phi2, lam2) = to.geo_pair();

        let (sinF, cosF) = sincos_deg((phi1 + phi2) / 2.);
        let (sinG, cosG) = sincos_deg((phi1 - phi2) / 2.);
        let (sinL, cosL) = sincos_deg((lam1 - lam2) / 2.);

        let S = (sinG * cosL).hypot(cosF * sinL);
        let C = (cosG * cosL).hypot(sinF * sinL);
        let omega = S.atan2(C);
        let D = 2. * self.semimajor_axis() * omega;

        let R = S * C / omega;
        let H1 = (3. * R - 1.) / (2. * C * C);
        let H2 = (3. * R + 1.) / (2. * S * S);
        let f = self.flattening();
        let d = D * (1. + f * (H1 * (sinF * cosG).powi(2) - H2 * (cosF * sinG).powi(2)));
        if d.is_finite() {
            return d;
        }

        // Antipodal points: C = 0, while R is still well defined
        if R.is_finite() {
            return PI * self.meridian_mean_radius();
        }

        // Coincident points: S = omega = 0
        0.
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn andoyer() -> Result<(), Error> {
        let ellps = Ellipsoid::wgs1984();

        // Copenhagen--Paris. The geodesic distance is 956066.2320 m,
        // Andoyer is within a few meters
        let cph = Point::geo(55., 12.)?;
        let par = Point::geo(49., 2.)?;
        let d = ellps.andoyer_distance(&cph, &par);
        assert_float_eq!(d, 956_067.980_030_033, abs <= 1e-6);
        assert_float_eq!(d, ellps.andoyer_distance(&par, &cph), abs <= 1e-9);

        // Along the equator, the distance is exact
        let d = ellps.andoyer_distance(&Point::geo(0., 0.)?, &Point::geo(0., 90.)?);
        assert_float_eq!(d, PI / 2. * ellps.semimajor_axis(), abs <= 1e-6);

        // Degenerate cases
        assert_eq!(ellps.andoyer_distance(&cph, &cph), 0.);
        let antipode = Point::geo(0., 180.)?;
        let d = ellps.andoyer_distance(&Point::geo(0., 0.)?, &antipode);
        assert_eq!(d, PI * ellps.meridian_mean_radius());
        Ok(())
    }

    #[test]
    fn dispatch() -> Result<(), Error> {
        let ellps = Ellipsoid::wgs1984();
        let cph = Point::geo(55., 12.)?;
        let par = Point::geo(49., 2.)?;

        let a = ellps.distance(Distance::Andoyer, &cph, &par)?;
        let g = ellps.distance(Distance::GreatEllipse, &cph, &par)?;
        assert_eq!(a, ellps.andoyer_distance(&cph, &par));
        assert_eq!(g, GreatEllipse::new(ellps).inverse(&cph, &par).0);

        // Andoyer is within a few meters of the geodesic, and for short
        // lines, the great ellipse is within millimeters of the geodesic
        assert!((a - g).abs() < 5.);

        assert_eq!(
            ellps.distance(Distance::Geodesic, &cph, &par),
            Err(Error::Unimplemented("Ellipsoid::distance", "Geodesic"))
        );
        Ok(())
    }

    #[test]
    fn method_names() -> Result<(), Error> {
        assert_eq!("andoyer".parse::<Distance>()?, Distance::Andoyer);
        assert_eq!("Ellipse".parse::<Distance>()?, Distance::GreatEllipse);
        assert_eq!("great_ellipse".parse::<Distance>()?, Distance::GreatEllipse);
        assert_eq!(" geodesic ".parse::<Distance>()?, Distance::Geodesic);
        assert_eq!(Distance::default(), Distance::GreatEllipse);
        assert!(matches!(
            "vincenty".parse::<Distance>(),
            Err(Error::NotFound(..))
        ));
        Ok(())
    }
}
