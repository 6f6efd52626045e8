//! Albers conical equal-area projection, following
//! [Snyder (1987)](crate::Bibliography::Sny87), ch. 14.
use super::MapProjection;
use crate::math::ancillary::{msfn, qs};
use crate::math::angular::normalize_longitude;
use crate::math::sincos_deg;
use crate::prelude::*;
use log::{debug, warn};
use std::collections::BTreeMap;

/// Standard parallels closer than this (degrees) are treated as coincident
const PARALLEL_TOLERANCE: f64 = 1e-10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Albers {
    ellps: Ellipsoid,
    lat1: f64,
    lat2: f64,
    lat0: f64,
    lon0: f64,
    // Cone constant, and the derived constants of Snyder eqs. 14-13, 14-12
    n: f64,
    c: f64,
    rho0: f64,
}

impl Albers {
    /// An Albers projection with standard parallels `lat1` and `lat2`, and
    /// origin at (`lat0`, `lon0`). All in degrees.
    ///
    /// Fails with a domain error for latitudes and longitudes out of range, and
    /// for standard parallels symmetric around the equator, where the cone
    /// degenerates to a cylinder.
    pub fn new(ellps: Ellipsoid, lat1: f64, lat2: f64, lat0: f64, lon0: f64) -> Result<Albers, Error> {
        for lat in [lat1, lat2, lat0] {
            if !(-90. ..=90.).contains(&lat) {
                warn!("Albers::new: latitude out of range: {lat}");
                return Err(Error::Domain("Albers::new", format!("lat = {lat}")));
            }
        }
        if !(-180. ..=180.).contains(&lon0) {
            warn!("Albers::new: longitude out of range: {lon0}");
            return Err(Error::Domain("Albers::new", format!("lon0 = {lon0}")));
        }

        let es = ellps.eccentricity_squared();
        let e = ellps.eccentricity();

        let (sinphi1, cosphi1) = sincos_deg(lat1);
        let (sinphi2, cosphi2) = sincos_deg(lat2);
        let (sinphi0, _) = sincos_deg(lat0);

        let m1 = msfn((sinphi1, cosphi1), es);
        let m2 = msfn((sinphi2, cosphi2), es);
        let q1 = qs(sinphi1, e);
        let q2 = qs(sinphi2, e);
        let q0 = qs(sinphi0, e);

        // A single standard parallel gives the limiting value of the cone constant
        let n = if (lat1 - lat2).abs() > PARALLEL_TOLERANCE {
            (m1 - m2) * (m1 + m2) / (q2 - q1)
        } else {
            sinphi1
        };
        if !n.is_finite() || n.abs() < f64::EPSILON {
            warn!("Albers::new: degenerate cone for lat1 = {lat1}, lat2 = {lat2}");
            return Err(Error::Domain(
                "Albers::new",
                format!("lat1 = {lat1}, lat2 = {lat2}"),
            ));
        }

        let c = m1 * m1 + n * q1;
        let rho0 = ellps.semimajor_axis() * (c - n * q0).max(0.).sqrt() / n;
        debug!("Albers::new: n = {n}, c = {c}, rho0 = {rho0}");

        Ok(Albers {
            ellps,
            lat1,
            lat2,
            lat0,
            lon0,
            n,
            c,
            rho0,
        })
    }
}

impl MapProjection for Albers {
    fn ellipsoid(&self) -> Ellipsoid {
        self.ellps
    }

    fn params(&self) -> BTreeMap<String, f64> {
        BTreeMap::from([
            ("lat1".to_string(), self.lat1),
            ("lat2".to_string(), self.lat2),
            ("lat0".to_string(), self.lat0),
            ("lon0".to_string(), self.lon0),
        ])
    }

    fn project(&self, point: &Point) -> [f64; 2] {
        let (sinphi, _) = sincos_deg(point.lat());
        let q = qs(sinphi, self.ellps.eccentricity());
        let rho = self.ellps.semimajor_axis() * (self.c - self.n * q).max(0.).sqrt() / self.n;
        let theta = self.n * normalize_longitude(point.lon() - self.lon0);
        let (sintheta, costheta) = sincos_deg(theta);
        [rho * sintheta, self.rho0 - rho * costheta]
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn snyder() -> Result<(), Error> {
        // Snyder (1987), p. 292: Clarke 1866, standard parallels 29.5 and 45.5
        let albers = Albers::new(Ellipsoid::clarke1866(), 29.5, 45.5, 23., -96.)?;
        assert_float_eq!(albers.n, 0.602_903_500_627_953_3, abs <= 1e-12);

        let [x, y] = albers.project(&Point::geo(35., -75.)?);
        assert_float_eq!(x, 1_885_472.725_813_466_6, abs <= 1e-5);
        assert_float_eq!(y, 1_535_925.004_983_639_3, abs <= 1e-5);

        // The origin maps to the origin
        let [x, y] = albers.project(&Point::geo(23., -96.)?);
        assert_float_eq!(x, 0., abs <= 1e-9);
        assert_float_eq!(y, 0., abs <= 1e-9);

        assert_eq!(albers.ellipsoid(), Ellipsoid::clarke1866());
        Ok(())
    }

    #[test]
    fn parameters() -> Result<(), Error> {
        let albers = Albers::new(Ellipsoid::wgs1984(), 29.5, 45.5, 23., -96.)?;
        let params = albers.params();
        assert_eq!(params.len(), 4);
        assert_eq!(params["lat1"], 29.5);
        assert_eq!(params["lat2"], 45.5);
        assert_eq!(params["lat0"], 23.);
        assert_eq!(params["lon0"], -96.);
        Ok(())
    }

    #[test]
    fn sphere() -> Result<(), Error> {
        // On the sphere, the cone constant is the mean of the sines of
        // the standard parallels
        let albers = Albers::new(Ellipsoid::sphere(6_371_000.)?, 20., 60., 40., 10.)?;
        let expected = (20_f64.to_radians().sin() + 60_f64.to_radians().sin()) / 2.;
        assert_float_eq!(albers.n, expected, abs <= 1e-14);

        // Symmetric around the central meridian
        let points = [Point::geo(50., 0.)?, Point::geo(50., 20.)?];
        let xy = albers.project_all(&points);
        assert_float_eq!(xy[0][0], -xy[1][0], abs <= 1e-6);
        assert_float_eq!(xy[0][1], xy[1][1], abs <= 1e-6);
        Ok(())
    }

    #[test]
    fn degenerate() -> Result<(), Error> {
        let ellps = Ellipsoid::wgs1984();
        assert!(matches!(
            Albers::new(ellps, 30., -30., 0., 0.),
            Err(Error::Domain(..))
        ));
        assert!(matches!(
            Albers::new(ellps, 0., 0., 0., 0.),
            Err(Error::Domain(..))
        ));
        assert!(matches!(
            Albers::new(ellps, 91., 45., 0., 0.),
            Err(Error::Domain(..))
        ));
        assert!(matches!(
            Albers::new(ellps, 30., 45., 0., 200.),
            Err(Error::Domain(..))
        ));

        // The poles map to finite points, north of everything else on the
        // central meridian for the north pole
        let albers = Albers::new(ellps, 29.5, 45.5, 23., -96.)?;
        let [x, y] = albers.project(&Point::geo(90., -96.)?);
        let [_, y89] = albers.project(&Point::geo(89., -96.)?);
        assert_float_eq!(x, 0., abs <= 1e-9);
        assert!(y.is_finite() && y > y89);
        let [x, y] = albers.project(&Point::geo(-90., 0.)?);
        assert!(x.is_finite() && y.is_finite());

        // A cone tangent at the pole has its apex there
        let albers = Albers::new(ellps, 90., 90., 90., 0.)?;
        let [x, y] = albers.project(&Point::geo(90., 45.)?);
        assert_float_eq!(x, 0., abs <= 1.);
        assert_float_eq!(y, 0., abs <= 1.);

        // A single standard parallel is fine
        let albers = Albers::new(ellps, 45., 45., 45., 0.)?;
        let [x, y] = albers.project(&Point::geo(45., 0.)?);
        assert_float_eq!(x, 0., abs <= 1e-9);
        assert_float_eq!(y, 0., abs <= 1e-9);
        Ok(())
    }
}
