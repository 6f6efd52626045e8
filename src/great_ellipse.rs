use crate::math::angular::normalize_longitude;
use crate::math::{elliptic, fourier, hat, sincos_deg};
use crate::prelude::*;

/// Latitudes are kept this far inside the poles, where the azimuth is
/// otherwise undefined
const LATITUDE_LIMIT: f64 = 90. * (1. - f64::EPSILON);

/// The great ellipse is the curve cut out of the ellipsoid by a plane
/// through its centre. Between two points it is not the shortest path
/// (that would be the geodesic), but for terrestrial ellipsoids it
/// never deviates from the geodesic distance by more than a few meters.
///
/// The direct and inverse problems are solved on the auxiliary sphere,
/// where the great ellipse maps to a great circle. The mapping back to
/// the ellipsoid is by an 8th order series in the third flattening of
/// the ellipse itself, following [Karney (2013)](crate::Bibliography::Kar13)
/// for the series, and Sjöberg's construction of the auxiliary sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GreatEllipse {
    ellps: Ellipsoid,
}

impl GreatEllipse {
    #[must_use]
    pub fn new(ellps: Ellipsoid) -> GreatEllipse {
        GreatEllipse { ellps }
    }

    #[must_use]
    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellps
    }

    /// Normalized trigs of the reduced latitude, 𝛽
    fn reduced_latitude(&self, latitude: f64) -> (f64, f64) {
        let (s, c) = sincos_deg(latitude.clamp(-LATITUDE_LIMIT, LATITUDE_LIMIT));
        hat(s * self.ellps.aspect_ratio(), c)
    }

    /// The expansion parameter, 𝜀, and the scale factor, A₁, of the great
    /// ellipse with vertex azimuth 𝛾₀
    fn scale(&self, cos_gamma0: f64) -> (f64, f64) {
        let k2 = self.ellps.eccentricity_squared() * cos_gamma0 * cos_gamma0;
        let eps = k2 / (2. * (1. + (1. - k2).sqrt()) - k2);
        let a1 = self.ellps.semimajor_axis() * (1. + elliptic::a1m1(eps)) * (1. - eps) / (1. + eps);
        (eps, a1)
    }

    /// The azimuth on the ellipsoid, in degrees, from the trigs of its
    /// counterpart, 𝛾, on the auxiliary sphere
    fn azimuth(&self, sin_gamma: f64, cos_gamma: f64, cos_beta: f64) -> f64 {
        let es = self.ellps.eccentricity_squared();
        let scale = (1. - es * cos_beta * cos_beta).sqrt();
        sin_gamma.atan2(cos_gamma * scale).to_degrees()
    }

    /// The inverse problem: Distance, and azimuths at both ends, of the
    /// great ellipse from `from` to `to`.
    ///
    /// Returns `(s12, azi1, azi2)`, meters and degrees. The azimuth `azi2`
    /// is the forward azimuth at `to`, i.e. the direction of travel when
    /// arriving there.
    ///
    /// For coincident points the distance is zero, and for antipodal
    /// points the azimuths are arbitrary, since any great ellipse through
    /// the two points will do.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geodetic::prelude::*;
    /// # fn main() -> Result<(), Error> {
    /// let ge = GreatEllipse::new(Ellipsoid::wgs1984());
    /// let cph = Point::geo(55., 12.)?;
    /// let par = Point::geo(49., 2.)?;
    /// let (s12, azi1, azi2) = ge.inverse(&cph, &par);
    /// assert!((s12 - 956_066.237).abs() < 1e-3);
    /// assert!((azi1 + 130.164).abs() < 1e-3);
    /// assert!((azi2 + 138.043).abs() < 1e-3);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn inverse(&self, from: &Point, to: &Point) -> (f64, f64, f64) {
        let (sb1, cb1) = self.reduced_latitude(from.lat());
        let (sb2, cb2) = self.reduced_latitude(to.lat());
        let (sl12, cl12) = sincos_deg(normalize_longitude(to.lon() - from.lon()));

        // Azimuths on the auxiliary sphere, from the spherical triangle
        // pole - P1 - P2
        let sg1 = cb2 * sl12;
        let cg1 = cb1 * sb2 - sb1 * cb2 * cl12;
        let sg2 = cb1 * sl12;
        let cg2 = cb1 * sb2 * cl12 - sb1 * cb2;

        // Arc length on the auxiliary sphere
        let ss12 = sg1.hypot(cg1);
        let cs12 = sb1 * sb2 + cb1 * cb2 * cl12;

        let (sg1, cg1) = hat(sg1, cg1);
        let (sg2, cg2) = hat(sg2, cg2);

        // The vertex azimuth, 𝛾₀, has sin 𝛾₀ = sg1 cb1. Only its cosine is needed
        let cg0 = cg1.hypot(sg1 * sb1);

        // Arc from the equator crossing to P1, then on to P2
        let mut cs1 = cb1 * cg1;
        if sb1 == 0. && cs1 == 0. {
            cs1 = 1.;
        }
        let (ss1, cs1) = hat(sb1, cs1);
        let ss2 = ss1 * cs12 + cs1 * ss12;
        let cs2 = cs1 * cs12 - ss1 * ss12;

        let (eps, a1) = self.scale(cg0);
        let c1 = elliptic::c1(eps);
        let b11 = fourier::sin_even((ss1, cs1), &c1);
        let b12 = fourier::sin_even((ss2, cs2), &c1);
        let s12 = a1 * (ss12.atan2(cs12) + (b12 - b11));

        let azi1 = self.azimuth(sg1, cg1, cb1);
        let azi2 = self.azimuth(sg2, cg2, cb2);
        (s12, azi1, azi2)
    }

    /// The direct problem: Starting at `from`, heading towards `azimuth`
    /// (degrees), follow the great ellipse for `distance` meters.
    ///
    /// Returns the destination point, and the forward azimuth there.
    /// Non-finite `azimuth` or `distance` is a domain error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geodetic::prelude::*;
    /// # fn main() -> Result<(), Error> {
    /// let ge = GreatEllipse::new(Ellipsoid::wgs1984());
    /// let cph = Point::geo(55., 12.)?;
    /// let (par, azi2) = ge.direct(&cph, -130.164_184_307_491_87, 956_066.236_799_55)?;
    /// assert!((par.lat() - 49.).abs() < 1e-9);
    /// assert!((par.lon() - 2.).abs() < 1e-9);
    /// assert!((azi2 + 138.043).abs() < 1e-3);
    /// # Ok(())
    /// # }
    /// ```
    pub fn direct(&self, from: &Point, azimuth: f64, distance: f64) -> Result<(Point, f64), Error> {
        if !azimuth.is_finite() || !distance.is_finite() {
            return Err(Error::Domain(
                "GreatEllipse::direct",
                format!("azimuth = {azimuth}, distance = {distance}"),
            ));
        }

        let es = self.ellps.eccentricity_squared();
        let (sb1, cb1) = self.reduced_latitude(from.lat());

        // Azimuth on the auxiliary sphere
        let (sg1, cg1) = sincos_deg(azimuth);
        let (sg1, cg1) = hat(sg1 * (1. - es * cb1 * cb1).sqrt(), cg1);

        // Vertex azimuth, 𝛾₀
        let sg0 = sg1 * cb1;
        let cg0 = cg1.hypot(sg1 * sb1);

        // Arc from the equator crossing to P1, and the corresponding
        // longitude on the auxiliary sphere
        let sl1 = sg0 * sb1;
        let mut cs1 = cb1 * cg1;
        if sb1 == 0. && cg1 == 0. {
            cs1 = 1.;
        }
        let cl1 = cs1;
        let (ss1, cs1) = hat(sb1, cs1);

        let (eps, a1) = self.scale(cg0);

        // From arc on the sphere, 𝜎, to normalized distance, 𝜏 = s/A₁
        let b11 = fourier::sin_even((ss1, cs1), &elliptic::c1(eps));
        let (sb, cb) = b11.sin_cos();
        let st1 = ss1 * cb + cs1 * sb;
        let ct1 = cs1 * cb - ss1 * sb;

        // ... and back again, at the far end
        let tau12 = distance / a1;
        let (st12, ct12) = tau12.sin_cos();
        let st2 = st1 * ct12 + ct1 * st12;
        let ct2 = ct1 * ct12 - st1 * st12;
        let b12 = -fourier::sin_even((st2, ct2), &elliptic::c1p(eps));
        let sigma12 = tau12 - (b12 - b11);

        let (ss12, cs12) = sigma12.sin_cos();
        let ss2 = ss1 * cs12 + cs1 * ss12;
        let cs2 = cs1 * cs12 - ss1 * ss12;

        // Destination on the auxiliary sphere
        let sb2 = cg0 * ss2;
        let cb2 = sg0.hypot(cg0 * cs2);
        let sl2 = sg0 * ss2;
        let cl2 = cs2;
        let sg2 = sg0;
        let cg2 = cg0 * cs2;

        let lon12 = (sl2 * cl1 - cl2 * sl1)
            .atan2(cl2 * cl1 + sl2 * sl1)
            .to_degrees();
        let lon2 = normalize_longitude(from.lon() + lon12);
        let lat2 = sb2.atan2(self.ellps.aspect_ratio() * cb2).to_degrees();

        let to = Point::geo(lat2, lon2)?;
        Ok((to, self.azimuth(sg2, cg2, cb2)))
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use std::f64::consts::PI;

    #[test]
    fn inverse() -> Result<(), Error> {
        let ge = GreatEllipse::new(Ellipsoid::wgs1984());

        // A quarter of the equator
        let (s12, azi1, azi2) = ge.inverse(&Point::geo(0., 0.)?, &Point::geo(0., 90.)?);
        assert_float_eq!(s12, 10_018_754.171_394_622, abs <= 1e-6);
        assert_float_eq!(s12, PI / 2. * ge.ellipsoid().semimajor_axis(), abs <= 1e-6);
        assert_float_eq!(azi1, 90., abs <= 1e-12);
        assert_float_eq!(azi2, 90., abs <= 1e-12);

        // Copenhagen--Paris, both ways
        let cph = Point::geo(55., 12.)?;
        let par = Point::geo(49., 2.)?;
        let (s12, azi1, azi2) = ge.inverse(&cph, &par);
        assert_float_eq!(s12, 956_066.236_799_550_8, abs <= 1e-6);
        assert_float_eq!(azi1, -130.164_184_307_491_87, abs <= 1e-9);
        assert_float_eq!(azi2, -138.042_723_996_819_92, abs <= 1e-9);

        let (s21, azi1, azi2) = ge.inverse(&par, &cph);
        assert_float_eq!(s21, s12, abs <= 1e-6);
        assert_float_eq!(azi1, 41.957_276_003_180_084, abs <= 1e-9);
        assert_float_eq!(azi2, 49.835_815_692_508_156, abs <= 1e-9);
        Ok(())
    }

    #[test]
    fn meridians() -> Result<(), Error> {
        let ge = GreatEllipse::new(Ellipsoid::wgs1984());

        // Along a meridian, the great ellipse is the meridian ellipse
        let (s12, azi1, azi2) = ge.inverse(&Point::geo(0., 0.)?, &Point::geo(90., 0.)?);
        assert_float_eq!(s12, 10_001_965.729_312_72, abs <= 1e-6);
        assert_float_eq!(azi1, 0., abs <= 1e-12);
        assert_float_eq!(azi2, 0., abs <= 1e-12);

        let (s12, _, _) = ge.inverse(&Point::geo(-90., 0.)?, &Point::geo(90., 0.)?);
        assert_float_eq!(s12, 20_003_931.458_625_44, abs <= 1e-6);
        Ok(())
    }

    #[test]
    fn degenerate() -> Result<(), Error> {
        let ge = GreatEllipse::new(Ellipsoid::wgs1984());

        // Coincident points
        let cph = Point::geo(55., 12.)?;
        let (s12, azi1, azi2) = ge.inverse(&cph, &cph);
        assert_float_eq!(s12, 0., abs <= 1e-6);
        assert!(azi1.is_finite() && azi2.is_finite());

        let origin = Point::geo(0., 0.)?;
        assert_eq!(ge.inverse(&origin, &origin), (0., 0., 0.));

        // Antipodal points on the sphere: Half the circumference
        let sphere = GreatEllipse::new(Ellipsoid::sphere(6_371_000.)?);
        let (s12, azi1, azi2) = sphere.inverse(&Point::geo(10., 20.)?, &Point::geo(-10., -160.)?);
        assert_float_eq!(s12, PI * 6_371_000., abs <= 1e-6);
        assert!(azi1.is_finite() && azi2.is_finite());
        Ok(())
    }

    #[test]
    fn direct() -> Result<(), Error> {
        let ge = GreatEllipse::new(Ellipsoid::wgs1984());
        let cph = Point::geo(55., 12.)?;
        let par = Point::geo(49., 2.)?;

        let (s12, azi1, azi2) = ge.inverse(&cph, &par);
        let (to, azi) = ge.direct(&cph, azi1, s12)?;
        assert_float_eq!(to.lat(), 49., abs <= 1e-10);
        assert_float_eq!(to.lon(), 2., abs <= 1e-10);
        assert_float_eq!(azi, azi2, abs <= 1e-9);
        assert_eq!(to.height(), None);

        // Zero distance goes nowhere
        let (to, azi) = ge.direct(&par, 33., 0.)?;
        assert_float_eq!(to.lat(), 49., abs <= 1e-12);
        assert_float_eq!(to.lon(), 2., abs <= 1e-12);
        assert_float_eq!(azi, 33., abs <= 1e-12);

        // Crossing the antimeridian
        let (to, azi) = ge.direct(&Point::geo(0., 179.)?, 90., PI * 6_378_137. / 90.)?;
        assert_float_eq!(to.lat(), 0., abs <= 1e-12);
        assert_float_eq!(to.lon(), -179., abs <= 1e-9);
        assert_float_eq!(azi, 90., abs <= 1e-12);

        // Non-finite input
        assert!(matches!(
            ge.direct(&cph, f64::NAN, 1000.),
            Err(Error::Domain(..))
        ));
        assert!(matches!(
            ge.direct(&cph, 45., f64::INFINITY),
            Err(Error::Domain(..))
        ));
        Ok(())
    }

    #[test]
    fn polar_start() -> Result<(), Error> {
        // From the north pole, every direction is south, and the azimuth
        // is reckoned from the meridian of the starting longitude
        let ge = GreatEllipse::new(Ellipsoid::wgs1984());
        let pole = Point::geo(90., 0.)?;
        let (to, azi2) = ge.direct(&pole, -150., 1e6)?;
        assert_float_eq!(to.lat(), 81.046_232_815_950_6, abs <= 1e-9);
        assert_float_eq!(to.lon(), -30., abs <= 1e-9);
        assert_float_eq!(azi2.abs(), 180., abs <= 1e-9);

        let (s12, azi1, _) = ge.inverse(&pole, &to);
        assert_float_eq!(s12, 1e6, abs <= 1e-6);
        assert_float_eq!(azi1, -150., abs <= 1e-9);
        Ok(())
    }
}
