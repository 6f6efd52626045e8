use crate::math::angular::normalize_longitude;
use crate::math::sincos_deg;
use crate::prelude::*;

/// Largest coordinate magnitude accepted by [`Geocentric::inverse`]
const CARTESIAN_LIMIT: f64 = 1e23;

/// Distances from the polar axis below this (meters) are taken to be on it
const POLAR_AXIS_TOLERANCE: f64 = 1e-12;

/// Relative residual of the normal equation accepted from the Halley steps
const RESIDUAL_TOLERANCE: f64 = 1e-12;

/// Halving the first quadrant this many times exhausts double precision
const BISECTION_STEPS: usize = 64;

/// Conversion between geographic and geocentric cartesian coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geocentric {
    ellps: Ellipsoid,
}

impl Geocentric {
    #[must_use]
    pub fn new(ellps: Ellipsoid) -> Geocentric {
        Geocentric { ellps }
    }

    #[must_use]
    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellps
    }

    /// Geographic to cartesian conversion. A missing height is taken as 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geodetic::prelude::*;
    /// # fn main() -> Result<(), Error> {
    /// let geocen = Geocentric::new(Ellipsoid::wgs1984());
    /// let xyz = geocen.forward(&Point::geo(0., 90.)?);
    /// assert_eq!(xyz, Cartesian::raw(0., 6_378_137., 0.));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    #[allow(non_snake_case)]
    pub fn forward(&self, point: &Point) -> Cartesian {
        let a = self.ellps.semimajor_axis();
        let es = self.ellps.eccentricity_squared();
        let h = point.height().unwrap_or(0.);

        let (sinphi, cosphi) = sincos_deg(point.lat());
        let (sinlam, coslam) = sincos_deg(point.lon());

        // Prime vertical radius of curvature
        let N = a / (1. - es * sinphi * sinphi).sqrt();

        Cartesian::raw(
            (N + h) * cosphi * coslam,
            (N + h) * cosphi * sinlam,
            (N * (1. - es) + h) * sinphi,
        )
    }

    /// Cartesian to geographic conversion, following
    /// [Fukushima (2006)](crate::Bibliography::Fuk06): Two Halley steps
    /// from a fixed starting value give the latitude to machine precision
    /// everywhere outside the evolute of the meridian ellipse. Points deep
    /// inside the ellipsoid, near its centre, have more than one normal, and
    /// fall back to a bisection for one of them. The height is then recovered
    /// by the formula of [Bowring (1985)](crate::Bibliography::Bow85).
    ///
    /// Coordinates must be finite, and no larger than 1e23 m in magnitude.
    #[allow(non_snake_case)] // make it possible to mimic math notation from original paper
    #[allow(clippy::many_single_char_names)] // ditto
    pub fn inverse(&self, cartesian: &Cartesian) -> Result<Point, Error> {
        let (x, y, z) = (cartesian.x(), cartesian.y(), cartesian.z());
        for c in [x, y, z] {
            if !(-CARTESIAN_LIMIT..=CARTESIAN_LIMIT).contains(&c) {
                return Err(Error::Domain(
                    "Geocentric::inverse",
                    format!("x = {x}, y = {y}, z = {z}"),
                ));
            }
        }

        let a = self.ellps.semimajor_axis();
        let ec = self.ellps.aspect_ratio();
        let es = self.ellps.eccentricity_squared();

        let lam = normalize_longitude(y.atan2(x).to_degrees());
        let p = x.hypot(y);

        // On the polar axis, the iteration has nothing to work with
        if p < POLAR_AXIS_TOLERANCE {
            let phi = if z < 0. { -90. } else { 90. };
            return Point::with_height(phi, lam, z.abs() - self.ellps.semiminor_axis());
        }

        // Normalized coordinates, and the starting value
        let P = p / a;
        let Z = ec * z.abs() / a;
        let mut S = Z;
        let mut C = ec * P;

        for _ in 0..2 {
            let A = S.hypot(C);
            let A3 = A * A * A;
            let D = Z * A3 + es * S * S * S;
            let F = P * A3 - es * C * C * C;
            let B = 1.5 * es * S * C * C * ((P * S - Z * C) * A - es * S * C);
            (S, C) = (D * F - B * S, F * F - B * C);

            // The iteration is homogeneous in (S, C). Rescale to avoid overflow
            let norm = S.hypot(C);
            S /= norm;
            C /= norm;
        }

        // Near the centre, inside the evolute, the Halley steps may leave the
        // first quadrant or stop short of a root. Take a normal by bisection
        let residual = normal_residual(P, Z, es, S, C);
        let converged = S >= 0. && C >= 0. && residual.abs() <= RESIDUAL_TOLERANCE * P.max(Z);
        if !converged {
            (S, C) = normal_by_bisection(P, Z, es);
        }

        let mut phi = S.atan2(ec * C).to_degrees();
        if z < 0. {
            phi = -phi;
        }

        // Bowring's height formula, well behaved at all latitudes
        let (sinphi, cosphi) = sincos_deg(phi);
        let N = a / (1. - es * sinphi * sinphi).sqrt();
        let h = p * cosphi + z * sinphi - a * a / N;

        Point::with_height(phi, lam, h)
    }
}

/// The normal equation of the ellipsoid in the normalized coordinates (P, Z),
/// for the unit pair (S, C). Zero when (S, C) gives the direction of a normal
/// through (P, Z).
#[allow(non_snake_case)]
fn normal_residual(P: f64, Z: f64, es: f64, S: f64, C: f64) -> f64 {
    P * S - Z * C - es * S * C
}

/// The residual is -Z at 0 and P at 90 degrees, so there is always a root in
/// the first quadrant.
#[allow(non_snake_case)]
fn normal_by_bisection(P: f64, Z: f64, es: f64) -> (f64, f64) {
    let mut lo = 0_f64;
    let mut hi = std::f64::consts::FRAC_PI_2;
    for _ in 0..BISECTION_STEPS {
        let mid = 0.5 * (lo + hi);
        let (S, C) = mid.sin_cos();
        if normal_residual(P, Z, es, S, C) < 0. {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo.sin_cos()
}

// ----- Tests ---------------------------------------------------------------------
