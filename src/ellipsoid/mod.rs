mod constants;
mod distances;

pub use distances::Distance;

use crate::math::taylor::horner;
use crate::Error;
use log::{trace, warn};

/// An ellipsoid of revolution, given by its semimajor axis, *a*, and
/// flattening, *f*.
///
/// The constructors guarantee *1 ≤ a ≤ 10²²* and *0 ≤ f ≤ 1/150*: the
/// series used by the [great ellipse](crate::GreatEllipse) solver are
/// validated for flattenings up to that of the [`srm_max`](Ellipsoid::srm_max)
/// test body only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    f: f64,
}

/// GRS80 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid::grs1980()
    }
}

/// Constructors for `Ellipsoid`
impl Ellipsoid {
    /// User defined ellipsoid.
    ///
    /// Flattenings too small to make a difference at double precision are
    /// set to 0, i.e. the result is a sphere.
    pub fn new(semimajor_axis: f64, flattening: f64) -> Result<Ellipsoid, Error> {
        if !(1. ..=1e22).contains(&semimajor_axis) {
            warn!("Ellipsoid: Bad semimajor axis: {semimajor_axis}");
            return Err(Error::Domain(
                "Ellipsoid::new",
                format!("a = {semimajor_axis}"),
            ));
        }
        if !(0. ..=1. / 150.).contains(&flattening) {
            warn!("Ellipsoid: Bad flattening: {flattening}");
            return Err(Error::Domain("Ellipsoid::new", format!("f = {flattening}")));
        }
        let mut f = flattening;
        if f < constants::SQRT_EPSILON {
            if f > 0. {
                trace!("Ellipsoid: flattening {f} snapped to 0");
            }
            f = 0.;
        }
        Ok(Ellipsoid {
            a: semimajor_axis,
            f,
        })
    }

    /// A sphere of radius `radius`
    pub fn sphere(radius: f64) -> Result<Ellipsoid, Error> {
        if !(1. ..=1e22).contains(&radius) {
            warn!("Ellipsoid: Bad radius: {radius}");
            return Err(Error::Domain("Ellipsoid::sphere", format!("r = {radius}")));
        }
        Ok(Ellipsoid { a: radius, f: 0. })
    }

    /// Predefined ellipsoid, given by name (case insensitive), or given as a
    /// string formatted (a, rf) tuple, e.g. "6378137, 298.25". A zero
    /// reciprocal flattening indicates a sphere.
    pub fn named(name: &str) -> Result<Ellipsoid, Error> {
        let mut name = name.trim();
        if let Some(&(_, full)) = constants::ALIASES
            .iter()
            .find(|alias| alias.0.eq_ignore_ascii_case(name))
        {
            name = full;
        }

        // Is it one of the builtins?
        if let Some(index) = constants::ELLIPSOID_LIST
            .iter()
            .position(|ellps| ellps.0.eq_ignore_ascii_case(name))
        {
            return Ok(Ellipsoid::from_list(index));
        }

        // Remove optional parenthesis
        let stripped = name
            .strip_prefix('(')
            .and_then(|n| n.strip_suffix(')'))
            .unwrap_or(name);

        // The "semimajor, reciprocal-flattening" form, e.g. "6378137, 298.3"
        let a_and_rf = stripped.split(',').collect::<Vec<_>>();
        if a_and_rf.len() == 2_usize {
            if let Ok(a) = a_and_rf[0].trim().parse::<f64>() {
                if let Ok(rf) = a_and_rf[1].trim().parse::<f64>() {
                    // EPSG convention: zero reciprocal flattening indicates zero flattening
                    let f = if rf != 0.0 { 1.0 / rf } else { rf };
                    return Ellipsoid::new(a, f);
                }
            }
        }

        warn!("Ellipsoid: Unknown ellipsoid: {name}");
        Err(Error::NotFound(
            String::from(name),
            String::from("Ellipsoid::named()"),
        ))
    }

    fn from_list(index: usize) -> Ellipsoid {
        let (_, a, f) = constants::ELLIPSOID_LIST[index];
        Ellipsoid { a, f }
    }

    /// The ellipsoid of the North American Datum 1927
    #[must_use]
    pub fn clarke1866() -> Ellipsoid {
        Ellipsoid::from_list(0)
    }

    /// The ellipsoid adopted by IUGG in 1924 (Madrid)
    #[must_use]
    pub fn international1924() -> Ellipsoid {
        Ellipsoid::from_list(1)
    }

    /// The World Geodetic System 1972 ellipsoid
    #[must_use]
    pub fn wgs1972() -> Ellipsoid {
        Ellipsoid::from_list(2)
    }

    /// The ellipsoid adopted by IUGG in 1967 (Lucerne)
    #[must_use]
    pub fn grs1967() -> Ellipsoid {
        Ellipsoid::from_list(3)
    }

    /// The ellipsoid adopted by IUGG in 1979 (Canberra)
    #[must_use]
    pub fn grs1980() -> Ellipsoid {
        Ellipsoid::from_list(4)
    }

    /// The World Geodetic System 1984 ellipsoid
    #[must_use]
    pub fn wgs1984() -> Ellipsoid {
        Ellipsoid::from_list(5)
    }

    /// The ellipsoid of the IERS Technical Note No. 32
    #[must_use]
    pub fn iers2003() -> Ellipsoid {
        Ellipsoid::from_list(6)
    }

    /// An ellipsoid with exaggerated flattening (f = 1/150), for testing
    /// the algorithms at the edge of their domain
    #[must_use]
    pub fn srm_max() -> Ellipsoid {
        Ellipsoid::from_list(7)
    }
}

impl Ellipsoid {
    // ----- Axes ------------------------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    // ----- Flattenings -----------------------------------------------------------

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// The second flattening, *f' = (a - b) / b*
    #[must_use]
    pub fn second_flattening(&self) -> f64 {
        self.f / (1.0 - self.f)
    }

    /// The third flattening, *n = (a - b) / (a + b) = f / (2 - f)*
    #[must_use]
    pub fn third_flattening(&self) -> f64 {
        self.f / (2.0 - self.f)
    }

    /// The aspect ratio, *b / a  =  1 - f  =  sqrt(1 - e²)*
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        1.0 - self.f
    }

    // ----- Eccentricities --------------------------------------------------------

    /// The squared eccentricity *e² = (a² - b²) / a²*.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.f * (2_f64 - self.f)
    }

    /// The eccentricity *e*
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }

    /// The squared second eccentricity *e'² = (a² - b²) / b² = e² / (1 - e²)*
    #[must_use]
    pub fn second_eccentricity_squared(&self) -> f64 {
        let es = self.eccentricity_squared();
        es / (1.0 - es)
    }

    /// The squared third eccentricity *e"² = (a² - b²) / (a² + b²)*
    #[must_use]
    pub fn third_eccentricity_squared(&self) -> f64 {
        let b_over_a = 1.0 - self.f;
        self.eccentricity_squared() / (1.0 + b_over_a * b_over_a)
    }

    // ----- Mean radii ------------------------------------------------------------

    /// The radius of a sphere with meridians of the same length as those of
    /// the ellipsoid.
    ///
    /// Uses Ramanujan's ([1914](crate::Bibliography::Ram14)) celebrated
    /// approximation to the perimeter of an ellipse.
    #[must_use]
    pub fn meridian_mean_radius(&self) -> f64 {
        let n = self.third_flattening();
        let t = 3. * n * n;
        self.a * (1. - self.f / 2.) * (1. + t / (10. + (4. - t).sqrt()))
    }

    /// The authalic radius, i.e. the radius of a sphere of the same surface
    /// area as the ellipsoid
    #[must_use]
    pub fn authalic_radius(&self) -> f64 {
        let es = self.eccentricity_squared();
        let series = horner(es, &constants::AUTHALIC_SERIES);
        self.a * ((1. + (1. - es) * series) / 2.).sqrt()
    }
}

// ----- Tests ---------------------------------------------------------------------
