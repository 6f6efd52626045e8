use crate::Error;

/// A pair of geographic coordinates, latitude and longitude in degrees,
/// with an optional ellipsoidal height in meters.
///
/// The constructors guarantee that the latitude is in [-90°, 90°], and the
/// longitude in [-180°, 180°].
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Point {
    lat: f64,
    lon: f64,
    height: Option<f64>,
}

// ----- C O N S T R U C T O R S ---------------------------------------------

impl Point {
    /// A `Point` from latitude/longitude, in degrees
    pub fn geo(latitude: f64, longitude: f64) -> Result<Point, Error> {
        if !(-90. ..=90.).contains(&latitude) {
            return Err(Error::Domain("Point::geo", format!("lat = {latitude}")));
        }
        if !(-180. ..=180.).contains(&longitude) {
            return Err(Error::Domain("Point::geo", format!("lon = {longitude}")));
        }
        Ok(Point {
            lat: latitude,
            lon: longitude,
            height: None,
        })
    }

    /// A `Point` from latitude/longitude in degrees, and height in meters
    pub fn with_height(latitude: f64, longitude: f64, height: f64) -> Result<Point, Error> {
        if !height.is_finite() {
            return Err(Error::Domain("Point::with_height", format!("h = {height}")));
        }
        let mut point = Point::geo(latitude, longitude)?;
        point.height = Some(height);
        Ok(point)
    }
}

// ----- A C C E S S O R S ---------------------------------------------------

impl Point {
    #[must_use]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[must_use]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// The ellipsoidal height, if given
    #[must_use]
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// Latitude and longitude, in that order
    #[must_use]
    pub fn geo_pair(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

// ----- T E S T S ---------------------------------------------------
