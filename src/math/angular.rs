/// Normalize the direction `(y, x)` to the unit circle, returning the pair
/// `(sin, cos)` of the angle it represents.
///
/// Directions too short to carry any information (norm below machine epsilon)
/// are conventionally taken to be the zero angle, `(0, 1)`. Hence `hat` never
/// produces NaN from finite input.
pub fn hat(y: f64, x: f64) -> (f64, f64) {
    let norm = y.hypot(x);
    if norm < f64::EPSILON {
        return (0., 1.);
    }
    (y / norm, x / norm)
}

/// Sine and cosine of an angle given in degrees.
///
/// The argument is reduced to [-45°, 45°] before conversion to radians, so
/// multiples of 90° come out exact, e.g. `sincos_deg(90.) == (1., 0.)`.
pub fn sincos_deg(angle: f64) -> (f64, f64) {
    let r = angle % 360.;
    let q = (r / 90.).round();
    let (s, c) = (r - 90. * q).to_radians().sin_cos();
    // NaN input makes q NaN, which casts to quadrant 0 and keeps the NaNs
    let (s, c) = match (q as i64).rem_euclid(4) {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    };
    // Get rid of negative zeros
    (s + 0., c + 0.)
}

/// Reduce a longitude (or longitude difference) to the half open range (-180°, 180°],
/// given that it is in [-360°, 360°] to begin with.
pub fn normalize_longitude(longitude: f64) -> f64 {
    if longitude <= -180. {
        return longitude + 360.;
    }
    if longitude > 180. {
        return longitude - 360.;
    }
    longitude
}

// ----- Tests ---------------------------------------------------------------------
