/// Snyder (1987) eq. 14-15, PROJ's pj_msfn(): the radius of the parallel
/// at latitude 𝜙, in units of the semimajor axis.
///
/// Inputs:
///   (sin 𝜙, cos 𝜙): trigs of geographic latitude
///   es: squared eccentricity of the ellipsoid
pub fn msfn(sincos: (f64, f64), es: f64) -> f64 {
    sincos.1 / (1. - sincos.0 * sincos.0 * es).sqrt()
}

/// Snyder (1987) eq. 3-12, PROJ's pj_qsfn(): the authalic "q" function,
/// proportional to the sine of the authalic latitude.
///
/// On the sphere the general expression degenerates to 0/0, so we return the
/// limiting value 2 sin 𝜙 for eccentricities below 1e-7.
pub fn qs(sinphi: f64, e: f64) -> f64 {
    let es = e * e;
    let one_es = 1.0 - es;

    if e < 1e-7 {
        return 2.0 * sinphi;
    }

    let con = e * sinphi;
    let div1 = 1.0 - con * con;
    let div2 = 1.0 + con;

    one_es * (sinphi / div1 - (0.5 / e) * ((1. - con) / div2).ln())
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authalic_q() {
        // At the pole, q is 1 - (1 - e²)/2e · ln((1 - e)/(1 + e))
        let e: f64 = 0.081_819_190_842_621_5;
        let es = e * e;
        let qp = 1. - (1. - es) / (2. * e) * ((1. - e) / (1. + e)).ln();
        assert!((qs(1., e) - qp).abs() < 1e-14);
        assert_eq!(qs(0., e), 0.);
        assert!((qs(-0.5, e) + qs(0.5, e)).abs() < 1e-15);

        // The sphere
        assert_eq!(qs(1., 0.), 2.);
        assert_eq!(qs(0.5, 1e-9), 1.);
    }

    #[test]
    fn parallel_radius() {
        assert_eq!(msfn((0., 1.), 0.0067), 1.);
        assert_eq!(msfn((1., 0.), 0.0067), 0.);
        let (s, c) = 60_f64.to_radians().sin_cos();
        assert!((msfn((s, c), 0.) - 0.5).abs() < 1e-15);
    }
}
