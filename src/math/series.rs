/// The order of the trigonometric series used for great ellipse distances
pub const SERIES_ORDER: usize = 8;

// --- Taylor series polynomium evaluation ----

pub mod taylor {
    /// Evaluate Σ cᵢ · xⁱ using Horner's scheme.
    /// Coefficients in ascending order, i.e. constant term first
    pub fn horner(arg: f64, coefficients: &[f64]) -> f64 {
        let mut coefficients = coefficients.iter().rev();
        let Some(c) = coefficients.next() else {
            return 0.;
        };
        let mut value = *c;
        for c in coefficients {
            value = value.mul_add(arg, *c);
        }
        value
    }

    /// Evaluate the polynomial with coefficients given in descending order,
    /// i.e. highest order term first, as is the convention of the
    /// [elliptic](super::elliptic) coefficient tables.
    pub fn polyval(arg: f64, coefficients: &[f64]) -> f64 {
        coefficients
            .iter()
            .fold(0_f64, |value, c| value.mul_add(arg, *c))
    }
}

// --- Fourier series summation using Clenshaw's recurrence ---

pub mod fourier {
    /// Evaluate Σ cᵢ sin( 2i · σ ), for i ∈ {order, ... , 1}, using Clenshaw summation.
    ///
    /// The angle is given by its normalized trigonometric factors `(sin σ, cos σ)`,
    /// and `coefficients[0]` is the coefficient of the sin(2σ) term.
    pub fn sin_even(trig: (f64, f64), coefficients: &[f64]) -> f64 {
        let (sin_arg, cos_arg) = trig;
        // 2·cos(2σ)
        let x = 2. * (cos_arg - sin_arg) * (cos_arg + sin_arg);
        let mut c0 = 0.0;
        let mut c1 = 0.0;

        for c in coefficients.iter().rev() {
            (c1, c0) = (c0, x.mul_add(c0, c - c1));
        }
        // sin(2σ)·c0
        2. * sin_arg * cos_arg * c0
    }
}

// --- Series for the elliptic integral of the second kind ---

/// Coefficients for the distance series of [Karney 2013](crate::Bibliography::Kar13),
/// expanded in the small parameter ε to 8th order.
///
/// The tables are flattened sequences of polynomials in ε², each in descending
/// order and followed by its common divisor.
pub mod elliptic {
    use super::taylor::polyval;
    use super::SERIES_ORDER;

    /// A₁·(1 - ε) - 1, as a polynomial in ε²
    const A1M1: [f64; 6] = [25., 64., 256., 4096., 0., 16384.];

    /// The C₁ₗ coefficients, for l = 1..8
    #[rustfmt::skip]
    const C1: [f64; 28] = [
        19., -64., 384., -1024., 2048.,
        7., -18., 128., -256., 4096.,
        -9., 72., -128., 6144.,
        -11., 96., -160., 16384.,
        35., -56., 10240.,
        9., -14., 4096.,
        -33., 14336.,
        -429., 262144.,
    ];

    /// The C₁'ₗ coefficients of the inverse series, for l = 1..8
    #[rustfmt::skip]
    const C1P: [f64; 28] = [
        -4879., 9840., -20736., 36864., 73728.,
        -86171., 120150., -142080., 115200., 368640.,
        8703., -7200., 3712., 12288.,
        1082857., -688608., 258720., 737280.,
        -141115., 41604., 92160.,
        -2200311., 533134., 860160.,
        459485., 516096.,
        109167851., 82575360.,
    ];

    /// The scale factor A₁ - 1
    pub fn a1m1(eps: f64) -> f64 {
        let m = SERIES_ORDER / 2;
        let t = polyval(eps * eps, &A1M1[..=m]) / A1M1[m + 1];
        (t + eps) / (1. - eps)
    }

    /// The coefficients, C₁ₗ, of the series for distance given arc length on
    /// the auxiliary sphere. `c1(eps)[l - 1]` is the coefficient for order `l`
    pub fn c1(eps: f64) -> [f64; SERIES_ORDER] {
        coefficients(eps, &C1)
    }

    /// The coefficients, C₁'ₗ, of the series for arc length on the auxiliary
    /// sphere given distance
    pub fn c1p(eps: f64) -> [f64; SERIES_ORDER] {
        coefficients(eps, &C1P)
    }

    // Each order l is a polynomial of degree (N - l)/2 in ε², scaled by εˡ
    fn coefficients(eps: f64, table: &[f64]) -> [f64; SERIES_ORDER] {
        let mut result = [0.; SERIES_ORDER];
        let eps2 = eps * eps;
        let mut d = eps;
        let mut offset = 0;
        for (l, c) in (1..=SERIES_ORDER).zip(result.iter_mut()) {
            let m = (SERIES_ORDER - l) / 2;
            *c = d * polyval(eps2, &table[offset..=offset + m]) / table[offset + m + 1];
            offset += m + 2;
            d *= eps;
        }
        result
    }
}

// ----- Tests ---------------------------------------------------------------------
