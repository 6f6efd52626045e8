/// Name, semimajor axis, flattening
#[rustfmt::skip]
pub const ELLIPSOID_LIST: [(&str, f64, f64); 8] = [
    ("Clarke1866",        6_378_206.4,   (6_378_206.4 - 6_356_583.8) / 6_378_206.4),
    ("International1924", 6_378_388.0,   1. / 297.),
    ("WGS1972",           6_378_135.0,   1. / 298.26),
    ("GRS1967",           6_378_160.0,   1. / 298.247_167_427),
    ("GRS1980",           6_378_137.0,   1. / 298.257_222_101),
    ("WGS1984",           6_378_137.0,   1. / 298.257_223_563),
    ("IERS2003",          6_378_136.6,   1. / 298.256_42),
    ("SRMmax",            6_400_000.0,   1. / 150.),
];

/// Common aliases for the preset names
#[rustfmt::skip]
pub const ALIASES: [(&str, &str); 5] = [
    ("clrk66", "Clarke1866"),
    ("intl",   "International1924"),
    ("WGS72",  "WGS1972"),
    ("GRS80",  "GRS1980"),
    ("WGS84",  "WGS1984"),
];

/// Coefficients of the series Σ e²ᵏ/(2k + 1), k = 0..7, in ascending order.
/// Used for the authalic radius.
pub const AUTHALIC_SERIES: [f64; 8] = [
    1.,
    1. / 3.,
    1. / 5.,
    1. / 7.,
    1. / 9.,
    1. / 11.,
    1. / 13.,
    1. / 15.,
];

/// Flattenings below √ε are indistinguishable from the sphere at double precision.
/// Rust cannot const-evaluate square roots, so we give the IEEE-64 value.
pub const SQRT_EPSILON: f64 = 0.000_000_014_901_161_193_847_656;
