//! Numerical building blocks shared by the solvers and the projections

/// The authalic and parallel radius functions of the conical projections.
pub mod ancillary;

/// Angles as normalized (sin, cos) pairs, and exact degree trigonometry.
pub mod angular;

/// Polynomial and trigonometric series, and the great ellipse series coefficients
pub mod series;
pub use series::{elliptic, fourier, taylor};

pub use angular::{hat, sincos_deg};
