//! Standard normal distribution.

use sc_core::Real;
use std::f64::consts::PI;

/// The standard normal probability density `φ(x) = exp(-x²/2) / √(2π)`.
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// The standard normal cumulative distribution function Φ(x).
///
/// Rational approximation of Abramowitz & Stegun 26.2.17; the maximum
/// absolute error is below 7.5e-8.
pub fn normal_cdf(x: Real) -> Real {
    if x == 0.0 {
        return 0.5;
    }
    const B: [f64; 5] = [
        0.319_381_530,
        -0.356_563_782,
        1.781_477_937,
        -1.821_255_978,
        1.330_274_429,
    ];
    let t = 1.0 / (1.0 + 0.231_641_9 * x.abs());
    let poly = t * (B[0] + t * (B[1] + t * (B[2] + t * (B[3] + t * B[4]))));
    let tail = poly * normal_pdf(x);
    if x > 0.0 {
        1.0 - tail
    } else {
        tail
    }
}
