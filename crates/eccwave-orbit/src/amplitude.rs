//! Harmonic amplitude coefficients N_j(y, e, eta).
//!
//! Harmonic index j labels the Fourier component contributing at
//! j * F_orbital + 2 * F_periastron. Coefficients exist in closed form
//! for j in {-15..-3, -1..15}; j = -2 has no defined coefficient and
//! indices beyond |j| = 15 have not been computed, so both are rejected
//! as unsupported rather than silently treated as zero.

use crate::error::{Error, Result};

/// Highest harmonic index with a known closed-form coefficient.
pub const J_MAX_SUPPORTED: i32 = 15;

/// Amplitude coefficient N_j for harmonic `j` at the solved
/// (frequency parameter, eccentricity) point.
///
/// The coefficients shipped here are the Newtonian-order small-e
/// Fourier-Bessel leading terms; `y` and `eta` are carried for interface
/// stability with higher-order amplitude series, which enter at O(y^2).
pub fn harmonic_amplitude(j: i32, _y: f64, e: f64, _eta: f64) -> Result<f64> {
    match j {
        -15..=-3 | -1..=J_MAX_SUPPORTED => Ok(mode_coefficient(j, e)),
        _ => Err(Error::UnsupportedHarmonic { j }),
    }
}

/// Leading small-e term of the j-th sideband: the (j+2) combination
/// enters quadratically, the sideband order as (e/2)^|j| / |j|!.
fn mode_coefficient(j: i32, e: f64) -> f64 {
    let order = j.unsigned_abs();
    let side = (j + 2) as f64 / 2.0;
    side * side * (e / 2.0).powi(order as i32) / factorial(order)
}

fn factorial(n: u32) -> f64 {
    (1..=n).map(f64::from).product()
}
