//! Geometric-unit conversions.

/// One solar mass expressed in seconds (G M_sun / c^3).
pub const MSUN_S: f64 = 4.925502303934785e-6;

/// Convert a mass in solar masses to geometric units (seconds).
pub fn solar_masses_to_seconds(mass: f64) -> f64 {
    mass * MSUN_S
}
