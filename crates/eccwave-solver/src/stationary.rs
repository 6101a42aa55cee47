//! Stationary-phase inversion.
//!
//! For each harmonic j, one dominant eccentricity contributes most of
//! the signal at a given frequency; it solves
//! j * F_orb(e) + 2 * F_peri(e) = f. Within a harmonic's valid range the
//! stationary eccentricity varies smoothly and monotonically with
//! frequency, so seeding each solve from the previous bin's solution
//! converges in a handful of iterations without any bracketing logic.

use crate::error::Result;
use crate::secant::{SecantParams, SecantSolution, solve_secant};
use crate::tables::OrbitTables;

/// Residual tolerance for the inversion, in Hz.
const TOLERANCE: f64 = 1e-2;

/// Offset of the secant's second point below the seed.
const SEED_OFFSET: f64 = 1.0 / 50.0;

/// Stationary frequency of harmonic `j` at eccentricity `e`:
/// j * F_orb(e) + 2 * F_peri(e).
pub fn stationary_frequency(tables: &OrbitTables, e: f64, j: i32) -> Result<f64> {
    Ok(j as f64 * tables.orbital_frequency(e)? + 2.0 * tables.periastron_frequency(e)?)
}

/// Minus-branch stationary-phase residual at eccentricity `e`.
pub fn cond_minus(tables: &OrbitTables, e: f64, f: f64, j: i32) -> Result<f64> {
    Ok(stationary_frequency(tables, e, j)? - f)
}

/// Plus-branch residual, with both frequency terms sign-flipped.
pub fn cond_plus(tables: &OrbitTables, e: f64, f: f64, j: i32) -> Result<f64> {
    Ok(-(j as f64) * tables.orbital_frequency(e)? - 2.0 * tables.periastron_frequency(e)? - f)
}

/// Solve the minus-branch condition for the eccentricity at which
/// harmonic `j` is stationary at frequency `f`.
///
/// `seed` is the warm start: the previous bin's solution within a
/// harmonic's sweep, or e0 at the start of one. The second secant point
/// sits 2% below the seed.
pub fn invert_minus(tables: &OrbitTables, f: f64, j: i32, seed: f64) -> Result<SecantSolution> {
    solve_secant(
        |e| cond_minus(tables, e, f, j),
        seed,
        seed - seed * SEED_OFFSET,
        &SecantParams::new(TOLERANCE),
    )
}

/// Plus-branch counterpart of [`invert_minus`].
///
/// Defined for symmetry as a library primitive; the waveform driver only
/// ever drives the minus branch.
pub fn invert_plus(tables: &OrbitTables, f: f64, j: i32, seed: f64) -> Result<SecantSolution> {
    solve_secant(
        |e| cond_plus(tables, e, f, j),
        seed,
        seed - seed * SEED_OFFSET,
        &SecantParams::new(TOLERANCE),
    )
}
