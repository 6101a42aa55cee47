//! Terminal-eccentricity boundary solve.

use crate::error::Result;
use crate::secant::{SecantParams, SecantSolution, solve_secant};
use crate::tables::OrbitTables;

/// Residual tolerance for the boundary condition.
const TOLERANCE: f64 = 1e-3;

/// Solve for the terminal eccentricity e_fin at which the validity
/// condition y(e) - 1/(3(1+e)) = 0 is first met.
///
/// Below e_fin the post-Newtonian description of the orbit breaks down,
/// so no harmonic is sampled past it. Seeded at the lower edge of the
/// interpolation domain with a +1% second point.
pub fn solve_terminal_eccentricity(tables: &OrbitTables) -> Result<SecantSolution> {
    let x1 = tables.e_last();
    let x0 = x1 + x1 / 100.0;
    solve_secant(
        |e| Ok(tables.frequency_parameter(e)? - 1.0 / (3.0 * (1.0 + e))),
        x1,
        x0,
        &SecantParams::new(TOLERANCE),
    )
}
