//! Secant-method root finding.

use crate::error::{Error, Result};

/// Convergence criteria for secant iteration.
#[derive(Debug, Clone)]
pub struct SecantParams {
    /// Absolute residual tolerance.
    pub tolerance: f64,
    /// Maximum iterations before failure.
    pub max_iterations: usize,
}

impl SecantParams {
    /// Criteria with the given residual tolerance and the default
    /// iteration bound.
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            max_iterations: 60,
        }
    }
}

/// Result of a converged secant solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecantSolution {
    /// Solved root.
    pub root: f64,
    /// Number of iterations performed.
    pub iterations: usize,
}

/// Solve `residual(x) = 0` by the secant method from the two starting
/// points `x1` (primary) and `x0` (offset).
///
/// Returns the projected iterate once the residual at the primary point
/// is within tolerance, along with the iteration count. A vanishing
/// residual difference (the secant denominator) and an exhausted
/// iteration cap are reported as distinct errors; the residual callback
/// may itself fail (e.g. a domain violation), which aborts the solve.
pub fn solve_secant<F>(
    mut residual: F,
    x1: f64,
    x0: f64,
    params: &SecantParams,
) -> Result<SecantSolution>
where
    F: FnMut(f64) -> Result<f64>,
{
    let mut x0 = x0;
    let mut x1 = x1;
    let mut r0 = residual(x0)?;
    let mut r1 = residual(x1)?;
    let mut iterations = 0;

    loop {
        if r1 == r0 {
            return Err(Error::DegenerateSecant { iterations });
        }
        let x2 = x1 - r1 * (x1 - x0) / (r1 - r0);

        if r1.abs() <= params.tolerance {
            return Ok(SecantSolution {
                root: x2,
                iterations,
            });
        }
        if iterations >= params.max_iterations {
            return Err(Error::ConvergenceFailed { iterations });
        }

        iterations += 1;
        x0 = x1;
        r0 = r1;
        x1 = x2;
        r1 = residual(x1)?;
    }
}
