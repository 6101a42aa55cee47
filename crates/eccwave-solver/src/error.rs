//! Error types for eccwave-solver.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("convergence failed after {iterations} iterations")]
    ConvergenceFailed { iterations: usize },

    #[error("secant denominator vanished after {iterations} iterations")]
    DegenerateSecant { iterations: usize },

    #[error("value {value} outside interpolation support [{min}, {max}]")]
    OutOfDomain { value: f64, min: f64, max: f64 },

    #[error("samples are not strictly monotonic: {0}")]
    NonMonotonic(&'static str),

    #[error("table construction failed: {0}")]
    TableBuild(&'static str),

    #[error("{0} queried before table initialization")]
    NotInitialized(&'static str),

    #[error(transparent)]
    Harmonic(#[from] eccwave_orbit::Error),

    #[error(transparent)]
    Config(#[from] eccwave_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
