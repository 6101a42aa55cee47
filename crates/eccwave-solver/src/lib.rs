//! Waveform solver for eccwave.
//!
//! This crate turns a source configuration into the frequency-domain
//! signal of an eccentric binary:
//! - cubic-spline interpolation tables relating eccentricity, orbital
//!   frequency and periastron-advance frequency
//! - secant root finding for the terminal eccentricity and the
//!   per-harmonic stationary-phase condition
//! - a harmonic sampling scheme bounding each harmonic to its physically
//!   valid frequency range
//! - the amplitude/phase assembler and the waveform driver

pub mod boundary;
pub mod engine;
pub mod error;
pub mod scheme;
pub mod secant;
pub mod spline;
pub mod stationary;
pub mod tables;

pub use boundary::solve_terminal_eccentricity;
pub use engine::{SolveMetrics, WaveformEngine, WaveformResult};
pub use error::{Error, Result};
pub use scheme::{BinRange, HarmonicScheme, cutoff_eccentricity, harmonic_ceiling};
pub use secant::{SecantParams, SecantSolution, solve_secant};
pub use spline::CubicSpline;
pub use stationary::{cond_minus, cond_plus, invert_minus, invert_plus, stationary_frequency};
pub use tables::OrbitTables;
