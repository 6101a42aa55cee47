//! # eccwave
//!
//! Frequency-domain gravitational waveforms of eccentric compact-object
//! binaries, expressed as a sum of harmonics of the orbital frequency,
//! each harmonic sampled on a uniform frequency grid.
//!
//! The engine builds monotone interpolation tables relating eccentricity,
//! orbital frequency and periastron-advance frequency, solves the
//! per-harmonic stationary-phase condition by warm-started secant
//! iteration, bounds each harmonic to its physically valid frequency
//! range, and assembles complex amplitude and phase into per-harmonic
//! frequency series.
//!
//! ## Quick start
//!
//! ```rust
//! use eccwave::prelude::*;
//!
//! let config = SourceConfig {
//!     e0: 0.1,
//!     p0: 50.0,
//!     total_mass: 20.0,
//!     eta: 0.25,
//!     psi: 3.0 / 7.0,
//!     phi: 3.0 / 7.0,
//!     theta: 3.0 / 7.0,
//!     iota: 3.0 / 7.0,
//!     beta: 3.0 / 7.0,
//!     band: FrequencyBand::new(10.0, 20.0, 0.5),
//! };
//!
//! let mut engine = WaveformEngine::new(config).unwrap();
//! engine.init_tables(400).unwrap();
//!
//! let result = engine.waveform().unwrap();
//! for j in result.scheme().harmonics() {
//!     if let Some(range) = result.scheme().range(j) {
//!         println!("harmonic {j}: bins {}..={}", range.first, range.last);
//!     }
//! }
//! ```

// Re-export the member crates.
pub use eccwave_core as core;
pub use eccwave_orbit as orbit;
pub use eccwave_solver as solver;

// ============================================================================
// Convenient re-exports from eccwave_core
// ============================================================================

pub use eccwave_core::{
    // Configuration
    FrequencyBand,
    Orientation,
    SourceConfig,
    // Errors
    Error as CoreError,
};

// ============================================================================
// Convenient re-exports from eccwave_orbit
// ============================================================================

pub use eccwave_orbit::{
    // Series provider
    OrbitalSeries,
    PhaseTerms,
    // Amplitude library
    harmonic_amplitude,
    // Errors
    Error as OrbitError,
};

// ============================================================================
// Convenient re-exports from eccwave_solver
// ============================================================================

pub use eccwave_solver::{
    BinRange,
    CubicSpline,
    // Scheme
    HarmonicScheme,
    // Tables
    OrbitTables,
    // Secant primitives
    SecantParams,
    SecantSolution,
    SolveMetrics,
    // Engine
    WaveformEngine,
    WaveformResult,
    // Errors
    Error as SolverError,
    cutoff_eccentricity,
    harmonic_ceiling,
    // Stationary-phase primitives
    invert_minus,
    invert_plus,
    solve_secant,
    solve_terminal_eccentricity,
    stationary_frequency,
};

// ============================================================================
// Re-export commonly used external types
// ============================================================================

/// Re-export of num_complex's Complex type.
pub use num_complex::Complex;

/// Re-export of nalgebra's dynamic vector type.
pub use nalgebra::DVector;

/// Prelude module containing commonly used types.
///
/// ```rust
/// use eccwave::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Complex, FrequencyBand, HarmonicScheme, OrbitTables, OrbitalSeries, SolveMetrics,
        SourceConfig, WaveformEngine, WaveformResult,
    };
}
