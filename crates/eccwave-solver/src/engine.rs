//! Waveform engine: construction, diagnostics and the harmonic driver.

use std::f64::consts::{FRAC_PI_4, PI};

use num_complex::Complex;
use rayon::prelude::*;

use eccwave_core::{Orientation, SourceConfig};
use eccwave_orbit::{OrbitalSeries, harmonic_amplitude};

use crate::boundary::solve_terminal_eccentricity;
use crate::error::{Error, Result};
use crate::scheme::HarmonicScheme;
use crate::secant::SecantSolution;
use crate::stationary::{invert_minus, invert_plus};
use crate::tables::OrbitTables;

/// Aggregated solver diagnostics for one waveform generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveMetrics {
    /// Number of stationary-phase inversions performed.
    pub inversions: usize,
    /// Total secant iterations across all inversions.
    pub secant_iterations: usize,
}

/// The assembled frequency-domain waveform.
///
/// A dense 2-D complex array indexed by harmonic offset (harmonic j maps
/// to offset j + 1) and frequency-bin index, sized to the full band.
/// Cells outside a harmonic's valid range stay zero; the scheme is
/// carried alongside as the explicit validity mask.
#[derive(Debug, Clone)]
pub struct WaveformResult {
    data: Vec<Vec<Complex<f64>>>,
    scheme: HarmonicScheme,
    metrics: SolveMetrics,
}

impl WaveformResult {
    /// Number of frequency bins per harmonic row.
    pub fn num_bins(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    /// Highest harmonic index.
    pub fn j_max(&self) -> i32 {
        self.scheme.j_max()
    }

    /// Full row of harmonic `j`, including unpopulated zero cells.
    pub fn harmonic(&self, j: i32) -> Option<&[Complex<f64>]> {
        if j < -1 || j > self.scheme.j_max() {
            return None;
        }
        Some(&self.data[(j + 1) as usize])
    }

    /// One cell of the dense array.
    pub fn sample(&self, j: i32, bin: usize) -> Option<Complex<f64>> {
        self.harmonic(j)?.get(bin).copied()
    }

    /// Whether cell (j, bin) was actually populated by the driver.
    pub fn is_populated(&self, j: i32, bin: usize) -> bool {
        self.scheme.is_populated(j, bin)
    }

    /// The sampling scheme used to populate the array.
    pub fn scheme(&self) -> &HarmonicScheme {
        &self.scheme
    }

    /// Solver diagnostics.
    pub fn metrics(&self) -> SolveMetrics {
        self.metrics
    }
}

/// Frequency-domain waveform engine for one eccentric binary.
///
/// Construction derives the series coefficients and the orientation
/// prefactor; [`WaveformEngine::init_tables`] must run before any query
/// or waveform generation (strict build-then-query ordering).
#[derive(Debug)]
pub struct WaveformEngine {
    config: SourceConfig,
    series: OrbitalSeries,
    mass: f64,
    prefactor: Complex<f64>,
    tables: Option<OrbitTables>,
    e_fin: Option<f64>,
}

impl WaveformEngine {
    /// Validate the configuration and derive the constant quantities.
    pub fn new(config: SourceConfig) -> Result<Self> {
        config.validate()?;
        let y0 = config.frequency_parameter();
        let mass = config.mass_seconds();
        let series = OrbitalSeries::new(config.e0, y0, config.eta);
        let orientation = Orientation::from_fractions(
            config.psi,
            config.phi,
            config.theta,
            config.iota,
            config.beta,
        );
        let prefactor = orientation.amplitude_prefactor(config.eta, mass);

        Ok(Self {
            config,
            series,
            mass,
            prefactor,
            tables: None,
            e_fin: None,
        })
    }

    /// Build the interpolation tables from `n` eccentricity samples and
    /// solve the terminal eccentricity.
    pub fn init_tables(&mut self, n: usize) -> Result<()> {
        let tables = OrbitTables::build(&self.series, self.mass, n)?;
        let e_fin = solve_terminal_eccentricity(&tables)?;
        log::debug!(
            "terminal eccentricity {:.6} after {} iterations",
            e_fin.root,
            e_fin.iterations
        );
        self.tables = Some(tables);
        self.e_fin = Some(e_fin.root);
        Ok(())
    }

    /// The source configuration.
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// The derived series coefficients.
    pub fn series(&self) -> &OrbitalSeries {
        &self.series
    }

    fn tables(&self) -> Result<&OrbitTables> {
        self.tables
            .as_ref()
            .ok_or(Error::NotInitialized("interpolation tables"))
    }

    /// Orbital (mean-motion) frequency at eccentricity `e`, in Hz.
    pub fn orbital_frequency(&self, e: f64) -> Result<f64> {
        self.tables()?.orbital_frequency(e)
    }

    /// Periastron-advance frequency at eccentricity `e`, in Hz.
    pub fn periastron_frequency(&self, e: f64) -> Result<f64> {
        self.tables()?.periastron_frequency(e)
    }

    /// Frequency parameter y at eccentricity `e`.
    pub fn frequency_parameter(&self, e: f64) -> Result<f64> {
        self.tables()?.frequency_parameter(e)
    }

    /// Eccentricity at which the orbital frequency equals `f`.
    pub fn eccentricity_at_frequency(&self, f: f64) -> Result<f64> {
        self.tables()?.eccentricity_at_frequency(f)
    }

    /// Terminal eccentricity solved at table initialization.
    pub fn terminal_eccentricity(&self) -> Result<f64> {
        self.e_fin
            .ok_or(Error::NotInitialized("terminal eccentricity"))
    }

    /// Plan the per-harmonic bin ranges over the configured band.
    pub fn plan_scheme(&self) -> Result<HarmonicScheme> {
        HarmonicScheme::plan(
            self.tables()?,
            &self.config.band,
            self.config.e0,
            self.terminal_eccentricity()?,
        )
    }

    /// Diagnostic entry to the minus-branch stationary-phase inversion.
    pub fn stationary_eccentricity(&self, f: f64, j: i32, seed: f64) -> Result<SecantSolution> {
        invert_minus(self.tables()?, f, j, seed)
    }

    /// Plus-branch counterpart; a library primitive the waveform driver
    /// never drives.
    pub fn stationary_eccentricity_plus(
        &self,
        f: f64,
        j: i32,
        seed: f64,
    ) -> Result<SecantSolution> {
        invert_plus(self.tables()?, f, j, seed)
    }

    /// One frequency-domain sample of harmonic `j` at frequency `f`,
    /// assembled from the solved eccentricity `e`.
    fn assemble(&self, tables: &OrbitTables, e: f64, f: f64, j: i32) -> Result<Complex<f64>> {
        let y = tables.frequency_parameter(e)?;
        let nj = harmonic_amplitude(j, y, e, self.config.eta)?;

        let jf = j as f64;
        let e2 = e * e;
        let norm = (1.0 / ((jf + 2.0) * (96.0 + 292.0 * e2 + 37.0 * e2 * e2))).sqrt();
        let amp = self.prefactor * (norm * y.powf(-3.5) * nj);

        let terms = self.series.phase_terms(e);
        let phase = 2.0 * PI * f * self.mass * terms.time
            - FRAC_PI_4
            - (jf * terms.periastron + 2.0 * terms.mean_anomaly);

        Ok(amp * Complex::new(phase.cos(), phase.sin()))
    }

    /// Generate the full waveform.
    ///
    /// Harmonic sweeps are independent and run in parallel; within one
    /// harmonic the bins are swept in order, each inversion warm-started
    /// from the previous bin's solution (seeded at e0 for the first).
    pub fn waveform(&self) -> Result<WaveformResult> {
        let tables = self.tables()?;
        let scheme = self.plan_scheme()?;
        let band = self.config.band;
        let num_bins = band.num_bins();
        let j_max = scheme.j_max();

        let rows: Vec<(Vec<Complex<f64>>, SolveMetrics)> = (-1..j_max + 1)
            .into_par_iter()
            .map(|j| {
                let mut row = vec![Complex::new(0.0, 0.0); num_bins];
                let mut metrics = SolveMetrics::default();
                if let Some(range) = scheme.range(j) {
                    let mut seed = self.config.e0;
                    for bin in range.first..=range.last {
                        let f = band.frequency(bin);
                        let sol = invert_minus(tables, f, j, seed)?;
                        seed = sol.root;
                        metrics.inversions += 1;
                        metrics.secant_iterations += sol.iterations;
                        row[bin] = self.assemble(tables, sol.root, f, j)?;
                    }
                    log::debug!(
                        "harmonic {}: {} bins, {} secant iterations",
                        j,
                        metrics.inversions,
                        metrics.secant_iterations
                    );
                }
                Ok((row, metrics))
            })
            .collect::<Result<_>>()?;

        let mut data = Vec::with_capacity(rows.len());
        let mut metrics = SolveMetrics::default();
        for (row, m) in rows {
            data.push(row);
            metrics.inversions += m.inversions;
            metrics.secant_iterations += m.secant_iterations;
        }

        Ok(WaveformResult {
            data,
            scheme,
            metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eccwave_core::FrequencyBand;

    fn config() -> SourceConfig {
        SourceConfig {
            e0: 0.1,
            p0: 50.0,
            total_mass: 20.0,
            eta: 0.25,
            psi: 3.0 / 7.0,
            phi: 3.0 / 7.0,
            theta: 3.0 / 7.0,
            iota: 3.0 / 7.0,
            beta: 3.0 / 7.0,
            band: FrequencyBand::new(5.0, 60.0, 0.25),
        }
    }

    #[test]
    fn test_query_before_init_fails_fast() {
        let engine = WaveformEngine::new(config()).unwrap();
        assert!(matches!(
            engine.orbital_frequency(0.05),
            Err(Error::NotInitialized(_))
        ));
        assert!(matches!(
            engine.terminal_eccentricity(),
            Err(Error::NotInitialized(_))
        ));
        assert!(matches!(engine.waveform(), Err(Error::NotInitialized(_))));
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        let mut cfg = config();
        cfg.eta = 0.4;
        assert!(matches!(
            WaveformEngine::new(cfg),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_waveform_populates_scheme_cells_only() {
        let mut engine = WaveformEngine::new(config()).unwrap();
        engine.init_tables(500).unwrap();
        let result = engine.waveform().unwrap();

        assert_eq!(result.num_bins(), 221);
        for j in result.scheme().harmonics() {
            let row = result.harmonic(j).unwrap();
            for (bin, sample) in row.iter().enumerate() {
                if result.is_populated(j, bin) {
                    assert!(
                        sample.norm() > 0.0 && sample.norm().is_finite(),
                        "harmonic {} bin {}: {}",
                        j,
                        bin,
                        sample
                    );
                } else {
                    assert_eq!(
                        *sample,
                        Complex::new(0.0, 0.0),
                        "harmonic {} bin {} should be untouched",
                        j,
                        bin
                    );
                }
            }
        }
        assert!(result.metrics().inversions > 0);
        assert!(result.metrics().secant_iterations >= result.metrics().inversions);
    }

    #[test]
    fn test_waveform_deterministic() {
        let mut a = WaveformEngine::new(config()).unwrap();
        a.init_tables(500).unwrap();
        let mut b = WaveformEngine::new(config()).unwrap();
        b.init_tables(500).unwrap();

        assert_eq!(
            a.terminal_eccentricity().unwrap(),
            b.terminal_eccentricity().unwrap()
        );

        let wa = a.waveform().unwrap();
        let wb = b.waveform().unwrap();
        for j in wa.scheme().harmonics() {
            assert_eq!(wa.harmonic(j), wb.harmonic(j), "harmonic {} differs", j);
        }
        // And across repeated runs of the same engine.
        let wa2 = a.waveform().unwrap();
        for j in wa.scheme().harmonics() {
            assert_eq!(wa.harmonic(j), wa2.harmonic(j));
        }
    }
}
