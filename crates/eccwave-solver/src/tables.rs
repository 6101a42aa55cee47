//! Interpolation tables relating eccentricity, orbital frequency and
//! periastron-advance frequency.

use std::f64::consts::PI;

use eccwave_orbit::OrbitalSeries;

use crate::error::{Error, Result};
use crate::spline::CubicSpline;

/// Fraction above e0 at which sampling starts, giving the inversion a
/// little headroom above the initial eccentricity.
const HEADROOM: f64 = 1.0 / 30.0;

/// Frequency-parameter ceiling: a regime boundary no physical waveform
/// crosses; sampling stops at the first eccentricity where y exceeds it.
const Y_CEILING: f64 = 0.4;

/// Four monotone interpolants over a bounded eccentricity interval,
/// built once and read-only afterwards.
///
/// The support runs from `e_last` (where the frequency parameter first
/// exceeded the ceiling) up to `e0 * (1 + 1/30)`. Queries outside the
/// support are domain errors.
#[derive(Debug)]
pub struct OrbitTables {
    y_of_e: CubicSpline,
    forb_of_e: CubicSpline,
    fperi_of_e: CubicSpline,
    e_of_forb: CubicSpline,
    e_last: f64,
}

impl OrbitTables {
    /// Sample the secular evolution at `n` uniform eccentricity steps of
    /// size e0/n and build the four splines. `mass` is the total mass in
    /// geometric units (seconds).
    pub fn build(series: &OrbitalSeries, mass: f64, n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::TableBuild("sample count must be positive"));
        }
        let e0 = series.e0();
        let eta = series.eta();
        let de = e0 / n as f64;
        let e_top = e0 + e0 * HEADROOM;

        // Walk downward from just above e0 until the frequency parameter
        // leaves the sampled regime; the crossing sample bounds the domain.
        let mut y_samples = vec![series.frequency_parameter(e_top)];
        let mut i = 0usize;
        while y_samples[i] < Y_CEILING {
            i += 1;
            let e = e_top - de * i as f64;
            if e <= 0.0 {
                return Err(Error::TableBuild(
                    "frequency parameter never reached the sampling ceiling",
                ));
            }
            y_samples.push(series.frequency_parameter(e));
        }
        let e_last = e_top - de * i as f64;
        let count = i + 1;

        // Re-order so eccentricity increases, and derive the two
        // frequency curves at each sample.
        let mut e_s = Vec::with_capacity(count);
        let mut y_s = Vec::with_capacity(count);
        let mut forb_s = Vec::with_capacity(count);
        let mut fperi_s = Vec::with_capacity(count);
        for s in 0..count {
            let e = e_last + de * s as f64;
            let y = y_samples[i - s];
            let fperi = y.powi(3) * (1.0 - e * e).powf(1.5) / (mass * 2.0 * PI);
            let forb = fperi * orbital_frequency_factor(y, e, eta);
            e_s.push(e);
            y_s.push(y);
            forb_s.push(forb);
            fperi_s.push(fperi);
        }
        log::debug!(
            "sampled {} points over e in [{:.6}, {:.6}]",
            count,
            e_last,
            e_top
        );

        let y_of_e = CubicSpline::new(e_s.clone(), y_s)?;
        let forb_of_e = CubicSpline::new(e_s.clone(), forb_s.clone())?;
        let fperi_of_e = CubicSpline::new(e_s.clone(), fperi_s)?;

        // The inverse map needs increasing frequency; the orbital
        // frequency decreases with eccentricity, so reverse both arrays.
        forb_s.reverse();
        e_s.reverse();
        let e_of_forb = CubicSpline::new(forb_s, e_s)?;

        Ok(Self {
            y_of_e,
            forb_of_e,
            fperi_of_e,
            e_of_forb,
            e_last,
        })
    }

    /// Lower bound of the sampled eccentricity domain.
    pub fn e_last(&self) -> f64 {
        self.e_last
    }

    /// Inclusive eccentricity support of the tables.
    pub fn support(&self) -> (f64, f64) {
        self.y_of_e.support()
    }

    /// Frequency parameter y at eccentricity `e`.
    pub fn frequency_parameter(&self, e: f64) -> Result<f64> {
        self.y_of_e.eval(e)
    }

    /// Orbital (mean-motion) frequency at eccentricity `e`, in Hz.
    pub fn orbital_frequency(&self, e: f64) -> Result<f64> {
        self.forb_of_e.eval(e)
    }

    /// Periastron-advance frequency at eccentricity `e`, in Hz.
    pub fn periastron_frequency(&self, e: f64) -> Result<f64> {
        self.fperi_of_e.eval(e)
    }

    /// Eccentricity at which the orbital frequency equals `f`.
    pub fn eccentricity_at_frequency(&self, f: f64) -> Result<f64> {
        self.e_of_forb.eval(f)
    }
}

/// Ratio of orbital frequency to periastron-advance frequency as a
/// post-Newtonian expansion in the frequency parameter.
fn orbital_frequency_factor(y: f64, e: f64, eta: f64) -> f64 {
    let e2 = e * e;
    let y2 = y * y;
    let pi2 = PI * PI;
    1.0 - 3.0 * y2
        + (-18.0 + 28.0 * eta - (51.0 - 26.0 * eta) * e2) / 4.0 * y2 * y2
        + (192.0 - 896.0 * eta * eta
            - e2 * e2 * (2496.0 - 1760.0 * eta + 1040.0 * eta * eta)
            - e2 * (8544.0 + 5120.0 * eta * eta - eta * (17856.0 - 123.0 * pi2))
            + eta * (14624.0 - 492.0 * pi2)
            - (1920.0 - 768.0 * eta + (3840.0 - 1536.0 * eta) * e2) * (1.0 - e2).sqrt())
            / 128.0
            * y2 * y2 * y2
}
