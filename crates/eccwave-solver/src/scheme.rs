//! Harmonic sampling scheme.
//!
//! Decides, per harmonic index, the inclusive range of frequency bins
//! over which that harmonic is physically sampled. Harmonics are cut off
//! below the empirical validity line j(e) = 28 e + 2: a harmonic is not
//! sampled at eccentricities below the point where its index crosses
//! that line, nor below the terminal eccentricity.

use eccwave_core::FrequencyBand;

use crate::error::Result;
use crate::stationary::stationary_frequency;
use crate::tables::OrbitTables;

/// Highest harmonic index with a known closed-form amplitude.
const J_CAP: i32 = 15;

/// Highest harmonic sampled for a waveform starting at eccentricity `e`:
/// floor(28 e + 2), capped at the amplitude-library limit.
pub fn harmonic_ceiling(e: f64) -> i32 {
    ((28.0 * e + 2.0).floor() as i32).min(J_CAP)
}

/// Eccentricity below which harmonic `j` is no longer sampled — the
/// inverse of the validity line.
pub fn cutoff_eccentricity(j: i32) -> f64 {
    (j as f64 - 2.0) / 28.0
}

/// Inclusive bin range of one harmonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinRange {
    /// First valid bin index.
    pub first: usize,
    /// Last valid bin index.
    pub last: usize,
}

/// Per-harmonic bin ranges for harmonic indices -1..=j_max.
///
/// Purely declarative: the waveform driver consumes these ranges, and
/// they double as the validity mask of the dense output array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarmonicScheme {
    j_max: i32,
    /// Range for harmonic j at offset j + 1; `None` when no bin of the
    /// band falls inside the harmonic's valid frequency range.
    ranges: Vec<Option<BinRange>>,
}

impl HarmonicScheme {
    /// Plan the sampling ranges from the built tables, the initial and
    /// terminal eccentricities, and the frequency band.
    pub fn plan(
        tables: &OrbitTables,
        band: &FrequencyBand,
        e0: f64,
        e_fin: f64,
    ) -> Result<Self> {
        let j_max = harmonic_ceiling(e0);
        let num_bins = band.num_bins() as i64;
        let mut ranges = Vec::with_capacity((j_max + 2) as usize);

        for j in -1..=j_max {
            // Lower bound at e0; upper bound where the harmonic either
            // crosses the validity line or the orbit terminates.
            let f_lo = stationary_frequency(tables, e0, j)?;
            let e_hold = e_fin.max(cutoff_eccentricity(j));
            let f_hi = stationary_frequency(tables, e_hold, j)?;

            let first = (band.bin_of(f_lo).ceil() as i64).max(0);
            let last = (band.bin_of(f_hi).floor() as i64).min(num_bins - 1);
            let range = (first <= last).then(|| BinRange {
                first: first as usize,
                last: last as usize,
            });
            log::debug!("harmonic {}: bins {:?}", j, range);
            ranges.push(range);
        }

        Ok(Self { j_max, ranges })
    }

    /// Highest harmonic index in the scheme.
    pub fn j_max(&self) -> i32 {
        self.j_max
    }

    /// Iterate the planned harmonic indices.
    pub fn harmonics(&self) -> impl Iterator<Item = i32> {
        -1..=self.j_max
    }

    /// Bin range of harmonic `j`, or `None` if the harmonic is absent or
    /// outside the planned index range.
    pub fn range(&self, j: i32) -> Option<BinRange> {
        if j < -1 || j > self.j_max {
            return None;
        }
        self.ranges[(j + 1) as usize]
    }

    /// Whether the dense output cell (j, bin) is populated.
    pub fn is_populated(&self, j: i32, bin: usize) -> bool {
        self.range(j)
            .is_some_and(|r| bin >= r.first && bin <= r.last)
    }
}
