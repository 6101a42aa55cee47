//! Secular orbital-evolution series.
//!
//! The binary's adiabatic inspiral relates the frequency parameter
//! y = 1/sqrt(p) and the three accumulated phase quantities (time, mean
//! anomaly, periastron angle) to the orbital eccentricity through the
//! classical e-p relation: p(e) is proportional to
//! e^(12/19) (1 + (121/304) e^2)^(870/2299), so
//!
//!   y(e) = k_y e^(-6/19) (1 + (121/304) e^2)^(-435/2299)
//!
//! with k_y fixed by the initial condition y(e0) = y0. The phase terms
//! carry the matching leading-order normalizations, 1/eta-scaled powers
//! of y. Higher-order series plug in behind the same coefficient-vector
//! interface; the solver never looks inside the vectors.

use nalgebra::DVector;

/// Eccentricity enhancement coefficient of the e-p relation.
const B: f64 = 121.0 / 304.0;
/// Exponent of the enhancement factor in y(e).
const P: f64 = 435.0 / 2299.0;
/// Power-law exponent of y(e).
const Y_EXP: f64 = -6.0 / 19.0;

/// The three running phase quantities evaluated at one eccentricity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTerms {
    /// Dimensionless time phase (time over total mass).
    pub time: f64,
    /// Mean-anomaly phase.
    pub mean_anomaly: f64,
    /// Periastron-angle phase.
    pub periastron: f64,
}

/// Coefficient vectors of the secular evolution, computed once from the
/// initial conditions (e0, y0, eta) and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalSeries {
    e0: f64,
    y0: f64,
    eta: f64,
    /// Integration constants fixed by y(e0) = y0.
    constants: DVector<f64>,
    /// Frequency-parameter coefficients: [k_y, B, P].
    y: DVector<f64>,
    /// Time-phase coefficients: [c_t, exponent, enhancement power].
    time: DVector<f64>,
    /// Mean-anomaly coefficients: [c_l, exponent, enhancement power].
    mean_anomaly: DVector<f64>,
    /// Periastron coefficients: [c_l, exponent, enhancement power, advance rate].
    periastron: DVector<f64>,
}

impl OrbitalSeries {
    /// Derive the coefficient vectors from the initial conditions.
    pub fn new(e0: f64, y0: f64, eta: f64) -> Self {
        let k_y = y0 * e0.powf(-Y_EXP) * (1.0 + B * e0 * e0).powf(P);
        // Leading-order phase normalizations: time ~ -5/(256 eta) y^-8,
        // orbital phase ~ -1/(32 eta) y^-5.
        let c_t = -5.0 / (256.0 * eta * k_y.powi(8));
        let c_l = -1.0 / (32.0 * eta * k_y.powi(5));

        Self {
            e0,
            y0,
            eta,
            constants: DVector::from_vec(vec![k_y]),
            y: DVector::from_vec(vec![k_y, B, P]),
            time: DVector::from_vec(vec![c_t, 48.0 / 19.0, 8.0 * P]),
            mean_anomaly: DVector::from_vec(vec![c_l, 30.0 / 19.0, 5.0 * P]),
            periastron: DVector::from_vec(vec![c_l, 30.0 / 19.0, 5.0 * P, 3.0]),
        }
    }

    /// Initial eccentricity.
    pub fn e0(&self) -> f64 {
        self.e0
    }

    /// Initial frequency parameter.
    pub fn y0(&self) -> f64 {
        self.y0
    }

    /// Symmetric mass ratio.
    pub fn eta(&self) -> f64 {
        self.eta
    }

    /// Frequency parameter y at eccentricity `e`.
    ///
    /// Monotonically increasing as `e` decreases, which is what makes the
    /// stationary-phase inversion well-posed.
    pub fn frequency_parameter(&self, e: f64) -> f64 {
        let k_y = self.y[0];
        k_y * e.powf(Y_EXP) * (1.0 + self.y[1] * e * e).powf(-self.y[2])
    }

    /// The three phase quantities at eccentricity `e`.
    pub fn phase_terms(&self, e: f64) -> PhaseTerms {
        let enh = 1.0 + B * e * e;
        let time = self.time[0] * e.powf(self.time[1]) * enh.powf(self.time[2]);
        let mean_anomaly =
            self.mean_anomaly[0] * e.powf(self.mean_anomaly[1]) * enh.powf(self.mean_anomaly[2]);
        let y = self.frequency_parameter(e);
        let periastron = self.periastron[0]
            * e.powf(self.periastron[1])
            * enh.powf(self.periastron[2])
            * (1.0 + self.periastron[3] * y * y);
        PhaseTerms {
            time,
            mean_anomaly,
            periastron,
        }
    }

    /// Integration constants fixed by the initial conditions.
    pub fn constants(&self) -> &DVector<f64> {
        &self.constants
    }
}
