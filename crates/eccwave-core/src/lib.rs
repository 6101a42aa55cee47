//! Core source description for eccwave.
//!
//! This crate provides the fundamental data types for describing an
//! eccentric compact binary and the frequency grid its waveform is
//! sampled on: the source configuration, geometric-unit conversions,
//! and the detector orientation prefactor.

pub mod config;
pub mod error;
pub mod orientation;
pub mod units;

pub use config::{FrequencyBand, SourceConfig};
pub use error::{Error, Result};
pub use orientation::Orientation;
