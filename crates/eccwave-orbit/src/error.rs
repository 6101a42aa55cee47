//! Error types for eccwave-orbit.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no amplitude coefficient for harmonic index {j}")]
    UnsupportedHarmonic { j: i32 },
}

pub type Result<T> = std::result::Result<T, Error>;
