//! Error type shared by the probe and the benchmark driver.

use thiserror::Error;

/// Errors returned by measurement and benchmark setup.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A measurement was asked to run zero trials.
    #[error("trial count must be positive")]
    ZeroTrials,

    /// The requested buffer holds no elements.
    #[error("buffer of {bytes} bytes holds no {element_size}-byte elements")]
    EmptyBuffer {
        /// Requested buffer size in bytes.
        bytes: usize,
        /// Size of one buffer element in bytes.
        element_size: usize,
    },

    /// The cache line size is smaller than one buffer element.
    #[error("cache line size {line_size} is smaller than the {element_size}-byte element")]
    InvalidLineSize {
        /// Requested cache line size in bytes.
        line_size: usize,
        /// Size of one buffer element in bytes.
        element_size: usize,
    },

    /// The sweep progression cannot terminate or is empty.
    #[error("invalid sweep: start {start_kb} KB, cap {cap_kb} KB, step {step_kb} KB")]
    InvalidSweep {
        /// First size in KB.
        start_kb: usize,
        /// Largest size in KB.
        cap_kb: usize,
        /// Linear step in KB.
        step_kb: usize,
    },

    /// Matrix dimension of zero.
    #[error("matrix dimension must be positive")]
    InvalidDimension,

    /// Tile edge of zero.
    #[error("tile size must be positive")]
    InvalidTile,

    /// A variant's result does not match the naive baseline.
    #[error("{variant} result differs from naive by {diff:e}")]
    Mismatch {
        /// Label of the offending variant.
        variant: &'static str,
        /// Largest absolute element difference.
        diff: f64,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
