//! Error types shared across the crate.

use thiserror::Error;

/// Raised when a configuration cannot produce a chart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("empty phase window: theta_max ({max}) must exceed theta_min ({min})")]
    EmptyWindow { min: f64, max: f64 },
    #[error("phase window [{min}, {max}] yields no samples at {samples_per_period} samples per period")]
    NoSamples {
        min: f64,
        max: f64,
        samples_per_period: f64,
    },
    #[error("tick increment must be positive, got {0}")]
    TickIncrement(f64),
    #[error("fraction tolerance must be non-negative, got {0}")]
    Tolerance(f64),
}

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum TriphaseError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}
