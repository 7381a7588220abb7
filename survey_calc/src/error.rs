//! Error types for generator configuration.

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::GeneratorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {axis} range: min {min} must be finite and not exceed max {max}")]
    InvalidRange { axis: &'static str, min: f64, max: f64 },
    #[error("{field} decimals {decimals} exceeds the supported maximum of {max}")]
    InvalidDecimals {
        field: &'static str,
        decimals: u32,
        max: u32,
    },
    #[error("invalid point id range: min {min} exceeds max {max}")]
    InvalidIdRange { min: u32, max: u32 },
    #[error("failed to parse generator config: {0}")]
    Json(#[from] serde_json::Error),
}
