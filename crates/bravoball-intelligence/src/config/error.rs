// ABOUTME: Configuration error types for session generator settings
// ABOUTME: Defines error variants for invalid weights, out-of-range estimates, and bad env values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

//! Configuration error types for session generator validation.

use bravoball_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Scoring weight is negative, not finite, or all weights are zero
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Environment variable present but not parseable
    #[error("Failed to parse {key}={value:?}")]
    Parse {
        /// Variable name
        key: &'static str,
        /// Raw value found in the environment
        value: String,
    },
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string())
    }
}
