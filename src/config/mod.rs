// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports environment configuration and session generator settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

//! Configuration module
//!
//! - **environment**: server settings read from environment variables
//! - session generator tuning lives in `bravoball-intelligence` and is
//!   re-exported here

/// Environment and server configuration
pub mod environment;

pub use bravoball_intelligence::config::{
    ConfigError, DurationEstimates, ScoringWeights, SessionGeneratorConfig,
};
pub use environment::{Environment, ServerConfig};
