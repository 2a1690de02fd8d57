// ABOUTME: Session generator configuration with scoring weights and duration estimates
// ABOUTME: Defaults, environment overrides (SESSION_*), and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

//! Session Generator Configuration
//!
//! The scoring weights and the per-rep/per-set time estimates are tuning
//! knobs, so they live here instead of inside the algorithms. Every value can
//! be overridden from the environment:
//!
//! | Variable | Default |
//! |---|---|
//! | `SESSION_WEIGHT_PRIMARY_SKILL` | 8.0 |
//! | `SESSION_WEIGHT_SECONDARY_SKILLS` | 6.0 |
//! | `SESSION_WEIGHT_DIFFICULTY` | 3.0 |
//! | `SESSION_WEIGHT_TRAINING_STYLE` | 2.0 |
//! | `SESSION_ESTIMATE_SECONDS_PER_REP` | 5 |
//! | `SESSION_ESTIMATE_MINUTES_PER_SET` | 3 |
//! | `SESSION_ESTIMATE_REST_SECONDS` | 30 |
//! | `SESSION_ESTIMATE_FALLBACK_MINUTES` | 10 |
//! | `SESSION_ESTIMATE_CONTINUOUS_MINUTES` | 10 |
//! | `SESSION_MIN_SCORE` | 0.0 |

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Weights applied to each normalized sub-score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Primary skill match
    pub primary_skill: f64,
    /// Secondary skill matches
    pub secondary_skills: f64,
    /// Closeness of drill difficulty to the player level
    pub difficulty: f64,
    /// Drill lists the requested training style
    pub training_style: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            primary_skill: 8.0,
            secondary_skills: 6.0,
            difficulty: 3.0,
            training_style: 2.0,
        }
    }
}

impl ScoringWeights {
    /// Sum of all weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.primary_skill + self.secondary_skills + self.difficulty + self.training_style
    }

    /// Validate that weights are usable
    ///
    /// # Errors
    ///
    /// Returns an error if any weight is negative or non-finite, or all are zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            self.primary_skill,
            self.secondary_skills,
            self.difficulty,
            self.training_style,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "weights must be finite and non-negative",
            ));
        }
        if self.total() <= 0.0 {
            return Err(ConfigError::InvalidWeights(
                "at least one weight must be positive",
            ));
        }
        Ok(())
    }
}

/// Time estimates used to budget drills that are not purely time based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationEstimates {
    /// Seconds charged per repetition
    pub seconds_per_rep: u32,
    /// Minutes charged per set of a sets-based drill
    pub minutes_per_set: u32,
    /// Rest between sets when the drill does not declare one
    pub default_rest_seconds: u32,
    /// Duration used when a drill declares nothing usable
    pub fallback_minutes: u32,
    /// Duration of a continuous drill without a declared duration
    pub continuous_minutes: u32,
}

impl Default for DurationEstimates {
    fn default() -> Self {
        Self {
            seconds_per_rep: 5,
            minutes_per_set: 3,
            default_rest_seconds: 30,
            fallback_minutes: 10,
            continuous_minutes: 10,
        }
    }
}

impl DurationEstimates {
    /// Validate the estimate table
    ///
    /// # Errors
    ///
    /// Returns an error if a per-unit or fallback estimate is zero
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.seconds_per_rep == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "seconds_per_rep must be positive",
            ));
        }
        if self.minutes_per_set == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "minutes_per_set must be positive",
            ));
        }
        if self.fallback_minutes == 0 || self.continuous_minutes == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "fallback durations must be positive",
            ));
        }
        Ok(())
    }
}

/// Complete session generator configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionGeneratorConfig {
    /// Scoring weights
    pub weights: ScoringWeights,
    /// Duration estimate table
    pub estimates: DurationEstimates,
    /// Candidates scoring below this are never selected
    pub min_score: f64,
}

impl Default for SessionGeneratorConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            estimates: DurationEstimates::default(),
            min_score: 0.0,
        }
    }
}

impl SessionGeneratorConfig {
    /// Load configuration from `SESSION_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but unparseable, or the result fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a value is unparseable or the result fails validation
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            weights: ScoringWeights {
                primary_skill: parse_or(
                    &lookup,
                    "SESSION_WEIGHT_PRIMARY_SKILL",
                    defaults.weights.primary_skill,
                )?,
                secondary_skills: parse_or(
                    &lookup,
                    "SESSION_WEIGHT_SECONDARY_SKILLS",
                    defaults.weights.secondary_skills,
                )?,
                difficulty: parse_or(
                    &lookup,
                    "SESSION_WEIGHT_DIFFICULTY",
                    defaults.weights.difficulty,
                )?,
                training_style: parse_or(
                    &lookup,
                    "SESSION_WEIGHT_TRAINING_STYLE",
                    defaults.weights.training_style,
                )?,
            },
            estimates: DurationEstimates {
                seconds_per_rep: parse_or(
                    &lookup,
                    "SESSION_ESTIMATE_SECONDS_PER_REP",
                    defaults.estimates.seconds_per_rep,
                )?,
                minutes_per_set: parse_or(
                    &lookup,
                    "SESSION_ESTIMATE_MINUTES_PER_SET",
                    defaults.estimates.minutes_per_set,
                )?,
                default_rest_seconds: parse_or(
                    &lookup,
                    "SESSION_ESTIMATE_REST_SECONDS",
                    defaults.estimates.default_rest_seconds,
                )?,
                fallback_minutes: parse_or(
                    &lookup,
                    "SESSION_ESTIMATE_FALLBACK_MINUTES",
                    defaults.estimates.fallback_minutes,
                )?,
                continuous_minutes: parse_or(
                    &lookup,
                    "SESSION_ESTIMATE_CONTINUOUS_MINUTES",
                    defaults.estimates.continuous_minutes,
                )?,
            },
            min_score: parse_or(&lookup, "SESSION_MIN_SCORE", defaults.min_score)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the whole configuration
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        self.estimates.validate()?;
        if !self.min_score.is_finite() || self.min_score < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_score must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse { key, value: raw }),
    }
}
