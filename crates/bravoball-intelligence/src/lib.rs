// ABOUTME: Drill recommendation engine for the BravoBall training backend
// ABOUTME: Scoring, duration estimation, session generation, and skill name mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

#![deny(unsafe_code)]

//! # `BravoBall` Intelligence
//!
//! Pure, synchronous algorithms that turn a player's preferences and a drill
//! catalog snapshot into a training session. Nothing here touches storage or
//! the network; callers load the catalog and hand it in as `&[Drill]`.

/// Generator configuration: scoring weights and duration estimates
pub mod config;

/// Drill duration estimates used for budgeting
pub mod duration;

/// Weighted multi-criteria drill scorer
pub mod scoring;

/// Round-robin session generator
pub mod session_generator;

/// Display-name to skill identifier mapping
pub mod skill_mapper;

pub use config::{ConfigError, DurationEstimates, ScoringWeights, SessionGeneratorConfig};
pub use scoring::{DrillScorer, ScoreBreakdown};
pub use session_generator::{generate_session, SessionError, SessionGenerator};
