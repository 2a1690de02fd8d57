// ABOUTME: Core data models for the drill catalog and generated training sessions
// ABOUTME: Re-exports drill tags, session configuration, and session result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

//! # Data Models
//!
//! Catalog and session types shared by the intelligence crate, the HTTP routes
//! and the CLI. Every type serializes with `snake_case` names.

mod drill;
mod session;

pub use drill::{
    normalize_key, Difficulty, Drill, DrillType, Equipment, Intensity, SkillFocus,
    TrainingLocation, TrainingStyle,
};
pub use session::{
    DrillParameters, GeneratedSession, ScoredDrill, SessionConfiguration, TargetSkill,
};
