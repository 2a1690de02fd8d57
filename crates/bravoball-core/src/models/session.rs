// ABOUTME: Session request and result models for drill session generation
// ABOUTME: SessionConfiguration, TargetSkill, ScoredDrill, DrillParameters, GeneratedSession
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

use super::drill::{Difficulty, Drill, Equipment, TrainingLocation, TrainingStyle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A skill category the player wants to train, with optional sub-skills
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSkill {
    /// Skill category such as `dribbling`
    pub category: String,
    /// Sub-skills within the category; empty means "any"
    #[serde(default)]
    pub sub_skills: Vec<String>,
}

impl TargetSkill {
    /// Create a target skill
    pub fn new(category: impl Into<String>, sub_skills: Vec<String>) -> Self {
        Self {
            category: category.into(),
            sub_skills,
        }
    }
}

/// Player preferences that drive one session generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfiguration {
    /// Time budget in minutes
    pub duration_minutes: u32,
    /// Equipment the player has on hand
    #[serde(default)]
    pub available_equipment: BTreeSet<Equipment>,
    /// Where the player trains
    pub training_location: TrainingLocation,
    /// Desired session character
    #[serde(default)]
    pub training_style: TrainingStyle,
    /// Player level
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Skills to cover, in priority order
    pub target_skills: Vec<TargetSkill>,
}

/// Prescription attached to a selected drill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillParameters {
    /// Sets to perform
    pub sets: Option<u32>,
    /// Repetitions per set
    pub reps: Option<u32>,
    /// Rest between sets in seconds
    pub rest_seconds: Option<u32>,
    /// Estimated minutes charged against the session budget
    pub duration_minutes: u32,
}

/// A drill chosen for a session together with the reason it was chosen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDrill {
    /// The catalog drill
    pub drill: Drill,
    /// Fitness score for the slot the drill filled
    pub score: f64,
    /// Skill category of that slot
    pub skill_category: String,
    /// Round-robin pass number, starting at zero
    pub pass: u32,
    /// Sets, reps, rest and budgeted duration
    pub parameters: DrillParameters,
    /// Load adjustment relative to the drill level (above 1.0 means harder)
    pub intensity_modifier: f64,
    /// Adaptable items the player lacks and must improvise
    #[serde(default)]
    pub substituted_equipment: BTreeSet<Equipment>,
}

/// Ordered training session produced by the generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSession {
    /// Drills in selection order
    pub drills: Vec<ScoredDrill>,
    /// Sum of the budgeted drill durations
    pub total_duration_minutes: u32,
    /// Budget that was requested
    pub requested_duration_minutes: u32,
    /// Target categories trained by at least one selected drill, in first-covered order
    pub skills_covered: Vec<String>,
}

impl GeneratedSession {
    /// Session with no drills for the given budget
    #[must_use]
    pub const fn empty(requested_duration_minutes: u32) -> Self {
        Self {
            drills: Vec::new(),
            total_duration_minutes: 0,
            requested_duration_minutes,
            skills_covered: Vec::new(),
        }
    }

    /// True when no feasible drill could be placed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drills.is_empty()
    }

    /// Number of drills in the session
    #[must_use]
    pub fn len(&self) -> usize {
        self.drills.len()
    }

    /// Catalog ids in selection order
    #[must_use]
    pub fn drill_ids(&self) -> Vec<u64> {
        self.drills.iter().map(|scored| scored.drill.id).collect()
    }
}
