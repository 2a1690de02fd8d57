// ABOUTME: Multi-criteria drill scorer for session generation
// ABOUTME: Hard equipment/location gates plus weighted skill, difficulty, and style sub-scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

//! # Drill Scorer
//!
//! Scores how well a drill fits a session configuration. Equipment and
//! location are hard gates checked by [`DrillScorer::passes_hard_filters`];
//! everything else is a weighted sum of normalized sub-scores:
//!
//! - **primary skill**: 1.0 for an exact category and sub-skill match, 0.3 for
//!   a category-only match
//! - **secondary skills**: 1.0 per exact match, 0.3 per category match, summed,
//!   halved and capped at 0.5
//! - **difficulty**: 1.0 at the player level, 0.5 one step away, 0.2 two steps
//!   away, 0.5 when the drill has no level
//! - **training style**: 1.0 when the drill lists the requested style
//!
//! A target skill with no sub-skills accepts any sub-skill in its category.
//!
//! Candidates are ranked with [`ScoreBreakdown::rank_cmp`]: skill relevance
//! (primary + secondary) first, difficulty and style only break ties within
//! equal relevance. `total` is reported to clients and compared to `min_score`.

use crate::config::ScoringWeights;
use bravoball_core::models::{Drill, SessionConfiguration, SkillFocus, TargetSkill};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::slice;

const EXACT_MATCH: f64 = 1.0;
const CATEGORY_MATCH: f64 = 0.3;
const SECONDARY_SCALE: f64 = 0.5;
const SECONDARY_CAP: f64 = 0.5;
const DIFFICULTY_BY_DISTANCE: [f64; 3] = [1.0, 0.5, 0.2];
const UNKNOWN_DIFFICULTY: f64 = 0.5;

/// Weighted sub-scores for one drill
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Weighted primary skill term
    pub primary_skill: f64,
    /// Weighted secondary skills term
    pub secondary_skills: f64,
    /// Weighted difficulty closeness term
    pub difficulty: f64,
    /// Weighted training style term
    pub training_style: f64,
    /// Sum of the terms
    pub total: f64,
}

impl ScoreBreakdown {
    /// Weighted skill terms (primary + secondary)
    #[must_use]
    pub fn relevance(&self) -> f64 {
        self.primary_skill + self.secondary_skills
    }

    /// Weighted tie-break terms (difficulty + training style)
    #[must_use]
    pub fn tie_break(&self) -> f64 {
        self.difficulty + self.training_style
    }

    /// Ranking order: higher relevance first, then higher tie-break terms
    ///
    /// `Ordering::Less` means `self` ranks ahead of `other`.
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .relevance()
            .total_cmp(&self.relevance())
            .then_with(|| other.tie_break().total_cmp(&self.tie_break()))
    }
}

/// Pure drill scorer parameterized by its weight table
#[derive(Debug, Clone, Copy, Default)]
pub struct DrillScorer {
    weights: ScoringWeights,
}

impl DrillScorer {
    /// Create a scorer with the given weights
    #[must_use]
    pub const fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Weights this scorer applies
    #[must_use]
    pub const fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Equipment and location gates
    ///
    /// Every required item must be available or declared adaptable by the
    /// drill, and the configured location must be listed by the drill.
    #[must_use]
    pub fn passes_hard_filters(drill: &Drill, configuration: &SessionConfiguration) -> bool {
        drill
            .suitable_locations
            .contains(&configuration.training_location)
            && drill
                .missing_equipment(&configuration.available_equipment)
                .is_empty()
    }

    /// Score a drill against every target skill of the configuration
    #[must_use]
    pub fn score(&self, drill: &Drill, configuration: &SessionConfiguration) -> ScoreBreakdown {
        self.score_against(drill, configuration, &configuration.target_skills)
    }

    /// Score a drill for a single target skill slot
    #[must_use]
    pub fn score_for_slot(
        &self,
        drill: &Drill,
        configuration: &SessionConfiguration,
        target: &TargetSkill,
    ) -> ScoreBreakdown {
        self.score_against(drill, configuration, slice::from_ref(target))
    }

    fn score_against(
        &self,
        drill: &Drill,
        configuration: &SessionConfiguration,
        targets: &[TargetSkill],
    ) -> ScoreBreakdown {
        let Some(primary) = &drill.primary_skill else {
            return ScoreBreakdown::default();
        };

        let primary_skill = self.weights.primary_skill * primary_match(primary, targets);
        let secondary_skills =
            self.weights.secondary_skills * secondary_match(&drill.secondary_skills, targets);
        let difficulty = self.weights.difficulty
            * drill.difficulty.map_or(UNKNOWN_DIFFICULTY, |level| {
                DIFFICULTY_BY_DISTANCE
                    .get(usize::from(level.distance(configuration.difficulty)))
                    .copied()
                    .unwrap_or(0.0)
            });
        let training_style = if drill
            .training_styles
            .contains(&configuration.training_style)
        {
            self.weights.training_style
        } else {
            0.0
        };

        ScoreBreakdown {
            primary_skill,
            secondary_skills,
            difficulty,
            training_style,
            total: primary_skill + secondary_skills + difficulty + training_style,
        }
    }
}

/// Best match of one drill skill across the targets
fn skill_match(skill: &SkillFocus, targets: &[TargetSkill]) -> f64 {
    targets
        .iter()
        .filter(|target| keys_match(&target.category, &skill.category))
        .map(|target| {
            let exact = target.sub_skills.is_empty()
                || target
                    .sub_skills
                    .iter()
                    .any(|sub| keys_match(sub, &skill.sub_skill));
            if exact {
                EXACT_MATCH
            } else {
                CATEGORY_MATCH
            }
        })
        .fold(0.0, f64::max)
}

fn primary_match(primary: &SkillFocus, targets: &[TargetSkill]) -> f64 {
    skill_match(primary, targets)
}

fn secondary_match(secondary: &[SkillFocus], targets: &[TargetSkill]) -> f64 {
    let matches: f64 = secondary
        .iter()
        .map(|skill| skill_match(skill, targets))
        .sum();
    (matches * SECONDARY_SCALE).min(SECONDARY_CAP)
}

/// Compare two skill keys ignoring case, surrounding whitespace, and space/hyphen/underscore spelling
fn keys_match(a: &str, b: &str) -> bool {
    let fold = |c: char| match c {
        ' ' | '-' => '_',
        other => other.to_ascii_lowercase(),
    };
    a.trim().chars().map(fold).eq(b.trim().chars().map(fold))
}
