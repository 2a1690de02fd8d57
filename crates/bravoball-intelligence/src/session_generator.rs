// ABOUTME: Greedy round-robin session generator over a scored drill arena
// ABOUTME: Validates configurations, filters the catalog, and packs drills into the time budget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

//! # Session Generator
//!
//! Turns a [`SessionConfiguration`] and a catalog snapshot into an ordered
//! [`GeneratedSession`].
//!
//! 1. Validate the configuration and merge duplicate target categories.
//! 2. Drop drills with a repeated id or no primary skill, then apply the
//!    equipment and location gates.
//! 3. Score every eligible drill once per target skill into a flat arena and
//!    rank each slot by skill relevance, then difficulty and style, then
//!    catalog id (ascending). A drill with no overlap with the slot's skill is
//!    only reached after every relevant candidate.
//! 4. Walk the target skills round-robin, taking the best unused candidate
//!    per skill. A skill whose next candidate does not fit the remaining
//!    budget is retired; a skill with no candidates left is exhausted.
//! 5. A category counts as covered only when a selected drill trains it, so
//!    filler picked for a slot does not report that slot's skill.
//!
//! The generator never mutates the catalog and keeps no state between calls,
//! so identical inputs always produce identical sessions.

use crate::config::{ConfigError, SessionGeneratorConfig};
use crate::duration::estimate_minutes;
use crate::scoring::{DrillScorer, ScoreBreakdown};
use bravoball_core::constants::session::MAX_SESSION_MINUTES;
use bravoball_core::errors::{AppError, ErrorCode};
use bravoball_core::models::{
    normalize_key, Difficulty, Drill, DrillParameters, GeneratedSession, ScoredDrill,
    SessionConfiguration, TargetSkill,
};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Load multiplier when the player is above the drill level
const INTENSITY_ABOVE_LEVEL: f64 = 1.2;
/// Load multiplier when the player matches the drill level
const INTENSITY_AT_LEVEL: f64 = 1.0;
/// Load multiplier when the drill is above the player level
const INTENSITY_BELOW_LEVEL: f64 = 0.8;

/// Errors raised for configurations that cannot be generated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Duration is zero or above the supported maximum
    #[error("Invalid session duration: {minutes} minutes (expected 1..={max})")]
    InvalidDuration {
        /// Requested minutes
        minutes: u32,
        /// Largest accepted value
        max: u32,
    },

    /// No target skills were supplied
    #[error("At least one target skill is required")]
    NoTargetSkills,

    /// A target skill entry is unusable
    #[error("Invalid target skill at index {index}: {reason}")]
    InvalidTargetSkill {
        /// Position in the request
        index: usize,
        /// What is wrong with it
        reason: &'static str,
    },
}

impl From<SessionError> for AppError {
    fn from(error: SessionError) -> Self {
        let message = error.to_string();
        match error {
            SessionError::InvalidDuration { minutes, max } => {
                Self::new(ErrorCode::ValueOutOfRange, message).with_details(
                    serde_json::json!({
                        "field": "duration_minutes",
                        "value": minutes,
                        "max": max,
                    }),
                )
            }
            SessionError::NoTargetSkills => Self::new(ErrorCode::MissingRequiredField, message)
                .with_details(serde_json::json!({ "field": "target_skills" })),
            SessionError::InvalidTargetSkill { index, .. } => {
                Self::new(ErrorCode::InvalidInput, message).with_details(serde_json::json!({
                    "field": "target_skills",
                    "index": index,
                }))
            }
        }
    }
}

/// Validate a configuration and return its normalized, deduplicated target skills
///
/// Categories are compared case-insensitively. A repeated category keeps the
/// position of its first occurrence and absorbs the sub-skills of the others.
///
/// # Errors
///
/// Returns a [`SessionError`] describing the first problem found
pub fn validate_configuration(
    configuration: &SessionConfiguration,
) -> Result<Vec<TargetSkill>, SessionError> {
    let minutes = configuration.duration_minutes;
    if minutes == 0 || minutes > MAX_SESSION_MINUTES {
        return Err(SessionError::InvalidDuration {
            minutes,
            max: MAX_SESSION_MINUTES,
        });
    }
    if configuration.target_skills.is_empty() {
        return Err(SessionError::NoTargetSkills);
    }

    let mut targets: Vec<TargetSkill> = Vec::with_capacity(configuration.target_skills.len());
    for (index, target) in configuration.target_skills.iter().enumerate() {
        let category = normalize_key(&target.category);
        if category.is_empty() {
            return Err(SessionError::InvalidTargetSkill {
                index,
                reason: "category is empty",
            });
        }

        let mut sub_skills = Vec::with_capacity(target.sub_skills.len());
        for sub_skill in &target.sub_skills {
            let sub_skill = normalize_key(sub_skill);
            if sub_skill.is_empty() {
                return Err(SessionError::InvalidTargetSkill {
                    index,
                    reason: "sub-skill is empty",
                });
            }
            sub_skills.push(sub_skill);
        }

        if let Some(existing) = targets.iter_mut().find(|t| t.category == category) {
            debug!(category = %category, index, "Merging duplicate target skill");
            // An earlier "any sub-skill" entry stays unrestricted
            if !existing.sub_skills.is_empty() {
                if sub_skills.is_empty() {
                    existing.sub_skills.clear();
                } else {
                    for sub_skill in sub_skills {
                        if !existing.sub_skills.contains(&sub_skill) {
                            existing.sub_skills.push(sub_skill);
                        }
                    }
                }
            }
        } else {
            let mut unique: Vec<String> = Vec::with_capacity(sub_skills.len());
            for sub_skill in sub_skills {
                if !unique.contains(&sub_skill) {
                    unique.push(sub_skill);
                }
            }
            targets.push(TargetSkill::new(category, unique));
        }
    }

    Ok(targets)
}

/// Load multiplier for a drill relative to the player level
#[must_use]
pub fn intensity_modifier(player: Difficulty, drill: Option<Difficulty>) -> f64 {
    match drill.map(|level| player.cmp(&level)) {
        Some(Ordering::Greater) => INTENSITY_ABOVE_LEVEL,
        Some(Ordering::Less) => INTENSITY_BELOW_LEVEL,
        Some(Ordering::Equal) | None => INTENSITY_AT_LEVEL,
    }
}

/// Score matrix for one generation call
///
/// `scores[slot * candidates.len() + i]` is the breakdown of `candidates[i]`
/// for target skill `slot`. `ranked[slot]` lists candidate indices best first.
struct ScoreArena<'a> {
    candidates: Vec<&'a Drill>,
    durations: Vec<u32>,
    scores: Vec<ScoreBreakdown>,
    ranked: Vec<Vec<usize>>,
}

impl<'a> ScoreArena<'a> {
    fn build(
        candidates: Vec<&'a Drill>,
        targets: &[TargetSkill],
        configuration: &SessionConfiguration,
        generator: &SessionGenerator,
    ) -> Self {
        let width = candidates.len();
        let durations = candidates
            .iter()
            .map(|drill| estimate_minutes(drill, &generator.config.estimates))
            .collect();

        let mut scores = Vec::with_capacity(width * targets.len());
        for target in targets {
            scores.extend(
                candidates
                    .iter()
                    .map(|drill| generator.scorer.score_for_slot(drill, configuration, target)),
            );
        }

        let min_score = generator.config.min_score;
        let ranked = (0..targets.len())
            .map(|slot| {
                let row = &scores[slot * width..(slot + 1) * width];
                let mut order: Vec<usize> =
                    (0..width).filter(|&i| row[i].total >= min_score).collect();
                order.sort_by(|&a, &b| {
                    row[a]
                        .rank_cmp(&row[b])
                        .then_with(|| candidates[a].id.cmp(&candidates[b].id))
                });
                order
            })
            .collect();

        Self {
            candidates,
            durations,
            scores,
            ranked,
        }
    }

    fn score(&self, slot: usize, index: usize) -> &ScoreBreakdown {
        &self.scores[slot * self.candidates.len() + index]
    }
}

/// Session generator holding an immutable configuration
#[derive(Debug, Clone, Default)]
pub struct SessionGenerator {
    config: SessionGeneratorConfig,
    scorer: DrillScorer,
}

impl SessionGenerator {
    /// Create a generator from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: SessionGeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            scorer: DrillScorer::new(config.weights),
        })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &SessionGeneratorConfig {
        &self.config
    }

    /// Scorer built from the configured weights
    #[must_use]
    pub const fn scorer(&self) -> &DrillScorer {
        &self.scorer
    }

    /// Build a session from a catalog snapshot
    ///
    /// An infeasible request (nothing passes the gates, or nothing fits the
    /// budget) yields an empty session rather than an error.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the configuration is invalid
    pub fn generate_session(
        &self,
        configuration: &SessionConfiguration,
        catalog: &[Drill],
    ) -> Result<GeneratedSession, SessionError> {
        let targets = validate_configuration(configuration)?;
        let budget = configuration.duration_minutes;

        let candidates = eligible_drills(configuration, catalog);
        if candidates.is_empty() {
            info!(
                catalog_size = catalog.len(),
                location = %configuration.training_location,
                "No drills pass the equipment and location filters"
            );
            return Ok(GeneratedSession::empty(budget));
        }

        let arena = ScoreArena::build(candidates, &targets, configuration, self);
        let session = self.select(&arena, &targets, configuration);

        info!(
            drills = session.len(),
            total_minutes = session.total_duration_minutes,
            requested_minutes = budget,
            skills_covered = ?session.skills_covered,
            "Generated training session"
        );
        Ok(session)
    }

    fn select(
        &self,
        arena: &ScoreArena<'_>,
        targets: &[TargetSkill],
        configuration: &SessionConfiguration,
    ) -> GeneratedSession {
        let mut session = GeneratedSession::empty(configuration.duration_minutes);
        let mut remaining = configuration.duration_minutes;
        let mut used = vec![false; arena.candidates.len()];
        let mut cursors = vec![0_usize; targets.len()];
        let mut active = vec![true; targets.len()];
        let mut pass: u32 = 0;

        while active.iter().any(|&slot_active| slot_active) {
            for (slot, target) in targets.iter().enumerate() {
                if !active[slot] {
                    continue;
                }

                let ranked = &arena.ranked[slot];
                while cursors[slot] < ranked.len() && used[ranked[cursors[slot]]] {
                    cursors[slot] += 1;
                }
                let Some(&index) = ranked.get(cursors[slot]) else {
                    debug!(category = %target.category, pass, "Skill exhausted");
                    active[slot] = false;
                    continue;
                };

                let minutes = arena.durations[index];
                if minutes > remaining {
                    debug!(
                        category = %target.category,
                        pass,
                        minutes,
                        remaining,
                        "Skill retired: best candidate exceeds remaining budget"
                    );
                    active[slot] = false;
                    continue;
                }

                let drill = arena.candidates[index];
                used[index] = true;
                remaining -= minutes;
                let breakdown = arena.score(slot, index);
                let score = breakdown.total;
                debug!(
                    drill_id = drill.id,
                    category = %target.category,
                    pass,
                    score,
                    relevance = breakdown.relevance(),
                    minutes,
                    "Selected drill"
                );

                session.drills.push(ScoredDrill {
                    drill: drill.clone(),
                    score,
                    skill_category: target.category.clone(),
                    pass,
                    parameters: DrillParameters {
                        sets: drill.sets,
                        reps: drill.reps,
                        rest_seconds: drill.rest_seconds,
                        duration_minutes: minutes,
                    },
                    intensity_modifier: intensity_modifier(
                        configuration.difficulty,
                        drill.difficulty,
                    ),
                    substituted_equipment: drill
                        .substituted_equipment(&configuration.available_equipment),
                });
                session.total_duration_minutes += minutes;
                if drill.trains_category(&target.category)
                    && !session.skills_covered.contains(&target.category)
                {
                    session.skills_covered.push(target.category.clone());
                }
            }
            pass += 1;
        }

        session
    }
}

/// Build a session with the default generator configuration
///
/// # Errors
///
/// Returns a [`SessionError`] if the configuration is invalid
pub fn generate_session(
    configuration: &SessionConfiguration,
    catalog: &[Drill],
) -> Result<GeneratedSession, SessionError> {
    SessionGenerator::default().generate_session(configuration, catalog)
}

/// Well-formed drills with a first-seen id that pass the hard gates, in catalog order
fn eligible_drills<'a>(configuration: &SessionConfiguration, catalog: &'a [Drill]) -> Vec<&'a Drill> {
    let mut seen = BTreeSet::new();
    catalog
        .iter()
        .filter(|drill| {
            let first = seen.insert(drill.id);
            if !first {
                warn!(drill_id = drill.id, title = %drill.title, "Skipping drill with duplicate id");
            }
            first
        })
        .filter(|drill| {
            if !drill.is_well_formed() {
                warn!(drill_id = drill.id, title = %drill.title, "Skipping drill without a primary skill");
            }
            drill.is_well_formed()
        })
        .filter(|drill| DrillScorer::passes_hard_filters(drill, configuration))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use bravoball_core::models::{
        DrillType, Equipment, SkillFocus, TrainingLocation, TrainingStyle,
    };

    fn configuration(duration_minutes: u32, skills: &[&str]) -> SessionConfiguration {
        SessionConfiguration {
            duration_minutes,
            available_equipment: [Equipment::Ball].into_iter().collect(),
            training_location: TrainingLocation::Backyard,
            training_style: TrainingStyle::MediumIntensity,
            difficulty: Difficulty::Intermediate,
            target_skills: skills
                .iter()
                .map(|category| TargetSkill::new(*category, Vec::new()))
                .collect(),
        }
    }

    fn drill(id: u64, category: &str, minutes: u32) -> Drill {
        Drill {
            id,
            title: format!("{category} drill {id}"),
            description: String::new(),
            drill_type: DrillType::TimeBased,
            duration_minutes: Some(minutes),
            sets: None,
            reps: None,
            rest_seconds: None,
            equipment: [Equipment::Ball].into_iter().collect(),
            adaptable_equipment: BTreeSet::new(),
            suitable_locations: [TrainingLocation::Backyard].into_iter().collect(),
            intensity: None,
            training_styles: BTreeSet::new(),
            difficulty: Some(Difficulty::Intermediate),
            primary_skill: Some(SkillFocus::new(category, "general")),
            secondary_skills: Vec::new(),
            instructions: Vec::new(),
            tips: Vec::new(),
        }
    }

    #[test]
    fn test_round_robin_alternates_skills() {
        let catalog = vec![
            drill(1, "passing", 5),
            drill(2, "passing", 5),
            drill(3, "shooting", 5),
            drill(4, "shooting", 5),
        ];
        let session =
            generate_session(&configuration(20, &["passing", "shooting"]), &catalog).unwrap();

        let categories: Vec<&str> = session
            .drills
            .iter()
            .map(|d| d.skill_category.as_str())
            .collect();
        assert_eq!(categories, vec!["passing", "shooting", "passing", "shooting"]);
        assert_eq!(session.drill_ids(), vec![1, 3, 2, 4]);
        assert_eq!(session.drills[2].pass, 1);
    }

    #[test]
    fn test_duplicate_categories_are_merged() {
        let mut config = configuration(30, &["passing"]);
        config.target_skills = vec![
            TargetSkill::new("Passing", vec!["short_passing".to_owned()]),
            TargetSkill::new("shooting", Vec::new()),
            TargetSkill::new("passing", vec!["long_passing".to_owned()]),
        ];
        let targets = validate_configuration(&config).unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].category, "passing");
        assert_eq!(targets[0].sub_skills, vec!["short_passing", "long_passing"]);
        assert_eq!(targets[1].category, "shooting");
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            validate_configuration(&configuration(0, &["passing"])),
            Err(SessionError::InvalidDuration {
                minutes: 0,
                max: MAX_SESSION_MINUTES
            })
        );
        assert_eq!(
            validate_configuration(&configuration(30, &[])),
            Err(SessionError::NoTargetSkills)
        );
        assert_eq!(
            validate_configuration(&configuration(30, &["passing", "  "])),
            Err(SessionError::InvalidTargetSkill {
                index: 1,
                reason: "category is empty"
            })
        );
    }

    #[test]
    fn test_intensity_modifier() {
        assert!(
            (intensity_modifier(Difficulty::Advanced, Some(Difficulty::Beginner)) - 1.2).abs()
                < f64::EPSILON
        );
        assert!(
            (intensity_modifier(Difficulty::Beginner, Some(Difficulty::Advanced)) - 0.8).abs()
                < f64::EPSILON
        );
        assert!((intensity_modifier(Difficulty::Beginner, None) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_session_error_maps_to_app_error() {
        let error: AppError = SessionError::NoTargetSkills.into();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.http_status(), 400);
    }
}
