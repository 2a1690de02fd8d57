// ABOUTME: Maps app display skill names to backend skill identifiers and back
// ABOUTME: Groups identifiers into target skills for session configurations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

//! # Skill Mapper
//!
//! The mobile app shows skills by display name ("Power shots"); the backend
//! identifies them as `category-sub_skill` (`shooting-power_shots`). Some
//! display names appear in more than one category ("Positioning",
//! "Agility"); looking such a name up yields every matching skill.

use bravoball_core::models::{normalize_key, SkillFocus, TargetSkill};
use serde::Serialize;

/// One row of the display-name table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillEntry {
    /// Name shown in the app
    pub display_name: &'static str,
    /// Skill category
    pub category: &'static str,
    /// Sub-skill within the category
    pub sub_skill: &'static str,
}

impl SkillEntry {
    const fn new(display_name: &'static str, category: &'static str, sub_skill: &'static str) -> Self {
        Self {
            display_name,
            category,
            sub_skill,
        }
    }

    /// Backend identifier (`category-sub_skill`)
    #[must_use]
    pub fn identifier(&self) -> String {
        format!("{}-{}", self.category, self.sub_skill)
    }

    /// Skill focus for this entry
    #[must_use]
    pub fn focus(&self) -> SkillFocus {
        SkillFocus::new(self.category, self.sub_skill)
    }
}

/// Display-name table, grouped by category in app order
pub const SKILL_TABLE: &[SkillEntry] = &[
    SkillEntry::new("Close control", "dribbling", "close_control"),
    SkillEntry::new("Speed dribbling", "dribbling", "speed_dribbling"),
    SkillEntry::new("1v1 moves", "dribbling", "1v1_moves"),
    SkillEntry::new("Change of direction", "dribbling", "change_of_direction"),
    SkillEntry::new("Ball mastery", "dribbling", "ball_mastery"),
    SkillEntry::new("Ground control", "first_touch", "ground_control"),
    SkillEntry::new("Aerial control", "first_touch", "aerial_control"),
    SkillEntry::new("Turn with ball", "first_touch", "turn_with_ball"),
    SkillEntry::new("Touch and move", "first_touch", "touch_and_move"),
    SkillEntry::new("Juggling", "first_touch", "juggling"),
    SkillEntry::new("Short passing", "passing", "short_passing"),
    SkillEntry::new("Long passing", "passing", "long_passing"),
    SkillEntry::new("One touch passing", "passing", "one_touch_passing"),
    SkillEntry::new("Technique", "passing", "technique"),
    SkillEntry::new("Passing with movement", "passing", "passing_with_movement"),
    SkillEntry::new("Power shots", "shooting", "power_shots"),
    SkillEntry::new("Finesse shots", "shooting", "finesse_shots"),
    SkillEntry::new("First time shots", "shooting", "first_time_shots"),
    SkillEntry::new("1v1 to shoot", "shooting", "1v1_to_shoot"),
    SkillEntry::new("Shooting on the run", "shooting", "shooting_on_the_run"),
    SkillEntry::new("Volleying", "shooting", "volleying"),
    SkillEntry::new("Tackling", "defending", "tackling"),
    SkillEntry::new("Marking", "defending", "marking"),
    SkillEntry::new("Intercepting", "defending", "intercepting"),
    SkillEntry::new("Positioning", "defending", "positioning"),
    SkillEntry::new("Agility", "defending", "agility"),
    SkillEntry::new("Aerial defending", "defending", "aerial_defending"),
    SkillEntry::new("Catching", "goalkeeping", "catching"),
    SkillEntry::new("Shot stopping", "goalkeeping", "shot_stopping"),
    SkillEntry::new("Diving", "goalkeeping", "diving"),
    SkillEntry::new("Reflexes", "goalkeeping", "reflexes"),
    SkillEntry::new("Hand eye coordination", "goalkeeping", "hand_eye_coordination"),
    SkillEntry::new("Positioning", "goalkeeping", "positioning"),
    SkillEntry::new("Speed", "fitness", "speed"),
    SkillEntry::new("Agility", "fitness", "agility"),
    SkillEntry::new("Endurance", "fitness", "endurance"),
];

/// Skills matching a display name (case-insensitive)
#[must_use]
pub fn map_display_name(display_name: &str) -> Vec<SkillFocus> {
    let wanted = display_name.trim();
    SKILL_TABLE
        .iter()
        .filter(|entry| entry.display_name.eq_ignore_ascii_case(wanted))
        .map(SkillEntry::focus)
        .collect()
}

/// Skills for a list of display names; unknown names are skipped
#[must_use]
pub fn map_display_names<S: AsRef<str>>(display_names: &[S]) -> Vec<SkillFocus> {
    let mut skills: Vec<SkillFocus> = Vec::new();
    for name in display_names {
        for skill in map_display_name(name.as_ref()) {
            if !skills.contains(&skill) {
                skills.push(skill);
            }
        }
    }
    skills
}

/// Display name for a skill, if the table knows it
#[must_use]
pub fn display_name_for(skill: &SkillFocus) -> Option<&'static str> {
    SKILL_TABLE
        .iter()
        .find(|entry| entry.category == skill.category && entry.sub_skill == skill.sub_skill)
        .map(|entry| entry.display_name)
}

/// Parse a `category-sub_skill` identifier
#[must_use]
pub fn parse_identifier(identifier: &str) -> Option<SkillFocus> {
    let (category, sub_skill) = identifier.trim().split_once('-')?;
    if category.trim().is_empty() || sub_skill.trim().is_empty() {
        return None;
    }
    Some(SkillFocus::new(category, sub_skill))
}

/// Group skills by category into target skills, ordered by first appearance
#[must_use]
pub fn format_skills_for_session(skills: &[SkillFocus]) -> Vec<TargetSkill> {
    let mut targets: Vec<TargetSkill> = Vec::new();
    for skill in skills {
        let category = normalize_key(&skill.category);
        let sub_skill = normalize_key(&skill.sub_skill);
        match targets.iter_mut().find(|target| target.category == category) {
            Some(target) => {
                if !target.sub_skills.contains(&sub_skill) {
                    target.sub_skills.push(sub_skill);
                }
            }
            None => targets.push(TargetSkill::new(category, vec![sub_skill])),
        }
    }
    targets
}

/// Distinct categories in table order
#[must_use]
pub fn categories() -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for entry in SKILL_TABLE {
        if !seen.contains(&entry.category) {
            seen.push(entry.category);
        }
    }
    seen
}
