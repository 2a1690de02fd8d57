// ABOUTME: Drill catalog record and the tag enumerations used to match drills
// ABOUTME: Equipment, locations, training styles, difficulty levels, and skill focus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// ============================================================================
// Tag Enumerations
// ============================================================================

/// How a drill measures its work
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DrillType {
    /// Runs for a fixed number of minutes
    #[default]
    TimeBased,
    /// Counted in sets of repetitions
    RepsBased,
    /// Counted in sets without a rep count
    SetsBased,
    /// Open-ended continuous work
    Continuous,
}

impl DrillType {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TimeBased => "time_based",
            Self::RepsBased => "reps_based",
            Self::SetsBased => "sets_based",
            Self::Continuous => "continuous",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_key(s).as_str() {
            "time_based" => Some(Self::TimeBased),
            "reps_based" | "rep_based" => Some(Self::RepsBased),
            "sets_based" | "set_based" => Some(Self::SetsBased),
            "continuous" => Some(Self::Continuous),
            _ => None,
        }
    }
}

/// Training equipment a drill may require
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    /// Soccer ball
    Ball,
    /// Marker cones
    Cones,
    /// Rebound wall
    Wall,
    /// Goals of any size
    Goals,
}

impl Equipment {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ball => "ball",
            Self::Cones => "cones",
            Self::Wall => "wall",
            Self::Goals => "goals",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_key(s).as_str() {
            "ball" => Some(Self::Ball),
            "cones" | "cone" => Some(Self::Cones),
            "wall" => Some(Self::Wall),
            "goals" | "goal" => Some(Self::Goals),
            _ => None,
        }
    }
}

/// Where a drill can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingLocation {
    /// Full size pitch
    FullField,
    /// Small sided pitch or park
    SmallField,
    /// Indoor court or gym
    IndoorCourt,
    /// Garden or yard
    Backyard,
    /// Living room sized space
    SmallRoom,
}

impl TrainingLocation {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullField => "full_field",
            Self::SmallField => "small_field",
            Self::IndoorCourt => "indoor_court",
            Self::Backyard => "backyard",
            Self::SmallRoom => "small_room",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_key(s).as_str() {
            "full_field" => Some(Self::FullField),
            "small_field" => Some(Self::SmallField),
            "indoor_court" => Some(Self::IndoorCourt),
            "backyard" => Some(Self::Backyard),
            "small_room" => Some(Self::SmallRoom),
            _ => None,
        }
    }
}

/// Overall character of a session or drill
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStyle {
    /// Light technical work
    LowIntensity,
    /// Balanced work rate
    #[default]
    MediumIntensity,
    /// Demanding, game-speed work
    HighIntensity,
    /// Sharpening before a match
    GamePrep,
    /// Light work after a match
    GameRecovery,
    /// Minimal load
    RestDay,
}

impl TrainingStyle {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LowIntensity => "low_intensity",
            Self::MediumIntensity => "medium_intensity",
            Self::HighIntensity => "high_intensity",
            Self::GamePrep => "game_prep",
            Self::GameRecovery => "game_recovery",
            Self::RestDay => "rest_day",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_key(s).as_str() {
            "low_intensity" => Some(Self::LowIntensity),
            "medium_intensity" => Some(Self::MediumIntensity),
            "high_intensity" => Some(Self::HighIntensity),
            "game_prep" => Some(Self::GamePrep),
            "game_recovery" => Some(Self::GameRecovery),
            "rest_day" => Some(Self::RestDay),
            _ => None,
        }
    }
}

/// Physical load of a single drill
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Low load
    Low,
    /// Moderate load
    Medium,
    /// High load
    High,
}

impl Intensity {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_key(s).as_str() {
            "low" | "low_intensity" => Some(Self::Low),
            "medium" | "medium_intensity" => Some(Self::Medium),
            "high" | "high_intensity" => Some(Self::High),
            _ => None,
        }
    }
}

/// Difficulty level on an ordinal scale (beginner < intermediate < advanced)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Suitable for players new to the skill
    #[default]
    Beginner,
    /// Requires some practice
    Intermediate,
    /// For experienced players
    Advanced,
}

impl Difficulty {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Position on the ordinal scale, starting at zero
    #[must_use]
    pub const fn level(&self) -> u8 {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
        }
    }

    /// Absolute number of steps between two levels
    #[must_use]
    pub const fn distance(&self, other: Self) -> u8 {
        self.level().abs_diff(other.level())
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_key(s).as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

macro_rules! impl_display_via_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display_via_as_str!(
    DrillType,
    Equipment,
    TrainingLocation,
    TrainingStyle,
    Intensity,
    Difficulty,
);

// ============================================================================
// Skill Focus
// ============================================================================

/// A skill category and one of its sub-skills (e.g. `shooting` / `finishing`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SkillFocus {
    /// Skill category such as `passing` or `shooting`
    pub category: String,
    /// Sub-skill within the category
    pub sub_skill: String,
}

impl SkillFocus {
    /// Create a skill focus with normalized keys
    pub fn new(category: impl AsRef<str>, sub_skill: impl AsRef<str>) -> Self {
        Self {
            category: normalize_key(category.as_ref()),
            sub_skill: normalize_key(sub_skill.as_ref()),
        }
    }
}

/// Normalize a tag or skill key to lowercase `snake_case`
///
/// Leading and trailing whitespace is dropped; inner spaces and hyphens become
/// underscores so `"First Touch"`, `"first-touch"` and `"first_touch"` compare equal.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

// ============================================================================
// Drill
// ============================================================================

/// A single training exercise from the drill catalog
///
/// Drills are immutable reference data: the generator only ever reads them
/// from a snapshot handed in by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drill {
    /// Catalog identifier, also the tie-break key during selection
    pub id: u64,
    /// Display title
    pub title: String,
    /// Longer description
    #[serde(default)]
    pub description: String,
    /// How the drill measures work
    #[serde(default)]
    pub drill_type: DrillType,
    /// Declared duration in minutes
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Default number of sets
    #[serde(default)]
    pub sets: Option<u32>,
    /// Default repetitions per set
    #[serde(default)]
    pub reps: Option<u32>,
    /// Rest between sets in seconds
    #[serde(default)]
    pub rest_seconds: Option<u32>,
    /// Equipment the drill requires
    #[serde(default)]
    pub equipment: BTreeSet<Equipment>,
    /// Required equipment that can be replaced by household items
    #[serde(default)]
    pub adaptable_equipment: BTreeSet<Equipment>,
    /// Locations the drill fits
    #[serde(default)]
    pub suitable_locations: BTreeSet<TrainingLocation>,
    /// Physical load
    #[serde(default)]
    pub intensity: Option<Intensity>,
    /// Training styles the drill suits
    #[serde(default)]
    pub training_styles: BTreeSet<TrainingStyle>,
    /// Difficulty level
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Main skill trained; a drill without one cannot be scored
    #[serde(default)]
    pub primary_skill: Option<SkillFocus>,
    /// Additional skills trained
    #[serde(default)]
    pub secondary_skills: Vec<SkillFocus>,
    /// Step-by-step instructions
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Coaching tips
    #[serde(default)]
    pub tips: Vec<String>,
}

impl Drill {
    /// Whether the drill carries every field the scorer needs
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.primary_skill.is_some()
    }

    /// Whether any of the drill's skills (primary or secondary) is in `category`
    ///
    /// Both sides are compared through [`normalize_key`].
    #[must_use]
    pub fn trains_category(&self, category: &str) -> bool {
        let category = normalize_key(category);
        self.primary_skill
            .iter()
            .chain(self.secondary_skills.iter())
            .any(|skill| normalize_key(&skill.category) == category)
    }

    /// Required equipment that is neither available nor adaptable
    #[must_use]
    pub fn missing_equipment(&self, available: &BTreeSet<Equipment>) -> BTreeSet<Equipment> {
        self.equipment
            .iter()
            .filter(|item| !available.contains(*item) && !self.adaptable_equipment.contains(*item))
            .copied()
            .collect()
    }

    /// Required equipment the player lacks but the drill can do without
    #[must_use]
    pub fn substituted_equipment(&self, available: &BTreeSet<Equipment>) -> BTreeSet<Equipment> {
        self.equipment
            .iter()
            .filter(|item| !available.contains(*item) && self.adaptable_equipment.contains(*item))
            .copied()
            .collect()
    }
}
