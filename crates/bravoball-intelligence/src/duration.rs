// ABOUTME: Estimates how many minutes a drill consumes from a session budget
// ABOUTME: Constant lookup by drill type, seconds rounded up, never below one minute
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

//! Drill duration estimation.
//!
//! | Drill type | Estimate |
//! |---|---|
//! | `time_based` | declared minutes, else `fallback_minutes` |
//! | `reps_based` | `sets × reps × seconds_per_rep + (sets − 1) × rest` |
//! | `sets_based` | `sets × minutes_per_set + (sets − 1) × rest` |
//! | `continuous` | declared minutes, else `continuous_minutes` |
//!
//! `sets` defaults to 1 for reps-based drills. Rest defaults to
//! `default_rest_seconds`. A reps-based drill without reps, or a sets-based
//! drill without sets, falls back to its declared duration.

use crate::config::DurationEstimates;
use bravoball_core::models::{Drill, DrillType};

const SECONDS_PER_MINUTE: u64 = 60;

/// Estimated minutes the drill takes with its default prescription
#[must_use]
pub fn estimate_minutes(drill: &Drill, estimates: &DurationEstimates) -> u32 {
    let declared_or_fallback = drill.duration_minutes.unwrap_or(estimates.fallback_minutes);

    let minutes = match drill.drill_type {
        DrillType::TimeBased => declared_or_fallback,
        DrillType::Continuous => drill
            .duration_minutes
            .unwrap_or(estimates.continuous_minutes),
        DrillType::RepsBased => drill.reps.map_or(declared_or_fallback, |reps| {
            let sets = u64::from(drill.sets.unwrap_or(1).max(1));
            let work = sets * u64::from(reps) * u64::from(estimates.seconds_per_rep);
            seconds_to_minutes(work + rest_seconds(drill, estimates, sets))
        }),
        DrillType::SetsBased => drill.sets.map_or(declared_or_fallback, |sets| {
            let sets = u64::from(sets.max(1));
            let work = sets * u64::from(estimates.minutes_per_set) * SECONDS_PER_MINUTE;
            seconds_to_minutes(work + rest_seconds(drill, estimates, sets))
        }),
    };

    minutes.max(1)
}

fn rest_seconds(drill: &Drill, estimates: &DurationEstimates, sets: u64) -> u64 {
    let rest = drill.rest_seconds.unwrap_or(estimates.default_rest_seconds);
    sets.saturating_sub(1) * u64::from(rest)
}

fn seconds_to_minutes(seconds: u64) -> u32 {
    u32::try_from(seconds.div_ceil(SECONDS_PER_MINUTE)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn drill(drill_type: DrillType) -> Drill {
        Drill {
            id: 1,
            title: "Test drill".to_owned(),
            description: String::new(),
            drill_type,
            duration_minutes: None,
            sets: None,
            reps: None,
            rest_seconds: None,
            equipment: BTreeSet::new(),
            adaptable_equipment: BTreeSet::new(),
            suitable_locations: BTreeSet::new(),
            intensity: None,
            training_styles: BTreeSet::new(),
            difficulty: None,
            primary_skill: None,
            secondary_skills: Vec::new(),
            instructions: Vec::new(),
            tips: Vec::new(),
        }
    }

    #[test]
    fn test_time_based_uses_declared_duration() {
        let mut d = drill(DrillType::TimeBased);
        d.duration_minutes = Some(12);
        assert_eq!(estimate_minutes(&d, &DurationEstimates::default()), 12);

        d.duration_minutes = None;
        assert_eq!(estimate_minutes(&d, &DurationEstimates::default()), 10);
    }

    #[test]
    fn test_reps_based_rounds_up() {
        // 3 sets x 10 reps x 5 s = 150 s, plus 2 rests x 30 s = 210 s -> 4 min
        let mut d = drill(DrillType::RepsBased);
        d.sets = Some(3);
        d.reps = Some(10);
        assert_eq!(estimate_minutes(&d, &DurationEstimates::default()), 4);

        d.rest_seconds = Some(0);
        assert_eq!(estimate_minutes(&d, &DurationEstimates::default()), 3);
    }

    #[test]
    fn test_reps_based_without_reps_falls_back() {
        let mut d = drill(DrillType::RepsBased);
        d.sets = Some(4);
        d.duration_minutes = Some(7);
        assert_eq!(estimate_minutes(&d, &DurationEstimates::default()), 7);
    }

    #[test]
    fn test_sets_based_estimate() {
        // 4 x 3 min + 3 x 45 s = 855 s -> 15 min
        let mut d = drill(DrillType::SetsBased);
        d.sets = Some(4);
        d.rest_seconds = Some(45);
        assert_eq!(estimate_minutes(&d, &DurationEstimates::default()), 15);
    }

    #[test]
    fn test_continuous_default() {
        let d = drill(DrillType::Continuous);
        let estimates = DurationEstimates {
            continuous_minutes: 6,
            ..DurationEstimates::default()
        };
        assert_eq!(estimate_minutes(&d, &estimates), 6);
    }

    #[test]
    fn test_estimate_is_at_least_one_minute() {
        let mut d = drill(DrillType::RepsBased);
        d.reps = Some(1);
        assert_eq!(estimate_minutes(&d, &DurationEstimates::default()), 1);

        let mut t = drill(DrillType::TimeBased);
        t.duration_minutes = Some(0);
        assert_eq!(estimate_minutes(&t, &DurationEstimates::default()), 1);
    }
}
