// ABOUTME: Integration tests for the session generator
// ABOUTME: Covers hard-constraint safety, budget, uniqueness, determinism, and selection scenarios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use bravoball_server::intelligence::duration::estimate_minutes;
use bravoball_server::intelligence::{
    generate_session, DurationEstimates, SessionError, SessionGenerator, SessionGeneratorConfig,
};
use bravoball_server::models::{
    Difficulty, Drill, DrillType, Equipment, SessionConfiguration, SkillFocus, TargetSkill,
    TrainingLocation, TrainingStyle,
};
use common::{configuration, drill, sample_catalog};
use std::collections::BTreeSet;

const LOCATIONS: [TrainingLocation; 5] = [
    TrainingLocation::FullField,
    TrainingLocation::SmallField,
    TrainingLocation::IndoorCourt,
    TrainingLocation::Backyard,
    TrainingLocation::SmallRoom,
];

const EQUIPMENT: [Equipment; 4] = [
    Equipment::Ball,
    Equipment::Cones,
    Equipment::Wall,
    Equipment::Goals,
];

const CATEGORIES: [&str; 5] = ["dribbling", "passing", "shooting", "first_touch", "fitness"];

/// Small deterministic generator so property checks cover varied catalogs
struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn subset<T: Copy + Ord>(&mut self, items: &[T]) -> BTreeSet<T> {
        items.iter().copied().filter(|_| self.next_u64() % 2 == 0).collect()
    }
}

fn random_catalog(rng: &mut Lcg, size: usize) -> Vec<Drill> {
    (0..size)
        .map(|index| {
            let mut d = drill(
                index as u64 + 1,
                CATEGORIES[rng.below(CATEGORIES.len())],
                "general",
            );
            d.drill_type = match rng.below(4) {
                0 => DrillType::TimeBased,
                1 => DrillType::RepsBased,
                2 => DrillType::SetsBased,
                _ => DrillType::Continuous,
            };
            d.duration_minutes = (rng.below(4) > 0).then(|| 3 + rng.below(15) as u32);
            d.sets = Some(1 + rng.below(4) as u32);
            d.reps = Some(5 + rng.below(15) as u32);
            d.equipment = rng.subset(&EQUIPMENT);
            d.adaptable_equipment = d
                .equipment
                .iter()
                .copied()
                .filter(|_| rng.below(3) == 0)
                .collect();
            d.suitable_locations = rng.subset(&LOCATIONS);
            d.difficulty = match rng.below(4) {
                0 => None,
                1 => Some(Difficulty::Beginner),
                2 => Some(Difficulty::Intermediate),
                _ => Some(Difficulty::Advanced),
            };
            d.secondary_skills = vec![SkillFocus::new(
                CATEGORIES[rng.below(CATEGORIES.len())],
                "general",
            )];
            d
        })
        .collect()
}

fn random_configuration(rng: &mut Lcg) -> SessionConfiguration {
    let skill_count = 1 + rng.below(3);
    SessionConfiguration {
        duration_minutes: 5 + rng.below(90) as u32,
        available_equipment: rng.subset(&EQUIPMENT),
        training_location: LOCATIONS[rng.below(LOCATIONS.len())],
        training_style: TrainingStyle::MediumIntensity,
        difficulty: Difficulty::Intermediate,
        target_skills: (0..skill_count)
            .map(|_| TargetSkill::new(CATEGORIES[rng.below(CATEGORIES.len())], Vec::new()))
            .collect(),
    }
}

#[test]
fn test_generated_sessions_respect_hard_constraints_and_budget() {
    let mut rng = Lcg(42);
    let estimates = DurationEstimates::default();

    for _ in 0..200 {
        let catalog = random_catalog(&mut rng, 40);
        let config = random_configuration(&mut rng);
        let session = generate_session(&config, &catalog).unwrap();

        let mut seen = BTreeSet::new();
        let mut total = 0;
        for scored in &session.drills {
            let d = &scored.drill;
            assert!(d.suitable_locations.contains(&config.training_location));
            assert!(
                d.missing_equipment(&config.available_equipment).is_empty(),
                "drill {} needs unavailable equipment",
                d.id
            );
            assert!(seen.insert(d.id), "drill {} selected twice", d.id);
            assert_eq!(scored.parameters.duration_minutes, estimate_minutes(d, &estimates));
            total += scored.parameters.duration_minutes;
        }
        assert_eq!(total, session.total_duration_minutes);
        assert!(session.total_duration_minutes <= config.duration_minutes);
        assert_eq!(session.requested_duration_minutes, config.duration_minutes);
    }
}

#[test]
fn test_generation_is_deterministic() {
    let mut rng = Lcg(7);
    let catalog = random_catalog(&mut rng, 60);
    let config = random_configuration(&mut rng);
    let generator = SessionGenerator::default();

    let first = serde_json::to_string(&generator.generate_session(&config, &catalog).unwrap())
        .unwrap();
    let second = serde_json::to_string(&generator.generate_session(&config, &catalog).unwrap())
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_no_drill_for_location_yields_empty_session() {
    let config = SessionConfiguration {
        training_location: TrainingLocation::SmallRoom,
        ..configuration(60, &[("shooting", &[])])
    };
    let session = generate_session(&config, &sample_catalog()).unwrap();
    assert!(session.is_empty());
    assert_eq!(session.total_duration_minutes, 0);
    assert_eq!(session.requested_duration_minutes, 60);
}

#[test]
fn test_single_matching_drill_is_selected() {
    let mut shooting = drill(1, "shooting", "finishing");
    shooting.suitable_locations = [TrainingLocation::SmallField].into_iter().collect();

    let config = SessionConfiguration {
        training_location: TrainingLocation::SmallField,
        ..configuration(30, &[("shooting", &["finishing"])])
    };
    let session = generate_session(&config, &[shooting]).unwrap();

    assert_eq!(session.drill_ids(), vec![1]);
    assert_eq!(session.total_duration_minutes, 10);
    assert_eq!(session.skills_covered, vec!["shooting"]);
    assert_eq!(session.drills[0].pass, 0);
}

#[test]
fn test_budget_below_shortest_drill_yields_empty_session() {
    let session = generate_session(
        &configuration(5, &[("shooting", &[]), ("dribbling", &[])]),
        &sample_catalog(),
    )
    .unwrap();
    assert!(session.is_empty());
}

#[test]
fn test_score_tie_prefers_lower_id() {
    let catalog = vec![
        drill(9, "passing", "short_passing"),
        drill(4, "passing", "short_passing"),
    ];
    let session =
        generate_session(&configuration(10, &[("passing", &["short_passing"])]), &catalog)
            .unwrap();
    assert_eq!(session.drill_ids(), vec![4]);
}

#[test]
fn test_relevant_drill_beats_off_topic_drill_with_better_fit() {
    // Category-only match, two levels above the player, no style listed
    let mut power_shots = drill(1, "shooting", "power_shots");
    power_shots.difficulty = Some(Difficulty::Advanced);
    power_shots.training_styles.clear();
    let short_passing = drill(2, "passing", "short_passing");

    let session = generate_session(
        &configuration(10, &[("shooting", &["finishing"])]),
        &[power_shots, short_passing],
    )
    .unwrap();

    assert_eq!(session.drill_ids(), vec![1]);
    assert_eq!(session.skills_covered, vec!["shooting"]);
}

#[test]
fn test_zero_overlap_filler_follows_every_relevant_drill() {
    let filler = drill(1, "passing", "short_passing");
    let mut power_shots = drill(2, "shooting", "power_shots");
    power_shots.difficulty = Some(Difficulty::Advanced);
    power_shots.training_styles.clear();
    let mut volleys = drill(3, "shooting", "volleying");
    volleys.difficulty = Some(Difficulty::Advanced);
    volleys.training_styles.clear();

    let session = generate_session(
        &configuration(30, &[("shooting", &[])]),
        &[filler, power_shots, volleys],
    )
    .unwrap();

    assert_eq!(session.drill_ids(), vec![2, 3, 1]);
    assert_eq!(session.skills_covered, vec!["shooting"]);
}

#[test]
fn test_difficulty_and_style_break_ties_in_relevance() {
    let mut advanced = drill(1, "shooting", "power_shots");
    advanced.difficulty = Some(Difficulty::Advanced);
    advanced.training_styles.clear();
    let at_level = drill(2, "shooting", "power_shots");

    let session = generate_session(
        &configuration(10, &[("shooting", &["power_shots"])]),
        &[advanced, at_level],
    )
    .unwrap();

    assert_eq!(session.drill_ids(), vec![2]);
}

#[test]
fn test_filler_drill_does_not_mark_skill_covered() {
    let session = generate_session(
        &configuration(10, &[("shooting", &[])]),
        &[drill(1, "passing", "short_passing")],
    )
    .unwrap();

    assert_eq!(session.drill_ids(), vec![1]);
    assert_eq!(session.drills[0].skill_category, "shooting");
    assert!(session.skills_covered.is_empty());
}

#[test]
fn test_round_robin_follows_configuration_order() {
    let session = generate_session(
        &configuration(40, &[("dribbling", &[]), ("shooting", &[])]),
        &sample_catalog(),
    )
    .unwrap();

    // Cones are adaptable for drill 6, wall drill 5 is filtered out
    assert_eq!(session.drill_ids()[..2], [2, 1]);
    assert_eq!(session.drills[0].skill_category, "dribbling");
    assert_eq!(session.drills[1].skill_category, "shooting");
    assert!(!session.drill_ids().contains(&5));
    assert!(session.total_duration_minutes <= 40);
}

#[test]
fn test_substituted_equipment_is_reported() {
    let session = generate_session(
        &configuration(15, &[("dribbling", &["speed_dribbling"])]),
        &sample_catalog(),
    )
    .unwrap();

    let scored = session
        .drills
        .iter()
        .find(|d| d.drill.id == 6)
        .expect("adaptable cone drill should be selected");
    assert_eq!(
        scored.substituted_equipment,
        BTreeSet::from([Equipment::Cones])
    );
}

#[test]
fn test_skill_is_retired_when_next_drill_does_not_fit() {
    let mut long = drill(1, "passing", "short_passing");
    long.duration_minutes = Some(25);
    let short = drill(2, "shooting", "power_shots");

    let session = generate_session(
        &configuration(20, &[("passing", &["short_passing"]), ("shooting", &[])]),
        &[long, short],
    )
    .unwrap();

    // passing's best candidate (25 min) exceeds the budget, shooting still runs
    assert_eq!(session.drill_ids(), vec![2]);
    assert_eq!(session.skills_covered, vec!["shooting"]);
}

#[test]
fn test_additional_passes_fill_remaining_budget() {
    let catalog = vec![
        drill(1, "shooting", "power_shots"),
        drill(2, "shooting", "finesse_shots"),
        drill(3, "shooting", "volleying"),
    ];
    let session = generate_session(&configuration(30, &[("shooting", &[])]), &catalog).unwrap();

    assert_eq!(session.drill_ids(), vec![1, 2, 3]);
    let passes: Vec<u32> = session.drills.iter().map(|d| d.pass).collect();
    assert_eq!(passes, vec![0, 1, 2]);
    assert_eq!(session.total_duration_minutes, 30);
}

#[test]
fn test_malformed_drills_are_excluded() {
    let mut malformed = drill(1, "shooting", "power_shots");
    malformed.primary_skill = None;
    let valid = drill(2, "dribbling", "close_control");

    let session = generate_session(
        &configuration(60, &[("shooting", &[])]),
        &[malformed.clone(), valid],
    )
    .unwrap();
    assert_eq!(session.drill_ids(), vec![2]);

    let session = generate_session(&configuration(60, &[("shooting", &[])]), &[malformed]).unwrap();
    assert!(session.is_empty());
}

#[test]
fn test_duplicate_catalog_ids_keep_first_occurrence() {
    let first = drill(3, "passing", "short_passing");
    let mut duplicate = drill(3, "passing", "short_passing");
    duplicate.title = "Duplicate".to_owned();

    let session =
        generate_session(&configuration(60, &[("passing", &[])]), &[first, duplicate]).unwrap();
    assert_eq!(session.len(), 1);
    assert_eq!(session.drills[0].drill.title, "Drill 3");
}

#[test]
fn test_duplicate_target_categories_are_deduplicated() {
    let catalog = vec![
        drill(1, "passing", "short_passing"),
        drill(2, "passing", "long_passing"),
    ];
    let config = configuration(
        10,
        &[("Passing", &["short_passing"]), ("passing", &["long_passing"])],
    );
    let session = generate_session(&config, &catalog).unwrap();

    // One slot per pass: only one 10 minute drill fits
    assert_eq!(session.len(), 1);
    assert_eq!(session.skills_covered, vec!["passing"]);
}

#[test]
fn test_invalid_configurations_are_rejected() {
    let catalog = sample_catalog();

    assert_eq!(
        generate_session(&configuration(0, &[("passing", &[])]), &catalog),
        Err(SessionError::InvalidDuration {
            minutes: 0,
            max: 240
        })
    );
    assert!(matches!(
        generate_session(&configuration(241, &[("passing", &[])]), &catalog),
        Err(SessionError::InvalidDuration { minutes: 241, .. })
    ));
    assert_eq!(
        generate_session(&configuration(30, &[]), &catalog),
        Err(SessionError::NoTargetSkills)
    );
    assert!(matches!(
        generate_session(&configuration(30, &[("passing", &[""])]), &catalog),
        Err(SessionError::InvalidTargetSkill { index: 0, .. })
    ));
}

#[test]
fn test_min_score_threshold_excludes_weak_matches() {
    let config = SessionGeneratorConfig {
        min_score: 8.0,
        ..SessionGeneratorConfig::default()
    };
    let generator = SessionGenerator::new(config).unwrap();

    let session = generator
        .generate_session(&configuration(60, &[("shooting", &[])]), &sample_catalog())
        .unwrap();

    assert!(!session.is_empty());
    assert!(session
        .drills
        .iter()
        .all(|d| d.drill.trains_category("shooting") && d.score >= 8.0));
}

#[test]
fn test_intensity_modifier_reflects_player_level() {
    let mut advanced = drill(1, "shooting", "power_shots");
    advanced.difficulty = Some(Difficulty::Advanced);

    let session =
        generate_session(&configuration(30, &[("shooting", &[])]), &[advanced]).unwrap();
    assert!((session.drills[0].intensity_modifier - 0.8).abs() < f64::EPSILON);
}
