// ABOUTME: Criterion benchmarks for drill scoring and session generation
// ABOUTME: Measures generator throughput across catalog sizes and target skill counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

//! Criterion benchmarks for the session generator.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use bravoball_server::intelligence::{DrillScorer, SessionGenerator};
use bravoball_server::models::{
    Difficulty, Drill, DrillType, Equipment, Intensity, SessionConfiguration, SkillFocus,
    TargetSkill, TrainingLocation, TrainingStyle,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::BTreeSet;

const CATEGORIES: [(&str, &[&str]); 4] = [
    ("dribbling", &["close_control", "speed_dribbling", "ball_mastery"]),
    ("passing", &["short_passing", "long_passing", "technique"]),
    ("shooting", &["power_shots", "finesse_shots", "volleying"]),
    ("first_touch", &["ground_control", "juggling", "turn_with_ball"]),
];

const DIFFICULTIES: [Difficulty; 3] = [
    Difficulty::Beginner,
    Difficulty::Intermediate,
    Difficulty::Advanced,
];

/// Deterministic synthetic catalog
fn generate_catalog(count: usize) -> Vec<Drill> {
    (0..count)
        .map(|index| {
            let (category, sub_skills) = CATEGORIES[index % CATEGORIES.len()];
            let (other_category, other_sub_skills) = CATEGORIES[(index + 1) % CATEGORIES.len()];
            let sub_skill = sub_skills[index % sub_skills.len()];
            let drill_type = match index % 3 {
                0 => DrillType::TimeBased,
                1 => DrillType::RepsBased,
                _ => DrillType::SetsBased,
            };

            Drill {
                id: index as u64 + 1,
                title: format!("Bench drill {index}"),
                description: String::new(),
                drill_type,
                duration_minutes: Some(5 + (index % 4) as u32 * 5),
                sets: Some(2 + (index % 3) as u32),
                reps: Some(8 + (index % 5) as u32),
                rest_seconds: Some(30),
                equipment: [Equipment::Ball].into_iter().collect(),
                adaptable_equipment: BTreeSet::new(),
                suitable_locations: [TrainingLocation::FullField, TrainingLocation::Backyard]
                    .into_iter()
                    .collect(),
                intensity: Some(Intensity::Medium),
                training_styles: [TrainingStyle::MediumIntensity].into_iter().collect(),
                difficulty: Some(DIFFICULTIES[index % DIFFICULTIES.len()]),
                primary_skill: Some(SkillFocus::new(category, sub_skill)),
                secondary_skills: vec![SkillFocus::new(
                    other_category,
                    other_sub_skills[index % other_sub_skills.len()],
                )],
                instructions: Vec::new(),
                tips: Vec::new(),
            }
        })
        .collect()
}

fn configuration(skill_count: usize, duration_minutes: u32) -> SessionConfiguration {
    SessionConfiguration {
        duration_minutes,
        available_equipment: [Equipment::Ball].into_iter().collect(),
        training_location: TrainingLocation::Backyard,
        training_style: TrainingStyle::MediumIntensity,
        difficulty: Difficulty::Intermediate,
        target_skills: CATEGORIES
            .iter()
            .take(skill_count)
            .map(|(category, sub_skills)| {
                TargetSkill::new(*category, vec![sub_skills[0].to_owned()])
            })
            .collect(),
    }
}

fn bench_generate_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_session");
    let generator = SessionGenerator::default();
    let config = configuration(3, 60);

    for size in [50_usize, 500, 5_000] {
        let catalog = generate_catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("catalog", size), &catalog, |b, catalog| {
            b.iter(|| {
                generator
                    .generate_session(black_box(&config), black_box(catalog))
                    .map(|session| session.len())
            });
        });
    }

    group.finish();
}

fn bench_target_skill_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("target_skills");
    let generator = SessionGenerator::default();
    let catalog = generate_catalog(1_000);

    for skills in 1..=CATEGORIES.len() {
        let config = configuration(skills, 120);
        group.bench_with_input(BenchmarkId::new("skills", skills), &config, |b, config| {
            b.iter(|| generator.generate_session(black_box(config), black_box(&catalog)));
        });
    }

    group.finish();
}

fn bench_score_single_drill(c: &mut Criterion) {
    let scorer = DrillScorer::default();
    let catalog = generate_catalog(1);
    let config = configuration(CATEGORIES.len(), 60);

    c.bench_function("score_single_drill", |b| {
        b.iter(|| scorer.score(black_box(&catalog[0]), black_box(&config)));
    });
}

criterion_group!(
    benches,
    bench_generate_session,
    bench_target_skill_count,
    bench_score_single_drill
);
criterion_main!(benches);
