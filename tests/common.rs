// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides drill builders, in-memory catalogs, and server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `bravoball_server`

use bravoball_server::{
    config::{Environment, ServerConfig, SessionGeneratorConfig},
    database::{self, DrillCatalog},
    intelligence::SessionGenerator,
    models::{
        Difficulty, Drill, DrillType, Equipment, Intensity, SessionConfiguration, SkillFocus,
        TargetSkill, TrainingLocation, TrainingStyle,
    },
    resources::ServerResources,
};
use std::collections::BTreeSet;
use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A well-formed 10 minute time-based drill needing only a ball
pub fn drill(id: u64, category: &str, sub_skill: &str) -> Drill {
    Drill {
        id,
        title: format!("Drill {id}"),
        description: format!("{category} drill focused on {sub_skill}"),
        drill_type: DrillType::TimeBased,
        duration_minutes: Some(10),
        sets: None,
        reps: None,
        rest_seconds: None,
        equipment: [Equipment::Ball].into_iter().collect(),
        adaptable_equipment: BTreeSet::new(),
        suitable_locations: [
            TrainingLocation::FullField,
            TrainingLocation::SmallField,
            TrainingLocation::Backyard,
        ]
        .into_iter()
        .collect(),
        intensity: Some(Intensity::Medium),
        training_styles: [TrainingStyle::MediumIntensity].into_iter().collect(),
        difficulty: Some(Difficulty::Beginner),
        primary_skill: Some(SkillFocus::new(category, sub_skill)),
        secondary_skills: Vec::new(),
        instructions: vec!["Warm up".to_owned(), "Repeat".to_owned()],
        tips: vec!["Stay relaxed".to_owned()],
    }
}

/// A small mixed catalog covering four categories
pub fn sample_catalog() -> Vec<Drill> {
    let mut wall_passing = drill(5, "passing", "short_passing");
    wall_passing.equipment.insert(Equipment::Wall);

    let mut cone_dribble = drill(6, "dribbling", "speed_dribbling");
    cone_dribble.equipment.insert(Equipment::Cones);
    cone_dribble.adaptable_equipment.insert(Equipment::Cones);
    cone_dribble.duration_minutes = Some(15);

    let mut finishing = drill(7, "shooting", "finesse_shots");
    finishing.difficulty = Some(Difficulty::Advanced);
    finishing.secondary_skills = vec![SkillFocus::new("first_touch", "ground_control")];

    vec![
        drill(1, "shooting", "power_shots"),
        drill(2, "dribbling", "close_control"),
        drill(3, "passing", "short_passing"),
        drill(4, "first_touch", "juggling"),
        wall_passing,
        cone_dribble,
        finishing,
    ]
}

/// A beginner configuration at the backyard with only a ball
pub fn configuration(duration_minutes: u32, targets: &[(&str, &[&str])]) -> SessionConfiguration {
    SessionConfiguration {
        duration_minutes,
        available_equipment: [Equipment::Ball].into_iter().collect(),
        training_location: TrainingLocation::Backyard,
        training_style: TrainingStyle::MediumIntensity,
        difficulty: Difficulty::Beginner,
        target_skills: targets
            .iter()
            .map(|(category, sub_skills)| {
                TargetSkill::new(
                    *category,
                    sub_skills.iter().map(|s| (*s).to_owned()).collect(),
                )
            })
            .collect(),
    }
}

/// Server configuration suitable for tests
pub fn test_server_config() -> ServerConfig {
    ServerConfig {
        http_port: 8081,
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        database_url: "sqlite::memory:".to_owned(),
        environment: Environment::Testing,
        log_level: "warn".to_owned(),
        cors_origins: vec!["*".to_owned()],
        session: SessionGeneratorConfig::default(),
    }
}

/// Empty in-memory drill catalog with its schema created
pub async fn create_test_catalog() -> DrillCatalog {
    init_test_logging();
    let pool = database::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    let catalog = DrillCatalog::new(pool);
    catalog
        .ensure_schema()
        .await
        .expect("Failed to create drill schema");
    catalog
}

/// In-memory catalog holding the given drills
pub async fn create_seeded_catalog(drills: &[Drill]) -> DrillCatalog {
    let catalog = create_test_catalog().await;
    for drill in drills {
        catalog
            .insert_drill(drill)
            .await
            .expect("Failed to insert drill");
    }
    catalog
}

/// Server resources over a seeded in-memory catalog
pub async fn create_test_resources(drills: &[Drill]) -> Arc<ServerResources> {
    let catalog = create_seeded_catalog(drills).await;
    Arc::new(ServerResources::new(
        catalog,
        SessionGenerator::default(),
        test_server_config(),
    ))
}
