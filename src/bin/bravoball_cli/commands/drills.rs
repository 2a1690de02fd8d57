// ABOUTME: Drill catalog commands for bravoball-cli
// ABOUTME: Lists, shows, and searches drills stored in the database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

use bravoball_server::{
    database::{DrillCatalog, DrillFilter},
    errors::{AppError, AppResult},
    models::{Difficulty, TrainingLocation},
};

use crate::helpers::display::{display_drill, display_drill_row};

type Result<T> = AppResult<T>;

/// List drills matching the given filters
pub async fn list(
    catalog: &DrillCatalog,
    difficulty: Option<String>,
    location: Option<String>,
    skill: Option<String>,
    limit: Option<u32>,
) -> Result<()> {
    let difficulty = difficulty
        .map(|raw| {
            Difficulty::parse(&raw)
                .ok_or_else(|| AppError::invalid_input(format!("Unknown difficulty '{raw}'")))
        })
        .transpose()?;
    let location = location
        .map(|raw| {
            TrainingLocation::parse(&raw)
                .ok_or_else(|| AppError::invalid_input(format!("Unknown location '{raw}'")))
        })
        .transpose()?;

    let filter = DrillFilter {
        difficulty,
        location,
        skill_category: skill,
        limit,
        offset: None,
    };
    let drills = catalog.list_drills(&filter).await?;

    if drills.is_empty() {
        println!("No drills found");
        return Ok(());
    }
    for drill in &drills {
        display_drill_row(drill);
    }
    println!("\n{} drills", drills.len());
    Ok(())
}

/// Show a single drill in detail
pub async fn show(catalog: &DrillCatalog, id: u64) -> Result<()> {
    let drill = catalog
        .get_drill(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Drill {id}")))?;
    display_drill(&drill);
    Ok(())
}

/// Search drills by text
pub async fn search(catalog: &DrillCatalog, query: &str) -> Result<()> {
    let drills = catalog.search_drills(query, None).await?;
    if drills.is_empty() {
        println!("No drills match '{query}'");
        return Ok(());
    }
    for drill in &drills {
        display_drill_row(drill);
    }
    Ok(())
}
