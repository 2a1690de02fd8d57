// ABOUTME: Session generation command for bravoball-cli
// ABOUTME: Reads a JSON configuration, runs the generator, and prints the session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

use bravoball_server::{
    config::SessionGeneratorConfig,
    errors::{AppError, AppResult},
    intelligence::SessionGenerator,
    models::Drill,
    routes::GenerateSessionRequest,
};
use std::path::Path;
use tokio::fs;
use tracing::info;

use crate::helpers::display::display_session;

type Result<T> = AppResult<T>;

/// Load a drill catalog from a JSON array file
pub async fn load_catalog_file(path: &Path) -> Result<Vec<Drill>> {
    let raw = read_file(path).await?;
    let drills: Vec<Drill> = serde_json::from_str(&raw).map_err(|e| {
        AppError::invalid_input(format!("Invalid drill catalog {}: {e}", path.display()))
    })?;
    info!("Loaded {} drills from {}", drills.len(), path.display());
    Ok(drills)
}

/// Generate a session from a configuration file
pub async fn generate(config_path: &Path, catalog: &[Drill], json: bool) -> Result<()> {
    let raw = read_file(config_path).await?;
    let request: GenerateSessionRequest = serde_json::from_str(&raw).map_err(|e| {
        AppError::invalid_input(format!(
            "Invalid session configuration {}: {e}",
            config_path.display()
        ))
    })?;
    let configuration = request.into_configuration()?;

    let generator = SessionGenerator::new(SessionGeneratorConfig::from_env()?)?;
    let session = generator.generate_session(&configuration, catalog)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    } else {
        display_session(&session);
    }
    Ok(())
}

async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| AppError::invalid_input(format!("Cannot read {}: {e}", path.display())))
}
