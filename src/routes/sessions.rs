// ABOUTME: Session generation route handler
// ABOUTME: Resolves skill display names, loads a catalog snapshot, and runs the generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

//! Session generation routes
//!
//! `POST /sessions/generate` accepts a session configuration whose
//! `target_skills` entries are either `{ "category", "sub_skills" }` objects,
//! app display names (`"Power shots"`) or identifiers
//! (`"shooting-power_shots"`).

use crate::errors::{AppError, AppResult};
use crate::models::{
    Difficulty, Equipment, GeneratedSession, SessionConfiguration, TargetSkill, TrainingLocation,
    TrainingStyle,
};
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use bravoball_intelligence::skill_mapper::{
    format_skills_for_session, map_display_name, parse_identifier,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// A target skill as sent by clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetSkillInput {
    /// Explicit category with optional sub-skills
    Structured(TargetSkill),
    /// Display name or `category-sub_skill` identifier
    Name(String),
}

/// Session generation request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSessionRequest {
    /// Time budget in minutes
    pub duration_minutes: u32,
    /// Equipment on hand
    #[serde(default)]
    pub available_equipment: BTreeSet<Equipment>,
    /// Training location
    pub training_location: TrainingLocation,
    /// Desired session character
    #[serde(default)]
    pub training_style: TrainingStyle,
    /// Player level
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Skills to train, in priority order
    #[serde(default)]
    pub target_skills: Vec<TargetSkillInput>,
}

impl GenerateSessionRequest {
    /// Resolve skill names and build the generator configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a skill name matches neither the display table nor
    /// the `category-sub_skill` form
    pub fn into_configuration(self) -> AppResult<SessionConfiguration> {
        let mut target_skills = Vec::with_capacity(self.target_skills.len());
        for input in self.target_skills {
            match input {
                TargetSkillInput::Structured(target) => target_skills.push(target),
                TargetSkillInput::Name(name) => {
                    let mut skills = map_display_name(&name);
                    if skills.is_empty() {
                        skills.extend(parse_identifier(&name));
                    }
                    if skills.is_empty() {
                        return Err(AppError::invalid_input(format!("Unknown skill '{name}'"))
                            .with_details(serde_json::json!({ "field": "target_skills" })));
                    }
                    debug!(name = %name, resolved = skills.len(), "Resolved skill name");
                    target_skills.extend(format_skills_for_session(&skills));
                }
            }
        }

        Ok(SessionConfiguration {
            duration_minutes: self.duration_minutes,
            available_equipment: self.available_equipment,
            training_location: self.training_location,
            training_style: self.training_style,
            difficulty: self.difficulty,
            target_skills,
        })
    }
}

/// Session routes
pub struct SessionRoutes;

impl SessionRoutes {
    /// Create all session routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/sessions/generate", post(Self::handle_generate))
            .with_state(resources)
    }

    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<GenerateSessionRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) =
            body.map_err(|e| AppError::invalid_input(format!("Invalid request body: {e}")))?;
        let configuration = request.into_configuration()?;

        let catalog = resources.catalog.load_snapshot().await?;
        let session: GeneratedSession = resources
            .generator
            .generate_session(&configuration, &catalog)?;

        Ok((StatusCode::OK, Json(session)).into_response())
    }
}
