// ABOUTME: Drill catalog route handlers for browsing and searching drills
// ABOUTME: Provides list with filters, text search, and lookup by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

//! Drill catalog routes
//!
//! - `GET /drills?difficulty=&location=&skill=&limit=&offset=`
//! - `GET /drills/search?q=&limit=`
//! - `GET /drills/:id`

use crate::database::DrillFilter;
use crate::errors::AppError;
use crate::models::{Difficulty, Drill, TrainingLocation};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters for listing drills
#[derive(Debug, Deserialize, Default)]
struct ListDrillsQuery {
    difficulty: Option<String>,
    location: Option<String>,
    skill: Option<String>,
    limit: Option<u32>,
    offset: Option<u32>,
}

impl ListDrillsQuery {
    fn into_filter(self) -> Result<DrillFilter, AppError> {
        let difficulty = self
            .difficulty
            .map(|raw| {
                Difficulty::parse(&raw)
                    .ok_or_else(|| AppError::invalid_input(format!("Unknown difficulty '{raw}'")))
            })
            .transpose()?;
        let location = self
            .location
            .map(|raw| {
                TrainingLocation::parse(&raw)
                    .ok_or_else(|| AppError::invalid_input(format!("Unknown location '{raw}'")))
            })
            .transpose()?;

        Ok(DrillFilter {
            difficulty,
            location,
            skill_category: self.skill.filter(|s| !s.trim().is_empty()),
            limit: self.limit,
            offset: self.offset,
        })
    }
}

/// Query parameters for drill search
#[derive(Debug, Deserialize)]
struct SearchDrillsQuery {
    q: Option<String>,
    limit: Option<u32>,
}

/// Drill list response
#[derive(Debug, Serialize, Deserialize)]
pub struct DrillListResponse {
    /// Matching drills
    pub drills: Vec<Drill>,
    /// Number of drills returned
    pub count: usize,
}

impl From<Vec<Drill>> for DrillListResponse {
    fn from(drills: Vec<Drill>) -> Self {
        Self {
            count: drills.len(),
            drills,
        }
    }
}

/// Drill catalog routes
pub struct DrillRoutes;

impl DrillRoutes {
    /// Create all drill catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/drills", get(Self::handle_list))
            .route("/drills/search", get(Self::handle_search))
            .route("/drills/:id", get(Self::handle_get))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<ListDrillsQuery>,
    ) -> Result<Response, AppError> {
        let filter = params.into_filter()?;
        let drills = resources.catalog.list_drills(&filter).await?;
        Ok((StatusCode::OK, Json(DrillListResponse::from(drills))).into_response())
    }

    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<SearchDrillsQuery>,
    ) -> Result<Response, AppError> {
        let query = params
            .q
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(|| AppError::invalid_input("Query parameter 'q' is required"))?;
        let drills = resources.catalog.search_drills(&query, params.limit).await?;
        Ok((StatusCode::OK, Json(DrillListResponse::from(drills))).into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<u64>,
    ) -> Result<Response, AppError> {
        let drill = resources
            .catalog
            .get_drill(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Drill {id}")))?;
        Ok((StatusCode::OK, Json(drill)).into_response())
    }
}
