// ABOUTME: Route module organization for BravoBall HTTP endpoints
// ABOUTME: Declares the route domains and assembles the application router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

//! Route module for the `BravoBall` server
//!
//! Health checks live at the root; everything else is nested under `/api`.

/// Drill catalog browsing routes
pub mod drills;
/// Health check and readiness routes
pub mod health;
/// Session generation routes
pub mod sessions;
/// Skill catalog routes
pub mod skills;

/// Drill catalog route handlers
pub use drills::{DrillListResponse, DrillRoutes};
/// Health check route handlers
pub use health::HealthRoutes;
/// Session generation route handlers
pub use sessions::{GenerateSessionRequest, SessionRoutes, TargetSkillInput};
/// Skill catalog route handlers
pub use skills::{SkillCatalogResponse, SkillRoutes};

use crate::constants::endpoints;
use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let api = Router::new()
        .merge(DrillRoutes::routes(Arc::clone(&resources)))
        .merge(SkillRoutes::routes())
        .merge(SessionRoutes::routes(Arc::clone(&resources)));

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .nest(endpoints::API_BASE, api)
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors(&resources.config))
}
