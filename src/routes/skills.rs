// ABOUTME: Skill catalog route handler listing display names by category
// ABOUTME: Lets clients build skill pickers that match the session generator's identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

use axum::{routing::get, Json, Router};
use bravoball_intelligence::skill_mapper::{self, SKILL_TABLE};
use serde::{Deserialize, Serialize};

/// One selectable skill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillOption {
    /// Name shown in the app
    pub display_name: String,
    /// Backend identifier (`category-sub_skill`)
    pub identifier: String,
    /// Sub-skill key
    pub sub_skill: String,
}

/// Skills grouped under one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Category key
    pub category: String,
    /// Skills in display order
    pub skills: Vec<SkillOption>,
}

/// Skill catalog response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCatalogResponse {
    /// Categories in display order
    pub categories: Vec<SkillCategory>,
}

/// Skill catalog routes
pub struct SkillRoutes;

impl SkillRoutes {
    /// Create the skill catalog route
    pub fn routes() -> Router {
        Router::new().route("/skills", get(Self::handle_list))
    }

    async fn handle_list() -> Json<SkillCatalogResponse> {
        Json(Self::catalog())
    }

    /// Build the grouped skill catalog
    #[must_use]
    pub fn catalog() -> SkillCatalogResponse {
        let categories = skill_mapper::categories()
            .into_iter()
            .map(|category| SkillCategory {
                category: category.to_owned(),
                skills: SKILL_TABLE
                    .iter()
                    .filter(|entry| entry.category == category)
                    .map(|entry| SkillOption {
                        display_name: entry.display_name.to_owned(),
                        identifier: entry.identifier(),
                        sub_skill: entry.sub_skill.to_owned(),
                    })
                    .collect(),
            })
            .collect();
        SkillCatalogResponse { categories }
    }
}
