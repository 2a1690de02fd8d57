// ABOUTME: Database connection setup and the drill catalog store
// ABOUTME: Opens SQLite pools and exposes DrillCatalog for catalog queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

//! Database module
//!
//! The drill catalog is the only persisted data. Schema creation is
//! idempotent (`CREATE TABLE IF NOT EXISTS`) and runs when the catalog opens.

/// Drill catalog store
pub mod drills;

pub use drills::{DrillCatalog, DrillFilter};

use crate::errors::{AppError, AppResult};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;
use tokio::fs;

/// Open a `SQLite` pool for the given URL
///
/// File databases are created if missing. In-memory databases are limited to
/// one connection so every query sees the same database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established
pub async fn connect(database_url: &str) -> AppResult<SqlitePool> {
    let is_memory = database_url.contains(":memory:");
    let connection_url = if is_memory || database_url.contains("mode=") {
        database_url.to_owned()
    } else if database_url.contains('?') {
        format!("{database_url}&mode=rwc")
    } else {
        format!("{database_url}?mode=rwc")
    };

    if !is_memory {
        ensure_parent_dir(database_url).await?;
    }

    let max_connections = if is_memory { 1 } else { 5 };
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(&connection_url)
        .await
        .map_err(|e| AppError::database(format!("Failed to connect to {database_url}: {e}")))
}

/// Create the directory holding a `sqlite:` file database
async fn ensure_parent_dir(database_url: &str) -> AppResult<()> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    let path = path.split('?').next().unwrap_or(path);

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::database(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }
    Ok(())
}
