// ABOUTME: Database operations for the drill catalog
// ABOUTME: Schema setup, inserts, filtered listing, text search, and full catalog snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

use crate::constants::limits;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{
    normalize_key, Difficulty, Drill, DrillType, Equipment, Intensity, SkillFocus,
    TrainingLocation, TrainingStyle,
};
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::collections::BTreeSet;
use tracing::{debug, warn};

const DRILL_COLUMNS: &str = r"
    id, title, description, drill_type, duration_minutes, sets, reps, rest_seconds,
    equipment, adaptable_equipment, suitable_locations, intensity, training_styles,
    difficulty, primary_category, primary_sub_skill, secondary_skills, instructions, tips
";

/// Filter options for listing drills
#[derive(Debug, Clone, Default)]
pub struct DrillFilter {
    /// Filter by difficulty
    pub difficulty: Option<Difficulty>,
    /// Only drills suitable for this location
    pub location: Option<TrainingLocation>,
    /// Drills whose primary or secondary skills include this category
    pub skill_category: Option<String>,
    /// Maximum number of results
    pub limit: Option<u32>,
    /// Offset for pagination
    pub offset: Option<u32>,
}

/// Database manager for the drill catalog
#[derive(Debug, Clone)]
pub struct DrillCatalog {
    pool: SqlitePool,
}

impl DrillCatalog {
    /// Create a catalog over an existing pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Underlying connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the drills table and indexes if they do not exist
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS drills (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                drill_type TEXT NOT NULL,
                duration_minutes INTEGER,
                sets INTEGER,
                reps INTEGER,
                rest_seconds INTEGER,
                equipment TEXT NOT NULL DEFAULT '[]',
                adaptable_equipment TEXT NOT NULL DEFAULT '[]',
                suitable_locations TEXT NOT NULL DEFAULT '[]',
                intensity TEXT,
                training_styles TEXT NOT NULL DEFAULT '[]',
                difficulty TEXT,
                primary_category TEXT,
                primary_sub_skill TEXT,
                secondary_skills TEXT NOT NULL DEFAULT '[]',
                instructions TEXT NOT NULL DEFAULT '[]',
                tips TEXT NOT NULL DEFAULT '[]',
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create drills table: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_drills_primary_category ON drills(primary_category)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create drills index: {e}")))?;

        Ok(())
    }

    /// Insert a drill
    ///
    /// # Errors
    ///
    /// Returns an error if the id is taken, too large, or the database operation fails
    pub async fn insert_drill(&self, drill: &Drill) -> AppResult<()> {
        let id = i64::try_from(drill.id)
            .map_err(|_| AppError::out_of_range(format!("Drill id {} is too large", drill.id)))?;

        let result = sqlx::query(
            r"
            INSERT INTO drills (
                id, title, description, drill_type, duration_minutes, sets, reps, rest_seconds,
                equipment, adaptable_equipment, suitable_locations, intensity, training_styles,
                difficulty, primary_category, primary_sub_skill, secondary_skills, instructions,
                tips, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(id)
        .bind(&drill.title)
        .bind(&drill.description)
        .bind(drill.drill_type.as_str())
        .bind(drill.duration_minutes.map(i64::from))
        .bind(drill.sets.map(i64::from))
        .bind(drill.reps.map(i64::from))
        .bind(drill.rest_seconds.map(i64::from))
        .bind(serde_json::to_string(&drill.equipment)?)
        .bind(serde_json::to_string(&drill.adaptable_equipment)?)
        .bind(serde_json::to_string(&drill.suitable_locations)?)
        .bind(drill.intensity.map(|i| i.as_str()))
        .bind(serde_json::to_string(&drill.training_styles)?)
        .bind(drill.difficulty.map(|d| d.as_str()))
        .bind(drill.primary_skill.as_ref().map(|s| s.category.as_str()))
        .bind(drill.primary_skill.as_ref().map(|s| s.sub_skill.as_str()))
        .bind(serde_json::to_string(&drill.secondary_skills)?)
        .bind(serde_json::to_string(&drill.instructions)?)
        .bind(serde_json::to_string(&drill.tips)?)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                debug!(drill_id = drill.id, title = %drill.title, "Inserted drill");
                Ok(())
            }
            Err(e)
                if e.as_database_error()
                    .is_some_and(|db| db.is_unique_violation()) =>
            {
                Err(AppError::already_exists(format!("Drill {}", drill.id)))
            }
            Err(e) => Err(AppError::database(format!("Failed to insert drill: {e}"))),
        }
    }

    /// Delete every drill, returning how many were removed
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn clear(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM drills")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to clear drills: {e}")))?;
        Ok(result.rows_affected())
    }

    /// Get a drill by id
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails or the stored row is malformed
    pub async fn get_drill(&self, id: u64) -> AppResult<Option<Drill>> {
        let Ok(id) = i64::try_from(id) else {
            return Ok(None);
        };
        let row = sqlx::query(&format!("SELECT {DRILL_COLUMNS} FROM drills WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get drill: {e}")))?;

        row.map(|r| row_to_drill(&r)).transpose()
    }

    /// List drills with optional filtering, ordered by id
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list_drills(&self, filter: &DrillFilter) -> AppResult<Vec<Drill>> {
        let limit = filter
            .limit
            .unwrap_or(limits::DEFAULT_DRILL_PAGE_SIZE)
            .min(limits::MAX_DRILL_PAGE_SIZE);
        let offset = filter.offset.unwrap_or(0);

        // Parameterized conditions only; values never reach the SQL text
        let mut conditions = Vec::new();
        let mut bind_values: Vec<String> = Vec::new();

        if let Some(difficulty) = filter.difficulty {
            conditions.push("difficulty = ?");
            bind_values.push(difficulty.as_str().to_owned());
        }
        if let Some(location) = filter.location {
            conditions.push(r"suitable_locations LIKE ? ESCAPE '\'");
            bind_values.push(format!("%\"{}\"%", escape_like(location.as_str())));
        }
        if let Some(category) = &filter.skill_category {
            let category = normalize_key(category);
            conditions.push(r"(primary_category = ? OR secondary_skills LIKE ? ESCAPE '\')");
            bind_values.push(category.clone());
            bind_values.push(format!(
                "%\"category\":\"{}\"%",
                escape_like(&category)
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let query = format!(
            "SELECT {DRILL_COLUMNS} FROM drills {where_clause} ORDER BY id ASC LIMIT ? OFFSET ?"
        );

        let mut sql_query = sqlx::query(&query);
        for value in &bind_values {
            sql_query = sql_query.bind(value);
        }
        let rows = sql_query
            .bind(i64::from(limit))
            .bind(i64::from(offset))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list drills: {e}")))?;

        Ok(decode_rows(&rows))
    }

    /// Search drills by title or description
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn search_drills(&self, query: &str, limit: Option<u32>) -> AppResult<Vec<Drill>> {
        let limit = limit
            .unwrap_or(limits::DEFAULT_SEARCH_LIMIT)
            .min(limits::MAX_DRILL_PAGE_SIZE);
        let pattern = format!("%{}%", escape_like(query.trim()));

        let rows = sqlx::query(&format!(
            r"SELECT {DRILL_COLUMNS} FROM drills WHERE title LIKE ?1 ESCAPE '\' OR description LIKE ?1 ESCAPE '\' ORDER BY id ASC LIMIT ?2"
        ))
        .bind(&pattern)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to search drills: {e}")))?;

        Ok(decode_rows(&rows))
    }

    /// Number of stored drills
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn count_drills(&self) -> AppResult<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM drills")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count drills: {e}")))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    /// Load the whole catalog ordered by id
    ///
    /// Rows that cannot be decoded are skipped with a warning so one bad
    /// record never blocks session generation.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn load_snapshot(&self) -> AppResult<Vec<Drill>> {
        let rows = sqlx::query(&format!("SELECT {DRILL_COLUMNS} FROM drills ORDER BY id ASC"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to load drill catalog: {e}")))?;

        let drills = decode_rows(&rows);
        debug!(
            rows = rows.len(),
            drills = drills.len(),
            "Loaded drill catalog snapshot"
        );
        Ok(drills)
    }
}

/// Escape `LIKE` wildcards so user text matches literally (used with `ESCAPE '\'`)
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn decode_rows(rows: &[SqliteRow]) -> Vec<Drill> {
    rows.iter()
        .filter_map(|row| match row_to_drill(row) {
            Ok(drill) => Some(drill),
            Err(e) => {
                let id: Option<i64> = row.try_get("id").ok();
                warn!(drill_id = ?id, error = %e, "Skipping malformed drill row");
                None
            }
        })
        .collect()
}

fn row_to_drill(row: &SqliteRow) -> AppResult<Drill> {
    let id: i64 = row.try_get("id")?;
    let drill_type_str: String = row.try_get("drill_type")?;
    let intensity_str: Option<String> = row.try_get("intensity")?;
    let difficulty_str: Option<String> = row.try_get("difficulty")?;
    let primary_category: Option<String> = row.try_get("primary_category")?;
    let primary_sub_skill: Option<String> = row.try_get("primary_sub_skill")?;
    let secondary_json: String = row.try_get("secondary_skills")?;
    let instructions_json: String = row.try_get("instructions")?;
    let tips_json: String = row.try_get("tips")?;

    let primary_skill = match (primary_category, primary_sub_skill) {
        (Some(category), Some(sub_skill)) if !category.trim().is_empty() => {
            Some(SkillFocus::new(category, sub_skill))
        }
        _ => None,
    };

    Ok(Drill {
        id: u64::try_from(id).map_err(|_| invalid_row(id, "negative id"))?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        drill_type: DrillType::parse(&drill_type_str)
            .ok_or_else(|| invalid_row(id, &format!("unknown drill type '{drill_type_str}'")))?,
        duration_minutes: optional_u32(row, "duration_minutes")?,
        sets: optional_u32(row, "sets")?,
        reps: optional_u32(row, "reps")?,
        rest_seconds: optional_u32(row, "rest_seconds")?,
        equipment: parse_tags(row, "equipment", Equipment::parse)?,
        adaptable_equipment: parse_tags(row, "adaptable_equipment", Equipment::parse)?,
        suitable_locations: parse_tags(row, "suitable_locations", TrainingLocation::parse)?,
        intensity: intensity_str
            .map(|s| {
                Intensity::parse(&s)
                    .ok_or_else(|| invalid_row(id, &format!("unknown intensity '{s}'")))
            })
            .transpose()?,
        training_styles: parse_tags(row, "training_styles", TrainingStyle::parse)?,
        difficulty: difficulty_str
            .map(|s| {
                Difficulty::parse(&s)
                    .ok_or_else(|| invalid_row(id, &format!("unknown difficulty '{s}'")))
            })
            .transpose()?,
        primary_skill,
        secondary_skills: serde_json::from_str::<Vec<SkillFocus>>(&secondary_json)?
            .into_iter()
            .map(|s| SkillFocus::new(s.category, s.sub_skill))
            .collect(),
        instructions: serde_json::from_str(&instructions_json)?,
        tips: serde_json::from_str(&tips_json)?,
    })
}

fn optional_u32(row: &SqliteRow, column: &str) -> AppResult<Option<u32>> {
    let value: Option<i64> = row.try_get(column)?;
    value
        .map(|v| {
            u32::try_from(v).map_err(|_| {
                AppError::new(
                    ErrorCode::InvalidFormat,
                    format!("Column {column} out of range: {v}"),
                )
            })
        })
        .transpose()
}

fn parse_tags<T, F>(row: &SqliteRow, column: &str, parse: F) -> AppResult<BTreeSet<T>>
where
    T: Ord,
    F: Fn(&str) -> Option<T>,
{
    let json: String = row.try_get(column)?;
    let raw: Vec<String> = serde_json::from_str(&json)?;
    raw.iter()
        .map(|tag| {
            parse(tag).ok_or_else(|| {
                AppError::new(
                    ErrorCode::InvalidFormat,
                    format!("Unknown {column} tag '{tag}'"),
                )
            })
        })
        .collect()
}

fn invalid_row(id: i64, reason: &str) -> AppError {
    AppError::new(ErrorCode::InvalidFormat, format!("Drill {id}: {reason}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("100%"), r"100\%");
        assert_eq!(escape_like("short_passing"), r"short\_passing");
        assert_eq!(escape_like(r"a\b"), r"a\\b");
        assert_eq!(escape_like("juggling"), "juggling");
    }
}
