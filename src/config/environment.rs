// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses HTTP, database, environment, and session generator settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

//! Environment-based configuration management
//!
//! There is no configuration file: every setting comes from the process
//! environment, with defaults suitable for local development.

use crate::constants::{defaults, ports};
use anyhow::{anyhow, Context, Result};
use bravoball_intelligence::SessionGeneratorConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        })
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port (`HTTP_PORT`)
    pub http_port: u16,
    /// Bind address (`HOST`)
    pub host: IpAddr,
    /// Drill catalog database (`DATABASE_URL`)
    pub database_url: String,
    /// Deployment environment (`ENVIRONMENT`)
    pub environment: Environment,
    /// Log filter (`RUST_LOG`)
    pub log_level: String,
    /// Allowed CORS origins (`CORS_ORIGINS`, comma separated, `*` for any)
    pub cors_origins: Vec<String>,
    /// Session generator tuning (`SESSION_*`)
    pub session: SessionGeneratorConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid HTTP_PORT value: {raw}"))?,
            Err(_) => ports::DEFAULT_HTTP_PORT,
        };
        let host_raw = env_var_or("HOST", defaults::HOST);
        let host = host_raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid HOST value: {host_raw}"))?;

        let config = Self {
            http_port,
            host,
            database_url: env_var_or("DATABASE_URL", defaults::DATABASE_URL),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            log_level: env_var_or("RUST_LOG", defaults::LOG_LEVEL),
            cors_origins: parse_origins(&env_var_or("CORS_ORIGINS", "*")),
            session: SessionGeneratorConfig::from_env()
                .map_err(|e| anyhow!("Invalid session generator configuration: {e}"))?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns an error if the port is zero or the database URL is empty
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow!("HTTP_PORT must be non-zero"));
        }
        if self.database_url.trim().is_empty() {
            return Err(anyhow!("DATABASE_URL must not be empty"));
        }
        Ok(())
    }

    /// Socket address to bind
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// One-line configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "BravoBall Server Configuration: bind={}, environment={}, database={}, log_level={}, min_score={}",
            self.bind_addr(),
            self.environment,
            self.database_url,
            self.log_level,
            self.session.min_score,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins: &str) -> Vec<String> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
