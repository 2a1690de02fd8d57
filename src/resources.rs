// ABOUTME: Centralized resource container shared by all route handlers
// ABOUTME: Holds the drill catalog, the session generator, and the server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

//! # Server Resources
//!
//! Built once at startup and shared as `Arc<ServerResources>`. Nothing in
//! here is mutable: the catalog is a pool handle and the generator holds an
//! immutable configuration, so each request loads its own catalog snapshot.

use crate::config::environment::ServerConfig;
use crate::database::DrillCatalog;
use bravoball_intelligence::SessionGenerator;
use std::sync::Arc;

/// Shared server state
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Drill catalog store
    pub catalog: DrillCatalog,
    /// Session generator with the configured weights and estimates
    pub generator: SessionGenerator,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create server resources
    #[must_use]
    pub fn new(catalog: DrillCatalog, generator: SessionGenerator, config: ServerConfig) -> Self {
        Self {
            catalog,
            generator,
            config: Arc::new(config),
        }
    }
}
