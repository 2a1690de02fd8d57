// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for the BravoBall backend (ports, endpoints, service names, limits)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

//! Constants module
//!
//! Application constants grouped by domain. Tunable scoring weights and
//! duration estimates are *not* here: they live in the intelligence crate's
//! configuration so they can be overridden from the environment.

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY_CHECK: &str = "/ready";
    /// API base path
    pub const API_BASE: &str = "/api";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Service identifiers used in logs
pub mod service_names {
    /// HTTP server
    pub const BRAVOBALL_SERVER: &str = "bravoball-server";
    /// Management CLI
    pub const BRAVOBALL_CLI: &str = "bravoball-cli";
}

/// Default values used when the environment does not override them
pub mod defaults {
    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/bravoball.db";
    /// Default bind host
    pub const HOST: &str = "127.0.0.1";
    /// Default log level
    pub const LOG_LEVEL: &str = "info";
}

/// Paging limits for catalog queries
pub mod limits {
    /// Default page size for drill listings
    pub const DEFAULT_DRILL_PAGE_SIZE: u32 = 50;
    /// Hard cap on drill listings
    pub const MAX_DRILL_PAGE_SIZE: u32 = 200;
    /// Default result count for drill searches
    pub const DEFAULT_SEARCH_LIMIT: u32 = 20;
}

/// Session request bounds
pub mod session {
    /// Longest session the generator accepts, in minutes
    pub const MAX_SESSION_MINUTES: u32 = 240;
}
