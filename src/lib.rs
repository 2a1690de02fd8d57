// ABOUTME: Main library entry point for the BravoBall training backend
// ABOUTME: Wires the drill catalog store, session generator, and REST routes together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

#![deny(unsafe_code)]

//! # `BravoBall` Server
//!
//! Backend for a soccer training app. Players describe their time budget,
//! equipment, location, level and the skills they want to work on; the
//! server answers with an ordered session of drills drawn from the catalog.
//!
//! ## Architecture
//!
//! - **`bravoball-core`**: drill and session models, error codes, constants
//! - **`bravoball-intelligence`**: scorer, duration estimator, session generator
//! - **database**: `SQLite` drill catalog store
//! - **routes**: axum REST endpoints
//! - **config** / **logging**: environment-driven settings and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bravoball_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("BravoBall server configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-based server configuration
pub mod config;

/// Drill catalog persistence
pub mod database;

/// Logging configuration and tracing subscriber setup
pub mod logging;

/// HTTP middleware layers
pub mod middleware;

/// Shared server state handed to route handlers
pub mod resources;

/// HTTP route definitions
pub mod routes;

pub use bravoball_core::{constants, errors, models};
pub use bravoball_intelligence as intelligence;
