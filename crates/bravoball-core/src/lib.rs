// ABOUTME: Core types and constants for the BravoBall training backend
// ABOUTME: Foundation crate with drill/session models, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

#![deny(unsafe_code)]

//! # `BravoBall` Core
//!
//! Foundation crate providing shared types and constants for the `BravoBall`
//! training backend. It changes infrequently so the intelligence crate and the
//! server crate can compile against it incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Drill catalog records, session configuration and generated sessions

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Drill, `SessionConfiguration`, `GeneratedSession`)
pub mod models;
