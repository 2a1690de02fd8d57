// ABOUTME: HTTP middleware layers applied to the BravoBall router
// ABOUTME: CORS configuration for the mobile and web clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

/// CORS layer configuration
pub mod cors;

pub use cors::setup_cors;
