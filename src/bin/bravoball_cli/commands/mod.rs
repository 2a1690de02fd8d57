// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors
// ABOUTME: Re-exports command modules for bravoball-cli
// ABOUTME: Provides session generation, drill browsing, and skill listing commands

pub mod drills;
pub mod session;
pub mod skills;
