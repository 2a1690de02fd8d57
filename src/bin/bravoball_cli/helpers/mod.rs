// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors
// ABOUTME: Helper modules for bravoball-cli
// ABOUTME: Output formatting shared by the commands

pub mod display;
