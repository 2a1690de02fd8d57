// ABOUTME: Skill listing command for bravoball-cli
// ABOUTME: Prints every display name with its backend identifier, grouped by category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

use bravoball_server::routes::SkillRoutes;

/// Print the skill catalog
pub fn list() {
    for category in SkillRoutes::catalog().categories {
        println!("{}", category.category);
        for skill in category.skills {
            println!("   {:<24} {}", skill.display_name, skill.identifier);
        }
    }
}
