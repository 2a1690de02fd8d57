// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors
// ABOUTME: Output formatting helpers for bravoball-cli
// ABOUTME: Renders generated sessions and drills as plain text tables

use bravoball_server::models::{Drill, GeneratedSession};

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| v.to_string())
}

/// Display a generated session
pub fn display_session(session: &GeneratedSession) {
    if session.is_empty() {
        println!(
            "No drills fit a {} minute session with this equipment and location.",
            session.requested_duration_minutes
        );
        return;
    }

    println!("\nTraining Session");
    println!("{}", "=".repeat(80));
    println!(
        "   Duration: {} of {} minutes",
        session.total_duration_minutes, session.requested_duration_minutes
    );
    println!("   Skills: {}", session.skills_covered.join(", "));
    println!("{}", "-".repeat(80));

    for (position, scored) in session.drills.iter().enumerate() {
        let params = &scored.parameters;
        println!(
            "{:>2}. {:<32} {:>3} min  score {:.2}  [{}]",
            position + 1,
            scored.drill.title,
            params.duration_minutes,
            scored.score,
            scored.skill_category
        );
        println!(
            "    sets {}  reps {}  rest {}s  intensity x{:.1}",
            or_dash(params.sets),
            or_dash(params.reps),
            or_dash(params.rest_seconds),
            scored.intensity_modifier
        );
        if !scored.substituted_equipment.is_empty() {
            let items: Vec<String> = scored
                .substituted_equipment
                .iter()
                .map(ToString::to_string)
                .collect();
            println!("    improvise: {}", items.join(", "));
        }
    }
    println!("{}", "=".repeat(80));
}

/// Display one drill as a table row
pub fn display_drill_row(drill: &Drill) {
    let skill = drill
        .primary_skill
        .as_ref()
        .map_or_else(|| "-".to_owned(), |s| format!("{}/{}", s.category, s.sub_skill));
    println!(
        "{:>4}  {:<32} {:<13} {:<28} {:>4}",
        drill.id,
        drill.title,
        or_dash(drill.difficulty),
        skill,
        or_dash(drill.duration_minutes)
    );
}

/// Display a drill with instructions and tips
pub fn display_drill(drill: &Drill) {
    println!("\n{} (#{})", drill.title, drill.id);
    println!("{}", "=".repeat(80));
    println!("{}", drill.description);
    println!("   Type: {}", drill.drill_type);
    println!("   Difficulty: {}", or_dash(drill.difficulty));
    println!("   Intensity: {}", or_dash(drill.intensity));
    println!("   Duration: {} min", or_dash(drill.duration_minutes));

    let equipment: Vec<String> = drill.equipment.iter().map(ToString::to_string).collect();
    println!("   Equipment: {}", equipment.join(", "));
    let locations: Vec<String> = drill
        .suitable_locations
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("   Locations: {}", locations.join(", "));

    if !drill.instructions.is_empty() {
        println!("\nInstructions:");
        for (step, line) in drill.instructions.iter().enumerate() {
            println!("{}. {line}", step + 1);
        }
    }
    if !drill.tips.is_empty() {
        println!("\nTips:");
        for tip in &drill.tips {
            println!("• {tip}");
        }
    }
}
