// ABOUTME: Drill catalog seeding utility for the BravoBall server
// ABOUTME: Loads the built-in drill set covering every skill category into the database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BravoBall Contributors

//! Drill catalog seeder.
//!
//! Usage:
//! ```bash
//! # Seed drills (uses DATABASE_URL from environment)
//! cargo run --bin seed-drills
//!
//! # Override database URL
//! cargo run --bin seed-drills -- --database-url sqlite:./data/bravoball.db
//!
//! # Replace an existing catalog
//! cargo run --bin seed-drills -- --force -v
//! ```

use anyhow::Result;
use bravoball_server::{
    constants::defaults,
    database::{self, DrillCatalog},
    models::{
        Difficulty, Drill, DrillType, Equipment, Intensity, SkillFocus, TrainingLocation,
        TrainingStyle,
    },
};
use clap::Parser;
use std::env;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "seed-drills",
    about = "BravoBall drill catalog seeder",
    long_about = "Load the built-in soccer drills into the BravoBall drill catalog"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Clear the catalog and re-seed even if drills already exist
    #[arg(long)]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Built-in drill definition
struct DrillData {
    id: u64,
    title: &'static str,
    description: &'static str,
    drill_type: DrillType,
    duration_minutes: Option<u32>,
    sets: Option<u32>,
    reps: Option<u32>,
    rest_seconds: Option<u32>,
    equipment: &'static [Equipment],
    adaptable_equipment: &'static [Equipment],
    locations: &'static [TrainingLocation],
    intensity: Intensity,
    styles: &'static [TrainingStyle],
    difficulty: Difficulty,
    primary: (&'static str, &'static str),
    secondary: &'static [(&'static str, &'static str)],
    instructions: &'static [&'static str],
    tips: &'static [&'static str],
}

const ANY_OUTDOOR: &[TrainingLocation] = &[
    TrainingLocation::FullField,
    TrainingLocation::SmallField,
    TrainingLocation::Backyard,
];

const ANYWHERE: &[TrainingLocation] = &[
    TrainingLocation::FullField,
    TrainingLocation::SmallField,
    TrainingLocation::IndoorCourt,
    TrainingLocation::Backyard,
    TrainingLocation::SmallRoom,
];

const DRILLS: &[DrillData] = &[
    // Dribbling
    DrillData {
        id: 1,
        title: "Cone Weave",
        description: "Dribble through a line of cones using both feet",
        drill_type: DrillType::SetsBased,
        duration_minutes: Some(10),
        sets: Some(4),
        reps: None,
        rest_seconds: Some(45),
        equipment: &[Equipment::Ball, Equipment::Cones],
        adaptable_equipment: &[Equipment::Cones],
        locations: ANY_OUTDOOR,
        intensity: Intensity::Medium,
        styles: &[TrainingStyle::MediumIntensity, TrainingStyle::GamePrep],
        difficulty: Difficulty::Beginner,
        primary: ("dribbling", "close_control"),
        secondary: &[("dribbling", "ball_mastery"), ("first_touch", "touch_and_move")],
        instructions: &[
            "Set 6 cones one step apart in a straight line",
            "Weave through using inside and outside of both feet",
            "Turn at the last cone and weave back",
        ],
        tips: &["Keep the ball within a step of your feet", "Look up between cones"],
    },
    DrillData {
        id: 2,
        title: "Speed Dribble Sprints",
        description: "Push the ball into space and sprint after it over 20 meters",
        drill_type: DrillType::RepsBased,
        duration_minutes: None,
        sets: Some(3),
        reps: Some(6),
        rest_seconds: Some(60),
        equipment: &[Equipment::Ball],
        adaptable_equipment: &[],
        locations: &[TrainingLocation::FullField, TrainingLocation::SmallField],
        intensity: Intensity::High,
        styles: &[TrainingStyle::HighIntensity, TrainingStyle::GamePrep],
        difficulty: Difficulty::Intermediate,
        primary: ("dribbling", "speed_dribbling"),
        secondary: &[("fitness", "speed")],
        instructions: &[
            "Start on the goal line with the ball",
            "Take long touches with the laces and sprint 20 meters",
            "Walk back to recover",
        ],
        tips: &["Touch with the foot furthest from the ball's path"],
    },
    DrillData {
        id: 3,
        title: "1v1 Move Ladder",
        description: "Practice a sequence of feints against a cone defender",
        drill_type: DrillType::TimeBased,
        duration_minutes: Some(12),
        sets: None,
        reps: None,
        rest_seconds: None,
        equipment: &[Equipment::Ball, Equipment::Cones],
        adaptable_equipment: &[Equipment::Cones],
        locations: ANY_OUTDOOR,
        intensity: Intensity::Medium,
        styles: &[TrainingStyle::MediumIntensity],
        difficulty: Difficulty::Advanced,
        primary: ("dribbling", "1v1_moves"),
        secondary: &[("dribbling", "change_of_direction"), ("shooting", "1v1_to_shoot")],
        instructions: &[
            "Place a cone as a defender 10 meters away",
            "Approach at pace and beat it with a step-over, scissor, then drag back",
            "Accelerate away after each move",
        ],
        tips: &["Sell the feint with your shoulders"],
    },
    DrillData {
        id: 4,
        title: "Toe Tap Ball Mastery",
        description: "Quick alternating toe taps and sole rolls in a small space",
        drill_type: DrillType::TimeBased,
        duration_minutes: Some(5),
        sets: None,
        reps: None,
        rest_seconds: None,
        equipment: &[Equipment::Ball],
        adaptable_equipment: &[],
        locations: ANYWHERE,
        intensity: Intensity::Low,
        styles: &[
            TrainingStyle::LowIntensity,
            TrainingStyle::GameRecovery,
            TrainingStyle::RestDay,
        ],
        difficulty: Difficulty::Beginner,
        primary: ("dribbling", "ball_mastery"),
        secondary: &[("dribbling", "close_control")],
        instructions: &[
            "Alternate tapping the top of the ball with each sole",
            "Switch to sole rolls across the body every 30 seconds",
        ],
        tips: &["Stay on the balls of your feet"],
    },
    // First touch
    DrillData {
        id: 5,
        title: "Wall Pass Control",
        description: "Pass against a wall and control the return with one touch",
        drill_type: DrillType::RepsBased,
        duration_minutes: None,
        sets: Some(3),
        reps: Some(20),
        rest_seconds: Some(30),
        equipment: &[Equipment::Ball, Equipment::Wall],
        adaptable_equipment: &[],
        locations: &[
            TrainingLocation::Backyard,
            TrainingLocation::IndoorCourt,
            TrainingLocation::SmallField,
        ],
        intensity: Intensity::Low,
        styles: &[TrainingStyle::LowIntensity, TrainingStyle::MediumIntensity],
        difficulty: Difficulty::Beginner,
        primary: ("first_touch", "ground_control"),
        secondary: &[("passing", "short_passing")],
        instructions: &[
            "Stand 5 meters from a wall",
            "Pass firmly and cushion the return into space",
            "Alternate the receiving foot each rep",
        ],
        tips: &["Open your body to the direction you want to play next"],
    },
    DrillData {
        id: 6,
        title: "Juggling Ladder",
        description: "Build a juggling streak using feet, thighs and head",
        drill_type: DrillType::Continuous,
        duration_minutes: None,
        sets: None,
        reps: None,
        rest_seconds: None,
        equipment: &[Equipment::Ball],
        adaptable_equipment: &[],
        locations: ANYWHERE,
        intensity: Intensity::Low,
        styles: &[TrainingStyle::LowIntensity, TrainingStyle::RestDay],
        difficulty: Difficulty::Intermediate,
        primary: ("first_touch", "juggling"),
        secondary: &[("first_touch", "aerial_control")],
        instructions: &[
            "Juggle with feet only until you reach 10",
            "Add thighs, then head, restarting the count on a drop",
        ],
        tips: &["Lock the ankle and keep touches soft"],
    },
    DrillData {
        id: 7,
        title: "Receive and Turn",
        description: "Receive a ball off the wall and turn away from pressure",
        drill_type: DrillType::SetsBased,
        duration_minutes: Some(8),
        sets: Some(4),
        reps: None,
        rest_seconds: Some(30),
        equipment: &[Equipment::Ball, Equipment::Wall, Equipment::Cones],
        adaptable_equipment: &[Equipment::Cones],
        locations: &[TrainingLocation::Backyard, TrainingLocation::IndoorCourt],
        intensity: Intensity::Medium,
        styles: &[TrainingStyle::MediumIntensity, TrainingStyle::GamePrep],
        difficulty: Difficulty::Intermediate,
        primary: ("first_touch", "turn_with_ball"),
        secondary: &[("dribbling", "change_of_direction")],
        instructions: &[
            "Pass against the wall and check away from a cone",
            "Turn on the first touch and dribble past a second cone",
        ],
        tips: &["Scan over your shoulder before the ball arrives"],
    },
    // Passing
    DrillData {
        id: 8,
        title: "Two Touch Gate Passing",
        description: "Pass through cone gates with a control touch before each pass",
        drill_type: DrillType::TimeBased,
        duration_minutes: Some(10),
        sets: None,
        reps: None,
        rest_seconds: None,
        equipment: &[Equipment::Ball, Equipment::Cones, Equipment::Wall],
        adaptable_equipment: &[Equipment::Cones],
        locations: &[TrainingLocation::Backyard, TrainingLocation::SmallField],
        intensity: Intensity::Medium,
        styles: &[TrainingStyle::MediumIntensity],
        difficulty: Difficulty::Beginner,
        primary: ("passing", "short_passing"),
        secondary: &[("passing", "technique"), ("first_touch", "ground_control")],
        instructions: &[
            "Set a 1 meter cone gate 6 meters from a wall",
            "Control, then pass through the gate to the wall",
        ],
        tips: &["Strike through the middle of the ball with the inside of the foot"],
    },
    DrillData {
        id: 9,
        title: "Long Ball Switch",
        description: "Drive long passes to a target zone 30 meters away",
        drill_type: DrillType::RepsBased,
        duration_minutes: None,
        sets: Some(2),
        reps: Some(10),
        rest_seconds: Some(60),
        equipment: &[Equipment::Ball, Equipment::Cones],
        adaptable_equipment: &[Equipment::Cones],
        locations: &[TrainingLocation::FullField],
        intensity: Intensity::Medium,
        styles: &[TrainingStyle::MediumIntensity, TrainingStyle::GamePrep],
        difficulty: Difficulty::Advanced,
        primary: ("passing", "long_passing"),
        secondary: &[("passing", "technique")],
        instructions: &[
            "Mark a 5 meter target square with cones",
            "Strike driven passes that land inside the square",
        ],
        tips: &["Plant foot beside the ball, lean back slightly"],
    },
    // Shooting
    DrillData {
        id: 10,
        title: "Power Shot Finishing",
        description: "Strike driven shots at goal from the edge of the box",
        drill_type: DrillType::SetsBased,
        duration_minutes: Some(10),
        sets: Some(3),
        reps: None,
        rest_seconds: Some(60),
        equipment: &[Equipment::Ball, Equipment::Goals],
        adaptable_equipment: &[Equipment::Goals],
        locations: &[TrainingLocation::FullField, TrainingLocation::SmallField],
        intensity: Intensity::High,
        styles: &[TrainingStyle::HighIntensity, TrainingStyle::GamePrep],
        difficulty: Difficulty::Beginner,
        primary: ("shooting", "power_shots"),
        secondary: &[("shooting", "shooting_on_the_run")],
        instructions: &[
            "Set the ball 18 meters from goal",
            "Take two steps and strike with the laces",
        ],
        tips: &["Keep your knee over the ball to keep shots low"],
    },
    DrillData {
        id: 11,
        title: "Finesse Corner Placement",
        description: "Curl shots into the far corner from an angle",
        drill_type: DrillType::RepsBased,
        duration_minutes: None,
        sets: Some(3),
        reps: Some(8),
        rest_seconds: Some(45),
        equipment: &[Equipment::Ball, Equipment::Goals, Equipment::Cones],
        adaptable_equipment: &[Equipment::Goals, Equipment::Cones],
        locations: ANY_OUTDOOR,
        intensity: Intensity::Medium,
        styles: &[TrainingStyle::MediumIntensity],
        difficulty: Difficulty::Intermediate,
        primary: ("shooting", "finesse_shots"),
        secondary: &[("passing", "technique")],
        instructions: &[
            "Dribble in from a cone at the corner of the box",
            "Open your hips and curl the ball inside the far post",
        ],
        tips: &["Wrap the inside of the foot around the ball"],
    },
    DrillData {
        id: 12,
        title: "Volley Rebounds",
        description: "Volley a ball thrown or bounced off a wall toward goal",
        drill_type: DrillType::RepsBased,
        duration_minutes: None,
        sets: Some(3),
        reps: Some(10),
        rest_seconds: Some(45),
        equipment: &[Equipment::Ball, Equipment::Wall, Equipment::Goals],
        adaptable_equipment: &[Equipment::Goals],
        locations: &[TrainingLocation::SmallField, TrainingLocation::Backyard],
        intensity: Intensity::High,
        styles: &[TrainingStyle::HighIntensity],
        difficulty: Difficulty::Advanced,
        primary: ("shooting", "volleying"),
        secondary: &[("shooting", "first_time_shots"), ("first_touch", "aerial_control")],
        instructions: &[
            "Toss the ball against the wall so it drops at volley height",
            "Strike before it bounces, aiming low",
        ],
        tips: &["Watch the ball onto your foot"],
    },
    // Defending
    DrillData {
        id: 13,
        title: "Jockey and Tackle Shadowing",
        description: "Shadow an imaginary attacker, then time a block tackle",
        drill_type: DrillType::TimeBased,
        duration_minutes: Some(8),
        sets: None,
        reps: None,
        rest_seconds: None,
        equipment: &[Equipment::Cones],
        adaptable_equipment: &[Equipment::Cones],
        locations: ANYWHERE,
        intensity: Intensity::Medium,
        styles: &[TrainingStyle::MediumIntensity, TrainingStyle::HighIntensity],
        difficulty: Difficulty::Beginner,
        primary: ("defending", "tackling"),
        secondary: &[("defending", "positioning"), ("fitness", "agility")],
        instructions: &[
            "Backpedal between two cones in a low side-on stance",
            "On your cue, step in and block with the inside of the foot",
        ],
        tips: &["Stay on your toes and never cross your feet"],
    },
    DrillData {
        id: 14,
        title: "Interception Reads",
        description: "Step across passing lanes off wall rebounds",
        drill_type: DrillType::SetsBased,
        duration_minutes: Some(10),
        sets: Some(4),
        reps: None,
        rest_seconds: Some(40),
        equipment: &[Equipment::Ball, Equipment::Wall],
        adaptable_equipment: &[],
        locations: &[TrainingLocation::Backyard, TrainingLocation::IndoorCourt],
        intensity: Intensity::Medium,
        styles: &[TrainingStyle::MediumIntensity, TrainingStyle::GamePrep],
        difficulty: Difficulty::Intermediate,
        primary: ("defending", "intercepting"),
        secondary: &[("defending", "agility")],
        instructions: &[
            "Pass at an angle against the wall",
            "Sprint across to cut out the rebound before it passes a cone line",
        ],
        tips: &["Read the angle off the wall early"],
    },
    // Goalkeeping
    DrillData {
        id: 15,
        title: "Wall Catch Reflexes",
        description: "Throw against a wall and catch the rebound at varying heights",
        drill_type: DrillType::RepsBased,
        duration_minutes: None,
        sets: Some(3),
        reps: Some(15),
        rest_seconds: Some(30),
        equipment: &[Equipment::Ball, Equipment::Wall],
        adaptable_equipment: &[],
        locations: &[
            TrainingLocation::Backyard,
            TrainingLocation::IndoorCourt,
            TrainingLocation::SmallRoom,
        ],
        intensity: Intensity::Low,
        styles: &[TrainingStyle::LowIntensity, TrainingStyle::MediumIntensity],
        difficulty: Difficulty::Beginner,
        primary: ("goalkeeping", "catching"),
        secondary: &[
            ("goalkeeping", "reflexes"),
            ("goalkeeping", "hand_eye_coordination"),
        ],
        instructions: &[
            "Stand 3 meters from the wall in a set position",
            "Throw underarm and catch with a W grip above the waist",
        ],
        tips: &["Get your body behind the ball"],
    },
    DrillData {
        id: 16,
        title: "Low Dive Shot Stopping",
        description: "Collapse dives to low shots either side of the goal",
        drill_type: DrillType::SetsBased,
        duration_minutes: Some(10),
        sets: Some(4),
        reps: None,
        rest_seconds: Some(60),
        equipment: &[Equipment::Ball, Equipment::Goals],
        adaptable_equipment: &[Equipment::Goals],
        locations: &[TrainingLocation::FullField, TrainingLocation::SmallField],
        intensity: Intensity::High,
        styles: &[TrainingStyle::HighIntensity, TrainingStyle::GamePrep],
        difficulty: Difficulty::Intermediate,
        primary: ("goalkeeping", "shot_stopping"),
        secondary: &[("goalkeeping", "diving")],
        instructions: &[
            "Kneel on the goal line and have the ball rolled to either side",
            "Progress to a standing start once the technique is clean",
        ],
        tips: &["Lead with the hands and land on your side"],
    },
    // Fitness
    DrillData {
        id: 17,
        title: "Shuttle Run Intervals",
        description: "5-10-5 shuttle runs between cones",
        drill_type: DrillType::RepsBased,
        duration_minutes: None,
        sets: Some(4),
        reps: Some(5),
        rest_seconds: Some(60),
        equipment: &[Equipment::Cones],
        adaptable_equipment: &[Equipment::Cones],
        locations: ANY_OUTDOOR,
        intensity: Intensity::High,
        styles: &[TrainingStyle::HighIntensity],
        difficulty: Difficulty::Intermediate,
        primary: ("fitness", "agility"),
        secondary: &[("fitness", "speed")],
        instructions: &[
            "Set three cones 5 meters apart",
            "Sprint to one side, back across, and through the middle",
        ],
        tips: &["Drop your hips when you change direction"],
    },
    DrillData {
        id: 18,
        title: "Tempo Ball Runs",
        description: "Steady-paced dribbling laps to build endurance",
        drill_type: DrillType::Continuous,
        duration_minutes: Some(15),
        sets: None,
        reps: None,
        rest_seconds: None,
        equipment: &[Equipment::Ball],
        adaptable_equipment: &[],
        locations: &[TrainingLocation::FullField],
        intensity: Intensity::Medium,
        styles: &[TrainingStyle::MediumIntensity, TrainingStyle::GameRecovery],
        difficulty: Difficulty::Beginner,
        primary: ("fitness", "endurance"),
        secondary: &[("dribbling", "close_control")],
        instructions: &["Dribble laps of the field at a pace you can hold"],
        tips: &["Breathe steadily and keep your touch light"],
    },
];

impl DrillData {
    fn to_drill(&self) -> Drill {
        Drill {
            id: self.id,
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            drill_type: self.drill_type,
            duration_minutes: self.duration_minutes,
            sets: self.sets,
            reps: self.reps,
            rest_seconds: self.rest_seconds,
            equipment: self.equipment.iter().copied().collect(),
            adaptable_equipment: self.adaptable_equipment.iter().copied().collect(),
            suitable_locations: self.locations.iter().copied().collect(),
            intensity: Some(self.intensity),
            training_styles: self.styles.iter().copied().collect(),
            difficulty: Some(self.difficulty),
            primary_skill: Some(SkillFocus::new(self.primary.0, self.primary.1)),
            secondary_skills: self
                .secondary
                .iter()
                .map(|(category, sub_skill)| SkillFocus::new(category, sub_skill))
                .collect(),
            instructions: self.instructions.iter().map(|s| (*s).to_owned()).collect(),
            tips: self.tips.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== BravoBall Drill Catalog Seeder ===");

    let database_url = args
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| defaults::DATABASE_URL.into());

    info!("Connecting to database: {}", database_url);
    let pool = database::connect(&database_url).await?;
    let catalog = DrillCatalog::new(pool);
    catalog.ensure_schema().await?;

    let existing = catalog.count_drills().await?;
    if existing > 0 {
        if !args.force {
            info!(
                "Drill catalog already seeded ({} drills found). Use --force to re-seed.",
                existing
            );
            return Ok(());
        }
        let removed = catalog.clear().await?;
        warn!("Cleared {} existing drills", removed);
    }

    info!("Seeding {} drills...", DRILLS.len());
    for data in DRILLS {
        catalog.insert_drill(&data.to_drill()).await?;
    }

    info!("=== Seeding Complete ===");
    info!("Drill catalog now holds {} drills", catalog.count_drills().await?);
    Ok(())
}
