// ABOUTME: Liftlog CLI - drives an active workout against the REST backend from a terminal
// ABOUTME: Plans presets, resumes sessions, logs sets, and inspects the local workout pointer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors
//!
//! Usage:
//! ```bash
//! # Show the sets a preset expands to
//! liftlog plan --preset push_day.json --catalog exercises.json
//!
//! # Start (or continue today's) workout
//! liftlog workout start --preset push_day.json
//!
//! # Log a set, then a dropdown set with two tiers
//! liftlog workout complete ex1-set-1 --weight 60 --reps 10
//! liftlog workout complete ex3-set-1 --tier 40:10 --tier 37.5:8
//!
//! # Save with an end time
//! liftlog workout finish
//!
//! # Resume a session saved on another device
//! liftlog resume --preset push_day.json --session 3f2c...
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use liftlog::config::LiftlogConfig;
use liftlog::logging::LoggingConfig;
use liftlog_core::TierForm;
use std::path::PathBuf;
use tracing::debug;

use helpers::display::Output;
use helpers::input::parse_tier;

#[derive(Parser)]
#[command(
    name = "liftlog",
    about = "Liftlog workout tracker",
    long_about = "Command-line tool for planning presets and logging sets of an in-progress workout."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show the planned sets of a preset
    Plan {
        /// Preset JSON file
        #[arg(long)]
        preset: PathBuf,

        /// Exercise catalog JSON file (fetched from the backend if omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Overlay a saved session onto a preset and show what remains
    Resume {
        /// Preset JSON file
        #[arg(long)]
        preset: PathBuf,

        /// Exercise catalog JSON file (fetched from the backend if omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Session id, or a session JSON file
        #[arg(long)]
        session: String,
    },

    /// Compute the volume of a saved session
    Volume {
        /// Session id, or a session JSON file
        #[arg(long)]
        session: String,
    },

    /// Active workout commands
    Workout {
        #[command(subcommand)]
        action: WorkoutCommand,
    },

    /// Local active-workout pointer
    State {
        #[command(subcommand)]
        action: StateCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WorkoutCommand {
    /// Start a workout, or continue today's workout for the same preset
    Start {
        /// Preset JSON file
        #[arg(long)]
        preset: PathBuf,

        /// Exercise catalog JSON file (fetched from the backend if omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show the sets of the active workout
    Show {
        /// List every completed set instead of the latest one
        #[arg(long)]
        all_completed: bool,

        /// List every pending set instead of the next one
        #[arg(long)]
        all_pending: bool,
    },

    /// Complete a set
    Complete {
        /// Set id
        set_id: String,

        /// Load in kg (defaults to the prefilled value)
        #[arg(long)]
        weight: Option<f64>,

        /// Repetitions (defaults to the prefilled value)
        #[arg(long)]
        reps: Option<u32>,

        /// Dropdown tier as WEIGHT:REPS, repeated per tier
        #[arg(long = "tier", value_parser = parse_tier)]
        tiers: Vec<TierForm>,
    },

    /// Change the values of a set without changing its completion
    Edit {
        /// Set id
        set_id: String,

        /// Load in kg
        #[arg(long)]
        weight: Option<f64>,

        /// Repetitions
        #[arg(long)]
        reps: Option<u32>,

        /// Dropdown tier as WEIGHT:REPS, repeated per tier
        #[arg(long = "tier", value_parser = parse_tier)]
        tiers: Vec<TierForm>,
    },

    /// Return a completed set to pending
    Uncomplete {
        /// Set id
        set_id: String,
    },

    /// Remove a set
    Delete {
        /// Set id
        set_id: String,
    },

    /// Append another set of an exercise already in the workout
    Extra {
        /// Exercise id
        exercise_id: String,
    },

    /// Add an exercise from the catalog
    AddExercise {
        /// Exercise id
        exercise_id: String,

        /// Exercise catalog JSON file (fetched from the backend if omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Save the workout with an end time
    Finish,

    /// Abandon the workout and delete its session
    Cancel,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum StateCommand {
    /// Print the stored pointer
    Show,
    /// Remove the stored pointer
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let config = LiftlogConfig::from_env()?;
    debug!(base_url = %config.api.base_url, "Liftlog CLI");

    let output = Output::new(cli.json);

    match cli.command {
        Command::Plan { preset, catalog } => {
            commands::plan::plan(&config, output, &preset, catalog.as_deref()).await?;
        }
        Command::Resume {
            preset,
            catalog,
            session,
        } => {
            commands::plan::resume(&config, output, &preset, catalog.as_deref(), &session)
                .await?;
        }
        Command::Volume { session } => {
            commands::plan::volume(&config, output, &session).await?;
        }
        Command::Workout { action } => {
            let ctx = commands::workout::WorkoutContext::new(&config, output)?;
            match action {
                WorkoutCommand::Start { preset, catalog } => {
                    ctx.start(&preset, catalog.as_deref()).await?;
                }
                WorkoutCommand::Show {
                    all_completed,
                    all_pending,
                } => ctx.show(all_completed, all_pending).await?,
                WorkoutCommand::Complete {
                    set_id,
                    weight,
                    reps,
                    tiers,
                } => ctx.complete(&set_id, weight, reps, tiers).await?,
                WorkoutCommand::Edit {
                    set_id,
                    weight,
                    reps,
                    tiers,
                } => ctx.edit(&set_id, weight, reps, tiers).await?,
                WorkoutCommand::Uncomplete { set_id } => ctx.uncomplete(&set_id).await?,
                WorkoutCommand::Delete { set_id } => ctx.delete(&set_id).await?,
                WorkoutCommand::Extra { exercise_id } => ctx.extra(&exercise_id).await?,
                WorkoutCommand::AddExercise {
                    exercise_id,
                    catalog,
                } => ctx.add_exercise(&exercise_id, catalog.as_deref()).await?,
                WorkoutCommand::Finish => ctx.finish().await?,
                WorkoutCommand::Cancel => ctx.cancel().await?,
            }
        }
        Command::State { action } => match action {
            StateCommand::Show => commands::state::show(&config, output).await?,
            StateCommand::Clear => commands::state::clear(&config).await?,
        },
    }

    Ok(())
}
