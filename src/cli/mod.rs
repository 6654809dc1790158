// ABOUTME: CLI argument parsing and command routing for anxcheck
//
// Provides command-line interface for:
// - Inspecting the question bank (questions)
// - Launching TUI (tui, default)

pub mod questions;

use clap::{Parser, Subcommand, ValueEnum};

/// Map what sets off your anxiety through a short guided questionnaire
#[derive(Parser)]
#[command(name = "anxcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui,

    /// Print the question bank
    Questions(QuestionsArgs),
}

/// Arguments for the questions command
#[derive(clap::Args)]
pub struct QuestionsArgs {
    /// Show only questions for one trigger category
    /// (situational, environmental, cognitive, physical, emotional)
    #[arg(long)]
    pub category: Option<String>,
}
