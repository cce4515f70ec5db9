//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod output;

/// proclens - identify startup programs against a knowledge base
#[derive(Parser, Debug)]
#[command(name = "proclens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Emit JSON on stdout for machine consumption
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/proclens/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Knowledge base file, overriding configuration
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Identify a program from its name, executable and publisher
    Identify(commands::identify::IdentifyArgs),

    /// Print the normalized base name of a display name
    Normalize(commands::normalize::NormalizeArgs),

    /// Keyword search across the knowledge base
    Search(commands::search::SearchArgs),

    /// Show an entry by id
    Show(commands::show::ShowArgs),

    /// Entry counts per category, or the entries of one category
    Categories(commands::categories::CategoriesArgs),

    /// Add or update an entry
    Add(commands::add::AddArgs),

    /// Import entries from a JSON file
    Import(commands::import::ImportArgs),

    /// Export every entry as JSON
    Export(commands::export::ExportArgs),

    /// Insert the bundled reference entries into an empty knowledge base
    Seed(commands::seed::SeedArgs),
}
