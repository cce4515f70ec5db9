//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod add;
pub mod categories;
pub mod export;
pub mod identify;
pub mod import;
pub mod normalize;
pub mod search;
pub mod seed;
pub mod show;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Identify(args) => identify::run(ctx, args),
        Commands::Normalize(args) => normalize::run(ctx.robot_mode, args),
        Commands::Search(args) => search::run(ctx, args),
        Commands::Show(args) => show::run(ctx, args),
        Commands::Categories(args) => categories::run(ctx, args),
        Commands::Add(args) => add::run(ctx, args),
        Commands::Import(args) => import::run(ctx, args),
        Commands::Export(args) => export::run(ctx, args),
        Commands::Seed(args) => seed::run(ctx, args),
    }
}
