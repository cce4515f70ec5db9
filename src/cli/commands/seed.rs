//! proclens seed - Load the bundled reference entries

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_robot, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct SeedArgs {}

pub fn run(ctx: &AppContext, _args: &SeedArgs) -> Result<()> {
    let inserted = ctx.db.seed_reference_data()?;
    let total = ctx.db.count_entries()?;

    if ctx.robot_mode {
        return emit_robot(&robot_ok(serde_json::json!({
            "inserted": inserted,
            "total": total,
        })));
    }

    if inserted == 0 {
        println!(
            "{} knowledge base already has {} entries",
            "Skipped:".yellow(),
            total
        );
    } else {
        println!("{} {} reference entries", "Seeded".green().bold(), inserted);
    }
    Ok(())
}
