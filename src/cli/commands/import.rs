//! proclens import - Bulk import entries from a JSON file

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_robot, robot_ok};
use crate::error::Result;
use crate::storage::load_entries_file;

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// JSON file holding an array of entries
    pub file: PathBuf,
}

pub fn run(ctx: &AppContext, args: &ImportArgs) -> Result<()> {
    let entries = load_entries_file(&args.file)?;
    let imported = ctx.db.import_entries(&entries)?;

    if ctx.robot_mode {
        return emit_robot(&robot_ok(serde_json::json!({
            "file": args.file.display().to_string(),
            "imported": imported,
        })));
    }

    println!(
        "{} {} entries from {}",
        "Imported".green().bold(),
        imported,
        args.file.display()
    );
    Ok(())
}
