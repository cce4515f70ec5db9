//! proclens export - Dump the knowledge base as JSON

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_robot, robot_ok};
use crate::error::{LensError, Result};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

const PAGE_SIZE: usize = 500;

pub fn run(ctx: &AppContext, args: &ExportArgs) -> Result<()> {
    let mut entries = Vec::new();
    loop {
        let page = ctx.db.list_entries(PAGE_SIZE, entries.len())?;
        let done = page.len() < PAGE_SIZE;
        entries.extend(page);
        if done {
            break;
        }
    }

    let payload = serde_json::to_string_pretty(&entries)
        .map_err(|err| LensError::Serialization(format!("serialize entries: {err}")))?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, payload)?;
            if ctx.robot_mode {
                emit_robot(&robot_ok(serde_json::json!({
                    "exported": entries.len(),
                    "file": path.display().to_string(),
                })))?;
            } else {
                println!(
                    "{} {} entries to {}",
                    "Exported".green().bold(),
                    entries.len(),
                    path.display()
                );
            }
        }
        // The export format is the import format, robot or not.
        None => println!("{payload}"),
    }
    Ok(())
}
