//! proclens identify - Resolve a program against the knowledge base

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_human, emit_robot, entry_card, robot_not_found, robot_ok};
use crate::core::resolver::{IdentityResolver, ProgramQuery};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct IdentifyArgs {
    /// Display name of the program (e.g. "GoogleUpdaterTaskSystem")
    #[arg(long, short)]
    pub name: Option<String>,

    /// Executable path or filename
    #[arg(long, short)]
    pub exe: Option<String>,

    /// Publisher string
    #[arg(long, short)]
    pub publisher: Option<String>,
}

pub fn run(ctx: &AppContext, args: &IdentifyArgs) -> Result<()> {
    let query = ProgramQuery::from_parts(
        args.name.as_deref(),
        args.exe.as_deref(),
        args.publisher.as_deref(),
    );
    let resolver = IdentityResolver::with_config(&ctx.db, ctx.config.resolver.clone());
    let resolution = resolver.find_entry_explained(&query)?;

    if ctx.robot_mode {
        let query_json = serde_json::json!({
            "name": query.name(),
            "executable": query.executable(),
            "publisher": query.publisher(),
        });
        return match resolution {
            Some(found) => emit_robot(&robot_ok(serde_json::json!({
                "query": query_json,
                "strategy": found.strategy,
                "matched_on": found.matched_on,
                "entry": found.entry,
            }))),
            None => emit_robot(&robot_not_found(serde_json::json!({
                "query": query_json,
            }))),
        };
    }

    match resolution {
        Some(found) => {
            println!(
                "{} via {} ({})",
                "Matched".green().bold(),
                found.strategy.as_str().cyan(),
                found.matched_on.dimmed()
            );
            println!();
            emit_human(entry_card(&found.entry));
        }
        None => println!("{}", "No match in the knowledge base".yellow()),
    }
    Ok(())
}
