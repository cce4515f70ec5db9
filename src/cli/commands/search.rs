//! proclens search - Keyword search over the knowledge base

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_robot, entry_line, robot_ok};
use crate::error::Result;
use crate::search::KeywordSearch;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Keyword matched against name, aliases, publisher, description and tags
    pub keyword: String,

    /// Maximum number of results (default from config; negative means none)
    #[arg(long, short, allow_negative_numbers = true)]
    pub limit: Option<i64>,
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let search =
        KeywordSearch::new(&ctx.db).with_default_limit(ctx.config.search.default_limit);
    let results = match args.limit {
        Some(limit) => search.search(&args.keyword, clamp_limit(limit))?,
        None => search.search_default(&args.keyword)?,
    };

    if ctx.robot_mode {
        return emit_robot(&robot_ok(serde_json::json!({
            "keyword": args.keyword,
            "count": results.len(),
            "results": results,
        })));
    }

    if results.is_empty() {
        println!("{}", format!("No entries match \"{}\"", args.keyword).yellow());
        return Ok(());
    }

    println!(
        "{} {}",
        results.len().to_string().bold(),
        if results.len() == 1 { "entry" } else { "entries" }
    );
    for entry in &results {
        println!("{}", entry_line(entry));
    }
    Ok(())
}

fn clamp_limit(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}
