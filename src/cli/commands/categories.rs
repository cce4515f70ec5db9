//! proclens categories - Browse the knowledge base by category

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_robot, entry_line, robot_ok};
use crate::core::entry::Category;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// List the entries of this category instead of counts
    pub category: Option<String>,
}

pub fn run(ctx: &AppContext, args: &CategoriesArgs) -> Result<()> {
    match &args.category {
        Some(raw) => list_category(ctx, raw.parse()?),
        None => list_counts(ctx),
    }
}

fn list_counts(ctx: &AppContext) -> Result<()> {
    let counts = ctx.db.category_counts()?;

    if ctx.robot_mode {
        let map: serde_json::Map<String, serde_json::Value> = counts
            .iter()
            .map(|(category, count)| (category.as_str().to_string(), (*count).into()))
            .collect();
        return emit_robot(&robot_ok(serde_json::json!({ "categories": map })));
    }

    for (category, count) in counts {
        let label = format!("{:<14}", category.as_str());
        if count == 0 {
            println!("{} {}", label.dimmed(), "0".dimmed());
        } else {
            println!("{} {}", label, count.to_string().bold());
        }
    }
    Ok(())
}

fn list_category(ctx: &AppContext, category: Category) -> Result<()> {
    let entries = ctx.db.entries_by_category(category)?;

    if ctx.robot_mode {
        return emit_robot(&robot_ok(serde_json::json!({
            "category": category,
            "count": entries.len(),
            "entries": entries,
        })));
    }

    if entries.is_empty() {
        println!("{}", format!("No entries in {category}").yellow());
        return Ok(());
    }
    for entry in &entries {
        println!("{}", entry_line(entry));
    }
    Ok(())
}
