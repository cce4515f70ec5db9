//! proclens add - Add or update a knowledge entry

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_robot, robot_ok};
use crate::core::entry::{Category, KnowledgeEntry, SafetyLevel};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Update the entry with this id instead of inserting
    #[arg(long)]
    pub id: Option<i64>,

    /// Canonical program name
    #[arg(long)]
    pub name: String,

    /// One-line description
    #[arg(long)]
    pub short_description: String,

    /// Category (e.g. updater, cloud_sync)
    #[arg(long, default_value = "other")]
    pub category: Category,

    /// Safety level (e.g. safe_to_disable, critical)
    #[arg(long, default_value = "unknown")]
    pub safety: SafetyLevel,

    /// Alternate names, `;` separated
    #[arg(long)]
    pub aliases: Option<String>,

    #[arg(long)]
    pub publisher: Option<String>,

    /// Executable filenames, `;` separated
    #[arg(long)]
    pub executables: Option<String>,

    #[arg(long)]
    pub full_description: Option<String>,

    #[arg(long)]
    pub disable_impact: Option<String>,

    #[arg(long)]
    pub performance_impact: Option<String>,

    #[arg(long)]
    pub recommendation: Option<String>,

    #[arg(long)]
    pub info_url: Option<String>,

    /// Tags, comma separated
    #[arg(long)]
    pub tags: Option<String>,
}

impl AddArgs {
    fn to_entry(&self) -> KnowledgeEntry {
        let mut entry = KnowledgeEntry::new(&self.name, &self.short_description)
            .with_category(self.category)
            .with_safety(self.safety);
        entry.id = self.id.unwrap_or(0);
        entry.aliases.clone_from(&self.aliases);
        entry.publisher.clone_from(&self.publisher);
        entry.executable_names.clone_from(&self.executables);
        entry.full_description.clone_from(&self.full_description);
        entry.disable_impact.clone_from(&self.disable_impact);
        entry.performance_impact.clone_from(&self.performance_impact);
        entry.recommendation.clone_from(&self.recommendation);
        entry.info_url.clone_from(&self.info_url);
        entry.tags.clone_from(&self.tags);
        entry
    }
}

pub fn run(ctx: &AppContext, args: &AddArgs) -> Result<()> {
    let entry = args.to_entry();
    let updated = entry.is_persisted();
    let id = ctx.db.save_entry(&entry)?;

    if ctx.robot_mode {
        return emit_robot(&robot_ok(serde_json::json!({
            "id": id,
            "name": entry.name,
            "updated": updated,
        })));
    }

    let verb = if updated { "Updated" } else { "Added" };
    println!("{} {} (id {})", verb.green().bold(), entry.name.bold(), id);
    Ok(())
}
