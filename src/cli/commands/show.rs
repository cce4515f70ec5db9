//! proclens show - Show an entry by id

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{emit_human, emit_robot, entry_card, robot_ok};
use crate::error::{LensError, Result};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Entry id
    pub id: i64,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let entry = ctx
        .db
        .get_entry(args.id)?
        .ok_or_else(|| LensError::EntryNotFound(args.id.to_string()))?;

    if ctx.robot_mode {
        emit_robot(&robot_ok(serde_json::json!({ "entry": entry })))
    } else {
        emit_human(entry_card(&entry));
        Ok(())
    }
}
