//! proclens normalize - Show the base name a display name reduces to

use clap::Args;

use crate::cli::output::{emit_robot, robot_ok};
use crate::core::normalize::extract_base_name;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Raw display name, e.g. "GoogleUpdaterTaskSystem140.0.7272.0{GUID}"
    pub name: String,
}

/// Normalization needs no knowledge base, so this runs without a context.
pub fn run(robot: bool, args: &NormalizeArgs) -> Result<()> {
    let base = extract_base_name(&args.name);
    if robot {
        emit_robot(&robot_ok(serde_json::json!({
            "input": args.name,
            "base_name": base,
        })))
    } else {
        println!("{base}");
        Ok(())
    }
}
