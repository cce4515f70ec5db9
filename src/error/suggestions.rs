//! Context-aware error suggestions.
//!
//! Complements the static suggestions in the `codes` module with hints
//! built from the error's JSON context.

use serde_json::Value;

use super::codes::ErrorCode;

/// Generate a context-aware suggestion for an error.
pub fn suggest_for_error(code: ErrorCode, context: Option<&Value>) -> String {
    match code {
        ErrorCode::EntryNotFound => suggest_entry_not_found(context),
        ErrorCode::ValidationFailed => suggest_validation_failed(context),
        ErrorCode::ConfigMissingRequired => suggest_config_missing_required(context),
        _ => code.suggestion().to_string(),
    }
}

fn suggest_entry_not_found(context: Option<&Value>) -> String {
    match context.and_then(|c| c.get("entry")).and_then(Value::as_str) {
        Some(entry) => format!(
            "No entry '{entry}'. Try:\n  - `proclens search {entry}` to look it up by keyword\n  - `proclens identify --name {entry}` to run the full cascade"
        ),
        None => ErrorCode::EntryNotFound.suggestion().to_string(),
    }
}

fn suggest_validation_failed(context: Option<&Value>) -> String {
    match context.and_then(|c| c.get("reason")).and_then(Value::as_str) {
        Some(reason) => format!("Fix the entry and retry: {reason}"),
        None => ErrorCode::ValidationFailed.suggestion().to_string(),
    }
}

fn suggest_config_missing_required(context: Option<&Value>) -> String {
    match context.and_then(|c| c.get("config_key")).and_then(Value::as_str) {
        Some(key) => format!("Set `{key}` in config.toml or pass it on the command line"),
        None => ErrorCode::ConfigMissingRequired.suggestion().to_string(),
    }
}
