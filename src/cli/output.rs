//! Output helpers shared by the commands
//!
//! Robot mode wraps every payload in a [`RobotResponse`]; human mode builds
//! a `HumanLayout` and prints it in one go.

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::entry::{KnowledgeEntry, SafetyLevel};
use crate::error::{LensError, Result};

#[derive(Debug, Serialize)]
pub struct RobotResponse<T> {
    pub status: RobotStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    Ok,
    /// The command ran but found nothing
    NotFound,
}

pub fn robot_ok<T: Serialize>(data: T) -> RobotResponse<T> {
    robot_with_status(RobotStatus::Ok, data)
}

pub fn robot_not_found<T: Serialize>(data: T) -> RobotResponse<T> {
    robot_with_status(RobotStatus::NotFound, data)
}

fn robot_with_status<T: Serialize>(status: RobotStatus, data: T) -> RobotResponse<T> {
    RobotResponse {
        status,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data,
    }
}

pub fn emit_robot<T: Serialize>(response: &RobotResponse<T>) -> Result<()> {
    emit_json(response)
}

fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| LensError::Serialization(format!("serialize output: {err}")))?;
    println!("{payload}");
    Ok(())
}

pub(crate) struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanLayout {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 14,
        }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.lines.push(text.bold().to_string());
        self.lines.push("═".repeat(text.chars().count()));
        self
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        self.lines.push(String::new());
        self.lines.push(text.bold().to_string());
        self.lines.push("─".repeat(40).dimmed().to_string());
        self
    }

    pub fn kv(&mut self, key: &str, value: impl std::fmt::Display) -> &mut Self {
        let padded = format!("{key:width$}", width = self.key_width);
        self.lines.push(format!("{} {value}", padded.dimmed()));
        self
    }

    /// Adds a key/value line only when the value is present.
    pub fn kv_opt(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.kv(key, value);
        }
        self
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

pub(crate) fn emit_human(layout: HumanLayout) {
    println!("{}", layout.build());
}

pub fn safety_colored(level: SafetyLevel) -> ColoredString {
    let label = level.as_str();
    match level {
        SafetyLevel::Critical => label.red().bold(),
        SafetyLevel::Important => label.yellow(),
        SafetyLevel::Optional => label.cyan(),
        SafetyLevel::SafeToDisable => label.green(),
        SafetyLevel::Unwanted => label.magenta(),
        SafetyLevel::Unknown => label.dimmed(),
    }
}

/// One-line listing used by search and category output.
pub fn entry_line(entry: &KnowledgeEntry) -> String {
    format!(
        "{:>5}  {}  [{}] {}  {}",
        entry.id.to_string().dimmed(),
        entry.name.bold(),
        entry.category,
        safety_colored(entry.safety_level),
        entry.short_description
    )
}

/// Full human rendering of an entry.
pub(crate) fn entry_card(entry: &KnowledgeEntry) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title(&entry.name);
    layout
        .kv("ID", entry.id)
        .kv("Category", entry.category)
        .kv("Safety", safety_colored(entry.safety_level))
        .kv_opt("Publisher", entry.publisher.as_deref())
        .kv_opt("Aliases", entry.aliases.as_deref())
        .kv_opt("Executables", entry.executable_names.as_deref())
        .kv_opt("Tags", entry.tags.as_deref())
        .kv("Updated", entry.last_updated.format("%Y-%m-%d %H:%M UTC"));

    layout.push_line(String::new()).push_line(entry.short_description.clone());
    if let Some(full) = entry.full_description.as_deref() {
        layout.push_line(String::new()).push_line(full.to_string());
    }

    let has_advice = entry.disable_impact.is_some()
        || entry.performance_impact.is_some()
        || entry.recommendation.is_some()
        || entry.info_url.is_some();
    if has_advice {
        layout
            .section("Advice")
            .kv_opt("If disabled", entry.disable_impact.as_deref())
            .kv_opt("Performance", entry.performance_impact.as_deref())
            .kv_opt("Recommended", entry.recommendation.as_deref())
            .kv_opt("More info", entry.info_url.as_deref());
    }
    layout
}
