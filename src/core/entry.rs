//! Knowledge entry model
//!
//! A [`KnowledgeEntry`] is the canonical record for one identifiable program:
//! who publishes it, which executables belong to it, how risky it is to keep
//! running and what disabling it does.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LensError, Result};

/// Program classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    System,
    Security,
    Driver,
    Updater,
    CloudSync,
    Communication,
    Media,
    Gaming,
    Productivity,
    Development,
    Utility,
    Browser,
    Bloatware,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Self; 14] = [
        Self::System,
        Self::Security,
        Self::Driver,
        Self::Updater,
        Self::CloudSync,
        Self::Communication,
        Self::Media,
        Self::Gaming,
        Self::Productivity,
        Self::Development,
        Self::Utility,
        Self::Browser,
        Self::Bloatware,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Security => "security",
            Self::Driver => "driver",
            Self::Updater => "updater",
            Self::CloudSync => "cloud_sync",
            Self::Communication => "communication",
            Self::Media => "media",
            Self::Gaming => "gaming",
            Self::Productivity => "productivity",
            Self::Development => "development",
            Self::Utility => "utility",
            Self::Browser => "browser",
            Self::Bloatware => "bloatware",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LensError;

    fn from_str(value: &str) -> Result<Self> {
        let key = enum_key(value);
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == key)
            .ok_or_else(|| {
                LensError::ValidationFailed(format!("unknown category '{value}'"))
            })
    }
}

/// How safe it is to leave the program running (or to turn it off).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyLevel {
    /// Required for the OS or hardware to work
    Critical,
    /// Strongly recommended to keep
    Important,
    /// Harmless either way
    Optional,
    /// Can be disabled at startup without losing functionality
    SafeToDisable,
    /// Adware, bundled trials, known nuisances
    Unwanted,
    #[default]
    Unknown,
}

impl SafetyLevel {
    pub const ALL: [Self; 6] = [
        Self::Critical,
        Self::Important,
        Self::Optional,
        Self::SafeToDisable,
        Self::Unwanted,
        Self::Unknown,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Important => "important",
            Self::Optional => "optional",
            Self::SafeToDisable => "safe_to_disable",
            Self::Unwanted => "unwanted",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SafetyLevel {
    type Err = LensError;

    fn from_str(value: &str) -> Result<Self> {
        let key = enum_key(value);
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == key)
            .ok_or_else(|| {
                LensError::ValidationFailed(format!("unknown safety level '{value}'"))
            })
    }
}

fn enum_key(value: &str) -> String {
    value.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

/// Canonical record describing one identifiable program.
///
/// `aliases`, `executable_names` and `tags` are free-text blobs (usually
/// `;` or `,` separated) and are matched by substring, not by token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Store-assigned id, `0` until persisted
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable_names: Option<String>,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub safety_level: SafetyLevel,
    pub short_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
}

impl KnowledgeEntry {
    /// New, unpersisted entry with the two required fields set.
    pub fn new(name: impl Into<String>, short_description: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            aliases: None,
            publisher: None,
            executable_names: None,
            category: Category::default(),
            safety_level: SafetyLevel::default(),
            short_description: short_description.into(),
            full_description: None,
            disable_impact: None,
            performance_impact: None,
            recommendation: None,
            info_url: None,
            tags: None,
            last_updated: Utc::now(),
        }
    }

    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id > 0
    }

    /// Check the invariants every persisted entry must hold.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(LensError::ValidationFailed("name must not be empty".to_string()));
        }
        if self.short_description.trim().is_empty() {
            return Err(LensError::ValidationFailed(format!(
                "short description must not be empty (entry '{}')",
                self.name
            )));
        }
        if self.id < 0 {
            return Err(LensError::ValidationFailed(format!(
                "negative id {} for entry '{}'",
                self.id, self.name
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_aliases(mut self, aliases: impl Into<String>) -> Self {
        self.aliases = Some(aliases.into());
        self
    }

    #[must_use]
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    #[must_use]
    pub fn with_executables(mut self, executables: impl Into<String>) -> Self {
        self.executable_names = Some(executables.into());
        self
    }

    #[must_use]
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub const fn with_safety(mut self, safety_level: SafetyLevel) -> Self {
        self.safety_level = safety_level;
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }
}
