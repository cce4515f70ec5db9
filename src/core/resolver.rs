//! Program identity resolution
//!
//! Maps a noisy `(name, executable, publisher)` description of a program to a
//! single knowledge entry by trying a fixed cascade of lookups against a
//! [`RecordStore`]. The first strategy that hits wins; later strategies are
//! never consulted. A store error aborts the cascade instead of being read as
//! a miss.
//!
//! ```text
//!  executable filename ─▶ exact name ─▶ alias substring ─▶ base name ─▶ publisher
//!     (most specific)                                                 (least specific)
//! ```

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::config::ResolverConfig;
use crate::core::entry::KnowledgeEntry;
use crate::core::normalize::extract_base_name;
use crate::error::{LensError, Result};
use crate::storage::RecordStore;

/// Caller-supplied description of a program to identify.
///
/// Fields are trimmed on construction; blank values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramQuery {
    name: Option<String>,
    executable: Option<String>,
    publisher: Option<String>,
}

impl ProgramQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl AsRef<str>) -> Self {
        self.name = non_blank(name.as_ref());
        self
    }

    #[must_use]
    pub fn with_executable(mut self, executable: impl AsRef<str>) -> Self {
        self.executable = non_blank(executable.as_ref());
        self
    }

    #[must_use]
    pub fn with_publisher(mut self, publisher: impl AsRef<str>) -> Self {
        self.publisher = non_blank(publisher.as_ref());
        self
    }

    /// Build from optional parts, as the CLI hands them over.
    pub fn from_parts(
        name: Option<&str>,
        executable: Option<&str>,
        publisher: Option<&str>,
    ) -> Self {
        Self {
            name: name.and_then(non_blank),
            executable: executable.and_then(non_blank),
            publisher: publisher.and_then(non_blank),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn executable(&self) -> Option<&str> {
        self.executable.as_deref()
    }

    pub fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.executable.is_none() && self.publisher.is_none()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// The cascade step that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    Executable,
    ExactName,
    Alias,
    BaseName,
    Publisher,
}

impl MatchStrategy {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Executable => "executable",
            Self::ExactName => "exact_name",
            Self::Alias => "alias",
            Self::BaseName => "base_name",
            Self::Publisher => "publisher",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successful resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub entry: KnowledgeEntry,
    pub strategy: MatchStrategy,
    /// The pattern that was looked up (filename, name, base name or publisher)
    pub matched_on: String,
}

/// Runs the resolution cascade against a record store.
pub struct IdentityResolver<'a, S: RecordStore + ?Sized> {
    store: &'a S,
    config: ResolverConfig,
}

impl<'a, S: RecordStore + ?Sized> IdentityResolver<'a, S> {
    /// Resolver with the default thresholds and generic-publisher lists.
    pub fn new(store: &'a S) -> Self {
        Self::with_config(store, ResolverConfig::default())
    }

    pub const fn with_config(store: &'a S, config: ResolverConfig) -> Self {
        Self { store, config }
    }

    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Find the entry describing the queried program.
    ///
    /// `Ok(None)` means no strategy matched. Fails with
    /// [`LensError::InvalidQuery`] when the query has no usable field.
    pub fn find_entry(&self, query: &ProgramQuery) -> Result<Option<KnowledgeEntry>> {
        Ok(self.find_entry_explained(query)?.map(|resolution| resolution.entry))
    }

    /// Like [`find_entry`](Self::find_entry), also reporting which strategy hit.
    pub fn find_entry_explained(&self, query: &ProgramQuery) -> Result<Option<Resolution>> {
        if query.is_empty() {
            return Err(LensError::InvalidQuery(
                "name, executable and publisher are all empty".to_string(),
            ));
        }

        if let Some(executable) = query.executable() {
            if let Some(resolution) = self.match_executable(executable)? {
                return Ok(Some(resolution));
            }
        }

        if let Some(name) = query.name() {
            if let Some(resolution) = self.match_name(name)? {
                return Ok(Some(resolution));
            }
        }

        if let Some(publisher) = query.publisher() {
            if let Some(resolution) = self.match_publisher(publisher)? {
                return Ok(Some(resolution));
            }
        }

        debug!(?query, "no strategy matched");
        Ok(None)
    }

    fn match_executable(&self, executable: &str) -> Result<Option<Resolution>> {
        let file_name = executable_file_name(executable);
        if file_name.chars().count() < self.config.min_executable_len {
            trace!(%file_name, "executable name too short to discriminate, skipping");
            return Ok(None);
        }

        debug!(%file_name, "trying executable match");
        let found = self.store.query_by_executable_substring(&file_name)?;
        Ok(found.map(|entry| hit(entry, MatchStrategy::Executable, file_name)))
    }

    fn match_name(&self, name: &str) -> Result<Option<Resolution>> {
        debug!(name, "trying exact name match");
        if let Some(entry) = self.store.query_by_exact_name(name)? {
            return Ok(Some(hit(entry, MatchStrategy::ExactName, name.to_string())));
        }

        debug!(name, "trying alias match");
        if let Some(entry) = self.store.query_by_alias_substring(name)? {
            return Ok(Some(hit(entry, MatchStrategy::Alias, name.to_string())));
        }

        let base_name = extract_base_name(name);
        if base_name.is_empty()
            || base_name.chars().count() < self.config.min_base_name_len
            || base_name == name
        {
            trace!(name, %base_name, "base name not usable, skipping");
            return Ok(None);
        }

        debug!(%base_name, "trying base name match");
        let found = self.store.query_by_name_or_alias_substring(&base_name)?;
        Ok(found.map(|entry| hit(entry, MatchStrategy::BaseName, base_name)))
    }

    fn match_publisher(&self, publisher: &str) -> Result<Option<Resolution>> {
        if self.config.is_generic_publisher(publisher) {
            debug!(publisher, "generic publisher, skipping");
            return Ok(None);
        }

        debug!(publisher, "trying publisher match");
        let found = self.store.query_by_publisher_substring(publisher)?;
        Ok(found.map(|entry| hit(entry, MatchStrategy::Publisher, publisher.to_string())))
    }
}

fn hit(entry: KnowledgeEntry, strategy: MatchStrategy, matched_on: String) -> Resolution {
    info!(entry = %entry.name, id = entry.id, %strategy, %matched_on, "resolved program");
    Resolution {
        entry,
        strategy,
        matched_on,
    }
}

/// Lowercased filename component of an executable path.
///
/// Both `/` and `\` count as directory separators, since the paths being
/// identified are frequently Windows paths.
#[must_use]
pub fn executable_file_name(executable: &str) -> String {
    executable
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(executable)
        .trim()
        .to_lowercase()
}
