use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LensError, Result};
use crate::search::DEFAULT_SEARCH_LIMIT;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Load configuration: defaults, then the global file and the project
    /// file (or a single explicit file), then `PROCLENS_*` environment
    /// overrides.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("PROCLENS_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            match Self::load_patch(&path)? {
                Some(patch) => config.merge_patch(patch),
                None => {
                    return Err(LensError::Config(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match dirs::config_dir() {
            Some(dir) => Self::load_patch(&dir.join("proclens/config.toml")),
            None => Ok(None),
        }
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&project_root.join(".proclens.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| LensError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| LensError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.storage {
            self.storage.merge(patch);
        }
        if let Some(patch) = patch.resolver {
            self.resolver.merge(patch);
        }
        if let Some(patch) = patch.search {
            self.search.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(&|key| std::env::var(key).ok())
    }

    fn apply_overrides(&mut self, lookup: &dyn Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = lookup("PROCLENS_DB") {
            self.storage.db_path = Some(value);
        }
        if let Some(value) = lookup("PROCLENS_SEED_ON_OPEN") {
            self.storage.seed_on_open = parse_bool(&value);
        }

        if let Some(value) = lookup("PROCLENS_MIN_EXECUTABLE_LEN") {
            self.resolver.min_executable_len = parse_usize("PROCLENS_MIN_EXECUTABLE_LEN", &value)?;
        }
        if let Some(value) = lookup("PROCLENS_MIN_BASE_NAME_LEN") {
            self.resolver.min_base_name_len = parse_usize("PROCLENS_MIN_BASE_NAME_LEN", &value)?;
        }
        if let Some(value) = lookup("PROCLENS_GENERIC_PUBLISHERS") {
            self.resolver.generic_publishers =
                merge_unique(parse_list(&value), &self.resolver.generic_publishers);
        }

        if let Some(value) = lookup("PROCLENS_SEARCH_LIMIT") {
            self.search.default_limit = parse_usize("PROCLENS_SEARCH_LIMIT", &value)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file; the platform data directory when unset
    pub db_path: Option<String>,
    pub seed_on_open: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            seed_on_open: true,
        }
    }
}

impl StorageConfig {
    fn merge(&mut self, patch: StoragePatch) {
        if let Some(value) = patch.db_path {
            self.db_path = Some(value);
        }
        if let Some(value) = patch.seed_on_open {
            self.seed_on_open = value;
        }
    }

    /// Effective database path.
    pub fn resolve_db_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.db_path {
            return Ok(expand_path(path));
        }
        dirs::data_dir()
            .map(|dir| dir.join("proclens").join("knowledge.db"))
            .ok_or_else(|| LensError::MissingConfig("storage.db_path".to_string()))
    }
}

/// Thresholds and blocklists for the resolution cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Executable filenames shorter than this are not matched
    pub min_executable_len: usize,
    /// Normalized base names shorter than this are not matched
    pub min_base_name_len: usize,
    /// Publishers ignored when equal (case-insensitive)
    pub generic_publishers: Vec<String>,
    /// Publishers ignored when containing one of these (case-insensitive)
    pub generic_publisher_fragments: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            min_executable_len: 5,
            min_base_name_len: 4,
            generic_publishers: vec!["N/A".to_string()],
            generic_publisher_fragments: vec!["Microsoft Windows".to_string()],
        }
    }
}

impl ResolverConfig {
    fn merge(&mut self, patch: ResolverPatch) {
        if let Some(value) = patch.min_executable_len {
            self.min_executable_len = value;
        }
        if let Some(value) = patch.min_base_name_len {
            self.min_base_name_len = value;
        }
        if let Some(values) = patch.generic_publishers {
            self.generic_publishers = values;
        }
        if let Some(values) = patch.generic_publisher_fragments {
            self.generic_publisher_fragments = values;
        }
    }

    /// Whether a publisher string is too generic to identify a program by.
    #[must_use]
    pub fn is_generic_publisher(&self, publisher: &str) -> bool {
        let lowered = publisher.to_ascii_lowercase();
        self.generic_publishers
            .iter()
            .any(|generic| generic.eq_ignore_ascii_case(publisher))
            || self
                .generic_publisher_fragments
                .iter()
                .any(|fragment| lowered.contains(&fragment.to_ascii_lowercase()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl SearchConfig {
    fn merge(&mut self, patch: SearchPatch) {
        if let Some(value) = patch.default_limit {
            self.default_limit = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub storage: Option<StoragePatch>,
    pub resolver: Option<ResolverPatch>,
    pub search: Option<SearchPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StoragePatch {
    pub db_path: Option<String>,
    pub seed_on_open: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ResolverPatch {
    pub min_executable_len: Option<usize>,
    pub min_base_name_len: Option<usize>,
    pub generic_publishers: Option<Vec<String>>,
    pub generic_publisher_fragments: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SearchPatch {
    pub default_limit: Option<usize>,
}

fn merge_unique(values: Vec<String>, existing: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values.into_iter().chain(existing.iter().cloned()) {
        if seen.insert(value.to_lowercase()) {
            out.push(value);
        }
    }
    out
}

/// Expand a leading `~` to the home directory.
pub fn expand_path(input: &str) -> PathBuf {
    if let Some(stripped) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(input)
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

fn parse_usize(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|err| LensError::Config(format!("invalid {key} value {value}: {err}")))
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect()
}
