//! Knowledge-base fixtures for unit, integration and CLI tests.

use std::path::PathBuf;

use tempfile::TempDir;

use crate::core::entry::{Category, KnowledgeEntry, SafetyLevel};
use crate::error::{LensError, Result};
use crate::storage::{Database, RecordStore};

/// A knowledge base on disk inside its own temporary directory.
pub struct KnowledgeBaseFixture {
    pub temp_dir: TempDir,
    pub db_path: PathBuf,
    pub db: Database,
}

impl KnowledgeBaseFixture {
    /// Empty on-disk knowledge base.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let db_path = temp_dir.path().join("knowledge.db");
        let db = Database::open(&db_path)?;
        Ok(Self {
            temp_dir,
            db_path,
            db,
        })
    }

    /// On-disk knowledge base holding [`sample_entries`].
    pub fn with_samples() -> Result<Self> {
        let fixture = Self::new()?;
        fixture.db.import_entries(&sample_entries())?;
        Ok(fixture)
    }

    /// Write entries as a JSON array next to the database.
    pub fn write_entries_file(&self, file_name: &str, entries: &[KnowledgeEntry]) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(file_name);
        std::fs::write(&path, serde_json::to_string_pretty(entries)?)?;
        Ok(path)
    }
}

/// In-memory database pre-loaded with `entries`, inserted in order.
pub fn memory_db_with(entries: &[KnowledgeEntry]) -> Result<Database> {
    let db = Database::open_in_memory()?;
    db.import_entries(entries)?;
    Ok(db)
}

/// A compact dataset covering every resolution strategy.
///
/// Insert order fixes ids: Steam is 1, Google Updater 2, and so on.
pub fn sample_entries() -> Vec<KnowledgeEntry> {
    vec![
        KnowledgeEntry::new("Steam", "PC game launcher")
            .with_aliases("Steam Client Bootstrapper")
            .with_publisher("Valve Corporation")
            .with_executables("steam.exe;steamwebhelper.exe")
            .with_category(Category::Gaming)
            .with_safety(SafetyLevel::SafeToDisable)
            .with_tags("games,launcher"),
        KnowledgeEntry::new("Google Updater", "Updates Google software")
            .with_aliases("GoogleUpdater;Google Update")
            .with_publisher("Google LLC")
            .with_executables("googleupdater.exe")
            .with_category(Category::Updater)
            .with_safety(SafetyLevel::SafeToDisable)
            .with_tags("updater,google"),
        KnowledgeEntry::new("Brave Update", "Brave browser updater")
            .with_aliases("BraveSoftwareUpdate")
            .with_publisher("Brave Software, Inc.")
            .with_executables("braveupdate.exe")
            .with_category(Category::Updater)
            .with_safety(SafetyLevel::SafeToDisable),
        KnowledgeEntry::new("Discord", "Voice and text chat")
            .with_publisher("Discord Inc.")
            .with_executables("discord.exe")
            .with_category(Category::Communication)
            .with_safety(SafetyLevel::SafeToDisable)
            .with_tags("chat,electron"),
        KnowledgeEntry::new("Windows Security notification icon", "Defender tray icon")
            .with_aliases("SecurityHealth")
            .with_publisher("Microsoft Windows Desktop Runtime")
            .with_executables("securityhealthsystray.exe")
            .with_category(Category::Security)
            .with_safety(SafetyLevel::Important),
        KnowledgeEntry::new("Slack", "Team messaging")
            .with_aliases("electron.app.Slack")
            .with_publisher("Slack Technologies")
            .with_executables("slack.exe")
            .with_category(Category::Communication)
            .with_safety(SafetyLevel::SafeToDisable),
    ]
}

/// A store whose every query fails, for exercising error propagation.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingStore;

impl FailingStore {
    fn fail<T>() -> Result<T> {
        Err(LensError::StoreUnavailable("store offline".to_string()))
    }
}

impl RecordStore for FailingStore {
    fn query_by_executable_substring(&self, _pattern: &str) -> Result<Option<KnowledgeEntry>> {
        Self::fail()
    }

    fn query_by_exact_name(&self, _name: &str) -> Result<Option<KnowledgeEntry>> {
        Self::fail()
    }

    fn query_by_alias_substring(&self, _pattern: &str) -> Result<Option<KnowledgeEntry>> {
        Self::fail()
    }

    fn query_by_name_or_alias_substring(&self, _pattern: &str) -> Result<Option<KnowledgeEntry>> {
        Self::fail()
    }

    fn query_by_publisher_substring(&self, _pattern: &str) -> Result<Option<KnowledgeEntry>> {
        Self::fail()
    }

    fn query_by_multi_field_substring(
        &self,
        _pattern: &str,
        _limit: usize,
    ) -> Result<Vec<KnowledgeEntry>> {
        Self::fail()
    }
}
