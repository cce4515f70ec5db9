//! SQLite database layer

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::core::entry::{Category, KnowledgeEntry, SafetyLevel};
use crate::error::{LensError, Result};
use crate::storage::{RecordStore, migrations, seed};

const ENTRY_COLUMNS: &str = "id, name, aliases, publisher, executable_names, category, \
     safety_level, short_description, full_description, disable_impact, performance_impact, \
     recommendation, info_url, tags, last_updated";

/// SQLite database wrapper for the knowledge base
pub struct Database {
    conn: Connection,
    schema_version: u32,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("schema_version", &self.schema_version)
            .finish_non_exhaustive()
    }
}

impl Database {
    /// Open database at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Private in-memory database, mostly for tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        Self::configure_pragmas(&conn)?;
        let schema_version = migrations::run_migrations(&conn)?;

        Ok(Self {
            conn,
            schema_version,
        })
    }

    /// Get a reference to the connection
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Current schema version after migrations.
    pub const fn schema_version(&self) -> u32 {
        self.schema_version
    }

    pub fn get_entry(&self, id: i64) -> Result<Option<KnowledgeEntry>> {
        self.query_one(
            &format!("SELECT {ENTRY_COLUMNS} FROM knowledge_entries WHERE id = ?1"),
            id,
        )
    }

    pub fn count_entries(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM knowledge_entries", [], |row| row.get(0))?;
        Ok(count.max(0).unsigned_abs())
    }

    pub fn list_entries(&self, limit: usize, offset: usize) -> Result<Vec<KnowledgeEntry>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ENTRY_COLUMNS} FROM knowledge_entries
             ORDER BY name COLLATE NOCASE ASC, id ASC LIMIT ?1 OFFSET ?2"
        ))?;
        let rows = stmt.query_map(params![to_sql_limit(limit), to_sql_limit(offset)], entry_from_row)?;
        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    /// Insert (`id == 0`) or update (`id > 0`) an entry, returning its id.
    ///
    /// `last_updated` is stamped with the current time.
    pub fn save_entry(&self, entry: &KnowledgeEntry) -> Result<i64> {
        entry.validate()?;
        let now = format_timestamp(&Utc::now());

        if entry.is_persisted() {
            let changed = self.conn.execute(
                "UPDATE knowledge_entries SET
                    name = ?1, aliases = ?2, publisher = ?3, executable_names = ?4,
                    category = ?5, safety_level = ?6, short_description = ?7,
                    full_description = ?8, disable_impact = ?9, performance_impact = ?10,
                    recommendation = ?11, info_url = ?12, tags = ?13, last_updated = ?14
                 WHERE id = ?15",
                params![
                    entry.name,
                    entry.aliases,
                    entry.publisher,
                    entry.executable_names,
                    entry.category.as_str(),
                    entry.safety_level.as_str(),
                    entry.short_description,
                    entry.full_description,
                    entry.disable_impact,
                    entry.performance_impact,
                    entry.recommendation,
                    entry.info_url,
                    entry.tags,
                    now,
                    entry.id,
                ],
            )?;
            if changed == 0 {
                return Err(LensError::EntryNotFound(entry.id.to_string()));
            }
            tracing::debug!(id = entry.id, name = %entry.name, "updated entry");
            return Ok(entry.id);
        }

        let id = self.insert_entry(entry, None, &now)?;
        tracing::debug!(id, name = %entry.name, "inserted entry");
        Ok(id)
    }

    /// Insert a row, under `id` when given, otherwise under a fresh id.
    fn insert_entry(&self, entry: &KnowledgeEntry, id: Option<i64>, now: &str) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO knowledge_entries (
                id, name, aliases, publisher, executable_names, category, safety_level,
                short_description, full_description, disable_impact, performance_impact,
                recommendation, info_url, tags, last_updated
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            params![
                id,
                entry.name,
                entry.aliases,
                entry.publisher,
                entry.executable_names,
                entry.category.as_str(),
                entry.safety_level.as_str(),
                entry.short_description,
                entry.full_description,
                entry.disable_impact,
                entry.performance_impact,
                entry.recommendation,
                entry.info_url,
                entry.tags,
                now,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Save many entries in one transaction. Nothing is written if any fails.
    ///
    /// Entries carrying an id update that row, or are inserted under that id
    /// when the row does not exist, so an export loads into any store.
    pub fn import_entries(&self, entries: &[KnowledgeEntry]) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        for entry in entries {
            self.import_entry(entry).map_err(|err| {
                LensError::Import(format!("entry '{}': {err}", entry.name))
            })?;
        }
        tx.commit()?;
        Ok(entries.len())
    }

    fn import_entry(&self, entry: &KnowledgeEntry) -> Result<i64> {
        if !entry.is_persisted() || self.get_entry(entry.id)?.is_some() {
            return self.save_entry(entry);
        }
        entry.validate()?;
        let id = self.insert_entry(entry, Some(entry.id), &format_timestamp(&Utc::now()))?;
        tracing::debug!(id, name = %entry.name, "imported entry under its own id");
        Ok(id)
    }

    /// Insert the bundled reference dataset if the store is empty.
    ///
    /// Returns how many entries were inserted (0 when already populated).
    pub fn seed_reference_data(&self) -> Result<usize> {
        if self.count_entries()? > 0 {
            return Ok(0);
        }
        let entries = seed::reference_entries()?;
        let inserted = self.import_entries(&entries)?;
        tracing::info!(inserted, "seeded reference knowledge base");
        Ok(inserted)
    }

    /// All entries in one category, ordered by name.
    pub fn entries_by_category(&self, category: Category) -> Result<Vec<KnowledgeEntry>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ENTRY_COLUMNS} FROM knowledge_entries
             WHERE category = ?1
             ORDER BY name COLLATE NOCASE ASC, id ASC"
        ))?;
        let rows = stmt.query_map([category.as_str()], entry_from_row)?;
        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    /// Number of entries per category, for every category (zero included).
    pub fn category_counts(&self) -> Result<Vec<(Category, u64)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT category, COUNT(*) FROM knowledge_entries GROUP BY category")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut counts: Vec<(Category, u64)> =
            Category::ALL.into_iter().map(|category| (category, 0)).collect();
        for row in rows {
            let (raw, count) = row?;
            let category: Category = raw
                .parse()
                .map_err(|_| LensError::InvalidEntry(format!("unknown category '{raw}' in store")))?;
            if let Some(slot) = counts.iter_mut().find(|(c, _)| *c == category) {
                slot.1 = count.max(0).unsigned_abs();
            }
        }
        Ok(counts)
    }

    fn query_one(&self, sql: &str, param: impl rusqlite::ToSql) -> Result<Option<KnowledgeEntry>> {
        let mut stmt = self.conn.prepare_cached(sql)?;
        Ok(stmt.query_row([param], entry_from_row).optional()?)
    }

    fn configure_pragmas(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA cache_size = -16000;
             PRAGMA temp_store = MEMORY;
             PRAGMA foreign_keys = ON;",
        )?;
        Ok(())
    }
}

impl RecordStore for Database {
    fn query_by_executable_substring(&self, pattern: &str) -> Result<Option<KnowledgeEntry>> {
        self.query_one(
            &format!(
                "SELECT {ENTRY_COLUMNS} FROM knowledge_entries
                 WHERE instr(lower(executable_names), lower(?1)) > 0
                 ORDER BY id ASC LIMIT 1"
            ),
            pattern,
        )
    }

    fn query_by_exact_name(&self, name: &str) -> Result<Option<KnowledgeEntry>> {
        self.query_one(
            &format!(
                "SELECT {ENTRY_COLUMNS} FROM knowledge_entries
                 WHERE name = ?1 COLLATE NOCASE
                 ORDER BY id ASC LIMIT 1"
            ),
            name,
        )
    }

    fn query_by_alias_substring(&self, pattern: &str) -> Result<Option<KnowledgeEntry>> {
        self.query_one(
            &format!(
                "SELECT {ENTRY_COLUMNS} FROM knowledge_entries
                 WHERE instr(lower(aliases), lower(?1)) > 0
                 ORDER BY id ASC LIMIT 1"
            ),
            pattern,
        )
    }

    fn query_by_name_or_alias_substring(&self, pattern: &str) -> Result<Option<KnowledgeEntry>> {
        self.query_one(
            &format!(
                "SELECT {ENTRY_COLUMNS} FROM knowledge_entries
                 WHERE instr(lower(name), lower(?1)) > 0
                    OR instr(lower(aliases), lower(?1)) > 0
                 ORDER BY id ASC LIMIT 1"
            ),
            pattern,
        )
    }

    fn query_by_publisher_substring(&self, pattern: &str) -> Result<Option<KnowledgeEntry>> {
        self.query_one(
            &format!(
                "SELECT {ENTRY_COLUMNS} FROM knowledge_entries
                 WHERE instr(lower(publisher), lower(?1)) > 0
                 ORDER BY id ASC LIMIT 1"
            ),
            pattern,
        )
    }

    fn query_by_multi_field_substring(
        &self,
        pattern: &str,
        limit: usize,
    ) -> Result<Vec<KnowledgeEntry>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        // instr() with an empty needle is not relied on; empty means "everything".
        let sql = if pattern.is_empty() {
            format!(
                "SELECT {ENTRY_COLUMNS} FROM knowledge_entries
                 WHERE ?1 = ''
                 ORDER BY name COLLATE NOCASE ASC, id ASC LIMIT ?2"
            )
        } else {
            format!(
                "SELECT {ENTRY_COLUMNS} FROM knowledge_entries
                 WHERE instr(lower(name), lower(?1)) > 0
                    OR instr(lower(aliases), lower(?1)) > 0
                    OR instr(lower(publisher), lower(?1)) > 0
                    OR instr(lower(short_description), lower(?1)) > 0
                    OR instr(lower(tags), lower(?1)) > 0
                 ORDER BY name COLLATE NOCASE ASC, id ASC LIMIT ?2"
            )
        };

        let mut stmt = self.conn.prepare_cached(&sql)?;
        let rows = stmt.query_map(params![pattern, to_sql_limit(limit)], entry_from_row)?;
        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }
}

fn to_sql_limit(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<KnowledgeEntry> {
    let category: String = row.get(5)?;
    let category = category
        .parse::<Category>()
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(err)))?;
    let safety_level: String = row.get(6)?;
    let safety_level = safety_level
        .parse::<SafetyLevel>()
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(err)))?;
    let last_updated: String = row.get(14)?;
    let last_updated = DateTime::parse_from_rfc3339(&last_updated)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(14, Type::Text, Box::new(err)))?
        .with_timezone(&Utc);

    Ok(KnowledgeEntry {
        id: row.get(0)?,
        name: row.get(1)?,
        aliases: row.get(2)?,
        publisher: row.get(3)?,
        executable_names: row.get(4)?,
        category,
        safety_level,
        short_description: row.get(7)?,
        full_description: row.get(8)?,
        disable_impact: row.get(9)?,
        performance_impact: row.get(10)?,
        recommendation: row.get(11)?,
        info_url: row.get(12)?,
        tags: row.get(13)?,
        last_updated,
    })
}
