//! Storage layer for proclens
//!
//! The resolver and keyword search only need the read queries of
//! [`RecordStore`]. [`Database`] implements them on SQLite and also owns the
//! write side: upsert, bulk import and seeding of the reference dataset.

pub mod migrations;
pub mod seed;
pub mod sqlite;

pub use seed::{load_entries_file, reference_entries};
pub use sqlite::Database;

use crate::core::entry::KnowledgeEntry;
use crate::error::Result;

/// Read queries the resolution cascade and keyword search run against.
///
/// Every substring query is case-insensitive and treats its pattern
/// literally. Single-row queries return the matching entry with the lowest
/// id, so results do not depend on storage order.
pub trait RecordStore {
    /// Entry whose `executable_names` contains `pattern`.
    fn query_by_executable_substring(&self, pattern: &str) -> Result<Option<KnowledgeEntry>>;

    /// Entry whose `name` equals `name` (case-insensitive, whole string).
    fn query_by_exact_name(&self, name: &str) -> Result<Option<KnowledgeEntry>>;

    /// Entry whose `aliases` contains `pattern`.
    fn query_by_alias_substring(&self, pattern: &str) -> Result<Option<KnowledgeEntry>>;

    /// Entry whose `name` or `aliases` contains `pattern`.
    fn query_by_name_or_alias_substring(&self, pattern: &str) -> Result<Option<KnowledgeEntry>>;

    /// Entry whose `publisher` contains `pattern`.
    fn query_by_publisher_substring(&self, pattern: &str) -> Result<Option<KnowledgeEntry>>;

    /// Entries whose name, aliases, publisher, short description or tags
    /// contain `pattern`, ordered by name (case-insensitive), at most `limit`.
    fn query_by_multi_field_substring(
        &self,
        pattern: &str,
        limit: usize,
    ) -> Result<Vec<KnowledgeEntry>>;
}
