//! Multi-field keyword search

use tracing::debug;

use crate::core::entry::KnowledgeEntry;
use crate::error::Result;
use crate::storage::RecordStore;

/// Result cap used when the caller does not pass one.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Case-insensitive substring search over name, aliases, publisher, short
/// description and tags.
pub struct KeywordSearch<'a, S: RecordStore + ?Sized> {
    store: &'a S,
    default_limit: usize,
}

impl<'a, S: RecordStore + ?Sized> KeywordSearch<'a, S> {
    pub const fn new(store: &'a S) -> Self {
        Self {
            store,
            default_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    #[must_use]
    pub const fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    /// Entries mentioning `keyword`, ordered by name, at most `limit`.
    ///
    /// An empty keyword matches every entry. A zero limit returns nothing
    /// without touching the store.
    pub fn search(&self, keyword: &str, limit: usize) -> Result<Vec<KnowledgeEntry>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let results = self.store.query_by_multi_field_substring(keyword, limit)?;
        debug!(keyword, limit, hits = results.len(), "keyword search");
        Ok(results)
    }

    /// [`search`](Self::search) with the configured default limit.
    pub fn search_default(&self, keyword: &str) -> Result<Vec<KnowledgeEntry>> {
        self.search(keyword, self.default_limit)
    }
}
