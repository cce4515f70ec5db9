//! Interactive keyword lookup over the knowledge base
//!
//! Unlike the resolution cascade, keyword search returns every entry whose
//! descriptive fields mention the keyword, in name order.

pub mod keyword;

pub use keyword::{DEFAULT_SEARCH_LIMIT, KeywordSearch};
