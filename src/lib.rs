//! proclens - knowledge-base lookups for startup programs
//!
//! Given the fragments a startup item exposes (display name, executable
//! path, publisher) the [`core::resolver::IdentityResolver`] finds the
//! matching [`core::entry::KnowledgeEntry`]. [`core::normalize`] reduces
//! noisy display names to a base name, and [`search::KeywordSearch`]
//! browses the store by keyword.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod search;
pub mod storage;
pub mod test_utils;

pub use error::{LensError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
