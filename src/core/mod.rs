//! Core knowledge-base types and identification logic

pub mod entry;
pub mod normalize;
pub mod resolver;

pub use entry::{Category, KnowledgeEntry, SafetyLevel};
pub use normalize::extract_base_name;
pub use resolver::{IdentityResolver, MatchStrategy, ProgramQuery, Resolution};
