//! Integration tests against the public library API.

mod normalize_tests;
mod resolve_tests;
mod search_tests;
mod storage_tests;
