//! Property-based tests.

mod normalize_props;
mod resolve_props;
