//! Display-name normalization
//!
//! Program display names as reported by task schedulers, service managers
//! and app bundles carry structural noise: registration GUIDs, build
//! numbers, generic `Task`/`Service` suffixes and packager prefixes.
//! [`extract_base_name`] strips that noise so the remaining base name can be
//! matched against canonical entries.

use std::sync::LazyLock;

use regex::Regex;

static GUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\{[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}\}",
    )
    .unwrap()
});

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+").unwrap());

static GENERIC_SUFFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*(?:Task|Machine|Core|System|Logon|Service)+$").unwrap()
});

/// Packager prefixes dropped from bundle-style identifiers, in order.
const VENDOR_PREFIXES: [&str; 2] = ["electron.app.", "com.todesktop."];

/// Reduce a raw display name to its base name.
///
/// Applies, in order: GUID removal, four-part version removal, trailing
/// generic-word removal, vendor-prefix removal and edge trimming of
/// `' '`, `'.'`, `'-'`, `'_'`. The sequence repeats until the name stops
/// changing, so the result never contains a pattern this function strips
/// and `extract_base_name(extract_base_name(x)) == extract_base_name(x)`.
///
/// Returns an empty string when nothing usable is left.
#[must_use]
pub fn extract_base_name(raw: &str) -> String {
    let mut current = normalize_pass(raw);
    loop {
        let next = normalize_pass(&current);
        // Every pass that changes the name makes it shorter.
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_pass(input: &str) -> String {
    let without_guid = GUID_REGEX.replace_all(input, "");
    let without_version = VERSION_REGEX.replace_all(&without_guid, "");
    let without_suffix = GENERIC_SUFFIX_REGEX.replace(&without_version, "");

    let mut name: &str = &without_suffix;
    for prefix in VENDOR_PREFIXES {
        name = strip_prefix_ignore_case(name, prefix);
    }

    trim_separators(name).to_string()
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> &'a str {
    match value.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &value[prefix.len()..],
        _ => value,
    }
}

/// Trim the edge characters the normalizer treats as separators.
#[must_use]
pub fn trim_separators(value: &str) -> &str {
    value.trim_matches(|c| matches!(c, ' ' | '.' | '-' | '_'))
}
