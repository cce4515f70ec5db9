use proclens::LensError;
use proclens::config::ResolverConfig;
use proclens::core::{IdentityResolver, KnowledgeEntry, MatchStrategy, ProgramQuery};
use proclens::storage::Database;
use proclens::test_utils::fixtures::{FailingStore, memory_db_with, sample_entries};

fn sample_db() -> Database {
    memory_db_with(&sample_entries()).unwrap()
}

#[test]
fn executable_beats_exact_name() {
    let db = sample_db();
    let resolver = IdentityResolver::new(&db);
    let query = ProgramQuery::new()
        .with_name("Discord")
        .with_executable(r"C:\Program Files (x86)\Steam\steam.exe");

    let found = resolver.find_entry_explained(&query).unwrap().unwrap();
    assert_eq!(found.entry.name, "Steam");
    assert_eq!(found.strategy, MatchStrategy::Executable);
    assert_eq!(found.matched_on, "steam.exe");
}

#[test]
fn unknown_executable_falls_through_to_name() {
    let db = sample_db();
    let resolver = IdentityResolver::new(&db);
    let query = ProgramQuery::new()
        .with_name("discord")
        .with_executable("/opt/tools/unrelated-binary");

    let found = resolver.find_entry_explained(&query).unwrap().unwrap();
    assert_eq!(found.entry.name, "Discord");
    assert_eq!(found.strategy, MatchStrategy::ExactName);
}

#[test]
fn alias_matches_before_base_name() {
    let db = sample_db();
    let resolver = IdentityResolver::new(&db);
    let found = resolver
        .find_entry_explained(&ProgramQuery::new().with_name("SecurityHealth"))
        .unwrap()
        .unwrap();
    assert_eq!(found.entry.name, "Windows Security notification icon");
    assert_eq!(found.strategy, MatchStrategy::Alias);
}

#[test]
fn scheduled_task_name_resolves_through_base_name() {
    let db = sample_db();
    let resolver = IdentityResolver::new(&db);
    let query =
        ProgramQuery::new().with_name("GoogleUpdaterTask144.0.7547.0{3B1A6C4F-0A2E-4B9E-8C2D-1A2B3C4D5E6F}");

    let found = resolver.find_entry_explained(&query).unwrap().unwrap();
    assert_eq!(found.entry.name, "Google Updater");
    assert_eq!(found.strategy, MatchStrategy::BaseName);
    assert_eq!(found.matched_on, "GoogleUpdater");
}

#[test]
fn publisher_is_the_last_resort() {
    let db = sample_db();
    let resolver = IdentityResolver::new(&db);
    let query = ProgramQuery::new()
        .with_name("Some Unknown Helper")
        .with_publisher("Valve");

    let found = resolver.find_entry_explained(&query).unwrap().unwrap();
    assert_eq!(found.entry.name, "Steam");
    assert_eq!(found.strategy, MatchStrategy::Publisher);
}

#[test]
fn generic_publisher_is_never_matched() {
    let db = sample_db();
    let resolver = IdentityResolver::new(&db);

    for publisher in ["Microsoft Windows Desktop Runtime", "N/A", "n/a"] {
        let query = ProgramQuery::new().with_publisher(publisher);
        assert!(
            resolver.find_entry(&query).unwrap().is_none(),
            "{publisher} should be skipped"
        );
    }
}

#[test]
fn short_executable_names_are_skipped() {
    let db = memory_db_with(&[
        KnowledgeEntry::new("Quiz", "Short exe").with_executables("q.zz"),
    ])
    .unwrap();
    let resolver = IdentityResolver::new(&db);

    let query = ProgramQuery::new().with_executable("/a/q.zz");
    assert!(resolver.find_entry(&query).unwrap().is_none());

    let relaxed = IdentityResolver::with_config(
        &db,
        ResolverConfig {
            min_executable_len: 3,
            ..ResolverConfig::default()
        },
    );
    assert_eq!(relaxed.find_entry(&query).unwrap().unwrap().name, "Quiz");
}

#[test]
fn blank_query_is_rejected() {
    let db = sample_db();
    let resolver = IdentityResolver::new(&db);
    let query = ProgramQuery::from_parts(Some("   "), Some(""), None);
    assert!(matches!(
        resolver.find_entry(&query),
        Err(LensError::InvalidQuery(_))
    ));
}

#[test]
fn unmatched_query_is_none_not_error() {
    let db = sample_db();
    let resolver = IdentityResolver::new(&db);
    let query = ProgramQuery::new()
        .with_name("Totally Unknown Program")
        .with_executable("C:/bin/mystery-tool.exe")
        .with_publisher("Nobody Ltd");
    assert!(resolver.find_entry(&query).unwrap().is_none());
}

#[test]
fn lowest_id_wins_ties() {
    let db = memory_db_with(&[
        KnowledgeEntry::new("Helper One", "first").with_executables("helper.exe"),
        KnowledgeEntry::new("Helper Two", "second").with_executables("helper.exe"),
    ])
    .unwrap();
    let resolver = IdentityResolver::new(&db);
    let found = resolver
        .find_entry(&ProgramQuery::new().with_executable("helper.exe"))
        .unwrap()
        .unwrap();
    assert_eq!(found.name, "Helper One");
}

#[test]
fn store_failure_aborts_every_strategy() {
    let resolver = IdentityResolver::new(&FailingStore);
    let queries = [
        ProgramQuery::new().with_executable("steam.exe"),
        ProgramQuery::new().with_name("Steam"),
        ProgramQuery::new().with_publisher("Valve"),
    ];
    for query in &queries {
        let result = resolver.find_entry(query);
        assert!(
            matches!(result, Err(LensError::StoreUnavailable(_))),
            "{query:?} returned {result:?}"
        );
    }
}

#[test]
fn skipped_strategies_do_not_touch_a_failing_store() {
    // Only the generic publisher is given, so no query is ever issued.
    let resolver = IdentityResolver::new(&FailingStore);
    let query = ProgramQuery::new().with_publisher("Microsoft Windows");
    assert!(resolver.find_entry(&query).unwrap().is_none());
}
