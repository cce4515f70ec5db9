use proclens::LensError;
use proclens::search::KeywordSearch;
use proclens::test_utils::fixtures::{FailingStore, memory_db_with, sample_entries};

#[test]
fn empty_keyword_lists_by_name() {
    let db = memory_db_with(&sample_entries()).unwrap();
    let results = KeywordSearch::new(&db).search("", 5).unwrap();
    let names: Vec<_> = results.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        ["Brave Update", "Discord", "Google Updater", "Slack", "Steam"]
    );
}

#[test]
fn keyword_hits_tags_and_publisher() {
    let db = memory_db_with(&sample_entries()).unwrap();
    let search = KeywordSearch::new(&db);

    let electron: Vec<_> = search
        .search("ELECTRON", 10)
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(electron, ["Discord", "Slack"]);

    let valve = search.search("valve corp", 10).unwrap();
    assert_eq!(valve.len(), 1);
    assert_eq!(valve[0].name, "Steam");
}

#[test]
fn wildcard_characters_are_literal() {
    let db = memory_db_with(&sample_entries()).unwrap();
    let search = KeywordSearch::new(&db);
    assert!(search.search("%", 10).unwrap().is_empty());
    assert!(search.search("_", 10).unwrap().is_empty());
}

#[test]
fn zero_limit_skips_the_store() {
    let search = KeywordSearch::new(&FailingStore);
    assert!(search.search("steam", 0).unwrap().is_empty());
}

#[test]
fn store_failure_surfaces() {
    let search = KeywordSearch::new(&FailingStore);
    assert!(matches!(
        search.search("steam", 5),
        Err(LensError::StoreUnavailable(_))
    ));
}
