//! Resolution never panics and never reports a hit it cannot justify.

use proptest::prelude::*;

use proclens::LensError;
use proclens::core::{IdentityResolver, MatchStrategy, ProgramQuery};
use proclens::search::KeywordSearch;
use proclens::test_utils::fixtures::{memory_db_with, sample_entries};

fn arb_field() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        ".{0,24}",
        Just("steam.exe".to_string()),
        Just("GoogleUpdaterTaskMachineCore".to_string()),
        Just("Microsoft Windows".to_string()),
        Just("   ".to_string()),
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn resolution_is_total(name in arb_field(), exe in arb_field(), publisher in arb_field()) {
        let db = memory_db_with(&sample_entries()).unwrap();
        let resolver = IdentityResolver::new(&db);
        let query = ProgramQuery::from_parts(name.as_deref(), exe.as_deref(), publisher.as_deref());

        match resolver.find_entry_explained(&query) {
            Ok(Some(found)) => match found.strategy {
                MatchStrategy::Executable => prop_assert!(query.executable().is_some()),
                MatchStrategy::Publisher => prop_assert!(query.publisher().is_some()),
                _ => prop_assert!(query.name().is_some()),
            },
            Ok(None) => prop_assert!(!query.is_empty()),
            Err(LensError::InvalidQuery(_)) => prop_assert!(query.is_empty()),
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }

    #[test]
    fn search_respects_limit(keyword in "[a-z]{0,3}", limit in 0usize..10) {
        let db = memory_db_with(&sample_entries()).unwrap();
        let results = KeywordSearch::new(&db).search(&keyword, limit).unwrap();
        prop_assert!(results.len() <= limit);

        let names: Vec<String> = results.iter().map(|e| e.name.to_lowercase()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        prop_assert_eq!(names, sorted);
    }
}
