//! Normalization must be total and stable on its own output.

use proptest::prelude::*;

use proclens::core::extract_base_name;
use proclens::core::normalize::trim_separators;

/// Fragments that each normalization step reacts to.
fn arb_noise() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("{3B1A6C4F-0A2E-4B9E-8C2D-1A2B3C4D5E6F}".to_string()),
        r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,4}\.[0-9]{1,3}",
        Just("Task".to_string()),
        Just("Machine".to_string()),
        Just("Core".to_string()),
        Just(" Service".to_string()),
        Just("electron.app.".to_string()),
        Just("com.todesktop.".to_string()),
        r"[ ._-]{1,3}",
    ]
}

fn arb_display_name() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![arb_noise(), "[A-Za-z0-9]{1,8}"], 0..6)
        .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn idempotent_on_arbitrary_input(raw in ".{0,64}") {
        let once = extract_base_name(&raw);
        prop_assert_eq!(extract_base_name(&once), once);
    }

    #[test]
    fn idempotent_on_noisy_names(raw in arb_display_name()) {
        let once = extract_base_name(&raw);
        prop_assert_eq!(extract_base_name(&once), once);
    }

    #[test]
    fn output_never_grows(raw in arb_display_name()) {
        prop_assert!(extract_base_name(&raw).len() <= raw.len());
    }

    #[test]
    fn output_has_no_guid(raw in arb_display_name()) {
        let base = extract_base_name(&raw);
        prop_assert!(!base.contains("{3B1A6C4F"), "GUID left in {:?}", base);
    }

    /// Without letters that could spell a suffix word or prefix, and without
    /// dots or braces, only the edge trimming applies.
    #[test]
    fn clean_names_are_only_trimmed(raw in "[bcdf-hj-np-z0-9 _-]{1,30}") {
        prop_assert_eq!(extract_base_name(&raw), trim_separators(&raw));
    }
}
