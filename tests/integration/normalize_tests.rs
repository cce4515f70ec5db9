use proclens::core::extract_base_name;
use proclens::test_utils::{TestCase, run_table_tests};

#[test]
fn startup_item_names_reduce_to_base_names() {
    let cases = [
        TestCase::new(
            "guid suffix",
            "BraveSoftwareUpdate{3B1A6C4F-0A2E-4B9E-8C2D-1A2B3C4D5E6F}",
            "BraveSoftwareUpdate",
        ),
        TestCase::new(
            "task suffix, version and guid",
            "GoogleUpdaterTask144.0.7547.0{3B1A6C4F-0A2E-4B9E-8C2D-1A2B3C4D5E6F}",
            "GoogleUpdater",
        ),
        TestCase::new(
            "stacked suffix words",
            "GoogleUpdateTaskMachineCore",
            "GoogleUpdate",
        ),
        TestCase::new("electron prefix", "electron.app.Slack", "Slack"),
        TestCase::new(
            "todesktop prefix",
            "com.todesktop.230313mzl4w4u92",
            "230313mzl4w4u92",
        ),
        TestCase::new("already clean", "  Discord  ", "Discord"),
        TestCase::new("only noise", "Task", ""),
        TestCase::new("empty", "", ""),
    ];

    run_table_tests(&cases, |raw: &str| extract_base_name(raw));
}

#[test]
fn normalized_names_are_stable() {
    for raw in [
        "GoogleUpdaterTaskSystem140.0.7272.0",
        "OneDrive Standalone Update Task-S-1-5-21",
        "MicrosoftEdgeUpdateTaskMachineUA",
        "com.todesktop.electron.app.Cursor",
    ] {
        let once = extract_base_name(raw);
        assert_eq!(extract_base_name(&once), once, "unstable for {raw}");
    }
}
