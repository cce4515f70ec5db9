use proclens::LensError;
use proclens::core::{Category, KnowledgeEntry};
use proclens::storage::{Database, load_entries_file};
use proclens::test_utils::fixtures::{KnowledgeBaseFixture, sample_entries};

#[test]
fn database_persists_across_reopen() {
    let fixture = KnowledgeBaseFixture::with_samples().unwrap();
    let expected = fixture.db.count_entries().unwrap();
    let path = fixture.db_path.clone();

    let reopened = Database::open(&path).unwrap();
    assert_eq!(reopened.count_entries().unwrap(), expected);
    assert_eq!(reopened.schema_version(), fixture.db.schema_version());
}

#[test]
fn export_file_imports_back() {
    let fixture = KnowledgeBaseFixture::new().unwrap();
    let entries: Vec<KnowledgeEntry> = sample_entries();
    let path = fixture.write_entries_file("entries.json", &entries).unwrap();

    let loaded = load_entries_file(&path).unwrap();
    assert_eq!(fixture.db.import_entries(&loaded).unwrap(), entries.len());

    let updaters = fixture.db.entries_by_category(Category::Updater).unwrap();
    let names: Vec<_> = updaters.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Brave Update", "Google Updater"]);
}

#[test]
fn failed_import_rolls_back() {
    let fixture = KnowledgeBaseFixture::new().unwrap();
    let mut entries = sample_entries();
    entries.push(KnowledgeEntry::new("Ghost", "   "));

    let result = fixture.db.import_entries(&entries);
    assert!(matches!(result, Err(LensError::Import(_))));
    assert_eq!(fixture.db.count_entries().unwrap(), 0);
}

#[test]
fn seeding_only_fills_an_empty_store() {
    let fixture = KnowledgeBaseFixture::new().unwrap();
    let seeded = fixture.db.seed_reference_data().unwrap();
    assert!(seeded > 0);
    assert_eq!(fixture.db.seed_reference_data().unwrap(), 0);
    assert_eq!(fixture.db.count_entries().unwrap(), seeded as u64);

    let populated = KnowledgeBaseFixture::with_samples().unwrap();
    assert_eq!(populated.db.seed_reference_data().unwrap(), 0);
}

#[test]
fn exported_entries_load_into_an_empty_store() {
    let source = KnowledgeBaseFixture::with_samples().unwrap();
    let exported = source.db.list_entries(100, 0).unwrap();
    let path = source.write_entries_file("export.json", &exported).unwrap();

    let target = KnowledgeBaseFixture::new().unwrap();
    let loaded = load_entries_file(&path).unwrap();
    assert_eq!(target.db.import_entries(&loaded).unwrap(), exported.len());

    for entry in &exported {
        let copy = target.db.get_entry(entry.id).unwrap().unwrap();
        assert_eq!(copy.name, entry.name);
        assert_eq!(copy.executable_names, entry.executable_names);
    }
}
