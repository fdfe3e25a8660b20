use super::*;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Entry {
    id: u32,
    text: String,
}

const ENTRIES: StorageKey<Vec<Entry>> = StorageKey::new("journal", Vec::new);

fn seeded() -> Vec<String> {
    vec!["seed".to_owned()]
}

const SEEDED: StorageKey<Vec<String>> = StorageKey::new("devotional", seeded);

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn missing_key_loads_default() {
    let storage = Storage::new(MemoryStore::new());
    assert!(storage.load(&ENTRIES).unwrap().is_empty());
    assert_eq!(storage.load(&SEEDED).unwrap(), vec!["seed".to_owned()]);
}

#[test]
fn save_then_load_returns_value() {
    let storage = Storage::new(MemoryStore::new());
    let value = vec![Entry { id: 1, text: "hello".into() }];
    storage.save(&ENTRIES, &value).unwrap();
    assert_eq!(storage.load(&ENTRIES).unwrap(), value);
}

#[test]
fn malformed_value_errors_with_key_name() {
    let storage = Storage::new(MemoryStore::new());
    storage.backend().write("journal", "{not json").unwrap();
    let err = storage.load(&ENTRIES).unwrap_err();
    assert!(matches!(&err, StoreError::Malformed { key, .. } if key == "journal"));
    assert_eq!(err.error_code(), "E_STORE_MALFORMED");
}

#[test]
fn wrong_shape_is_malformed_not_default() {
    let storage = Storage::new(MemoryStore::new());
    storage.backend().write("journal", r#"{"id": 1}"#).unwrap();
    assert!(matches!(storage.load(&ENTRIES), Err(StoreError::Malformed { .. })));
}

#[test]
fn blank_value_loads_default() {
    let storage = Storage::new(MemoryStore::new());
    storage.backend().write("journal", "  ").unwrap();
    assert!(storage.load(&ENTRIES).unwrap().is_empty());
}

#[test]
fn update_persists_mutation() {
    let storage = Storage::new(MemoryStore::new());
    let len = storage
        .update(&ENTRIES, |entries| {
            entries.push(Entry { id: 7, text: "x".into() });
            Ok::<_, StoreError>(entries.len())
        })
        .unwrap();
    assert_eq!(len, 1);
    assert_eq!(storage.load(&ENTRIES).unwrap()[0].id, 7);
}

#[test]
fn update_does_not_save_on_closure_error() {
    let storage = Storage::new(MemoryStore::new());
    let result = storage.update(&ENTRIES, |entries| {
        entries.push(Entry { id: 1, text: "x".into() });
        Err::<(), _>(StoreError::UnknownKey("nope".into()))
    });
    assert!(result.is_err());
    assert!(storage.load(&ENTRIES).unwrap().is_empty());
}

#[test]
fn reset_restores_default() {
    let storage = Storage::new(MemoryStore::new());
    storage.save(&SEEDED, &vec!["mine".to_owned()]).unwrap();
    storage.reset("devotional").unwrap();
    assert_eq!(storage.load(&SEEDED).unwrap(), seeded());
}

#[test]
fn reset_rejects_unknown_key() {
    let storage = Storage::new(MemoryStore::new());
    assert!(matches!(storage.reset("bogus"), Err(StoreError::UnknownKey(k)) if k == "bogus"));
}

// =============================================================
// JsonFileStore
// =============================================================

#[test]
fn file_store_round_trips_through_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = Storage::new(JsonFileStore::open(dir.path()).unwrap());
    let value = vec![Entry { id: 2, text: "on disk".into() }];
    storage.save(&ENTRIES, &value).unwrap();

    assert!(dir.path().join("journal.json").exists());
    assert!(!dir.path().join(".journal.json.tmp").exists());

    let reopened = Storage::new(JsonFileStore::open(dir.path()).unwrap());
    assert_eq!(reopened.load(&ENTRIES).unwrap(), value);
}

#[test]
fn file_store_missing_file_is_default_and_remove_is_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFileStore::open(dir.path().join("nested")).unwrap();
    assert!(store.read("journal").unwrap().is_none());
    store.remove("journal").unwrap();
    store.remove("journal").unwrap();
}

#[test]
fn file_store_last_write_wins() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = Storage::new(JsonFileStore::open(dir.path()).unwrap());
    let b = Storage::new(JsonFileStore::open(dir.path()).unwrap());
    a.save(&ENTRIES, &vec![Entry { id: 1, text: "a".into() }]).unwrap();
    b.save(&ENTRIES, &vec![Entry { id: 2, text: "b".into() }]).unwrap();
    assert_eq!(a.load(&ENTRIES).unwrap()[0].text, "b");
}

#[test]
fn every_widget_key_is_known() {
    for key in KNOWN_KEYS {
        assert!(!key.is_empty());
    }
    assert!(KNOWN_KEYS.contains(&"studyBookmarks"));
    assert!(KNOWN_KEYS.contains(&"recoveryPlan"));
}
