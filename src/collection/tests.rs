//! Tests for the collection store.

use super::*;
use crate::errors::Error;
use crate::geo_types::{Address, Coordinate, SavedRecord, SelectionState};
use crate::sqlite::Database;
use crate::storage::{MemorySlots, SlotStorage};

const SLOT: &str = "saved_addresses";

fn red_square() -> SelectionState {
    SelectionState {
        coordinates: Some(Coordinate::new(55.751244, 37.618423)),
        address: Some(Address {
            location: "Moscow".to_string(),
            route: "Red Square".to_string(),
        }),
        has_imagery: true,
    }
}

fn open_memory() -> (CollectionStore, MemorySlots) {
    let slots = MemorySlots::new();
    let store = CollectionStore::open(Box::new(slots.clone()), SLOT).unwrap();
    (store, slots)
}

/// Storage whose writes always fail.
struct ReadOnlySlots(MemorySlots);

impl SlotStorage for ReadOnlySlots {
    fn read_slot(&self, name: &str) -> Result<Option<String>, Error> {
        self.0.read_slot(name)
    }

    fn write_slot(&self, _name: &str, _contents: &str) -> Result<(), Error> {
        Err(Error::Io(std::io::Error::other("read-only")))
    }
}

/// Storage whose reads always fail.
struct BrokenSlots;

impl SlotStorage for BrokenSlots {
    fn read_slot(&self, _name: &str) -> Result<Option<String>, Error> {
        Err(Error::Io(std::io::Error::other("disk gone")))
    }

    fn write_slot(&self, _name: &str, _contents: &str) -> Result<(), Error> {
        Ok(())
    }
}

#[test]
fn test_open_missing_slot_is_empty() {
    let (store, slots) = open_memory();
    assert!(store.records().is_empty());
    assert!(slots.read_slot(SLOT).unwrap().is_none());
}

#[test]
fn test_open_blank_slot_is_empty() {
    let slots = MemorySlots::new();
    slots.write_slot(SLOT, "   ").unwrap();
    let store = CollectionStore::open(Box::new(slots), SLOT).unwrap();
    assert!(store.records().is_empty());
}

#[test]
fn test_open_rejects_empty_slot_name() {
    let result = CollectionStore::open(Box::new(MemorySlots::new()), " ");
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[test]
fn test_open_propagates_storage_failure() {
    let result = CollectionStore::open(Box::new(BrokenSlots), SLOT);
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_corrupt_slot_backed_up_and_treated_as_empty() {
    let slots = MemorySlots::new();
    slots.write_slot(SLOT, "{not json").unwrap();

    let store = CollectionStore::open(Box::new(slots.clone()), SLOT).unwrap();
    assert!(store.records().is_empty());

    let backup = format!("{SLOT}{CORRUPT_SUFFIX}");
    assert_eq!(slots.read_slot(&backup).unwrap(), Some("{not json".to_string()));
    // The main slot is left alone until the next mutation.
    assert_eq!(slots.read_slot(SLOT).unwrap(), Some("{not json".to_string()));
}

#[test]
fn test_wrong_shape_is_corrupt() {
    let slots = MemorySlots::new();
    slots
        .write_slot(SLOT, r#"[{"id":"a","coordinates":[1.0]}]"#)
        .unwrap();
    let store = CollectionStore::open(Box::new(slots), SLOT).unwrap();
    assert!(store.records().is_empty());
}

#[test]
fn test_append_assigns_id_and_persists() {
    let (mut store, slots) = open_memory();
    let records = store.append(&red_square()).unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert!(!record.id.is_empty());
    assert_eq!(record.coordinates, Some(Coordinate::new(55.751244, 37.618423)));
    assert_eq!(record.address.as_ref().unwrap().route, "Red Square");

    let raw = slots.read_slot(SLOT).unwrap().unwrap();
    let stored: Vec<SavedRecord> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, records.to_vec());
}

#[test]
fn test_append_preserves_order_and_unique_ids() {
    let (mut store, _slots) = open_memory();
    for _ in 0..20 {
        store.append(&red_square()).unwrap();
    }
    let ids: std::collections::HashSet<_> = store.records().iter().map(|r| &r.id).collect();
    assert_eq!(ids.len(), 20);

    let first = store.records()[0].id.clone();
    store.append(&SelectionState::default()).unwrap();
    assert_eq!(store.records()[0].id, first);
    assert!(store.records()[20].address.is_none());
}

#[test]
fn test_append_tolerates_bare_selection() {
    let (mut store, slots) = open_memory();
    store.append(&SelectionState::default()).unwrap();

    let raw = slots.read_slot(SLOT).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value[0]["address"].is_null());
    assert!(value[0]["coordinates"].is_null());
}

#[test]
fn test_round_trip_through_reopen() {
    let slots = MemorySlots::new();
    let appended = {
        let mut store = CollectionStore::open(Box::new(slots.clone()), SLOT).unwrap();
        store.append(&red_square()).unwrap().last().cloned().unwrap()
    };

    let store = CollectionStore::open(Box::new(slots), SLOT).unwrap();
    assert_eq!(store.records(), &[appended]);
}

#[test]
fn test_remove_then_slot_is_empty_list() {
    let (mut store, slots) = open_memory();
    let id = store.append(&red_square()).unwrap()[0].id.clone();

    let records = store.remove(&id).unwrap();
    assert!(records.is_empty());
    assert_eq!(slots.read_slot(SLOT).unwrap(), Some("[]".to_string()));
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let (mut store, slots) = open_memory();
    store.append(&red_square()).unwrap();
    let before = store.records().to_vec();
    let raw_before = slots.read_slot(SLOT).unwrap();

    let after = store.remove("does-not-exist").unwrap().to_vec();
    assert_eq!(before, after);
    assert_eq!(slots.read_slot(SLOT).unwrap(), raw_before);
}

#[test]
fn test_remove_twice_is_idempotent() {
    let (mut store, _slots) = open_memory();
    let id = store.append(&red_square()).unwrap()[0].id.clone();
    store.append(&SelectionState::default()).unwrap();

    let once = store.remove(&id).unwrap().to_vec();
    let twice = store.remove(&id).unwrap().to_vec();
    assert_eq!(once, twice);
    assert_eq!(once.len(), 1);
}

#[test]
fn test_remove_matches_exact_id_only() {
    let (mut store, _slots) = open_memory();
    let id = store.append(&red_square()).unwrap()[0].id.clone();
    let prefix = &id[..8];
    assert_eq!(store.remove(prefix).unwrap().len(), 1);
}

#[test]
fn test_persist_failure_keeps_record_in_memory() {
    let store = CollectionStore::open(Box::new(ReadOnlySlots(MemorySlots::new())), SLOT);
    let mut store = store.unwrap();
    let result = store.append(&red_square());
    assert!(matches!(result, Err(Error::Io(_))));
    assert_eq!(store.records().len(), 1);
}

#[test]
fn test_get_by_id() {
    let (mut store, _slots) = open_memory();
    let id = store.append(&red_square()).unwrap()[0].id.clone();
    assert!(store.get(&id).is_some());
    assert!(store.get("missing").is_none());
}

#[test]
fn test_sqlite_backed_store_survives_reopen() {
    use tempfile::TempDir;
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test.db");

    let id = {
        let db = Database::open(&path).unwrap();
        let mut store = CollectionStore::open(Box::new(db), SLOT).unwrap();
        store.append(&red_square()).unwrap();
        store.append(&SelectionState::default()).unwrap()[1].id.clone()
    };

    let db = Database::open(&path).unwrap();
    let mut store = CollectionStore::open(Box::new(db), SLOT).unwrap();
    assert_eq!(store.records().len(), 2);
    assert_eq!(store.records()[1].id, id);
    assert_eq!(store.slot(), SLOT);

    store.remove(&id).unwrap();
    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.len(), 1);
}
