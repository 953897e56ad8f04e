use contactbook_core::{
    ContactDraft, ContactId, ContactPatch, ContactStore, HydrationSource, KeyValueStorage,
    MemoryStorage, StoreConfig, StoreMode, DEFAULT_STORAGE_KEY,
};
use std::collections::HashSet;
use std::time::{Duration, Instant};

fn seeded_store() -> ContactStore<MemoryStorage> {
    ContactStore::open(MemoryStorage::new())
}

fn ann_draft() -> ContactDraft {
    ContactDraft {
        job_title: "PM".to_string(),
        department: "Ops".to_string(),
        ..ContactDraft::new("Ann Lee", "ann@x.com")
    }
}

fn names(contacts: &[&contactbook_core::Contact]) -> Vec<String> {
    contacts.iter().map(|c| c.name.clone()).collect()
}

#[test]
fn empty_storage_hydrates_seed_records() {
    let store = seeded_store();
    assert_eq!(store.source(), HydrationSource::Seed);
    let stored = store.contacts().iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
    assert_eq!(stored, vec!["Jane Doe", "John Smith"]);
}

#[test]
fn unparsable_or_non_array_storage_falls_back_to_seed() {
    for raw in ["not json", "{\"id\":\"1\"}", "42", "", "[{\"name\":\"missing id\"}]"] {
        let store = ContactStore::open(MemoryStorage::with_item(DEFAULT_STORAGE_KEY, raw));
        assert_eq!(store.source(), HydrationSource::Seed, "payload {raw:?}");
        assert_eq!(store.len(), 2);
    }
}

#[test]
fn null_text_fields_keep_stored_records() {
    let raw = r#"[{"id":"2025-01-01T00:00:00.000Z","name":"Mine","email":"m@x.com","jobTitle":null,"department":"Ops"}]"#;
    let store = ContactStore::open(MemoryStorage::with_item(DEFAULT_STORAGE_KEY, raw));

    assert_eq!(store.source(), HydrationSource::Storage);
    assert_eq!(store.len(), 1);
    assert_eq!(store.contacts()[0].name, "Mine");
    assert_eq!(store.contacts()[0].job_title, "");
    assert_eq!(names(&store.query("mine")), vec!["Mine"]);

    let stored = store.storage().get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    assert!(stored.contains("\"name\":\"Mine\""));
    assert!(!stored.contains("Jane Doe"));
}

#[test]
fn create_adds_one_record_with_fresh_id_shown_first() {
    let mut store = seeded_store();
    let before = store.len();

    let id = store.create(ann_draft());

    assert_eq!(store.len(), before + 1);
    assert!(id.created_at().is_some());
    let created = store.get(&id).unwrap();
    assert_eq!(created.name, "Ann Lee");
    assert_eq!(created.email, "ann@x.com");
    assert_eq!(created.job_title, "PM");
    assert_eq!(created.department, "Ops");
    assert_eq!(store.contacts()[0].id, id);
    assert_eq!(store.query("")[0].id, id);
}

#[test]
fn rapid_creates_get_unique_ids_newest_first() {
    let mut store = seeded_store();
    let ids = (0..20)
        .map(|n| store.create(ContactDraft::new(format!("Person {n}"), "p@x.com")))
        .collect::<Vec<_>>();

    let unique = ids.iter().collect::<HashSet<_>>();
    assert_eq!(unique.len(), ids.len());

    let visible = store.query("person");
    assert_eq!(visible.len(), 20);
    assert_eq!(visible[0].id, ids[19]);
    assert_eq!(visible[19].id, ids[0]);
}

#[test]
fn creates_after_latest_representable_id_still_list_first() {
    let raw = r#"[{"id":"9999-12-31T23:59:59.999Z","name":"Far Future","email":"f@x.com"}]"#;
    let mut store = ContactStore::open(MemoryStorage::with_item(DEFAULT_STORAGE_KEY, raw));

    let first = store.create(ContactDraft::new("First", "a@x.com"));
    let second = store.create(ContactDraft::new("Second", "b@x.com"));

    assert_ne!(first, second);
    assert_eq!(
        names(&store.query("")),
        vec!["Second", "First", "Far Future"]
    );
}

#[test]
fn update_merges_fields_of_target_only() {
    let mut store = seeded_store();
    let jane_before = store.get(&ContactId::from("1")).unwrap().clone();
    let john_before = store.get(&ContactId::from("2")).unwrap().clone();

    let updated = store.update(
        &ContactId::from("1"),
        ContactPatch {
            job_title: Some("Staff Engineer".to_string()),
            ..ContactPatch::default()
        },
    );

    assert!(updated);
    let jane = store.get(&ContactId::from("1")).unwrap();
    assert_eq!(jane.job_title, "Staff Engineer");
    assert_eq!(jane.name, jane_before.name);
    assert_eq!(jane.mobile, jane_before.mobile);
    assert_eq!(jane.linkedin, jane_before.linkedin);
    assert_eq!(store.get(&ContactId::from("2")).unwrap(), &john_before);
}

#[test]
fn update_of_unknown_id_is_a_silent_no_op() {
    let mut store = seeded_store();
    let before = store.contacts().to_vec();

    let updated = store.update(
        &ContactId::from("missing"),
        ContactPatch {
            name: Some("Ghost".to_string()),
            ..ContactPatch::default()
        },
    );

    assert!(!updated);
    assert_eq!(store.contacts(), before.as_slice());
}

#[test]
fn delete_removes_exactly_one_record() {
    let mut store = seeded_store();

    assert!(store.delete(&ContactId::from("2")));
    assert_eq!(store.len(), 1);
    assert!(store.get(&ContactId::from("2")).is_none());

    assert!(!store.delete(&ContactId::from("2")));
    assert_eq!(store.len(), 1);
}

#[test]
fn query_matches_name_email_and_job_title_case_insensitively() {
    let mut store = seeded_store();
    store.create(ann_draft());

    assert_eq!(names(&store.query("JANE")), vec!["Jane Doe"]);
    assert_eq!(names(&store.query("smith@")), vec!["John Smith"]);
    assert_eq!(names(&store.query("pm")), vec!["Ann Lee"]);
    assert_eq!(names(&store.query("ops")), Vec::<String>::new());
    assert_eq!(store.query("").len(), 3);
}

#[test]
fn query_design_on_seed_set_returns_john_smith() {
    let store = seeded_store();
    let hits = store.query("design");
    assert_eq!(names(&hits), vec!["John Smith"]);
    assert_eq!(hits[0].department, "Design");
    assert!(hits[0].job_title.to_lowercase().contains("design"));
}

#[test]
fn query_empty_term_orders_seed_ids_descending() {
    let store = seeded_store();
    assert_eq!(names(&store.query("")), vec!["John Smith", "Jane Doe"]);
}

#[test]
fn persist_then_hydrate_reproduces_sequence() {
    let mut store = seeded_store();
    store.create(ann_draft());
    store.update(
        &ContactId::from("2"),
        ContactPatch {
            mobile: Some("+555".to_string()),
            ..ContactPatch::default()
        },
    );
    store.delete(&ContactId::from("1"));
    let snapshot = store.contacts().to_vec();

    let reloaded = ContactStore::open(store.into_storage());
    assert_eq!(reloaded.source(), HydrationSource::Storage);
    assert_eq!(reloaded.contacts(), snapshot.as_slice());
}

#[test]
fn every_mutation_overwrites_the_stored_snapshot() {
    let mut storage = MemoryStorage::new();
    {
        let mut store = ContactStore::open(&mut storage);
        store.delete(&ContactId::from("1"));
    }
    let raw = storage.get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let stored = value.as_array().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["name"], "John Smith");
}

#[test]
fn write_failures_keep_memory_authoritative() {
    let mut store = ContactStore::open(MemoryStorage::with_quota(16));
    assert_eq!(store.source(), HydrationSource::Seed);
    assert!(store.storage().is_empty());

    let id = store.create(ann_draft());
    assert_eq!(store.len(), 3);
    assert!(store.get(&id).is_some());
    assert!(store.storage().is_empty());
}

#[test]
fn mode_switches_to_ready_after_delay() {
    let started_at = Instant::now();
    let config = StoreConfig {
        ready_delay: Duration::from_millis(1000),
        ..StoreConfig::default()
    };
    let store = ContactStore::open_with(MemoryStorage::new(), config, started_at);

    assert_eq!(store.mode_at(started_at), StoreMode::Loading);
    assert_eq!(
        store.mode_at(started_at + Duration::from_millis(1000)),
        StoreMode::Ready
    );
}

#[test]
fn zero_delay_store_is_ready_after_wait() {
    let config = StoreConfig {
        ready_delay: Duration::ZERO,
        ..StoreConfig::default()
    };
    let store = ContactStore::open_with(MemoryStorage::new(), config, Instant::now());
    store.wait_until_ready();
    assert_eq!(store.mode(), StoreMode::Ready);
}
