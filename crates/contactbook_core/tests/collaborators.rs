use contactbook_core::{
    ContactCard, ContactId, ContactPatch, ContactStore, EditorMode,
    EditorSession, EditorSubmission, EmptyState, IntentEffect, MemoryStorage, SubmitOutcome,
};

fn store() -> ContactStore<MemoryStorage> {
    ContactStore::open(MemoryStorage::new())
}

#[test]
fn create_session_commit_creates_record() {
    let mut store = store();
    let session = EditorSession::create();
    assert_eq!(session.mode(), EditorMode::Create);

    let outcome = session.commit(ContactPatch {
        name: Some("Ann Lee".to_string()),
        email: Some("ann@x.com".to_string()),
        ..ContactPatch::default()
    });

    let Some(SubmitOutcome::Created(id)) = store.apply_outcome(outcome) else {
        panic!("expected create");
    };
    assert_eq!(store.len(), 3);
    assert_eq!(store.get(&id).unwrap().name, "Ann Lee");
}

#[test]
fn dismissed_session_is_a_no_op() {
    let mut store = store();
    let before = store.contacts().to_vec();

    assert_eq!(store.apply_outcome(EditorSession::create().dismiss()), None);
    assert_eq!(store.contacts(), before.as_slice());
}

#[test]
fn edit_intent_roundtrip_updates_in_place() {
    let mut store = store();
    let jane = store.get(&ContactId::from("1")).unwrap().clone();

    let intent = ContactCard::new(&jane).edit_intent();
    let IntentEffect::OpenEditor(session) = store.apply_intent(intent) else {
        panic!("edit intent should open the editor");
    };
    assert_eq!(session.mode(), EditorMode::Edit);
    assert_eq!(session.initial(), Some(&jane));

    let outcome = session.commit(ContactPatch {
        department: Some("Platform".to_string()),
        ..ContactPatch::default()
    });
    assert_eq!(
        store.apply_outcome(outcome),
        Some(SubmitOutcome::Updated(ContactId::from("1")))
    );
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(&ContactId::from("1")).unwrap().department, "Platform");
}

#[test]
fn full_record_submission_replaces_fields() {
    let mut store = store();
    let mut john = store.get(&ContactId::from("2")).unwrap().clone();
    john.github = None;
    john.mobile = Some("+42".to_string());

    let outcome = store.submit(EditorSubmission::from(john.clone()));
    assert_eq!(outcome, SubmitOutcome::Updated(ContactId::from("2")));
    assert_eq!(store.get(&ContactId::from("2")).unwrap(), &john);
}

#[test]
fn submission_with_blank_id_creates() {
    let mut store = store();
    let outcome = store.submit(EditorSubmission::update(
        ContactId::from(""),
        ContactPatch {
            name: Some("Blank".to_string()),
            ..ContactPatch::default()
        },
    ));
    assert!(matches!(outcome, SubmitOutcome::Created(_)));
    assert_eq!(store.len(), 3);
}

#[test]
fn submission_with_whitespace_id_takes_update_path() {
    let mut store = store();
    let outcome = store.submit(EditorSubmission::update(
        ContactId::from(" "),
        ContactPatch {
            name: Some("X".to_string()),
            ..ContactPatch::default()
        },
    ));
    assert_eq!(outcome, SubmitOutcome::Ignored(ContactId::from(" ")));
    assert_eq!(store.len(), 2);
}

#[test]
fn submission_for_unknown_id_is_ignored() {
    let mut store = store();
    let outcome = store.submit(EditorSubmission::update(
        ContactId::from("nope"),
        ContactPatch::default(),
    ));
    assert_eq!(outcome, SubmitOutcome::Ignored(ContactId::from("nope")));
    assert_eq!(store.len(), 2);
}

#[test]
fn confirmed_delete_intent_removes_record() {
    let mut store = store();
    let john = store.get(&ContactId::from("2")).unwrap().clone();
    let card = ContactCard::new(&john);

    assert!(card.confirm_delete(false).is_none());
    let intent = card.confirm_delete(true).unwrap();
    assert_eq!(
        store.apply_intent(intent),
        IntentEffect::Deleted {
            id: ContactId::from("2"),
            removed: true
        }
    );
    assert!(store.get(&ContactId::from("2")).is_none());
}

#[test]
fn visible_view_reports_empty_states() {
    let mut store = store();
    assert_eq!(store.visible("").empty_state, None);
    assert_eq!(store.visible("zzz").empty_state, Some(EmptyState::NoMatches));

    store.delete(&ContactId::from("1"));
    store.delete(&ContactId::from("2"));
    let visible = store.visible("");
    assert!(visible.items.is_empty());
    assert_eq!(visible.empty_state, Some(EmptyState::NoContacts));
    assert_eq!(
        EmptyState::NoContacts.message(),
        "No contacts yet. Add one to get started!"
    );
}
