//! Contact store state container.
//!
//! # Invariants
//! - Storage order is the in-memory order; display order is derived on read.
//! - Every successful mutation is followed by a full-snapshot write.
//! - Update and delete of unknown ids are silent no-ops and skip the write.

use super::id_clock::IdClock;
use super::loading::{LoadingGate, StoreMode, DEFAULT_READY_DELAY};
use super::snapshot::{decode_snapshot, encode_snapshot, SnapshotError};
use crate::contract::editor::{EditorOutcome, EditorSession, EditorSubmission};
use crate::contract::presenter::PresenterIntent;
use crate::model::contact::{Contact, ContactDraft, ContactId, ContactPatch};
use crate::model::seed::seed_contacts;
use crate::search::filter::{query_contacts, visible_contacts, VisibleContacts};
use crate::storage::KeyValueStorage;
use log::{debug, error, info, warn};
use std::time::{Duration, Instant};

/// Storage key holding the JSON snapshot.
pub const DEFAULT_STORAGE_KEY: &str = "contactManagerContacts";

/// Store settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub storage_key: String,
    /// Delay from store start until the ready mode.
    pub ready_delay: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            ready_delay: DEFAULT_READY_DELAY,
        }
    }
}

/// Where the current sequence came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationSource {
    Storage,
    Seed,
}

impl HydrationSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Storage => "storage",
            Self::Seed => "seed",
        }
    }
}

/// Effect of an editor submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(ContactId),
    Updated(ContactId),
    /// The submission targeted an id that does not exist.
    Ignored(ContactId),
}

/// Effect of a presenter intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentEffect {
    /// An edit intent opens the editor on the record.
    OpenEditor(EditorSession),
    /// A delete intent ran; `removed` is false for unknown ids.
    Deleted { id: ContactId, removed: bool },
}

/// Owns the canonical contact sequence and mirrors it to storage.
pub struct ContactStore<S: KeyValueStorage> {
    storage: S,
    config: StoreConfig,
    contacts: Vec<Contact>,
    ids: IdClock,
    gate: LoadingGate,
    source: HydrationSource,
}

impl<S: KeyValueStorage> ContactStore<S> {
    /// Opens a store with default settings, starting the loading gate now.
    pub fn open(storage: S) -> Self {
        Self::open_with(storage, StoreConfig::default(), Instant::now())
    }

    /// Opens a store and hydrates it immediately.
    pub fn open_with(storage: S, config: StoreConfig, started_at: Instant) -> Self {
        let gate = LoadingGate::new(started_at, config.ready_delay);
        let mut store = Self {
            storage,
            config,
            contacts: Vec::new(),
            ids: IdClock::new(),
            gate,
            source: HydrationSource::Seed,
        };
        store.hydrate();
        store
    }

    /// Replaces the in-memory sequence with the stored snapshot, or the seed
    /// set when the snapshot is missing or unusable, then persists it.
    pub fn hydrate(&mut self) -> HydrationSource {
        let started_at = Instant::now();
        let (contacts, source) = match self.read_snapshot() {
            Ok(Some(contacts)) => (contacts, HydrationSource::Storage),
            Ok(None) => {
                info!(
                    "event=store_hydrate module=store status=fallback reason=missing key={}",
                    self.config.storage_key
                );
                (seed_contacts(), HydrationSource::Seed)
            }
            Err(err) => {
                error!(
                    "event=store_hydrate module=store status=fallback reason=unreadable key={} error={}",
                    self.config.storage_key, err
                );
                (seed_contacts(), HydrationSource::Seed)
            }
        };

        self.ids = IdClock::new();
        for contact in &contacts {
            self.ids.observe(&contact.id);
        }
        self.contacts = contacts;
        self.source = source;

        info!(
            "event=store_hydrate module=store status=ok source={} count={} duration_ms={}",
            source.as_str(),
            self.contacts.len(),
            started_at.elapsed().as_millis()
        );
        self.persist();
        source
    }

    /// Creates a record with a fresh timestamp id and prepends it.
    pub fn create(&mut self, draft: ContactDraft) -> ContactId {
        let id = self.ids.next_id();
        self.contacts.insert(0, Contact::from_draft(id.clone(), draft));
        info!(
            "event=contact_create module=store status=ok id={} count={}",
            id,
            self.contacts.len()
        );
        self.persist();
        id
    }

    /// Merges `patch` into the record with `id`.
    ///
    /// Returns `false` without touching anything when `id` is unknown.
    pub fn update(&mut self, id: &ContactId, patch: ContactPatch) -> bool {
        let Some(contact) = self.contacts.iter_mut().find(|contact| &contact.id == id) else {
            debug!("event=contact_update module=store status=skipped reason=not_found id={id}");
            return false;
        };
        contact.apply_patch(patch);
        info!("event=contact_update module=store status=ok id={id}");
        self.persist();
        true
    }

    /// Removes the record with `id`. Returns `false` when it was not present.
    pub fn delete(&mut self, id: &ContactId) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|contact| &contact.id != id);
        if self.contacts.len() == before {
            debug!("event=contact_delete module=store status=skipped reason=not_found id={id}");
            return false;
        }
        info!(
            "event=contact_delete module=store status=ok id={} count={}",
            id,
            self.contacts.len()
        );
        self.persist();
        true
    }

    /// Routes an editor submission to update (non-empty id) or create.
    pub fn submit(&mut self, submission: EditorSubmission) -> SubmitOutcome {
        match submission.target().cloned() {
            Some(id) => {
                if self.update(&id, submission.fields) {
                    SubmitOutcome::Updated(id)
                } else {
                    SubmitOutcome::Ignored(id)
                }
            }
            None => SubmitOutcome::Created(self.create(submission.fields.into_draft())),
        }
    }

    /// Applies an editor outcome; dismissals change nothing.
    pub fn apply_outcome(&mut self, outcome: EditorOutcome) -> Option<SubmitOutcome> {
        match outcome {
            EditorOutcome::Committed(submission) => Some(self.submit(submission)),
            EditorOutcome::Dismissed => None,
        }
    }

    /// Applies a presenter intent.
    pub fn apply_intent(&mut self, intent: PresenterIntent) -> IntentEffect {
        match intent {
            PresenterIntent::Edit(contact) => {
                IntentEffect::OpenEditor(EditorSession::edit(contact))
            }
            PresenterIntent::Delete(id) => {
                let removed = self.delete(&id);
                IntentEffect::Deleted { id, removed }
            }
        }
    }

    /// Writes the full sequence to storage. Failures are logged and absorbed.
    pub fn persist(&mut self) {
        match self.write_snapshot() {
            Ok(bytes) => debug!(
                "event=store_persist module=store status=ok key={} count={} bytes={}",
                self.config.storage_key,
                self.contacts.len(),
                bytes
            ),
            Err(err) => warn!(
                "event=store_persist module=store status=error key={} count={} error={}",
                self.config.storage_key,
                self.contacts.len(),
                err
            ),
        }
    }

    /// Records matching `term`, newest first.
    pub fn query(&self, term: &str) -> Vec<&Contact> {
        query_contacts(&self.contacts, term)
    }

    /// Query result plus empty-state classification.
    pub fn visible(&self, term: &str) -> VisibleContacts<'_> {
        visible_contacts(&self.contacts, term)
    }

    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| &contact.id == id)
    }

    /// The sequence in storage order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn source(&self) -> HydrationSource {
        self.source
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn mode(&self) -> StoreMode {
        self.gate.mode()
    }

    pub fn mode_at(&self, now: Instant) -> StoreMode {
        self.gate.mode_at(now)
    }

    /// Blocks until the startup delay has elapsed.
    pub fn wait_until_ready(&self) {
        self.gate.wait_until_ready();
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn read_snapshot(&self) -> Result<Option<Vec<Contact>>, SnapshotError> {
        match self.storage.get_item(&self.config.storage_key)? {
            Some(raw) => decode_snapshot(&raw).map(Some),
            None => Ok(None),
        }
    }

    fn write_snapshot(&mut self) -> Result<usize, SnapshotError> {
        let encoded = encode_snapshot(&self.contacts)?;
        self.storage.set_item(&self.config.storage_key, &encoded)?;
        Ok(encoded.len())
    }
}
