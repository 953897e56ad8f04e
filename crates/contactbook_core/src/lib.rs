//! Core domain logic for contactbook.
//! This crate owns the contact sequence and every rule that touches it.

pub mod contract;
pub mod db;
pub mod logging;
pub mod model;
pub mod search;
pub mod storage;
pub mod store;

pub use contract::editor::{EditorMode, EditorOutcome, EditorSession, EditorSubmission};
pub use contract::presenter::{initials, ContactCard, PresenterIntent, SocialNetwork};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::contact::{Contact, ContactDraft, ContactId, ContactPatch};
pub use model::seed::seed_contacts;
pub use search::filter::{EmptyState, VisibleContacts};
pub use storage::{KeyValueStorage, MemoryStorage, SqliteStorage, StorageError, StorageResult};
pub use store::{
    ContactStore, HydrationSource, IntentEffect, StoreConfig, StoreMode, SubmitOutcome,
    DEFAULT_READY_DELAY, DEFAULT_STORAGE_KEY,
};

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
