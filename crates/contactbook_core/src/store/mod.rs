//! Contact store: the single owner of the contact sequence.
//!
//! # Responsibility
//! - Hydrate from storage with seed fallback and persist after mutations.
//! - Route every create/update/delete through one state container.
//! - Derive the visible sequence and the loading/ready mode.
//!
//! # Invariants
//! - Storage failures never propagate to callers; memory stays authoritative.
//! - Newly created records are prepended.

mod contact_store;
pub mod id_clock;
pub mod loading;
pub mod snapshot;

pub use contact_store::{
    ContactStore, HydrationSource, IntentEffect, StoreConfig, SubmitOutcome,
    DEFAULT_STORAGE_KEY,
};
pub use id_clock::IdClock;
pub use loading::{LoadingGate, StoreMode, DEFAULT_READY_DELAY};
pub use snapshot::SnapshotError;
