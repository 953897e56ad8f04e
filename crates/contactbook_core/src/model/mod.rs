//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record and its editor payloads.
//! - Provide the built-in seed set used by hydration fallback.
//!
//! # Invariants
//! - Every record is identified by a `ContactId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod contact;
pub mod seed;
