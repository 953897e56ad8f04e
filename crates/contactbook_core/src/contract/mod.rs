//! Contracts with the presentation-side collaborators.
//!
//! # Responsibility
//! - Describe what the record editor hands back to the store.
//! - Describe the intents a record presenter raises, and the card projection
//!   it renders from.
//!
//! # Invariants
//! - Collaborators never mutate the store directly; every change flows
//!   through `ContactStore` operations.

pub mod editor;
pub mod presenter;
