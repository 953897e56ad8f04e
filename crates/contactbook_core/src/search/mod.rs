//! Visible-sequence derivation.
//!
//! # Responsibility
//! - Filter contacts by a free-text search term.
//! - Order results newest first by timestamp id.
//! - Classify empty results for presentation.

pub mod filter;
