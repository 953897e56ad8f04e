//! Case-insensitive contact filter and recency sort.
//!
//! # Invariants
//! - Only `name`, `email` and `job_title` are searched.
//! - An empty term matches every record.
//! - Timestamp ids sort newest first; non-timestamp ids follow, ordered by id
//!   descending.
//! - The derived sequence is never stored.

use crate::model::contact::Contact;
use std::cmp::Reverse;
use time::OffsetDateTime;

/// Why a visible sequence came out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The store holds no records and no search is active.
    NoContacts,
    /// Records exist but none matched.
    NoMatches,
}

impl EmptyState {
    /// User-facing placeholder text.
    pub fn message(self) -> &'static str {
        match self {
            Self::NoContacts => "No contacts yet. Add one to get started!",
            Self::NoMatches => "No contacts match your search.",
        }
    }
}

/// Filtered, recency-sorted view over the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleContacts<'a> {
    pub items: Vec<&'a Contact>,
    /// `Some` only when `items` is empty.
    pub empty_state: Option<EmptyState>,
}

/// Returns whether `contact` matches `term` (case-insensitive substring).
pub fn matches_term(contact: &Contact, term: &str) -> bool {
    let needle = term.to_lowercase();
    matches_lowercase(contact, needle.as_str())
}

/// Filters and sorts `contacts` for display.
pub fn query_contacts<'a>(contacts: &'a [Contact], term: &str) -> Vec<&'a Contact> {
    let needle = term.to_lowercase();
    let mut items = contacts
        .iter()
        .filter(|contact| matches_lowercase(contact, needle.as_str()))
        .collect::<Vec<_>>();
    items.sort_by_cached_key(|contact| recency_key(contact));
    items
}

/// Like [`query_contacts`] but also classifies an empty result.
pub fn visible_contacts<'a>(contacts: &'a [Contact], term: &str) -> VisibleContacts<'a> {
    let items = query_contacts(contacts, term);
    let empty_state = if !items.is_empty() {
        None
    } else if term.is_empty() && contacts.is_empty() {
        Some(EmptyState::NoContacts)
    } else {
        Some(EmptyState::NoMatches)
    };
    VisibleContacts { items, empty_state }
}

fn matches_lowercase(contact: &Contact, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        contact.name.as_str(),
        contact.email.as_str(),
        contact.job_title.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

fn recency_key(contact: &Contact) -> (Reverse<Option<OffsetDateTime>>, Reverse<String>) {
    (
        Reverse(contact.id.created_at()),
        Reverse(contact.id.as_str().to_string()),
    )
}
