//! Record editor contract.
//!
//! # Invariants
//! - A non-empty `id` on a submission is the only thing that turns it into
//!   an update; everything else is a create.
//! - A dismissed session has no effect on the store.

use crate::model::contact::{Contact, ContactId, ContactPatch};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit,
}

/// Payload committed by the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ContactId>,
    #[serde(flatten)]
    pub fields: ContactPatch,
}

impl EditorSubmission {
    /// Submission for a brand-new record.
    pub fn create(fields: ContactPatch) -> Self {
        Self { id: None, fields }
    }

    /// Submission targeting an existing record.
    pub fn update(id: ContactId, fields: ContactPatch) -> Self {
        Self {
            id: Some(id),
            fields,
        }
    }

    /// Returns the update target. Only an absent or empty id means create.
    pub fn target(&self) -> Option<&ContactId> {
        self.id.as_ref().filter(|id| !id.is_empty())
    }
}

impl From<Contact> for EditorSubmission {
    fn from(contact: Contact) -> Self {
        let id = contact.id.clone();
        Self::update(id, ContactPatch::from(contact))
    }
}

/// How an editor session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    Committed(EditorSubmission),
    Dismissed,
}

/// One open editor, either blank or pre-filled from an existing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    initial: Option<Contact>,
}

impl EditorSession {
    pub fn create() -> Self {
        Self { initial: None }
    }

    pub fn edit(contact: Contact) -> Self {
        Self {
            initial: Some(contact),
        }
    }

    pub fn mode(&self) -> EditorMode {
        if self.initial.is_some() {
            EditorMode::Edit
        } else {
            EditorMode::Create
        }
    }

    /// Record the editor was opened with, if any.
    pub fn initial(&self) -> Option<&Contact> {
        self.initial.as_ref()
    }

    /// Commits `fields`, carrying over the original id in edit mode.
    pub fn commit(self, fields: ContactPatch) -> EditorOutcome {
        let id = self.initial.map(|contact| contact.id);
        EditorOutcome::Committed(EditorSubmission { id, fields })
    }

    pub fn dismiss(self) -> EditorOutcome {
        EditorOutcome::Dismissed
    }
}
