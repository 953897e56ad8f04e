//! Contact domain model.
//!
//! # Responsibility
//! - Define the single persisted record and its create/update payloads.
//! - Own the shallow-merge rule used by updates.
//!
//! # Invariants
//! - `id` is unique across live records and is never rewritten by a merge.
//! - Optional fields never hold blank strings; blank input clears them.
//! - Wire names are camelCase to stay compatible with stored snapshots.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Separates a pinned timestamp from its tie-breaking counter in ids minted
/// past the last representable millisecond.
pub const OVERFLOW_SEPARATOR: char = '#';

/// Stable identifier of a contact.
///
/// Freshly minted ids are ISO-8601 UTC timestamps with millisecond precision,
/// so the id doubles as the creation time used for recency ordering. Ids
/// loaded from storage are kept verbatim even when they are not timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns whether this id is the empty string.
    ///
    /// Whitespace-only ids are not empty; they still name a (likely unknown)
    /// record.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interprets the id as a creation timestamp.
    ///
    /// Returns `None` for ids that are not RFC 3339 timestamps. A trailing
    /// `#counter` is ignored.
    pub fn created_at(&self) -> Option<OffsetDateTime> {
        let stamp = self
            .0
            .split_once(OVERFLOW_SEPARATOR)
            .map_or(self.0.as_str(), |(stamp, _)| stamp);
        OffsetDateTime::parse(stamp, &Rfc3339).ok()
    }
}

impl Display for ContactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl From<&str> for ContactId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ContactId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One person's contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    /// Display name; drives initials and search.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub job_title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    /// Primary address; also the avatar derivation key.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// Create payload: a record without identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub job_title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl ContactDraft {
    /// Creates a draft with the two fields every useful contact carries.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }
}

/// Update payload for shallow merges.
///
/// `Some` replaces the stored value, `None` keeps it. For optional fields a
/// blank `Some("")` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl ContactPatch {
    /// Returns whether applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Converts the patch into a create payload.
    ///
    /// Missing required fields become empty strings.
    pub fn into_draft(self) -> ContactDraft {
        ContactDraft {
            name: self.name.unwrap_or_default(),
            job_title: self.job_title.unwrap_or_default(),
            department: self.department.unwrap_or_default(),
            office_phone: self.office_phone,
            mobile: self.mobile,
            email: self.email.unwrap_or_default(),
            avatar_url: self.avatar_url,
            linkedin: self.linkedin,
            twitter: self.twitter,
            github: self.github,
        }
    }
}

impl From<Contact> for ContactPatch {
    /// Full-record patch: every field is set, absent optionals clear.
    fn from(contact: Contact) -> Self {
        Self {
            name: Some(contact.name),
            job_title: Some(contact.job_title),
            department: Some(contact.department),
            office_phone: Some(contact.office_phone.unwrap_or_default()),
            mobile: Some(contact.mobile.unwrap_or_default()),
            email: Some(contact.email),
            avatar_url: Some(contact.avatar_url.unwrap_or_default()),
            linkedin: Some(contact.linkedin.unwrap_or_default()),
            twitter: Some(contact.twitter.unwrap_or_default()),
            github: Some(contact.github.unwrap_or_default()),
        }
    }
}

impl Contact {
    /// Materializes a draft under the given identity.
    pub fn from_draft(id: ContactId, draft: ContactDraft) -> Self {
        Self {
            id,
            name: draft.name,
            job_title: draft.job_title,
            department: draft.department,
            office_phone: draft.office_phone.and_then(non_blank),
            mobile: draft.mobile.and_then(non_blank),
            email: draft.email,
            avatar_url: draft.avatar_url.and_then(non_blank),
            linkedin: draft.linkedin.and_then(non_blank),
            twitter: draft.twitter.and_then(non_blank),
            github: draft.github.and_then(non_blank),
        }
    }

    /// Shallow-merges `patch` into this record. The id is never touched.
    pub fn apply_patch(&mut self, patch: ContactPatch) {
        let ContactPatch {
            name,
            job_title,
            department,
            office_phone,
            mobile,
            email,
            avatar_url,
            linkedin,
            twitter,
            github,
        } = patch;

        replace_required(&mut self.name, name);
        replace_required(&mut self.job_title, job_title);
        replace_required(&mut self.department, department);
        replace_required(&mut self.email, email);
        replace_optional(&mut self.office_phone, office_phone);
        replace_optional(&mut self.mobile, mobile);
        replace_optional(&mut self.avatar_url, avatar_url);
        replace_optional(&mut self.linkedin, linkedin);
        replace_optional(&mut self.twitter, twitter);
        replace_optional(&mut self.github, github);
    }
}

fn replace_required(slot: &mut String, incoming: Option<String>) {
    if let Some(value) = incoming {
        *slot = value;
    }
}

fn replace_optional(slot: &mut Option<String>, incoming: Option<String>) {
    if let Some(value) = incoming {
        *slot = non_blank(value);
    }
}

/// Reads a text field that older snapshots may hold as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Contact, ContactDraft, ContactId, ContactPatch};

    #[test]
    fn timestamp_ids_expose_creation_time() {
        let id = ContactId::from("2026-10-17T09:30:00.123Z");
        let created_at = id.created_at().expect("timestamp id should parse");
        assert_eq!(created_at.millisecond(), 123);

        assert!(ContactId::from("1").created_at().is_none());
    }

    #[test]
    fn null_text_fields_read_as_empty() {
        let json = serde_json::json!({
            "id": "1",
            "name": "Mine",
            "email": null,
            "jobTitle": null,
            "department": "Ops"
        });
        let contact: Contact = serde_json::from_value(json).unwrap();
        assert_eq!(contact.email, "");
        assert_eq!(contact.job_title, "");
        assert_eq!(contact.department, "Ops");
    }

    #[test]
    fn blank_optional_values_are_dropped_on_create() {
        let mut draft = ContactDraft::new("Ann Lee", "ann@x.com");
        draft.mobile = Some("   ".to_string());
        let contact = Contact::from_draft(ContactId::from("a"), draft);
        assert_eq!(contact.mobile, None);
    }

    #[test]
    fn patch_from_full_record_clears_missing_optionals() {
        let mut stored = Contact::from_draft(
            ContactId::from("a"),
            ContactDraft {
                github: Some("https://github.com/ann".to_string()),
                ..ContactDraft::new("Ann", "ann@x.com")
            },
        );
        let mut edited = stored.clone();
        edited.github = None;

        stored.apply_patch(ContactPatch::from(edited));
        assert_eq!(stored.github, None);
        assert_eq!(stored.name, "Ann");
    }
}
