//! Record presenter contract and card projection.
//!
//! # Invariants
//! - A presenter raises exactly two intents: edit and delete.
//! - Delete intents exist only after the presenter's confirmation step.

use crate::model::contact::{Contact, ContactId};

const AVATAR_FALLBACK_BASE: &str = "https://avatar.vercel.sh";

/// Intent raised by a presenter about one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterIntent {
    /// Open the editor pre-filled with this record.
    Edit(Contact),
    /// Remove the record with this id.
    Delete(ContactId),
}

/// Social profile kinds rendered as links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    Linkedin,
    Twitter,
    Github,
}

impl SocialNetwork {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
            Self::Github => "github",
        }
    }
}

/// Display projection of one contact.
#[derive(Debug, Clone, Copy)]
pub struct ContactCard<'a> {
    contact: &'a Contact,
}

impl<'a> ContactCard<'a> {
    pub fn new(contact: &'a Contact) -> Self {
        Self { contact }
    }

    pub fn contact(&self) -> &'a Contact {
        self.contact
    }

    pub fn initials(&self) -> String {
        initials(self.contact.name.as_str())
    }

    /// Explicit avatar URL, or a generated one keyed by email (name when the
    /// email is empty).
    pub fn avatar_src(&self) -> String {
        if let Some(url) = self.contact.avatar_url.as_deref() {
            return url.to_string();
        }
        let key = if self.contact.email.is_empty() {
            self.contact.name.as_str()
        } else {
            self.contact.email.as_str()
        };
        format!("{AVATAR_FALLBACK_BASE}/{key}.png")
    }

    /// Phone numbers that are set, labelled.
    pub fn phones(&self) -> Vec<(&'static str, &'a str)> {
        [
            ("office", self.contact.office_phone.as_deref()),
            ("mobile", self.contact.mobile.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|value| (label, value)))
        .collect()
    }

    pub fn social_links(&self) -> Vec<(SocialNetwork, &'a str)> {
        [
            (SocialNetwork::Linkedin, self.contact.linkedin.as_deref()),
            (SocialNetwork::Twitter, self.contact.twitter.as_deref()),
            (SocialNetwork::Github, self.contact.github.as_deref()),
        ]
        .into_iter()
        .filter_map(|(network, url)| url.map(|url| (network, url)))
        .collect()
    }

    /// Confirmation question shown before a delete.
    pub fn delete_prompt(&self) -> String {
        let mut prompt =
            String::from("This action cannot be undone. This will permanently delete the contact");
        if !self.contact.name.is_empty() {
            prompt.push_str(&format!(" \"{}\"", self.contact.name));
        }
        prompt.push('.');
        prompt
    }

    pub fn edit_intent(&self) -> PresenterIntent {
        PresenterIntent::Edit(self.contact.clone())
    }

    /// Turns the answer to [`Self::delete_prompt`] into an intent.
    pub fn confirm_delete(&self, confirmed: bool) -> Option<PresenterIntent> {
        confirmed.then(|| PresenterIntent::Delete(self.contact.id.clone()))
    }
}

/// Derives up to two uppercase initials from a display name.
pub fn initials(name: &str) -> String {
    let words = name.trim().split(' ').collect::<Vec<_>>();
    let first = words.first().copied().unwrap_or_default();
    if first.is_empty() {
        return String::new();
    }

    let mut out = first_char_upper(first);
    if words.len() > 1 {
        if let Some(last) = words.last() {
            out.push_str(&first_char_upper(last));
        }
    }
    out
}

fn first_char_upper(word: &str) -> String {
    word.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{initials, ContactCard, PresenterIntent, SocialNetwork};
    use crate::model::contact::ContactId;
    use crate::model::seed::seed_contacts;

    #[test]
    fn initials_follow_first_and_last_word() {
        assert_eq!(initials("jane doe"), "JD");
        assert_eq!(initials("  Mary Ann Lee "), "ML");
        assert_eq!(initials("cher"), "C");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn avatar_falls_back_to_email_then_name() {
        let mut contact = seed_contacts().remove(0);
        contact.avatar_url = None;
        assert_eq!(
            ContactCard::new(&contact).avatar_src(),
            "https://avatar.vercel.sh/jane.doe@example.com.png"
        );

        contact.email.clear();
        assert_eq!(
            ContactCard::new(&contact).avatar_src(),
            "https://avatar.vercel.sh/Jane Doe.png"
        );
    }

    #[test]
    fn delete_intent_requires_confirmation() {
        let john = seed_contacts().remove(1);
        let card = ContactCard::new(&john);
        assert!(card.delete_prompt().contains("\"John Smith\""));
        assert_eq!(card.confirm_delete(false), None);
        assert_eq!(
            card.confirm_delete(true),
            Some(PresenterIntent::Delete(ContactId::from("2")))
        );
    }

    #[test]
    fn card_lists_only_present_links() {
        let john = seed_contacts().remove(1);
        let card = ContactCard::new(&john);
        assert_eq!(
            card.social_links(),
            vec![(SocialNetwork::Github, "https://github.com/johnsmith")]
        );
        assert_eq!(card.phones(), vec![("office", "+0987654321")]);
    }
}
