//! Plain-text card rendering.

use contactbook_core::{Contact, ContactCard};
use std::fmt::Write;

pub fn render_card(contact: &Contact) -> String {
    let card = ContactCard::new(contact);
    let mut out = String::new();

    let _ = writeln!(out, "[{}] {}", card.initials(), contact.name);
    let role = [contact.job_title.as_str(), contact.department.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" / ");
    if !role.is_empty() {
        let _ = writeln!(out, "    {role}");
    }
    for (label, number) in card.phones() {
        let _ = writeln!(out, "    {label}: {number}");
    }
    let _ = writeln!(out, "    email: {}", contact.email);
    let _ = writeln!(out, "    avatar: {}", card.avatar_src());
    for (network, url) in card.social_links() {
        let _ = writeln!(out, "    {}: {url}", network.as_str());
    }
    let _ = write!(out, "    id: {}", contact.id);
    out
}
