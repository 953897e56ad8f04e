//! Built-in sample records used when storage holds no usable snapshot.

use super::contact::{Contact, ContactId};

/// Returns the two fallback contacts, Jane Doe first.
pub fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: ContactId::from("1"),
            name: "Jane Doe".to_string(),
            job_title: "Software Engineer".to_string(),
            department: "Engineering".to_string(),
            office_phone: None,
            mobile: Some("+1234567890".to_string()),
            email: "jane.doe@example.com".to_string(),
            avatar_url: Some("https://i.pravatar.cc/150?u=jane.doe@example.com".to_string()),
            linkedin: Some("https://linkedin.com/in/janedoe".to_string()),
            twitter: Some("https://twitter.com/janedoe".to_string()),
            github: None,
        },
        Contact {
            id: ContactId::from("2"),
            name: "John Smith".to_string(),
            job_title: "Graphic Designer".to_string(),
            department: "Design".to_string(),
            office_phone: Some("+0987654321".to_string()),
            mobile: None,
            email: "john.smith@example.com".to_string(),
            avatar_url: Some("https://i.pravatar.cc/150?u=john.smith@example.com".to_string()),
            linkedin: None,
            twitter: None,
            github: Some("https://github.com/johnsmith".to_string()),
        },
    ]
}
