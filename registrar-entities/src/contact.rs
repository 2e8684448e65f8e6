//! Registrant and role contacts.

use chrono::{DateTime, Utc};
use registrar_model::{TimeConverter, entity};

entity! {
    /// A registrant or role contact attached to domains.
    pub struct Contact as "contact" {
        handle,
        first_name { wire_key("firstName") },
        last_name { wire_key("lastName") },
        organization,
        email,
        phone,
        created_at { wire_key("createdAt"), converter(TimeConverter) },
    }
}

impl Contact {
    /// First and last name joined by a space, skipping whichever is unset.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name(), self.last_name()]
            .into_iter()
            .filter_map(|value| value.as_str())
            .collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    }

    #[must_use]
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created_at().as_time().copied()
    }
}
