//! Domains and their contact assignments.

use chrono::{DateTime, Utc};
use registrar_model::{
    Entity, IntegerConverter, NestedEntity, RelabeledKeys, Result, SymbolConverter, TimeConverter,
    entity,
};

use crate::contact::Contact;
use crate::{Value, nested};

/// WHOIS privacy toggles, sent as a camelCase object.
pub const WHOIS_PRIVACY: RelabeledKeys = RelabeledKeys::new(&[
    ("hideName", "hide_name"),
    ("hideEmail", "hide_email"),
    ("hidePhone", "hide_phone"),
    ("hideAddress", "hide_address"),
]);

entity! {
    /// The four contact roles of a domain.
    pub struct DomainContacts as "domain_contacts" {
        owner { converter(NestedEntity::of::<Contact>()) },
        admin { converter(NestedEntity::of::<Contact>()) },
        tech { converter(NestedEntity::of::<Contact>()) },
        billing { converter(NestedEntity::of::<Contact>()) },
    }
}

impl DomainContacts {
    /// The contact holding `role` (`owner`, `admin`, `tech` or `billing`).
    pub fn by_role(&self, role: &str) -> Result<Option<Contact>> {
        nested(self.get(role)?)
    }
}

entity! {
    /// A registered domain name.
    pub struct Domain as "domain" {
        /// Numeric id; the API sends it as a string.
        id { converter(IntegerConverter) },
        name,
        status { converter(SymbolConverter) },
        name_servers { wire_key("nameServers"), converter(SymbolConverter), array },
        contacts { converter(NestedEntity::of::<DomainContacts>()) },
        expires_at { wire_key("expiresAt"), converter(TimeConverter) },
        auto_renew { wire_key("autoRenew") },
        whois_privacy { wire_key("whoisPrivacy"), converter(WHOIS_PRIVACY) },
    }
}

impl Domain {
    #[must_use]
    pub fn domain_id(&self) -> Option<i64> {
        self.id().as_i64()
    }

    #[must_use]
    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        self.expires_at().as_time().copied()
    }

    /// Name server host names in the order the API listed them.
    #[must_use]
    pub fn name_server_hosts(&self) -> Vec<&str> {
        self.name_servers()
            .as_list()
            .unwrap_or_default()
            .iter()
            .filter_map(|server| server.as_symbol().map(|s| s.as_str()))
            .collect()
    }

    pub fn contact_set(&self) -> Result<Option<DomainContacts>> {
        nested(self.contacts())
    }

    /// Unset counts as off.
    #[must_use]
    pub fn is_auto_renewing(&self) -> bool {
        self.auto_renew().as_bool().unwrap_or(false)
    }

    /// One WHOIS privacy toggle by its internal key, e.g. `hide_email`.
    #[must_use]
    pub fn privacy_flag(&self, key: &str) -> Option<bool> {
        self.whois_privacy()
            .as_map()
            .and_then(|flags| flags.get(key))
            .and_then(Value::as_bool)
    }
}
