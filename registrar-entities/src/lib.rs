//! Entity declarations for the registrar API.
//!
//! Each type here is an [`entity!`](registrar_model::entity) declaration plus
//! a few typed read helpers. Reading and rendering go through
//! [`Entity::from_wire`] and [`Entity::to_wire`].

pub mod contact;
pub mod domain;
pub mod invoice;
pub mod mailbox;
pub mod zone;

pub use contact::Contact;
pub use domain::{Domain, DomainContacts};
pub use invoice::{Invoice, InvoiceLine};
pub use mailbox::{Forwarding, Mailbox};
pub use registrar_model::{ConversionError, Entity, MappingError, Result, Value};
pub use zone::{DnsRecord, Zone};

/// Re-types a nested entity slot. Unset or non-entity values yield `None`.
fn nested<E: Entity>(value: &Value) -> Result<Option<E>> {
    value
        .as_record()
        .map(|record| E::try_from_record(record.clone()))
        .transpose()
}

/// Re-types every entity in a list slot, skipping anything else.
fn nested_list<E: Entity>(value: &Value) -> Result<Vec<E>> {
    value
        .as_list()
        .unwrap_or_default()
        .iter()
        .filter_map(Value::as_record)
        .map(|record| E::try_from_record(record.clone()))
        .collect()
}
