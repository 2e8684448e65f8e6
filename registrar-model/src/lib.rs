//! Schema-driven wire mapping for registrar API entities.
//!
//! Every entity type the client exposes (domains, mailboxes, zones,
//! invoices, ...) is declared once as a [`Schema`] and then translated
//! between its in-memory form and the API's JSON wire format by the same
//! code:
//! - [`Schema`] / [`Attribute`]: the per-type attribute table of names,
//!   wire keys, converters and list flags
//! - [`Converter`]: a stateless two-way transform for one attribute
//!   ([`SymbolConverter`], [`IntegerConverter`], [`TimeConverter`],
//!   [`ArrayOf`], [`NestedEntity`] and the structural ones in
//!   [`EnumIndex`], [`FlagOrEntity`], [`RelabeledKeys`])
//! - [`Record`] / [`Entity`]: instance storage and the typed surface
//!   generated by [`entity!`]: `from_wire`, `to_wire`, `to_internal`,
//!   direct construction and dotted-path lookup
//!
//! Reading is lenient (unknown wire keys are dropped so additive API changes
//! do not break the client); every other invalid input is an error.
//! Nothing here performs I/O: the transport hands parsed payloads to
//! `from_wire` and sends what `to_wire` returns.

mod converter;
mod entity;
mod error;
mod macros;
mod path;
mod record;
mod schema;
mod value;

pub use converter::{
    ArrayOf, Converter, EnumIndex, FlagOrEntity, IdentityConverter, IntegerConverter, NestedEntity,
    RelabeledKeys, SymbolConverter, TimeConverter,
};
pub use entity::Entity;
pub use error::{MappingError, Result};
pub use record::Record;
pub use registrar_types::{ConversionError, Symbol, WireValue};
pub use schema::{Attribute, AttributeDefinition, Schema, SchemaBuilder};
pub use value::Value;

#[doc(hidden)]
pub use paste;
