//! Mapping layer error types.

use registrar_types::ConversionError;
use thiserror::Error;

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;

/// Errors raised by schemas, records and the path accessor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MappingError {
    /// A name given to direct construction or the path accessor is not declared.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A strict lookup could not resolve a wire key.
    #[error("unknown wire key: {0}")]
    UnknownWireKey(String),

    #[error("attribute `{name}` declared twice on {entity_type}")]
    DuplicateAttribute { entity_type: String, name: String },

    #[error("wire key `{wire_key}` used by two attributes on {entity_type}")]
    DuplicateWireKey {
        entity_type: String,
        wire_key: String,
    },

    #[error("record of type {found} cannot be read as {expected}")]
    SchemaMismatch { expected: String, found: String },

    /// A converter rejected a value. Passed through as raised.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
