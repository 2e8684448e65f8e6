//! Bidirectional value converters.
//!
//! A [`Converter`] translates one attribute between its wire representation
//! and its internal [`Value`]. Both methods default to the identity
//! conversion, so an implementation only writes the direction it changes.
//! Converters are stateless and shared by every instance of an entity type.
//!
//! Every converter maps wire `null` to [`Value::Null`] and back.

mod adhoc;

pub use adhoc::{EnumIndex, FlagOrEntity, RelabeledKeys};

use std::fmt;
use std::sync::Arc;

use registrar_types::{ConversionError, Result, Symbol, WireValue, kind_of, parse_wire_time};

use crate::{Entity, Record, Schema, Value};

/// A stateless, bidirectional transform for one attribute.
pub trait Converter: fmt::Debug + Send + Sync {
    /// Internal → wire. Called only for non-null values by the record layer.
    fn to_wire(&self, value: &Value) -> Result<WireValue> {
        value.to_wire()
    }

    /// Wire → internal.
    fn from_wire(&self, wire: &WireValue) -> Result<Value> {
        Ok(Value::from_wire(wire))
    }
}

fn unexpected_value(expected: &'static str, value: &Value) -> ConversionError {
    ConversionError::UnexpectedType {
        expected,
        found: value.kind(),
    }
}

fn unexpected_wire(expected: &'static str, wire: &WireValue) -> ConversionError {
    ConversionError::UnexpectedType {
        expected,
        found: kind_of(wire),
    }
}

/// Passes values through unchanged in both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityConverter;

impl Converter for IdentityConverter {}

/// Strings on the wire, [`Symbol`]s internally.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolConverter;

impl Converter for SymbolConverter {
    fn to_wire(&self, value: &Value) -> Result<WireValue> {
        match value {
            Value::Null => Ok(WireValue::Null),
            Value::Symbol(s) => Ok(WireValue::String(s.as_str().to_owned())),
            Value::String(s) => Ok(WireValue::String(s.clone())),
            Value::Integer(n) => Ok(WireValue::String(n.to_string())),
            Value::Bool(b) => Ok(WireValue::String(b.to_string())),
            other => Err(unexpected_value("symbol", other)),
        }
    }

    fn from_wire(&self, wire: &WireValue) -> Result<Value> {
        match wire {
            WireValue::Null => Ok(Value::Null),
            WireValue::String(s) => Ok(Value::Symbol(Symbol::new(s.as_str()))),
            other => Err(unexpected_wire("string", other)),
        }
    }
}

/// Decimal strings on the wire, `i64` internally.
///
/// Bare JSON integers are accepted on input as well; output is always a string.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerConverter;

impl Converter for IntegerConverter {
    fn to_wire(&self, value: &Value) -> Result<WireValue> {
        match value {
            Value::Null => Ok(WireValue::Null),
            Value::Integer(n) => Ok(WireValue::String(n.to_string())),
            other => Err(unexpected_value("integer", other)),
        }
    }

    fn from_wire(&self, wire: &WireValue) -> Result<Value> {
        match wire {
            WireValue::Null => Ok(Value::Null),
            WireValue::String(s) => s
                .parse()
                .map(Value::Integer)
                .map_err(|_| ConversionError::InvalidInteger(s.clone())),
            WireValue::Number(n) => n
                .as_i64()
                .map(Value::Integer)
                .ok_or_else(|| ConversionError::InvalidInteger(n.to_string())),
            other => Err(unexpected_wire("string", other)),
        }
    }
}

/// ISO-8601 strings on the wire, UTC instants internally.
///
/// Rendering uses whole seconds, so a round trip truncates sub-second precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeConverter;

impl Converter for TimeConverter {
    fn to_wire(&self, value: &Value) -> Result<WireValue> {
        match value {
            Value::Null => Ok(WireValue::Null),
            Value::Time(t) => registrar_types::format_wire_time(t).map(WireValue::String),
            other => Err(unexpected_value("time", other)),
        }
    }

    fn from_wire(&self, wire: &WireValue) -> Result<Value> {
        match wire {
            WireValue::Null => Ok(Value::Null),
            WireValue::String(s) => parse_wire_time(s).map(Value::Time),
            other => Err(unexpected_wire("string", other)),
        }
    }
}

/// Applies an inner converter to each element of a list.
///
/// Null stays null in both directions; it never becomes an empty list.
#[derive(Debug, Clone)]
pub struct ArrayOf {
    inner: Arc<dyn Converter>,
}

impl ArrayOf {
    #[must_use]
    pub fn new(inner: impl Converter + 'static) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Wraps a converter that is already shared.
    #[must_use]
    pub fn from_shared(inner: Arc<dyn Converter>) -> Self {
        Self { inner }
    }
}

impl Converter for ArrayOf {
    fn to_wire(&self, value: &Value) -> Result<WireValue> {
        match value {
            Value::Null => Ok(WireValue::Null),
            Value::List(items) => items
                .iter()
                .map(|item| self.inner.to_wire(item))
                .collect::<Result<Vec<_>>>()
                .map(WireValue::Array),
            other => Err(unexpected_value("list", other)),
        }
    }

    fn from_wire(&self, wire: &WireValue) -> Result<Value> {
        match wire {
            WireValue::Null => Ok(Value::Null),
            WireValue::Array(items) => items
                .iter()
                .map(|item| self.inner.from_wire(item))
                .collect::<Result<Vec<_>>>()
                .map(Value::List),
            other => Err(unexpected_wire("array", other)),
        }
    }
}

/// Reads a wire object as a nested entity of another schema.
///
/// The nested payload goes through the same lenient reading as a top-level
/// payload. Rendering needs no help from the converter: nested entities
/// always render through their own schema.
#[derive(Clone, Copy)]
pub struct NestedEntity {
    schema: fn() -> &'static Schema,
}

impl NestedEntity {
    /// Creates a converter for records of the schema returned by `schema`.
    ///
    /// The schema is resolved on first use, so two entity types may refer
    /// to each other.
    #[must_use]
    pub const fn new(schema: fn() -> &'static Schema) -> Self {
        Self { schema }
    }

    /// Creates a converter for the entity type `E`.
    #[must_use]
    pub fn of<E: Entity>() -> Self {
        Self::new(E::schema)
    }

    pub(crate) fn read(&self, wire: &WireValue) -> Result<Value> {
        match wire {
            WireValue::Null => Ok(Value::Null),
            WireValue::Object(map) => Record::read_wire((self.schema)(), map).map(Value::Entity),
            other => Err(unexpected_wire("object", other)),
        }
    }
}

impl fmt::Debug for NestedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NestedEntity")
    }
}

impl Converter for NestedEntity {
    fn from_wire(&self, wire: &WireValue) -> Result<Value> {
        self.read(wire)
    }
}
