use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use registrar_types::{ConversionError, Symbol, WireValue, format_wire_time};
use serde::{Serialize, Serializer};

use crate::Record;

/// The internal representation of an attribute value.
///
/// `Null` doubles as the absent/unset state: a record slot that was never
/// assigned holds `Null`, and `Null` renders as wire `null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Symbol(Symbol),
    Time(DateTime<Utc>),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Entity(Record),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Names the variant, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Time(_) => "time",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Entity(_) => "entity",
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text of a `String` value. Symbols are not strings; see [`Value::as_symbol`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Symbol(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_time(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Time(t) => Some(t),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Entity(record) => Some(record),
            _ => None,
        }
    }

    /// Reads a wire value with no converter applied.
    ///
    /// Numbers that fit an `i64` become `Integer`, every other number `Float`.
    #[must_use]
    pub fn from_wire(wire: &WireValue) -> Self {
        match wire {
            WireValue::Null => Self::Null,
            WireValue::Bool(b) => Self::Bool(*b),
            WireValue::Number(n) => n
                .as_i64()
                .map(Self::Integer)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Null),
            WireValue::String(s) => Self::String(s.clone()),
            WireValue::Array(items) => Self::List(items.iter().map(Self::from_wire).collect()),
            WireValue::Object(map) => Self::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), Self::from_wire(v)))
                    .collect(),
            ),
        }
    }

    /// Renders the value for the wire with no converter applied.
    ///
    /// Symbols render as their text, instants in the wire time format, and
    /// nested entities through their own schema.
    pub fn to_wire(&self) -> Result<WireValue, ConversionError> {
        Ok(match self {
            Self::Null => WireValue::Null,
            Self::Bool(b) => WireValue::Bool(*b),
            Self::Integer(n) => WireValue::from(*n),
            Self::Float(n) => serde_json::Number::from_f64(*n)
                .map(WireValue::Number)
                .ok_or(ConversionError::NonFiniteFloat(*n))?,
            Self::String(s) => WireValue::String(s.clone()),
            Self::Symbol(s) => WireValue::String(s.as_str().to_owned()),
            Self::Time(t) => WireValue::String(format_wire_time(t)?),
            Self::List(items) => WireValue::Array(
                items
                    .iter()
                    .map(Self::to_wire)
                    .collect::<Result<_, _>>()?,
            ),
            Self::Map(map) => WireValue::Object(
                map.iter()
                    .map(|(k, v)| v.to_wire().map(|wire| (k.clone(), wire)))
                    .collect::<Result<_, _>>()?,
            ),
            Self::Entity(record) => record.render_wire()?,
        })
    }

    /// Expands nested entities into plain maps keyed by attribute name.
    ///
    /// No wire keys and no converters are involved; intended for debugging.
    #[must_use]
    pub fn to_internal(&self) -> Self {
        match self {
            Self::List(items) => Self::List(items.iter().map(Self::to_internal).collect()),
            Self::Map(map) => Self::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_internal()))
                    .collect(),
            ),
            Self::Entity(record) => record.to_internal(),
            scalar => scalar.clone(),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::Float(n) => serializer.serialize_f64(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::Symbol(s) => serializer.serialize_str(s.as_str()),
            Self::Time(t) => t.serialize(serializer),
            Self::List(items) => serializer.collect_seq(items),
            Self::Map(map) => serializer.collect_map(map),
            Self::Entity(record) => record.serialize(serializer),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Integer(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Integer(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Self::Symbol(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Self::Time(t)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Entity(record)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self::Map(map)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
