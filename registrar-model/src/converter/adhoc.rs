//! Named converters for wire shapes that differ structurally from the
//! internal representation.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use registrar_types::{ConversionError, Result, Symbol, WireValue};

use super::{Converter, NestedEntity, unexpected_value, unexpected_wire};
use crate::{Entity, Schema, Value};

/// An enumeration transmitted as its zero-based index into a fixed list.
///
/// Internally the value is the variant's [`Symbol`].
#[derive(Debug, Clone, Copy)]
pub struct EnumIndex {
    variants: &'static [&'static str],
}

impl EnumIndex {
    #[must_use]
    pub const fn new(variants: &'static [&'static str]) -> Self {
        Self { variants }
    }

    #[must_use]
    pub const fn variants(&self) -> &'static [&'static str] {
        self.variants
    }
}

impl Converter for EnumIndex {
    fn to_wire(&self, value: &Value) -> Result<WireValue> {
        let name = match value {
            Value::Null => return Ok(WireValue::Null),
            Value::Symbol(s) => s.as_str(),
            Value::String(s) => s.as_str(),
            other => return Err(unexpected_value("symbol", other)),
        };
        self.variants
            .iter()
            .position(|variant| *variant == name)
            .map(WireValue::from)
            .ok_or_else(|| ConversionError::UnknownVariant(name.to_owned()))
    }

    fn from_wire(&self, wire: &WireValue) -> Result<Value> {
        match wire {
            WireValue::Null => Ok(Value::Null),
            WireValue::Number(n) => n
                .as_u64()
                .and_then(|index| usize::try_from(index).ok())
                .and_then(|index| self.variants.get(index))
                .map(|variant| Value::Symbol(Symbol::new(*variant)))
                .ok_or_else(|| ConversionError::UnknownVariant(n.to_string())),
            other => Err(unexpected_wire("number", other)),
        }
    }
}

/// A setting transmitted either as `false` (disabled) or as an object
/// carrying the enabled configuration.
///
/// Booleans pass through as [`Value::Bool`]; objects become nested entities.
#[derive(Debug, Clone, Copy)]
pub struct FlagOrEntity {
    nested: NestedEntity,
}

impl FlagOrEntity {
    #[must_use]
    pub const fn new(schema: fn() -> &'static Schema) -> Self {
        Self {
            nested: NestedEntity::new(schema),
        }
    }

    #[must_use]
    pub fn of<E: Entity>() -> Self {
        Self::new(E::schema)
    }
}

impl Converter for FlagOrEntity {
    fn to_wire(&self, value: &Value) -> Result<WireValue> {
        match value {
            Value::Null => Ok(WireValue::Null),
            Value::Bool(b) => Ok(WireValue::Bool(*b)),
            Value::Entity(record) => record.render_wire(),
            other => Err(unexpected_value("bool or entity", other)),
        }
    }

    fn from_wire(&self, wire: &WireValue) -> Result<Value> {
        match wire {
            WireValue::Bool(b) => Ok(Value::Bool(*b)),
            WireValue::Null | WireValue::Object(_) => self.nested.read(wire),
            other => Err(unexpected_wire("bool or object", other)),
        }
    }
}

/// A free-form object whose keys are spelled differently on the wire.
///
/// Each pair is `(wire_key, internal_key)`. Keys not listed keep their
/// spelling; values are not converted. An object in which two keys land on
/// the same key after relabeling is rejected with
/// [`ConversionError::KeyCollision`].
#[derive(Debug, Clone, Copy)]
pub struct RelabeledKeys {
    pairs: &'static [(&'static str, &'static str)],
}

impl RelabeledKeys {
    #[must_use]
    pub const fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { pairs }
    }

    fn internal_key_for<'a>(&self, wire_key: &'a str) -> &'a str {
        self.pairs
            .iter()
            .find(|(wire, _)| *wire == wire_key)
            .map_or(wire_key, |(_, internal)| *internal)
    }

    fn wire_key_for<'a>(&self, internal_key: &'a str) -> &'a str {
        self.pairs
            .iter()
            .find(|(_, internal)| *internal == internal_key)
            .map_or(internal_key, |(wire, _)| *wire)
    }
}

impl Converter for RelabeledKeys {
    fn to_wire(&self, value: &Value) -> Result<WireValue> {
        match value {
            Value::Null => Ok(WireValue::Null),
            Value::Map(map) => {
                let mut out = serde_json::Map::new();
                for (key, value) in map {
                    let wire_key = self.wire_key_for(key);
                    if out.contains_key(wire_key) {
                        return Err(ConversionError::KeyCollision(wire_key.to_owned()));
                    }
                    out.insert(wire_key.to_owned(), value.to_wire()?);
                }
                Ok(WireValue::Object(out))
            }
            other => Err(unexpected_value("map", other)),
        }
    }

    fn from_wire(&self, wire: &WireValue) -> Result<Value> {
        match wire {
            WireValue::Null => Ok(Value::Null),
            WireValue::Object(map) => {
                let mut out = BTreeMap::new();
                for (key, wire) in map {
                    match out.entry(self.internal_key_for(key).to_owned()) {
                        Entry::Occupied(slot) => {
                            return Err(ConversionError::KeyCollision(slot.key().clone()));
                        }
                        Entry::Vacant(slot) => {
                            slot.insert(Value::from_wire(wire));
                        }
                    }
                }
                Ok(Value::Map(out))
            }
            other => Err(unexpected_wire("object", other)),
        }
    }
}
