use std::fmt;

use registrar_types::{ConversionError, WireValue, kind_of};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Map;
use tracing::debug;

use crate::error::{MappingError, Result};
use crate::schema::{AttributeDefinition, Schema};
use crate::value::Value;

static NULL: Value = Value::Null;

/// The attribute storage behind every entity: one value slot per declared
/// attribute of its schema.
#[derive(Clone)]
pub struct Record {
    schema: &'static Schema,
    values: Vec<Value>,
}

impl Record {
    /// Creates a record with every attribute unset.
    #[must_use]
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            values: vec![Value::Null; schema.len()],
        }
    }

    /// Builds a record from `name → value` pairs, rejecting undeclared names.
    pub fn from_attributes<I, K, V>(schema: &'static Schema, attributes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut record = Self::new(schema);
        for (name, value) in attributes {
            record.set(name.as_ref(), value)?;
        }
        Ok(record)
    }

    /// Reads a wire payload. `null` yields `None`.
    ///
    /// Wire keys are renamed to attribute names and each value runs through
    /// its attribute's converter. A key that already equals an attribute name
    /// is accepted too, unless the attribute's wire key is also present.
    /// Keys matching neither are dropped. The payload is not modified.
    pub fn from_wire(schema: &'static Schema, payload: &WireValue) -> Result<Option<Self>> {
        match payload {
            WireValue::Null => Ok(None),
            WireValue::Object(map) => Ok(Some(Self::read_wire(schema, map)?)),
            other => Err(ConversionError::UnexpectedType {
                expected: "object",
                found: kind_of(other),
            }
            .into()),
        }
    }

    pub(crate) fn read_wire(
        schema: &'static Schema,
        payload: &Map<String, WireValue>,
    ) -> std::result::Result<Self, ConversionError> {
        let mut slots: Vec<Option<&WireValue>> = vec![None; schema.len()];
        let mut by_wire_key = vec![false; schema.len()];

        for (key, wire) in payload {
            if let Some(index) = schema.index_of_wire_key(key) {
                slots[index] = Some(wire);
                by_wire_key[index] = true;
            } else if let Some(index) = schema.index_of(key) {
                if !by_wire_key[index] {
                    slots[index] = Some(wire);
                }
            } else {
                debug!(
                    entity_type = schema.entity_type(),
                    wire_key = %key,
                    "dropping unrecognized wire key"
                );
            }
        }

        let mut record = Self::new(schema);
        for ((definition, slot), value) in schema
            .attributes()
            .iter()
            .zip(slots)
            .zip(record.values.iter_mut())
        {
            if let Some(wire) = slot {
                *value = match definition.converter() {
                    Some(converter) => converter.from_wire(wire)?,
                    None => Value::from_wire(wire),
                };
            }
        }
        Ok(record)
    }

    /// Renders every declared attribute under its wire key.
    ///
    /// Unset attributes render as `null`; nested entities render through
    /// their own schema.
    pub fn to_wire(&self) -> Result<WireValue> {
        Ok(self.render_wire()?)
    }

    pub(crate) fn render_wire(&self) -> std::result::Result<WireValue, ConversionError> {
        let mut out = Map::new();
        for (definition, value) in self.iter() {
            let wire = match (value, definition.converter()) {
                (Value::Entity(nested), _) => nested.render_wire()?,
                (value, Some(converter)) if !value.is_null() => converter.to_wire(value)?,
                (value, _) => value.to_wire()?,
            };
            out.insert(definition.wire_key().to_owned(), wire);
        }
        Ok(WireValue::Object(out))
    }

    /// Expands the record into a `Map` keyed by attribute name.
    #[must_use]
    pub fn to_internal(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(definition, value)| (definition.name().to_owned(), value.to_internal()))
                .collect(),
        )
    }

    #[must_use]
    pub const fn schema(&self) -> &'static Schema {
        self.schema
    }

    #[must_use]
    pub fn entity_type(&self) -> &str {
        self.schema.entity_type()
    }

    /// Returns the value of `name`, failing if it is not declared.
    pub fn get(&self, name: &str) -> Result<&Value> {
        self.schema
            .index_of(name)
            .map(|i| &self.values[i])
            .ok_or_else(|| MappingError::UnknownAttribute(name.to_owned()))
    }

    /// True when `name` is declared and holds a non-null value.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_ok_and(|value| !value.is_null())
    }

    /// Assigns `name`, failing if it is not declared.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let index = self
            .schema
            .index_of(name)
            .ok_or_else(|| MappingError::UnknownAttribute(name.to_owned()))?;
        self.values[index] = value.into();
        Ok(())
    }

    /// Attributes paired with their current values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeDefinition, &Value)> {
        self.schema.attributes().iter().zip(&self.values)
    }

    // Accessors generated by `entity!` only pass names from their own schema.

    #[doc(hidden)]
    #[must_use]
    pub fn declared(&self, name: &str) -> &Value {
        self.get(name).unwrap_or(&NULL)
    }

    #[doc(hidden)]
    pub fn assign(&mut self, name: &str, value: impl Into<Value>) {
        let assigned = self.set(name, value);
        debug_assert!(assigned.is_ok(), "`{name}` is not declared on {}", self.entity_type());
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema) && self.values == other.values
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct(self.schema.entity_type());
        for (definition, value) in self.iter() {
            out.field(definition.name(), value);
        }
        out.finish()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (definition, value) in self.iter() {
            map.serialize_entry(definition.name(), value)?;
        }
        map.end()
    }
}
