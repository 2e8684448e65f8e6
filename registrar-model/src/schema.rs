use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tracing::debug;

use crate::converter::{ArrayOf, Converter};
use crate::error::{MappingError, Result};

/// One attribute as declared, before the schema is frozen.
///
/// ```
/// use registrar_model::{Attribute, SymbolConverter};
///
/// let servers = Attribute::new("name_servers")
///     .wire_key("nameServers")
///     .converter(SymbolConverter)
///     .array();
/// ```
#[derive(Debug, Clone)]
pub struct Attribute {
    name: String,
    wire_key: Option<String>,
    converter: Option<Arc<dyn Converter>>,
    is_array: bool,
}

impl Attribute {
    /// Declares an attribute whose wire key equals its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wire_key: None,
            converter: None,
            is_array: false,
        }
    }

    /// Overrides the key used on the wire.
    #[must_use]
    pub fn wire_key(mut self, wire_key: impl Into<String>) -> Self {
        self.wire_key = Some(wire_key.into());
        self
    }

    /// Attaches a converter. Without one the attribute converts by identity.
    #[must_use]
    pub fn converter(mut self, converter: impl Converter + 'static) -> Self {
        self.converter = Some(Arc::new(converter));
        self
    }

    /// Marks the attribute as a list; a converter is then applied per element.
    #[must_use]
    pub const fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    fn freeze(self) -> AttributeDefinition {
        let converter = match (self.converter, self.is_array) {
            (Some(inner), true) => Some(Arc::new(ArrayOf::from_shared(inner)) as Arc<dyn Converter>),
            (converter, _) => converter,
        };
        AttributeDefinition {
            wire_key: self.wire_key.unwrap_or_else(|| self.name.clone()),
            name: self.name,
            converter,
            is_array: self.is_array,
        }
    }
}

/// A frozen attribute of a [`Schema`].
#[derive(Debug, Clone)]
pub struct AttributeDefinition {
    name: String,
    wire_key: String,
    converter: Option<Arc<dyn Converter>>,
    is_array: bool,
}

impl AttributeDefinition {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn wire_key(&self) -> &str {
        &self.wire_key
    }

    /// The converter in effect, already wrapped in [`ArrayOf`] for list attributes.
    #[must_use]
    pub fn converter(&self) -> Option<&dyn Converter> {
        self.converter.as_deref()
    }

    #[must_use]
    pub const fn is_array(&self) -> bool {
        self.is_array
    }
}

/// The immutable attribute table of one entity type.
///
/// Attribute names and wire keys are indexed separately, so a wire key that
/// happens to equal another attribute's name never resolves to it.
#[derive(Debug)]
pub struct Schema {
    entity_type: String,
    attributes: Vec<AttributeDefinition>,
    by_name: HashMap<String, usize>,
    by_wire_key: HashMap<String, usize>,
}

impl Schema {
    /// Starts declaring the schema of `entity_type`.
    #[must_use]
    pub fn builder(entity_type: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            entity_type: entity_type.into(),
            attributes: Vec::new(),
        }
    }

    #[must_use]
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Attributes in declaration order.
    #[must_use]
    pub fn attributes(&self) -> &[AttributeDefinition] {
        &self.attributes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    #[must_use]
    pub fn index_of_wire_key(&self, wire_key: &str) -> Option<usize> {
        self.by_wire_key.get(wire_key).copied()
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeDefinition> {
        self.index_of(name).map(|i| &self.attributes[i])
    }

    /// The converter registered for `name`, if any.
    #[must_use]
    pub fn converter(&self, name: &str) -> Option<&dyn Converter> {
        self.attribute(name).and_then(AttributeDefinition::converter)
    }

    /// Resolves a wire key to its attribute name, failing on unknown keys.
    pub fn name_for_wire_key(&self, wire_key: &str) -> Result<&str> {
        self.index_of_wire_key(wire_key)
            .map(|i| self.attributes[i].name())
            .ok_or_else(|| MappingError::UnknownWireKey(wire_key.to_owned()))
    }

    /// Resolves an attribute name to its wire key, failing on unknown names.
    pub fn wire_key_for(&self, name: &str) -> Result<&str> {
        self.attribute(name)
            .map(AttributeDefinition::wire_key)
            .ok_or_else(|| MappingError::UnknownAttribute(name.to_owned()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(AttributeDefinition::name)
    }
}

/// Collects attribute declarations for one entity type.
#[derive(Debug)]
pub struct SchemaBuilder {
    entity_type: String,
    attributes: Vec<Attribute>,
}

impl SchemaBuilder {
    #[must_use]
    pub fn declare(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Freezes the declarations, rejecting repeated names or wire keys.
    pub fn try_build(self) -> Result<Schema> {
        let mut attributes = Vec::with_capacity(self.attributes.len());
        let mut by_name = HashMap::with_capacity(self.attributes.len());
        let mut by_wire_key = HashMap::with_capacity(self.attributes.len());

        for (index, attribute) in self.attributes.into_iter().enumerate() {
            let definition = attribute.freeze();
            match by_name.entry(definition.name.clone()) {
                Entry::Occupied(_) => {
                    return Err(MappingError::DuplicateAttribute {
                        entity_type: self.entity_type,
                        name: definition.name,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }
            match by_wire_key.entry(definition.wire_key.clone()) {
                Entry::Occupied(_) => {
                    return Err(MappingError::DuplicateWireKey {
                        entity_type: self.entity_type,
                        wire_key: definition.wire_key,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }
            attributes.push(definition);
        }

        debug!(
            entity_type = %self.entity_type,
            attributes = attributes.len(),
            "schema frozen"
        );
        Ok(Schema {
            entity_type: self.entity_type,
            attributes,
            by_name,
            by_wire_key,
        })
    }

    /// Freezes the declarations.
    ///
    /// # Panics
    ///
    /// Panics when a name or wire key is declared twice. Schemas are built
    /// once per entity type, so this surfaces on first use of the type.
    #[must_use]
    pub fn build(self) -> Schema {
        match self.try_build() {
            Ok(schema) => schema,
            Err(e) => panic!("invalid schema declaration: {e}"),
        }
    }
}
