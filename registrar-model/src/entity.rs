use registrar_types::WireValue;

use crate::error::{MappingError, Result};
use crate::record::Record;
use crate::schema::Schema;
use crate::value::Value;

/// A typed entity backed by a [`Record`] of a fixed schema.
///
/// Implemented by the [`entity!`](crate::entity) macro; the provided methods
/// are the whole mapping surface an entity exposes.
pub trait Entity: Sized {
    /// The schema shared by every instance of this type.
    fn schema() -> &'static Schema;

    #[doc(hidden)]
    fn from_record_unchecked(record: Record) -> Self;

    fn record(&self) -> &Record;

    fn into_record(self) -> Record;

    /// Constructs an entity from `name → value` pairs.
    ///
    /// Fails with [`MappingError::UnknownAttribute`] on the first name the
    /// schema does not declare.
    fn new<I, K, V>(attributes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        Record::from_attributes(Self::schema(), attributes).map(Self::from_record_unchecked)
    }

    /// An instance with every attribute unset.
    #[must_use]
    fn empty() -> Self {
        Self::from_record_unchecked(Record::new(Self::schema()))
    }

    /// Re-types an untyped record, e.g. one read through a nested converter.
    fn try_from_record(record: Record) -> Result<Self> {
        if std::ptr::eq(record.schema(), Self::schema()) {
            Ok(Self::from_record_unchecked(record))
        } else {
            Err(MappingError::SchemaMismatch {
                expected: Self::schema().entity_type().to_owned(),
                found: record.entity_type().to_owned(),
            })
        }
    }

    /// Reads a wire payload; `null` yields `None`.
    fn from_wire(payload: &WireValue) -> Result<Option<Self>> {
        Ok(Record::from_wire(Self::schema(), payload)?.map(Self::from_record_unchecked))
    }

    /// Renders one wire key per declared attribute.
    fn to_wire(&self) -> Result<WireValue> {
        self.record().to_wire()
    }

    /// A plain value tree keyed by attribute name, for debugging.
    fn to_internal(&self) -> Value {
        self.record().to_internal()
    }

    /// Looks up one attribute by name.
    fn get(&self, name: &str) -> Result<&Value> {
        self.record().get(name)
    }

    fn value_at(&self, path: &str) -> Result<&Value> {
        self.record().value_at(path)
    }

    fn values_at<S: AsRef<str>>(&self, paths: &[S]) -> Result<Vec<&Value>> {
        self.record().values_at(paths)
    }
}
