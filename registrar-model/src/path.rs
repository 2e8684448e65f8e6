//! Dotted attribute paths such as `contacts.owner.email`.

use crate::error::{MappingError, Result};
use crate::record::Record;
use crate::value::Value;

fn first_segment(path: &str) -> &str {
    path.split_once('.').map_or(path, |(head, _)| head)
}

impl Record {
    /// Resolves a dotted path one attribute at a time.
    ///
    /// Each segment must name a declared attribute of the record reached so
    /// far. Descending through anything other than a nested entity (including
    /// an unset attribute) fails on the next segment.
    pub fn value_at(&self, path: &str) -> Result<&Value> {
        let Some((head, rest)) = path.split_once('.') else {
            return self.get(path);
        };
        match self.get(head)? {
            Value::Entity(nested) => nested.value_at(rest),
            _ => Err(MappingError::UnknownAttribute(first_segment(rest).to_owned())),
        }
    }

    /// Resolves several paths independently; results follow the input order.
    pub fn values_at<S: AsRef<str>>(&self, paths: &[S]) -> Result<Vec<&Value>> {
        paths.iter().map(|path| self.value_at(path.as_ref())).collect()
    }
}
