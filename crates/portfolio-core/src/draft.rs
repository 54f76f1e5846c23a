use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::engine::{join_list, split_list};
use crate::error::EditError;
use crate::shape::{EntityShape, FieldSpec};

/// Form values of the open edit dialog.
///
/// A draft always carries every field of its shape, in declaration order.
/// List fields are held in their delimited display form until submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    section: &'static str,
    specs: &'static [FieldSpec],
    values: Vec<String>,
}

impl Draft {
    /// A blank draft: every field set to its declared default.
    pub fn defaults<E: EntityShape>() -> Self {
        Self {
            section: E::SECTION,
            specs: E::FIELDS,
            values: E::FIELDS.iter().map(|f| f.default.to_string()).collect(),
        }
    }

    pub fn get(&self, field: &str) -> &str {
        self.index(field)
            .map(|idx| self.values[idx].as_str())
            .unwrap_or("")
    }

    /// Updates exactly one field. Only selector fields are checked.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), EditError> {
        let idx = self.index(field).ok_or_else(|| EditError::UnknownField {
            section: self.section,
            field: field.to_string(),
        })?;
        let value = value.into();
        let spec = &self.specs[idx];
        if !spec.allows(&value) {
            return Err(EditError::InvalidChoice {
                field: spec.name,
                value,
            });
        }
        self.values[idx] = value;
        Ok(())
    }

    /// Fills a field while hydrating from an existing entry. Values are copied
    /// verbatim, even for selector fields.
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        match self.index(field) {
            Some(idx) => self.values[idx] = value.into(),
            None => debug_assert!(false, "{field} is not a field of {}", self.section),
        }
        self
    }

    /// Fills a list field with its flattened display form.
    pub fn with_list(self, field: &str, items: &[String]) -> Self {
        let joined = match self.index(field).and_then(|idx| self.specs[idx].delimiter()) {
            Some(delimiter) => join_list(items, delimiter),
            None => items.join(", "),
        };
        self.with(field, joined)
    }

    /// Splits a list field into its trimmed, non-empty segments.
    pub fn list(&self, field: &str) -> Vec<String> {
        match self.index(field).and_then(|idx| self.specs[idx].delimiter()) {
            Some(delimiter) => split_list(self.get(field), delimiter),
            None => split_list(self.get(field), crate::shape::Delimiter::Comma),
        }
    }

    /// Empty-or-blank value mapped to `None`.
    pub fn optional(&self, field: &str) -> Option<String> {
        let value = self.get(field);
        (!value.trim().is_empty()).then(|| value.to_string())
    }

    /// Required fields of `E` whose values are blank.
    pub fn missing_required<E: EntityShape>(&self) -> Vec<&'static str> {
        E::required_fields(self)
            .into_iter()
            .filter(|name| self.get(name).trim().is_empty())
            .collect()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.specs
            .iter()
            .zip(self.values.iter())
            .map(|(spec, value)| (spec.name, value.as_str()))
    }

    fn index(&self, field: &str) -> Option<usize> {
        self.specs.iter().position(|f| f.name == field)
    }
}

impl Serialize for Draft {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.fields() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
