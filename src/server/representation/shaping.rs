//! Data shaping: projecting DTOs down to a caller-selected subset of fields.
//!
//! Shapes are described by statically declared field-descriptor tables rather
//! than runtime reflection: every shapeable DTO implements [`Shaped`], listing
//! its fields in declaration order together with an accessor that extracts the
//! field value as JSON. Shaping walks that table and produces a
//! [`ShapedRecord`], an insertion-order-preserving field/value map.
//!
//! Callers are expected to validate requested field lists with
//! [`super::field_selection::has_properties`] first; a field reaching the
//! shaper that does not exist on the shape is an internal-consistency fault,
//! reported loudly as [`ShapingError::UnknownField`] rather than dropped.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// One declared field of a shape: its serialized name plus an accessor that
/// reads the field off an instance.
pub struct FieldDescriptor<T> {
    pub name: &'static str,
    pub get: fn(&T) -> Value,
}

/// A fixed set of named fields attached to a DTO type.
///
/// The descriptor table is the single source of truth for which fields a
/// client may select, and in which order they appear when no selection is
/// given.
pub trait Shaped: Sized {
    /// Shape name used in internal fault messages.
    const SHAPE_NAME: &'static str;

    /// Declared fields, in declaration order.
    fn field_descriptors() -> &'static [FieldDescriptor<Self>];
}

/// Shaping an instance against a field that does not exist on its shape.
///
/// This means field validation was bypassed somewhere upstream. It maps to an
/// internal server fault, never to a client validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapingError {
    #[error("field {field:?} does not exist on shape {shape}")]
    UnknownField {
        shape: &'static str,
        field: String,
    },
}

/// Ordered field-name-to-value projection of a single DTO instance.
///
/// Field order is the order fields were inserted in; serialization preserves
/// it. Extra fields (such as an embedded `links` array) can be appended after
/// shaping.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ShapedRecord(serde_json::Map<String, Value>);

impl ShapedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Projects `instance` onto the requested fields.
///
/// An empty or blank `fields` string selects every declared field in
/// declaration order. Otherwise the comma-separated field names are emitted in
/// the order the caller listed them, matched case-insensitively against the
/// declared names; the record uses the declared spelling, not the caller's.
///
/// # Returns
/// - `Ok(ShapedRecord)` - Projection with exactly the requested fields
/// - `Err(ShapingError::UnknownField)` - A requested field is not declared on
///   the shape
pub fn shape<T: Shaped + 'static>(instance: &T, fields: &str) -> Result<ShapedRecord, ShapingError> {
    let descriptors = T::field_descriptors();
    let mut record = ShapedRecord::new();

    if fields.trim().is_empty() {
        for descriptor in descriptors {
            record.insert(descriptor.name, (descriptor.get)(instance));
        }
        return Ok(record);
    }

    for token in fields.split(',') {
        let requested = token.trim();
        let descriptor = descriptors
            .iter()
            .find(|descriptor| descriptor.name.eq_ignore_ascii_case(requested))
            .ok_or_else(|| ShapingError::UnknownField {
                shape: T::SHAPE_NAME,
                field: requested.to_string(),
            })?;

        record.insert(descriptor.name, (descriptor.get)(instance));
    }

    Ok(record)
}

/// Applies [`shape`] to each instance, preserving input order.
pub fn shape_many<T: Shaped + 'static>(
    instances: &[T],
    fields: &str,
) -> Result<Vec<ShapedRecord>, ShapingError> {
    instances
        .iter()
        .map(|instance| shape(instance, fields))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    use crate::model::author::AuthorDto;

    fn author() -> AuthorDto {
        AuthorDto {
            id: Uuid::nil(),
            name: "Douglas Adams".to_string(),
            age: 49,
            genre: "Science fiction".to_string(),
        }
    }

    #[test]
    fn blank_fields_include_every_field_in_declaration_order() {
        let record = shape(&author(), "  ").unwrap();

        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["id", "name", "age", "genre"]);
    }

    #[test]
    fn requested_fields_keep_caller_order() {
        let record = shape(&author(), "genre,id").unwrap();

        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["genre", "id"]);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn field_lookup_ignores_case_and_spacing_but_keeps_declared_names() {
        let record = shape(&author(), " NAME , Age ").unwrap();

        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["name", "age"]);
        assert_eq!(record.get("name"), Some(&json!("Douglas Adams")));
        assert_eq!(record.get("age"), Some(&json!(49)));
    }

    #[test]
    fn unknown_field_fails_instead_of_being_dropped() {
        let result = shape(&author(), "name,publisher");

        assert_eq!(
            result,
            Err(ShapingError::UnknownField {
                shape: "AuthorDto",
                field: "publisher".to_string(),
            })
        );
    }

    #[test]
    fn unfiltered_shape_round_trips_every_declared_value() {
        let original = author();
        let record = shape(&original, "").unwrap();

        assert_eq!(record.get("id"), Some(&json!(original.id)));
        assert_eq!(record.get("name"), Some(&json!(original.name)));
        assert_eq!(record.get("age"), Some(&json!(original.age)));
        assert_eq!(record.get("genre"), Some(&json!(original.genre)));
    }

    #[test]
    fn shape_many_preserves_input_order() {
        let mut second = author();
        second.name = "Ursula K. Le Guin".to_string();

        let records = shape_many(&[author(), second], "name").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("name"), Some(&json!("Douglas Adams")));
        assert_eq!(records[1].get("name"), Some(&json!("Ursula K. Le Guin")));
    }

    #[test]
    fn appended_fields_serialize_after_shaped_fields() {
        let mut record = shape(&author(), "id,name").unwrap();
        record.insert("links", json!([]));

        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["id", "name", "links"]);
    }
}
