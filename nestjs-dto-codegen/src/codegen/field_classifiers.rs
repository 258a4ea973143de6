//! Field predicates used when deciding which fields a DTO carries

use std::collections::HashSet;

use crate::parser::{Field, FieldKind};

/// Object field backed by a relation to another model
pub fn is_relation(field: &Field) -> bool {
    field.kind == FieldKind::Object && field.relation_name.is_some()
}

/// Object field embedding a composite type
pub fn is_type(field: &Field) -> bool {
    field.kind == FieldKind::Object && field.relation_name.is_none()
}

pub fn is_id_with_default_value(field: &Field) -> bool {
    field.is_id && field.has_default_value
}

pub fn is_required_with_default_value(field: &Field) -> bool {
    field.is_required && field.has_default_value
}

pub fn is_read_only(field: &Field) -> bool {
    field.is_read_only
}

pub fn is_updated_at(field: &Field) -> bool {
    field.is_updated_at
}

/// Names of scalar fields holding a foreign key of some relation
pub fn relation_scalars(fields: &[Field]) -> HashSet<&str> {
    fields
        .iter()
        .filter(|f| is_relation(f))
        .flat_map(|f| f.relation_from_fields.iter().map(String::as_str))
        .collect()
}
