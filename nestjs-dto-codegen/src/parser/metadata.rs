//! Metadata structures for the Prisma DMMF datamodel

use serde::{Deserialize, Serialize};

/// The datamodel section of a DMMF document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datamodel {
    /// Models (tables / collections)
    #[serde(default)]
    pub models: Vec<Model>,

    /// Enum declarations
    #[serde(default)]
    pub enums: Vec<EnumMetadata>,

    /// Composite types (embedded objects without a relation)
    #[serde(default)]
    pub types: Vec<Model>,
}

/// A model or composite type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Model name
    pub name: String,

    /// Mapped database name (if any)
    #[serde(default)]
    pub db_name: Option<String>,

    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<Field>,

    /// Documentation comment (`///` lines in the schema)
    #[serde(default)]
    pub documentation: Option<String>,
}

/// How a field's type is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Scalar,
    Object,
    Enum,
    Unsupported,
}

/// Metadata for a field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field name
    pub name: String,

    /// Field kind
    pub kind: FieldKind,

    /// Scalar name (`String`, `Int`, ...), enum name, or model/type name
    #[serde(rename = "type")]
    pub field_type: String,

    #[serde(default)]
    pub is_required: bool,

    #[serde(default)]
    pub is_list: bool,

    #[serde(default)]
    pub is_id: bool,

    #[serde(default)]
    pub is_unique: bool,

    /// Set by Prisma on relation scalars (foreign keys)
    #[serde(default)]
    pub is_read_only: bool,

    #[serde(default)]
    pub is_updated_at: bool,

    #[serde(default)]
    pub has_default_value: bool,

    /// Default value: a literal, a list, or a `{ name, args }` function call
    #[serde(default)]
    pub default: Option<serde_json::Value>,

    /// Relation name, present on relation fields only
    #[serde(default)]
    pub relation_name: Option<String>,

    /// Scalar fields of this model holding the foreign key
    #[serde(default)]
    pub relation_from_fields: Vec<String>,

    /// Documentation comment (`///` lines in the schema)
    #[serde(default)]
    pub documentation: Option<String>,
}

/// Enum declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumMetadata {
    /// Enum name
    pub name: String,

    /// Enum values
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

/// Enum value
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,

    #[serde(default)]
    pub db_name: Option<String>,
}

impl Datamodel {
    /// Get a model by name
    pub fn get_model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Get a composite type by name
    pub fn get_type(&self, name: &str) -> Option<&Model> {
        self.types.iter().find(|t| t.name == name)
    }
}

impl Model {
    /// Get a field by name
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl Field {
    /// Documentation text, or an empty string
    pub fn doc(&self) -> &str {
        self.documentation.as_deref().unwrap_or_default()
    }
}
