//! Prisma to TypeScript type mapping

use crate::parser::FieldKind;

/// Represents a TypeScript type for code generation
#[derive(Debug, Clone, PartialEq)]
pub enum TsType {
    String,
    Number,
    BigInt,
    Boolean,
    Date,
    Buffer,
    /// `Prisma.Decimal`
    Decimal,
    /// `Prisma.JsonValue`, returned by queries
    JsonValue,
    /// `Prisma.InputJsonValue`, accepted by create / update
    InputJsonValue,
    /// Plain `object`, used instead of the Prisma JSON types without dependencies
    Object,
    Unknown,
    /// Enum imported from `@prisma/client`
    Enum(String),
    /// Generated class or interface
    Class(String),
    /// Array wrapper
    Array(Box<TsType>),
    /// `T | null`
    Nullable(Box<TsType>),
}

impl TsType {
    /// Get the type string for code generation
    pub fn to_type_string(&self) -> String {
        match self {
            TsType::String => "string".to_string(),
            TsType::Number => "number".to_string(),
            TsType::BigInt => "bigint".to_string(),
            TsType::Boolean => "boolean".to_string(),
            TsType::Date => "Date".to_string(),
            TsType::Buffer => "Buffer".to_string(),
            TsType::Decimal => "Prisma.Decimal".to_string(),
            TsType::JsonValue => "Prisma.JsonValue".to_string(),
            TsType::InputJsonValue => "Prisma.InputJsonValue".to_string(),
            TsType::Object => "object".to_string(),
            TsType::Unknown => "unknown".to_string(),
            TsType::Enum(name) | TsType::Class(name) => name.clone(),
            TsType::Array(inner) => format!("{}[]", inner.to_type_string()),
            TsType::Nullable(inner) => format!("{} | null", inner.to_type_string()),
        }
    }

    /// Check if this type lives in the `Prisma` namespace of `@prisma/client`
    pub fn needs_prisma_namespace(&self) -> bool {
        match self {
            TsType::Decimal | TsType::JsonValue | TsType::InputJsonValue => true,
            TsType::Array(inner) | TsType::Nullable(inner) => inner.needs_prisma_namespace(),
            _ => false,
        }
    }

    /// The enum name, if this type is (or wraps) an enum
    pub fn enum_name(&self) -> Option<&str> {
        match self {
            TsType::Enum(name) => Some(name),
            TsType::Array(inner) | TsType::Nullable(inner) => inner.enum_name(),
            _ => None,
        }
    }
}

/// Resolve Prisma field types to TypeScript types
pub struct TypeResolver;

impl TypeResolver {
    /// Get the TypeScript type for a field.
    ///
    /// `class_name` is used for object fields; `input` selects the Prisma
    /// input JSON type used by create / update DTOs.
    pub fn resolve(
        kind: FieldKind,
        field_type: &str,
        class_name: &str,
        is_list: bool,
        is_nullable: bool,
        input: bool,
        no_dependencies: bool,
    ) -> TsType {
        let base_type = Self::resolve_base_type(kind, field_type, class_name, input, no_dependencies);

        let ts_type = if is_list {
            TsType::Array(Box::new(base_type))
        } else {
            base_type
        };

        if is_nullable {
            TsType::Nullable(Box::new(ts_type))
        } else {
            ts_type
        }
    }

    /// Resolve the base type (without array or null wrappers)
    fn resolve_base_type(
        kind: FieldKind,
        field_type: &str,
        class_name: &str,
        input: bool,
        no_dependencies: bool,
    ) -> TsType {
        match kind {
            FieldKind::Enum => return TsType::Enum(field_type.to_string()),
            FieldKind::Object => return TsType::Class(class_name.to_string()),
            FieldKind::Unsupported => return TsType::Unknown,
            FieldKind::Scalar => {}
        }

        match field_type {
            "String" => TsType::String,
            "Boolean" => TsType::Boolean,
            "Int" | "Float" => TsType::Number,
            "BigInt" => TsType::BigInt,
            "DateTime" => TsType::Date,
            "Bytes" => TsType::Buffer,
            "Decimal" if no_dependencies => TsType::Number,
            "Decimal" => TsType::Decimal,
            "Json" if no_dependencies => TsType::Object,
            "Json" if input => TsType::InputJsonValue,
            "Json" => TsType::JsonValue,
            _ => TsType::Unknown,
        }
    }
}
