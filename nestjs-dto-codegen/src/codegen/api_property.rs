//! `@nestjs/swagger` `@ApiProperty` options for a field

use std::sync::LazyLock;

use regex::Regex;

use super::class_validator::FieldDescriptor;
use crate::parser::{Field, FieldKind};

/// Documentation props copied verbatim into the `@ApiProperty` options
const API_PROPS: &[&str] = &[
    "description",
    "minimum",
    "maximum",
    "exclusiveMinimum",
    "exclusiveMaximum",
    "minLength",
    "maxLength",
    "minItems",
    "maxItems",
    "example",
];

static API_PROP_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    API_PROPS
        .iter()
        .map(|prop| {
            let pattern = format!(r"(?m)@{}\s+(.*)$", regex::escape(prop));
            let rx = Regex::new(&pattern).expect("failed to compile api property regex");
            (*prop, rx)
        })
        .collect()
});

/// One `key: value` pair of the `@ApiProperty({ ... })` options object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiProperty {
    pub name: String,
    /// TypeScript expression, already quoted where needed
    pub value: String,
}

impl ApiProperty {
    /// Property whose value is rendered as-is
    fn expr(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
        }
    }

    /// Property whose value is quoted unless it looks like a number, boolean or array
    fn literal(name: &str, value: &str) -> Self {
        Self::expr(name, encapsulate_string(value))
    }
}

/// Quote `value` as a string literal unless it reads as a number, boolean or array
pub fn encapsulate_string(value: &str) -> String {
    let is_bare = value == "true"
        || value == "false"
        || value
            .chars()
            .next()
            .map_or(true, |c| c.is_ascii_digit() || c == '[');
    if is_bare {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', "\\'"))
    }
}

/// OpenAPI `type` / `format` of a Prisma scalar
fn scalar_format(scalar: &str) -> Option<(&'static str, Option<&'static str>)> {
    match scalar {
        "String" => Some(("string", None)),
        "Boolean" => Some(("boolean", None)),
        "Int" => Some(("integer", Some("int32"))),
        "BigInt" => Some(("integer", Some("int64"))),
        "Float" => Some(("number", Some("float"))),
        "Decimal" => Some(("number", Some("double"))),
        "DateTime" => Some(("string", Some("date-time"))),
        "Bytes" => Some(("string", Some("binary"))),
        "Json" => Some(("object", None)),
        _ => None,
    }
}

/// Literal defaults only; database functions like `now()` are left out
fn default_value(field: &Field) -> Option<String> {
    if !field.has_default_value {
        return None;
    }
    match field.default.as_ref()? {
        serde_json::Value::String(s) => Some(encapsulate_string(s)),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        list @ serde_json::Value::Array(_) => Some(list.to_string()),
        _ => None,
    }
}

fn extract_doc_prop(documentation: &str, prop: &str, rx: &Regex) -> Option<ApiProperty> {
    let caps = rx.captures(documentation)?;
    let value = caps.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| ApiProperty::literal(prop, value))
}

/// Build the `@ApiProperty` options of a field.
///
/// `descriptor` carries the per-DTO overrides, `class_name` is the type
/// referenced by object fields.
pub fn parse_api_property(
    field: &Field,
    descriptor: &FieldDescriptor,
    is_nullable: bool,
    class_name: &str,
) -> Vec<ApiProperty> {
    let mut properties = Vec::new();

    if let Some(default) = default_value(field) {
        properties.push(ApiProperty::expr("default", default));
    }

    let documentation = descriptor.documentation.as_deref().unwrap_or_default();
    for (prop, rx) in API_PROP_PATTERNS.iter() {
        if let Some(property) = extract_doc_prop(documentation, prop, rx) {
            properties.push(property);
        }
    }

    match descriptor.kind {
        FieldKind::Object => {
            properties.push(ApiProperty::expr("type", format!("() => {class_name}")));
        }
        FieldKind::Enum => {
            properties.push(ApiProperty::expr("enum", descriptor.scalar_type.clone()));
            properties.push(ApiProperty::literal("enumName", &descriptor.scalar_type));
        }
        FieldKind::Scalar => {
            if let Some((ty, format)) = scalar_format(&descriptor.scalar_type) {
                properties.push(ApiProperty::literal("type", ty));
                if let Some(format) = format {
                    properties.push(ApiProperty::literal("format", format));
                }
            }
        }
        FieldKind::Unsupported => {}
    }

    if descriptor.is_list {
        properties.push(ApiProperty::expr("isArray", "true"));
    }
    if !descriptor.is_required {
        properties.push(ApiProperty::expr("required", "false"));
    }
    if is_nullable {
        properties.push(ApiProperty::expr("nullable", "true"));
    }

    properties
}

/// Render the swagger decorator for a field
pub fn decorate_api_property(properties: &[ApiProperty], hidden: bool) -> String {
    if hidden {
        return "@ApiHideProperty()\n".to_string();
    }
    if properties.is_empty() {
        return "@ApiProperty()\n".to_string();
    }

    let mut output = String::from("@ApiProperty({\n");
    for property in properties {
        output.push_str(&format!("  {}: {},\n", property.name, property.value));
    }
    output.push_str("})\n");
    output
}
