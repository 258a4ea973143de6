//! Synthesis of class-validator / class-transformer decorators for one field
//!
//! The decorator list of a field is derived in four steps:
//!
//! 1. presence marker (`IsNotEmpty` / `IsOptional`) and `IsArray` for lists
//! 2. `ValidateNested` + `Type` for composite types, or the decorator mapped
//!    from the scalar type
//! 3. `{ each: true }` rewriting of every element-level decorator of a list
//! 4. `@Decorator(args)` directives from the field documentation, which
//!    replace any derived decorator of the same name
//!
//! Names are unique within the returned list.

use std::sync::LazyLock;

use regex::Regex;

use super::each_option::wrap_each;
use super::validator_catalog::{all_validators, is_array_validator, scalar_to_validator};
use crate::parser::{Field, FieldKind};

/// A decorator invocation: `@{name}({value})`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub name: String,
    pub value: Option<String>,
}

impl Annotation {
    /// Decorator without arguments
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Decorator with an argument list
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

/// The field properties decorator synthesis looks at.
///
/// Callers copy a descriptor from the schema field and override
/// `is_required` / `is_list` / `scalar_type` for the DTO kind being generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
    pub scalar_type: String,
    pub is_required: bool,
    pub is_list: bool,
    pub relation_name: Option<String>,
    pub documentation: Option<String>,
}

impl FieldDescriptor {
    /// An object field that is not a relation, i.e. an embedded composite
    pub fn is_structured_type(&self) -> bool {
        self.kind == FieldKind::Object && self.relation_name.is_none()
    }
}

impl From<&Field> for FieldDescriptor {
    fn from(field: &Field) -> Self {
        Self {
            name: field.name.clone(),
            kind: field.kind,
            scalar_type: field.field_type.clone(),
            is_required: field.is_required,
            is_list: field.is_list,
            relation_name: field.relation_name.clone(),
            documentation: field.documentation.clone(),
        }
    }
}

/// One compiled directive pattern per catalog name, in catalog order
static DIRECTIVES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    all_validators()
        .map(|name| {
            let pattern = format!(r"@{}\b(?:\(([^)\n]*)\))?", regex::escape(name));
            let rx = Regex::new(&pattern).expect("failed to compile directive regex");
            (name, rx)
        })
        .collect()
});

/// Find the first `@{name}` or `@{name}(args)` directive in `documentation`
fn extract_validator(documentation: &str, name: &str, rx: &Regex) -> Option<Annotation> {
    let caps = rx.captures(documentation)?;
    let value = caps
        .get(1)
        .map(|args| args.as_str())
        .filter(|args| !args.is_empty());
    Some(Annotation {
        name: name.to_string(),
        value: value.map(str::to_string),
    })
}

/// Make an element-level decorator apply to every element of a list
fn opt_each(validator: &mut Annotation, is_list: bool) {
    if is_list && !is_array_validator(&validator.name) {
        validator.value = Some(wrap_each(&validator.name, validator.value.as_deref()));
    }
}

/// Derive the ordered decorator list for a field.
///
/// `dto_name` maps a composite type name to the class the `Type` decorator
/// should reference for the DTO kind being generated.
pub fn synthesize_validators(
    field: &FieldDescriptor,
    dto_name: impl Fn(&str) -> String,
) -> Vec<Annotation> {
    let mut validators = Vec::new();

    if field.is_required {
        validators.push(Annotation::new("IsNotEmpty"));
    } else {
        validators.push(Annotation::new("IsOptional"));
    }

    if field.is_list {
        validators.push(Annotation::new("IsArray"));
    }

    if field.is_structured_type() {
        let mut nested = Annotation::new("ValidateNested");
        opt_each(&mut nested, field.is_list);
        validators.push(nested);
        validators.push(Annotation::with_value(
            "Type",
            format!("() => {}", dto_name(&field.scalar_type)),
        ));
    } else if let Some(name) = scalar_to_validator(&field.scalar_type) {
        let mut type_validator = Annotation::new(name);
        opt_each(&mut type_validator, field.is_list);
        validators.push(type_validator);
    }

    if let Some(documentation) = field.documentation.as_deref() {
        for (name, rx) in DIRECTIVES.iter() {
            if let Some(mut validator) = extract_validator(documentation, name, rx) {
                // user-defined validator wins over the derived one
                validators.retain(|v| v.name != validator.name);
                opt_each(&mut validator, field.is_list);
                validators.push(validator);
            }
        }
    }

    validators
}

/// Render decorators, one `@Name(args)` line each, in list order
pub fn decorate_class_validators(validators: &[Annotation]) -> String {
    let mut output = String::new();
    for validator in validators {
        output.push_str(&format!(
            "@{}({})\n",
            validator.name,
            validator.value.as_deref().unwrap_or_default()
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(scalar_type: &str, is_required: bool, is_list: bool) -> FieldDescriptor {
        FieldDescriptor {
            name: "field".to_string(),
            kind: FieldKind::Scalar,
            scalar_type: scalar_type.to_string(),
            is_required,
            is_list,
            relation_name: None,
            documentation: None,
        }
    }

    fn documented(mut field: FieldDescriptor, doc: &str) -> FieldDescriptor {
        field.documentation = Some(doc.to_string());
        field
    }

    fn same_name(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn test_required_string() {
        let validators = synthesize_validators(&scalar("String", true, false), same_name);
        assert_eq!(
            validators,
            vec![Annotation::new("IsNotEmpty"), Annotation::new("IsString")]
        );
    }

    #[test]
    fn test_optional_int_list() {
        let validators = synthesize_validators(&scalar("Int", false, true), same_name);
        assert_eq!(
            validators,
            vec![
                Annotation::new("IsOptional"),
                Annotation::new("IsArray"),
                Annotation::with_value("IsInt", "{ each: true }"),
            ]
        );
    }

    #[test]
    fn test_structured_type_list() {
        let field = FieldDescriptor {
            kind: FieldKind::Object,
            scalar_type: "Foo".to_string(),
            ..scalar("Foo", true, true)
        };
        let validators = synthesize_validators(&field, |name| format!("Create{name}Dto"));
        assert_eq!(
            validators,
            vec![
                Annotation::new("IsNotEmpty"),
                Annotation::new("IsArray"),
                Annotation::with_value("ValidateNested", "{ each: true }"),
                Annotation::with_value("Type", "() => CreateFooDto"),
            ]
        );
    }

    #[test]
    fn test_relation_is_not_structured() {
        let field = FieldDescriptor {
            kind: FieldKind::Object,
            relation_name: Some("PostToUser".to_string()),
            ..scalar("User", true, false)
        };
        assert!(!field.is_structured_type());
        let validators = synthesize_validators(&field, same_name);
        assert_eq!(validators, vec![Annotation::new("IsNotEmpty")]);
    }

    #[test]
    fn test_unmapped_scalar_has_no_type_validator() {
        let validators = synthesize_validators(&scalar("Json", false, false), same_name);
        assert_eq!(validators, vec![Annotation::new("IsOptional")]);
    }

    #[test]
    fn test_enum_field() {
        let field = FieldDescriptor {
            kind: FieldKind::Enum,
            ..scalar("Role", true, true)
        };
        let validators = synthesize_validators(&field, same_name);
        assert_eq!(
            validators,
            vec![Annotation::new("IsNotEmpty"), Annotation::new("IsArray")]
        );
    }

    #[test]
    fn test_enum_field_with_directive() {
        let field = FieldDescriptor {
            kind: FieldKind::Enum,
            ..documented(scalar("Role", true, true), "@IsEnum(Role)")
        };
        let validators = synthesize_validators(&field, same_name);
        assert_eq!(
            validators,
            vec![
                Annotation::new("IsNotEmpty"),
                Annotation::new("IsArray"),
                Annotation::with_value("IsEnum", "Role, { each: true }"),
            ]
        );
    }

    #[test]
    fn test_directives_follow_catalog_order() {
        let field = documented(scalar("Int", true, false), "@Max(20)\n@Min(5)");
        let validators = synthesize_validators(&field, same_name);
        assert_eq!(
            validators,
            vec![
                Annotation::new("IsNotEmpty"),
                Annotation::new("IsInt"),
                Annotation::with_value("Min", "5"),
                Annotation::with_value("Max", "20"),
            ]
        );
    }

    #[test]
    fn test_directive_replaces_derived_validator() {
        let field = documented(scalar("String", true, false), "@IsString({ each: false })");
        let validators = synthesize_validators(&field, same_name);
        assert_eq!(
            validators,
            vec![
                Annotation::new("IsNotEmpty"),
                Annotation::with_value("IsString", "{ each: false }"),
            ]
        );

        let field = documented(scalar("String", true, true), "@IsString({ message: 'x' })");
        let validators = synthesize_validators(&field, same_name);
        assert_eq!(
            validators.last(),
            Some(&Annotation::with_value("IsString", "{ message: 'x' , each: true }"))
        );
        assert_eq!(validators.iter().filter(|v| v.name == "IsString").count(), 1);
    }

    #[test]
    fn test_directive_without_counterpart() {
        let with = synthesize_validators(
            &documented(scalar("String", true, false), "@IsEmail()"),
            same_name,
        );
        assert_eq!(with.last(), Some(&Annotation::new("IsEmail")));

        let replaced = synthesize_validators(
            &documented(scalar("String", true, false), "@IsString"),
            same_name,
        );
        assert_eq!(
            replaced,
            vec![Annotation::new("IsNotEmpty"), Annotation::new("IsString")]
        );
    }

    #[test]
    fn test_directive_each_wrapping_with_defaults() {
        let field = documented(scalar("String", false, true), "@Length(2)\n@ArrayNotEmpty()");
        let validators = synthesize_validators(&field, same_name);
        assert!(validators.contains(&Annotation::with_value("Length", "2, 10, { each: true }")));
        assert!(validators.contains(&Annotation::new("ArrayNotEmpty")));
        assert_eq!(validators.iter().filter(|v| v.name == "IsArray").count(), 1);
    }

    #[test]
    fn test_directive_requires_exact_name() {
        let field = documented(scalar("String", true, false), "@MinLength(3)");
        let validators = synthesize_validators(&field, same_name);
        assert!(validators.iter().all(|v| v.name != "Min"));
        assert!(validators.contains(&Annotation::with_value("MinLength", "3")));
    }

    #[test]
    fn test_directive_arguments_stay_on_one_line() {
        let field = documented(
            scalar("Int", true, false),
            "@Min(1 trailing\n) text\n@Max(9) and a comment",
        );
        let validators = synthesize_validators(&field, same_name);
        assert!(validators.contains(&Annotation::new("Min")));
        assert!(validators.contains(&Annotation::with_value("Max", "9")));
    }

    #[test]
    fn test_presence_marker_exactly_once() {
        for required in [true, false] {
            let field = documented(scalar("String", required, true), "@IsEmail() @Length(1, 4)");
            let validators = synthesize_validators(&field, same_name);
            let markers = validators
                .iter()
                .filter(|v| v.name == "IsNotEmpty" || v.name == "IsOptional")
                .count();
            assert_eq!(markers, 1);
            let expected = if required { "IsNotEmpty" } else { "IsOptional" };
            assert_eq!(validators[0].name, expected);
        }
    }

    #[test]
    fn test_decorate_class_validators() {
        let output = decorate_class_validators(&[
            Annotation::new("IsOptional"),
            Annotation::with_value("Min", "5"),
        ]);
        assert_eq!(output, "@IsOptional()\n@Min(5)\n");
        assert_eq!(decorate_class_validators(&[]), "");
    }
}
