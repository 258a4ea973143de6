//! Template rendering - turns resolved params into TypeScript source

use super::api_property::decorate_api_property;
use super::class_validator::decorate_class_validators;
use super::model_params::{DtoParams, ParsedField};
use crate::config::OutputType;

/// Render a whole generated file
pub fn render_dto(params: &DtoParams, output_type: OutputType) -> String {
    let mut code = String::new();

    for import in &params.imports {
        code.push_str(&import.render());
        code.push('\n');
    }
    if !params.imports.is_empty() {
        code.push('\n');
    }

    for extra in &params.extra_classes {
        code.push_str(&render_class(
            &extra.name,
            &extra.fields,
            extra.exported,
            &[],
            output_type,
        ));
        code.push('\n');
    }

    code.push_str(&render_class(
        &params.class_name,
        &params.fields,
        true,
        &params.api_extra_models,
        output_type,
    ));
    code
}

/// Render one class or interface declaration
pub fn render_class(
    name: &str,
    fields: &[ParsedField],
    exported: bool,
    api_extra_models: &[String],
    output_type: OutputType,
) -> String {
    let mut code = String::new();

    if output_type == OutputType::Class && !api_extra_models.is_empty() {
        code.push_str(&format!("@ApiExtraModels({})\n", api_extra_models.join(", ")));
    }

    if exported {
        code.push_str("export ");
    }
    code.push_str(&format!("{} {} {{\n", output_type, name));
    for field in fields {
        code.push_str(&render_field(field, output_type));
    }
    code.push_str("}\n");
    code
}

/// Render a field with its decorators
fn render_field(field: &ParsedField, output_type: OutputType) -> String {
    let mut code = String::new();

    if output_type == OutputType::Class {
        if let Some(properties) = &field.api_properties {
            push_indented(&mut code, &decorate_api_property(properties, field.api_hidden));
        }
        push_indented(&mut code, &decorate_class_validators(&field.class_validators));
    }

    let optional = if field.is_optional { "?" } else { "" };
    code.push_str(&format!(
        "  {}{}: {};\n",
        field.name,
        optional,
        field.ts_type.to_type_string()
    ));
    code
}

fn push_indented(code: &mut String, block: &str) {
    for line in block.lines() {
        code.push_str("  ");
        code.push_str(line);
        code.push('\n');
    }
}

/// `index.ts` re-exporting every file of a directory
pub fn render_index(file_names: &[String]) -> String {
    let mut code = String::new();
    for file_name in file_names {
        let module = file_name.strip_suffix(".ts").unwrap_or(file_name);
        code.push_str(&format!("export * from './{}';\n", module));
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::class_validator::Annotation;
    use crate::codegen::TsType;

    fn field(name: &str, ts_type: TsType, is_optional: bool) -> ParsedField {
        ParsedField {
            name: name.to_string(),
            ts_type,
            is_optional,
            class_validators: Vec::new(),
            api_properties: None,
            api_hidden: false,
        }
    }

    #[test]
    fn test_render_class_fields() {
        let fields = vec![
            field("email", TsType::String, false),
            field("name", TsType::Nullable(Box::new(TsType::String)), true),
        ];
        let code = render_class("CreateUserDto", &fields, true, &[], OutputType::Class);
        assert_eq!(
            code,
            "export class CreateUserDto {\n  email: string;\n  name?: string | null;\n}\n"
        );
    }

    #[test]
    fn test_render_decorators() {
        let mut email = field("email", TsType::String, false);
        email.class_validators = vec![Annotation::new("IsNotEmpty"), Annotation::new("IsString")];
        email.api_properties = Some(Vec::new());

        let code = render_class(
            "CreateUserDto",
            &[email],
            true,
            &["ConnectPostDto".to_string()],
            OutputType::Class,
        );
        assert_eq!(
            code,
            "@ApiExtraModels(ConnectPostDto)\n\
             export class CreateUserDto {\n  \
             @ApiProperty()\n  \
             @IsNotEmpty()\n  \
             @IsString()\n  \
             email: string;\n}\n"
        );
    }

    #[test]
    fn test_render_hidden_field() {
        let mut secret = field("secret", TsType::String, false);
        secret.api_properties = Some(Vec::new());
        secret.api_hidden = true;

        let code = render_class("User", &[secret], true, &[], OutputType::Class);
        assert!(code.contains("  @ApiHideProperty()\n  secret: string;"));
        assert!(!code.contains("@ApiProperty"));
    }

    #[test]
    fn test_render_interface_drops_decorators() {
        let mut email = field("email", TsType::String, false);
        email.class_validators = vec![Annotation::new("IsNotEmpty")];
        email.api_properties = Some(Vec::new());

        let code = render_class(
            "UserDto",
            &[email],
            false,
            &["Other".to_string()],
            OutputType::Interface,
        );
        assert_eq!(code, "interface UserDto {\n  email: string;\n}\n");
    }

    #[test]
    fn test_render_index() {
        let files = vec!["create-user.dto.ts".to_string(), "user.entity.ts".to_string()];
        assert_eq!(
            render_index(&files),
            "export * from './create-user.dto';\nexport * from './user.entity';\n"
        );
    }
}
