//! Model resolver - decides which fields every generated DTO / entity carries

use std::path::{Path, PathBuf};

use tracing::debug;

use super::annotations::*;
use super::api_property::{parse_api_property, ApiProperty};
use super::class_validator::{synthesize_validators, Annotation, FieldDescriptor};
use super::field_classifiers::*;
use super::imports::{push_unique_import, relative_import_path, zip_import_statements, ImportStatement};
use super::naming::{to_class_name, to_file_name, Naming};
use super::type_resolver::{TsType, TypeResolver};
use crate::config::{CodegenConfig, OutputType};
use crate::error::{CodegenError, Result};
use crate::parser::{Datamodel, Field, FieldKind, Model};

/// The kind of class generated for a model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DtoKind {
    Connect,
    Create,
    Update,
    Plain,
    Entity,
}

/// A field of a generated class, ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedField {
    pub name: String,
    pub ts_type: TsType,
    /// Rendered as `name?: T`
    pub is_optional: bool,
    pub class_validators: Vec<Annotation>,
    /// `None` when swagger decorators are disabled
    pub api_properties: Option<Vec<ApiProperty>>,
    pub api_hidden: bool,
}

/// Helper class emitted next to a DTO (relation inputs)
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraClass {
    pub name: String,
    pub fields: Vec<ParsedField>,
    pub exported: bool,
}

/// Everything needed to render one generated file
#[derive(Debug, Clone)]
pub struct DtoParams {
    pub kind: DtoKind,
    pub class_name: String,
    /// Directory relative to the output root
    pub dir: PathBuf,
    pub file_name: String,
    pub fields: Vec<ParsedField>,
    pub imports: Vec<ImportStatement>,
    pub extra_classes: Vec<ExtraClass>,
    pub api_extra_models: Vec<String>,
}

impl DtoParams {
    /// Path of the generated file relative to the output root
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

/// Per-file state collected while walking a model's fields
#[derive(Default)]
struct DtoAccumulator {
    fields: Vec<ParsedField>,
    imports: Vec<ImportStatement>,
    extra_classes: Vec<ExtraClass>,
    api_extra_models: Vec<String>,
    validator_names: Vec<String>,
    has_api_property: bool,
    has_api_hidden: bool,
}

impl DtoAccumulator {
    fn track(&mut self, field: &ParsedField) {
        for validator in &field.class_validators {
            if !self.validator_names.contains(&validator.name) {
                self.validator_names.push(validator.name.clone());
            }
        }
        if field.api_hidden {
            self.has_api_hidden = true;
        } else if field.api_properties.is_some() {
            self.has_api_property = true;
        }
    }

    fn add_extra_model(&mut self, name: &str) {
        if !self.api_extra_models.iter().any(|m| m == name) {
            self.api_extra_models.push(name.to_string());
        }
    }

    fn push_field(&mut self, field: ParsedField) {
        self.track(&field);
        self.fields.push(field);
    }

    fn finish(self, kind: DtoKind, class_name: String, dir: PathBuf, file_name: String) -> DtoParams {
        let mut header = Vec::new();

        let all_fields = self
            .fields
            .iter()
            .chain(self.extra_classes.iter().flat_map(|c| c.fields.iter()));
        let mut prisma_client: Vec<String> = Vec::new();
        let mut needs_prisma = false;
        for field in all_fields {
            needs_prisma |= field.ts_type.needs_prisma_namespace();
            if let Some(name) = field.ts_type.enum_name() {
                if !prisma_client.iter().any(|n| n == name) {
                    prisma_client.push(name.to_string());
                }
            }
        }
        if needs_prisma {
            prisma_client.insert(0, "Prisma".to_string());
        }
        if !prisma_client.is_empty() {
            header.push(ImportStatement::new("@prisma/client", prisma_client));
        }

        if !self.validator_names.is_empty() {
            let mut names: Vec<String> = self
                .validator_names
                .iter()
                .filter(|n| *n != "Type")
                .cloned()
                .collect();
            names.sort();
            header.push(ImportStatement::new("class-validator", names));
            if self.validator_names.iter().any(|n| n == "Type") {
                header.push(ImportStatement::new(
                    "class-transformer",
                    vec!["Type".to_string()],
                ));
            }
        }

        let mut swagger = Vec::new();
        if !self.api_extra_models.is_empty() {
            swagger.push("ApiExtraModels".to_string());
        }
        if self.has_api_property {
            swagger.push("ApiProperty".to_string());
        }
        if self.has_api_hidden {
            swagger.push("ApiHideProperty".to_string());
        }
        if !swagger.is_empty() {
            header.push(ImportStatement::new("@nestjs/swagger", swagger));
        }

        header.extend(self.imports);

        DtoParams {
            kind,
            class_name,
            dir,
            file_name,
            fields: self.fields,
            imports: zip_import_statements(header),
            extra_classes: self.extra_classes,
            api_extra_models: self.api_extra_models,
        }
    }
}

/// How a field ends up in a generated class
struct FieldPlan<'f> {
    field: &'f Field,
    descriptor: FieldDescriptor,
    is_optional: bool,
    is_nullable: bool,
    /// Class referenced by object fields
    class_name: String,
    /// Use the Prisma input JSON type
    input: bool,
}

/// Which annotations drive a relation input on create or update
struct RelationModifiers {
    name_class: fn(&Naming, &str) -> String,
    can_create: &'static str,
    can_connect: &'static str,
}

const ON_CREATE: RelationModifiers = RelationModifiers {
    name_class: Naming::create_dto_name,
    can_create: DTO_RELATION_CAN_CREATE_ON_CREATE,
    can_connect: DTO_RELATION_CAN_CONNECT_ON_CREATE,
};

const ON_UPDATE: RelationModifiers = RelationModifiers {
    name_class: Naming::update_dto_name,
    can_create: DTO_RELATION_CAN_CREATE_ON_UPDATE,
    can_connect: DTO_RELATION_CAN_CONNECT_ON_UPDATE,
};

/// Walks models and computes the params of every generated file
pub struct ModelResolver<'a> {
    datamodel: &'a Datamodel,
    config: &'a CodegenConfig,
    naming: Naming,
}

impl<'a> ModelResolver<'a> {
    pub fn new(datamodel: &'a Datamodel, config: &'a CodegenConfig) -> Self {
        Self {
            datamodel,
            config,
            naming: Naming::new(config),
        }
    }

    pub fn naming(&self) -> &Naming {
        &self.naming
    }

    /// Directory of a model's DTO files, relative to the output root
    pub fn dto_dir(&self, name: &str) -> PathBuf {
        if self.config.output_to_nestjs_resource_structure {
            PathBuf::from(to_file_name(name)).join("dto")
        } else {
            PathBuf::new()
        }
    }

    /// Directory of a model's entity file, relative to the output root
    pub fn entity_dir(&self, name: &str) -> PathBuf {
        if self.config.output_to_nestjs_resource_structure {
            PathBuf::from(to_file_name(name)).join("entities")
        } else {
            PathBuf::new()
        }
    }

    /// Params for every file generated from a model
    pub fn compute_model_params(&self, model: &Model) -> Result<Vec<DtoParams>> {
        debug!("Resolving fields of model {}", model.name);
        let mut params = Vec::new();
        if let Some(connect) = self.compute_connect_params(model) {
            params.push(connect);
        }
        params.push(self.compute_create_params(model)?);
        params.push(self.compute_update_params(model)?);
        params.push(self.compute_entity_params(model)?);
        params.push(self.compute_plain_params(model)?);
        Ok(params)
    }

    /// Params for every file generated from a composite type
    pub fn compute_type_params(&self, ty: &Model) -> Result<Vec<DtoParams>> {
        debug!("Resolving fields of type {}", ty.name);
        Ok(vec![
            self.compute_create_params(ty)?,
            self.compute_update_params(ty)?,
            self.compute_plain_params(ty)?,
        ])
    }

    fn emit_decorators(&self) -> bool {
        self.config.output_type == OutputType::Class
    }

    /// Build the rendered field from a plan, synthesizing its decorators
    fn parse_field(&self, plan: FieldPlan<'_>, dto_name: impl Fn(&str) -> String) -> ParsedField {
        let FieldPlan {
            field,
            descriptor,
            is_optional,
            is_nullable,
            class_name,
            input,
        } = plan;

        let ts_type = TypeResolver::resolve(
            descriptor.kind,
            &descriptor.scalar_type,
            &class_name,
            descriptor.is_list,
            is_nullable,
            input,
            self.config.no_dependencies,
        );

        let class_validators = if self.config.class_validation && self.emit_decorators() {
            synthesize_validators(&descriptor, dto_name)
        } else {
            Vec::new()
        };

        let with_swagger = !self.config.no_dependencies && self.emit_decorators();
        let api_hidden = with_swagger && is_annotated_with(field.documentation.as_deref(), DTO_API_HIDDEN);
        let api_properties = with_swagger
            .then(|| parse_api_property(field, &descriptor, is_nullable, &class_name));

        ParsedField {
            name: descriptor.name,
            ts_type,
            is_optional,
            class_validators,
            api_properties,
            api_hidden,
        }
    }

    /// Find a model or composite type referenced by `field`
    fn find_related(&self, model: &Model, field: &Field) -> Result<&'a Model> {
        self.datamodel
            .get_model(&field.field_type)
            .or_else(|| self.datamodel.get_type(&field.field_type))
            .ok_or_else(|| CodegenError::RelatedModelNotFound {
                model: model.name.clone(),
                field: field.name.clone(),
                related: field.field_type.clone(),
            })
    }

    /// Import `class_name` from `file_name` in `to_dir`, unless it is the current file
    fn import_local(
        &self,
        acc: &mut DtoAccumulator,
        from_dir: &Path,
        from_file: &str,
        to_dir: &Path,
        file_name: &str,
        class_name: &str,
    ) {
        if from_dir == to_dir && from_file == file_name {
            return;
        }
        let from = relative_import_path(from_dir, to_dir, file_name);
        push_unique_import(&mut acc.imports, &from, class_name);
    }

    fn is_read_only(field: &Field) -> bool {
        is_read_only(field) || is_annotated_with(field.documentation.as_deref(), DTO_READ_ONLY)
    }

    /// Generate the `{ create?, connect? }` input class of a relation field
    fn generate_relation_input(
        &self,
        acc: &mut DtoAccumulator,
        model: &Model,
        field: &Field,
        modifiers: &RelationModifiers,
        current_file: &str,
    ) -> Result<String> {
        let doc = field.documentation.as_deref();
        let from_dir = self.dto_dir(&model.name);
        let mut members: Vec<(&str, String)> = Vec::new();

        if is_annotated_with(doc, modifiers.can_create) {
            let related = self.find_related(model, field)?;
            let class_name = self.naming.create_dto_name(&related.name);
            self.import_local(
                acc,
                &from_dir,
                current_file,
                &self.dto_dir(&related.name),
                &self.naming.create_dto_filename(&related.name),
                &class_name,
            );
            acc.add_extra_model(&class_name);
            members.push(("create", class_name));
        }

        if is_annotated_with(doc, modifiers.can_connect) {
            let related = self.find_related(model, field)?;
            let class_name = self.naming.connect_dto_name(&related.name);
            self.import_local(
                acc,
                &from_dir,
                current_file,
                &self.dto_dir(&related.name),
                &self.naming.connect_dto_filename(&related.name),
                &class_name,
            );
            acc.add_extra_model(&class_name);
            members.push(("connect", class_name));
        }

        if members.is_empty() {
            return Err(CodegenError::MissingRelationModifier {
                model: model.name.clone(),
                field: field.name.clone(),
            });
        }

        let input_name = (modifiers.name_class)(
            &self.naming,
            &format!(
                "{}{}RelationInput",
                to_class_name(&model.name),
                to_class_name(&field.name)
            ),
        );

        let only_one = members.len() == 1;
        let mut fields = Vec::new();
        for (member, class_name) in members {
            let descriptor = FieldDescriptor {
                name: member.to_string(),
                kind: FieldKind::Object,
                scalar_type: class_name.clone(),
                is_required: only_one,
                is_list: field.is_list,
                relation_name: None,
                documentation: None,
            };
            let plan = FieldPlan {
                field,
                descriptor,
                is_optional: !only_one,
                is_nullable: false,
                class_name,
                input: true,
            };
            fields.push(self.parse_field(plan, str::to_string));
        }
        for f in &fields {
            acc.track(f);
        }

        acc.extra_classes.push(ExtraClass {
            name: input_name.clone(),
            fields,
            exported: self.config.export_relation_modifier_classes,
        });
        acc.add_extra_model(&input_name);

        Ok(input_name)
    }

    /// `Connect*Dto`: the id and unique fields; all optional when there is a choice
    pub fn compute_connect_params(&self, model: &Model) -> Option<DtoParams> {
        let unique_fields: Vec<&Field> = model
            .fields
            .iter()
            .filter(|f| f.kind != FieldKind::Object && (f.is_id || f.is_unique))
            .collect();
        if unique_fields.is_empty() {
            return None;
        }

        let is_required = unique_fields.len() == 1;
        let mut acc = DtoAccumulator::default();
        for field in unique_fields {
            let descriptor = FieldDescriptor {
                is_required,
                ..FieldDescriptor::from(field)
            };
            let plan = FieldPlan {
                field,
                descriptor,
                is_optional: !is_required,
                is_nullable: false,
                class_name: String::new(),
                input: true,
            };
            acc.push_field(self.parse_field(plan, str::to_string));
        }

        Some(acc.finish(
            DtoKind::Connect,
            self.naming.connect_dto_name(&model.name),
            self.dto_dir(&model.name),
            self.naming.connect_dto_filename(&model.name),
        ))
    }

    /// `Create*Dto`
    pub fn compute_create_params(&self, model: &Model) -> Result<DtoParams> {
        let relation_scalar_names = relation_scalars(&model.fields);
        let dir = self.dto_dir(&model.name);
        let file_name = self.naming.create_dto_filename(&model.name);
        let mut acc = DtoAccumulator::default();

        for field in &model.fields {
            let doc = field.documentation.as_deref();
            let is_relation_scalar = relation_scalar_names.contains(field.name.as_str());
            let include_id = is_annotated_with(doc, DTO_RELATION_INCLUDE_ID) && is_relation_scalar;

            if Self::is_read_only(field) && !include_id {
                continue;
            }

            let mut descriptor = FieldDescriptor::from(field);
            let mut class_name = String::new();
            let mut is_nullable = !field.is_required;

            if is_relation(field) {
                if !is_annotated_with_one_of(doc, DTO_RELATION_MODIFIERS_ON_CREATE) {
                    continue;
                }
                let input_name =
                    self.generate_relation_input(&mut acc, model, field, &ON_CREATE, &file_name)?;

                if is_annotated_with(doc, DTO_RELATION_REQUIRED) {
                    descriptor.is_required = true;
                }
                // list relations take their list input inside `create` / `connect`
                if field.is_list {
                    descriptor.is_required = false;
                }
                descriptor.scalar_type = input_name.clone();
                descriptor.relation_name = None;
                descriptor.is_list = false;
                class_name = input_name;
                is_nullable = false;
            }

            if is_relation_scalar && !include_id {
                continue;
            }

            if is_annotated_with(doc, DTO_CREATE_OPTIONAL) {
                descriptor.is_required = false;
            } else if is_id_with_default_value(field)
                || is_updated_at(field)
                || is_required_with_default_value(field)
            {
                continue;
            }

            if is_type(field) {
                let related = self.find_related(model, field)?;
                class_name = self.naming.create_dto_name(&related.name);
                self.import_local(
                    &mut acc,
                    &dir,
                    &file_name,
                    &self.dto_dir(&related.name),
                    &self.naming.create_dto_filename(&related.name),
                    &class_name,
                );
            }

            let plan = FieldPlan {
                field,
                is_optional: !descriptor.is_required,
                descriptor,
                is_nullable,
                class_name,
                input: true,
            };
            let parsed = if is_relation(field) {
                self.parse_field(plan, str::to_string)
            } else {
                self.parse_field(plan, |name| self.naming.create_dto_name(name))
            };
            acc.push_field(parsed);
        }

        Ok(acc.finish(
            DtoKind::Create,
            self.naming.create_dto_name(&model.name),
            dir,
            file_name,
        ))
    }

    /// `Update*Dto`: every field optional
    pub fn compute_update_params(&self, model: &Model) -> Result<DtoParams> {
        let relation_scalar_names = relation_scalars(&model.fields);
        let dir = self.dto_dir(&model.name);
        let file_name = self.naming.update_dto_filename(&model.name);
        let mut acc = DtoAccumulator::default();

        for field in &model.fields {
            let doc = field.documentation.as_deref();
            let is_relation_scalar = relation_scalar_names.contains(field.name.as_str());
            let include_id = is_annotated_with(doc, DTO_RELATION_INCLUDE_ID) && is_relation_scalar;

            if Self::is_read_only(field) && !include_id {
                continue;
            }

            let mut descriptor = FieldDescriptor {
                is_required: false,
                ..FieldDescriptor::from(field)
            };
            let mut class_name = String::new();
            let mut is_nullable = !field.is_required;

            if is_relation(field) {
                if !is_annotated_with_one_of(doc, DTO_RELATION_MODIFIERS_ON_UPDATE) {
                    continue;
                }
                let input_name =
                    self.generate_relation_input(&mut acc, model, field, &ON_UPDATE, &file_name)?;
                descriptor.scalar_type = input_name.clone();
                descriptor.relation_name = None;
                descriptor.is_list = false;
                class_name = input_name;
                is_nullable = false;
            }

            if is_relation_scalar && !include_id {
                continue;
            }

            if !is_annotated_with(doc, DTO_UPDATE_OPTIONAL)
                && (field.is_id || is_updated_at(field) || is_required_with_default_value(field))
            {
                continue;
            }

            let full_update = is_annotated_with(doc, DTO_TYPE_FULL_UPDATE);
            if is_type(field) {
                let related = self.find_related(model, field)?;
                let (related_class, related_file) = if full_update {
                    (
                        self.naming.create_dto_name(&related.name),
                        self.naming.create_dto_filename(&related.name),
                    )
                } else {
                    (
                        self.naming.update_dto_name(&related.name),
                        self.naming.update_dto_filename(&related.name),
                    )
                };
                self.import_local(
                    &mut acc,
                    &dir,
                    &file_name,
                    &self.dto_dir(&related.name),
                    &related_file,
                    &related_class,
                );
                class_name = related_class;
            }

            let plan = FieldPlan {
                field,
                descriptor,
                is_optional: true,
                is_nullable,
                class_name,
                input: true,
            };
            let parsed = if is_relation(field) {
                self.parse_field(plan, str::to_string)
            } else if full_update {
                self.parse_field(plan, |name| self.naming.create_dto_name(name))
            } else {
                self.parse_field(plan, |name| self.naming.update_dto_name(name))
            };
            acc.push_field(parsed);
        }

        Ok(acc.finish(
            DtoKind::Update,
            self.naming.update_dto_name(&model.name),
            dir,
            file_name,
        ))
    }

    /// Plain `*Dto`: the scalar shape of a record, without relations
    pub fn compute_plain_params(&self, model: &Model) -> Result<DtoParams> {
        let dir = self.dto_dir(&model.name);
        let file_name = self.naming.plain_dto_filename(&model.name);
        let mut acc = DtoAccumulator::default();

        for field in &model.fields {
            if is_annotated_with(field.documentation.as_deref(), DTO_ENTITY_HIDDEN) || is_relation(field) {
                continue;
            }

            let mut class_name = String::new();
            if is_type(field) {
                let related = self.find_related(model, field)?;
                class_name = self.naming.plain_dto_name(&related.name);
                self.import_local(
                    &mut acc,
                    &dir,
                    &file_name,
                    &self.dto_dir(&related.name),
                    &self.naming.plain_dto_filename(&related.name),
                    &class_name,
                );
            }

            let plan = FieldPlan {
                field,
                descriptor: FieldDescriptor::from(field),
                is_optional: false,
                is_nullable: !field.is_required,
                class_name,
                input: false,
            };
            acc.push_field(self.parse_field(plan, |name| self.naming.plain_dto_name(name)));
        }

        Ok(acc.finish(
            DtoKind::Plain,
            self.naming.plain_dto_name(&model.name),
            dir,
            file_name,
        ))
    }

    /// Entity: every visible field, relations typed as sibling entities
    pub fn compute_entity_params(&self, model: &Model) -> Result<DtoParams> {
        let dir = self.entity_dir(&model.name);
        let file_name = self.naming.entity_filename(&model.name);
        let mut acc = DtoAccumulator::default();

        for field in &model.fields {
            if is_annotated_with(field.documentation.as_deref(), DTO_ENTITY_HIDDEN) {
                continue;
            }

            let mut descriptor = FieldDescriptor::from(field);
            let mut class_name = String::new();
            let mut is_optional = false;
            let mut is_nullable = !field.is_required;

            if is_relation(field) {
                let related = self.find_related(model, field)?;
                class_name = self.naming.entity_name(&related.name);
                self.import_local(
                    &mut acc,
                    &dir,
                    &file_name,
                    &self.entity_dir(&related.name),
                    &self.naming.entity_filename(&related.name),
                    &class_name,
                );
                // relations are only present when included in the query
                descriptor.is_required = false;
                is_optional = true;
                is_nullable = !field.is_required && !field.is_list;
            } else if is_type(field) {
                let related = self.find_related(model, field)?;
                class_name = self.naming.plain_dto_name(&related.name);
                self.import_local(
                    &mut acc,
                    &dir,
                    &file_name,
                    &self.dto_dir(&related.name),
                    &self.naming.plain_dto_filename(&related.name),
                    &class_name,
                );
            }

            let plan = FieldPlan {
                field,
                descriptor,
                is_optional,
                is_nullable,
                class_name,
                input: false,
            };
            acc.push_field(self.parse_field(plan, |name| self.naming.plain_dto_name(name)));
        }

        Ok(acc.finish(
            DtoKind::Entity,
            self.naming.entity_name(&model.name),
            dir,
            file_name,
        ))
    }
}
