//! nestjs-dto-codegen: Generate NestJS DTO and entity classes from a Prisma datamodel
//!
//! This crate provides both a CLI tool and a library for generating TypeScript
//! code from the Prisma DMMF (the JSON datamodel Prisma hands to generators).
//! For every model it generates:
//!
//! - `Connect`, `Create` and `Update` DTO classes with `class-validator`
//!   decorators synthesized from field metadata and documentation directives
//! - A plain DTO and an entity class
//! - `@nestjs/swagger` `@ApiProperty` decorators
//!
//! Generated files are returned in memory; writing them is left to the caller.
//!
//! # Programmatic Configuration
//!
//! ```rust,ignore
//! let files = nestjs_dto_codegen::CodegenBuilder::new("dmmf.json")
//!     .output_dir("src/generated")
//!     .class_validation(true)
//!     .generate()?;
//!
//! for file in files {
//!     println!("{}", file.path.display());
//! }
//! ```
//!
//! # Annotation synthesis
//!
//! ```rust
//! use nestjs_dto_codegen::codegen::{synthesize_validators, FieldDescriptor};
//! use nestjs_dto_codegen::parser::FieldKind;
//!
//! let field = FieldDescriptor {
//!     name: "age".into(),
//!     kind: FieldKind::Scalar,
//!     scalar_type: "Int".into(),
//!     is_required: true,
//!     is_list: false,
//!     relation_name: None,
//!     documentation: Some("@Min(18)".into()),
//! };
//! let validators = synthesize_validators(&field, |name| format!("Create{name}Dto"));
//! let names: Vec<&str> = validators.iter().map(|v| v.name.as_str()).collect();
//! assert_eq!(names, ["IsNotEmpty", "IsInt", "Min"]);
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! nestjs-dto-codegen --schema dmmf.json --output ./src/generated render
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod parser;

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

pub use codegen::GeneratedFile;
pub use config::{CodegenConfig, OutputType};
pub use error::{CodegenError, Result};

/// Main entry point for code generation
pub fn generate(config: &CodegenConfig) -> Result<Vec<GeneratedFile>> {
    info!("Parsing DMMF: {:?}", config.schema_file);
    let json = std::fs::read_to_string(&config.schema_file)?;
    let datamodel = parser::parse_datamodel(&json)?;
    generate_from_datamodel(&datamodel, config)
}

/// Generate files from an already parsed datamodel
pub fn generate_from_datamodel(
    datamodel: &parser::Datamodel,
    config: &CodegenConfig,
) -> Result<Vec<GeneratedFile>> {
    config.validate_options()?;
    info!(
        "Found {} models, {} enums, {} types",
        datamodel.models.len(),
        datamodel.enums.len(),
        datamodel.types.len()
    );

    let models = filter_models(&datamodel.models, &config.include_models, &config.exclude_models);
    debug!(
        "After filtering: {} models (include={}, exclude={})",
        models.len(),
        config.include_models,
        config.exclude_models
    );

    let files = codegen::CodeGenerator::new(datamodel, config).generate(&models)?;
    info!("Generated {} files", files.len());
    Ok(files)
}

/// Filter models based on include/exclude patterns
pub fn filter_models<'a>(
    models: &'a [parser::Model],
    include: &str,
    exclude: &str,
) -> Vec<&'a parser::Model> {
    let include_all = include.trim() == "*" || include.trim().is_empty();
    let include_set: HashSet<&str> = if include_all {
        HashSet::new()
    } else {
        include.split(',').map(str::trim).collect()
    };
    let exclude_set: HashSet<&str> = exclude
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    models
        .iter()
        .filter(|m| {
            let name = m.name.as_str();
            let included = include_all || include_set.contains(name);
            let excluded = exclude_set.contains(name);
            included && !excluded
        })
        .collect()
}

/// Builder pattern for programmatic configuration
pub struct CodegenBuilder {
    config: CodegenConfig,
}

impl CodegenBuilder {
    /// Create a new builder with the given DMMF file
    pub fn new(schema_file: impl AsRef<Path>) -> Self {
        Self {
            config: CodegenConfig::default_with_schema(schema_file.as_ref().to_path_buf()),
        }
    }

    /// Set the root directory of the generated paths
    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set models to include
    pub fn include_models(mut self, models: &[&str]) -> Self {
        self.config.include_models = models.join(",");
        self
    }

    /// Set models to exclude
    pub fn exclude_models(mut self, models: &[&str]) -> Self {
        self.config.exclude_models = models.join(",");
        self
    }

    /// Generate classes or interfaces
    pub fn output_type(mut self, output_type: OutputType) -> Self {
        self.config.output_type = output_type;
        self
    }

    /// Emit class-validator decorators
    pub fn class_validation(mut self, enabled: bool) -> Self {
        self.config.class_validation = enabled;
        self
    }

    /// Emit code without `@prisma/client` and `@nestjs/swagger` dependencies
    pub fn no_dependencies(mut self, enabled: bool) -> Self {
        self.config.no_dependencies = enabled;
        self
    }

    /// Set the suffix of every DTO class name
    pub fn dto_suffix(mut self, suffix: &str) -> Self {
        self.config.dto_suffix = suffix.to_string();
        self
    }

    /// Set the prefix and suffix of entity class names
    pub fn entity_affixes(mut self, prefix: &str, suffix: &str) -> Self {
        self.config.entity_prefix = prefix.to_string();
        self.config.entity_suffix = suffix.to_string();
        self
    }

    /// Lay files out as `<model>/dto` and `<model>/entities`
    pub fn nestjs_resource_structure(mut self) -> Self {
        self.config.output_to_nestjs_resource_structure = true;
        self
    }

    /// Add an `index.ts` re-exporting every file per directory
    pub fn re_export(mut self) -> Self {
        self.config.re_export = true;
        self
    }

    /// The configuration built so far
    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    /// Generate the files
    pub fn generate(self) -> Result<Vec<GeneratedFile>> {
        self.config.validate()?;
        generate(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_datamodel;

    #[test]
    fn test_filter_models() {
        let datamodel = parse_datamodel(
            r#"{ "models": [{ "name": "User" }, { "name": "Post" }, { "name": "Log" }] }"#,
        )
        .unwrap();
        let names = |models: Vec<&parser::Model>| -> Vec<String> {
            models.iter().map(|m| m.name.clone()).collect()
        };

        assert_eq!(names(filter_models(&datamodel.models, "*", "")), vec!["User", "Post", "Log"]);
        assert_eq!(names(filter_models(&datamodel.models, "User, Log", "")), vec!["User", "Log"]);
        assert_eq!(names(filter_models(&datamodel.models, "*", "Log")), vec!["User", "Post"]);
        assert_eq!(names(filter_models(&datamodel.models, "", "User,Post")), vec!["Log"]);
    }

    #[test]
    fn test_builder_sets_options() {
        let builder = CodegenBuilder::new("dmmf.json")
            .output_dir("gen")
            .include_models(&["User", "Post"])
            .class_validation(true)
            .nestjs_resource_structure()
            .re_export();
        let config = builder.config();
        assert_eq!(config.output_dir, Path::new("gen"));
        assert_eq!(config.include_models, "User,Post");
        assert!(config.class_validation);
        assert!(config.output_to_nestjs_resource_structure);
        assert!(config.re_export);
    }

    #[test]
    fn test_generate_rejects_invalid_options() {
        let datamodel = parse_datamodel(r#"{ "models": [] }"#).unwrap();
        let config = CodegenConfig {
            class_validation: true,
            output_type: OutputType::Interface,
            ..Default::default()
        };
        let err = generate_from_datamodel(&datamodel, &config).unwrap_err();
        assert!(matches!(err, CodegenError::ValidationError(_)));
    }
}
