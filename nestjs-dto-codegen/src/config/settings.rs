//! Configuration settings for nestjs-dto-codegen

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use super::defaults;
use crate::error::{CodegenError, Result};

/// Shape of the generated TypeScript declarations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    #[default]
    Class,
    Interface,
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputType::Class => f.write_str("class"),
            OutputType::Interface => f.write_str("interface"),
        }
    }
}

/// Main configuration struct for code generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodegenConfig {
    /// Path to the DMMF JSON file
    #[serde(default)]
    pub schema_file: PathBuf,

    /// Root directory the generated file paths are relative to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Models to include (comma-separated, or "*" for all)
    #[serde(default = "default_include_models")]
    pub include_models: String,

    /// Models to exclude (comma-separated)
    #[serde(default = "default_exclude_models")]
    pub exclude_models: String,

    #[serde(default = "default_connect_dto_prefix")]
    pub connect_dto_prefix: String,

    #[serde(default = "default_create_dto_prefix")]
    pub create_dto_prefix: String,

    #[serde(default = "default_update_dto_prefix")]
    pub update_dto_prefix: String,

    #[serde(default = "default_dto_suffix")]
    pub dto_suffix: String,

    #[serde(default = "default_entity_prefix")]
    pub entity_prefix: String,

    #[serde(default = "default_entity_suffix")]
    pub entity_suffix: String,

    /// Emit `export class` or `export interface`
    #[serde(default)]
    pub output_type: OutputType,

    /// Emit class-validator / class-transformer decorators
    #[serde(default = "default_class_validation")]
    pub class_validation: bool,

    /// Generated code must not import anything outside the output directory
    #[serde(default = "default_no_dependencies")]
    pub no_dependencies: bool,

    /// Export the generated `*RelationInput*` helper classes
    #[serde(default = "default_export_relation_modifier_classes")]
    pub export_relation_modifier_classes: bool,

    /// Use `<model>/dto` and `<model>/entities` subdirectories
    #[serde(default = "default_output_to_nestjs_resource_structure")]
    pub output_to_nestjs_resource_structure: bool,

    /// Emit an `index.ts` re-exporting every file of a directory
    #[serde(default = "default_re_export")]
    pub re_export: bool,

    /// Log level (trace, debug, info, warn, error)
    /// Can be overridden by RUST_LOG env var
    #[serde(default)]
    pub log_level: Option<String>,
}

// Default value functions for serde
fn default_output_dir() -> PathBuf {
    PathBuf::from(defaults::OUTPUT_DIR)
}
fn default_include_models() -> String {
    defaults::INCLUDE_MODELS.to_string()
}
fn default_exclude_models() -> String {
    defaults::EXCLUDE_MODELS.to_string()
}
fn default_connect_dto_prefix() -> String {
    defaults::CONNECT_DTO_PREFIX.to_string()
}
fn default_create_dto_prefix() -> String {
    defaults::CREATE_DTO_PREFIX.to_string()
}
fn default_update_dto_prefix() -> String {
    defaults::UPDATE_DTO_PREFIX.to_string()
}
fn default_dto_suffix() -> String {
    defaults::DTO_SUFFIX.to_string()
}
fn default_entity_prefix() -> String {
    defaults::ENTITY_PREFIX.to_string()
}
fn default_entity_suffix() -> String {
    defaults::ENTITY_SUFFIX.to_string()
}
fn default_class_validation() -> bool {
    defaults::CLASS_VALIDATION
}
fn default_no_dependencies() -> bool {
    defaults::NO_DEPENDENCIES
}
fn default_export_relation_modifier_classes() -> bool {
    defaults::EXPORT_RELATION_MODIFIER_CLASSES
}
fn default_output_to_nestjs_resource_structure() -> bool {
    defaults::OUTPUT_TO_NESTJS_RESOURCE_STRUCTURE
}
fn default_re_export() -> bool {
    defaults::RE_EXPORT
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            schema_file: PathBuf::new(),
            output_dir: default_output_dir(),
            include_models: default_include_models(),
            exclude_models: default_exclude_models(),
            connect_dto_prefix: default_connect_dto_prefix(),
            create_dto_prefix: default_create_dto_prefix(),
            update_dto_prefix: default_update_dto_prefix(),
            dto_suffix: default_dto_suffix(),
            entity_prefix: default_entity_prefix(),
            entity_suffix: default_entity_suffix(),
            output_type: OutputType::default(),
            class_validation: default_class_validation(),
            no_dependencies: default_no_dependencies(),
            export_relation_modifier_classes: default_export_relation_modifier_classes(),
            output_to_nestjs_resource_structure: default_output_to_nestjs_resource_structure(),
            re_export: default_re_export(),
            log_level: None,
        }
    }
}

impl CodegenConfig {
    /// Create a default config with the given schema file
    pub fn default_with_schema(schema_file: PathBuf) -> Self {
        Self {
            schema_file,
            ..Default::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CodegenConfig = toml::from_str(&content).map_err(|e| {
            CodegenError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// Load configuration using config-rs (file + environment variables)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        } else {
            builder = builder.add_source(File::with_name("nestjs-dto-codegen").required(false));
        }

        // Override with environment variables (NESTJS_DTO_CODEGEN__*)
        builder = builder.add_source(
            Environment::with_prefix("NESTJS_DTO_CODEGEN")
                .prefix_separator("__")
                .separator("__"),
        );

        let config: CodegenConfig = builder.build()?.try_deserialize()?;

        Ok(config)
    }

    /// Validate only the option combinations, without touching the filesystem
    pub fn validate_options(&self) -> Result<()> {
        if self.class_validation && self.output_type != OutputType::Class {
            return Err(CodegenError::ValidationError(
                "To use class validation decorators, 'output_type' must be 'class'".into(),
            ));
        }

        if self.class_validation && self.no_dependencies {
            return Err(CodegenError::ValidationError(
                "To use class validation decorators, 'no_dependencies' must be false".into(),
            ));
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.schema_file.as_os_str().is_empty() {
            return Err(CodegenError::ValidationError(
                "schema_file is required".into(),
            ));
        }

        if !self.schema_file.exists() {
            return Err(CodegenError::ValidationError(format!(
                "Schema file not found: {}",
                self.schema_file.display()
            )));
        }

        self.validate_options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CodegenConfig::default();
        assert_eq!(config.include_models, "*");
        assert_eq!(config.create_dto_prefix, "Create");
        assert_eq!(config.dto_suffix, "Dto");
        assert_eq!(config.output_type, OutputType::Class);
        assert!(!config.class_validation);
        assert!(config.export_relation_modifier_classes);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_validation_missing_schema() {
        let config = CodegenConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_class_validation_requires_class_output() {
        let config = CodegenConfig {
            class_validation: true,
            output_type: OutputType::Interface,
            ..Default::default()
        };
        let err = config.validate_options().unwrap_err();
        assert!(err.to_string().contains("output_type"));
    }

    #[test]
    fn test_class_validation_conflicts_with_no_dependencies() {
        let config = CodegenConfig {
            class_validation: true,
            no_dependencies: true,
            ..Default::default()
        };
        let err = config.validate_options().unwrap_err();
        assert!(err.to_string().contains("no_dependencies"));
    }

    #[test]
    fn test_config_from_toml() {
        let toml_content = r#"
            schema_file = "dmmf.json"
            log_level = "debug"
            output_type = "interface"
            dto_suffix = "Input"
        "#;
        let config: CodegenConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.log_level, Some("debug".to_string()));
        assert_eq!(config.output_type, OutputType::Interface);
        assert_eq!(config.dto_suffix, "Input");
        assert_eq!(config.create_dto_prefix, "Create");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "schema_file = \"dmmf.json\"").unwrap();
        writeln!(file, "class_validation = true").unwrap();

        let config = CodegenConfig::from_file(file.path()).unwrap();
        assert_eq!(config.schema_file, PathBuf::from("dmmf.json"));
        assert!(config.class_validation);
    }

    #[test]
    fn test_validate_existing_schema_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = CodegenConfig::default_with_schema(file.path().to_path_buf());
        assert!(config.validate().is_ok());
    }
}
