//! Naming utilities for code generation

use heck::{ToKebabCase, ToPascalCase};

use crate::config::CodegenConfig;

/// Convert a model name to the base of a class name (PascalCase)
pub fn to_class_name(model_name: &str) -> String {
    model_name.to_pascal_case()
}

/// Convert a model name to the base of a file name (kebab-case)
pub fn to_file_name(model_name: &str) -> String {
    model_name.to_kebab_case()
}

/// Class and file names of everything generated for a model
#[derive(Debug, Clone)]
pub struct Naming {
    connect_prefix: String,
    create_prefix: String,
    update_prefix: String,
    dto_suffix: String,
    entity_prefix: String,
    entity_suffix: String,
}

impl Naming {
    pub fn new(config: &CodegenConfig) -> Self {
        Self {
            connect_prefix: config.connect_dto_prefix.clone(),
            create_prefix: config.create_dto_prefix.clone(),
            update_prefix: config.update_dto_prefix.clone(),
            dto_suffix: config.dto_suffix.clone(),
            entity_prefix: config.entity_prefix.clone(),
            entity_suffix: config.entity_suffix.clone(),
        }
    }

    /// e.g. "user" -> "ConnectUserDto"
    pub fn connect_dto_name(&self, name: &str) -> String {
        format!("{}{}{}", self.connect_prefix, to_class_name(name), self.dto_suffix)
    }

    /// e.g. "user" -> "CreateUserDto"
    pub fn create_dto_name(&self, name: &str) -> String {
        format!("{}{}{}", self.create_prefix, to_class_name(name), self.dto_suffix)
    }

    /// e.g. "user" -> "UpdateUserDto"
    pub fn update_dto_name(&self, name: &str) -> String {
        format!("{}{}{}", self.update_prefix, to_class_name(name), self.dto_suffix)
    }

    /// e.g. "user" -> "UserDto"
    pub fn plain_dto_name(&self, name: &str) -> String {
        format!("{}{}", to_class_name(name), self.dto_suffix)
    }

    /// e.g. "user" -> "User"
    pub fn entity_name(&self, name: &str) -> String {
        format!("{}{}{}", self.entity_prefix, to_class_name(name), self.entity_suffix)
    }

    pub fn connect_dto_filename(&self, name: &str) -> String {
        format!("connect-{}.dto.ts", to_file_name(name))
    }

    pub fn create_dto_filename(&self, name: &str) -> String {
        format!("create-{}.dto.ts", to_file_name(name))
    }

    pub fn update_dto_filename(&self, name: &str) -> String {
        format!("update-{}.dto.ts", to_file_name(name))
    }

    pub fn plain_dto_filename(&self, name: &str) -> String {
        format!("{}.dto.ts", to_file_name(name))
    }

    pub fn entity_filename(&self, name: &str) -> String {
        format!("{}.entity.ts", to_file_name(name))
    }
}
