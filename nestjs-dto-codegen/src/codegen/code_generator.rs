//! Main code generator orchestrator

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::debug;

use crate::config::CodegenConfig;
use crate::error::Result;
use crate::parser::{Datamodel, Model};

use super::annotations::{is_annotated_with, DTO_IGNORE_MODEL};
use super::model_params::{DtoParams, ModelResolver};
use super::template::{render_dto, render_index};

/// A rendered TypeScript file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path including the configured output directory
    pub path: PathBuf,
    pub content: String,
}

/// Main code generator that orchestrates DTO and entity generation
pub struct CodeGenerator<'a> {
    datamodel: &'a Datamodel,
    config: &'a CodegenConfig,
}

impl<'a> CodeGenerator<'a> {
    /// Create a new code generator for a datamodel
    pub fn new(datamodel: &'a Datamodel, config: &'a CodegenConfig) -> Self {
        Self { datamodel, config }
    }

    /// Resolve the params of every file generated for `models` and the
    /// datamodel's composite types
    pub fn compute_params(&self, models: &[&Model]) -> Result<Vec<DtoParams>> {
        let resolver = ModelResolver::new(self.datamodel, self.config);
        let mut params = Vec::new();

        for ty in &self.datamodel.types {
            if is_ignored(ty) {
                debug!("Skipping ignored type {}", ty.name);
                continue;
            }
            params.extend(resolver.compute_type_params(ty)?);
        }
        for model in models {
            if is_ignored(model) {
                debug!("Skipping ignored model {}", model.name);
                continue;
            }
            params.extend(resolver.compute_model_params(model)?);
        }

        Ok(params)
    }

    /// Generate all files for `models`
    pub fn generate(&self, models: &[&Model]) -> Result<Vec<GeneratedFile>> {
        let params = self.compute_params(models)?;
        let mut files = Vec::with_capacity(params.len());
        let mut index: BTreeMap<PathBuf, Vec<String>> = BTreeMap::new();

        for dto in &params {
            debug!("Rendering {} -> {}", dto.class_name, dto.path().display());
            files.push(GeneratedFile {
                path: self.config.output_dir.join(dto.path()),
                content: render_dto(dto, self.config.output_type),
            });
            if self.config.re_export {
                index
                    .entry(dto.dir.clone())
                    .or_default()
                    .push(dto.file_name.clone());
            }
        }

        for (dir, file_names) in index {
            files.push(GeneratedFile {
                path: self.config.output_dir.join(dir).join("index.ts"),
                content: render_index(&file_names),
            });
        }

        Ok(files)
    }
}

fn is_ignored(model: &Model) -> bool {
    is_annotated_with(model.documentation.as_deref(), DTO_IGNORE_MODEL)
}
