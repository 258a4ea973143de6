//! Code generation module

pub mod annotations;
pub mod api_property;
pub mod class_validator;
mod code_generator;
mod each_option;
pub mod field_classifiers;
pub mod imports;
mod model_params;
mod naming;
pub mod template;
mod type_resolver;
pub mod validator_catalog;

pub use class_validator::{decorate_class_validators, synthesize_validators, Annotation, FieldDescriptor};
pub use code_generator::*;
pub use each_option::wrap_each;
pub use model_params::*;
pub use naming::*;
pub use type_resolver::*;
