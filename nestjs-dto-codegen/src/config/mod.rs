//! Configuration for nestjs-dto-codegen

pub mod defaults;
mod settings;

pub use settings::*;
