//! DMMF input module
//!
//! Prisma hands generators an already-parsed description of the schema. This
//! module only deserialises that JSON document.

mod dmmf_loader;
mod metadata;

pub use dmmf_loader::*;
pub use metadata::*;
