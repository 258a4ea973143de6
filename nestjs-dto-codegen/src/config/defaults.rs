//! Default configuration values - single source of truth

/// Default include models pattern (all models)
pub const INCLUDE_MODELS: &str = "*";

/// Default exclude models pattern (none)
pub const EXCLUDE_MODELS: &str = "";

/// Default output directory for generated TypeScript files
pub const OUTPUT_DIR: &str = "./src/generated/nestjs-dto";

/// Class name prefix for connect DTOs
pub const CONNECT_DTO_PREFIX: &str = "Connect";

/// Class name prefix for create DTOs
pub const CREATE_DTO_PREFIX: &str = "Create";

/// Class name prefix for update DTOs
pub const UPDATE_DTO_PREFIX: &str = "Update";

/// Class name suffix shared by all DTOs
pub const DTO_SUFFIX: &str = "Dto";

/// Class name prefix for entities
pub const ENTITY_PREFIX: &str = "";

/// Class name suffix for entities
pub const ENTITY_SUFFIX: &str = "";

/// Whether to emit class-validator decorators
pub const CLASS_VALIDATION: bool = false;

/// Whether to avoid any runtime dependency in generated code
pub const NO_DEPENDENCIES: bool = false;

/// Whether relation input helper classes are exported
pub const EXPORT_RELATION_MODIFIER_CLASSES: bool = true;

/// Whether to lay files out as `<model>/dto` and `<model>/entities`
pub const OUTPUT_TO_NESTJS_RESOURCE_STRUCTURE: bool = false;

/// Whether to emit an `index.ts` per output directory
pub const RE_EXPORT: bool = false;
