//! Generator annotations recognised in schema documentation comments

pub const DTO_IGNORE_MODEL: &str = "@DtoIgnoreModel";
pub const DTO_READ_ONLY: &str = "@DtoReadOnly";
pub const DTO_ENTITY_HIDDEN: &str = "@DtoEntityHidden";
pub const DTO_API_HIDDEN: &str = "@DtoApiHidden";
pub const DTO_CREATE_OPTIONAL: &str = "@DtoCreateOptional";
pub const DTO_UPDATE_OPTIONAL: &str = "@DtoUpdateOptional";
pub const DTO_RELATION_REQUIRED: &str = "@DtoRelationRequired";
pub const DTO_RELATION_CAN_CREATE_ON_CREATE: &str = "@DtoRelationCanCreateOnCreate";
pub const DTO_RELATION_CAN_CONNECT_ON_CREATE: &str = "@DtoRelationCanConnectOnCreate";
pub const DTO_RELATION_CAN_CREATE_ON_UPDATE: &str = "@DtoRelationCanCreateOnUpdate";
pub const DTO_RELATION_CAN_CONNECT_ON_UPDATE: &str = "@DtoRelationCanConnectOnUpdate";
pub const DTO_RELATION_INCLUDE_ID: &str = "@DtoRelationIncludeId";
pub const DTO_TYPE_FULL_UPDATE: &str = "@DtoTypeFullUpdate";

pub const DTO_RELATION_MODIFIERS_ON_CREATE: &[&str] = &[
    DTO_RELATION_CAN_CREATE_ON_CREATE,
    DTO_RELATION_CAN_CONNECT_ON_CREATE,
];

pub const DTO_RELATION_MODIFIERS_ON_UPDATE: &[&str] = &[
    DTO_RELATION_CAN_CREATE_ON_UPDATE,
    DTO_RELATION_CAN_CONNECT_ON_UPDATE,
];

/// Whether the documentation contains `annotation`
pub fn is_annotated_with(documentation: Option<&str>, annotation: &str) -> bool {
    documentation.is_some_and(|doc| doc.contains(annotation))
}

/// Whether the documentation contains any of `annotations`
pub fn is_annotated_with_one_of(documentation: Option<&str>, annotations: &[&str]) -> bool {
    annotations
        .iter()
        .any(|annotation| is_annotated_with(documentation, annotation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_annotated_with() {
        assert!(is_annotated_with(Some("@DtoReadOnly"), DTO_READ_ONLY));
        assert!(is_annotated_with(
            Some("the id\n@DtoCreateOptional"),
            DTO_CREATE_OPTIONAL
        ));
        assert!(!is_annotated_with(Some("@DtoUpdateOptional"), DTO_CREATE_OPTIONAL));
        assert!(!is_annotated_with(None, DTO_READ_ONLY));
    }

    #[test]
    fn test_is_annotated_with_one_of() {
        let doc = Some("@DtoRelationCanConnectOnCreate");
        assert!(is_annotated_with_one_of(doc, DTO_RELATION_MODIFIERS_ON_CREATE));
        assert!(!is_annotated_with_one_of(doc, DTO_RELATION_MODIFIERS_ON_UPDATE));
    }
}
