//! DMMF loader using serde_json

use serde::Deserialize;

use super::metadata::*;
use crate::error::Result;

/// Either a full DMMF document or just its datamodel section
#[derive(Deserialize)]
#[serde(untagged)]
enum DmmfInput {
    Document { datamodel: Datamodel },
    Datamodel(Datamodel),
}

/// Parse a DMMF JSON string into the datamodel
pub fn parse_datamodel(json: &str) -> Result<Datamodel> {
    let input: DmmfInput = serde_json::from_str(json)?;
    Ok(match input {
        DmmfInput::Document { datamodel } => datamodel,
        DmmfInput::Datamodel(datamodel) => datamodel,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_datamodel() {
        let json = r#"{
            "models": [{
                "name": "User",
                "fields": [
                    { "name": "id", "kind": "scalar", "type": "Int", "isRequired": true,
                      "isId": true, "hasDefaultValue": true,
                      "default": { "name": "autoincrement", "args": [] } },
                    { "name": "email", "kind": "scalar", "type": "String", "isRequired": true,
                      "isUnique": true, "documentation": "@IsEmail()" }
                ]
            }],
            "enums": [],
            "types": []
        }"#;

        let datamodel = parse_datamodel(json).unwrap();
        assert_eq!(datamodel.models.len(), 1);
        let user = datamodel.get_model("User").unwrap();
        assert_eq!(user.fields.len(), 2);
        assert!(user.fields[0].is_id);
        assert_eq!(user.fields[0].kind, FieldKind::Scalar);
        assert_eq!(user.get_field("email").unwrap().doc(), "@IsEmail()");
        assert!(user.fields[1].relation_name.is_none());
    }

    #[test]
    fn test_parse_full_document() {
        let json = r#"{
            "datamodel": {
                "models": [],
                "enums": [{ "name": "Role", "values": [{ "name": "USER" }, { "name": "ADMIN" }] }],
                "types": [{ "name": "Address", "fields": [
                    { "name": "street", "kind": "scalar", "type": "String", "isRequired": true }
                ] }]
            },
            "schema": {},
            "mappings": {}
        }"#;

        let datamodel = parse_datamodel(json).unwrap();
        assert_eq!(datamodel.enums[0].values.len(), 2);
        assert!(datamodel.get_type("Address").is_some());
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse_datamodel("{ not json").is_err());
    }
}
