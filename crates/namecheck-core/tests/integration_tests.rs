//! Integration tests for namecheck-core.

use namecheck_core::domain::{
    ArtifactKey, BlockDocumentName, DEFAULT_FIELD, NonEmptyishName, UriLike, ValidAssetKey,
    ValidationError, VariableName, rules,
};
use serde::{Deserialize, Serialize};

// A data-model record whose fields are validated on deserialization.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct AssetRecord {
    key: ValidAssetKey,
    block: BlockDocumentName,
    #[serde(default)]
    variable: Option<VariableName>,
}

#[test]
fn test_option_aware_rules_pass_none_through() {
    assert_eq!(rules::alphanumeric_dashes_only_opt(None, DEFAULT_FIELD), Ok(None));
    assert_eq!(
        rules::alphanumeric_underscores_only_opt(None, DEFAULT_FIELD),
        Ok(None)
    );
}

#[test]
fn test_non_emptyish_cases() {
    assert!(rules::non_emptyish("   ", "name").is_err());
    assert_eq!(rules::non_emptyish("'a'", "name"), Ok("'a'"));
    assert!(rules::non_emptyish("''", "name").is_err());
    assert!(NonEmptyishName::new("\"  \"").is_err());
}

#[test]
fn test_uri_cases() {
    assert_eq!(
        rules::validate_uri("s3://bucket/x", "Key"),
        Ok("s3://bucket/x")
    );
    assert!(rules::validate_uri("S3://bucket/x", "Key").is_err());
    assert!(rules::validate_uri("bucket/x", "Key").is_err());
    assert!(UriLike::new("postgres://dbtable").is_ok());
}

#[test]
fn test_asset_key_cases() {
    assert_eq!(
        rules::validate_valid_asset_key("s3://bucket/folder/data.csv", "Asset key"),
        Ok("s3://bucket/folder/data.csv")
    );

    let err = ValidAssetKey::new("s3://bucket/with space").unwrap_err();
    assert_eq!(err.to_string(), "Asset key cannot contain ' '");

    let long = format!("s3://{}", "a".repeat(508));
    assert_eq!(long.len(), 513);
    let err = ValidAssetKey::new(long).unwrap_err();
    assert_eq!(err.to_string(), "Asset key cannot exceed 512 characters");
}

#[test]
fn test_every_restricted_asset_character_is_rejected() {
    for c in namecheck_core::domain::RESTRICTED_ASSET_CHARACTERS {
        let key = format!("s3://bucket/a{c}b");
        let err = ValidAssetKey::new(key).unwrap_err();
        assert!(
            matches!(err, ValidationError::BannedCharacter { character, .. } if character == c),
            "{c:?}"
        );
    }
}

#[test]
fn test_record_deserializes_valid_fields() {
    let json = r#"{"key": "s3://bucket/data.csv", "block": "my-block", "variable": "my_var"}"#;
    let record: AssetRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.key, "s3://bucket/data.csv");
    assert_eq!(record.block.as_str(), "my-block");
    assert_eq!(record.variable.as_ref().map(|v| v.as_str()), Some("my_var"));
}

#[test]
fn test_record_rejects_invalid_field_with_validator_message() {
    let json = r#"{"key": "S3://bucket/data.csv", "block": "my-block"}"#;
    let err = serde_json::from_str::<AssetRecord>(json).unwrap_err();

    assert!(
        err.to_string().contains("Asset key must be a valid URI"),
        "{err}"
    );
}

#[test]
fn test_constrained_values_serialize_as_plain_strings() {
    let record = AssetRecord {
        key: ValidAssetKey::new("s3://bucket/data.csv").unwrap(),
        block: BlockDocumentName::new("my-block").unwrap(),
        variable: None,
    };
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["key"], "s3://bucket/data.csv");
    assert_eq!(json["block"], "my-block");
}

#[test]
fn test_artifact_keys_are_usable_as_map_keys() {
    use std::collections::HashMap;

    let mut reports: HashMap<ArtifactKey, u32> = HashMap::new();
    reports.insert(ArtifactKey::new("daily-report").unwrap(), 1);

    // Borrow<str> allows lookup by plain string.
    assert_eq!(reports.get("daily-report"), Some(&1));
}
