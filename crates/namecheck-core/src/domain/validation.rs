use crate::domain::{
    error::ValidationError,
    rules::{
        self, MAX_VARIABLE_NAME_LENGTH, alphanumeric_dashes_only,
        alphanumeric_dashes_or_underscores_only, max_length, non_emptyish, validate_uri,
        validate_valid_asset_key, without_banned_characters,
    },
};

/// Centralized preset validation.
///
/// Each preset runs its sub-checks in a fixed order and stops at the first
/// failure. All presets return the input unchanged on success.
pub struct NameValidator;

impl NameValidator {
    pub fn name<'a>(value: &'a str, field: &str) -> Result<&'a str, ValidationError> {
        without_banned_characters(value, field)
    }

    pub fn name_or_empty<'a>(value: &'a str, field: &str) -> Result<&'a str, ValidationError> {
        rules::without_banned_characters_or_empty(value, field)
    }

    /// Banned characters first, then the dashes-only class.
    pub fn block_document_name<'a>(
        value: &'a str,
        field: &str,
    ) -> Result<&'a str, ValidationError> {
        let value = without_banned_characters(value, field)?;
        alphanumeric_dashes_only(value, field)
    }

    pub fn block_type_slug<'a>(value: &'a str, field: &str) -> Result<&'a str, ValidationError> {
        alphanumeric_dashes_only(value, field)
    }

    pub fn artifact_key<'a>(value: &'a str, field: &str) -> Result<&'a str, ValidationError> {
        alphanumeric_dashes_only(value, field)
    }

    /// Character class first, then the 255-character limit.
    pub fn variable_name<'a>(value: &'a str, field: &str) -> Result<&'a str, ValidationError> {
        let value = alphanumeric_dashes_or_underscores_only(value, field)?;
        max_length(value, MAX_VARIABLE_NAME_LENGTH, field)
    }

    /// Emptiness is judged before banned characters.
    pub fn non_emptyish_name<'a>(value: &'a str, field: &str) -> Result<&'a str, ValidationError> {
        let value = non_emptyish(value, field)?;
        without_banned_characters(value, field)
    }

    pub fn uri_like<'a>(value: &'a str, field: &str) -> Result<&'a str, ValidationError> {
        validate_uri(value, field)
    }

    pub fn valid_asset_key<'a>(value: &'a str, field: &str) -> Result<&'a str, ValidationError> {
        validate_valid_asset_key(value, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_document_name_checks_banned_characters_first() {
        let err = NameValidator::block_document_name("My/Block", "Block document name").unwrap_err();
        assert_eq!(err.to_string(), "Block document name cannot contain '/'");

        let err = NameValidator::block_document_name("MyBlock", "Block document name").unwrap_err();
        assert!(matches!(err, ValidationError::DisallowedCharacters { .. }));
    }

    #[test]
    fn block_document_name_rejects_empty_but_slug_accepts_it() {
        assert!(NameValidator::block_document_name("", "Block document name").is_err());
        assert_eq!(NameValidator::block_type_slug("", "Block type slug"), Ok(""));
    }

    #[test]
    fn variable_name_limit() {
        let ok = "a".repeat(MAX_VARIABLE_NAME_LENGTH);
        assert!(NameValidator::variable_name(&ok, "Variable name").is_ok());

        let long = "a".repeat(MAX_VARIABLE_NAME_LENGTH + 1);
        let err = NameValidator::variable_name(&long, "Variable name").unwrap_err();
        assert_eq!(err.to_string(), "Variable name cannot exceed 255 characters");
    }

    #[test]
    fn non_emptyish_name_checks_emptiness_before_banned_characters() {
        let err = NameValidator::non_emptyish_name("''", "Name").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));

        let err = NameValidator::non_emptyish_name("'a/b'", "Name").unwrap_err();
        assert!(matches!(err, ValidationError::BannedCharacter { character: '/', .. }));

        assert_eq!(NameValidator::non_emptyish_name("My Flow", "Name"), Ok("My Flow"));
    }
}
