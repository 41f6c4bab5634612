// ============================================================================
// domain/error.rs - VALIDATION ERROR DOMAIN
// ============================================================================

use std::borrow::Cow;

use thiserror::Error;

use crate::domain::rules::CharacterClass;

/// A rejected value.
///
/// Every variant carries the field label supplied by the caller so the
/// message reads naturally ("Variable name cannot exceed 255 characters").
/// Errors are:
/// - Cloneable and comparable (tests match on them directly)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must only contain {class}.")]
    DisallowedCharacters {
        field: String,
        class: CharacterClass,
    },

    #[error("{field} cannot contain '{}'", escape_char(.character))]
    BannedCharacter { field: String, character: char },

    #[error("{field} cannot exceed {max} characters")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("{field} cannot be an empty string")]
    Empty { field: String },

    #[error("{field} must be a valid URI, e.g. storage://bucket/folder/asset.csv")]
    InvalidUri { field: String },
}

impl ValidationError {
    /// The field label this error was reported against.
    pub fn field(&self) -> &str {
        match self {
            Self::DisallowedCharacters { field, .. }
            | Self::BannedCharacter { field, .. }
            | Self::TooLong { field, .. }
            | Self::Empty { field }
            | Self::InvalidUri { field } => field,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DisallowedCharacters { class, .. } => vec![
                format!("Use only {class}"),
                "Convert uppercase letters to lowercase".into(),
                match class {
                    CharacterClass::Dashes => "Example: my-block-name".into(),
                    CharacterClass::Underscores => "Example: my_variable".into(),
                    CharacterClass::DashesOrUnderscores => {
                        "Examples: my-variable, my_variable".into()
                    }
                },
            ],
            Self::BannedCharacter { character, .. } => vec![
                format!("Remove or replace '{}'", escape_char(character)),
                "Keys that need such characters must percent-encode them before submission"
                    .into(),
            ],
            Self::TooLong { max, actual, .. } => vec![
                format!("Shorten the value by {} characters", actual - max),
                format!("The limit is {max} characters"),
            ],
            Self::Empty { .. } => vec![
                "Provide a value with at least one visible character".into(),
                "Surrounding quotes and spaces are not counted".into(),
            ],
            Self::InvalidUri { .. } => vec![
                "Start the value with a lowercase scheme followed by '://'".into(),
                "Examples: s3://bucket/folder/data.csv, postgres://dbtable".into(),
            ],
        }
    }
}

/// Render control characters as escapes so messages stay on one line.
fn escape_char(c: &char) -> Cow<'static, str> {
    match c {
        '\n' => Cow::Borrowed("\\n"),
        '\r' => Cow::Borrowed("\\r"),
        '\t' => Cow::Borrowed("\\t"),
        '\0' => Cow::Borrowed("\\0"),
        other => Cow::Owned(other.to_string()),
    }
}
