//! Primitive validation rules and the constants they share.
//!
//! Every rule is a pure function that hands back the input unchanged when it
//! passes, so rules chain with `?`. Composite presets live in
//! [`super::validation`]; nothing here knows about named types.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::ValidationError;

/// Label used in error messages when the caller supplies none.
pub const DEFAULT_FIELD: &str = "value";

/// Characters forbidden in general-purpose names.
pub const BANNED_CHARACTERS: [char; 5] = ['/', '%', '&', '>', '<'];

/// Characters forbidden anywhere in an asset key, in reporting order.
pub const RESTRICTED_ASSET_CHARACTERS: [char; 21] = [
    '\n', '\r', '\t', '\0', ' ', '#', '?', '&', '%', '"', '\'', '<', '>', '[', ']', '{', '}', '|',
    '\\', '^', '`',
];

pub const MAX_VARIABLE_NAME_LENGTH: usize = 255;

pub const MAX_ASSET_KEY_LENGTH: usize = 512;

/// Lowercase scheme followed by `://`. Anchored at the start only.
pub const URI_PATTERN: &str = r"^[a-z0-9]+://";

// `^`/`$` anchor at the text boundaries (no multi-line mode), so a trailing
// newline is rejected like any other character.
static DASHES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CharacterClass::Dashes.pattern()).unwrap());
static UNDERSCORES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CharacterClass::Underscores.pattern()).unwrap());
static DASHES_OR_UNDERSCORES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CharacterClass::DashesOrUnderscores.pattern()).unwrap());
static URI_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(URI_PATTERN).unwrap());

// ── Character classes ────────────────────────────────────────────────────────

/// The lowercase character classes enforced by the "only" rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    /// `[a-z0-9-]`
    Dashes,
    /// `[a-z0-9_]`
    Underscores,
    /// `[a-z0-9_-]`
    DashesOrUnderscores,
}

impl CharacterClass {
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Dashes => "^[a-z0-9-]*$",
            Self::Underscores => "^[a-z0-9_]*$",
            Self::DashesOrUnderscores => "^[a-z0-9_-]*$",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Dashes => "lowercase letters, numbers, and dashes",
            Self::Underscores => "lowercase letters, numbers, and underscores",
            Self::DashesOrUnderscores => "lowercase letters, numbers, and dashes or underscores",
        }
    }

    /// Whether the whole of `value` belongs to this class. The empty string
    /// always does.
    pub fn matches(self, value: &str) -> bool {
        self.regex().is_match(value)
    }

    fn regex(self) -> &'static Regex {
        match self {
            Self::Dashes => &*DASHES_REGEX,
            Self::Underscores => &*UNDERSCORES_REGEX,
            Self::DashesOrUnderscores => &*DASHES_OR_UNDERSCORES_REGEX,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

// ── Character-class rules ────────────────────────────────────────────────────

/// Require `value` to consist solely of characters from `class`.
pub fn alphanumeric_only<'a>(
    value: &'a str,
    class: CharacterClass,
    field: &str,
) -> Result<&'a str, ValidationError> {
    if class.matches(value) {
        Ok(value)
    } else {
        Err(ValidationError::DisallowedCharacters {
            field: field.to_owned(),
            class,
        })
    }
}

pub fn alphanumeric_dashes_only<'a>(value: &'a str, field: &str) -> Result<&'a str, ValidationError> {
    alphanumeric_only(value, CharacterClass::Dashes, field)
}

/// Like [`alphanumeric_dashes_only`], but an absent value passes through.
pub fn alphanumeric_dashes_only_opt<'a>(
    value: Option<&'a str>,
    field: &str,
) -> Result<Option<&'a str>, ValidationError> {
    value
        .map(|v| alphanumeric_dashes_only(v, field))
        .transpose()
}

pub fn alphanumeric_underscores_only<'a>(
    value: &'a str,
    field: &str,
) -> Result<&'a str, ValidationError> {
    alphanumeric_only(value, CharacterClass::Underscores, field)
}

/// Like [`alphanumeric_underscores_only`], but an absent value passes through.
pub fn alphanumeric_underscores_only_opt<'a>(
    value: Option<&'a str>,
    field: &str,
) -> Result<Option<&'a str>, ValidationError> {
    value
        .map(|v| alphanumeric_underscores_only(v, field))
        .transpose()
}

pub fn alphanumeric_dashes_or_underscores_only<'a>(
    value: &'a str,
    field: &str,
) -> Result<&'a str, ValidationError> {
    alphanumeric_only(value, CharacterClass::DashesOrUnderscores, field)
}

// ── Exclusion rules ──────────────────────────────────────────────────────────

/// First character of `set` (in set order) that occurs in `value`.
fn first_present(value: &str, set: &[char]) -> Option<char> {
    set.iter().copied().find(|c| value.contains(*c))
}

fn exclude<'a>(value: &'a str, set: &[char], field: &str) -> Result<&'a str, ValidationError> {
    match first_present(value, set) {
        Some(character) => Err(ValidationError::BannedCharacter {
            field: field.to_owned(),
            character,
        }),
        None => Ok(value),
    }
}

/// Reject empty values and values containing any of [`BANNED_CHARACTERS`].
pub fn without_banned_characters<'a>(
    value: &'a str,
    field: &str,
) -> Result<&'a str, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty {
            field: field.to_owned(),
        });
    }
    exclude(value, &BANNED_CHARACTERS, field)
}

/// Same as [`without_banned_characters`] but the empty string is accepted.
pub fn without_banned_characters_or_empty<'a>(
    value: &'a str,
    field: &str,
) -> Result<&'a str, ValidationError> {
    exclude(value, &BANNED_CHARACTERS, field)
}

/// Reject values that are empty once surrounding quotes and spaces are
/// stripped. Tabs and other whitespace are not stripped.
pub fn non_emptyish<'a>(value: &'a str, field: &str) -> Result<&'a str, ValidationError> {
    if value.trim_matches(['\'', ' ', '"']).is_empty() {
        return Err(ValidationError::Empty {
            field: field.to_owned(),
        });
    }
    Ok(value)
}

/// Length bound measured in characters, not bytes.
pub fn max_length<'a>(value: &'a str, max: usize, field: &str) -> Result<&'a str, ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong {
            field: field.to_owned(),
            max,
            actual,
        });
    }
    Ok(value)
}

// ── URI rules ────────────────────────────────────────────────────────────────

/// Require a lowercase scheme followed by `://`.
pub fn validate_uri<'a>(value: &'a str, field: &str) -> Result<&'a str, ValidationError> {
    if URI_REGEX.is_match(value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidUri {
            field: field.to_owned(),
        })
    }
}

/// Restricted characters, then length, then URI shape. The first failing
/// check is reported.
pub fn validate_valid_asset_key<'a>(
    value: &'a str,
    field: &str,
) -> Result<&'a str, ValidationError> {
    let value = exclude(value, &RESTRICTED_ASSET_CHARACTERS, field)?;
    let value = max_length(value, MAX_ASSET_KEY_LENGTH, field)?;
    validate_uri(value, field)
}
