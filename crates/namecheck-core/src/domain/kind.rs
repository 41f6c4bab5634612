//! `NameKind`: the catalogue of named constrained-string types.
//!
//! # Adding New Kinds
//!
//! 1. Add the enum variant and its `as_str`, `field_label`, `description`
//!    and `example` arms here
//! 2. Add the preset chain to `validation.rs`
//! 3. Declare the newtype in `value_objects.rs`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{
    error::ValidationError,
    rules::{MAX_ASSET_KEY_LENGTH, MAX_VARIABLE_NAME_LENGTH},
    validation::NameValidator,
};

/// A named constrained-string type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameKind {
    Name,
    NameOrEmpty,
    BlockDocumentName,
    BlockTypeSlug,
    ArtifactKey,
    VariableName,
    NonEmptyishName,
    UriLike,
    ValidAssetKey,
}

impl NameKind {
    pub const ALL: [NameKind; 9] = [
        Self::Name,
        Self::NameOrEmpty,
        Self::BlockDocumentName,
        Self::BlockTypeSlug,
        Self::ArtifactKey,
        Self::VariableName,
        Self::NonEmptyishName,
        Self::UriLike,
        Self::ValidAssetKey,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::NameOrEmpty => "name-or-empty",
            Self::BlockDocumentName => "block-document-name",
            Self::BlockTypeSlug => "block-type-slug",
            Self::ArtifactKey => "artifact-key",
            Self::VariableName => "variable-name",
            Self::NonEmptyishName => "non-emptyish-name",
            Self::UriLike => "uri-like",
            Self::ValidAssetKey => "valid-asset-key",
        }
    }

    /// Label used in error messages when the caller does not override it.
    pub const fn field_label(&self) -> &'static str {
        match self {
            Self::Name | Self::NameOrEmpty | Self::NonEmptyishName => "Name",
            Self::BlockDocumentName => "Block document name",
            Self::BlockTypeSlug => "Block type slug",
            Self::ArtifactKey => "Artifact key",
            Self::VariableName => "Variable name",
            Self::UriLike => "Key",
            Self::ValidAssetKey => "Asset key",
        }
    }

    /// Shorter spellings accepted wherever a kind is parsed from text.
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Name | Self::NameOrEmpty => &[],
            Self::BlockDocumentName => &["block-document"],
            Self::BlockTypeSlug => &["block-type"],
            Self::ArtifactKey => &["artifact"],
            Self::VariableName => &["variable"],
            Self::NonEmptyishName => &["non-empty-name"],
            Self::UriLike => &["uri"],
            Self::ValidAssetKey => &["asset-key"],
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Name => "Non-empty name without / % & > <",
            Self::NameOrEmpty => "Name without / % & > <, may be empty",
            Self::BlockDocumentName => "Lowercase letters, numbers, and dashes; no banned characters",
            Self::BlockTypeSlug => "Lowercase letters, numbers, and dashes",
            Self::ArtifactKey => "Lowercase letters, numbers, and dashes",
            Self::VariableName => "Lowercase letters, numbers, dashes or underscores; max 255",
            Self::NonEmptyishName => "Name that is not blank once quotes and spaces are stripped",
            Self::UriLike => "URI-like string with a lowercase scheme",
            Self::ValidAssetKey => "URI-like asset key, restricted characters, max 512",
        }
    }

    pub const fn example(&self) -> &'static str {
        match self {
            Self::Name => "My Flow Run",
            Self::NameOrEmpty => "nightly etl",
            Self::BlockDocumentName => "my-block",
            Self::BlockTypeSlug => "aws-credentials",
            Self::ArtifactKey => "daily-report",
            Self::VariableName => "my_variable",
            Self::NonEmptyishName => "deployment one",
            Self::UriLike => "s3://bucket/folder/data.csv",
            Self::ValidAssetKey => "postgres://dbtable",
        }
    }

    pub const fn max_length(&self) -> Option<usize> {
        match self {
            Self::VariableName => Some(MAX_VARIABLE_NAME_LENGTH),
            Self::ValidAssetKey => Some(MAX_ASSET_KEY_LENGTH),
            _ => None,
        }
    }

    /// Run this kind's ordered checks, labelling errors with `field`.
    pub fn validate<'a>(self, value: &'a str, field: &str) -> Result<&'a str, ValidationError> {
        match self {
            Self::Name => NameValidator::name(value, field),
            Self::NameOrEmpty => NameValidator::name_or_empty(value, field),
            Self::BlockDocumentName => NameValidator::block_document_name(value, field),
            Self::BlockTypeSlug => NameValidator::block_type_slug(value, field),
            Self::ArtifactKey => NameValidator::artifact_key(value, field),
            Self::VariableName => NameValidator::variable_name(value, field),
            Self::NonEmptyishName => NameValidator::non_emptyish_name(value, field),
            Self::UriLike => NameValidator::uri_like(value, field),
            Self::ValidAssetKey => NameValidator::valid_asset_key(value, field),
        }
    }

    /// [`Self::validate`] with this kind's own field label.
    pub fn check(self, value: &str) -> Result<&str, ValidationError> {
        self.validate(value, self.field_label())
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown name kind: {0}")]
pub struct ParseNameKindError(pub String);

impl FromStr for NameKind {
    type Err = ParseNameKindError;

    /// Matches the kebab-case name or an alias, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| {
                std::iter::once(kind.as_str())
                    .chain(kind.aliases().iter().copied())
                    .any(|name| name.eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| ParseNameKindError(s.to_owned()))
    }
}
