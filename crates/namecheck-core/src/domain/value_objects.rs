//! Domain value objects: validated name and key newtypes.
//!
//! # Design
//!
//! Each type wraps a `String` that has passed its kind's checks. The only
//! ways in are fallible (`new`, `FromStr`, `TryFrom`, serde), so holding a
//! value is proof it is valid. Serialization emits the bare string.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{error::ValidationError, kind::NameKind};

macro_rules! constrained_string {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const KIND: NameKind = $kind;

            /// Validate `value` and wrap it.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                Self::KIND.check(&value)?;
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ValidationError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

constrained_string! {
    /// Non-empty name free of `/ % & > <`.
    Name => NameKind::Name
}

constrained_string! {
    /// Like [`Name`], but the empty string is allowed.
    NameOrEmpty => NameKind::NameOrEmpty
}

constrained_string! {
    /// Block document name: a [`Name`] made of lowercase letters, numbers, and dashes.
    BlockDocumentName => NameKind::BlockDocumentName
}

constrained_string! {
    BlockTypeSlug => NameKind::BlockTypeSlug
}

constrained_string! {
    ArtifactKey => NameKind::ArtifactKey
}

constrained_string! {
    /// Lowercase letters, numbers, dashes or underscores; at most 255 characters.
    VariableName => NameKind::VariableName
}

constrained_string! {
    /// A [`Name`] that is not blank once surrounding quotes and spaces are stripped.
    NonEmptyishName => NameKind::NonEmptyishName
}

constrained_string! {
    /// A URI-like string with a lowercase scheme, e.g. `s3://bucket/folder/data.csv`.
    UriLike => NameKind::UriLike
}

constrained_string! {
    /// A URI-like asset key: no whitespace, control, quote, bracket or pipe
    /// characters, at most 512 characters.
    ValidAssetKey => NameKind::ValidAssetKey
}
