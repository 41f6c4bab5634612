//! Core domain layer for namecheck.
//!
//! Pure validation logic: no I/O, no async, no shared mutable state. The
//! compiled regexes are process-wide read-only statics, so every function
//! here is safe to call from any thread.
//!
//! ## Layout
//!
//! - `rules`: primitive rules and the bit-exact constants
//! - `validation`: ordered preset chains built from the rules
//! - `kind`: [`NameKind`], the catalogue that dispatches to a preset
//! - `value_objects`: validated newtypes, one per kind
pub mod error;
pub mod kind;
pub mod rules;
pub mod value_objects;

mod validation;

pub use error::ValidationError;
pub use kind::{NameKind, ParseNameKindError};
pub use rules::{
    BANNED_CHARACTERS, CharacterClass, DEFAULT_FIELD, MAX_ASSET_KEY_LENGTH,
    MAX_VARIABLE_NAME_LENGTH, RESTRICTED_ASSET_CHARACTERS, URI_PATTERN,
};
pub use validation::NameValidator;
pub use value_objects::{
    ArtifactKey, BlockDocumentName, BlockTypeSlug, Name, NameOrEmpty, NonEmptyishName, UriLike,
    ValidAssetKey, VariableName,
};
