//! namecheck core: name and key validation for orchestration data models.
//!
//! Fields in the data model are typed as constrained strings. Each type can
//! only be built by running its ordered checks, so a value that exists is a
//! value that passed.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          namecheck-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   NameKind / value objects (newtypes)   │
//! └──────────────────┬──────────────────────┘
//!                    │ dispatches to
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     NameValidator (ordered presets)     │
//! └──────────────────┬──────────────────────┘
//!                    │ composes
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    rules (primitive checks, constants)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use namecheck_core::domain::{ValidAssetKey, VariableName, rules};
//!
//! let key = ValidAssetKey::new("s3://bucket/folder/data.csv").unwrap();
//! assert_eq!(key.as_str(), "s3://bucket/folder/data.csv");
//!
//! assert!(VariableName::new("My Variable").is_err());
//! assert_eq!(rules::alphanumeric_dashes_only_opt(None, "slug"), Ok(None));
//! ```

pub mod domain;

pub mod prelude {
    pub use crate::domain::{
        ArtifactKey, BlockDocumentName, BlockTypeSlug, DEFAULT_FIELD, Name, NameKind, NameOrEmpty,
        NameValidator, NonEmptyishName, UriLike, ValidAssetKey, ValidationError, VariableName,
    };
}

/// Convenient result type alias.
pub type ValidationResult<T> = Result<T, domain::ValidationError>;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
