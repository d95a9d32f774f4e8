//! Build errors for the reducer mapping builder.

use thiserror::Error;

/// Errors that can occur when building a reducer mapping.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Duplicate reducer name '{name}'. Each reducer name must be unique")]
    DuplicateReducer { name: String },

    #[error("Empty reducer name. Give each reducer a non-empty name")]
    EmptyName,
}
