//! Errors returned by tree queries.

use thiserror::Error;

/// Errors for queries that need a value to be present in the tree.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The value could not be reached by descending from the root.
    #[error("value is not present in the tree")]
    NotFound,
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
