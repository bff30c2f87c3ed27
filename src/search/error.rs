//! Search-specific error types
//!
//! The only fallible step of a search is compiling the typed term into a
//! matcher. Terms are escaped before compilation, so this fails only when
//! the compiled pattern exceeds the regex engine's size limits.

use thiserror::Error;

/// Search-specific errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// The search term could not be compiled into a prefix matcher
    #[error("Invalid search term '{term}': {source}")]
    InvalidTerm {
        term: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
