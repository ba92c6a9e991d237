//! Search error types

use thiserror::Error;

/// Result type alias for search operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Search-specific error types
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Query error: {0}")]
    Query(String),
}

impl From<SearchError> for quill_core::Error {
    fn from(e: SearchError) -> Self {
        quill_core::Error::Search(e.to_string())
    }
}
