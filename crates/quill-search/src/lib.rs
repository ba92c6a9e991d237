//! Quill Search - Text search over records
//!
//! Provides case-insensitive substring search for the listing operations.

pub mod error;
pub mod substring;
pub mod traits;

pub use error::{SearchError, SearchResult};
pub use substring::SubstringSearchEngine;
pub use traits::{SearchEngine, Searchable};
