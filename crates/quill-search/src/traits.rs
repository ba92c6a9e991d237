//! Search engine traits

use async_trait::async_trait;
use quill_core::{Account, Post, TextQuery};

pub use crate::error::{SearchError, SearchResult as Result};

/// A record with text fields a query can match against
pub trait Searchable {
    fn searchable_fields(&self) -> Vec<&str>;
}

impl Searchable for Account {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Searchable for Post {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.body.as_str()]
    }
}

/// Trait for search engines
#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Return the matching records, preserving their order
    async fn search<T>(&self, query: &TextQuery, records: Vec<T>) -> Result<Vec<T>>
    where
        T: Searchable + Send + 'static;
}
