//! Error types for Quill Core

use crate::relation::{RecordKind, Relation};
use thiserror::Error;

/// Result type alias using Quill's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Quill error types
///
/// Every variant is terminal for the operation that raised it; mutations
/// that fail leave the store untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Email already in use: {0}")]
    DuplicateEmail(String),

    #[error("No {kind} with id {id}")]
    NotFound { kind: RecordKind, id: String },

    #[error("Author not found: {0}")]
    AuthorNotFound(String),

    #[error("Post not found or not published: {0}")]
    PostUnavailable(String),

    #[error("Broken reference: {relation} of {parent_id} points at missing {target_id}")]
    BrokenReference {
        relation: Relation,
        parent_id: String,
        target_id: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Search error: {0}")]
    Search(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn not_found(kind: RecordKind, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Stable, machine-readable tag for this error
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateEmail(_) => "DUPLICATE_EMAIL",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::AuthorNotFound(_) => "AUTHOR_NOT_FOUND",
            Self::PostUnavailable(_) => "POST_UNAVAILABLE",
            Self::BrokenReference { .. } => "BROKEN_REFERENCE",
            Self::Validation(_) => "VALIDATION",
            Self::Storage(_) => "STORAGE",
            Self::Search(_) => "SEARCH",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_and_messages() {
        let err = Error::not_found(RecordKind::Post, "p1");
        assert_eq!(err.kind(), "NOT_FOUND");
        assert_eq!(err.to_string(), "No post with id p1");

        let err = Error::BrokenReference {
            relation: Relation::CommentAuthor,
            parent_id: "c1".into(),
            target_id: "a1".into(),
        };
        assert_eq!(err.kind(), "BROKEN_REFERENCE");
        assert!(err.to_string().contains("comment.author"));
    }
}
