//! Query types for listing records

use serde::{Deserialize, Serialize};

/// Optional text filter applied by the listing operations
///
/// An absent or empty needle matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl TextQuery {
    /// Create a query that matches records containing `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Create a query that matches every record
    pub fn all() -> Self {
        Self::default()
    }

    /// The lower-cased needle, or `None` when the query matches everything
    pub fn needle(&self) -> Option<String> {
        self.text
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }
}

impl From<Option<String>> for TextQuery {
    fn from(text: Option<String>) -> Self {
        Self { text }
    }
}
