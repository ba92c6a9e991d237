//! Post records

use crate::id::{AccountId, PostId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post written by an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique identifier
    pub id: PostId,

    pub title: String,

    pub body: String,

    /// Only published posts accept new comments
    pub published: bool,

    /// Author account
    pub author_id: AccountId,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(id: PostId, input: NewPost) -> Self {
        Self {
            id,
            title: input.title,
            body: input.body,
            published: input.published,
            author_id: input.author_id,
            created_at: Utc::now(),
        }
    }
}

/// Data for creating a new post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub published: bool,
    pub author_id: AccountId,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        published: bool,
        author_id: AccountId,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            published,
            author_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_creation() {
        let input = NewPost::new("GraphQL 101", "", true, AccountId::new("a1"));
        let post = Post::new(PostId::new("p1"), input);

        assert_eq!(post.title, "GraphQL 101");
        assert!(post.published);
        assert_eq!(post.author_id.as_str(), "a1");
    }

    #[test]
    fn test_new_post_reads_author_id() {
        let input: NewPost = serde_json::from_str(
            r#"{"title":"T","body":"B","published":false,"authorId":"a9"}"#,
        )
        .unwrap();
        assert_eq!(input.author_id, AccountId::new("a9"));
        assert!(!input.published);
    }
}
