//! Comment records

use crate::id::{AccountId, CommentId, PostId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment left by an account on a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub author_id: AccountId,
    pub post_id: PostId,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(id: CommentId, input: NewComment) -> Self {
        Self {
            id,
            text: input.text,
            author_id: input.author_id,
            post_id: input.post_id,
            created_at: Utc::now(),
        }
    }
}

/// Data for creating a new comment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub text: String,
    pub author_id: AccountId,
    pub post_id: PostId,
}

impl NewComment {
    pub fn new(text: impl Into<String>, author_id: AccountId, post_id: PostId) -> Self {
        Self {
            text: text.into(),
            author_id,
            post_id,
        }
    }
}
