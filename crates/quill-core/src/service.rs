//! Data service trait definition

use crate::account::{Account, NewAccount};
use crate::comment::{Comment, NewComment};
use crate::error::Result;
use crate::id::{AccountId, CommentId, PostId};
use crate::post::{NewPost, Post};
use crate::query::TextQuery;
use async_trait::async_trait;

/// Main trait for the data service
///
/// Request handlers call the query and mutation operations first, then the
/// relation resolvers for every nested field on the returned records.
#[async_trait]
pub trait DataService: Send + Sync {
    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// List accounts in insertion order, filtered by name
    async fn list_accounts(&self, query: &TextQuery) -> Result<Vec<Account>>;

    /// List posts in insertion order, filtered by title or body
    async fn list_posts(&self, query: &TextQuery) -> Result<Vec<Post>>;

    /// List all comments in insertion order
    async fn list_comments(&self) -> Result<Vec<Comment>>;

    /// Get an account by id
    async fn get_account(&self, id: &AccountId) -> Result<Option<Account>>;

    /// Get a post by id
    async fn get_post(&self, id: &PostId) -> Result<Option<Post>>;

    /// Get a comment by id
    async fn get_comment(&self, id: &CommentId) -> Result<Option<Comment>>;

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Create an account; the email must not be in use
    async fn create_account(&self, input: NewAccount) -> Result<Account>;

    /// Delete an account with its posts and every comment on them or by it
    async fn delete_account(&self, id: &AccountId) -> Result<Account>;

    /// Create a post for an existing author
    async fn create_post(&self, input: NewPost) -> Result<Post>;

    /// Delete a post and its comments
    async fn delete_post(&self, id: &PostId) -> Result<Post>;

    /// Create a comment on a published post
    async fn create_comment(&self, input: NewComment) -> Result<Comment>;

    /// Delete a single comment
    async fn delete_comment(&self, id: &CommentId) -> Result<Comment>;

    // ─────────────────────────────────────────────────────────────────────────
    // Relations
    // ─────────────────────────────────────────────────────────────────────────

    async fn account_posts(&self, account: &Account) -> Result<Vec<Post>>;

    async fn account_comments(&self, account: &Account) -> Result<Vec<Comment>>;

    async fn post_author(&self, post: &Post) -> Result<Account>;

    async fn post_comments(&self, post: &Post) -> Result<Vec<Comment>>;

    async fn comment_author(&self, comment: &Comment) -> Result<Account>;

    async fn comment_post(&self, comment: &Comment) -> Result<Post>;
}
