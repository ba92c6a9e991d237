//! Mutation engine: guarded inserts and cascading deletes
//!
//! Every operation checks all of its preconditions before touching the
//! store, so a failed mutation leaves nothing behind.

use crate::store::EntityStore;
use quill_core::limits::{validate_new_account, validate_new_comment, validate_new_post};
use quill_core::{
    Account, AccountId, Comment, CommentId, Error, NewAccount, NewComment, NewPost, Post, PostId,
    RecordKind, Result,
};

/// Everything removed by an account deletion
#[derive(Debug, Clone)]
pub struct AccountRemoval {
    pub account: Account,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

/// Everything removed by a post deletion
#[derive(Debug, Clone)]
pub struct PostRemoval {
    pub post: Post,
    pub comments: Vec<Comment>,
}

pub fn create_account(store: &mut EntityStore, input: NewAccount) -> Result<Account> {
    validate_new_account(&input)?;

    if store.accounts.any(|a| a.email == input.email) {
        return Err(Error::DuplicateEmail(input.email));
    }

    let account = Account::new(store.ids.next_id()?, input);
    store.accounts.push(account.clone());
    Ok(account)
}

/// Remove an account, then its posts with their comments, then any comments
/// it wrote elsewhere
pub fn delete_account(store: &mut EntityStore, id: &AccountId) -> Result<AccountRemoval> {
    let account = store
        .accounts
        .remove(id)
        .ok_or_else(|| Error::not_found(RecordKind::Account, id))?;

    let posts = store.posts.remove_where(|p| p.author_id == *id);
    let mut comments = store
        .comments
        .remove_where(|c| posts.iter().any(|p| p.id == c.post_id));
    // Comments on the removed posts are already gone, so none is taken twice.
    comments.extend(store.comments.remove_where(|c| c.author_id == *id));

    Ok(AccountRemoval {
        account,
        posts,
        comments,
    })
}

pub fn create_post(store: &mut EntityStore, input: NewPost) -> Result<Post> {
    validate_new_post(&input)?;

    if !store.accounts.contains(&input.author_id) {
        return Err(Error::AuthorNotFound(input.author_id.to_string()));
    }

    let post = Post::new(store.ids.next_id()?, input);
    store.posts.push(post.clone());
    Ok(post)
}

pub fn delete_post(store: &mut EntityStore, id: &PostId) -> Result<PostRemoval> {
    let post = store
        .posts
        .remove(id)
        .ok_or_else(|| Error::not_found(RecordKind::Post, id))?;
    let comments = store.comments.remove_where(|c| c.post_id == *id);

    Ok(PostRemoval { post, comments })
}

/// Create a comment; the author is checked before the post
pub fn create_comment(store: &mut EntityStore, input: NewComment) -> Result<Comment> {
    validate_new_comment(&input)?;

    if !store.accounts.contains(&input.author_id) {
        return Err(Error::AuthorNotFound(input.author_id.to_string()));
    }

    let published = store
        .posts
        .get(&input.post_id)
        .map(|p| p.published)
        .unwrap_or(false);
    if !published {
        return Err(Error::PostUnavailable(input.post_id.to_string()));
    }

    let comment = Comment::new(store.ids.next_id()?, input);
    store.comments.push(comment.clone());
    Ok(comment)
}

pub fn delete_comment(store: &mut EntityStore, id: &CommentId) -> Result<Comment> {
    store
        .comments
        .remove(id)
        .ok_or_else(|| Error::not_found(RecordKind::Comment, id))
}
