//! Reference resolution over the entity store
//!
//! To-one relations fail with `BrokenReference` when the referenced record is
//! gone; to-many relations are filters and never fail.

use crate::store::EntityStore;
use quill_core::{Account, Comment, Error, Post, Relation, Result};

pub fn account_posts(store: &EntityStore, account: &Account) -> Vec<Post> {
    store.posts.filter(|p| p.author_id == account.id)
}

pub fn account_comments(store: &EntityStore, account: &Account) -> Vec<Comment> {
    store.comments.filter(|c| c.author_id == account.id)
}

pub fn post_comments(store: &EntityStore, post: &Post) -> Vec<Comment> {
    store.comments.filter(|c| c.post_id == post.id)
}

pub fn post_author(store: &EntityStore, post: &Post) -> Result<Account> {
    store
        .accounts
        .get(&post.author_id)
        .cloned()
        .ok_or_else(|| Error::BrokenReference {
            relation: Relation::PostAuthor,
            parent_id: post.id.to_string(),
            target_id: post.author_id.to_string(),
        })
}

pub fn comment_author(store: &EntityStore, comment: &Comment) -> Result<Account> {
    store
        .accounts
        .get(&comment.author_id)
        .cloned()
        .ok_or_else(|| Error::BrokenReference {
            relation: Relation::CommentAuthor,
            parent_id: comment.id.to_string(),
            target_id: comment.author_id.to_string(),
        })
}

pub fn comment_post(store: &EntityStore, comment: &Comment) -> Result<Post> {
    store
        .posts
        .get(&comment.post_id)
        .cloned()
        .ok_or_else(|| Error::BrokenReference {
            relation: Relation::CommentPost,
            parent_id: comment.id.to_string(),
            target_id: comment.post_id.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutation;
    use quill_core::{AccountId, CommentId, NewAccount, NewComment, NewPost, PostId};

    fn populated() -> (EntityStore, Account, Post, Comment) {
        let mut store = EntityStore::new();
        let ann = mutation::create_account(&mut store, NewAccount::new("Ann", "ann@x.com")).unwrap();
        let bob = mutation::create_account(&mut store, NewAccount::new("Bob", "bob@x.com")).unwrap();
        let post = mutation::create_post(&mut store, NewPost::new("T", "B", true, ann.id.clone()))
            .unwrap();
        mutation::create_post(&mut store, NewPost::new("Other", "", true, bob.id.clone())).unwrap();
        let comment = mutation::create_comment(
            &mut store,
            NewComment::new("hi", bob.id.clone(), post.id.clone()),
        )
        .unwrap();
        (store, ann, post, comment)
    }

    #[test]
    fn test_to_many_relations_filter_by_foreign_key() {
        let (store, ann, post, comment) = populated();

        let posts = account_posts(&store, &ann);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, post.id);

        assert!(account_comments(&store, &ann).is_empty());

        let comments = post_comments(&store, &post);
        assert_eq!(comments, vec![comment]);
    }

    #[test]
    fn test_to_one_relations_follow_ids() {
        let (store, ann, post, comment) = populated();

        assert_eq!(post_author(&store, &post).unwrap().id, ann.id);
        assert_eq!(comment_author(&store, &comment).unwrap().name, "Bob");
        assert_eq!(comment_post(&store, &comment).unwrap().id, post.id);
    }

    #[test]
    fn test_dangling_reference_is_broken_reference() {
        let (store, _, post, comment) = populated();

        let mut orphan = post.clone();
        orphan.author_id = AccountId::new("gone");
        let err = post_author(&store, &orphan).unwrap_err();
        assert_eq!(err.kind(), "BROKEN_REFERENCE");

        let mut orphan = comment.clone();
        orphan.id = CommentId::new("c-orphan");
        orphan.post_id = PostId::new("gone");
        assert!(matches!(
            comment_post(&store, &orphan),
            Err(Error::BrokenReference {
                relation: Relation::CommentPost,
                ..
            })
        ));
    }
}
