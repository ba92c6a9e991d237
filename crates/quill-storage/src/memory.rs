//! In-memory storage backend

use crate::mutation;
use crate::resolver;
use crate::store::EntityStore;
use async_trait::async_trait;
use quill_core::{
    Account, AccountId, Comment, CommentId, DataService, Error, NewAccount, NewComment, NewPost,
    Post, PostId, Result, TextQuery,
};
use quill_search::{SearchEngine, SubstringSearchEngine};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory storage backend
///
/// The whole store sits behind one readers-writer lock: queries and relation
/// lookups share it, each mutation holds it exclusively until done.
pub struct MemoryStorage {
    store: RwLock<EntityStore>,
    search: SubstringSearchEngine,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(EntityStore::new()),
            search: SubstringSearchEngine::new(),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, EntityStore>> {
        self.store
            .read()
            .map_err(|e| Error::Storage(format!("Lock error: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, EntityStore>> {
        self.store
            .write()
            .map_err(|e| Error::Storage(format!("Lock error: {}", e)))
    }

    /// Record counts as (accounts, posts, comments)
    pub fn counts(&self) -> Result<(usize, usize, usize)> {
        Ok(self.read()?.counts())
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataService for MemoryStorage {
    // Queries

    async fn list_accounts(&self, query: &TextQuery) -> Result<Vec<Account>> {
        let accounts = self.read()?.accounts.to_vec();
        Ok(self.search.search(query, accounts).await?)
    }

    async fn list_posts(&self, query: &TextQuery) -> Result<Vec<Post>> {
        let posts = self.read()?.posts.to_vec();
        Ok(self.search.search(query, posts).await?)
    }

    async fn list_comments(&self) -> Result<Vec<Comment>> {
        Ok(self.read()?.comments.to_vec())
    }

    async fn get_account(&self, id: &AccountId) -> Result<Option<Account>> {
        Ok(self.read()?.accounts.get(id).cloned())
    }

    async fn get_post(&self, id: &PostId) -> Result<Option<Post>> {
        Ok(self.read()?.posts.get(id).cloned())
    }

    async fn get_comment(&self, id: &CommentId) -> Result<Option<Comment>> {
        Ok(self.read()?.comments.get(id).cloned())
    }

    // Mutations

    async fn create_account(&self, input: NewAccount) -> Result<Account> {
        let account = mutation::create_account(&mut *self.write()?, input)?;
        tracing::info!("Created account {} ({})", account.id, account.email);
        Ok(account)
    }

    async fn delete_account(&self, id: &AccountId) -> Result<Account> {
        let removal = mutation::delete_account(&mut *self.write()?, id)?;
        tracing::info!(
            "Deleted account {} with {} posts and {} comments",
            id,
            removal.posts.len(),
            removal.comments.len()
        );
        Ok(removal.account)
    }

    async fn create_post(&self, input: NewPost) -> Result<Post> {
        let post = mutation::create_post(&mut *self.write()?, input)?;
        tracing::info!("Created post {} by {}", post.id, post.author_id);
        Ok(post)
    }

    async fn delete_post(&self, id: &PostId) -> Result<Post> {
        let removal = mutation::delete_post(&mut *self.write()?, id)?;
        tracing::info!(
            "Deleted post {} with {} comments",
            id,
            removal.comments.len()
        );
        Ok(removal.post)
    }

    async fn create_comment(&self, input: NewComment) -> Result<Comment> {
        let comment = mutation::create_comment(&mut *self.write()?, input)?;
        tracing::info!("Created comment {} on {}", comment.id, comment.post_id);
        Ok(comment)
    }

    async fn delete_comment(&self, id: &CommentId) -> Result<Comment> {
        let comment = mutation::delete_comment(&mut *self.write()?, id)?;
        tracing::info!("Deleted comment {}", id);
        Ok(comment)
    }

    // Relations

    async fn account_posts(&self, account: &Account) -> Result<Vec<Post>> {
        Ok(resolver::account_posts(&*self.read()?, account))
    }

    async fn account_comments(&self, account: &Account) -> Result<Vec<Comment>> {
        Ok(resolver::account_comments(&*self.read()?, account))
    }

    async fn post_author(&self, post: &Post) -> Result<Account> {
        resolver::post_author(&*self.read()?, post)
    }

    async fn post_comments(&self, post: &Post) -> Result<Vec<Comment>> {
        Ok(resolver::post_comments(&*self.read()?, post))
    }

    async fn comment_author(&self, comment: &Comment) -> Result<Account> {
        resolver::comment_author(&*self.read()?, comment)
    }

    async fn comment_post(&self, comment: &Comment) -> Result<Post> {
        resolver::comment_post(&*self.read()?, comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();

        let ann = storage
            .create_account(NewAccount::new("Ann", "ann@x.com"))
            .await
            .unwrap();
        let p1 = storage
            .create_post(NewPost::new("T", "B", true, ann.id.clone()))
            .await
            .unwrap();
        let c1 = storage
            .create_comment(NewComment::new("hi", ann.id.clone(), p1.id.clone()))
            .await
            .unwrap();

        assert_eq!(storage.get_account(&ann.id).await.unwrap(), Some(ann.clone()));
        assert_eq!(storage.post_author(&p1).await.unwrap().id, ann.id);
        assert_eq!(storage.post_comments(&p1).await.unwrap(), vec![c1.clone()]);
        assert_eq!(storage.comment_post(&c1).await.unwrap().id, p1.id);

        let removed = storage.delete_account(&ann.id).await.unwrap();
        assert_eq!(removed.id, ann.id);
        assert_eq!(storage.counts().unwrap(), (0, 0, 0));
        assert!(storage.get_comment(&c1.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_accounts_search() {
        let storage = MemoryStorage::new();
        for (name, email) in [
            ("Tim", "tim@example.com"),
            ("Sarah", "sarah@example.com"),
            ("Mike", "mike@example.com"),
        ] {
            storage
                .create_account(NewAccount::new(name, email))
                .await
                .unwrap();
        }

        let found = storage.list_accounts(&TextQuery::new("sarah")).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Sarah");

        let all = storage.list_accounts(&TextQuery::all()).await.unwrap();
        let names: Vec<_> = all.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Tim", "Sarah", "Mike"]);
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_store_unchanged() {
        let storage = MemoryStorage::new();
        storage
            .create_account(NewAccount::new("Ann", "ann@x.com"))
            .await
            .unwrap();

        let err = storage
            .create_account(NewAccount::new("Ann", "ann@x.com"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "DUPLICATE_EMAIL");

        let err = storage
            .delete_post(&PostId::new("missing"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "NOT_FOUND");
        assert_eq!(storage.counts().unwrap(), (1, 0, 0));
    }

    #[tokio::test]
    async fn test_concurrent_creates_keep_emails_unique() {
        let storage = Arc::new(MemoryStorage::new());

        let mut handles = Vec::new();
        for i in 0..32 {
            let storage = storage.clone();
            handles.push(tokio::spawn(async move {
                let email = format!("user{}@x.com", i % 8);
                storage
                    .create_account(NewAccount::new(format!("User {}", i), email))
                    .await
            }));
        }

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }

        assert_eq!(created, 8);
        assert_eq!(storage.counts().unwrap().0, 8);
    }
}
