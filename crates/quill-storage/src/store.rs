//! The entity store: accounts, posts and comments

use crate::collection::Collection;
use crate::id::IdGenerator;
use quill_core::{Account, Comment, Post};

/// Three ordered collections plus the generator that mints their ids
///
/// The store itself does no locking; [`crate::MemoryStorage`] owns one behind
/// a readers-writer lock.
#[derive(Debug, Default)]
pub struct EntityStore {
    pub accounts: Collection<Account>,
    pub posts: Collection<Post>,
    pub comments: Collection<Comment>,
    pub ids: IdGenerator,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record counts as (accounts, posts, comments)
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.accounts.len(), self.posts.len(), self.comments.len())
    }
}
