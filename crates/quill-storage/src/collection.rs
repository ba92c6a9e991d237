//! Ordered record collections

use quill_core::{Account, AccountId, Comment, CommentId, Post, PostId};

/// A record stored in a [`Collection`], addressed by its id
pub trait Keyed {
    type Id: PartialEq;

    fn key(&self) -> &Self::Id;
}

impl Keyed for Account {
    type Id = AccountId;

    fn key(&self) -> &AccountId {
        &self.id
    }
}

impl Keyed for Post {
    type Id = PostId;

    fn key(&self) -> &PostId {
        &self.id
    }
}

impl Keyed for Comment {
    type Id = CommentId;

    fn key(&self) -> &CommentId {
        &self.id
    }
}

/// Records in insertion order
///
/// Lookups are linear scans; at interactive scale that is cheaper than
/// keeping an index consistent across cascades.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Keyed + Clone> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// Append a record at the end of the collection
    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.records.iter().find(|r| r.key() == id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    pub fn any(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.records.iter().any(predicate)
    }

    /// Clone the records matching a predicate, in order
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.records
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.records.clone()
    }

    /// Remove the record with this id, if present
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let pos = self.records.iter().position(|r| r.key() == id)?;
        Some(self.records.remove(pos))
    }

    /// Remove every record matching a predicate and return them in order
    pub fn remove_where(&mut self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        let (removed, kept): (Vec<T>, Vec<T>) =
            std::mem::take(&mut self.records).into_iter().partition(|r| predicate(r));
        self.records = kept;
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::NewAccount;

    fn account(id: &str) -> Account {
        Account::new(
            AccountId::new(id),
            NewAccount::new(id, format!("{}@example.com", id)),
        )
    }

    #[test]
    fn test_push_preserves_order() {
        let mut accounts = Collection::new();
        accounts.push(account("b"));
        accounts.push(account("a"));
        accounts.push(account("c"));

        let ids: Vec<_> = accounts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn test_remove_where_returns_removed_and_keeps_rest_in_order() {
        let mut accounts = Collection::new();
        for id in ["a", "b", "c", "d"] {
            accounts.push(account(id));
        }

        let removed = accounts.remove_where(|a| a.id.as_str() == "b" || a.id.as_str() == "d");
        assert_eq!(removed.len(), 2);
        assert_eq!(removed[0].id.as_str(), "b");

        let ids: Vec<_> = accounts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut accounts: Collection<Account> = Collection::new();
        assert!(accounts.remove(&AccountId::new("missing")).is_none());
        assert!(accounts.is_empty());
    }
}
