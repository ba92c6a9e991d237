//! Identifier generator

use quill_core::{Error, Result};
use ulid::{Generator, Ulid};

/// Mints identifiers for new records
///
/// Backed by a monotonic ULID generator: every value is strictly greater
/// than the previous one, so no identifier is ever issued twice in the
/// lifetime of the store.
pub struct IdGenerator {
    inner: Generator,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            inner: Generator::new(),
        }
    }

    pub fn next_id<I: From<Ulid>>(&mut self) -> Result<I> {
        self.inner
            .generate()
            .map(I::from)
            .map_err(|e| Error::Internal(format!("Identifier space exhausted: {}", e)))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdGenerator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::{AccountId, PostId};
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut ids = IdGenerator::new();
        let mut seen = HashSet::new();
        let mut last: Option<AccountId> = None;

        for _ in 0..1000 {
            let id: AccountId = ids.next_id().unwrap();
            if let Some(prev) = &last {
                assert!(id > *prev);
            }
            assert!(seen.insert(id.clone()));
            last = Some(id);
        }
    }

    #[test]
    fn test_ids_shared_across_kinds() {
        let mut ids = IdGenerator::new();
        let account: AccountId = ids.next_id().unwrap();
        let post: PostId = ids.next_id().unwrap();
        assert_ne!(account.as_str(), post.as_str());
    }
}
