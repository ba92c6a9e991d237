//! Substring search engine - case-insensitive containment

use async_trait::async_trait;

use crate::traits::{Result, SearchEngine, SearchError, Searchable};
use quill_core::TextQuery;

/// Maximum accepted query length (1024 chars)
pub const MAX_QUERY_LEN: usize = 1024;

/// Case-insensitive substring search engine (stateless)
///
/// A record matches when any of its searchable fields contains the query.
pub struct SubstringSearchEngine;

impl SubstringSearchEngine {
    pub fn new() -> Self {
        Self
    }

    fn matches<T: Searchable>(record: &T, needle: &str) -> bool {
        record
            .searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Default for SubstringSearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchEngine for SubstringSearchEngine {
    async fn search<T>(&self, query: &TextQuery, records: Vec<T>) -> Result<Vec<T>>
    where
        T: Searchable + Send + 'static,
    {
        let Some(needle) = query.needle() else {
            return Ok(records);
        };

        let len = needle.chars().count();
        if len > MAX_QUERY_LEN {
            return Err(SearchError::Query(format!(
                "Query too long: {} chars (max {})",
                len, MAX_QUERY_LEN
            )));
        }

        let total = records.len();
        let results: Vec<T> = records
            .into_iter()
            .filter(|record| Self::matches(record, &needle))
            .collect();

        tracing::debug!("Query {:?} matched {} of {} records", needle, results.len(), total);
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::{Account, AccountId, NewAccount, NewPost, Post, PostId};

    fn account(name: &str) -> Account {
        let email = format!("{}@example.com", name.to_lowercase());
        Account::new(AccountId::new(name), NewAccount::new(name, email))
    }

    fn post(title: &str, body: &str) -> Post {
        Post::new(
            PostId::new(title),
            NewPost::new(title, body, true, AccountId::new("a1")),
        )
    }

    #[tokio::test]
    async fn test_search_account_name_case_insensitive() {
        let search = SubstringSearchEngine::new();
        let accounts = vec![account("Tim"), account("Sarah"), account("Mike")];

        let results = search
            .search(&TextQuery::new("sarah"), accounts)
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Sarah");
    }

    #[tokio::test]
    async fn test_search_post_title_or_body() {
        let search = SubstringSearchEngine::new();
        let posts = vec![
            post("Title #", ""),
            post("GraphQL 101", ""),
            post("Title #", "GraphQL 201"),
        ];

        let results = search
            .search(&TextQuery::new("graphql"), posts.clone())
            .await
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "GraphQL 101");
        assert_eq!(results[1].body, "GraphQL 201");

        let results = search.search(&TextQuery::new("101"), posts).await.unwrap();
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn test_unfiltered_query_keeps_order() {
        let search = SubstringSearchEngine::new();
        let accounts = vec![account("Tim"), account("Sarah"), account("Mike")];

        let results = search.search(&TextQuery::all(), accounts).await.unwrap();
        let names: Vec<_> = results.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Tim", "Sarah", "Mike"]);
    }

    #[tokio::test]
    async fn test_no_match_is_empty_not_error() {
        let search = SubstringSearchEngine::new();
        let results = search
            .search(&TextQuery::new("nobody"), vec![account("Tim")])
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_overlong_query_rejected() {
        let search = SubstringSearchEngine::new();
        let query = TextQuery::new("x".repeat(MAX_QUERY_LEN + 1));
        let result = search.search(&query, vec![account("Tim")]).await;
        assert!(matches!(result, Err(SearchError::Query(_))));
    }
}
