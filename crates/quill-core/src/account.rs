//! Account records

use crate::id::AccountId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier, assigned at creation
    pub id: AccountId,

    /// Display name (never empty)
    pub name: String,

    /// Email address, unique across all accounts
    pub email: String,

    /// Optional age in years
    pub age: Option<i32>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Build the stored record for a validated input
    pub fn new(id: AccountId, input: NewAccount) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            age: input.age,
            created_at: Utc::now(),
        }
    }
}

/// Data for creating a new account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<i32>,
}

impl NewAccount {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age: None,
        }
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_creation() {
        let input = NewAccount::new("Tim", "tim@example.com").with_age(46);
        let account = Account::new(AccountId::new("a1"), input);

        assert_eq!(account.id.as_str(), "a1");
        assert_eq!(account.name, "Tim");
        assert_eq!(account.email, "tim@example.com");
        assert_eq!(account.age, Some(46));
    }

    #[test]
    fn test_new_account_age_is_optional_on_the_wire() {
        let input: NewAccount =
            serde_json::from_str(r#"{"name":"Sarah","email":"sarah@example.com"}"#).unwrap();
        assert!(input.age.is_none());
    }

    #[test]
    fn test_account_serializes_camel_case() {
        let account = Account::new(AccountId::new("a1"), NewAccount::new("Mike", "m@x.com"));
        let value = serde_json::to_value(&account).unwrap();

        assert!(value.get("createdAt").is_some());
        assert!(value.get("age").unwrap().is_null());
    }
}
