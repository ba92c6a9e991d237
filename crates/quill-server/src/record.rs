//! Records as the executor sees them

use quill_core::{Account, Comment, Post, RecordKind};
use serde_json::Value;

/// Any stored record
#[derive(Debug, Clone)]
pub enum Record {
    Account(Account),
    Post(Post),
    Comment(Comment),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Account(_) => RecordKind::Account,
            Self::Post(_) => RecordKind::Post,
            Self::Comment(_) => RecordKind::Comment,
        }
    }

    /// Scalar fields keyed by their wire names
    pub fn scalars(&self) -> serde_json::Result<serde_json::Map<String, Value>> {
        let value = match self {
            Self::Account(a) => serde_json::to_value(a)?,
            Self::Post(p) => serde_json::to_value(p)?,
            Self::Comment(c) => serde_json::to_value(c)?,
        };
        match value {
            Value::Object(map) => Ok(map),
            _ => Ok(serde_json::Map::new()),
        }
    }
}

impl From<Account> for Record {
    fn from(a: Account) -> Self {
        Self::Account(a)
    }
}

impl From<Post> for Record {
    fn from(p: Post) -> Self {
        Self::Post(p)
    }
}

impl From<Comment> for Record {
    fn from(c: Comment) -> Self {
        Self::Comment(c)
    }
}

/// What an operation or relation produced
#[derive(Debug, Clone)]
pub enum Output {
    Nothing,
    One(Record),
    Many(Vec<Record>),
}

impl Output {
    pub fn one(record: impl Into<Record>) -> Self {
        Self::One(record.into())
    }

    pub fn optional(record: Option<impl Into<Record>>) -> Self {
        record.map_or(Self::Nothing, |r| Self::One(r.into()))
    }

    pub fn many<T: Into<Record>>(records: Vec<T>) -> Self {
        Self::Many(records.into_iter().map(Into::into).collect())
    }
}
