//! Record kinds and the relations derived between them

use serde::{Deserialize, Serialize};

/// The three kinds of record held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Account,
    Post,
    Comment,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Post => "post",
            Self::Comment => "comment",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relationship resolved by scanning a foreign-key field
///
/// Nothing stores back-pointers: `AccountPosts` is every post whose
/// `author_id` is the account, `PostAuthor` is the account that `author_id`
/// names, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    AccountPosts,
    AccountComments,
    PostAuthor,
    PostComments,
    CommentAuthor,
    CommentPost,
}

impl Relation {
    pub const ALL: [Relation; 6] = [
        Relation::AccountPosts,
        Relation::AccountComments,
        Relation::PostAuthor,
        Relation::PostComments,
        Relation::CommentAuthor,
        Relation::CommentPost,
    ];

    /// Look up the relation a field name denotes on a parent kind
    pub fn parse(parent: RecordKind, field: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.parent() == parent && r.field_name() == field)
    }

    /// Field name clients use to request this relation
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::AccountPosts => "posts",
            Self::AccountComments | Self::PostComments => "comments",
            Self::PostAuthor | Self::CommentAuthor => "author",
            Self::CommentPost => "post",
        }
    }

    pub fn parent(&self) -> RecordKind {
        match self {
            Self::AccountPosts | Self::AccountComments => RecordKind::Account,
            Self::PostAuthor | Self::PostComments => RecordKind::Post,
            Self::CommentAuthor | Self::CommentPost => RecordKind::Comment,
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.parent(), self.field_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relation_by_parent() {
        assert_eq!(
            Relation::parse(RecordKind::Post, "comments"),
            Some(Relation::PostComments)
        );
        assert_eq!(
            Relation::parse(RecordKind::Account, "comments"),
            Some(Relation::AccountComments)
        );
        assert_eq!(Relation::parse(RecordKind::Account, "author"), None);
        assert_eq!(Relation::parse(RecordKind::Comment, "title"), None);
    }

    #[test]
    fn test_relation_display() {
        assert_eq!(Relation::PostAuthor.to_string(), "post.author");
    }
}
