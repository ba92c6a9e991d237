//! Quill Core - Record types for the Quill data service
//!
//! This crate provides the account, post and comment records, the error
//! taxonomy and the service trait that storage backends implement.

pub mod account;
pub mod comment;
pub mod error;
pub mod id;
pub mod limits;
pub mod post;
pub mod query;
pub mod relation;
pub mod service;

pub use account::{Account, NewAccount};
pub use comment::{Comment, NewComment};
pub use error::{Error, Result};
pub use id::{AccountId, CommentId, PostId};
pub use post::{NewPost, Post};
pub use query::TextQuery;
pub use relation::{RecordKind, Relation};
pub use service::DataService;
