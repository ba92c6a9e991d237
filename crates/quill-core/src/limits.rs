//! Input validation limits for record fields

use crate::account::NewAccount;
use crate::comment::NewComment;
use crate::error::Error;
use crate::post::NewPost;

/// Maximum length for account names (256 chars)
pub const MAX_NAME_LEN: usize = 256;

/// Maximum length for email addresses (320 chars, RFC 5321)
pub const MAX_EMAIL_LEN: usize = 320;

/// Maximum length for post titles (512 chars)
pub const MAX_TITLE_LEN: usize = 512;

/// Maximum length for post bodies (64KB)
pub const MAX_BODY_LEN: usize = 64 * 1024;

/// Maximum length for comment text (16KB)
pub const MAX_COMMENT_LEN: usize = 16 * 1024;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyName,
    EmptyEmail,
    NegativeAge(i32),
    NameTooLong { len: usize, max: usize },
    EmailTooLong { len: usize, max: usize },
    TitleTooLong { len: usize, max: usize },
    BodyTooLong { len: usize, max: usize },
    CommentTooLong { len: usize, max: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::EmptyEmail => write!(f, "Email cannot be empty"),
            Self::NegativeAge(age) => write!(f, "Age cannot be negative: {}", age),
            Self::NameTooLong { len, max } => {
                write!(f, "Account name too long: {} chars (max {})", len, max)
            }
            Self::EmailTooLong { len, max } => {
                write!(f, "Email too long: {} chars (max {})", len, max)
            }
            Self::TitleTooLong { len, max } => {
                write!(f, "Post title too long: {} chars (max {})", len, max)
            }
            Self::BodyTooLong { len, max } => {
                write!(f, "Post body too long: {} chars (max {})", len, max)
            }
            Self::CommentTooLong { len, max } => {
                write!(f, "Comment too long: {} chars (max {})", len, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Validation(e.to_string())
    }
}

fn check_len(
    value: &str,
    max: usize,
    err: impl FnOnce(usize, usize) -> ValidationError,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max {
        return Err(err(len, max));
    }
    Ok(())
}

/// Validate account input
pub fn validate_new_account(input: &NewAccount) -> Result<(), ValidationError> {
    if input.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if input.email.trim().is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    check_len(&input.name, MAX_NAME_LEN, |len, max| {
        ValidationError::NameTooLong { len, max }
    })?;
    check_len(&input.email, MAX_EMAIL_LEN, |len, max| {
        ValidationError::EmailTooLong { len, max }
    })?;
    if let Some(age) = input.age.filter(|age| *age < 0) {
        return Err(ValidationError::NegativeAge(age));
    }
    Ok(())
}

/// Validate post input
pub fn validate_new_post(input: &NewPost) -> Result<(), ValidationError> {
    check_len(&input.title, MAX_TITLE_LEN, |len, max| {
        ValidationError::TitleTooLong { len, max }
    })?;
    check_len(&input.body, MAX_BODY_LEN, |len, max| {
        ValidationError::BodyTooLong { len, max }
    })
}

/// Validate comment input
pub fn validate_new_comment(input: &NewComment) -> Result<(), ValidationError> {
    check_len(&input.text, MAX_COMMENT_LEN, |len, max| {
        ValidationError::CommentTooLong { len, max }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{AccountId, PostId};

    #[test]
    fn test_validate_new_account() {
        assert!(validate_new_account(&NewAccount::new("Ann", "ann@x.com")).is_ok());
        assert_eq!(
            validate_new_account(&NewAccount::new("", "ann@x.com")),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            validate_new_account(&NewAccount::new("Ann", "  ")),
            Err(ValidationError::EmptyEmail)
        );
        assert!(validate_new_account(&NewAccount::new("x".repeat(300), "a@b.c")).is_err());
        assert_eq!(
            validate_new_account(&NewAccount::new("Ann", "a@b.c").with_age(-1)),
            Err(ValidationError::NegativeAge(-1))
        );
    }

    #[test]
    fn test_validate_post_and_comment_lengths() {
        let author = AccountId::new("a1");
        assert!(validate_new_post(&NewPost::new("", "", false, author.clone())).is_ok());
        assert!(
            validate_new_post(&NewPost::new("x".repeat(600), "", false, author.clone())).is_err()
        );

        let comment = NewComment::new("x".repeat(20_000), author, PostId::new("p1"));
        assert!(matches!(
            validate_new_comment(&comment),
            Err(ValidationError::CommentTooLong { .. })
        ));
    }

    #[test]
    fn test_validation_error_converts_to_error() {
        let err: Error = ValidationError::EmptyName.into();
        assert_eq!(err.kind(), "VALIDATION");
    }
}
