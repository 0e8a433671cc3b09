//! # BlogError
//!
//! Centralized error handling for the blog session core.
//! Every failure an operation can produce is a recoverable status: the
//! front-end renders a message per kind and keeps its loop running.

use thiserror::Error;

/// The primary error type for all blog-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlogError {
    /// Sign-up with a username that is already registered.
    #[error("a user named {0:?} already exists")]
    DuplicateUsername(String),

    /// Login failed. Deliberately silent about which half was wrong.
    #[error("username and/or password is incorrect")]
    InvalidCredentials,

    /// A mutating operation with nobody logged in (~ HTTP 401).
    #[error("you must be logged in to perform this action")]
    NotAuthenticated,

    /// The logged-in user does not own the resource (~ HTTP 403).
    #[error("you do not have permission to modify this post")]
    Forbidden,

    /// The referenced post id does not exist (~ HTTP 404).
    #[error("post with an id of {0} does not exist")]
    PostNotFound(u64),

    /// The password hasher itself failed; not a user error.
    #[error("credential error: {0}")]
    Credential(String),
}

/// A specialized Result type for blog session logic.
pub type Result<T> = std::result::Result<T, BlogError>;
