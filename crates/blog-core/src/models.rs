//! # Domain Models
//!
//! The core entities of the blog session: registered users and their posts.
//! Ids are plain integers handed out by the owning [`Blog`](crate::session::Blog)
//! session, starting at 1 and strictly increasing; no global counter leaks
//! state between independent sessions.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::credential::CredentialHash;

/// A registered account. Immutable once created; users are never deleted,
/// so a post's author reference stays valid for the post's lifetime.
#[derive(Clone, Serialize)]
pub struct User {
    pub id: u64,
    /// Unique within a session; enforced by `Blog::sign_up`.
    pub username: String,
    /// Argon2id verifier. Never serialized, never printed.
    #[serde(skip_serializing)]
    pub credential: CredentialHash,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// True iff `candidate` is the password this account signed up with.
    pub fn check_password(&self, candidate: &str) -> bool {
        self.credential.matches(candidate)
    }
}

/// The bare username, the form shown on posts.
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

/// `User#<id>|<username>` — the credential stays out of logs.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User#{}|{}", self.id, self.username)
    }
}

/// A text post. Title and body are mutable through [`PostPatch`] only.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    /// Id of the owning [`User`].
    pub author: u64,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Applies a partial update in place. Fields the patch leaves as `None`
    /// are untouched.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
    }
}

/// An explicit, field-by-field update request for a post.
///
/// There is no way to express an unrecognized field here, which is the
/// point: "unknown keys are silently ignored" becomes unrepresentable.
/// An all-`None` patch is a valid no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl PostPatch {
    /// A patch that replaces only the title.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: None,
        }
    }

    /// A patch that replaces only the body.
    pub fn body(body: impl Into<String>) -> Self {
        Self {
            title: None,
            body: Some(body.into()),
        }
    }
}
