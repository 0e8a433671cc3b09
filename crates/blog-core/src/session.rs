//! # Blog Session
//!
//! The single-session store. It owns every user and post, tracks at most
//! one logged-in user, and enforces the authorization rules on mutation.
//! All operations are synchronous in-memory reads and writes; the `&mut
//! self` receivers are the whole concurrency story. A caller that needs to
//! share one session across threads wraps the `Blog` in a mutex or behind
//! an actor — the internals stay lock-free.

use chrono::Utc;
use tracing::{debug, info};

use crate::credential::CredentialHash;
use crate::error::{BlogError, Result};
use crate::models::{Post, PostPatch, User};

/// Monotonic id allocator owned by one session. The first id handed out is
/// 1; ids are never reused, deletions leave gaps.
#[derive(Debug, Default)]
struct IdSequence(u64);

impl IdSequence {
    fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}

/// One interactive blogging session.
///
/// Users and posts live here and nowhere else; posts keep their insertion
/// order (oldest first). Users get ids from one sequence, posts from an
/// independent one, so both start at 1.
#[derive(Debug, Default)]
pub struct Blog {
    users: Vec<User>,
    posts: Vec<Post>,
    current_user: Option<u64>,
    user_ids: IdSequence,
    post_ids: IdSequence,
}

impl Blog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new account. Does NOT log the new user in.
    ///
    /// Fails with [`BlogError::DuplicateUsername`] if the name is taken;
    /// nothing is registered in that case, and a failed credential
    /// derivation burns no id either.
    pub fn sign_up(&mut self, username: &str, password: &str) -> Result<&User> {
        if self.users.iter().any(|u| u.username == username) {
            return Err(BlogError::DuplicateUsername(username.to_string()));
        }
        let credential = CredentialHash::derive(password)?;
        let user = User {
            id: self.user_ids.next(),
            username: username.to_string(),
            credential,
            created_at: Utc::now(),
        };
        info!(user = ?user, "user signed up");
        self.users.push(user);
        Ok(self.users.last().expect("pushed above"))
    }

    /// Scans the registered users; the first one with this username whose
    /// credential verifies becomes the current user. Usernames are unique,
    /// so at most one can match.
    ///
    /// Logging in while already logged in is allowed and silently replaces
    /// the session user.
    pub fn log_in(&mut self, username: &str, password: &str) -> Result<&User> {
        for user in &self.users {
            if user.username == username && user.check_password(password) {
                if let Some(prev) = self.current_user {
                    if prev != user.id {
                        debug!(prev, next = user.id, "re-login replaced the session user");
                    }
                }
                self.current_user = Some(user.id);
                info!(user = ?user, "logged in");
                return Ok(user);
            }
        }
        debug!(username, "login rejected");
        Err(BlogError::InvalidCredentials)
    }

    /// Ends the login, if any. Calling while logged out is not an error.
    pub fn log_out(&mut self) {
        if let Some(id) = self.current_user.take() {
            info!(user = id, "logged out");
        }
    }

    /// The logged-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.and_then(|id| self.user_by_id(id))
    }

    /// Appends a post authored by the current user.
    pub fn create_post(&mut self, title: &str, body: &str) -> Result<&Post> {
        let author = self.current_user.ok_or(BlogError::NotAuthenticated)?;
        let post = Post {
            id: self.post_ids.next(),
            title: title.to_string(),
            body: body.to_string(),
            author,
            created_at: Utc::now(),
        };
        info!(post = post.id, author, "post created");
        self.posts.push(post);
        Ok(self.posts.last().expect("pushed above"))
    }

    /// Every post, oldest first. An empty slice is a valid answer.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Looks up a single post by id.
    pub fn post(&self, id: u64) -> Result<&Post> {
        self.posts
            .iter()
            .find(|p| p.id == id)
            .ok_or(BlogError::PostNotFound(id))
    }

    /// Applies a partial update to a post owned by the current user.
    pub fn edit_post(&mut self, id: u64, patch: PostPatch) -> Result<&Post> {
        let index = self.authorize_mutation(id)?;
        self.posts[index].apply(patch);
        info!(post = id, "post updated");
        Ok(&self.posts[index])
    }

    /// Removes a post owned by the current user and returns it. The id is
    /// never reused.
    pub fn delete_post(&mut self, id: u64) -> Result<Post> {
        let index = self.authorize_mutation(id)?;
        let post = self.posts.remove(index);
        info!(post = id, "post deleted");
        Ok(post)
    }

    /// Resolves a post's author for rendering.
    pub fn author_of(&self, post: &Post) -> Option<&User> {
        self.user_by_id(post.author)
    }

    /// The authorization gate shared by edit and delete. The check order is
    /// load-bearing: a missing post answers "not found" before any auth
    /// question, and "not logged in" is kept distinct from "not the owner".
    fn authorize_mutation(&self, id: u64) -> Result<usize> {
        let index = self
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(BlogError::PostNotFound(id))?;
        let user = self.current_user.ok_or(BlogError::NotAuthenticated)?;
        if self.posts[index].author != user {
            debug!(post = id, user, "mutation denied: not the author");
            return Err(BlogError::Forbidden);
        }
        Ok(index)
    }

    fn user_by_id(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}
