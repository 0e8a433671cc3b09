//! # blog-core
//!
//! The domain logic of the terminal blog: users, posts, and the
//! single-session store that decides who may edit what. No I/O lives here;
//! prompting and rendering belong to the `rusty-blog` binary.

pub mod credential;
pub mod error;
pub mod models;
pub mod session;

// Re-exporting for easier access in other crates
pub use credential::*;
pub use error::*;
pub use models::*;
pub use session::*;
