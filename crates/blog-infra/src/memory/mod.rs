//! In-memory repositories - used when no database is configured, and in tests.
//!
//! Data is lost on process restart.

mod comments;
mod posts;

pub use comments::InMemoryCommentRepository;
pub use posts::InMemoryPostRepository;
