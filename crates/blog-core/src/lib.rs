//! # Blog Core
//!
//! The domain layer of the blog.
//! Posts, comments, callers and form validation live here, with zero
//! infrastructure dependencies. Storage and token handling are reached
//! through the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod forms;
pub mod ports;

pub use error::DomainError;
