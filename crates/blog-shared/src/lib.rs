//! # Blog Shared
//!
//! Page contexts handed to the renderer and RFC 7807 error bodies.
//! Kept free of domain types so any rendering front end can depend on it.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, Page};
