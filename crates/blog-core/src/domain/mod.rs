//! Domain entities - the core business objects.

mod caller;
mod comment;
mod post;

pub use caller::{Caller, Capability, STAFF_ROLES};
pub use comment::Comment;
pub use post::Post;
