use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::forms::CommentFields;

/// Comment entity - belongs to exactly one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment on `post_id` written by `author_id`.
    pub fn new(post_id: Uuid, author_id: Uuid, fields: CommentFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id,
            author_id,
            text: fields.text,
            created_at: Utc::now(),
        }
    }
}
