use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::forms::PostFields;

/// Post entity - a blog post, either a draft or published.
///
/// A post is a draft exactly when `published_at` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a new draft post attributed to `author_id`.
    pub fn new(author_id: Uuid, fields: PostFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            title: fields.title,
            text: fields.text,
            created_at: Utc::now(),
            published_at: None,
        }
    }

    pub fn is_draft(&self) -> bool {
        self.published_at.is_none()
    }

    /// Replace the editable content. Publication state is left alone.
    pub fn update(&mut self, fields: PostFields) {
        self.title = fields.title;
        self.text = fields.text;
    }

    /// Publish the post now.
    ///
    /// Publishing an already published post moves its timestamp forward.
    pub fn publish(&mut self) {
        self.publish_at(Utc::now());
    }

    pub fn publish_at(&mut self, at: DateTime<Utc>) {
        self.published_at = Some(at);
    }
}
