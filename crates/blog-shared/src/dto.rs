//! Page contexts - what each template receives.
//!
//! Form contexts are generic over the form values so this crate stays free of
//! domain types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A post as shown in listings and on its detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    pub id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A form with its current values and any field errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormView<F> {
    pub values: F,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl<F> FormView<F> {
    pub fn new(values: F) -> Self {
        Self {
            values,
            errors: BTreeMap::new(),
        }
    }

    pub fn with_errors(values: F, errors: BTreeMap<String, Vec<String>>) -> Self {
        Self { values, errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// `post_list.html`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListPage {
    pub posts: Vec<PostView>,
}

/// `draft_list.html`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftListPage {
    pub drafts: Vec<PostView>,
}

/// `post_detail.html`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailPage<F> {
    pub post: PostView,
    pub comments: Vec<CommentView>,
    pub form: FormView<F>,
}

/// `add_comment.html`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentFormPage<F> {
    pub post_id: Uuid,
    pub form: FormView<F>,
}

/// `create_edit_post.html`. `post_id` is `None` when creating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostFormPage<F> {
    pub post_id: Option<Uuid>,
    pub form: FormView<F>,
}
