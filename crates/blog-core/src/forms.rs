//! Form validation.
//!
//! Submitted forms are plain data. [`CommentForm::into_fields`] and
//! [`PostForm::into_fields`] trim them, run the `validator` rules and either
//! hand back the validated fields or a [`FormErrors`] map keyed by field name.
//! Nothing here touches storage.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::domain::Post;

/// Longest accepted post title, in characters. The `posts.title` column uses
/// the same width.
pub const TITLE_MAX_LENGTH: u64 = 200;

const REQUIRED: &str = "This field is required.";

/// Field-level validation errors, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut form_errors = FormErrors::default();

        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                form_errors.add(field.to_string(), message);
            }
        }

        form_errors
    }
}

/// Comment submission. Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CommentForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "This field is required."))]
    pub text: String,
}

/// A comment that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentFields {
    pub text: String,
}

impl CommentForm {
    pub fn into_fields(self) -> Result<CommentFields, FormErrors> {
        let form = Self {
            text: self.text.trim().to_string(),
        };
        form.validate()?;

        Ok(CommentFields { text: form.text })
    }
}

/// Post create/edit submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PostForm {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = TITLE_MAX_LENGTH,
        message = "Title must be between 1 and 200 characters."
    ))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "This field is required."))]
    pub text: String,
}

/// Post content that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub text: String,
}

impl PostForm {
    pub fn into_fields(self) -> Result<PostFields, FormErrors> {
        let form = Self {
            title: self.title.trim().to_string(),
            text: self.text.trim().to_string(),
        };

        if let Err(errors) = form.validate() {
            let mut form_errors = FormErrors::from(errors);
            // Blank titles report as required, not as a length error.
            if form.title.is_empty() {
                form_errors.0.insert("title".to_string(), vec![REQUIRED.to_string()]);
            }
            return Err(form_errors);
        }

        Ok(PostFields {
            title: form.title,
            text: form.text,
        })
    }
}

impl From<&Post> for PostForm {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            text: post.text.clone(),
        }
    }
}
