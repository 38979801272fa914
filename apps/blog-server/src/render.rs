//! Handing pages to the renderer, and redirects.
//!
//! HTML generation lives outside this service: a rendered page is the
//! template name plus its context, serialized as JSON.

use actix_web::{HttpResponse, http::header};
use serde::Serialize;
use uuid::Uuid;

use blog_core::domain::{Comment, Post};
use blog_shared::Page;
use blog_shared::dto::{CommentView, PostView};

pub const POST_LIST_TEMPLATE: &str = "post_list.html";
pub const DRAFT_LIST_TEMPLATE: &str = "draft_list.html";
pub const POST_DETAIL_TEMPLATE: &str = "post_detail.html";
pub const ADD_COMMENT_TEMPLATE: &str = "add_comment.html";
pub const POST_FORM_TEMPLATE: &str = "create_edit_post.html";

pub const POST_LIST_PATH: &str = "/";

pub fn post_detail_path(id: Uuid) -> String {
    format!("/post/{}/", id)
}

pub fn render<T: Serialize>(template: &str, context: T) -> HttpResponse {
    HttpResponse::Ok().json(Page::new(template, context))
}

/// 303 See Other, so the browser follows up with a GET.
pub fn redirect(location: impl AsRef<str>) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.as_ref()))
        .finish()
}

pub fn post_view(post: &Post) -> PostView {
    PostView {
        id: post.id,
        author_id: post.author_id,
        title: post.title.clone(),
        text: post.text.clone(),
        created_at: post.created_at,
        published_at: post.published_at,
    }
}

pub fn comment_view(comment: &Comment) -> CommentView {
    CommentView {
        id: comment.id,
        author_id: comment.author_id,
        text: comment.text.clone(),
        created_at: comment.created_at,
    }
}
