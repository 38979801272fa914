//! Comment handlers.
//!
//! Two ways in: posting to the detail page re-renders it, while the dedicated
//! comment page redirects to the post once the comment is stored.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::{Comment, Post};
use blog_core::forms::{CommentForm, FormErrors};
use blog_core::ports::BaseRepository;
use blog_shared::dto::{CommentFormPage, FormView};

use super::posts::{find_post, render_detail};
use crate::middleware::auth::Authenticated;
use crate::middleware::error::AppResult;
use crate::render::{ADD_COMMENT_TEMPLATE, post_detail_path, redirect, render};
use crate::state::AppState;

/// Validate and store a comment on `post`.
///
/// On validation failure nothing is stored and the errors come back for the
/// form to show.
async fn store_comment(
    state: &AppState,
    post: &Post,
    author_id: Uuid,
    form: CommentForm,
) -> AppResult<Result<Comment, FormErrors>> {
    let fields = match form.into_fields() {
        Ok(fields) => fields,
        Err(errors) => return Ok(Err(errors)),
    };

    let comment = state
        .comments
        .save(Comment::new(post.id, author_id, fields))
        .await?;
    tracing::info!(
        post_id = %post.id,
        comment_id = %comment.id,
        %author_id,
        "Comment added"
    );

    Ok(Ok(comment))
}

/// POST /post/{id}/ - add a comment and re-render the detail page.
pub async fn submit_comment(
    user: Authenticated,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    form: web::Form<CommentForm>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;
    let submitted = form.into_inner();

    let form = match store_comment(&state, &post, user.user_id, submitted.clone()).await? {
        Ok(_) => FormView::new(CommentForm::default()),
        Err(errors) => FormView::with_errors(submitted, errors.into_inner()),
    };

    render_detail(&state, &post, form).await
}

/// GET /post/{id}/comment/
pub async fn add_comment_form(
    _user: Authenticated,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    Ok(render(
        ADD_COMMENT_TEMPLATE,
        CommentFormPage {
            post_id: post.id,
            form: FormView::new(CommentForm::default()),
        },
    ))
}

/// POST /post/{id}/comment/ - store the comment, then redirect to the post.
pub async fn add_comment(
    user: Authenticated,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    form: web::Form<CommentForm>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;
    let submitted = form.into_inner();

    match store_comment(&state, &post, user.user_id, submitted.clone()).await? {
        Ok(_) => Ok(redirect(post_detail_path(post.id))),
        Err(errors) => Ok(render(
            ADD_COMMENT_TEMPLATE,
            CommentFormPage {
                post_id: post.id,
                form: FormView::with_errors(submitted, errors.into_inner()),
            },
        )),
    }
}
