//! Post handlers: listings, detail page, create, edit and publish.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use blog_core::DomainError;
use blog_core::domain::Post;
use blog_core::forms::{CommentForm, PostForm};
use blog_core::ports::BaseRepository;
use blog_shared::dto::{DraftListPage, FormView, PostDetailPage, PostFormPage, PostListPage};

use crate::middleware::auth::StaffMember;
use crate::middleware::error::{AppError, AppResult};
use crate::render::{
    DRAFT_LIST_TEMPLATE, POST_DETAIL_TEMPLATE, POST_FORM_TEMPLATE, POST_LIST_PATH,
    POST_LIST_TEMPLATE, comment_view, post_detail_path, post_view, redirect, render,
};
use crate::state::AppState;

/// Publish request posted to the listing page.
#[derive(Debug, Deserialize)]
pub struct PublishForm {
    #[serde(default)]
    pub post_id: String,
}

pub(super) async fn find_post(state: &AppState, id: Uuid) -> AppResult<Post> {
    state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::post_not_found(id).into())
}

/// Render the detail page for `post` with its current comments.
pub(super) async fn render_detail(
    state: &AppState,
    post: &Post,
    form: FormView<CommentForm>,
) -> AppResult<HttpResponse> {
    let comments = state.comments.find_by_post_id(post.id).await?;

    Ok(render(
        POST_DETAIL_TEMPLATE,
        PostDetailPage {
            post: post_view(post),
            comments: comments.iter().map(comment_view).collect(),
            form,
        },
    ))
}

async fn publish(state: &AppState, post_id: Uuid, staff: StaffMember) -> AppResult<Post> {
    let mut post = find_post(state, post_id).await?;

    if !post.is_draft() {
        tracing::debug!(%post_id, "Republishing post, timestamp will move forward");
    }
    post.publish();

    let post = state.posts.save(post).await?;
    tracing::info!(%post_id, published_by = %staff.user_id, "Post published");

    Ok(post)
}

/// GET / - published posts, newest first.
pub async fn post_list(_staff: StaffMember, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_published().await?;

    Ok(render(
        POST_LIST_TEMPLATE,
        PostListPage {
            posts: posts.iter().map(post_view).collect(),
        },
    ))
}

/// POST / - publish the post named by `post_id`, then back to the listing.
pub async fn publish_from_list(
    staff: StaffMember,
    state: web::Data<AppState>,
    form: web::Form<PublishForm>,
) -> AppResult<HttpResponse> {
    let post_id = form
        .post_id
        .trim()
        .parse::<Uuid>()
        .map_err(|_| AppError::NotFound(format!("No post matches '{}'", form.post_id)))?;

    publish(&state, post_id, staff).await?;

    Ok(redirect(POST_LIST_PATH))
}

/// GET /drafts/
pub async fn draft_list(_staff: StaffMember, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let drafts = state.posts.find_drafts().await?;

    Ok(render(
        DRAFT_LIST_TEMPLATE,
        DraftListPage {
            drafts: drafts.iter().map(post_view).collect(),
        },
    ))
}

/// GET /post/{id}/ - public.
pub async fn post_detail(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    render_detail(&state, &post, FormView::new(CommentForm::default())).await
}

/// GET /post/new/
pub async fn new_post_form(_staff: StaffMember) -> HttpResponse {
    render(
        POST_FORM_TEMPLATE,
        PostFormPage {
            post_id: None,
            form: FormView::new(PostForm::default()),
        },
    )
}

/// POST /post/new/ - store a draft and go to its page.
pub async fn create_post(
    staff: StaffMember,
    state: web::Data<AppState>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let submitted = form.into_inner();

    let fields = match submitted.clone().into_fields() {
        Ok(fields) => fields,
        Err(errors) => {
            return Ok(render(
                POST_FORM_TEMPLATE,
                PostFormPage {
                    post_id: None,
                    form: FormView::with_errors(submitted, errors.into_inner()),
                },
            ));
        }
    };

    let post = state.posts.save(Post::new(staff.user_id, fields)).await?;
    tracing::info!(post_id = %post.id, author_id = %staff.user_id, "Draft created");

    Ok(redirect(post_detail_path(post.id)))
}

/// GET /post/{id}/edit/
pub async fn edit_post_form(
    _staff: StaffMember,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    Ok(render(
        POST_FORM_TEMPLATE,
        PostFormPage {
            post_id: Some(post.id),
            form: FormView::new(PostForm::from(&post)),
        },
    ))
}

/// POST /post/{id}/edit/ - replace title and text, leave publication alone.
pub async fn edit_post(
    staff: StaffMember,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let mut post = find_post(&state, path.into_inner()).await?;
    let submitted = form.into_inner();

    let fields = match submitted.clone().into_fields() {
        Ok(fields) => fields,
        Err(errors) => {
            return Ok(render(
                POST_FORM_TEMPLATE,
                PostFormPage {
                    post_id: Some(post.id),
                    form: FormView::with_errors(submitted, errors.into_inner()),
                },
            ));
        }
    };

    post.update(fields);
    let post = state.posts.save(post).await?;
    tracing::info!(post_id = %post.id, edited_by = %staff.user_id, "Post updated");

    Ok(redirect(post_detail_path(post.id)))
}

/// GET|POST /post/{id}/publish/
pub async fn publish_post(
    staff: StaffMember,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    publish(&state, path.into_inner(), staff).await?;

    Ok(redirect(POST_LIST_PATH))
}
