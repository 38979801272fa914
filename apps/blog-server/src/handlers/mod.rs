//! HTTP handlers and route configuration.

mod comments;
mod health;
mod posts;

use actix_web::web;

/// Form extractor settings shared by every route that takes a form body.
pub fn form_config(limit: usize) -> web::FormConfig {
    web::FormConfig::default().limit(limit)
}

/// Configure all application routes.
///
/// `/post/new/` is registered before `/post/{id}/` so "new" is never parsed
/// as an id.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::resource("/")
                .route(web::get().to(posts::post_list))
                .route(web::post().to(posts::publish_from_list)),
        )
        .route("/drafts/", web::get().to(posts::draft_list))
        .service(
            web::resource("/post/new/")
                .route(web::get().to(posts::new_post_form))
                .route(web::post().to(posts::create_post)),
        )
        .service(
            web::resource("/post/{id}/")
                .route(web::get().to(posts::post_detail))
                .route(web::post().to(comments::submit_comment)),
        )
        .service(
            web::resource("/post/{id}/edit/")
                .route(web::get().to(posts::edit_post_form))
                .route(web::post().to(posts::edit_post)),
        )
        .service(
            web::resource("/post/{id}/publish/")
                .route(web::get().to(posts::publish_post))
                .route(web::post().to(posts::publish_post)),
        )
        .service(
            web::resource("/post/{id}/comment/")
                .route(web::get().to(comments::add_comment_form))
                .route(web::post().to(comments::add_comment)),
        );
}
