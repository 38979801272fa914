//! Shared fixtures for handler tests.

use std::sync::Arc;

use actix_web::http::header::{self, HeaderName};
use uuid::Uuid;

use blog_core::domain::Post;
use blog_core::forms::PostFields;
use blog_core::ports::{BaseRepository, TokenService};
use blog_infra::{JwtConfig, JwtTokenService};

use crate::config::DEFAULT_LOGIN_URL;
use crate::state::AppState;

/// Build an initialized service for `state` with the real route table.
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state.clone()))
                .app_data(crate::handlers::form_config(
                    crate::config::DEFAULT_FORM_LIMIT,
                ))
                .configure(crate::handlers::configure_routes),
        )
        .await
    };
}

pub(crate) use test_app;

pub struct TestContext {
    pub state: AppState,
    tokens: Arc<JwtTokenService>,
}

impl TestContext {
    pub fn new() -> Self {
        let tokens = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "test-secret-key".to_string(),
            expiration_hours: 1,
            issuer: "test-issuer".to_string(),
        }));

        Self {
            state: AppState::in_memory(tokens.clone(), DEFAULT_LOGIN_URL),
            tokens,
        }
    }

    fn token(&self, roles: &[&str]) -> (Uuid, String) {
        let user_id = Uuid::new_v4();
        let token = self
            .tokens
            .generate_token(
                user_id,
                "someone@example.com",
                roles.iter().map(|r| r.to_string()).collect(),
            )
            .unwrap();
        (user_id, token)
    }

    pub fn staff(&self) -> (Uuid, String) {
        self.token(&["staff"])
    }

    pub fn user(&self) -> (Uuid, String) {
        self.token(&["user"])
    }

    pub async fn seed_post(&self, title: &str, published: bool) -> Post {
        let mut post = Post::new(
            Uuid::new_v4(),
            PostFields {
                title: title.to_string(),
                text: format!("{} body", title),
            },
        );
        if published {
            post.publish();
        }
        self.state.posts.save(post).await.unwrap()
    }

    pub async fn comment_count(&self, post_id: Uuid) -> usize {
        self.state
            .comments
            .find_by_post_id(post_id)
            .await
            .unwrap()
            .len()
    }
}

pub fn bearer(token: &str) -> (HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

pub fn location(response: &actix_web::dev::ServiceResponse) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
