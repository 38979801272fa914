//! Caller identity and capability gates.
//!
//! [`StaffMember`] and [`Authenticated`] are extractors: put one first in a
//! handler's argument list and the gate runs before the handler body does.
//!
//! ```ignore
//! async fn drafts(staff: StaffMember, state: web::Data<AppState>) -> AppResult<HttpResponse> {
//!     // only staff get here
//! }
//! ```

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};
use uuid::Uuid;

use blog_core::DomainError;
use blog_core::domain::{Caller, Capability};
use blog_core::ports::AuthError;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Resolve the caller from the `Authorization: Bearer` header.
///
/// Missing, malformed, expired or otherwise invalid tokens all yield
/// [`Caller::Anonymous`].
fn resolve_caller(req: &HttpRequest, state: &AppState) -> Caller {
    let token = match bearer_token(req) {
        Ok(token) => token,
        Err(AuthError::MissingAuth) => return Caller::Anonymous,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring malformed authorization header");
            return Caller::Anonymous;
        }
    };

    match state.tokens.validate_token(token) {
        Ok(claims) => Caller::from(claims),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected bearer token");
            Caller::Anonymous
        }
    }
}

fn bearer_token(req: &HttpRequest) -> Result<&str, AuthError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?;

    auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::InvalidToken("Expected Bearer token".to_string()))
}

/// Login URL with a `next` parameter pointing back at this request.
fn login_redirect(req: &HttpRequest, login_url: &str) -> String {
    let next = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| req.path());

    format!("{}?next={}", login_url, urlencoding::encode(next))
}

fn gate(req: &HttpRequest, capability: Capability) -> Result<Uuid, AppError> {
    let Some(state) = req.app_data::<web::Data<AppState>>() else {
        tracing::error!("AppState not found in app data");
        return Err(AppError::Internal("Server configuration error".to_string()));
    };

    resolve_caller(req, state)
        .authorize(capability)
        .map_err(|e| match e {
            DomainError::Unauthenticated => AppError::LoginRequired {
                location: login_redirect(req, &state.login_url),
            },
            other => other.into(),
        })
}

/// A logged-in caller. Anonymous requests are redirected to the login page.
#[derive(Debug, Clone, Copy)]
pub struct Authenticated {
    pub user_id: Uuid,
}

impl FromRequest for Authenticated {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(gate(req, Capability::Authenticated).map(|user_id| Authenticated { user_id }))
    }
}

/// A caller with staff capability. Anonymous requests are redirected to the
/// login page; other users get 403.
#[derive(Debug, Clone, Copy)]
pub struct StaffMember {
    pub user_id: Uuid,
}

impl FromRequest for StaffMember {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(gate(req, Capability::Staff).map(|user_id| StaffMember { user_id }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    use crate::test_support::{TestContext, bearer};

    #[actix_web::test]
    async fn test_invalid_token_is_anonymous() {
        let ctx = TestContext::new();
        let req = TestRequest::get()
            .uri("/drafts/")
            .app_data(web::Data::new(ctx.state.clone()))
            .insert_header((header::AUTHORIZATION, "Bearer not-a-jwt"))
            .to_http_request();

        let err = Authenticated::extract(&req).await.unwrap_err();
        assert!(matches!(err, AppError::LoginRequired { .. }));
    }

    #[actix_web::test]
    async fn test_non_bearer_scheme_is_anonymous() {
        let ctx = TestContext::new();
        let req = TestRequest::get()
            .uri("/drafts/")
            .app_data(web::Data::new(ctx.state.clone()))
            .insert_header((header::AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_http_request();

        let err = Authenticated::extract(&req).await.unwrap_err();
        assert!(matches!(err, AppError::LoginRequired { .. }));
    }

    #[actix_web::test]
    async fn test_staff_gate_redirects_anonymous_with_next() {
        let ctx = TestContext::new();
        let req = TestRequest::get()
            .uri("/drafts/?page=2")
            .app_data(web::Data::new(ctx.state.clone()))
            .to_http_request();

        let err = StaffMember::extract(&req).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::LoginRequired { location } if location == "/accounts/login/?next=%2Fdrafts%2F%3Fpage%3D2"
        ));
    }

    #[actix_web::test]
    async fn test_staff_gate_forbids_plain_user() {
        let ctx = TestContext::new();
        let (_, token) = ctx.user();
        let req = TestRequest::get()
            .uri("/drafts/")
            .app_data(web::Data::new(ctx.state.clone()))
            .insert_header(bearer(&token))
            .to_http_request();

        let err = StaffMember::extract(&req).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[actix_web::test]
    async fn test_staff_gate_admits_staff() {
        let ctx = TestContext::new();
        let (staff_id, token) = ctx.staff();
        let req = TestRequest::get()
            .uri("/drafts/")
            .app_data(web::Data::new(ctx.state.clone()))
            .insert_header(bearer(&token))
            .to_http_request();

        let staff = StaffMember::extract(&req).await.unwrap();
        assert_eq!(staff.user_id, staff_id);
    }

    #[actix_web::test]
    async fn test_authenticated_gate_admits_plain_user() {
        let ctx = TestContext::new();
        let (user_id, token) = ctx.user();
        let req = TestRequest::post()
            .uri("/post/1/comment/")
            .app_data(web::Data::new(ctx.state.clone()))
            .insert_header(bearer(&token))
            .to_http_request();

        let user = Authenticated::extract(&req).await.unwrap();
        assert_eq!(user.user_id, user_id);
    }
}
