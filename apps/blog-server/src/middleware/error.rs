//! Error handling - RFC 7807 bodies, and the login redirect.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header};
use blog_shared::ErrorResponse;
use std::fmt;

use blog_core::error::{DomainError, RepoError};

/// Application-level error type that converts to HTTP responses.
///
/// Form validation failures are not errors here: handlers re-render the form.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    /// Anonymous caller on a gated route. Carries the full login URL.
    LoginRequired { location: String },
    Forbidden,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::LoginRequired { location } => write!(f, "Login required: {}", location),
            AppError::Forbidden => write!(f, "Forbidden"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::LoginRequired { .. } => StatusCode::FOUND,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::LoginRequired { location } => {
                return HttpResponse::build(self.status_code())
                    .insert_header((header::LOCATION, location.as_str()))
                    .finish();
            }
            AppError::Forbidden => ErrorResponse::forbidden(),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            // Gates build the login redirect themselves; this is the fallback.
            DomainError::Unauthenticated => AppError::LoginRequired {
                location: crate::config::DEFAULT_LOGIN_URL.to_string(),
            },
            DomainError::Forbidden => AppError::Forbidden,
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(msg) => {
                tracing::error!("Database constraint violation: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::from(DomainError::post_not_found(Uuid::new_v4()));

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_login_required_redirects() {
        let err = AppError::LoginRequired {
            location: "/accounts/login/?next=%2Fdrafts%2F".to_string(),
        };
        let response = err.error_response();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/accounts/login/?next=%2Fdrafts%2F"
        );
    }

    #[test]
    fn test_constraint_violation_is_internal() {
        let err = AppError::from(RepoError::Constraint(
            "insert or update on table \"comments\" violates foreign key constraint".to_string(),
        ));

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(err, AppError::Internal(msg) if msg == "Database error"));
    }

    #[test]
    fn test_repo_errors_hide_details() {
        let err = AppError::from(RepoError::Query("syntax error at or near".to_string()));

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(err, AppError::Internal(msg) if msg == "Database error"));
    }
}
