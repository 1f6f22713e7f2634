//! Identity boundary. The edge auth proxy (Clerk-backed) verifies the session
//! and forwards the opaque external user id in the `x-user-id` header; this
//! service never sees credentials.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller's external (auth-provider) user id.
///
/// Extract as `AuthUser` where identity is required (401 when absent), or as
/// `Option<AuthUser>` on read-only listing endpoints that degrade to an empty
/// result instead of failing.
#[derive(Debug, Clone)]
pub struct AuthUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| AuthUser(s.to_string()))
            .ok_or(AppError::Unauthorized)
    }
}
