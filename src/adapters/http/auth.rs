//! Caller identity forwarded by the authenticating gateway.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::error::ApiError;
use super::state::AppState;
use crate::domain::errors::DomainError;
use crate::domain::models::User;

/// Header carrying the authenticated username.
pub const USER_HEADER: &str = "x-forest-user";

/// The registered user making the request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let username = parts
            .headers
            .get(USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ApiError::unauthorized(format!("Missing {USER_HEADER} header")))?;

        match state.users.get(username).await {
            Ok(user) => Ok(Self(user)),
            Err(DomainError::UserNotFound(_)) => {
                Err(ApiError::unauthorized(format!("Unknown user: {username}")))
            }
            Err(e) => Err(e.into()),
        }
    }
}
