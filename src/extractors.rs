use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;

// The plain-text `username` header is the only credential todo routes carry.
// A missing or unreadable header can never match a registered user, so it
// rejects the same way an unknown username does.
#[derive(Debug)]
pub struct UsernameHeader(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for UsernameHeader
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get("username")
            .and_then(|value| value.to_str().ok())
            .map(|value| UsernameHeader(value.to_owned()))
            .ok_or(AppError::UserNotFound)
    }
}
