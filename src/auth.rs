use crate::errors::AppError;
use axum::http::{HeaderMap, header};

/// Caller identity taken from the `Authorization: Bearer <subject>` header.
/// Token verification happens upstream at the identity provider; by the
/// time a request reaches this service the bearer value is the verified
/// user id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
}

pub fn require_identity(headers: &HeaderMap) -> Result<Identity, AppError> {
    match identity_from_headers(headers) {
        Some(identity) => Ok(identity),
        None => Err(AppError::unauthorized("missing bearer credentials")),
    }
}

pub fn identity_from_headers(headers: &HeaderMap) -> Option<Identity> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }

    Some(Identity {
        user_id: token.to_string(),
    })
}
