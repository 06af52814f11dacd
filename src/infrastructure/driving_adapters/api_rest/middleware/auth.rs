//! Bearer Token Authentication
//!
//! Extracts the bearer token from requests and resolves it to a verified
//! subject through the configured `IdentityVerifier`.

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts},
    response::Response,
};

use crate::domain::gateways::IdentityVerifier;
use crate::domain::models::todo::SubjectId;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, AuthError};

/// Authenticated user extracted from a verified token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub subject: SubjectId,
}

/// Bearer token authentication extractor
///
/// Rejects with 401 before the handler body runs, so no store call can
/// happen for an unauthenticated request.
pub struct JwtAuth(pub AuthenticatedUser);

/// Pull the token out of an `Authorization: Bearer <token>` header value
fn bearer_token(header_value: &str) -> Result<&str, AuthError> {
    let (scheme, token) = header_value
        .split_once(' ')
        .ok_or(AuthError::MalformedToken)?;

    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(AuthError::MalformedToken);
    }
    Ok(token)
}

impl<S> FromRequestParts<S> for JwtAuth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get verifier from request extensions
        let verifier = parts
            .extensions
            .get::<Arc<dyn IdentityVerifier>>()
            .cloned()
            .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("Identity verifier not available")))?;

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::MalformedToken)?;

        let token = bearer_token(auth_header)?;
        let subject = verifier.verify(token).await?;

        Ok(JwtAuth(AuthenticatedUser { subject }))
    }
}

/// Middleware layer that adds the identity verifier to request extensions
pub async fn add_identity_extension(
    State(state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: axum::middleware::Next,
) -> Response {
    request
        .extensions_mut()
        .insert(state.identity_verifier.clone());
    next.run(request).await
}
