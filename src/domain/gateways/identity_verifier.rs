//! Identity Verifier Gateway
//!
//! Turns a bearer token into a verified subject identifier.

use async_trait::async_trait;

use crate::domain::models::todo::SubjectId;
use crate::shared::errors::AuthError;

/// Verifies bearer tokens issued by an external identity provider
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Validate the token and return its subject
    ///
    /// # Errors
    ///
    /// Returns an `AuthError` when the token is malformed, expired, signed by
    /// an unknown key, or issued for another issuer or audience.
    async fn verify(&self, token: &str) -> Result<SubjectId, AuthError>;
}
