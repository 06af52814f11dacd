//! JWKS-backed Identity Verifier
//!
//! Validates RS256 bearer tokens against the key set an identity provider
//! publishes at its well-known JWKS endpoint. Keys are cached in memory and
//! refetched when a token names a `kid` that is not cached yet, at most
//! `requests_per_minute` times per minute. Tokens whose key is already cached
//! never wait on a refetch.

use std::num::NonZeroU32;
use std::time::Duration;

use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use jsonwebtoken::jwk::{Jwk, JwkSet};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tokio::sync::{Mutex, RwLock};

use crate::domain::gateways::IdentityVerifier;
use crate::domain::models::todo::SubjectId;
use crate::infrastructure::driven_adapters::config::AuthConfig;
use crate::shared::errors::AuthError;

/// Claims read from a verified token; `aud`, `iss` and `exp` are checked by
/// `Validation` and not needed afterwards
#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
}

fn lookup(keys: &JwkSet, kid: Option<&str>) -> Option<Jwk> {
    match kid {
        Some(kid) => keys.find(kid).cloned(),
        None if keys.keys.len() == 1 => keys.keys.first().cloned(),
        None => None,
    }
}

fn fetch_limiter(requests_per_minute: u32) -> DefaultDirectRateLimiter {
    let per_minute = NonZeroU32::new(requests_per_minute).unwrap_or(NonZeroU32::MIN);
    RateLimiter::direct(Quota::per_minute(per_minute))
}

/// Identity verifier backed by a remote JSON Web Key Set
pub struct JwksIdentityVerifier {
    client: reqwest::Client,
    jwks_uri: String,
    validation: Validation,
    keys: RwLock<Option<JwkSet>>,
    /// Held for the duration of a download so only one runs at a time
    refresh: Mutex<()>,
    fetch_limiter: DefaultDirectRateLimiter,
}

impl JwksIdentityVerifier {
    /// Create a verifier for the given key set location and expected claims
    ///
    /// # Errors
    ///
    /// Returns a `reqwest::Error` if the HTTP client cannot be built.
    pub fn new(
        jwks_uri: String,
        issuer: &str,
        audience: &str,
        requests_per_minute: u32,
        fetch_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "sub", "iss", "aud"]);

        let client = reqwest::Client::builder().timeout(fetch_timeout).build()?;

        Ok(Self {
            client,
            jwks_uri,
            validation,
            keys: RwLock::new(None),
            refresh: Mutex::new(()),
            fetch_limiter: fetch_limiter(requests_per_minute),
        })
    }

    /// Create a verifier from the identity provider configuration
    ///
    /// # Errors
    ///
    /// Returns a `reqwest::Error` if the HTTP client cannot be built.
    pub fn from_config(config: &AuthConfig) -> Result<Self, reqwest::Error> {
        Self::new(
            config.jwks_uri(),
            &config.issuer(),
            &config.audience,
            config.jwks_requests_per_minute,
            Duration::from_secs(config.jwks_timeout_secs),
        )
    }

    async fn cached_key(&self, kid: Option<&str>) -> Option<Jwk> {
        self.keys.read().await.as_ref().and_then(|keys| lookup(keys, kid))
    }

    async fn signing_key(&self, kid: Option<&str>) -> Result<DecodingKey, AuthError> {
        if let Some(jwk) = self.cached_key(kid).await {
            return to_decoding_key(&jwk);
        }

        let _refresh = self.refresh.lock().await;
        // Another request may have refreshed while we waited for the lock
        if let Some(jwk) = self.cached_key(kid).await {
            return to_decoding_key(&jwk);
        }

        if self.fetch_limiter.check().is_err() {
            tracing::warn!(kid = ?kid, "JWKS refresh rate limit reached");
            return Err(AuthError::InvalidToken);
        }

        tracing::debug!(uri = %self.jwks_uri, "Fetching signing keys");
        let fetched = self.fetch_keys().await?;
        let jwk = lookup(&fetched, kid);
        *self.keys.write().await = Some(fetched);

        let jwk = jwk.ok_or_else(|| {
            tracing::debug!(kid = ?kid, "No signing key matches token");
            AuthError::InvalidToken
        })?;
        to_decoding_key(&jwk)
    }

    async fn fetch_keys(&self) -> Result<JwkSet, AuthError> {
        let response = self
            .client
            .get(&self.jwks_uri)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| AuthError::KeySetUnavailable(e.to_string()))?;

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| AuthError::KeySetUnavailable(e.to_string()))
    }
}

fn to_decoding_key(jwk: &Jwk) -> Result<DecodingKey, AuthError> {
    DecodingKey::from_jwk(jwk).map_err(|_| AuthError::InvalidToken)
}

#[async_trait]
impl IdentityVerifier for JwksIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<SubjectId, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::InvalidToken)?;
        if header.alg != Algorithm::RS256 {
            return Err(AuthError::InvalidToken);
        }

        let key = self.signing_key(header.kid.as_deref()).await?;

        let token_data = decode::<Claims>(token, &key, &self.validation).map_err(|e| {
            // Don't expose internal token validation details
            tracing::debug!(error = %e, "Token validation failed");
            AuthError::InvalidToken
        })?;

        Ok(SubjectId::new(token_data.claims.sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_allows_configured_fetches_per_minute() {
        let limiter = fetch_limiter(2);

        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_err());
    }

    #[test]
    fn test_zero_fetch_quota_still_allows_one_fetch() {
        let limiter = fetch_limiter(0);

        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_err());
    }

    #[test]
    fn test_lookup_without_kid_needs_a_single_key() {
        let empty = JwkSet { keys: Vec::new() };
        assert!(lookup(&empty, Some("any")).is_none());
        assert!(lookup(&empty, None).is_none());
    }

    #[tokio::test]
    async fn test_garbage_token_is_rejected_before_fetching_keys() {
        let verifier = JwksIdentityVerifier::new(
            "http://127.0.0.1:9/.well-known/jwks.json".to_string(),
            "https://issuer.example/",
            "api",
            1,
            Duration::from_secs(1),
        )
        .unwrap();

        let result = verifier.verify("not-a-jwt").await;

        assert!(matches!(result, Err(AuthError::InvalidToken)));
        assert!(verifier.keys.read().await.is_none());
        // The single fetch allowed per minute is still unused
        assert!(verifier.fetch_limiter.check().is_ok());
    }
}
