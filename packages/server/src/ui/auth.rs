//! Bearer token authentication for the plan endpoints.
//!
//! Tokens are HS256 JWTs whose `id` claim carries the user id. Issuing tokens is
//! the job of the account service; this module only verifies them.

use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::domain::UserId;

use super::{error::ApiError, state::AppState};

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: String,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: u64,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,

    #[error("invalid token: {0}")]
    InvalidToken(String),
}

/// Verifies bearer tokens against the configured secret
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Verify the token and return the user id it was issued for
    pub fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        let data = decode::<Claims>(token, &self.key, &self.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        UserId::new(data.claims.id).map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    /// Extract and verify the token of an `Authorization: Bearer <token>` header value
    pub fn verify_header(&self, header: Option<&str>) -> Result<UserId, AuthError> {
        let token = header
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)?;
        self.verify(token)
    }
}

/// Axum extractor for the authenticated user id
#[derive(Debug, Clone)]
pub struct AuthUser(pub UserId);

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        state
            .jwt_verifier
            .verify_header(header)
            .map(AuthUser)
            .map_err(|e| {
                tracing::warn!("Rejected request: {}", e);
                ApiError::Unauthorized(e.to_string())
            })
    }
}
