use anyhow::Context;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use taskhub_core::authorization::Identity;
use taskhub_core::settings::api_server::TokenSettings;
use taskhub_core::users::User;

/// Credential verification failures, surfaced as 401 by the request
/// pipeline before any access decision runs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No credential was supplied with the request.
    #[error("Not authorized, no token")]
    Unauthorized,
    /// The supplied credential is malformed, expired or carries a bad
    /// signature.
    #[error("Not authorized, token failed")]
    InvalidToken,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    roles: Vec<String>,
    iat: i64,
    exp: i64,
}

/// Issues and verifies the signed bearer credentials of the API.
///
/// The credential scheme is opaque to the rest of the pipeline: anything
/// that resolves a bearer string to an [`Identity`] could stand in here.
/// This implementation ships HS256-signed tokens.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(settings: &TokenSettings) -> Self {
        let secret = settings.secret.expose_secret().as_bytes();
        TokenService {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl: Duration::days(settings.ttl_days),
        }
    }

    /// Sign a credential carrying the user's id and role names.
    pub fn issue(&self, user: &User) -> anyhow::Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            roles: user.roles.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).context("failed to sign token")
    }

    /// Verify a bearer credential and resolve it to an [`Identity`].
    ///
    /// Accepts tokens with or without "Bearer " prefix (prefix is stripped
    /// if present).
    pub fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        let raw_token = token.strip_prefix("Bearer ").unwrap_or(token).trim();
        if raw_token.is_empty() {
            return Err(AuthError::Unauthorized);
        }

        let data = decode::<Claims>(
            raw_token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|err| {
            debug!("Token verification failed: {}", err);
            AuthError::InvalidToken
        })?;

        // A credential without roles can never pass an access check; reject
        // it here so Identity keeps its non-empty role invariant.
        if data.claims.roles.is_empty() {
            return Err(AuthError::InvalidToken);
        }

        Ok(Identity::new(data.claims.sub, data.claims.roles))
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
