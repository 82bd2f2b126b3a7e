use axum::http::{header::AUTHORIZATION, Request};
use tower_governor::key_extractor::KeyExtractor;
use tower_governor::GovernorError;

/// Extract the rate limit key from the bearer token in the Authorization
/// header, so limits follow the client across addresses.
#[derive(Clone, Copy, Debug)]
pub struct BearerTokenExtractor;

impl KeyExtractor for BearerTokenExtractor {
    type Key = String;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        req.headers()
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(|token| token.to_string())
            .ok_or(GovernorError::UnableToExtractKey)
    }
}
