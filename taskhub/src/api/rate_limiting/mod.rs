//! Rate limiting for API endpoints
//!
//! Two tiers: public auth endpoints (register, login) are limited per IP
//! address, authenticated endpoints per bearer token. Rate limiting uses
//! the token bucket algorithm via tower-governor; tier settings are
//! validated at startup.

pub mod extractors;

use std::sync::Arc;

use governor::middleware::NoOpMiddleware;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::SmartIpKeyExtractor;
use tower_governor::GovernorLayer;

use taskhub_core::settings::rate_limiting::TierConfig;

use extractors::BearerTokenExtractor;

/// Create rate limiter for the public auth endpoints (register, login)
///
/// Rate limits by IP address to slow down brute force attempts.
pub fn create_public_auth_limiter(
    config: &TierConfig,
) -> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, axum::body::Body> {
    // Calculate per_second rate, ensuring at least 1 per minute
    let per_second = std::cmp::max(1, config.requests_per_minute / 60);

    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(config.burst_size)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .expect("Invalid rate limit config"),
    );

    GovernorLayer::new(governor_config)
}

/// Create rate limiter for authenticated API endpoints
///
/// Rate limits by bearer token so one client cannot starve the others.
pub fn create_authenticated_limiter(
    config: &TierConfig,
) -> GovernorLayer<BearerTokenExtractor, NoOpMiddleware, axum::body::Body> {
    let per_second = std::cmp::max(1, config.requests_per_minute / 60);

    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(config.burst_size)
            .key_extractor(BearerTokenExtractor)
            .finish()
            .expect("Invalid rate limit config"),
    );

    GovernorLayer::new(governor_config)
}
