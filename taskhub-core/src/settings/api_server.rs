use secrecy::SecretString;
use serde::Deserialize;

use super::rate_limiting::RateLimitingConfig;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

#[derive(Debug, Deserialize, Clone)]
#[allow(unused)]
#[readonly::make]
pub struct ApiServer {
    pub bind_address: String,
    #[serde(default)]
    pub token: TokenSettings,
    #[serde(default)]
    pub rate_limiting: RateLimitingConfig,
}

impl Default for ApiServer {
    fn default() -> Self {
        ApiServer {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            token: TokenSettings::default(),
            rate_limiting: RateLimitingConfig::default(),
        }
    }
}

/// Signing settings for the bearer credentials the API issues.
///
/// The secret is wrapped in [`SecretString`] so `Debug` output (the
/// `taskhub config` subcommand prints the resolved settings) redacts it.
#[derive(Debug, Deserialize, Clone)]
#[allow(unused)]
pub struct TokenSettings {
    pub secret: SecretString,
    #[serde(default = "default_token_ttl_days")]
    pub ttl_days: i64,
}

fn default_token_ttl_days() -> i64 {
    30
}

impl Default for TokenSettings {
    fn default() -> Self {
        TokenSettings {
            // Development fallback only; deployments override it via
            // configuration or TASKHUB__API__TOKEN__SECRET.
            secret: SecretString::new("taskhub-insecure-dev-secret".into()),
            ttl_days: default_token_ttl_days(),
        }
    }
}
