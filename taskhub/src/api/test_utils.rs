//! Shared test utilities for API tests
//!
//! This module provides common helper functions used across unit and
//! integration tests to reduce code duplication.

use config::Config;

use crate::app_state::{AppState, SharedAppState};
use crate::settings::config::Settings;
use crate::shutdown::ShutdownSignal;

/// Create test settings: ephemeral bind address, fixed token secret, rate
/// limiting disabled.
#[allow(dead_code)]
pub fn create_test_settings() -> Settings {
    let builder = Config::builder()
        .set_default("debug", false)
        .unwrap()
        .set_default("api.bind_address", "127.0.0.1:0")
        .unwrap()
        .set_override("api.token.secret", "test-token-secret")
        .unwrap()
        .set_override("api.token.ttl_days", 1)
        .unwrap();

    let config = builder.build().expect("Failed to build test config");
    config
        .try_deserialize()
        .expect("Failed to deserialize test settings")
}

/// Create test AppState with provided settings
#[allow(dead_code)]
pub async fn create_test_app_state_with_settings(settings: Settings) -> SharedAppState {
    AppState::from_settings(settings, ShutdownSignal::new())
        .await
        .expect("Failed to build test app state")
}

/// Create test AppState with the default test settings
#[allow(dead_code)]
pub async fn create_test_app_state() -> SharedAppState {
    create_test_app_state_with_settings(create_test_settings()).await
}
