use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use taskhub_core::settings::{api_server::ApiServer, roles::RolesSettings};

#[derive(Debug, Deserialize, Clone)]
#[allow(unused)]
pub struct Settings {
    pub debug: bool,
    pub api: ApiServer,
    #[serde(default)]
    pub roles: RolesSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            debug: false,
            api: ApiServer::default(),
            roles: RolesSettings::default(),
        }
    }
}

impl Settings {
    pub fn get_environment() -> Environment {
        Environment::default()
            .prefix("TASKHUB")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("TASKHUB_RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .set_default("debug", false)?
            .set_default("api.bind_address", "0.0.0.0:5000")?
            // Start off by merging in the "default" configuration file
            .add_source(File::with_name("config/default").required(false))
            // Add run-mode specific and local overrides
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Self::get_environment());

        let s = builder.build()?;
        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskhub_core::settings::api_server::DEFAULT_BIND_ADDRESS;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert!(!settings.debug);
        assert_eq!(settings.api.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(settings.api.token.ttl_days, 30);
        assert!(!settings.api.rate_limiting.enabled);
        assert_eq!(settings.roles.definitions.len(), 3);
    }

    #[test]
    fn test_settings_deserialize_with_overrides() {
        let config = Config::builder()
            .set_default("debug", false)
            .unwrap()
            .set_default("api.bind_address", "127.0.0.1:0")
            .unwrap()
            .set_override("api.token.secret", "s3cret")
            .unwrap()
            .set_override("api.token.ttl_days", 7)
            .unwrap()
            .build()
            .unwrap();

        let settings: Settings = config.try_deserialize().unwrap();

        assert_eq!(settings.api.bind_address, "127.0.0.1:0");
        assert_eq!(settings.api.token.ttl_days, 7);
        // Roles fall back to the built-in enumeration
        assert!(settings.roles.definitions.contains_key("Admin"));
    }

    #[test]
    fn test_settings_deserialize_custom_roles() {
        let config = Config::builder()
            .set_default("debug", false)
            .unwrap()
            .set_default("api.bind_address", "127.0.0.1:0")
            .unwrap()
            .set_override("roles.Auditor", vec!["read_task"])
            .unwrap()
            .build()
            .unwrap();

        let settings: Settings = config.try_deserialize().unwrap();
        let table = settings.roles.build_role_table();

        assert!(table.contains_role("Auditor"));
        assert!(!table.contains_role("Admin"));
    }
}
