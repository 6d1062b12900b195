use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub service: ServiceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
}

fn default_endpoint_url() -> String {
    "https://h5jbtjv6if.execute-api.eu-north-1.amazonaws.com".to_string()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load from an explicit config directory. `load` assumes the
    /// process runs from the workspace root; hosts and tests running
    /// elsewhere pass their own path.
    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name(&format!("{dir}/default")))
            // Environment-specific file, optional
            .add_source(config::File::with_name(&format!("{dir}/{run_mode}")).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name(&format!("{dir}/local")).required(false))
            // Eg. `STRAJK_SERVICE__ENDPOINT_URL=...` overrides the endpoint
            .add_source(config::Environment::with_prefix("STRAJK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                endpoint_url: default_endpoint_url(),
            },
        }
    }
}
