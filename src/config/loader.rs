//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::ProxyConfig;
use crate::config::validation::validate_config;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ProxyConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: ProxyConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.upstream.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config: ProxyConfig = toml::from_str(
            r#"
            [upstream]
            base_url = "http://127.0.0.1:9999"
            request_timeout_secs = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.upstream.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.upstream.request_timeout_secs, 2);
        assert_eq!(config.upstream.connect_timeout_secs, 5);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }
}
