//! Configuration validation.
//!
//! Serde handles the syntactic side; this checks semantics: addresses parse,
//! the upstream URL is http(s), timeouts are non-zero. All errors are
//! collected and reported together rather than stopping at the first.

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::ProxyConfig;

pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(format!(
            "listener.bind_address '{}' is not a valid socket address",
            config.listener.bind_address
        ));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(format!(
            "upstream.base_url has unsupported scheme '{}'",
            url.scheme()
        )),
        Err(e) => errors.push(format!("upstream.base_url is not a valid URL: {}", e)),
    }

    if config.upstream.connect_timeout_secs == 0 {
        errors.push("upstream.connect_timeout_secs must be greater than zero".to_string());
    }
    if config.upstream.request_timeout_secs == 0 {
        errors.push("upstream.request_timeout_secs must be greater than zero".to_string());
    }
    if config.timeouts.request_secs == 0 {
        errors.push("timeouts.request_secs must be greater than zero".to_string());
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(format!(
            "observability.metrics_address '{}' is not a valid socket address",
            config.observability.metrics_address
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
