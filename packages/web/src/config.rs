//! Build-time client configuration.

use store::ClientConfig;

const TASKDESK_TOML: &str = include_str!("../taskdesk.toml");

/// The embedded `taskdesk.toml`, with `TASKDESK_API_URL` taking precedence
/// when it was set at build time.
pub fn load() -> ClientConfig {
    resolve(TASKDESK_TOML, option_env!("TASKDESK_API_URL"))
}

fn resolve(raw: &str, base_url_override: Option<&str>) -> ClientConfig {
    let mut config = ClientConfig::from_toml(raw).unwrap_or_else(|err| {
        tracing::warn!("ignoring {}: {}", ClientConfig::filename(), err);
        ClientConfig::default()
    });

    if let Some(base_url) = base_url_override.filter(|url| !url.trim().is_empty()) {
        let candidate = ClientConfig {
            api: store::config::ApiConfig {
                base_url: base_url.trim().to_string(),
            },
            ..config.clone()
        };
        match candidate.validate() {
            Ok(()) => config = candidate,
            Err(err) => tracing::warn!("ignoring TASKDESK_API_URL: {}", err),
        }
    }
    config
}
