use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;
use showcase_client::ClientConfig;
use showcase_discovery::DiscoveryConfig;
use std::path::Path;

pub const API_URL_ENV: &str = "SHOWCASE_API_URL";

/// Contents of the optional `showcase.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub client: ClientConfig,
}

impl AppConfig {
    /// Reads `path` when given, applies the environment override, and
    /// validates both sections.
    pub fn resolve(path: Option<&Path>, api_url: Option<String>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("read config {}", path.display()))?;
                toml::from_str(&raw).with_context(|| format!("parse config {}", path.display()))?
            }
            None => Self::default(),
        };
        if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
            config.client.base_url = url;
        }
        config.discovery.validate().context("invalid [discovery] config")?;
        config.client.validate().context("invalid [client] config")?;
        Ok(config)
    }
}
