/*
[INPUT]:  YAML configuration file and environment overrides
[OUTPUT]: Parsed CLI configuration and configured adapter clients
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tradeogre_adapter::{AuthenticatedClient, ClientConfig, DEFAULT_BASE_URL, TradeOgreClient};

pub const API_KEY_ENV: &str = "TRADEOGRE_API_KEY";
pub const API_SECRET_ENV: &str = "TRADEOGRE_API_SECRET";
pub const MISSING_CREDENTIALS: &str = "this command needs credentials: set them in the config file or via TRADEOGRE_API_KEY and TRADEOGRE_API_SECRET";

/// Top-level configuration for the CLI
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// API root, defaults to the public TradeOgre v1 endpoint
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Needed only by private commands
    #[serde(default)]
    pub credentials: Option<CredentialsConfig>,
}

/// API key pair
#[derive(Clone, Deserialize, Serialize)]
pub struct CredentialsConfig {
    pub api_key: String,
    pub api_secret: String,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            credentials: None,
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("parse yaml config")?;
        Ok(config)
    }

    /// Replace file credentials with the given key and secret when both are set
    pub fn with_credentials_override(
        mut self,
        api_key: Option<String>,
        api_secret: Option<String>,
    ) -> Self {
        if let (Some(api_key), Some(api_secret)) = (api_key, api_secret) {
            self.credentials = Some(CredentialsConfig {
                api_key,
                api_secret,
            });
        }
        self
    }

    /// Apply `TRADEOGRE_API_KEY` / `TRADEOGRE_API_SECRET`
    pub fn with_env_overrides(self) -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok();
        let api_secret = std::env::var(API_SECRET_ENV).ok();
        self.with_credentials_override(api_key, api_secret)
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            ..ClientConfig::default()
        }
    }

    pub fn build_client(&self) -> Result<TradeOgreClient> {
        TradeOgreClient::with_config_and_base_url(self.client_config(), self.api_url())
            .context("build tradeogre client")
    }

    pub fn authenticate(&self, client: &TradeOgreClient) -> Result<AuthenticatedClient> {
        let Some(credentials) = &self.credentials else {
            bail!(MISSING_CREDENTIALS);
        };
        Ok(client.as_authenticated(&credentials.api_key, &credentials.api_secret))
    }
}
