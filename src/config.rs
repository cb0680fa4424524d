//! Gateway configuration: defaults, optional JSON file, environment overrides

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://ims-backend-3.onrender.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`HttpGateway`](crate::gateway::HttpGateway)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub base_url: String,
    /// Applied to every request; a hung request surfaces as a network error
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("ims_inventory/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// On-disk shape; every field optional so partial files work
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

impl GatewayConfig {
    /// Returns the default config file path: ~/.config/ims_inventory/config.json
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ims_inventory")
            .join("config.json")
    }

    /// Loads from the default path, then applies `IMS_API_URL` / `IMS_TIMEOUT_SECS`.
    pub fn load() -> Self {
        let mut config = Self::load_from(&Self::config_path());
        config.apply_env(
            std::env::var("IMS_API_URL").ok(),
            std::env::var("IMS_TIMEOUT_SECS").ok(),
        );
        config
    }

    /// Loads from `path`, falling back to defaults if missing or malformed
    pub fn load_from(path: &Path) -> Self {
        let mut config = Self::default();
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return config;
        }

        let file: ConfigFile = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(file) => file,
                Err(e) => {
                    log::warn!("Failed to parse config file, using defaults: {}", e);
                    return config;
                }
            },
            Err(e) => {
                log::warn!("Failed to read config file, using defaults: {}", e);
                return config;
            }
        };

        log::info!("Loaded config from {}", path.display());
        if let Some(url) = file.base_url {
            config.base_url = url;
        }
        if let Some(secs) = file.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(agent) = file.user_agent {
            config.user_agent = agent;
        }
        config.normalize();
        config
    }

    /// Applies environment-style overrides; unparsable timeouts are ignored.
    pub fn apply_env(&mut self, base_url: Option<String>, timeout_secs: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            log::debug!("Overriding base URL from environment: {}", url);
            self.base_url = url;
        }
        if let Some(raw) = timeout_secs {
            match raw.trim().parse::<u64>() {
                Ok(secs) => self.timeout = Duration::from_secs(secs),
                Err(e) => log::warn!("Ignoring invalid IMS_TIMEOUT_SECS '{}': {}", raw, e),
            }
        }
        self.normalize();
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self.normalize();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn normalize(&mut self) {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.len() != self.base_url.len() {
            self.base_url = trimmed.to_string();
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
