use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "config/checkout.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Invalid config {path}: {reason}")]
    Invalid { path: String, reason: String },
}

/// Application configuration. Every field has a default so partial files work.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub use_json: bool,
    /// Clicks simulated on the demo counter at startup.
    pub counter_demo_clicks: u32,
    pub api: ApiConfig,
    pub payment: PaymentConfig,
    pub browser: BrowserConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub buffer_size: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PaymentConfig {
    pub link_base_url: String,
    pub link_target: String,
    /// PAYPAY is offered up to and including this total.
    pub paypay_max_total: f64,
    /// AUPAY is offered up to and including this total.
    pub aupay_max_total: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BrowserConfig {
    /// Command used to open links; the platform opener when unset.
    pub opener: Option<String>,
    pub buffer_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            use_json: false,
            counter_demo_clicks: 3,
            api: ApiConfig::default(),
            payment: PaymentConfig::default(),
            browser: BrowserConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://67eb7353aa794fb3222a4c0e.mockapi.io".to_string(),
            buffer_size: 32,
        }
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            link_base_url: "https://payment.example.com/pay".to_string(),
            link_target: "_blank".to_string(),
            paypay_max_total: 500_000.0,
            aupay_max_total: 300_000.0,
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            opener: None,
            buffer_size: 32,
        }
    }
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate().map_err(|reason| ConfigError::Invalid {
            path: path.display().to_string(),
            reason,
        })?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Channel capacities must be positive.
    pub fn validate(&self) -> Result<(), String> {
        if self.api.buffer_size == 0 {
            return Err("api.buffer_size must be at least 1".to_string());
        }
        if self.browser.buffer_size == 0 {
            return Err("browser.buffer_size must be at least 1".to_string());
        }
        Ok(())
    }
}
