//! Configuration types.

use secrecy::SecretString;

use crate::error::ConfigError;

/// Environment variable holding the Kakao REST API key.
pub const API_KEY_ENV: &str = "KAKAO_MAP_API_KEY";

/// Configuration for the Kakao Local API client.
#[derive(Debug, Clone)]
pub struct KakaoConfig {
    /// Kakao REST API key, sent as `Authorization: KakaoAK <key>`.
    pub api_key: SecretString,
}

impl KakaoConfig {
    /// Create a configuration from an explicit key.
    ///
    /// Rejects empty keys eagerly so a misconfigured deployment fails at
    /// construction rather than on the first request.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: API_KEY_ENV.to_string(),
                message: "API key must be non-empty".to_string(),
            });
        }
        Ok(Self {
            api_key: SecretString::from(api_key),
        })
    }

    /// Read the configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| ConfigError::MissingRequired {
            key: API_KEY_ENV.to_string(),
            hint: "Create a Kakao developers app and export its REST API key.".to_string(),
        })?;
        Self::new(api_key)
    }
}
