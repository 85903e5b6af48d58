//! Configuration management for the fx-advice client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the fx-advice client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// API key identifying the calling institution
  pub api_key: String,

  /// Path to the PEM-encoded private key issued with the API key
  pub private_key_path: String,

  /// Base URL of the advice service
  pub base_url: String,

  /// Request quota (requests per minute)
  pub rate_limit: u32,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Maximum retries for failed requests
  pub max_retries: u32,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key =
      env::var("FXA_API_KEY").map_err(|_| Error::Credentials("FXA_API_KEY not set".to_string()))?;

    let private_key_path = env::var("FXA_PRIVATE_KEY")
      .map_err(|_| Error::Credentials("FXA_PRIVATE_KEY not set".to_string()))?;

    let base_url =
      env::var("FXA_BASE_URL").map_err(|_| Error::Config("FXA_BASE_URL not set".to_string()))?;

    let rate_limit = env::var("FXA_RATE_LIMIT")
      .unwrap_or_else(|_| crate::DEFAULT_RATE_LIMIT.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid FXA_RATE_LIMIT".to_string()))?;

    let timeout_secs = env::var("FXA_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid FXA_TIMEOUT_SECS".to_string()))?;

    let max_retries = env::var("FXA_MAX_RETRIES")
      .unwrap_or_else(|_| crate::DEFAULT_MAX_RETRIES.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid FXA_MAX_RETRIES".to_string()))?;

    Ok(Config { api_key, private_key_path, base_url, rate_limit, timeout_secs, max_retries })
  }

  /// Create a config from the three credentials with default tunables
  pub fn default_with_credentials(
    api_key: String,
    private_key_path: String,
    base_url: String,
  ) -> Self {
    Config {
      api_key,
      private_key_path,
      base_url,
      rate_limit: crate::DEFAULT_RATE_LIMIT,
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      max_retries: crate::DEFAULT_MAX_RETRIES,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // env vars are process-global, so both cases live in one test
  #[test]
  fn test_config_from_env() {
    env::set_var("FXA_API_KEY", "test_key");
    env::set_var("FXA_PRIVATE_KEY", "/tmp/test_key.pem");
    env::set_var("FXA_BASE_URL", "https://advice.example.com");
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key, "test_key");
    assert_eq!(config.private_key_path, "/tmp/test_key.pem");
    assert_eq!(config.rate_limit, crate::DEFAULT_RATE_LIMIT);
    assert_eq!(config.max_retries, 3);

    env::set_var("FXA_RATE_LIMIT", "not-a-number");
    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    env::remove_var("FXA_RATE_LIMIT");
  }

  #[test]
  fn test_default_with_credentials() {
    let config = Config::default_with_credentials(
      "key".to_string(),
      "key.pem".to_string(),
      "https://advice.example.com".to_string(),
    );
    assert_eq!(config.timeout_secs, crate::DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.rate_limit, crate::DEFAULT_RATE_LIMIT);
  }
}
