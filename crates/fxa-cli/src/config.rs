use anyhow::{Context, Result};
use fxa_core::Config as CoreConfig;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
  pub api_config: CoreConfig,
  pub poll_interval_secs: u64,
  pub poll_attempts: u32,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    let api_config =
      CoreConfig::from_env().context("loading fx-advice credentials from the environment")?;

    let poll_interval_secs = env::var("FXA_POLL_INTERVAL_SECS")
      .unwrap_or_else(|_| "3".to_string())
      .parse()
      .context("FXA_POLL_INTERVAL_SECS must be a number of seconds")?;

    let poll_attempts = env::var("FXA_POLL_ATTEMPTS")
      .unwrap_or_else(|_| "5".to_string())
      .parse()
      .context("FXA_POLL_ATTEMPTS must be a number")?;

    Ok(Self { api_config, poll_interval_secs, poll_attempts })
  }
}
