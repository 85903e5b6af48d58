pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

/// Default request quota (requests per minute).
pub const DEFAULT_RATE_LIMIT: u32 = 60;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default retry budget for transport-level failures.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";
