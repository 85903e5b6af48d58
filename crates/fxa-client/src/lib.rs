//! # fxa-client
//!
//! A typed async client for the fx-advice service.
//!
//! ## Features
//!
//! - **Clean API**: Simple, idiomatic Rust interface
//! - **Async/Await**: Built on tokio
//! - **Rate Limiting**: Built-in rate limiting to respect service quotas
//! - **Type Safe**: Strongly typed payloads using fxa-models
//! - **Configurable**: Environment-based configuration via fxa-core
//! - **Status Preserving**: Every call resolves to a response envelope
//!   carrying the HTTP status and whichever of payload or error body the
//!   service returned
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fxa_client::FxAdviceClient;
//! use fxa_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = FxAdviceClient::new(config)?;
//!
//!     // Fetch the pricing sheets currently in force
//!     let sheets = client.pricing().latest().await?;
//!     println!("HTTP status = {}", sheets.http_code);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Transport-level failures return `Err(fxa_core::Error)`; HTTP-level
//! failures are data, surfaced through the envelope's `http_code` and
//! `error_object` so callers can branch on the status class.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use client::{FxAdviceClient, FxAdviceClientBuilder};
pub use fxa_core::{Config, Error, Result};
pub use fxa_models::*;

// Re-export endpoint modules for direct access if needed
pub use endpoints::{advice::AdviceEndpoints, pricing::PricingEndpoints};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_construction() {
        let config = Config::default_with_credentials(
            "test_key".to_string(),
            "key.pem".to_string(),
            "https://advice.example.com".to_string(),
        );
        assert_eq!(config.api_key, "test_key");
    }
}
