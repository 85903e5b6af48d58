//! Pricing sheet endpoints

use super::{impl_endpoint_base, EndpointBase};

use crate::transport::Transport;
use chrono::NaiveDateTime;
use fxa_core::Result;
use fxa_models::common::ApiResponse;
use fxa_models::pricing::PricingSheet;
use governor::{
  RateLimiter,
  clock::DefaultClock,
  middleware::NoOpMiddleware,
  state::{InMemoryState, NotKeyed},
};
use std::sync::Arc;
use tracing::instrument;

/// Pricing sheet endpoints
pub struct PricingEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl PricingEndpoints {
  /// Create a new pricing endpoints instance
  pub fn new(
    transport: Arc<Transport>,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
  ) -> Self {
    Self { transport, rate_limiter }
  }

  /// Get the pricing sheets currently in force
  ///
  /// # Examples
  ///
  /// ```ignore
  /// # let client = FxAdviceClient::new(Config::from_env()?)?;
  /// let response = client.pricing().latest().await?;
  /// if let Some(sheets) = &response.response_object {
  ///     println!("{} active sheets", sheets.len());
  /// }
  /// # Ok::<(), fxa_core::Error>(())
  /// ```
  #[instrument(skip(self))]
  pub async fn latest(&self) -> Result<ApiResponse<Vec<PricingSheet>>> {
    self.wait_for_rate_limit().await?;

    self.transport.get("v1/pricing-sheets/latest", &[]).await
  }

  /// Get the pricing sheet active at a given instant
  ///
  /// # Arguments
  ///
  /// * `ts` - UTC timestamp the sheet must be active at
  #[instrument(skip(self), fields(ts = %ts))]
  pub async fn active_at(&self, ts: NaiveDateTime) -> Result<ApiResponse<PricingSheet>> {
    self.wait_for_rate_limit().await?;

    let query = [("ts", ts.format("%Y-%m-%dT%H:%M:%S").to_string())];
    self.transport.get("v1/pricing-sheets/active", &query).await
  }
}

impl_endpoint_base!(PricingEndpoints);
