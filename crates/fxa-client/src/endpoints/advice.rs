//! Advice submission and status endpoints

use super::{impl_endpoint_base, EndpointBase};

use crate::transport::Transport;
use fxa_core::Result;
use fxa_models::advice::{Advice, AsyncSubmissionAck, BatchStatus, SubmissionResult};
use fxa_models::common::ApiResponse;
use governor::{
  RateLimiter,
  clock::DefaultClock,
  middleware::NoOpMiddleware,
  state::{InMemoryState, NotKeyed},
};
use std::sync::Arc;
use tracing::instrument;

/// Advice submission and status endpoints
pub struct AdviceEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl AdviceEndpoints {
  /// Create a new advice endpoints instance
  pub fn new(
    transport: Arc<Transport>,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
  ) -> Self {
    Self { transport, rate_limiter }
  }

  /// Submit advices and wait for their processing outcome
  ///
  /// The service validates each advice and reports one outcome per
  /// advice in the result.
  ///
  /// # Examples
  ///
  /// ```ignore
  /// # let client = FxAdviceClient::new(Config::from_env()?)?;
  /// let response = client.advices().submit_sync(&[advice]).await?;
  /// println!("HTTP status = {}", response.http_code);
  /// # Ok::<(), fxa_core::Error>(())
  /// ```
  #[instrument(skip(self, advices), fields(count = advices.len()))]
  pub async fn submit_sync(&self, advices: &[Advice]) -> Result<ApiResponse<SubmissionResult>> {
    self.wait_for_rate_limit().await?;

    self.transport.post_json("v1/advices/sync", advices).await
  }

  /// Submit advices for asynchronous processing
  ///
  /// Returns an acknowledgement carrying the batch identifier to poll
  /// [`status`](Self::status) with.
  #[instrument(skip(self, advices), fields(count = advices.len()))]
  pub async fn submit_async(&self, advices: &[Advice]) -> Result<ApiResponse<AsyncSubmissionAck>> {
    self.wait_for_rate_limit().await?;

    self.transport.post_json("v1/advices/async", advices).await
  }

  /// Query the processing status of an asynchronously submitted batch
  ///
  /// # Arguments
  ///
  /// * `batch_id` - Token returned by [`submit_async`](Self::submit_async)
  #[instrument(skip(self), fields(batch_id = %batch_id))]
  pub async fn status(&self, batch_id: &str) -> Result<ApiResponse<BatchStatus>> {
    self.wait_for_rate_limit().await?;

    let path = format!("v1/advices/status/{batch_id}");
    self.transport.get(&path, &[]).await
  }
}

impl_endpoint_base!(AdviceEndpoints);
