//! Endpoint groups exposed by the client

pub mod advice;
pub mod pricing;

use crate::transport::Transport;
use fxa_core::Result;
use std::sync::Arc;

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub trait EndpointBase {
  /// Wait for rate limit before making a request
  async fn wait_for_rate_limit(&self) -> Result<()>;

  /// Get a reference to the transport layer
  fn transport(&self) -> &Arc<Transport>;
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl EndpointBase for $struct_name {
      async fn wait_for_rate_limit(&self) -> Result<()> {
        self.rate_limiter.until_ready().await;
        Ok(())
      }

      fn transport(&self) -> &Arc<Transport> {
        &self.transport
      }
    }
  };
}

pub(crate) use impl_endpoint_base;
