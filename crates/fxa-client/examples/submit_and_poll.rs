//! Submit-and-poll Example
//!
//! This example demonstrates how to use fxa-client to:
//! - Fetch the pricing sheets currently in force
//! - Build an advice from a sheet's pricing fields
//! - Submit the advice asynchronously
//! - Poll the batch status until it settles
//!
//! Set FXA_API_KEY, FXA_PRIVATE_KEY and FXA_BASE_URL before running.

use fxa_client::FxAdviceClient;
use fxa_core::Config;
use fxa_models::advice::{AdviceBuilder, AdviceType, TransactionType};
use rust_decimal::Decimal;
use tokio::time::{sleep, Duration};
use uuid::Uuid;

const POLL_INTERVAL: Duration = Duration::from_secs(3);
const MAX_POLL_ATTEMPTS: u32 = 5;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  // Initialize logging
  tracing_subscriber::fmt::init();

  // Load configuration from environment
  let config = Config::from_env().map_err(|e| {
    eprintln!("Failed to load configuration. Make sure FXA_API_KEY, FXA_PRIVATE_KEY and FXA_BASE_URL are set.");
    eprintln!("Error: {}", e);
    e
  })?;

  let client = FxAdviceClient::new(config)?;
  println!("fx-advice client initialized");
  println!("Rate limit: {} requests/minute\n", client.config().rate_limit);

  // Fetch the pricing sheets currently in force
  println!("Getting latest pricing sheet...");
  let latest = client.pricing().latest().await?;
  println!("HTTP status = {}", latest.http_code);

  let sheets = match latest.response_object {
    Some(sheets) if !sheets.is_empty() => sheets,
    _ => {
      println!("No pricing sheets available, error = {:?}", latest.error_object);
      return Ok(());
    }
  };
  let sheet = &sheets[0];
  println!("Using sheet {} ({})", sheet.pricing_reference_id, sheet.ccy_pair);

  // Build one advice against the sheet's pricing
  let id = Uuid::new_v4().to_string();
  let advice = AdviceBuilder::from_pricing_sheet(sheet)
    .advice_id(id.clone())
    .transaction_id(id)
    .advice_type(AdviceType::Oa)
    .transaction_type(TransactionType::Sale)
    .payment_provider("VISA")
    .transaction_timestamp(chrono::Utc::now().naive_utc())
    .amount(Decimal::from(10))
    .build();

  // Submit asynchronously
  println!("\nSubmitting advice async...");
  let ack = client.advices().submit_async(&[advice]).await?;
  println!("HTTP status = {}", ack.http_code);

  let Some(ack) = ack.response_object else {
    println!("Submission not acknowledged, error = {:?}", ack.error_object);
    return Ok(());
  };
  println!("Batch {} received {} advice(s)", ack.batch_id, ack.received);

  // Poll until the batch settles or the attempt budget runs out
  for attempt in 1..=MAX_POLL_ATTEMPTS {
    sleep(POLL_INTERVAL).await;

    println!("\nQuerying advice status (attempt {attempt})...");
    let status = client.advices().status(&ack.batch_id).await?;
    println!("HTTP status = {}", status.http_code);

    let Some(status) = status.response_object else {
      println!("No status payload, error = {:?}", status.error_object);
      break;
    };
    println!("Batch {} is {:?}", status.batch_id, status.status);
    for outcome in &status.advices {
      println!("  {} -> {:?} {}", outcome.advice_id, outcome.status,
        outcome.reason.as_deref().unwrap_or(""));
    }

    if status.status.is_terminal() {
      break;
    }
  }

  println!("\nDone");
  Ok(())
}
