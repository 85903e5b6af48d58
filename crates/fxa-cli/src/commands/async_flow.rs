//! Async flow: submit one advice asynchronously, then poll the batch status

use crate::commands::build_advice;
use crate::config::Config;
use crate::SubmitArgs;
use anyhow::Result;
use fxa_client::FxAdviceClient;
use std::time::Duration;
use tokio::time::sleep;

pub async fn execute(client: &FxAdviceClient, config: &Config, args: &SubmitArgs) -> Result<()> {
  println!("Running async flow...");

  println!("Getting latest pricing sheet...");
  let latest = client.pricing().latest().await?;
  println!("{latest:#?}");

  let Some(sheet) = latest.response_object.as_ref().and_then(|sheets| sheets.first()) else {
    return Ok(());
  };

  println!("Submitting advice async...");
  let advice = build_advice(sheet, args);
  let ack = client.advices().submit_async(&[advice]).await?;
  println!("{ack:#?}");

  let Some(batch_id) = ack.response_object.map(|a| a.batch_id) else {
    return Ok(());
  };

  // give the service time to pick the batch up, then re-poll until it
  // settles or the attempt budget runs out
  let interval = Duration::from_secs(config.poll_interval_secs);
  for attempt in 1..=config.poll_attempts {
    sleep(interval).await;

    println!("Querying advice status (attempt {attempt})...");
    let status = client.advices().status(&batch_id).await?;
    println!("{status:#?}");

    let settled = status.response_object.map_or(true, |s| s.status.is_terminal());
    if settled {
      break;
    }
  }
  println!();

  Ok(())
}
