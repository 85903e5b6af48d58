//! Time-scoped lookup: the pricing sheet active at a given instant

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use fxa_client::FxAdviceClient;

pub async fn execute(client: &FxAdviceClient, ts: &str) -> Result<()> {
  println!("Getting pricing sheet active for a certain time...");

  let ts: NaiveDateTime =
    ts.parse().with_context(|| format!("'{ts}' is not a timestamp like 2024-04-26T07:30:00"))?;

  let response = client.pricing().active_at(ts).await?;
  println!("{response:#?}");
  println!();

  Ok(())
}
