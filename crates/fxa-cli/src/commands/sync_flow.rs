//! Sync flow: get the latest pricing sheet, submit one advice synchronously

use crate::commands::build_advice;
use crate::SubmitArgs;
use anyhow::Result;
use fxa_client::FxAdviceClient;

pub async fn execute(client: &FxAdviceClient, args: &SubmitArgs) -> Result<()> {
  println!("Running sync flow...");

  println!("Getting latest pricing sheet...");
  let latest = client.pricing().latest().await?;
  println!("{latest:#?}");

  let Some(sheet) = latest.response_object.as_ref().and_then(|sheets| sheets.first()) else {
    return Ok(());
  };

  println!("Submitting advice sync...");
  let advice = build_advice(sheet, args);
  let response = client.advices().submit_sync(&[advice]).await?;
  println!("{response:#?}");
  println!();

  Ok(())
}
