//! Response-inspection demo: how to read the envelope

use anyhow::{bail, Result};
use fxa_client::FxAdviceClient;

pub async fn execute(client: &FxAdviceClient) -> Result<()> {
  println!("Demo on how to use the response object...");

  println!("Getting latest pricing sheet...");
  let response = client.pricing().latest().await?;
  println!("HTTP status code = {}", response.http_code);

  if response.is_success() {
    let Some(sheets) = &response.response_object else {
      bail!("pricing sheets are missing while HTTP status is 2xx");
    };
    println!("There are {} pricing sheets", sheets.len());
    if let Some(first) = sheets.first() {
      println!("1st pricing sheet = {first:#?}");
    }
  }
  println!("Error response = {:?}", response.error_object);
  println!();

  Ok(())
}
