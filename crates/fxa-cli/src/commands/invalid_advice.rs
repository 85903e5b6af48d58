//! Malformed-request demo: what the service returns for missing fields

use anyhow::Result;
use chrono::Utc;
use fxa_client::FxAdviceClient;
use fxa_models::advice::{Advice, AdviceType, TransactionType};
use rust_decimal::Decimal;
use uuid::Uuid;

pub async fn execute(client: &FxAdviceClient) -> Result<()> {
  println!("Submitting advice with missing field...");

  let latest = client.pricing().latest().await?;
  println!("{latest:#?}");

  let Some(sheet) = latest.response_object.as_ref().and_then(|sheets| sheets.first()) else {
    return Ok(());
  };

  // the pricing-derived fields are left out on purpose
  let id = Uuid::new_v4().to_string();
  let advice = Advice::builder()
    .advice_id(id.clone())
    .transaction_id(id)
    .advice_type(AdviceType::Oa)
    .ccy_pair(sheet.ccy_pair.clone())
    .transaction_type(TransactionType::Sale)
    .payment_provider("VISA")
    .transaction_timestamp(Utc::now().naive_utc())
    .amount(Decimal::from(10))
    .build();
  println!("Fields the service will reject: {:?}", advice.missing_fields());

  let response = client.advices().submit_sync(&[advice]).await?;
  println!("{response:#?}");
  println!();

  Ok(())
}
