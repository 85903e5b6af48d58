pub mod async_flow;
pub mod inspect;
pub mod invalid_advice;
pub mod sheet_at;
pub mod sync_flow;

use crate::SubmitArgs;
use chrono::Utc;
use fxa_models::advice::{Advice, AdviceBuilder, AdviceType, TransactionType};
use fxa_models::pricing::PricingSheet;
use tracing::debug;
use uuid::Uuid;

/// Build one complete sale advice against a pricing sheet.
///
/// One fresh UUID serves as both advice id and transaction id, the way a
/// single-transaction submission names itself.
pub(crate) fn build_advice(sheet: &PricingSheet, args: &SubmitArgs) -> Advice {
  let id = Uuid::new_v4().to_string();
  debug!("building advice {} against sheet {}", id, sheet.pricing_reference_id);

  AdviceBuilder::from_pricing_sheet(sheet)
    .advice_id(id.clone())
    .transaction_id(id)
    .advice_type(AdviceType::Oa)
    .transaction_type(TransactionType::Sale)
    // provider assignment comes from the service operator, tied to settlement date
    .payment_provider(args.provider.as_str())
    .transaction_timestamp(Utc::now().naive_utc())
    .amount(args.amount)
    .build()
}
