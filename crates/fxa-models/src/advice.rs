//! Transaction advice data models
//!
//! An advice is the notification record a merchant submits for each FX
//! transaction. The service owns validation: every field below is
//! required on submission, but the wire type keeps them optional so an
//! incomplete advice can still be built and shipped (and rejected with a
//! field-level error payload).

use crate::pricing::{CcyType, PricingSheet};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of advice being submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AdviceType {
    /// Original advice for a new transaction
    Oa,
    /// Cancellation advice for a previously submitted transaction
    Ca,
}

impl std::fmt::Display for AdviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdviceType::Oa => write!(f, "OA"),
            AdviceType::Ca => write!(f, "CA"),
        }
    }
}

/// Direction of the underlying transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// A sale to the end customer
    Sale,
    /// A refund of an earlier sale
    Refund,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Sale => write!(f, "SALE"),
            TransactionType::Refund => write!(f, "REFUND"),
        }
    }
}

/// A transaction advice as the service accepts it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    /// Caller-assigned advice identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice_id: Option<String>,

    /// Identifier of the underlying transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    /// Kind of advice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice_type: Option<AdviceType>,

    /// Currency pair in "BASE/QUOTE" notation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ccy_pair: Option<String>,

    /// Currency the transaction settles in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_ccy: Option<String>,

    /// Which leg of the pair `transaction_ccy` is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_ccy_type: Option<CcyType>,

    /// Pricing reference the advice requests, from the pricing sheet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_pricing_ref_id: Option<String>,

    /// Direction of the transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,

    /// Payment provider handling the transaction, e.g. "VISA"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_provider: Option<String>,

    /// When the transaction happened (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_timestamp: Option<NaiveDateTime>,

    /// Transaction amount in `transaction_ccy`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

impl Advice {
    /// Start building an advice
    pub fn builder() -> AdviceBuilder {
        AdviceBuilder::default()
    }

    /// Wire names of service-required fields this advice does not carry.
    ///
    /// The service rejects advices missing any of these; the list is what
    /// a caller can report before (or instead of) paying for the round
    /// trip.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.advice_id.is_none() {
            missing.push("adviceId");
        }
        if self.transaction_id.is_none() {
            missing.push("transactionId");
        }
        if self.advice_type.is_none() {
            missing.push("adviceType");
        }
        if self.ccy_pair.is_none() {
            missing.push("ccyPair");
        }
        if self.transaction_ccy.is_none() {
            missing.push("transactionCcy");
        }
        if self.transaction_ccy_type.is_none() {
            missing.push("transactionCcyType");
        }
        if self.requested_pricing_ref_id.is_none() {
            missing.push("requestedPricingRefId");
        }
        if self.transaction_type.is_none() {
            missing.push("transactionType");
        }
        if self.payment_provider.is_none() {
            missing.push("paymentProvider");
        }
        if self.transaction_timestamp.is_none() {
            missing.push("transactionTimestamp");
        }
        if self.amount.is_none() {
            missing.push("amount");
        }
        missing
    }
}

/// Builder for [`Advice`]
///
/// `build()` is infallible: the service, not the client, decides which
/// advices are acceptable.
#[derive(Debug, Clone, Default)]
pub struct AdviceBuilder {
    advice: Advice,
}

impl AdviceBuilder {
    /// Pre-populate the pricing-derived fields from a sheet.
    ///
    /// Copies the currency pair and pricing reference, and resolves the
    /// transaction currency to the pair leg the sheet's currency type
    /// selects.
    pub fn from_pricing_sheet(sheet: &PricingSheet) -> Self {
        AdviceBuilder::default()
            .ccy_pair(sheet.ccy_pair.clone())
            .transaction_ccy_opt(sheet.transaction_ccy().map(str::to_string))
            .transaction_ccy_type(sheet.transaction_ccy_type)
            .requested_pricing_ref_id(sheet.pricing_reference_id.clone())
    }

    /// Set the advice identifier
    pub fn advice_id(mut self, id: impl Into<String>) -> Self {
        self.advice.advice_id = Some(id.into());
        self
    }

    /// Set the transaction identifier
    pub fn transaction_id(mut self, id: impl Into<String>) -> Self {
        self.advice.transaction_id = Some(id.into());
        self
    }

    /// Set the advice type
    pub fn advice_type(mut self, advice_type: AdviceType) -> Self {
        self.advice.advice_type = Some(advice_type);
        self
    }

    /// Set the currency pair
    pub fn ccy_pair(mut self, pair: impl Into<String>) -> Self {
        self.advice.ccy_pair = Some(pair.into());
        self
    }

    /// Set the transaction currency
    pub fn transaction_ccy(mut self, ccy: impl Into<String>) -> Self {
        self.advice.transaction_ccy = Some(ccy.into());
        self
    }

    fn transaction_ccy_opt(mut self, ccy: Option<String>) -> Self {
        self.advice.transaction_ccy = ccy;
        self
    }

    /// Set the transaction currency type
    pub fn transaction_ccy_type(mut self, ccy_type: CcyType) -> Self {
        self.advice.transaction_ccy_type = Some(ccy_type);
        self
    }

    /// Set the requested pricing reference
    pub fn requested_pricing_ref_id(mut self, id: impl Into<String>) -> Self {
        self.advice.requested_pricing_ref_id = Some(id.into());
        self
    }

    /// Set the transaction type
    pub fn transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.advice.transaction_type = Some(transaction_type);
        self
    }

    /// Set the payment provider
    pub fn payment_provider(mut self, provider: impl Into<String>) -> Self {
        self.advice.payment_provider = Some(provider.into());
        self
    }

    /// Set the transaction timestamp (UTC)
    pub fn transaction_timestamp(mut self, ts: NaiveDateTime) -> Self {
        self.advice.transaction_timestamp = Some(ts);
        self
    }

    /// Set the transaction amount
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.advice.amount = Some(amount);
        self
    }

    /// Finish building
    pub fn build(self) -> Advice {
        self.advice
    }
}

/// Per-advice processing state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AdviceState {
    /// The service accepted the advice
    Accepted,
    /// The service rejected the advice
    Rejected,
    /// The advice is still being processed
    Pending,
}

/// Outcome of one advice within a submission or batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceOutcome {
    /// Advice identifier the outcome refers to
    pub advice_id: String,

    /// Processing state
    pub status: AdviceState,

    /// Rejection reason, when rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Result of a synchronous submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    /// Batch identifier assigned to the submission, when the service
    /// grouped it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,

    /// One outcome per submitted advice
    #[serde(default)]
    pub results: Vec<AdviceOutcome>,
}

/// Acknowledgement of an asynchronous submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncSubmissionAck {
    /// Token to poll the batch status with
    pub batch_id: String,

    /// Number of advices the service received
    pub received: u32,
}

/// Batch-level processing state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BatchState {
    /// Queued, not yet picked up
    Pending,
    /// Being processed
    Processing,
    /// All advices processed
    Completed,
    /// Processing failed
    Failed,
}

impl BatchState {
    /// Whether the batch will not change state again
    pub fn is_terminal(&self) -> bool {
        matches!(self, BatchState::Completed | BatchState::Failed)
    }
}

/// Status of an asynchronously submitted batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchStatus {
    /// Batch the status refers to
    pub batch_id: String,

    /// Batch-level state
    pub status: BatchState,

    /// Per-advice outcomes, populated as processing progresses
    #[serde(default)]
    pub advices: Vec<AdviceOutcome>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn sheet(ccy_type: CcyType) -> PricingSheet {
        PricingSheet {
            pricing_reference_id: "PR-2024-0426-001".to_string(),
            ccy_pair: "USD/SGD".to_string(),
            transaction_ccy_type: ccy_type,
            rate: None,
            effective_from: NaiveDate::from_ymd_opt(2024, 4, 26)
                .unwrap()
                .and_hms_opt(7, 0, 0)
                .unwrap(),
            effective_to: None,
        }
    }

    #[test]
    fn test_builder_from_pricing_sheet() {
        let advice = AdviceBuilder::from_pricing_sheet(&sheet(CcyType::Base)).build();
        assert_eq!(advice.ccy_pair.as_deref(), Some("USD/SGD"));
        // transaction ccy is the first pair component for a BASE sheet
        assert_eq!(advice.transaction_ccy.as_deref(), Some("USD"));
        assert_eq!(advice.transaction_ccy_type, Some(CcyType::Base));
        assert_eq!(advice.requested_pricing_ref_id.as_deref(), Some("PR-2024-0426-001"));

        let quoted = AdviceBuilder::from_pricing_sheet(&sheet(CcyType::Quote)).build();
        assert_eq!(quoted.transaction_ccy.as_deref(), Some("SGD"));
    }

    #[test]
    fn test_missing_fields() {
        let ts = NaiveDate::from_ymd_opt(2024, 4, 26).unwrap().and_hms_opt(7, 30, 0).unwrap();
        let advice = AdviceBuilder::from_pricing_sheet(&sheet(CcyType::Base))
            .advice_id("a-1")
            .transaction_id("a-1")
            .advice_type(AdviceType::Oa)
            .transaction_type(TransactionType::Sale)
            .payment_provider("VISA")
            .transaction_timestamp(ts)
            .amount(Decimal::from(10))
            .build();
        assert!(advice.missing_fields().is_empty());

        let incomplete = Advice::builder()
            .advice_id("a-2")
            .ccy_pair("USD/SGD")
            .advice_type(AdviceType::Oa)
            .build();
        assert_eq!(
            incomplete.missing_fields(),
            vec![
                "transactionId",
                "transactionCcy",
                "transactionCcyType",
                "requestedPricingRefId",
                "transactionType",
                "paymentProvider",
                "transactionTimestamp",
                "amount"
            ]
        );
    }

    #[test]
    fn test_advice_serializes_to_wire_names() {
        let ts = NaiveDate::from_ymd_opt(2024, 4, 26).unwrap().and_hms_opt(7, 30, 0).unwrap();
        let advice = AdviceBuilder::from_pricing_sheet(&sheet(CcyType::Base))
            .advice_id("a-1")
            .transaction_id("t-1")
            .advice_type(AdviceType::Oa)
            .transaction_type(TransactionType::Sale)
            .payment_provider("VISA")
            .transaction_timestamp(ts)
            .amount(Decimal::from(10))
            .build();

        let value = serde_json::to_value(&advice).unwrap();
        assert_eq!(value["adviceId"], "a-1");
        assert_eq!(value["adviceType"], "OA");
        assert_eq!(value["transactionCcy"], "USD");
        assert_eq!(value["transactionCcyType"], "BASE");
        assert_eq!(value["transactionType"], "SALE");
        assert_eq!(value["requestedPricingRefId"], "PR-2024-0426-001");
        assert_eq!(value["transactionTimestamp"], "2024-04-26T07:30:00");
    }

    #[test]
    fn test_incomplete_advice_omits_absent_fields() {
        let advice = Advice::builder().advice_id("a-1").build();
        let value = serde_json::to_value(&advice).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("adviceId"));
    }

    #[test]
    fn test_batch_state_terminal() {
        assert!(!BatchState::Pending.is_terminal());
        assert!(!BatchState::Processing.is_terminal());
        assert!(BatchState::Completed.is_terminal());
        assert!(BatchState::Failed.is_terminal());
    }

    #[test]
    fn test_status_deserializes_wire_shape() {
        let json = r#"{
            "batchId": "b-123",
            "status": "COMPLETED",
            "advices": [
                {"adviceId": "a-1", "status": "ACCEPTED"},
                {"adviceId": "a-2", "status": "REJECTED", "reason": "stale pricing reference"}
            ]
        }"#;
        let status: BatchStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.batch_id, "b-123");
        assert!(status.status.is_terminal());
        assert_eq!(status.advices.len(), 2);
        assert_eq!(status.advices[1].status, AdviceState::Rejected);
    }
}
