//! Pricing sheet data models

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which leg of the currency pair the transaction settles in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CcyType {
    /// The first component of the pair
    Base,
    /// The second component of the pair
    Quote,
}

impl std::fmt::Display for CcyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CcyType::Base => write!(f, "BASE"),
            CcyType::Quote => write!(f, "QUOTE"),
        }
    }
}

/// A pricing sheet published by the advice service.
///
/// Each sheet quotes one currency pair and carries the pricing reference
/// identifier that advices must quote back when they request this
/// pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSheet {
    /// Opaque reference quoted back on advices built against this sheet
    pub pricing_reference_id: String,

    /// Currency pair in "BASE/QUOTE" notation, e.g. "USD/SGD"
    pub ccy_pair: String,

    /// Which leg of the pair transactions against this sheet settle in
    pub transaction_ccy_type: CcyType,

    /// Quoted rate, when the sheet carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,

    /// Start of the sheet's validity window (UTC)
    pub effective_from: NaiveDateTime,

    /// End of the validity window; open-ended when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_to: Option<NaiveDateTime>,
}

impl PricingSheet {
    /// First component of the currency pair, `None` if the pair is malformed
    pub fn base_ccy(&self) -> Option<&str> {
        self.ccy_pair.split_once('/').map(|(base, _)| base)
    }

    /// Second component of the currency pair, `None` if the pair is malformed
    pub fn quote_ccy(&self) -> Option<&str> {
        self.ccy_pair.split_once('/').map(|(_, quote)| quote)
    }

    /// The currency transactions against this sheet settle in
    pub fn transaction_ccy(&self) -> Option<&str> {
        match self.transaction_ccy_type {
            CcyType::Base => self.base_ccy(),
            CcyType::Quote => self.quote_ccy(),
        }
    }

    /// Whether the sheet is active at the given instant.
    ///
    /// The window is inclusive of `effective_from` and exclusive of
    /// `effective_to`; a missing `effective_to` means open-ended.
    pub fn is_active_at(&self, ts: NaiveDateTime) -> bool {
        ts >= self.effective_from && self.effective_to.map_or(true, |to| ts < to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sheet(ccy_pair: &str, ccy_type: CcyType) -> PricingSheet {
        PricingSheet {
            pricing_reference_id: "PR-2024-0426-001".to_string(),
            ccy_pair: ccy_pair.to_string(),
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
    fn test_pair_components() {
        let s = sheet("USD/SGD", CcyType::Base);
        assert_eq!(s.base_ccy(), Some("USD"));
        assert_eq!(s.quote_ccy(), Some("SGD"));
        assert_eq!(s.transaction_ccy(), Some("USD"));

        let q = sheet("EUR/JPY", CcyType::Quote);
        assert_eq!(q.transaction_ccy(), Some("JPY"));

        let malformed = sheet("USDSGD", CcyType::Base);
        assert_eq!(malformed.base_ccy(), None);
        assert_eq!(malformed.transaction_ccy(), None);
    }

    #[test]
    fn test_active_window() {
        let mut s = sheet("USD/SGD", CcyType::Base);
        let before = NaiveDate::from_ymd_opt(2024, 4, 26).unwrap().and_hms_opt(6, 59, 59).unwrap();
        let at_start = s.effective_from;
        let later = NaiveDate::from_ymd_opt(2024, 4, 26).unwrap().and_hms_opt(12, 0, 0).unwrap();

        assert!(!s.is_active_at(before));
        assert!(s.is_active_at(at_start));
        assert!(s.is_active_at(later));

        s.effective_to =
            Some(NaiveDate::from_ymd_opt(2024, 4, 26).unwrap().and_hms_opt(12, 0, 0).unwrap());
        assert!(!s.is_active_at(later));
        assert!(s.is_active_at(at_start));
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "pricingReferenceId": "PR-2024-0426-001",
            "ccyPair": "USD/SGD",
            "transactionCcyType": "BASE",
            "rate": 1.3525,
            "effectiveFrom": "2024-04-26T07:00:00",
            "effectiveTo": "2024-04-26T19:00:00"
        }"#;
        let s: PricingSheet = serde_json::from_str(json).unwrap();
        assert_eq!(s.pricing_reference_id, "PR-2024-0426-001");
        assert_eq!(s.transaction_ccy_type, CcyType::Base);
        assert_eq!(s.transaction_ccy(), Some("USD"));
        assert!(s.rate.is_some());
        assert!(s.effective_to.is_some());
    }
}
