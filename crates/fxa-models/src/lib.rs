//! # fxa-models
//!
//! Data models for the fx-advice service API.
//!
//! This crate provides strongly-typed Rust structures for the advice
//! service's wire format: pricing sheets, transaction advices, submission
//! results, batch status, and the HTTP response envelope every call
//! resolves to.
//!
//! ## Features
//!
//! - **Type Safety**: All request and response payloads are strongly typed
//! - **Serde Integration**: Built-in serialization/deserialization
//! - **Decimal Precision**: Uses `rust_decimal` for financial amounts
//! - **Builder Construction**: Advices are assembled field by field, the
//!   way the service expects them
//!
//! ## Usage
//!
//! ```ignore
//! use fxa_models::advice::Advice;
//! use fxa_models::pricing::PricingSheet;
//!
//! let sheet: PricingSheet = serde_json::from_str(&sheet_json)?;
//! let advice = Advice::builder()
//!     .advice_id("a-1")
//!     .ccy_pair(sheet.ccy_pair.clone())
//!     .build();
//! ```

#![warn(clippy::all)]

pub mod advice;
pub mod common;
pub mod pricing;

// Re-export common types for convenience
pub use common::*;

// Re-export all model types
pub use advice::*;
pub use pricing::*;
