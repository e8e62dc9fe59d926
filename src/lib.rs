//! Typed Rust client for the Fast2SMS Bulk V2 HTTP API.
//!
//! The design is a domain layer of strong types, a transport layer for
//! wire-format details, and a small client layer orchestrating the single
//! `bulkV2` send operation. The provider's response schema is not modeled:
//! a completed exchange yields the HTTP status code plus the JSON-decoded
//! body as an opaque value, whether the provider accepted the message or
//! rejected it.
//!
//! ```rust,no_run
//! use fast2sms::{ApiKey, BulkSms, Fast2SmsClient, MessageText, RecipientNumber};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), fast2sms::Fast2SmsError> {
//!     let client = Fast2SmsClient::new(ApiKey::new("...")?);
//!     let number = RecipientNumber::new("9940147796")?;
//!     let msg = MessageText::new("This is Skill Bridge")?;
//!     let request = BulkSms::quick(vec![number], msg)?;
//!     let report = client.send_bulk_sms(request).await?;
//!     println!("{}", report.http_status);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Fast2SmsClient, Fast2SmsClientBuilder, Fast2SmsError};
pub use domain::{
    ApiKey, BULK_SMS_MAX_RECIPIENTS, BulkSms, DeliveryReport, Language, MessageText, PhoneNumber,
    ProviderAck, RecipientNumber, Route, ValidationError,
};
