//! # Payment
//!
//! Payments go through a [`PaymentGateway`]. The bundled [`SimulatedGateway`] waits a fixed
//! delay, applies two shallow checks and otherwise approves with a synthetic transaction id.
//! No money moves.
//!
//! ## Structure
//!
//! - [`validation`] - live form feedback (card number, expiry, CVV)
//! - [`mock`] - [`MockPaymentGateway`](mock::MockPaymentGateway) with scripted results
//! - [`error`] - [`PaymentError`]
//!
//! The form validators are stricter than the gateway: an expired card passes
//! [`SimulatedGateway::process_payment`] as long as the expiry field is filled in.

pub mod error;
pub mod mock;
pub mod validation;

pub use error::*;
pub use validation::*;

use crate::ids::transaction_id;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Card fields as entered on the checkout page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub card_number: String,
    pub card_name: String,
    pub expiry: String,
    pub cvv: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentField {
    CardNumber,
    Expiry,
    Cvv,
}

/// A message to show next to one payment-form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: PaymentField,
    pub message: &'static str,
}

impl PaymentDetails {
    pub fn new(
        card_number: impl Into<String>,
        card_name: impl Into<String>,
        expiry: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            card_name: card_name.into(),
            expiry: expiry.into(),
            cvv: cvv.into(),
        }
    }

    /// Per-field feedback while the form is being filled in.
    ///
    /// Empty fields produce no message, and expiry is only checked once it is complete (`MM/YY`).
    pub fn form_errors(&self, now: DateTime<Utc>) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if !self.card_number.is_empty() && !validate_card_number(&self.card_number) {
            errors.push(FieldError {
                field: PaymentField::CardNumber,
                message: "Invalid card number",
            });
        }
        if self.expiry.len() == 5 && !validate_expiry_at(&self.expiry, now) {
            errors.push(FieldError {
                field: PaymentField::Expiry,
                message: "Invalid or expired date",
            });
        }
        if !self.cvv.is_empty() && !validate_cvv(&self.cvv) {
            errors.push(FieldError {
                field: PaymentField::Cvv,
                message: "Invalid CVV",
            });
        }
        errors
    }
}

/// Outcome of a payment attempt. A decline is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PaymentResult {
    pub fn approved(transaction_id: impl Into<String>) -> Self {
        Self {
            success: true,
            transaction_id: Some(transaction_id.into()),
            error: None,
        }
    }

    pub fn declined(error: impl Into<String>) -> Self {
        Self {
            success: false,
            transaction_id: None,
            error: Some(error.into()),
        }
    }
}

/// Charges an amount against card details.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn process_payment(
        &self,
        amount: f64,
        details: &PaymentDetails,
    ) -> Result<PaymentResult, PaymentError>;
}

#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    latency: Duration,
}

impl SimulatedGateway {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    /// Declines a card number shorter than 13 characters (spaces count), then a missing expiry
    /// or CVV. Everything else is approved; the amount is not inspected.
    #[instrument(skip(self, details))]
    async fn process_payment(
        &self,
        amount: f64,
        details: &PaymentDetails,
    ) -> Result<PaymentResult, PaymentError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if details.card_number.chars().count() < 13 {
            warn!("Payment declined: card number");
            return Ok(PaymentResult::declined("Invalid card number"));
        }
        if details.expiry.is_empty() || details.cvv.is_empty() {
            warn!("Payment declined: missing details");
            return Ok(PaymentResult::declined("Missing payment details"));
        }

        let transaction_id = transaction_id();
        debug!(%transaction_id, "Generated transaction id");
        info!("Payment approved");
        Ok(PaymentResult::approved(transaction_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn gateway() -> SimulatedGateway {
        SimulatedGateway::new(Duration::ZERO)
    }

    fn card() -> PaymentDetails {
        PaymentDetails::new("4111111111111111", "Priya Sharma", "12/99", "123")
    }

    #[tokio::test]
    async fn test_declines_short_card_number_first() {
        let details = PaymentDetails::new("4111", "", "", "");
        let result = gateway().process_payment(10.0, &details).await.unwrap();
        assert_eq!(result, PaymentResult::declined("Invalid card number"));
    }

    #[tokio::test]
    async fn test_declines_missing_expiry_or_cvv() {
        let details = PaymentDetails {
            cvv: String::new(),
            ..card()
        };
        let result = gateway().process_payment(10.0, &details).await.unwrap();
        assert_eq!(result.error.as_deref(), Some("Missing payment details"));
        assert!(!result.success);
    }

    #[tokio::test]
    async fn test_approval_has_transaction_id() {
        let result = gateway().process_payment(100.0, &card()).await.unwrap();
        assert!(result.success);
        assert!(result.transaction_id.unwrap().starts_with("TXN-"));
        assert_eq!(result.error, None);
    }

    #[tokio::test]
    async fn test_expired_card_is_still_approved() {
        let details = PaymentDetails {
            expiry: "01/20".into(),
            ..card()
        };
        assert!(!validate_expiry(&details.expiry));

        let result = gateway().process_payment(100.0, &details).await.unwrap();
        assert!(result.success);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_simulated() {
        let gateway = SimulatedGateway::new(Duration::from_secs(2));
        let started = tokio::time::Instant::now();
        gateway.process_payment(1.0, &card()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[test]
    fn test_form_errors_only_for_filled_fields() {
        let now = Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap();
        assert!(PaymentDetails::default().form_errors(now).is_empty());

        let partial = PaymentDetails::new("4111 1111", "", "01/2", "12");
        let fields: Vec<PaymentField> = partial.form_errors(now).iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![PaymentField::CardNumber, PaymentField::Cvv]);

        let expired = PaymentDetails::new("4111 1111 1111 1111", "", "01/20", "123");
        assert_eq!(
            expired.form_errors(now),
            vec![FieldError {
                field: PaymentField::Expiry,
                message: "Invalid or expired date",
            }]
        );
    }
}
