//! # Mock Gateway
//!
//! A [`PaymentGateway`] that answers from a queue of scripted results, for testing checkout
//! declines and gateway failures without the simulated delay.
//!
//! ```rust
//! use storefront::payment::mock::MockPaymentGateway;
//! use storefront::payment::{PaymentDetails, PaymentGateway, PaymentResult};
//!
//! #[tokio::main]
//! async fn main() {
//!     let gateway = MockPaymentGateway::new();
//!     gateway.expect_payment().return_result(PaymentResult::declined("Card declined"));
//!
//!     let result = gateway.process_payment(42.0, &PaymentDetails::default()).await.unwrap();
//!     assert!(!result.success);
//!     assert_eq!(gateway.charged_amounts(), vec![42.0]);
//!     gateway.verify();
//! }
//! ```

use crate::payment::{PaymentDetails, PaymentError, PaymentGateway, PaymentResult};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

type Response = Result<PaymentResult, PaymentError>;

/// A gateway with expectation tracking.
///
/// Each call pops the next expectation; a call with none left panics.
#[derive(Clone, Default)]
pub struct MockPaymentGateway {
    expectations: Arc<Mutex<VecDeque<Response>>>,
    charged: Arc<Mutex<Vec<f64>>>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one `process_payment` call.
    pub fn expect_payment(&self) -> PaymentExpectationBuilder {
        PaymentExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Amounts of every call received so far, in order.
    pub fn charged_amounts(&self) -> Vec<f64> {
        self.charged.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn process_payment(&self, amount: f64, _details: &PaymentDetails) -> Response {
        self.charged.lock().unwrap().push(amount);
        let next = self.expectations.lock().unwrap().pop_front();
        match next {
            Some(response) => response,
            None => panic!("Unexpected payment request for {}", amount),
        }
    }
}

/// Builder for payment expectations.
pub struct PaymentExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Response>>>,
}

impl PaymentExpectationBuilder {
    /// Sets the expectation to return a gateway answer.
    pub fn return_result(self, result: PaymentResult) {
        self.expectations.lock().unwrap().push_back(Ok(result));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: PaymentError) {
        self.expectations.lock().unwrap().push_back(Err(error));
    }
}
