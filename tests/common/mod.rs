#![allow(dead_code)]

use async_trait::async_trait;
use paydispatch::domain::amount::Amount;
use paydispatch::domain::ports::PaymentGateway;
use paydispatch::domain::receipt::Receipt;
use paydispatch::error::{PaymentError, Result};
use std::sync::{Arc, Mutex};

/// A gateway added without touching the dispatcher or the port.
pub struct PayPal;

#[async_trait]
impl PaymentGateway for PayPal {
    fn name(&self) -> &str {
        "PayPal"
    }

    async fn pay(&self, amount: Amount) -> Result<Receipt> {
        Ok(Receipt::new("PayPal", amount))
    }
}

/// Records every amount it is asked to charge.
#[derive(Clone, Default)]
pub struct RecordingGateway {
    charged: Arc<Mutex<Vec<Amount>>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn charged(&self) -> Vec<Amount> {
        self.charged.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
    fn name(&self) -> &str {
        "Recording"
    }

    async fn pay(&self, amount: Amount) -> Result<Receipt> {
        self.charged.lock().unwrap().push(amount);
        Ok(Receipt::new("Recording", amount))
    }
}

/// Always fails as if the backend could not be reached.
pub struct FailingGateway;

#[async_trait]
impl PaymentGateway for FailingGateway {
    fn name(&self) -> &str {
        "Failing"
    }

    async fn pay(&self, _amount: Amount) -> Result<Receipt> {
        Err(PaymentError::unavailable("Failing", "timeout after 30s"))
    }
}
