use crate::domain::amount::Amount;
use crate::domain::ports::PaymentGateway;
use crate::domain::receipt::Receipt;
use crate::error::Result;
use async_trait::async_trait;

/// Stateless Stripe backend.
///
/// Stands in for the outbound call to Stripe's API; confirms every charge with
/// a receipt tagged `Stripe`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stripe;

impl Stripe {
    pub const NAME: &'static str = "Stripe";

    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentGateway for Stripe {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn pay(&self, amount: Amount) -> Result<Receipt> {
        Ok(Receipt::new(Self::NAME, amount))
    }
}

/// Stateless Razorpay backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct Razorpay;

impl Razorpay {
    pub const NAME: &'static str = "Razorpay";

    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentGateway for Razorpay {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn pay(&self, amount: Amount) -> Result<Receipt> {
        Ok(Receipt::new(Self::NAME, amount))
    }
}
