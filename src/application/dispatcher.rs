use crate::domain::amount::Amount;
use crate::domain::ports::PaymentGatewayBox;
use crate::domain::receipt::Receipt;
use crate::error::Result;
use log::{debug, warn};

/// Forwards payment requests to the gateway it was built with.
///
/// `PaymentDispatcher` depends only on the [`PaymentGateway`] port. The gateway is
/// bound once in [`PaymentDispatcher::new`] and cannot be swapped afterwards;
/// switching backends means building a new dispatcher.
///
/// The dispatcher is `Send + Sync`, so a single instance can be shared behind an
/// `Arc` by concurrent callers.
///
/// [`PaymentGateway`]: crate::domain::ports::PaymentGateway
pub struct PaymentDispatcher {
    gateway: PaymentGatewayBox,
}

impl PaymentDispatcher {
    /// Creates a new `PaymentDispatcher` bound to `gateway`.
    ///
    /// # Arguments
    ///
    /// * `gateway` - The backend every payment is forwarded to.
    pub fn new(gateway: PaymentGatewayBox) -> Self {
        Self { gateway }
    }

    /// Charges `amount` through the bound gateway.
    ///
    /// The amount reaches the gateway unchanged, and whatever the gateway returns,
    /// receipt or error, is handed back as-is. No retries are attempted.
    pub async fn make_payment(&self, amount: Amount) -> Result<Receipt> {
        debug!("dispatching {} to {}", amount, self.gateway.name());
        self.gateway.pay(amount).await.inspect_err(|e| {
            warn!("gateway {} failed: {}", self.gateway.name(), e);
        })
    }

    /// Name of the bound gateway.
    pub fn gateway_name(&self) -> &str {
        self.gateway.name()
    }
}
