use super::amount::Amount;
use super::receipt::Receipt;
use crate::error::Result;
use async_trait::async_trait;

/// A backend able to charge an [`Amount`].
///
/// Implementations own any validation beyond non-negativity and any internal
/// state they need (connection pools, credentials), including its locking.
/// A failed backend call is reported as [`PaymentError::GatewayUnavailable`].
///
/// [`PaymentError::GatewayUnavailable`]: crate::error::PaymentError::GatewayUnavailable
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Human-readable backend name, used to attribute receipts.
    fn name(&self) -> &str;

    async fn pay(&self, amount: Amount) -> Result<Receipt>;
}

pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
pub type GatewayFactory = Box<dyn Fn() -> PaymentGatewayBox + Send + Sync>;
