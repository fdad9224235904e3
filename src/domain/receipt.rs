use super::amount::Amount;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Confirmation produced by a gateway once it has processed a charge.
///
/// Carries no timestamps or generated ids: the same gateway charging the same
/// amount always yields an equal receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub gateway: String,
    pub amount: Amount,
}

impl Receipt {
    pub fn new(gateway: impl Into<String>, amount: Amount) -> Self {
        Self {
            gateway: gateway.into(),
            amount,
        }
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Making payment using {}: {}", self.gateway, self.amount)
    }
}
