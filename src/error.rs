use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Gateway '{gateway}' unavailable: {reason}")]
    GatewayUnavailable { gateway: String, reason: String },
    #[error("Unsupported gateway: '{0}'")]
    UnsupportedGateway(String),
    #[error("Gateway '{0}' is already registered")]
    GatewayAlreadyRegistered(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PaymentError {
    /// Shorthand used by gateway adapters when their backend call fails.
    pub fn unavailable(gateway: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::GatewayUnavailable {
            gateway: gateway.into(),
            reason: reason.into(),
        }
    }
}
