//! Concrete payment backends implementing [`PaymentGateway`](crate::domain::ports::PaymentGateway).

pub mod gateways;
