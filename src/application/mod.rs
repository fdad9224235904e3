//! Application layer wiring gateways to callers.
//!
//! `PaymentDispatcher` forwards payments to one injected gateway;
//! `GatewayRegistry` turns a gateway identifier into such a dispatcher.

pub mod dispatcher;
pub mod registry;
