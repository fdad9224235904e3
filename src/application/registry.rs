use super::dispatcher::PaymentDispatcher;
use crate::domain::ports::{GatewayFactory, PaymentGatewayBox};
use crate::error::{PaymentError, Result};
use crate::infrastructure::gateways::{Razorpay, Stripe};
use log::info;
use std::collections::HashMap;

/// Maps gateway identifiers to factories producing fresh gateway instances.
///
/// Identifiers are case-insensitive (`"Stripe"` and `"stripe"` are the same key).
/// The registry only selects; once a dispatcher is built it knows nothing about
/// which identifier produced its gateway.
#[derive(Default)]
pub struct GatewayRegistry {
    factories: HashMap<String, GatewayFactory>,
}

impl GatewayRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with `stripe` and `razorpay` already registered.
    pub fn with_builtin_gateways() -> Self {
        let mut registry = Self::new();
        registry.factories.insert(
            "stripe".to_string(),
            Box::new(|| Box::new(Stripe::new()) as PaymentGatewayBox),
        );
        registry.factories.insert(
            "razorpay".to_string(),
            Box::new(|| Box::new(Razorpay::new()) as PaymentGatewayBox),
        );
        registry
    }

    pub fn register(&mut self, id: &str, factory: GatewayFactory) -> Result<()> {
        let key = normalize(id);
        if self.factories.contains_key(&key) {
            return Err(PaymentError::GatewayAlreadyRegistered(key));
        }
        info!("registered gateway '{}'", key);
        self.factories.insert(key, factory);
        Ok(())
    }

    /// Builds a new gateway instance for `id`.
    pub fn gateway(&self, id: &str) -> Result<PaymentGatewayBox> {
        self.factories
            .get(&normalize(id))
            .map(|factory| factory())
            .ok_or_else(|| PaymentError::UnsupportedGateway(id.to_string()))
    }

    /// Builds a dispatcher bound to a new instance of gateway `id`.
    pub fn dispatcher_for(&self, id: &str) -> Result<PaymentDispatcher> {
        self.gateway(id).map(PaymentDispatcher::new)
    }

    /// Registered identifiers, sorted.
    pub fn gateway_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.factories.keys().cloned().collect();
        ids.sort();
        ids
    }
}

fn normalize(id: &str) -> String {
    id.trim().to_lowercase()
}
