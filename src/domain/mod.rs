//! Domain types and the gateway port.

pub mod amount;
pub mod ports;
pub mod receipt;
