//! Adapters between external formats and the application layer.

pub mod csv;
