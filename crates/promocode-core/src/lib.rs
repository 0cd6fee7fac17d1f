//! Plumbing shared by promo code services: configuration loading, tracing,
//! request-id middleware, health probes and wire serializers.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
