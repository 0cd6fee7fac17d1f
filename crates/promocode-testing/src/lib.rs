//! Test utilities for promo code services.
//!
//! Provides [`client::TestClient`], which drives an axum `Router` in process.
//! Import from dev-dependencies only, never in production code.

pub mod client;
