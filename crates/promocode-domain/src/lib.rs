//! Entity model for the promo code service.
//!
//! Plain data records with no framework dependencies. Every record implements
//! [`entity::Entity`] so it can be stored behind the generic repository.

pub mod administration;
pub mod entity;
pub mod promo_code_management;
