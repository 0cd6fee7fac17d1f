//! Customer-side records: customers, preferences, the join record between
//! them, and promo codes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::full_name;
use crate::impl_entity;

/// A category a customer can be interested in, e.g. `Theatre`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    pub id: Uuid,
    pub name: String,
}

/// Links one customer to one preference.
///
/// `preference` optionally carries a copy of the linked record; readers that
/// need the current name should resolve `preference_id` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPreference {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub preference_id: Uuid,
    #[serde(default)]
    pub preference: Option<Preference>,
}

impl CustomerPreference {
    /// Build a fresh link carrying a copy of `preference`.
    pub fn link(customer_id: Uuid, preference: &Preference) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            preference_id: preference.id,
            preference: Some(preference.clone()),
        }
    }
}

/// A promo code issued by an employee for a partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoCode {
    pub id: Uuid,
    pub code: String,
    pub service_info: String,
    pub begin_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub partner_name: String,
    /// `None` until the code is handed to a customer.
    pub customer_id: Option<Uuid>,
    pub employee_id: Uuid,
    pub preference_id: Uuid,
}

/// A customer and the records it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub preferences: Vec<CustomerPreference>,
    #[serde(default)]
    pub promo_codes: Vec<PromoCode>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }
}

impl_entity!(Preference, CustomerPreference, PromoCode, Customer);
