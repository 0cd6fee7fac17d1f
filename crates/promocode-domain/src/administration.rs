//! Staff-side records: employees and the roles they hold.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::full_name;
use crate::impl_entity;

/// A named permission group, e.g. `Admin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

/// A staff member who issues promo codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub applied_promocodes_count: u32,
}

impl Employee {
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }
}

impl_entity!(Role, Employee);
