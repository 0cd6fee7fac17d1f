use promocode_domain::administration::{Employee, Role};
use promocode_domain::promo_code_management::{
    Customer, CustomerPreference, Preference, PromoCode,
};

use crate::infra::memory::InMemoryRepository;
use crate::infra::seed;

/// Shared application state passed to every handler via axum `State`.
///
/// Each field is a shared handle; cloning the state clones handles, not data.
#[derive(Clone, Default)]
pub struct AppState {
    pub customers: InMemoryRepository<Customer>,
    pub preferences: InMemoryRepository<Preference>,
    pub customer_preferences: InMemoryRepository<CustomerPreference>,
    pub promo_codes: InMemoryRepository<PromoCode>,
    pub employees: InMemoryRepository<Employee>,
    pub roles: InMemoryRepository<Role>,
}

impl AppState {
    /// Fresh state loaded with the fixture data set.
    pub fn seeded() -> Self {
        Self {
            customers: InMemoryRepository::new(seed::customers()),
            preferences: InMemoryRepository::new(seed::preferences()),
            customer_preferences: InMemoryRepository::new(seed::customer_preferences()),
            promo_codes: InMemoryRepository::new(seed::promo_codes()),
            employees: InMemoryRepository::new(seed::employees()),
            roles: InMemoryRepository::new(seed::roles()),
        }
    }

    pub fn customer_repo(&self) -> InMemoryRepository<Customer> {
        self.customers.clone()
    }

    pub fn preference_repo(&self) -> InMemoryRepository<Preference> {
        self.preferences.clone()
    }

    pub fn customer_preference_repo(&self) -> InMemoryRepository<CustomerPreference> {
        self.customer_preferences.clone()
    }

    pub fn promo_code_repo(&self) -> InMemoryRepository<PromoCode> {
        self.promo_codes.clone()
    }

    pub fn employee_repo(&self) -> InMemoryRepository<Employee> {
        self.employees.clone()
    }

    pub fn role_repo(&self) -> InMemoryRepository<Role> {
        self.roles.clone()
    }
}
