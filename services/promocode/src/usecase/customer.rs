use anyhow::anyhow;
use tracing::info;
use uuid::Uuid;

use promocode_domain::promo_code_management::{
    Customer, CustomerPreference, Preference, PromoCode,
};

use crate::domain::repository::Repository;
use crate::error::PromoCodeServiceError;

/// Resolve every id in request order. The first unknown id fails the lookup.
async fn resolve_preferences<P: Repository<Preference>>(
    repo: &P,
    ids: &[Uuid],
) -> Result<Vec<Preference>, PromoCodeServiceError> {
    let mut preferences = Vec::with_capacity(ids.len());
    for id in ids {
        let preference = repo
            .get_by_id(*id)
            .await?
            .ok_or(PromoCodeServiceError::PreferenceNotFound)?;
        preferences.push(preference);
    }
    Ok(preferences)
}

/// Create a link per preference in the join repository and return them.
async fn link_preferences<L: Repository<CustomerPreference>>(
    repo: &L,
    customer_id: Uuid,
    preferences: &[Preference],
) -> Result<Vec<CustomerPreference>, PromoCodeServiceError> {
    let links: Vec<CustomerPreference> = preferences
        .iter()
        .map(|p| CustomerPreference::link(customer_id, p))
        .collect();
    for link in &links {
        repo.add(link.clone()).await?;
    }
    Ok(links)
}

// ── ListCustomers ────────────────────────────────────────────────────────────

pub struct ListCustomersUseCase<C: Repository<Customer>> {
    pub customers: C,
}

impl<C: Repository<Customer>> ListCustomersUseCase<C> {
    pub async fn execute(&self) -> Result<Vec<Customer>, PromoCodeServiceError> {
        self.customers.get_all().await
    }
}

// ── GetCustomer ──────────────────────────────────────────────────────────────

/// A customer with its preferences and promo codes resolved.
#[derive(Debug, Clone)]
pub struct CustomerDetails {
    pub customer: Customer,
    pub preferences: Vec<Preference>,
    pub promo_codes: Vec<PromoCode>,
}

pub struct GetCustomerUseCase<C, P, L, K>
where
    C: Repository<Customer>,
    P: Repository<Preference>,
    L: Repository<CustomerPreference>,
    K: Repository<PromoCode>,
{
    pub customers: C,
    pub preferences: P,
    pub links: L,
    pub promo_codes: K,
}

impl<C, P, L, K> GetCustomerUseCase<C, P, L, K>
where
    C: Repository<Customer>,
    P: Repository<Preference>,
    L: Repository<CustomerPreference>,
    K: Repository<PromoCode>,
{
    pub async fn execute(&self, id: Uuid) -> Result<CustomerDetails, PromoCodeServiceError> {
        let customer = self
            .customers
            .get_by_id(id)
            .await?
            .ok_or(PromoCodeServiceError::CustomerNotFound)?;
        let preference_ids: Vec<Uuid> = self
            .links
            .get_where(|l| l.customer_id == id)
            .await?
            .into_iter()
            .map(|l| l.preference_id)
            .collect();
        let preferences = self.preferences.get_range_by_ids(&preference_ids).await?;
        let promo_codes = self
            .promo_codes
            .get_where(|p| p.customer_id == Some(id))
            .await?;
        Ok(CustomerDetails {
            customer,
            preferences,
            promo_codes,
        })
    }
}

// ── CreateCustomer / EditCustomer ────────────────────────────────────────────

pub struct CustomerInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub preference_ids: Vec<Uuid>,
}

pub struct CreateCustomerUseCase<C, P, L>
where
    C: Repository<Customer>,
    P: Repository<Preference>,
    L: Repository<CustomerPreference>,
{
    pub customers: C,
    pub preferences: P,
    pub links: L,
}

impl<C, P, L> CreateCustomerUseCase<C, P, L>
where
    C: Repository<Customer>,
    P: Repository<Preference>,
    L: Repository<CustomerPreference>,
{
    /// Returns the id assigned to the new customer.
    pub async fn execute(&self, input: CustomerInput) -> Result<Uuid, PromoCodeServiceError> {
        let preferences = resolve_preferences(&self.preferences, &input.preference_ids).await?;
        let id = Uuid::new_v4();
        let links = link_preferences(&self.links, id, &preferences).await?;
        self.customers
            .add(Customer {
                id,
                first_name: input.first_name,
                last_name: input.last_name,
                email: input.email,
                preferences: links,
                promo_codes: Vec::new(),
            })
            .await?;
        info!(customer_id = %id, preferences = preferences.len(), "customer created");
        Ok(id)
    }
}

pub struct EditCustomerUseCase<C, P, L>
where
    C: Repository<Customer>,
    P: Repository<Preference>,
    L: Repository<CustomerPreference>,
{
    pub customers: C,
    pub preferences: P,
    pub links: L,
}

impl<C, P, L> EditCustomerUseCase<C, P, L>
where
    C: Repository<Customer>,
    P: Repository<Preference>,
    L: Repository<CustomerPreference>,
{
    /// Preferences are validated before the customer is looked up, so a bad
    /// preference id wins over an unknown customer id.
    pub async fn execute(&self, id: Uuid, input: CustomerInput) -> Result<(), PromoCodeServiceError> {
        let preferences = resolve_preferences(&self.preferences, &input.preference_ids).await?;
        let mut customer = self
            .customers
            .get_by_id(id)
            .await?
            .ok_or_else(|| anyhow!("customer {id} disappeared before update"))?;

        let stale = self.links.get_where(|l| l.customer_id == id).await?;
        self.links.remove_range(&stale).await?;
        let links = link_preferences(&self.links, id, &preferences).await?;

        customer.first_name = input.first_name;
        customer.last_name = input.last_name;
        customer.email = input.email;
        customer.preferences = links;
        self.customers.update(customer).await?;
        info!(customer_id = %id, preferences = preferences.len(), "customer updated");
        Ok(())
    }
}

// ── DeleteCustomer ───────────────────────────────────────────────────────────

pub struct DeleteCustomerUseCase<C, L, K>
where
    C: Repository<Customer>,
    L: Repository<CustomerPreference>,
    K: Repository<PromoCode>,
{
    pub customers: C,
    pub links: L,
    pub promo_codes: K,
}

impl<C, L, K> DeleteCustomerUseCase<C, L, K>
where
    C: Repository<Customer>,
    L: Repository<CustomerPreference>,
    K: Repository<PromoCode>,
{
    /// Deletes the customer, then its promo codes, then its preference links.
    ///
    /// The three steps are independent: a failure part way leaves orphans.
    pub async fn execute(&self, id: Uuid) -> Result<(), PromoCodeServiceError> {
        let customer = self
            .customers
            .get_by_id(id)
            .await?
            .ok_or(PromoCodeServiceError::CustomerNotFound)?;
        self.customers.delete(&customer).await?;

        let promo_codes = self
            .promo_codes
            .get_where(|p| p.customer_id == Some(id))
            .await?;
        self.promo_codes.remove_range(&promo_codes).await?;

        let links = self.links.get_where(|l| l.customer_id == id).await?;
        self.links.remove_range(&links).await?;

        info!(
            customer_id = %id,
            promo_codes = promo_codes.len(),
            preferences = links.len(),
            "customer deleted"
        );
        Ok(())
    }
}
