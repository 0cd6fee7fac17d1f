use uuid::Uuid;

use promocode_domain::administration::Employee;

use crate::domain::repository::Repository;
use crate::error::PromoCodeServiceError;

// ── ListEmployees ────────────────────────────────────────────────────────────

pub struct ListEmployeesUseCase<E: Repository<Employee>> {
    pub employees: E,
}

impl<E: Repository<Employee>> ListEmployeesUseCase<E> {
    pub async fn execute(&self) -> Result<Vec<Employee>, PromoCodeServiceError> {
        self.employees.get_all().await
    }
}

// ── GetEmployee ──────────────────────────────────────────────────────────────

pub struct GetEmployeeUseCase<E: Repository<Employee>> {
    pub employees: E,
}

impl<E: Repository<Employee>> GetEmployeeUseCase<E> {
    pub async fn execute(&self, id: Uuid) -> Result<Employee, PromoCodeServiceError> {
        self.employees
            .get_by_id(id)
            .await?
            .ok_or(PromoCodeServiceError::EmployeeNotFound)
    }
}
