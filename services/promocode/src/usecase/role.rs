use promocode_domain::administration::Role;

use crate::domain::repository::Repository;
use crate::error::PromoCodeServiceError;

pub struct ListRolesUseCase<R: Repository<Role>> {
    pub roles: R,
}

impl<R: Repository<Role>> ListRolesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Role>, PromoCodeServiceError> {
        self.roles.get_all().await
    }
}
