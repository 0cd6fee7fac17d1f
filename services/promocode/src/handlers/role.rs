use axum::{Json, extract::State};
use serde::Serialize;
use uuid::Uuid;

use promocode_domain::administration::Role;

use crate::error::PromoCodeServiceError;
use crate::state::AppState;
use crate::usecase::role::ListRolesUseCase;

#[derive(Serialize)]
pub struct RoleResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
            description: role.description,
        }
    }
}

// ── GET /api/v1/roles ────────────────────────────────────────────────────────

pub async fn get_roles(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoleResponse>>, PromoCodeServiceError> {
    let usecase = ListRolesUseCase {
        roles: state.role_repo(),
    };
    let roles = usecase.execute().await?;
    Ok(Json(roles.into_iter().map(Into::into).collect()))
}
