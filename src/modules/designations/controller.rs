use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use easwipe_core::AppError;
use easwipe_models::{Designation, DesignationId, SaveDesignationDto};

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdmin;
use crate::modules::designations::service::DesignationService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List designations
#[utoipa::path(
    get,
    path = "/api/designations",
    responses(
        (status = 200, description = "All designations", body = Vec<Designation>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Designations",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_designations(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Json<Vec<Designation>> {
    Json(DesignationService::get_designations(&state.store).await)
}

/// Create a designation (Admin only)
#[utoipa::path(
    post,
    path = "/api/designations",
    request_body = SaveDesignationDto,
    responses(
        (status = 201, description = "Designation created", body = Designation),
        (status = 400, description = "Unknown department or role"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only")
    ),
    tag = "Designations",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin, dto))]
pub async fn create_designation(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ValidatedJson(dto): ValidatedJson<SaveDesignationDto>,
) -> Result<(StatusCode, Json<Designation>), AppError> {
    let designation = DesignationService::create_designation(&state.store, dto).await?;
    Ok((StatusCode::CREATED, Json(designation)))
}

/// Update a designation (Admin only)
#[utoipa::path(
    put,
    path = "/api/designations/{id}",
    params(
        ("id" = String, Path, description = "Designation ID")
    ),
    request_body = SaveDesignationDto,
    responses(
        (status = 200, description = "Designation updated", body = Designation),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Designation not found")
    ),
    tag = "Designations",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin, dto))]
pub async fn update_designation(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DesignationId>,
    ValidatedJson(dto): ValidatedJson<SaveDesignationDto>,
) -> Result<Json<Designation>, AppError> {
    let designation = DesignationService::update_designation(&state.store, &id, dto).await?;
    Ok(Json(designation))
}

/// Delete a designation (Admin only)
#[utoipa::path(
    delete,
    path = "/api/designations/{id}",
    params(
        ("id" = String, Path, description = "Designation ID")
    ),
    responses(
        (status = 204, description = "Designation deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Designation not found")
    ),
    tag = "Designations",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin))]
pub async fn delete_designation(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DesignationId>,
) -> Result<StatusCode, AppError> {
    DesignationService::delete_designation(&state.store, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
