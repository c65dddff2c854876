use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use easwipe_core::AppError;
use easwipe_models::{ClosureResponse, Department, DepartmentId, SaveDepartmentDto};

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdmin;
use crate::modules::departments::service::DepartmentService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List all departments
#[utoipa::path(
    get,
    path = "/api/departments",
    responses(
        (status = 200, description = "All departments", body = Vec<Department>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Departments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_departments(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Json<Vec<Department>> {
    Json(DepartmentService::get_departments(&state.store).await)
}

/// Create a department (Admin only)
#[utoipa::path(
    post,
    path = "/api/departments",
    request_body = SaveDepartmentDto,
    responses(
        (status = 201, description = "Department created", body = Department),
        (status = 400, description = "Unknown parent or head"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only"),
        (status = 422, description = "Validation error")
    ),
    tag = "Departments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin, dto))]
pub async fn create_department(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ValidatedJson(dto): ValidatedJson<SaveDepartmentDto>,
) -> Result<(StatusCode, Json<Department>), AppError> {
    let department = DepartmentService::create_department(&state.store, dto).await?;
    Ok((StatusCode::CREATED, Json(department)))
}

/// Update a department (Admin only)
#[utoipa::path(
    put,
    path = "/api/departments/{id}",
    params(
        ("id" = String, Path, description = "Department ID")
    ),
    request_body = SaveDepartmentDto,
    responses(
        (status = 200, description = "Department updated", body = Department),
        (status = 400, description = "Unknown, self or cyclic parent"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Department not found")
    ),
    tag = "Departments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin, dto))]
pub async fn update_department(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DepartmentId>,
    ValidatedJson(dto): ValidatedJson<SaveDepartmentDto>,
) -> Result<Json<Department>, AppError> {
    let department = DepartmentService::update_department(&state.store, &id, dto).await?;
    Ok(Json(department))
}

/// Delete a department (Admin only)
#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    params(
        ("id" = String, Path, description = "Department ID")
    ),
    responses(
        (status = 204, description = "Department deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Department not found"),
        (status = 409, description = "Department still has child departments")
    ),
    tag = "Departments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin))]
pub async fn delete_department(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DepartmentId>,
) -> Result<StatusCode, AppError> {
    DepartmentService::delete_department(&state.store, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Resolve a department and all of its descendants
#[utoipa::path(
    get,
    path = "/api/departments/{id}/closure",
    params(
        ("id" = String, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department closure", body = ClosureResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Departments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_department_closure(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<DepartmentId>,
) -> Json<ClosureResponse> {
    Json(DepartmentService::get_closure(&state.store, id).await)
}
