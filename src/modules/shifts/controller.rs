use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use easwipe_core::AppError;
use easwipe_models::{
    AssignShiftDto, CreateShiftDto, CreateShiftRequestDto, DecisionDto, Shift, ShiftAssignment,
    ShiftChangeRequest, ShiftRequestId,
};

use crate::middleware::auth::{AuthUser, RequireManageShifts};
use crate::modules::shifts::service::ShiftService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List shift definitions
#[utoipa::path(
    get,
    path = "/api/shifts",
    responses(
        (status = 200, description = "All shifts", body = Vec<Shift>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Shifts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_shifts(State(state): State<AppState>, _auth_user: AuthUser) -> Json<Vec<Shift>> {
    Json(ShiftService::get_shifts(&state.store).await)
}

/// Define a shift (requires `manage_shifts`)
#[utoipa::path(
    post,
    path = "/api/shifts",
    request_body = CreateShiftDto,
    responses(
        (status = 201, description = "Shift created", body = Shift),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing manage_shifts permission"),
        (status = 409, description = "Shift name already in use"),
        (status = 422, description = "Validation error")
    ),
    tag = "Shifts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _manager, dto))]
pub async fn create_shift(
    State(state): State<AppState>,
    _manager: RequireManageShifts,
    ValidatedJson(dto): ValidatedJson<CreateShiftDto>,
) -> Result<(StatusCode, Json<Shift>), AppError> {
    let shift = ShiftService::create_shift(&state.store, dto).await?;
    Ok((StatusCode::CREATED, Json(shift)))
}

/// List the roster entries visible to the caller
#[utoipa::path(
    get,
    path = "/api/shifts/roster",
    responses(
        (status = 200, description = "Visible roster entries", body = Vec<ShiftAssignment>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Shifts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_roster(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<ShiftAssignment>>, AppError> {
    let roster = ShiftService::get_roster(&state.store, &auth_user.principal()).await?;
    Ok(Json(roster))
}

/// Assign a user to a shift for a day (requires `manage_shifts`)
#[utoipa::path(
    post,
    path = "/api/shifts/roster",
    request_body = AssignShiftDto,
    responses(
        (status = 201, description = "Shift assigned", body = ShiftAssignment),
        (status = 400, description = "Unknown shift"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing manage_shifts permission"),
        (status = 404, description = "User not found in caller's scope")
    ),
    tag = "Shifts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn assign_shift(
    State(state): State<AppState>,
    RequireManageShifts(auth_user): RequireManageShifts,
    ValidatedJson(dto): ValidatedJson<AssignShiftDto>,
) -> Result<(StatusCode, Json<ShiftAssignment>), AppError> {
    let assignment = ShiftService::assign_shift(&state.store, &auth_user.principal(), dto).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// List the shift change requests visible to the caller
#[utoipa::path(
    get,
    path = "/api/shifts/requests",
    responses(
        (status = 200, description = "Visible shift change requests", body = Vec<ShiftChangeRequest>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Shifts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_shift_requests(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<ShiftChangeRequest>>, AppError> {
    let requests = ShiftService::get_shift_requests(&state.store, &auth_user.principal()).await?;
    Ok(Json(requests))
}

/// List pending shift change requests the caller may decide
#[utoipa::path(
    get,
    path = "/api/shifts/requests/approvals",
    responses(
        (status = 200, description = "Pending requests awaiting the caller", body = Vec<ShiftChangeRequest>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Shifts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_shift_request_approvals(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<ShiftChangeRequest>>, AppError> {
    let requests =
        ShiftService::get_shift_request_approvals(&state.store, &auth_user.principal()).await?;
    Ok(Json(requests))
}

/// Request a shift swap
#[utoipa::path(
    post,
    path = "/api/shifts/requests",
    request_body = CreateShiftRequestDto,
    responses(
        (status = 201, description = "Request submitted", body = ShiftChangeRequest),
        (status = 400, description = "Requested shift equals current shift"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Validation error")
    ),
    tag = "Shifts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_shift_request(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateShiftRequestDto>,
) -> Result<(StatusCode, Json<ShiftChangeRequest>), AppError> {
    let request =
        ShiftService::create_shift_request(&state.store, &auth_user.principal(), dto).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Approve or reject a shift change request
#[utoipa::path(
    patch,
    path = "/api/shifts/requests/{id}",
    params(
        ("id" = String, Path, description = "Shift change request ID")
    ),
    request_body = DecisionDto,
    responses(
        (status = 200, description = "Decision recorded", body = ShiftChangeRequest),
        (status = 400, description = "Status must be approved or rejected"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller may not decide this request"),
        (status = 404, description = "Request not found"),
        (status = 409, description = "Request already decided")
    ),
    tag = "Shifts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn decide_shift_request(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<ShiftRequestId>,
    Json(dto): Json<DecisionDto>,
) -> Result<Json<ShiftChangeRequest>, AppError> {
    let request =
        ShiftService::decide_shift_request(&state.store, &auth_user.principal(), &id, dto.status)
            .await?;
    Ok(Json(request))
}
