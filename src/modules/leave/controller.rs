use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use easwipe_core::AppError;
use easwipe_models::{ApplyLeaveDto, DecisionDto, LeaveBalance, LeaveRequest, LeaveRequestId};

use crate::middleware::auth::AuthUser;
use crate::modules::leave::service::LeaveService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List the leave requests visible to the caller
#[utoipa::path(
    get,
    path = "/api/leave",
    responses(
        (status = 200, description = "Visible leave requests", body = Vec<LeaveRequest>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Leave",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_leave_requests(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<LeaveRequest>>, AppError> {
    let requests = LeaveService::get_leave_requests(&state.store, &auth_user.principal()).await?;
    Ok(Json(requests))
}

/// List the caller's own leave requests
#[utoipa::path(
    get,
    path = "/api/leave/mine",
    responses(
        (status = 200, description = "Own leave requests", body = Vec<LeaveRequest>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Leave",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_my_leave_requests(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<LeaveRequest>>, AppError> {
    let requests =
        LeaveService::get_my_leave_requests(&state.store, &auth_user.principal()).await?;
    Ok(Json(requests))
}

/// List pending leave requests the caller may decide
#[utoipa::path(
    get,
    path = "/api/leave/approvals",
    responses(
        (status = 200, description = "Pending requests awaiting the caller", body = Vec<LeaveRequest>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Leave",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_leave_approvals(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<LeaveRequest>>, AppError> {
    let requests = LeaveService::get_leave_approvals(&state.store, &auth_user.principal()).await?;
    Ok(Json(requests))
}

/// Apply for leave
#[utoipa::path(
    post,
    path = "/api/leave",
    request_body = ApplyLeaveDto,
    responses(
        (status = 201, description = "Leave request submitted", body = LeaveRequest),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "End date precedes start date or reason missing")
    ),
    tag = "Leave",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn apply_leave(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<ApplyLeaveDto>,
) -> Result<(StatusCode, Json<LeaveRequest>), AppError> {
    let request = LeaveService::apply_leave(&state.store, &auth_user.principal(), dto).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Approve or reject a leave request
#[utoipa::path(
    patch,
    path = "/api/leave/{id}",
    params(
        ("id" = String, Path, description = "Leave request ID")
    ),
    request_body = DecisionDto,
    responses(
        (status = 200, description = "Decision recorded", body = LeaveRequest),
        (status = 400, description = "Status must be approved or rejected"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller may not decide this request"),
        (status = 404, description = "Leave request not found"),
        (status = 409, description = "Request already decided")
    ),
    tag = "Leave",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn decide_leave(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<LeaveRequestId>,
    Json(dto): Json<DecisionDto>,
) -> Result<Json<LeaveRequest>, AppError> {
    let request =
        LeaveService::decide_leave(&state.store, &auth_user.principal(), &id, dto.status).await?;
    Ok(Json(request))
}

/// Leave allowance and approved days used, per leave type
#[utoipa::path(
    get,
    path = "/api/leave/balances",
    responses(
        (status = 200, description = "Caller's leave balances", body = Vec<LeaveBalance>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Leave",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_leave_balances(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<LeaveBalance>>, AppError> {
    let balances = LeaveService::get_leave_balances(&state.store, &auth_user.principal()).await?;
    Ok(Json(balances))
}
