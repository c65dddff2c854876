use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use easwipe_core::AppError;
use easwipe_models::{AttendanceEntry, MarkAttendanceDto};

use crate::middleware::auth::AuthUser;
use crate::modules::attendance::service::AttendanceService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List the attendance entries visible to the caller
#[utoipa::path(
    get,
    path = "/api/attendance",
    responses(
        (status = 200, description = "Visible attendance entries, newest first", body = Vec<AttendanceEntry>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Attendance",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_attendance(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<AttendanceEntry>>, AppError> {
    let entries = AttendanceService::get_attendance(&state.store, &auth_user.principal()).await?;
    Ok(Json(entries))
}

/// Mark attendance for yourself or, with `mark_attendance`, for a user in your department
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendanceDto,
    responses(
        (status = 201, description = "Attendance recorded", body = AttendanceEntry),
        (status = 400, description = "Invalid entry type"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing mark_attendance permission"),
        (status = 404, description = "User not found in caller's scope")
    ),
    tag = "Attendance",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn mark_attendance(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<MarkAttendanceDto>,
) -> Result<(StatusCode, Json<AttendanceEntry>), AppError> {
    let entry =
        AttendanceService::mark_attendance(&state.store, &auth_user.principal(), dto).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}
