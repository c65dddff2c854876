use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use easwipe_core::AppError;
use easwipe_models::{CreateNoticeDto, Notice, NoticeId};

use crate::middleware::auth::{AuthUser, RequirePostNotice};
use crate::modules::notices::service::NoticeService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List notices, newest first
#[utoipa::path(
    get,
    path = "/api/notices",
    responses(
        (status = 200, description = "All notices", body = Vec<Notice>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Notices",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_notices(State(state): State<AppState>, _auth_user: AuthUser) -> Json<Vec<Notice>> {
    Json(NoticeService::get_notices(&state.store).await)
}

/// Post a notice (requires `post_notice`)
#[utoipa::path(
    post,
    path = "/api/notices",
    request_body = CreateNoticeDto,
    responses(
        (status = 201, description = "Notice posted", body = Notice),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing post_notice permission"),
        (status = 422, description = "Validation error")
    ),
    tag = "Notices",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_notice(
    State(state): State<AppState>,
    RequirePostNotice(auth_user): RequirePostNotice,
    ValidatedJson(dto): ValidatedJson<CreateNoticeDto>,
) -> Result<(StatusCode, Json<Notice>), AppError> {
    let notice = NoticeService::create_notice(&state.store, &auth_user.principal(), dto).await?;
    Ok((StatusCode::CREATED, Json(notice)))
}

/// Mark a notice as read by the caller
#[utoipa::path(
    post,
    path = "/api/notices/{id}/read",
    params(
        ("id" = String, Path, description = "Notice ID")
    ),
    responses(
        (status = 200, description = "Notice marked read", body = Notice),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Notice not found")
    ),
    tag = "Notices",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn mark_notice_read(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<NoticeId>,
) -> Result<Json<Notice>, AppError> {
    let notice = NoticeService::mark_read(&state.store, &auth_user.principal(), &id).await?;
    Ok(Json(notice))
}
