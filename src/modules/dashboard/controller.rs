use axum::{Json, extract::State};
use tracing::instrument;

use easwipe_core::AppError;
use easwipe_models::DashboardSummary;

use crate::middleware::auth::AuthUser;
use crate::modules::dashboard::service::DashboardService;
use crate::state::AppState;

/// Summary counts over the records visible to the caller
#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardSummary),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Dashboard",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_dashboard(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<DashboardSummary>, AppError> {
    let summary = DashboardService::get_summary(&state.store, &auth_user.principal()).await?;
    Ok(Json(summary))
}
