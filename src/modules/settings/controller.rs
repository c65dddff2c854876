use axum::{Json, extract::State};
use tracing::instrument;

use easwipe_core::AppError;
use easwipe_models::roles::PERMISSION_CATALOGUE;
use easwipe_models::{
    AppConfig, AppPermission, EmailConfig, IdFieldConfig, RolePermissionConfig, SecurityConfig,
};

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdmin;
use crate::modules::settings::service::SettingsService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Get the role permission table
#[utoipa::path(
    get,
    path = "/api/settings/role-permissions",
    responses(
        (status = 200, description = "Permissions per role", body = Vec<RolePermissionConfig>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Settings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_role_permissions(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Json<Vec<RolePermissionConfig>> {
    Json(SettingsService::get_role_permissions(&state.store).await)
}

/// Replace the role permission table (Admin only)
#[utoipa::path(
    put,
    path = "/api/settings/role-permissions",
    request_body = Vec<RolePermissionConfig>,
    responses(
        (status = 200, description = "Table replaced", body = Vec<RolePermissionConfig>),
        (status = 400, description = "Unknown or duplicate role"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only")
    ),
    tag = "Settings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin, configs))]
pub async fn update_role_permissions(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Json(configs): Json<Vec<RolePermissionConfig>>,
) -> Result<Json<Vec<RolePermissionConfig>>, AppError> {
    let configs = SettingsService::update_role_permissions(&state.store, configs).await?;
    Ok(Json(configs))
}

/// Permission catalogue shown on the roles screen
#[utoipa::path(
    get,
    path = "/api/settings/permissions",
    responses(
        (status = 200, description = "Every toggleable permission", body = Vec<AppPermission>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Settings",
    security(("bearer_auth" = []))
)]
pub async fn get_permission_catalogue(_auth_user: AuthUser) -> Json<Vec<AppPermission>> {
    Json(PERMISSION_CATALOGUE.to_vec())
}

/// Get the organisation settings (Admin only)
#[utoipa::path(
    get,
    path = "/api/settings/app",
    responses(
        (status = 200, description = "Organisation settings", body = AppConfig),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only")
    ),
    tag = "Settings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin))]
pub async fn get_app_config(State(state): State<AppState>, _admin: RequireAdmin) -> Json<AppConfig> {
    Json(SettingsService::get_settings(&state.store).await.app.clone())
}

/// Replace the organisation settings (Admin only)
#[utoipa::path(
    put,
    path = "/api/settings/app",
    request_body = AppConfig,
    responses(
        (status = 200, description = "Settings saved", body = AppConfig),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only"),
        (status = 422, description = "Validation error")
    ),
    tag = "Settings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin, config))]
pub async fn update_app_config(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ValidatedJson(config): ValidatedJson<AppConfig>,
) -> Result<Json<AppConfig>, AppError> {
    let config = SettingsService::update_app_config(&state.store, config).await?;
    Ok(Json(config))
}

/// Get the mail settings (Admin only)
#[utoipa::path(
    get,
    path = "/api/settings/email",
    responses(
        (status = 200, description = "Mail settings", body = EmailConfig),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only")
    ),
    tag = "Settings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin))]
pub async fn get_email_config(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Json<EmailConfig> {
    Json(SettingsService::get_settings(&state.store).await.email.clone())
}

/// Replace the mail settings (Admin only)
#[utoipa::path(
    put,
    path = "/api/settings/email",
    request_body = EmailConfig,
    responses(
        (status = 200, description = "Settings saved", body = EmailConfig),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only"),
        (status = 422, description = "Validation error")
    ),
    tag = "Settings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin, config))]
pub async fn update_email_config(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ValidatedJson(config): ValidatedJson<EmailConfig>,
) -> Result<Json<EmailConfig>, AppError> {
    let config = SettingsService::update_email_config(&state.store, config).await?;
    Ok(Json(config))
}

/// Get the security policy (Admin only)
#[utoipa::path(
    get,
    path = "/api/settings/security",
    responses(
        (status = 200, description = "Security policy", body = SecurityConfig),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only")
    ),
    tag = "Settings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin))]
pub async fn get_security_config(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Json<SecurityConfig> {
    Json(SettingsService::get_settings(&state.store).await.security.clone())
}

/// Replace the security policy (Admin only)
#[utoipa::path(
    put,
    path = "/api/settings/security",
    request_body = SecurityConfig,
    responses(
        (status = 200, description = "Settings saved", body = SecurityConfig),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only"),
        (status = 422, description = "Validation error")
    ),
    tag = "Settings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin, config))]
pub async fn update_security_config(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ValidatedJson(config): ValidatedJson<SecurityConfig>,
) -> Result<Json<SecurityConfig>, AppError> {
    let config = SettingsService::update_security_config(&state.store, config).await?;
    Ok(Json(config))
}

/// Get the ID card field configuration (Admin only)
#[utoipa::path(
    get,
    path = "/api/settings/id-card",
    responses(
        (status = 200, description = "ID card fields", body = IdFieldConfig),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only")
    ),
    tag = "Settings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin))]
pub async fn get_id_card_config(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Json<IdFieldConfig> {
    Json(SettingsService::get_settings(&state.store).await.id_card.clone())
}

/// Replace the ID card field configuration (Admin only)
#[utoipa::path(
    put,
    path = "/api/settings/id-card",
    request_body = IdFieldConfig,
    responses(
        (status = 200, description = "Settings saved", body = IdFieldConfig),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only")
    ),
    tag = "Settings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin, config))]
pub async fn update_id_card_config(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Json(config): Json<IdFieldConfig>,
) -> Result<Json<IdFieldConfig>, AppError> {
    let config = SettingsService::update_id_card_config(&state.store, config).await?;
    Ok(Json(config))
}
