use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    get_app_config, get_email_config, get_id_card_config, get_permission_catalogue,
    get_role_permissions, get_security_config, update_app_config, update_email_config,
    update_id_card_config, update_role_permissions, update_security_config,
};

pub fn init_settings_router() -> Router<AppState> {
    Router::new()
        .route(
            "/role-permissions",
            get(get_role_permissions).put(update_role_permissions),
        )
        .route("/permissions", get(get_permission_catalogue))
        .route("/app", get(get_app_config).put(update_app_config))
        .route("/email", get(get_email_config).put(update_email_config))
        .route(
            "/security",
            get(get_security_config).put(update_security_config),
        )
        .route(
            "/id-card",
            get(get_id_card_config).put(update_id_card_config),
        )
}
