use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{forgot_password, login_user};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_user))
        .route("/forgot-password", post(forgot_password))
}
