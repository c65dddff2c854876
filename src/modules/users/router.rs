use axum::{Router, routing::get, routing::put};

use crate::state::AppState;

use super::controller::{create_user, delete_user, get_profile, get_users, update_user};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users).post(create_user))
        .route("/profile", get(get_profile))
        .route("/{id}", put(update_user).delete(delete_user))
}
