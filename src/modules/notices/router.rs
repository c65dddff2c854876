use axum::{Router, routing::get, routing::post};

use crate::state::AppState;

use super::controller::{create_notice, get_notices, mark_notice_read};

pub fn init_notices_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_notices).post(create_notice))
        .route("/{id}/read", post(mark_notice_read))
}
