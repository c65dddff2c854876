use axum::{Router, routing::get, routing::patch};

use crate::state::AppState;

use super::controller::{
    assign_shift, create_shift, create_shift_request, decide_shift_request, get_roster,
    get_shift_request_approvals, get_shift_requests, get_shifts,
};

pub fn init_shifts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_shifts).post(create_shift))
        .route("/roster", get(get_roster).post(assign_shift))
        .route(
            "/requests",
            get(get_shift_requests).post(create_shift_request),
        )
        .route("/requests/approvals", get(get_shift_request_approvals))
        .route("/requests/{id}", patch(decide_shift_request))
}
